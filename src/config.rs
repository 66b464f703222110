//! Layered configuration for the notekeeper server
//!
//! Sources, lowest priority first: built-in defaults, an optional config file,
//! then `NOTEKEEPER_*` environment variables. CLI flags are applied on top by
//! the binary.

use crate::api::ApiServerConfig;
use crate::error::{NoteError, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable prefix
const ENV_PREFIX: &str = "NOTEKEEPER";

/// Default listen address
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Default browser client directory, relative to the working directory
pub const DEFAULT_STATIC_DIR: &str = "public";

/// Raw server settings as read from config sources
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NotesConfig {
    /// Listen address, `host:port`
    pub addr: String,
    /// Browser client directory
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
    /// Permissive CORS
    pub cors: bool,
}

impl NotesConfig {
    /// Load defaults, then `path` (if any), then the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("addr", DEFAULT_ADDR)?
            .set_default("static_dir", DEFAULT_STATIC_DIR)?
            .set_default("cors", true)?;

        if let Some(path) = path {
            debug!("Loading config file {}", path.display());
            builder = builder.add_source(File::from(path));
        }

        let config = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Resolve into a server configuration
    pub fn to_server_config(&self) -> Result<ApiServerConfig> {
        let addr: SocketAddr = self.addr.parse().map_err(|e| {
            NoteError::Config(config::ConfigError::Message(format!(
                "Invalid address '{}': {}",
                self.addr, e
            )))
        })?;

        Ok(ApiServerConfig {
            addr,
            static_dir: self.static_dir.clone(),
            cors: self.cors,
        })
    }
}
