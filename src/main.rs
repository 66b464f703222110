//! Notekeeper - in-memory note-taking server
//!
//! Entry point: loads configuration, sets up logging and serves the notes API.

use clap::{Parser, Subcommand};
use notekeeper_core::{error::Result, ApiServer, NotesConfig};
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "notekeeper")]
#[command(about = "In-memory note-taking service with a JSON API", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Set log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Configuration file (TOML, YAML or JSON)
    #[arg(short, long, env = "NOTEKEEPER_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve {
        /// Server address (overrides config)
        #[arg(long)]
        addr: Option<String>,

        /// Directory with the browser client
        #[arg(long)]
        static_dir: Option<PathBuf>,

        /// Disable the permissive CORS layer
        #[arg(long)]
        no_cors: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = match cli.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::new(format!(
        "notekeeper={lvl},notekeeper_core={lvl},tower_http={lvl}",
        lvl = level.as_str().to_lowercase()
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    debug!("Notekeeper v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut settings = NotesConfig::load(cli.config.as_deref())?;

    // CLI flags override file and environment
    if let Some(Commands::Serve {
        addr,
        static_dir,
        no_cors,
    }) = cli.command
    {
        if let Some(addr) = addr {
            settings.addr = addr;
        }
        if static_dir.is_some() {
            settings.static_dir = static_dir;
        }
        if no_cors {
            settings.cors = false;
        }
    }

    debug!("Effective config: {:?}", settings);
    let server = ApiServer::new(settings.to_server_config()?);
    server.serve().await?;

    Ok(())
}
