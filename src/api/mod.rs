//! HTTP API for the notes collection
//!
//! Provides:
//! - CRUD endpoints under `/api/notes`
//! - Health check
//! - Optional static hosting of the browser client

pub mod dto;
pub mod error;
pub mod handlers;
pub mod server;

pub use dto::NoteRequest;
pub use error::ApiError;
pub use server::{build_router, ApiServer, ApiServerConfig, AppState};
