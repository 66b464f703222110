//! Notekeeper - In-Memory Note-Taking Service
//!
//! Keeps notes in process memory and exposes them over a small JSON API:
//! - Ordered in-memory store with ids that are never reused
//! - CRUD endpoints under `/api/notes`
//! - Optional static hosting of the browser client
//!
//! # Architecture
//!
//! - **Types**: `Note`, `NoteId`, `NoteDraft`
//! - **Store**: `NoteStore`, the single authority for notes and id allocation
//! - **API**: axum router translating HTTP requests into store operations
//! - **Config**: layered server settings (defaults, file, environment)
//!
//! # Example
//!
//! ```ignore
//! use notekeeper_core::{NoteDraft, NoteStore};
//!
//! #[tokio::main]
//! async fn main() -> notekeeper_core::Result<()> {
//!     let store = NoteStore::new();
//!     let note = store.create(NoteDraft::new("Buy milk", "2%", None)).await?;
//!     assert_eq!(store.get(note.id).await?.title, "Buy milk");
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use api::{ApiServer, ApiServerConfig};
pub use config::NotesConfig;
pub use error::{NoteError, Result};
pub use store::NoteStore;
pub use types::{Note, NoteDraft, NoteId};
