//! Request bodies accepted by the notes API

use crate::types::NoteDraft;
use serde::Deserialize;

/// Body of `POST /api/notes` and `PUT /api/notes/:id`
///
/// Every field is optional here; presence is enforced by the store.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<String>,
}

impl NoteRequest {
    /// Trim surrounding whitespace and build a draft
    pub fn into_draft(self) -> NoteDraft {
        let trim = |s: Option<String>| s.map(|s| s.trim().to_string());
        NoteDraft::new(
            trim(self.title).unwrap_or_default(),
            trim(self.content).unwrap_or_default(),
            trim(self.assigned_to),
        )
    }
}
