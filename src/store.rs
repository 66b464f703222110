//! In-memory note store
//!
//! Holds every live note in insertion order together with the id counter.
//! Both sit behind one lock so id allocation and insertion happen atomically.

use crate::error::{NoteError, Result};
use crate::types::{Note, NoteDraft, NoteId};
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

struct Inner {
    notes: Vec<Note>,
    /// Next id to hand out; only ever increases
    next_id: u64,
}

impl Inner {
    fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|n| n.id == id)
    }
}

/// Authoritative collection of notes
pub struct NoteStore {
    inner: RwLock<Inner>,
}

impl NoteStore {
    /// Create an empty store; the first note gets id 1
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                notes: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// All notes in creation order
    pub async fn list(&self) -> Vec<Note> {
        let inner = self.inner.read().await;
        inner.notes.clone()
    }

    /// Get note by id
    pub async fn get(&self, id: NoteId) -> Result<Note> {
        let inner = self.inner.read().await;
        inner
            .position(id)
            .map(|idx| inner.notes[idx].clone())
            .ok_or_else(|| {
                debug!("Note {} not found", id);
                NoteError::NotFound(id)
            })
    }

    /// Store a new note
    pub async fn create(&self, draft: NoteDraft) -> Result<Note> {
        if !draft.is_complete() {
            return Err(NoteError::InvalidInput);
        }

        let mut inner = self.inner.write().await;
        let id = NoteId(inner.next_id);
        inner.next_id += 1;

        let note = Note {
            id,
            title: draft.title,
            content: draft.content,
            assigned_to: draft.assigned_to,
            created_at: Utc::now(),
        };
        inner.notes.push(note.clone());

        debug!("Created note {}", id);
        Ok(note)
    }

    /// Replace title, content and assignee of an existing note
    ///
    /// An unknown id is reported before an incomplete draft.
    pub async fn update(&self, id: NoteId, draft: NoteDraft) -> Result<Note> {
        let mut inner = self.inner.write().await;
        let idx = inner.position(id).ok_or(NoteError::NotFound(id))?;

        if !draft.is_complete() {
            return Err(NoteError::InvalidInput);
        }

        let note = &mut inner.notes[idx];
        note.title = draft.title;
        note.content = draft.content;
        note.assigned_to = draft.assigned_to;

        debug!("Updated note {}", id);
        Ok(note.clone())
    }

    /// Remove a note; its id is retired for good
    pub async fn delete(&self, id: NoteId) -> Result<()> {
        let mut inner = self.inner.write().await;
        let idx = inner.position(id).ok_or(NoteError::NotFound(id))?;
        inner.notes.remove(idx);

        debug!("Deleted note {}", id);
        Ok(())
    }

    /// Number of live notes
    pub async fn len(&self) -> usize {
        self.inner.read().await.notes.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}
