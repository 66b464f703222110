//! Core data types for the notekeeper service
//!
//! A [`Note`] is what the store keeps and what the API returns. A [`NoteDraft`]
//! carries the mutable fields into `create`/`update`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Numeric note identifier
///
/// Allocated by the store starting at 1 and never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub u64);

impl NoteId {
    /// Parse an id from a path segment
    ///
    /// Returns `None` for anything that is not a positive integer; such a
    /// segment can never address an existing note.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().parse::<u64>() {
            Ok(0) | Err(_) => None,
            Ok(n) => Some(Self(n)),
        }
    }
}

impl std::fmt::Display for NoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Store-assigned identifier (immutable)
    pub id: NoteId,

    /// Non-empty title
    pub title: String,

    /// Non-empty body text
    pub content: String,

    /// Assignee; empty string means unassigned
    pub assigned_to: String,

    /// Creation time (immutable)
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Whether the note has an assignee
    pub fn is_assigned(&self) -> bool {
        !self.assigned_to.is_empty()
    }
}

/// Mutable fields of a note, as handed to the store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub assigned_to: String,
}

impl NoteDraft {
    /// Build a draft; a missing assignee becomes the empty string
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        assigned_to: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            assigned_to: assigned_to.unwrap_or_default(),
        }
    }

    /// Title and content both present
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }
}

/// ISO-8601 timestamps with millisecond precision and a `Z` suffix
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_note_id_parse() {
        assert_eq!(NoteId::parse("42"), Some(NoteId(42)));
        assert_eq!(NoteId::parse("0"), None);
        assert_eq!(NoteId::parse("-1"), None);
        assert_eq!(NoteId::parse("abc"), None);
        assert_eq!(NoteId::parse("1abc"), None);
        assert_eq!(NoteId::parse("1.0"), None);
        assert_eq!(NoteId::parse(""), None);
    }

    #[test]
    fn test_note_json_shape() {
        let note = Note {
            id: NoteId(3),
            title: "Buy milk".to_string(),
            content: "2%".to_string(),
            assigned_to: String::new(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap(),
        };

        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "title": "Buy milk",
                "content": "2%",
                "assignedTo": "",
                "createdAt": "2024-05-06T07:08:09.000Z",
            })
        );

        let back: Note = serde_json::from_value(json).unwrap();
        assert_eq!(back, note);
    }

    #[test]
    fn test_draft_defaults_assignee() {
        let draft = NoteDraft::new("t", "c", None);
        assert_eq!(draft.assigned_to, "");
        assert!(draft.is_complete());

        assert!(!NoteDraft::new("  ", "c", None).is_complete());
        assert!(!NoteDraft::new("t", "", Some("ana".to_string())).is_complete());
    }
}
