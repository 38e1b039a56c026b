//! Note domain model.
//!
//! # Responsibility
//! - Define the unified note record shape and its draft type.
//!
//! # Invariants
//! - Notes carry title/content/folder only; task-style metadata
//!   (status, priority, due date) belongs to tasks exclusively.

use crate::model::{require_text, RecordId, ValidationError};
use crate::store::record::{OrderSpec, Record, SortDirection};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Canonical note record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Stable identity assigned by the store.
    #[serde(rename = "Id")]
    pub id: RecordId,
    pub title: String,
    /// Free-form body; searched together with task descriptions.
    pub content: String,
    /// Optional reference to a folder. Orphaned references are accepted.
    pub folder_id: Option<RecordId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Note {
    const TABLE: &'static str = "note";
    const FIELDS: &'static [&'static str] =
        &["title", "content", "folderId", "createdAt", "updatedAt"];
    const ORDER_BY: OrderSpec = OrderSpec {
        field: "createdAt",
        direction: SortDirection::Descending,
    };

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
}

/// User-submitted note fields for create and full-replace update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub folder_id: Option<RecordId>,
}

impl NoteDraft {
    /// Creates a draft with an empty body.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Rejects drafts missing required fields.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text(&self.title, "note", "title")
    }
}

#[cfg(test)]
mod tests {
    use super::{Note, NoteDraft};
    use chrono::{TimeZone, Utc};

    #[test]
    fn note_round_trips_through_wire_shape() {
        let note = Note {
            id: 3,
            title: "Groceries".to_string(),
            content: "remember milk".to_string(),
            folder_id: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        };

        let value = serde_json::to_value(&note).unwrap();
        assert_eq!(value["Id"], serde_json::json!(3));
        assert_eq!(value["folderId"], serde_json::Value::Null);

        let decoded: Note = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, note);
    }

    #[test]
    fn blank_title_fails_validation() {
        assert!(NoteDraft::new("").validate().is_err());
    }
}
