//! Folder domain model.
//!
//! # Responsibility
//! - Define the folder record used for sidebar grouping.
//!
//! # Invariants
//! - `order` controls sidebar position, ascending; the folder service keeps
//!   it unique by assigning `max + 1` when a draft leaves it unset.
//! - Deleting a folder does not cascade to its items (accepted behavior).

use crate::model::{require_text, RecordId, ValidationError};
use crate::store::record::{OrderSpec, Record, SortDirection};
use serde::{Deserialize, Serialize};

/// Canonical folder record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Stable identity assigned by the store.
    #[serde(rename = "Id")]
    pub id: RecordId,
    pub name: String,
    /// Display color token (e.g. `#5B4CFF`).
    pub color: String,
    /// Display icon name understood by the presentation layer.
    pub icon: String,
    /// Sidebar position, ascending.
    pub order: i64,
}

impl Record for Folder {
    const TABLE: &'static str = "folder";
    const FIELDS: &'static [&'static str] = &["name", "color", "icon", "order"];
    const ORDER_BY: OrderSpec = OrderSpec {
        field: "order",
        direction: SortDirection::Ascending,
    };

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
}

/// User-submitted folder fields for create and full-replace update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderDraft {
    pub name: String,
    pub color: String,
    pub icon: String,
    /// Explicit sidebar position; `None` lets the service append at the end.
    pub order: Option<i64>,
}

impl FolderDraft {
    /// Creates a draft with no explicit position.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Rejects drafts missing required fields.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text(&self.name, "folder", "name")
    }
}

#[cfg(test)]
mod tests {
    use super::FolderDraft;

    #[test]
    fn blank_name_fails_validation() {
        assert!(FolderDraft::new(" ").validate().is_err());
        assert!(FolderDraft::new("Work").validate().is_ok());
    }
}
