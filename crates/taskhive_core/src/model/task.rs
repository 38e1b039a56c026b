//! Task domain model.
//!
//! # Responsibility
//! - Define the task record shape and its status/priority vocabularies.
//! - Provide the draft type used by create/update service operations.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `status` and `priority` serialize to the wire vocabulary
//!   (`todo|in-progress|completed`, `low|medium|high`).

use crate::model::{require_text, RecordId, ValidationError};
use crate::store::record::{OrderSpec, Record, SortDirection};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Created but not started.
    #[default]
    Todo,
    /// Work is in progress.
    InProgress,
    /// Completed successfully.
    Completed,
}

impl TaskStatus {
    /// Wire/display name for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

/// Task importance used for card badges and quick-add defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Wire/display name for this priority.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Canonical task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable identity assigned by the store.
    #[serde(rename = "Id")]
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: Priority,
    /// Optional deadline shown on cards; not validated against `created_at`.
    pub due_date: Option<DateTime<Utc>>,
    /// Optional reference to a folder. Orphaned references are accepted;
    /// items whose folder was deleted render as unfiled.
    pub folder_id: Option<RecordId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Task {
    const TABLE: &'static str = "task";
    const FIELDS: &'static [&'static str] = &[
        "title",
        "description",
        "status",
        "priority",
        "dueDate",
        "folderId",
        "createdAt",
        "updatedAt",
    ];
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

/// User-submitted task fields for create and full-replace update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: Priority,
    pub due_date: Option<DateTime<Utc>>,
    pub folder_id: Option<RecordId>,
}

impl TaskDraft {
    /// Creates a draft with quick-add defaults (todo, medium priority).
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Rejects drafts missing required fields.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text(&self.title, "task", "title")
    }
}
