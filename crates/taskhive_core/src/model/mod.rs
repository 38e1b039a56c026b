//! Domain model for tasks, notes and folders.
//!
//! # Responsibility
//! - Define the canonical data shapes shared by both store variants.
//! - Provide draft types and validation for user-submitted input.
//!
//! # Invariants
//! - Record identity (`Id`) is immutable after creation.
//! - Serialized field names match the record API wire format (camelCase,
//!   capital `Id`).
//! - Note schema is the unified one: no status/priority/dueDate on notes.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod folder;
pub mod note;
pub mod session;
pub mod task;

pub use folder::{Folder, FolderDraft};
pub use note::{Note, NoteDraft};
pub use session::Session;
pub use task::{Priority, Task, TaskDraft, TaskStatus};

/// Stable integer identity assigned by the backing store at creation.
pub type RecordId = i64;

/// Input validation error surfaced before any store mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is missing or blank.
    MissingField {
        entity: &'static str,
        field: &'static str,
    },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { entity, field } => {
                write!(f, "{entity} requires a non-empty `{field}`")
            }
        }
    }
}

impl Error for ValidationError {}

/// Returns `Err` when `value` is blank after trimming.
pub(crate) fn require_text(
    value: &str,
    entity: &'static str,
    field: &'static str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField { entity, field });
    }
    Ok(())
}
