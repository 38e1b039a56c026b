//! Record store contracts shared by both variants.
//!
//! # Responsibility
//! - Define the async CRUD contract every store variant implements.
//! - Define the store error taxonomy used across services.
//!
//! # Invariants
//! - Identity is assigned by the store on `create` and never reused.
//! - `update`/`delete` on a missing identity fail with `NotFound`.
//! - No store error is fatal; callers surface them and stay recoverable.

use crate::model::{RecordId, ValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod record;
pub mod remote;

pub use memory::MemoryStore;
pub use record::{OrderSpec, Record, SortDirection};
pub use remote::RemoteStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error taxonomy for store operations.
#[derive(Debug)]
pub enum StoreError {
    /// No record with the given identity exists in the table.
    NotFound {
        table: &'static str,
        id: RecordId,
    },
    /// The backing service rejected the operation (`success = false` or a
    /// failed per-record result).
    Service { message: String },
    /// Network or protocol failure while reaching the remote service.
    Transport(reqwest::Error),
    /// A persisted row could not be decoded into its record type.
    InvalidRecord {
        table: &'static str,
        message: String,
    },
    /// User input was rejected before any mutation was attempted.
    Validation(ValidationError),
}

impl StoreError {
    /// True when the error is the missing-identity case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { table, id } => write!(f, "{table} not found: {id}"),
            Self::Service { message } => write!(f, "service error: {message}"),
            Self::Transport(err) => write!(f, "transport error: {err}"),
            Self::InvalidRecord { table, message } => {
                write!(f, "invalid persisted {table} row: {message}")
            }
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

/// Async CRUD contract over typed records.
///
/// Both variants implement the same five operations the source data
/// services exposed: `getAll`, `getById`, `create`, `update`, `delete`.
#[async_trait::async_trait]
pub trait RecordStore: Send + Sync {
    /// Returns every record in the table.
    async fn get_all<R: Record>(&self) -> StoreResult<Vec<R>>;

    /// Returns one record by identity, or `NotFound`.
    async fn get_by_id<R: Record>(&self, id: RecordId) -> StoreResult<R>;

    /// Persists a new record and returns it with its assigned identity.
    async fn create<R: Record>(&self, record: R) -> StoreResult<R>;

    /// Replaces the record with the same identity, or fails with `NotFound`.
    async fn update<R: Record>(&self, record: R) -> StoreResult<R>;

    /// Removes exactly one record by identity, or fails with `NotFound`.
    async fn delete<R: Record>(&self, id: RecordId) -> StoreResult<()>;
}
