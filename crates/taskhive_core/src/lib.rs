//! Core domain logic for TaskHive, a task/notes organizer.
//! This crate is the single source of truth for business invariants.

pub mod config;
pub mod feed;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use config::RemoteConfig;
pub use feed::{build_feed, filter_tasks, FeedItem, FeedQuery, StatusFilter};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::{
    Folder, FolderDraft, Note, NoteDraft, Priority, RecordId, Session, Task, TaskDraft,
    TaskStatus, ValidationError,
};
pub use service::{FolderService, NoteService, TaskService};
pub use store::{MemoryStore, Record, RecordStore, RemoteStore, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
