//! Entity use-case services.
//!
//! # Responsibility
//! - Provide typed CRUD entry points over any store variant.
//! - Own timestamping, input validation and entity-specific defaults.
//!
//! # Invariants
//! - Services never bypass draft validation before a store mutation.
//! - Services stay storage-agnostic: the same code runs against the
//!   in-memory and the remote variant.

pub mod folders;
pub mod notes;
pub mod tasks;

pub use folders::FolderService;
pub use notes::NoteService;
pub use tasks::TaskService;
