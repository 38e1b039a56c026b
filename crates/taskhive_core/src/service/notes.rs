//! Note use-case service.
//!
//! # Responsibility
//! - Provide note CRUD with full-content replacement semantics.
//!
//! # Invariants
//! - `update` replaces title/content/folder wholesale; `created_at`
//!   survives from the existing record.

use crate::model::{Note, NoteDraft, RecordId};
use crate::store::{RecordStore, StoreResult};
use chrono::Utc;

/// Note service facade over a store variant.
#[derive(Debug, Clone)]
pub struct NoteService<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> NoteService<S> {
    /// Creates a service over the provided store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns all notes.
    pub async fn get_all(&self) -> StoreResult<Vec<Note>> {
        self.store.get_all().await
    }

    /// Returns one note by identity.
    pub async fn get_by_id(&self, id: RecordId) -> StoreResult<Note> {
        self.store.get_by_id(id).await
    }

    /// Creates a note from a draft, stamping both timestamps with now.
    pub async fn create(&self, draft: NoteDraft) -> StoreResult<Note> {
        draft.validate()?;
        let now = Utc::now();
        let note = Note {
            id: 0,
            title: draft.title,
            content: draft.content,
            folder_id: draft.folder_id,
            created_at: now,
            updated_at: now,
        };
        self.store.create(note).await
    }

    /// Replaces every mutable field of the note with the draft values.
    pub async fn update(&self, id: RecordId, draft: NoteDraft) -> StoreResult<Note> {
        draft.validate()?;
        let existing = self.store.get_by_id::<Note>(id).await?;
        let note = Note {
            id,
            title: draft.title,
            content: draft.content,
            folder_id: draft.folder_id,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };
        self.store.update(note).await
    }

    /// Removes one note by identity.
    pub async fn delete(&self, id: RecordId) -> StoreResult<()> {
        self.store.delete::<Note>(id).await
    }
}
