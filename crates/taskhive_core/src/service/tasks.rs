//! Task use-case service.
//!
//! # Responsibility
//! - Provide task CRUD plus the card status toggle.
//! - Stamp creation/update timestamps and apply quick-add defaults.
//!
//! # Invariants
//! - `update` fully replaces mutable fields; identity and `created_at`
//!   survive from the existing record.
//! - `set_status` changes only the status and `updated_at`.

use crate::model::{RecordId, Task, TaskDraft, TaskStatus};
use crate::store::{RecordStore, StoreResult};
use chrono::Utc;

/// Task service facade over a store variant.
#[derive(Debug, Clone)]
pub struct TaskService<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> TaskService<S> {
    /// Creates a service over the provided store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns all tasks.
    pub async fn get_all(&self) -> StoreResult<Vec<Task>> {
        self.store.get_all().await
    }

    /// Returns one task by identity.
    pub async fn get_by_id(&self, id: RecordId) -> StoreResult<Task> {
        self.store.get_by_id(id).await
    }

    /// Creates a task from a draft, stamping both timestamps with now.
    pub async fn create(&self, draft: TaskDraft) -> StoreResult<Task> {
        draft.validate()?;
        let now = Utc::now();
        let task = Task {
            id: 0,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            priority: draft.priority,
            due_date: draft.due_date,
            folder_id: draft.folder_id,
            created_at: now,
            updated_at: now,
        };
        self.store.create(task).await
    }

    /// Replaces every mutable field of the task with the draft values.
    pub async fn update(&self, id: RecordId, draft: TaskDraft) -> StoreResult<Task> {
        draft.validate()?;
        let existing = self.store.get_by_id::<Task>(id).await?;
        let task = Task {
            id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            priority: draft.priority,
            due_date: draft.due_date,
            folder_id: draft.folder_id,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };
        self.store.update(task).await
    }

    /// Card checkbox toggle: updates the status and nothing else.
    pub async fn set_status(&self, id: RecordId, status: TaskStatus) -> StoreResult<Task> {
        let mut task = self.store.get_by_id::<Task>(id).await?;
        task.status = status;
        task.updated_at = Utc::now();
        self.store.update(task).await
    }

    /// Removes one task by identity.
    pub async fn delete(&self, id: RecordId) -> StoreResult<()> {
        self.store.delete::<Task>(id).await
    }
}
