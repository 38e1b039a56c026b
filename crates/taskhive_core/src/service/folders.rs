//! Folder use-case service.
//!
//! # Responsibility
//! - Provide folder CRUD and the sidebar ordering contract.
//!
//! # Invariants
//! - `get_all` returns folders sorted ascending by `order`, then id,
//!   regardless of store ordering.
//! - Deleting a folder never cascades; items keep their dangling
//!   `folder_id` and render as unfiled. Orphans are counted and logged.

use crate::model::{Folder, FolderDraft, Note, RecordId, Task};
use crate::store::{RecordStore, StoreResult};
use log::warn;

/// Folder service facade over a store variant.
#[derive(Debug, Clone)]
pub struct FolderService<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> FolderService<S> {
    /// Creates a service over the provided store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns all folders in sidebar order.
    pub async fn get_all(&self) -> StoreResult<Vec<Folder>> {
        let mut folders: Vec<Folder> = self.store.get_all().await?;
        folders.sort_by_key(|folder| (folder.order, folder.id));
        Ok(folders)
    }

    /// Returns one folder by identity.
    pub async fn get_by_id(&self, id: RecordId) -> StoreResult<Folder> {
        self.store.get_by_id(id).await
    }

    /// Creates a folder; a draft without an explicit position is appended
    /// after the current last folder.
    pub async fn create(&self, draft: FolderDraft) -> StoreResult<Folder> {
        draft.validate()?;
        let order = match draft.order {
            Some(order) => order,
            None => self.next_order().await?,
        };
        let folder = Folder {
            id: 0,
            name: draft.name,
            color: draft.color,
            icon: draft.icon,
            order,
        };
        self.store.create(folder).await
    }

    /// Replaces every mutable field of the folder with the draft values.
    pub async fn update(&self, id: RecordId, draft: FolderDraft) -> StoreResult<Folder> {
        draft.validate()?;
        let existing = self.store.get_by_id::<Folder>(id).await?;
        let folder = Folder {
            id,
            name: draft.name,
            color: draft.color,
            icon: draft.icon,
            order: draft.order.unwrap_or(existing.order),
        };
        self.store.update(folder).await
    }

    /// Removes one folder by identity.
    ///
    /// Items filed under it are left untouched; the orphan count is logged
    /// so the accepted no-cascade behavior stays observable.
    pub async fn delete(&self, id: RecordId) -> StoreResult<()> {
        let tasks: Vec<Task> = self.store.get_all().await?;
        let notes: Vec<Note> = self.store.get_all().await?;
        let orphans = tasks
            .iter()
            .filter(|task| task.folder_id == Some(id))
            .count()
            + notes
                .iter()
                .filter(|note| note.folder_id == Some(id))
                .count();

        self.store.delete::<Folder>(id).await?;

        if orphans > 0 {
            warn!(
                "event=folder_delete module=service status=ok folder_id={id} orphaned_items={orphans}"
            );
        }
        Ok(())
    }

    async fn next_order(&self) -> StoreResult<i64> {
        let folders: Vec<Folder> = self.store.get_all().await?;
        Ok(folders.iter().map(|folder| folder.order).max().unwrap_or(0) + 1)
    }
}
