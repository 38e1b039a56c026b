use taskhive_core::{MemoryStore, NoteDraft, NoteService, StoreError};

fn service() -> NoteService<MemoryStore> {
    NoteService::new(MemoryStore::new())
}

#[tokio::test]
async fn create_and_get_roundtrip() {
    let service = service();

    let mut draft = NoteDraft::new("Groceries");
    draft.content = "remember milk".to_string();
    let created = service.create(draft).await.unwrap();
    assert_eq!(created.id, 1);

    let loaded = service.get_by_id(created.id).await.unwrap();
    assert_eq!(loaded, created);
}

#[tokio::test]
async fn update_replaces_content_and_keeps_created_at() {
    let service = service();
    let created = service.create(NoteDraft::new("draft")).await.unwrap();

    let mut draft = NoteDraft::new("draft");
    draft.content = "rewritten body".to_string();
    draft.folder_id = Some(3);
    let updated = service.update(created.id, draft).await.unwrap();

    assert_eq!(updated.content, "rewritten body");
    assert_eq!(updated.folder_id, Some(3));
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn get_unknown_id_is_not_found() {
    let service = service();

    let err = service.get_by_id(7).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound { table: "note", id: 7 }));
}

#[tokio::test]
async fn delete_then_get_fails_with_not_found() {
    let service = service();
    let created = service.create(NoteDraft::new("ephemeral")).await.unwrap();

    service.delete(created.id).await.unwrap();

    let err = service.get_by_id(created.id).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn note_and_task_identities_are_independent() {
    use taskhive_core::{TaskDraft, TaskService};

    let store = MemoryStore::new();
    let notes = NoteService::new(store.clone());
    let tasks = TaskService::new(store);

    let note = notes.create(NoteDraft::new("first note")).await.unwrap();
    let task = tasks.create(TaskDraft::new("first task")).await.unwrap();

    // Separate tables each start counting at 1.
    assert_eq!(note.id, 1);
    assert_eq!(task.id, 1);
}

#[tokio::test]
async fn blank_title_is_rejected() {
    let service = service();
    let err = service.create(NoteDraft::new("")).await.unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
}
