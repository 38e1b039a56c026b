use taskhive_core::{
    MemoryStore, Priority, RecordStore, StoreError, Task, TaskDraft, TaskService, TaskStatus,
};

fn service() -> TaskService<MemoryStore> {
    TaskService::new(MemoryStore::new())
}

#[tokio::test]
async fn create_and_get_roundtrip() {
    let service = service();

    let created = service.create(TaskDraft::new("Buy milk")).await.unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.status, TaskStatus::Todo);
    assert_eq!(created.priority, Priority::Medium);
    assert_eq!(created.created_at, created.updated_at);

    let loaded = service.get_by_id(created.id).await.unwrap();
    assert_eq!(loaded, created);
}

#[tokio::test]
async fn sequential_creates_assign_strictly_increasing_ids() {
    let service = service();

    let mut ids = Vec::new();
    for index in 0..5 {
        let task = service
            .create(TaskDraft::new(format!("task {index}")))
            .await
            .unwrap();
        ids.push(task.id);
    }

    assert_eq!(ids.len(), 5);
    assert!(ids.windows(2).all(|pair| pair[1] > pair[0]));
}

#[tokio::test]
async fn delete_frees_no_identity_for_reuse() {
    let service = service();

    let first = service.create(TaskDraft::new("first")).await.unwrap();
    let second = service.create(TaskDraft::new("second")).await.unwrap();
    service.delete(first.id).await.unwrap();

    let third = service.create(TaskDraft::new("third")).await.unwrap();
    assert!(third.id > second.id);
}

#[tokio::test]
async fn set_status_touches_only_status_and_timestamp() {
    let service = service();

    let mut draft = TaskDraft::new("Buy milk");
    draft.priority = Priority::Low;
    draft.description = "two liters".to_string();
    let created = service.create(draft).await.unwrap();

    let updated = service
        .set_status(created.id, TaskStatus::Completed)
        .await
        .unwrap();

    assert_eq!(updated.status, TaskStatus::Completed);
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.priority, created.priority);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
}

#[tokio::test]
async fn buy_milk_scenario_roundtrip() {
    let service = service();

    let mut draft = TaskDraft::new("Buy milk");
    draft.priority = Priority::Low;
    let created = service.create(draft).await.unwrap();

    let all = service.get_all().await.unwrap();
    assert!(all.iter().any(|task| task.id == created.id));

    service
        .set_status(created.id, TaskStatus::Completed)
        .await
        .unwrap();

    let all = service.get_all().await.unwrap();
    let task = all.iter().find(|task| task.id == created.id).unwrap();
    assert_eq!(task.status, TaskStatus::Completed);
    assert_eq!(task.title, "Buy milk");
    assert_eq!(task.priority, Priority::Low);
}

#[tokio::test]
async fn update_replaces_mutable_fields_and_keeps_created_at() {
    let service = service();
    let created = service.create(TaskDraft::new("draft")).await.unwrap();

    let mut draft = TaskDraft::new("rewritten");
    draft.status = TaskStatus::InProgress;
    draft.priority = Priority::High;
    draft.folder_id = Some(9);
    let updated = service.update(created.id, draft).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "rewritten");
    assert_eq!(updated.status, TaskStatus::InProgress);
    assert_eq!(updated.folder_id, Some(9));
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let service = service();

    let err = service
        .update(42, TaskDraft::new("ghost"))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound { id: 42, .. }));
}

#[tokio::test]
async fn delete_removes_exactly_one_item() {
    let service = service();

    let keep = service.create(TaskDraft::new("keep")).await.unwrap();
    let doomed = service.create(TaskDraft::new("doomed")).await.unwrap();

    service.delete(doomed.id).await.unwrap();

    let all = service.get_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, keep.id);

    let err = service.get_by_id(doomed.id).await.unwrap_err();
    assert!(err.is_not_found());

    let err = service.delete(doomed.id).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn blank_title_is_rejected_before_any_mutation() {
    let service = service();

    let err = service.create(TaskDraft::new("   ")).await.unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));

    assert!(service.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn shared_store_backs_both_raw_and_service_access() {
    let store = MemoryStore::new();
    let service = TaskService::new(store.clone());

    let created = service.create(TaskDraft::new("shared")).await.unwrap();
    let direct: Task = store.get_by_id(created.id).await.unwrap();
    assert_eq!(direct.title, "shared");
}
