//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskhive_core` wiring.
//! - Print the fixture-seeded feed for quick local sanity checks.

use taskhive_core::{
    build_feed, FeedItem, FeedQuery, MemoryStore, NoteService, TaskService,
};

#[tokio::main]
async fn main() {
    println!("taskhive_core ping={}", taskhive_core::ping());
    println!("taskhive_core version={}", taskhive_core::core_version());

    let store = match MemoryStore::seeded() {
        Ok(store) => store,
        Err(err) => {
            eprintln!("failed to seed local store: {err}");
            std::process::exit(1);
        }
    };

    let tasks = TaskService::new(store.clone());
    let notes = NoteService::new(store);

    let feed = match (tasks.get_all().await, notes.get_all().await) {
        (Ok(tasks), Ok(notes)) => build_feed(tasks, notes, &FeedQuery::default()),
        (Err(err), _) | (_, Err(err)) => {
            eprintln!("failed to load feed: {err}");
            std::process::exit(1);
        }
    };

    for item in &feed {
        let kind = match item {
            FeedItem::Task(_) => "task",
            FeedItem::Note(_) => "note",
        };
        println!(
            "{kind} #{id} {updated} {title}",
            id = item.id(),
            updated = item.updated_at().to_rfc3339(),
            title = item.title()
        );
    }
}
