//! Feed aggregation, search and filtering.
//!
//! # Responsibility
//! - Merge already-fetched task and note collections into one ordered feed.
//! - Apply search-query matching with title-first relevance ranking.
//! - Apply folder and task-status filters.
//!
//! # Invariants
//! - Without a query the feed is ordered by `updated_at` descending.
//! - Every search hit contains the query (case-insensitive) in its title,
//!   description or content.
//! - Title matches rank before body-only matches; ties fall back to
//!   `updated_at` descending, then a deterministic (kind, id) tie-break.

use crate::model::{Note, RecordId, Task, TaskStatus};
use std::cmp::Ordering;

/// One entry of the merged task/note feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedItem {
    Task(Task),
    Note(Note),
}

impl FeedItem {
    /// Identity within the item's own table.
    pub fn id(&self) -> RecordId {
        match self {
            Self::Task(task) => task.id,
            Self::Note(note) => note.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Task(task) => &task.title,
            Self::Note(note) => &note.title,
        }
    }

    /// Searchable body: task description or note content.
    pub fn body(&self) -> &str {
        match self {
            Self::Task(task) => &task.description,
            Self::Note(note) => &note.content,
        }
    }

    pub fn folder_id(&self) -> Option<RecordId> {
        match self {
            Self::Task(task) => task.folder_id,
            Self::Note(note) => note.folder_id,
        }
    }

    pub fn updated_at(&self) -> chrono::DateTime<chrono::Utc> {
        match self {
            Self::Task(task) => task.updated_at,
            Self::Note(note) => note.updated_at,
        }
    }

    fn title_matches(&self, needle: &str) -> bool {
        self.title().to_lowercase().contains(needle)
    }

    fn matches(&self, needle: &str) -> bool {
        self.title_matches(needle) || self.body().to_lowercase().contains(needle)
    }

    // Tasks and notes share an id space per table, so the kind joins the
    // final tie-break to keep ordering total.
    fn kind_rank(&self) -> u8 {
        match self {
            Self::Task(_) => 0,
            Self::Note(_) => 1,
        }
    }
}

/// Feed request: optional search text and optional folder scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedQuery {
    /// Case-insensitive substring to search for; blank means no query.
    pub search: Option<String>,
    /// Restrict the feed to items filed under this folder.
    pub folder_id: Option<RecordId>,
}

impl FeedQuery {
    /// Creates a search query over the whole collection.
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: Some(text.into()),
            ..Self::default()
        }
    }

    /// Creates a folder-view query without search text.
    pub fn folder(folder_id: RecordId) -> Self {
        Self {
            folder_id: Some(folder_id),
            ..Self::default()
        }
    }
}

/// Merges tasks and notes into one ordered feed.
///
/// The folder filter applies before ordering. A blank or missing search
/// string yields the default recency ordering; otherwise only matching
/// items are returned, ranked title-matches-first.
pub fn build_feed(tasks: Vec<Task>, notes: Vec<Note>, query: &FeedQuery) -> Vec<FeedItem> {
    let mut items: Vec<FeedItem> = tasks
        .into_iter()
        .map(FeedItem::Task)
        .chain(notes.into_iter().map(FeedItem::Note))
        .collect();

    if let Some(folder_id) = query.folder_id {
        items.retain(|item| item.folder_id() == Some(folder_id));
    }

    let needle = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_lowercase);

    match needle {
        None => items.sort_by(recency_order),
        Some(needle) => {
            items.retain(|item| item.matches(&needle));
            items.sort_by(|a, b| relevance_order(a, b, &needle));
        }
    }

    items
}

/// Task status filter used by the tasks page tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Bypasses filtering entirely.
    #[default]
    All,
    Todo,
    InProgress,
    Completed,
}

impl StatusFilter {
    fn accepts(self, status: TaskStatus) -> bool {
        match self {
            Self::All => true,
            Self::Todo => status == TaskStatus::Todo,
            Self::InProgress => status == TaskStatus::InProgress,
            Self::Completed => status == TaskStatus::Completed,
        }
    }
}

/// Keeps tasks whose status matches the filter exactly.
pub fn filter_tasks(tasks: Vec<Task>, filter: StatusFilter) -> Vec<Task> {
    tasks
        .into_iter()
        .filter(|task| filter.accepts(task.status))
        .collect()
}

fn recency_order(a: &FeedItem, b: &FeedItem) -> Ordering {
    b.updated_at()
        .cmp(&a.updated_at())
        .then_with(|| a.kind_rank().cmp(&b.kind_rank()))
        .then_with(|| a.id().cmp(&b.id()))
}

fn relevance_order(a: &FeedItem, b: &FeedItem, needle: &str) -> Ordering {
    // Title hits outrank body-only hits; the rest is recency order.
    b.title_matches(needle)
        .cmp(&a.title_matches(needle))
        .then_with(|| recency_order(a, b))
}

#[cfg(test)]
mod tests {
    use super::{build_feed, filter_tasks, FeedItem, FeedQuery, StatusFilter};
    use crate::model::{Note, Priority, Task, TaskStatus};
    use chrono::{DateTime, TimeZone, Utc};

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()
    }

    fn task(id: i64, title: &str, description: &str, day: u32) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: description.to_string(),
            status: TaskStatus::Todo,
            priority: Priority::Medium,
            due_date: None,
            folder_id: None,
            created_at: at(day),
            updated_at: at(day),
        }
    }

    fn note(id: i64, title: &str, content: &str, day: u32) -> Note {
        Note {
            id,
            title: title.to_string(),
            content: content.to_string(),
            folder_id: None,
            created_at: at(day),
            updated_at: at(day),
        }
    }

    #[test]
    fn default_feed_orders_by_updated_at_descending() {
        let feed = build_feed(
            vec![task(1, "older", "", 1)],
            vec![note(1, "newer", "", 5)],
            &FeedQuery::default(),
        );

        let titles: Vec<&str> = feed.iter().map(FeedItem::title).collect();
        assert_eq!(titles, ["newer", "older"]);
    }

    #[test]
    fn blank_search_behaves_like_no_query() {
        let feed = build_feed(
            vec![task(1, "a", "", 1)],
            vec![note(1, "b", "", 2)],
            &FeedQuery::search("   "),
        );
        assert_eq!(feed.len(), 2);
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_body() {
        let feed = build_feed(
            vec![task(1, "Buy MILK", "", 1), task(2, "unrelated", "", 2)],
            vec![note(1, "Notes", "remember milk", 3)],
            &FeedQuery::search("milk"),
        );

        assert_eq!(feed.len(), 2);
        for item in &feed {
            let haystack = format!("{} {}", item.title(), item.body()).to_lowercase();
            assert!(haystack.contains("milk"));
        }
    }

    #[test]
    fn title_matches_rank_before_body_matches() {
        // The note is newer, but only matches on content.
        let feed = build_feed(
            vec![task(1, "Buy milk", "", 1)],
            vec![note(1, "Notes", "remember milk", 9)],
            &FeedQuery::search("milk"),
        );

        assert_eq!(feed[0].title(), "Buy milk");
        assert_eq!(feed[1].title(), "Notes");
    }

    #[test]
    fn equal_relevance_falls_back_to_recency() {
        let feed = build_feed(
            vec![task(1, "milk run", "", 2)],
            vec![note(1, "milk notes", "", 7)],
            &FeedQuery::search("milk"),
        );

        assert_eq!(feed[0].title(), "milk notes");
    }

    #[test]
    fn folder_filter_applies_exact_equality() {
        let mut filed = task(1, "filed", "", 3);
        filed.folder_id = Some(4);
        let loose = task(2, "loose", "", 5);
        let mut filed_note = note(1, "filed note", "", 1);
        filed_note.folder_id = Some(4);

        let feed = build_feed(vec![filed, loose], vec![filed_note], &FeedQuery::folder(4));

        assert_eq!(feed.len(), 2);
        assert!(feed.iter().all(|item| item.folder_id() == Some(4)));
    }

    #[test]
    fn status_filter_all_bypasses_filtering() {
        let mut done = task(1, "done", "", 1);
        done.status = TaskStatus::Completed;
        let tasks = vec![done, task(2, "open", "", 2)];

        assert_eq!(filter_tasks(tasks.clone(), StatusFilter::All).len(), 2);
        let completed = filter_tasks(tasks, StatusFilter::Completed);
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].title, "done");
    }
}
