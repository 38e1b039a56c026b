//! In-memory record store.
//!
//! # Responsibility
//! - Provide the local store variant: per-table rows kept in memory,
//!   optionally seeded from bundled fixture data.
//! - Assign strictly increasing identities on `create`.
//!
//! # Invariants
//! - `create` assigns `max existing id + 1`, starting at 1.
//! - State is shared across clones, so one store backs all services.
//! - The table mutex is never held across an await point.

use crate::model::RecordId;
use crate::store::record::Record;
use crate::store::{RecordStore, StoreError, StoreResult};
use log::info;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

const SEED_JSON: &str = include_str!("fixtures/seed.json");

/// Bundled fixture shape; table keys match `Record::TABLE` names.
#[derive(Debug, Deserialize)]
struct SeedData {
    tasks: Vec<Value>,
    notes: Vec<Value>,
    folders: Vec<Value>,
}

/// Local store variant backed by in-memory tables.
///
/// Cloning is cheap and shares state; a fresh construction resets it, which
/// mirrors the source behavior of losing local data on reload.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<HashMap<&'static str, Vec<Value>>>>,
    latency: Option<Duration>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded from the bundled fixture data.
    pub fn seeded() -> StoreResult<Self> {
        let seed: SeedData =
            serde_json::from_str(SEED_JSON).map_err(|err| StoreError::InvalidRecord {
                table: "fixtures",
                message: err.to_string(),
            })?;

        let store = Self::new();
        {
            let mut tables = store.lock_tables();
            tables.insert("task", seed.tasks);
            tables.insert("note", seed.notes);
            tables.insert("folder", seed.folders);
        }

        let counts: Vec<String> = {
            let tables = store.lock_tables();
            tables
                .iter()
                .map(|(table, rows)| format!("{table}={}", rows.len()))
                .collect()
        };
        info!(
            "event=store_seed module=store status=ok mode=memory {}",
            counts.join(" ")
        );

        Ok(store)
    }

    /// Adds a fixed per-operation delay to mimic network behavior in demos.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    async fn pause(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }

    fn lock_tables(
        &self,
    ) -> std::sync::MutexGuard<'_, HashMap<&'static str, Vec<Value>>> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tables = self.lock_tables();
        f.debug_struct("MemoryStore")
            .field("tables", &tables.keys().collect::<Vec<_>>())
            .field("latency", &self.latency)
            .finish()
    }
}

#[async_trait::async_trait]
impl RecordStore for MemoryStore {
    async fn get_all<R: Record>(&self) -> StoreResult<Vec<R>> {
        self.pause().await;
        let tables = self.lock_tables();
        let rows = tables.get(R::TABLE).cloned().unwrap_or_default();
        drop(tables);

        rows.into_iter().map(decode_row::<R>).collect()
    }

    async fn get_by_id<R: Record>(&self, id: RecordId) -> StoreResult<R> {
        self.pause().await;
        let tables = self.lock_tables();
        let row = tables
            .get(R::TABLE)
            .and_then(|rows| rows.iter().find(|row| row_id(row) == Some(id)))
            .cloned();
        drop(tables);

        match row {
            Some(row) => decode_row(row),
            None => Err(StoreError::NotFound {
                table: R::TABLE,
                id,
            }),
        }
    }

    async fn create<R: Record>(&self, mut record: R) -> StoreResult<R> {
        self.pause().await;
        let mut tables = self.lock_tables();
        let rows = tables.entry(R::TABLE).or_default();

        let next_id = rows.iter().filter_map(row_id).max().unwrap_or(0) + 1;
        record.set_id(next_id);
        rows.push(encode_row(&record)?);

        Ok(record)
    }

    async fn update<R: Record>(&self, record: R) -> StoreResult<R> {
        self.pause().await;
        let mut tables = self.lock_tables();
        let rows = tables.entry(R::TABLE).or_default();

        let Some(position) = rows.iter().position(|row| row_id(row) == Some(record.id()))
        else {
            return Err(StoreError::NotFound {
                table: R::TABLE,
                id: record.id(),
            });
        };
        rows[position] = encode_row(&record)?;

        Ok(record)
    }

    async fn delete<R: Record>(&self, id: RecordId) -> StoreResult<()> {
        self.pause().await;
        let mut tables = self.lock_tables();
        let rows = tables.entry(R::TABLE).or_default();

        let Some(position) = rows.iter().position(|row| row_id(row) == Some(id)) else {
            return Err(StoreError::NotFound {
                table: R::TABLE,
                id,
            });
        };
        rows.remove(position);

        Ok(())
    }
}

fn row_id(row: &Value) -> Option<RecordId> {
    row.get("Id").and_then(Value::as_i64)
}

fn decode_row<R: Record>(row: Value) -> StoreResult<R> {
    serde_json::from_value(row).map_err(|err| StoreError::InvalidRecord {
        table: R::TABLE,
        message: err.to_string(),
    })
}

fn encode_row<R: Record>(record: &R) -> StoreResult<Value> {
    serde_json::to_value(record).map_err(|err| StoreError::InvalidRecord {
        table: R::TABLE,
        message: err.to_string(),
    })
}
