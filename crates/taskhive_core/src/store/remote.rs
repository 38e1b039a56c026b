//! Remote record-API store.
//!
//! # Responsibility
//! - Implement the store contract over the hosted record API.
//! - Build declarative `fields`/`orderBy` parameter objects from record
//!   metadata and decode the `{success, message, data, results}` envelope.
//!
//! # Invariants
//! - Identity assignment is delegated to the backend; `Id` is stripped
//!   from create payloads.
//! - `success = false` or any failed per-record result maps to
//!   `StoreError::Service` carrying the first failure message.

use crate::config::RemoteConfig;
use crate::model::{RecordId, Session};
use crate::store::record::Record;
use crate::store::{RecordStore, StoreError, StoreResult};
use log::{error, info};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

/// Remote store variant over the hosted record API.
#[derive(Debug, Clone)]
pub struct RemoteStore {
    client: reqwest::Client,
    config: Arc<RemoteConfig>,
    session: Option<Session>,
}

impl RemoteStore {
    /// Creates a store for the given endpoint configuration.
    pub fn new(config: RemoteConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config: Arc::new(config),
            session: None,
        }
    }

    /// Attaches an authenticated session whose token is sent on every call.
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    fn endpoint(&self, table: &str, verb: &str) -> String {
        format!(
            "{}/tables/{table}/{verb}",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Posts one RPC-style call and decodes the response envelope.
    async fn call(
        &self,
        table: &'static str,
        verb: &'static str,
        body: &impl Serialize,
    ) -> StoreResult<Envelope> {
        let started_at = Instant::now();
        let mut request = self
            .client
            .post(self.endpoint(table, verb))
            .header("X-Project-Id", &self.config.project_id)
            .header("X-Public-Key", &self.config.public_key)
            .json(body);

        if let Some(token) = self
            .session
            .as_ref()
            .and_then(|session| session.access_token.as_deref())
        {
            request = request.bearer_auth(token);
        }

        let outcome = async {
            let response = request.send().await?.error_for_status()?;
            let envelope: Envelope = response.json().await?;
            Ok::<_, StoreError>(envelope)
        }
        .await;

        match &outcome {
            Ok(envelope) if envelope.success => {
                info!(
                    "event=remote_call module=store status=ok table={table} op={verb} duration_ms={}",
                    started_at.elapsed().as_millis()
                );
            }
            Ok(envelope) => {
                error!(
                    "event=remote_call module=store status=rejected table={table} op={verb} duration_ms={} message={}",
                    started_at.elapsed().as_millis(),
                    envelope.message.as_deref().unwrap_or("unknown")
                );
            }
            Err(err) => {
                error!(
                    "event=remote_call module=store status=error table={table} op={verb} duration_ms={} error={err}",
                    started_at.elapsed().as_millis()
                );
            }
        }

        outcome
    }
}

#[async_trait::async_trait]
impl RecordStore for RemoteStore {
    async fn get_all<R: Record>(&self) -> StoreResult<Vec<R>> {
        let envelope = self
            .call(R::TABLE, "fetch", &FetchParams::for_record::<R>())
            .await?;
        let data = envelope.into_data()?;

        match data {
            // Missing data on a successful fetch means an empty table.
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(value) => decode_value(R::TABLE, value),
        }
    }

    async fn get_by_id<R: Record>(&self, id: RecordId) -> StoreResult<R> {
        let envelope = self
            .call(R::TABLE, "get", &GetParams::for_record::<R>(id))
            .await?;
        let data = envelope.into_data()?;

        match data {
            None | Some(Value::Null) => Err(StoreError::NotFound {
                table: R::TABLE,
                id,
            }),
            Some(value) => decode_value(R::TABLE, value),
        }
    }

    async fn create<R: Record>(&self, record: R) -> StoreResult<R> {
        let mut payload = encode_value(&record)?;
        if let Some(object) = payload.as_object_mut() {
            object.remove("Id");
        }

        let envelope = self
            .call(R::TABLE, "create", &RecordsParams { records: vec![payload] })
            .await?;
        decode_single(envelope)
    }

    async fn update<R: Record>(&self, record: R) -> StoreResult<R> {
        let payload = encode_value(&record)?;
        let envelope = self
            .call(R::TABLE, "update", &RecordsParams { records: vec![payload] })
            .await?;
        decode_single(envelope)
    }

    async fn delete<R: Record>(&self, id: RecordId) -> StoreResult<()> {
        let envelope = self
            .call(
                R::TABLE,
                "delete",
                &DeleteParams {
                    record_ids: vec![id],
                },
            )
            .await?;
        envelope.into_data()?;
        Ok(())
    }
}

/// Declarative list-fetch parameters: field selection plus sort order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchParams {
    pub fields: Vec<FieldSelector>,
    pub order_by: Vec<OrderBy>,
}

impl FetchParams {
    /// Builds fetch parameters from a record type's metadata.
    pub fn for_record<R: Record>() -> Self {
        Self {
            fields: field_selectors::<R>(),
            order_by: vec![OrderBy {
                field_name: R::ORDER_BY.field,
                sorttype: R::ORDER_BY.direction.as_param(),
            }],
        }
    }
}

/// Single-record lookup parameters.
#[derive(Debug, Clone, Serialize)]
pub struct GetParams {
    #[serde(rename = "Id")]
    pub id: RecordId,
    pub fields: Vec<FieldSelector>,
}

impl GetParams {
    /// Builds lookup parameters from a record type's metadata.
    pub fn for_record<R: Record>(id: RecordId) -> Self {
        Self {
            id,
            fields: field_selectors::<R>(),
        }
    }
}

/// One entry of the `fields` selection list: `{"field":{"Name":...}}`.
#[derive(Debug, Clone, Serialize)]
pub struct FieldSelector {
    pub field: FieldName,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldName {
    #[serde(rename = "Name")]
    pub name: &'static str,
}

/// One entry of the `orderBy` list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBy {
    pub field_name: &'static str,
    pub sorttype: &'static str,
}

/// Write payload carrying full records for create/update.
#[derive(Debug, Clone, Serialize)]
pub struct RecordsParams {
    pub records: Vec<Value>,
}

/// Delete payload carrying target identities.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteParams {
    #[serde(rename = "RecordIds")]
    pub record_ids: Vec<RecordId>,
}

/// Response envelope shared by every record API operation.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub results: Option<Vec<OpResult>>,
}

/// Per-record outcome inside a write envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct OpResult {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

impl Envelope {
    /// Resolves the envelope to its effective payload.
    ///
    /// Rejection rules match the source services: a top-level
    /// `success = false` or any failed per-record result becomes a
    /// `Service` error with the first failure message.
    pub fn into_data(self) -> StoreResult<Option<Value>> {
        if !self.success {
            return Err(StoreError::Service {
                message: self
                    .message
                    .unwrap_or_else(|| "operation rejected by record service".to_string()),
            });
        }

        let Some(results) = self.results else {
            return Ok(self.data);
        };

        if let Some(failed) = results.iter().find(|result| !result.success) {
            return Err(StoreError::Service {
                message: failed
                    .message
                    .clone()
                    .unwrap_or_else(|| "record operation failed".to_string()),
            });
        }

        Ok(results
            .into_iter()
            .next()
            .and_then(|result| result.data)
            .or(self.data))
    }
}

fn field_selectors<R: Record>() -> Vec<FieldSelector> {
    R::FIELDS
        .iter()
        .copied()
        .map(|name| FieldSelector {
            field: FieldName { name },
        })
        .collect()
}

fn decode_single<R: Record>(envelope: Envelope) -> StoreResult<R> {
    match envelope.into_data()? {
        Some(value) => decode_value(R::TABLE, value),
        None => Err(StoreError::Service {
            message: format!("record service returned no {} payload", R::TABLE),
        }),
    }
}

fn encode_value<R: Record>(record: &R) -> StoreResult<Value> {
    serde_json::to_value(record).map_err(|err| StoreError::InvalidRecord {
        table: R::TABLE,
        message: err.to_string(),
    })
}

fn decode_value<T: serde::de::DeserializeOwned>(
    table: &'static str,
    value: Value,
) -> StoreResult<T> {
    serde_json::from_value(value).map_err(|err| StoreError::InvalidRecord {
        table,
        message: err.to_string(),
    })
}
