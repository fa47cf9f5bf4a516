//! Document collection abstraction.
//!
//! A collection stores JSON documents of one shape. Every stored document
//! carries an `_id` assigned on creation plus `created_at` / `updated_at`
//! timestamps maintained by the collection itself.
//!
//! Each call is atomic on its own. Nothing spans two calls, so a
//! read followed by a partial update can interleave with another caller.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use common::{AppError, AppResult};

use crate::query::{Fields, Filter};

/// Identifier field present on every stored document
pub const ID_FIELD: &str = "_id";

/// Creation timestamp field
pub const CREATED_AT_FIELD: &str = "created_at";

/// Last modification timestamp field
pub const UPDATED_AT_FIELD: &str = "updated_at";

/// Anything that can be stored in a collection.
pub trait Document: Serialize + DeserializeOwned + Send + Sync + 'static {}

impl<T> Document for T where T: Serialize + DeserializeOwned + Send + Sync + 'static {}

/// Outcome of a partial update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateAck {
    /// Documents matching the filter (0 or 1)
    pub matched: u64,
    /// Documents whose content actually changed
    pub modified: u64,
}

/// Generic document store operations.
#[async_trait]
pub trait DocumentCollection<D: Document>: Send + Sync {
    /// Collection name
    fn name(&self) -> &str;

    /// Insert a document built from `fields` and return it with its id
    async fn create_one(&self, fields: Fields) -> AppResult<D>;

    /// First document matching `filter`, in insertion order
    async fn read_one(&self, filter: Filter) -> AppResult<Option<D>>;

    /// Every document matching `filter`, in insertion order
    async fn read_many(&self, filter: Filter) -> AppResult<Vec<D>>;

    /// Overwrite `fields` on the first document matching `filter`
    async fn partial_update_one(&self, filter: Filter, fields: Fields) -> AppResult<UpdateAck>;

    /// Remove and return the first document matching `filter`
    async fn pop_one(&self, filter: Filter) -> AppResult<Option<D>>;

    /// Number of documents matching `filter`
    async fn count(&self, filter: Filter) -> AppResult<u64>;
}

/// A document about to be inserted, with its store-managed fields filled in.
pub(crate) struct NewDocument {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub body: Map<String, Value>,
}

/// Assign id and timestamps to a fresh document.
pub(crate) fn stamp_new(fields: Fields) -> AppResult<NewDocument> {
    let id = Uuid::new_v4();
    let created_at = Utc::now();
    let timestamp = serde_json::to_value(created_at)?;

    let mut body = fields.into_map();
    body.insert(ID_FIELD.to_string(), serde_json::to_value(id)?);
    body.insert(CREATED_AT_FIELD.to_string(), timestamp.clone());
    body.insert(UPDATED_AT_FIELD.to_string(), timestamp);

    Ok(NewDocument {
        id,
        created_at,
        body,
    })
}

/// Apply a partial update in place; refreshes `updated_at` when content changed.
pub(crate) fn apply_update(
    document: &mut Map<String, Value>,
    fields: &Fields,
    now: DateTime<Utc>,
) -> AppResult<bool> {
    if fields.contains(ID_FIELD) {
        return Err(AppError::validation("document ids cannot be updated"));
    }

    let changed = fields.apply_to(document);
    if changed {
        document.insert(UPDATED_AT_FIELD.to_string(), serde_json::to_value(now)?);
    }
    Ok(changed)
}

/// Deserialize a stored document into its typed form.
pub(crate) fn decode<D: Document>(document: Map<String, Value>) -> AppResult<D> {
    Ok(serde_json::from_value(Value::Object(document))?)
}
