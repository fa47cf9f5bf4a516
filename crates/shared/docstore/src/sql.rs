//! Collection stored in the shared `documents` table through SeaORM.
//!
//! Documents are kept as JSON text. Only the collection name and a pinned
//! `_id` are pushed down to SQL; remaining equality conditions are checked
//! on the decoded documents.

use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use serde_json::{Map, Value};

use common::{AppError, AppResult};

use crate::collection::{apply_update, decode, stamp_new, Document, DocumentCollection, UpdateAck};
use crate::entities::document::{self, ActiveModel, Entity as DocumentEntity, Model};
use crate::query::{Fields, Filter};

/// Collection persisted in a relational database.
pub struct SqlCollection<D> {
    db: DatabaseConnection,
    name: String,
    _marker: PhantomData<fn() -> D>,
}

impl<D> SqlCollection<D> {
    /// Create a handle on the named collection
    pub fn new(db: DatabaseConnection, name: impl Into<String>) -> Self {
        Self {
            db,
            name: name.into(),
            _marker: PhantomData,
        }
    }

    /// Rows of this collection matching `filter`, in insertion order.
    async fn matching<C>(
        &self,
        conn: &C,
        filter: &Filter,
    ) -> AppResult<Vec<(Model, Map<String, Value>)>>
    where
        C: ConnectionTrait,
    {
        let mut query =
            DocumentEntity::find().filter(document::Column::Collection.eq(self.name.as_str()));
        if let Some(id) = filter.id() {
            query = query.filter(document::Column::Id.eq(id));
        }

        let models = query
            .order_by_asc(document::Column::CreatedAt)
            .order_by_asc(document::Column::Id)
            .all(conn)
            .await?;

        let mut matches = Vec::new();
        for model in models {
            let body = parse_body(&model.body)?;
            if filter.matches(&body) {
                matches.push((model, body));
            }
        }
        Ok(matches)
    }
}

fn parse_body(raw: &str) -> AppResult<Map<String, Value>> {
    match serde_json::from_str(raw)? {
        Value::Object(body) => Ok(body),
        _ => Err(AppError::internal("stored document is not a JSON object")),
    }
}

#[async_trait]
impl<D: Document> DocumentCollection<D> for SqlCollection<D> {
    fn name(&self) -> &str {
        &self.name
    }

    async fn create_one(&self, fields: Fields) -> AppResult<D> {
        let new = stamp_new(fields)?;
        let active_model = ActiveModel {
            id: Set(new.id),
            collection: Set(self.name.clone()),
            body: Set(serde_json::to_string(&new.body)?),
            created_at: Set(new.created_at),
            updated_at: Set(new.created_at),
        };

        DocumentEntity::insert(active_model).exec(&self.db).await?;
        tracing::debug!(collection = %self.name, id = %new.id, "document created");
        decode(new.body)
    }

    async fn read_one(&self, filter: Filter) -> AppResult<Option<D>> {
        self.matching(&self.db, &filter)
            .await?
            .into_iter()
            .next()
            .map(|(_, body)| decode(body))
            .transpose()
    }

    async fn read_many(&self, filter: Filter) -> AppResult<Vec<D>> {
        self.matching(&self.db, &filter)
            .await?
            .into_iter()
            .map(|(_, body)| decode(body))
            .collect()
    }

    async fn partial_update_one(&self, filter: Filter, fields: Fields) -> AppResult<UpdateAck> {
        let txn = self.db.begin().await?;

        let Some((model, mut body)) = self.matching(&txn, &filter).await?.into_iter().next() else {
            txn.commit().await?;
            return Ok(UpdateAck::default());
        };

        let now = Utc::now();
        let changed = apply_update(&mut body, &fields, now)?;
        if changed {
            let mut active: ActiveModel = model.into();
            active.body = Set(serde_json::to_string(&body)?);
            active.updated_at = Set(now);
            active.update(&txn).await?;
        }

        txn.commit().await?;
        Ok(UpdateAck {
            matched: 1,
            modified: u64::from(changed),
        })
    }

    async fn pop_one(&self, filter: Filter) -> AppResult<Option<D>> {
        let txn = self.db.begin().await?;

        let Some((model, body)) = self.matching(&txn, &filter).await?.into_iter().next() else {
            txn.commit().await?;
            return Ok(None);
        };

        let result = DocumentEntity::delete_by_id(model.id).exec(&txn).await?;
        txn.commit().await?;

        // Another caller removed it between our read and delete
        if result.rows_affected == 0 {
            return Ok(None);
        }
        decode(body).map(Some)
    }

    async fn count(&self, filter: Filter) -> AppResult<u64> {
        Ok(self.matching(&self.db, &filter).await?.len() as u64)
    }
}
