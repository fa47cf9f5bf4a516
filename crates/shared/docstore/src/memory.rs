//! In-process collection backed by a vector of JSON documents.

use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use common::AppResult;

use crate::collection::{apply_update, decode, stamp_new, Document, DocumentCollection, UpdateAck};
use crate::query::{Fields, Filter};

/// Collection kept in memory, in insertion order.
///
/// Every operation holds the lock for its whole duration, so each call
/// is atomic with respect to the others.
pub struct MemoryCollection<D> {
    name: String,
    documents: RwLock<Vec<Map<String, Value>>>,
    _marker: PhantomData<fn() -> D>,
}

impl<D> MemoryCollection<D> {
    /// Create an empty collection
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            documents: RwLock::new(Vec::new()),
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<D: Document> DocumentCollection<D> for MemoryCollection<D> {
    fn name(&self) -> &str {
        &self.name
    }

    async fn create_one(&self, fields: Fields) -> AppResult<D> {
        let new = stamp_new(fields)?;
        let created = decode(new.body.clone())?;

        self.documents.write().await.push(new.body);
        tracing::debug!(collection = %self.name, id = %new.id, "document created");
        Ok(created)
    }

    async fn read_one(&self, filter: Filter) -> AppResult<Option<D>> {
        let documents = self.documents.read().await;
        documents
            .iter()
            .find(|doc| filter.matches(doc))
            .cloned()
            .map(decode)
            .transpose()
    }

    async fn read_many(&self, filter: Filter) -> AppResult<Vec<D>> {
        let documents = self.documents.read().await;
        documents
            .iter()
            .filter(|doc| filter.matches(doc))
            .cloned()
            .map(decode)
            .collect()
    }

    async fn partial_update_one(&self, filter: Filter, fields: Fields) -> AppResult<UpdateAck> {
        let mut documents = self.documents.write().await;
        let Some(document) = documents.iter_mut().find(|doc| filter.matches(doc)) else {
            return Ok(UpdateAck::default());
        };

        let changed = apply_update(document, &fields, Utc::now())?;
        Ok(UpdateAck {
            matched: 1,
            modified: u64::from(changed),
        })
    }

    async fn pop_one(&self, filter: Filter) -> AppResult<Option<D>> {
        let mut documents = self.documents.write().await;
        match documents.iter().position(|doc| filter.matches(doc)) {
            Some(index) => decode(documents.remove(index)).map(Some),
            None => Ok(None),
        }
    }

    async fn count(&self, filter: Filter) -> AppResult<u64> {
        let documents = self.documents.read().await;
        Ok(documents.iter().filter(|doc| filter.matches(doc)).count() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::{ID_FIELD, UPDATED_AT_FIELD};
    use serde::{Deserialize, Serialize};
    use uuid::Uuid;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        #[serde(rename = "_id")]
        id: Uuid,
        title: String,
        tags: Vec<String>,
        updated_at: chrono::DateTime<Utc>,
    }

    fn collection() -> MemoryCollection<Note> {
        MemoryCollection::new("notes")
    }

    async fn create(notes: &MemoryCollection<Note>, title: &str) -> Note {
        let fields = Fields::new()
            .set("title", title)
            .unwrap()
            .set("tags", Vec::<String>::new())
            .unwrap();
        notes.create_one(fields).await.unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_id() {
        let notes = collection();
        let a = create(&notes, "a").await;
        let b = create(&notes, "b").await;

        assert_ne!(a.id, b.id);
        assert_eq!(notes.name(), "notes");
        assert_eq!(notes.count(Filter::all()).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_read_by_filter() {
        let notes = collection();
        let a = create(&notes, "a").await;
        create(&notes, "b").await;

        let found = notes.read_one(Filter::by_id(a.id)).await.unwrap();
        assert_eq!(found, Some(a));

        let by_title = notes.read_one(Filter::all().eq("title", "b")).await.unwrap();
        assert_eq!(by_title.map(|n| n.title), Some("b".to_string()));

        let missing = notes.read_one(Filter::by_id(Uuid::new_v4())).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_read_many_keeps_insertion_order() {
        let notes = collection();
        for title in ["first", "second", "third"] {
            create(&notes, title).await;
        }

        let titles: Vec<String> = notes
            .read_many(Filter::all())
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.title)
            .collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_partial_update() {
        let notes = collection();
        let a = create(&notes, "a").await;

        let fields = Fields::new().set("tags", vec!["x"]).unwrap();
        let ack = notes.partial_update_one(Filter::by_id(a.id), fields.clone()).await.unwrap();
        assert_eq!(ack, UpdateAck { matched: 1, modified: 1 });

        let updated = notes.read_one(Filter::by_id(a.id)).await.unwrap().unwrap();
        assert_eq!(updated.tags, vec!["x"]);
        assert_eq!(updated.title, "a");
        assert!(updated.updated_at >= a.updated_at);

        // Same value again: matched but unchanged
        let ack = notes.partial_update_one(Filter::by_id(a.id), fields).await.unwrap();
        assert_eq!(ack, UpdateAck { matched: 1, modified: 0 });
    }

    #[tokio::test]
    async fn test_partial_update_without_match() {
        let notes = collection();
        let fields = Fields::new().set("title", "z").unwrap();

        let ack = notes.partial_update_one(Filter::by_id(Uuid::new_v4()), fields).await.unwrap();
        assert_eq!(ack, UpdateAck::default());
    }

    #[tokio::test]
    async fn test_partial_update_rejects_id_change() {
        let notes = collection();
        let a = create(&notes, "a").await;
        let fields = Fields::new().set(ID_FIELD, Uuid::new_v4()).unwrap();

        let result = notes.partial_update_one(Filter::by_id(a.id), fields).await;
        assert!(result.is_err());
        assert!(notes.read_one(Filter::by_id(a.id)).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_pop_one_removes_document() {
        let notes = collection();
        let a = create(&notes, "a").await;
        create(&notes, "b").await;

        let popped = notes.pop_one(Filter::by_id(a.id)).await.unwrap();
        assert_eq!(popped.map(|n| n.id), Some(a.id));
        assert_eq!(notes.count(Filter::all()).await.unwrap(), 1);

        assert!(notes.pop_one(Filter::by_id(a.id)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_count_by_filter() {
        let notes = collection();
        create(&notes, "a").await;
        create(&notes, "a").await;
        create(&notes, "b").await;

        assert_eq!(notes.count(Filter::all().eq("title", "a")).await.unwrap(), 2);
        assert_eq!(notes.count(Filter::all().eq("title", "c")).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_stored_documents_carry_metadata() {
        let notes = collection();
        create(&notes, "a").await;

        let documents = notes.documents.read().await;
        assert!(documents[0].contains_key(ID_FIELD));
        assert!(documents[0].contains_key(UPDATED_AT_FIELD));
    }
}
