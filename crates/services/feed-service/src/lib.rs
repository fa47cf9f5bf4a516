//! Feed Service Library
//!
//! Named feeds holding ordered post references. The service runs over any
//! [`DocumentCollection`] of feeds: SQL-backed for real deployments,
//! in-memory for single-process use and tests.

pub mod config;
pub mod repository;
pub mod service;

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use docstore::{DocumentCollection, MemoryCollection, SqlCollection};
use domain::Feed;

use crate::config::FeedServiceConfig;
use crate::repository::FeedStore;
use crate::service::FeedManager;

pub use crate::service::FeedService;

/// Build the feed service over an existing collection.
pub fn build(feeds: Arc<dyn DocumentCollection<Feed>>) -> Arc<dyn FeedService> {
    let feed_repo = Arc::new(FeedStore::new(feeds));
    Arc::new(FeedManager::new(feed_repo))
}

/// Build the feed service over the configured SQL collection.
pub fn with_database(db: DatabaseConnection, config: &FeedServiceConfig) -> Arc<dyn FeedService> {
    build(Arc::new(SqlCollection::new(db, config.collection.clone())))
}

/// Build the feed service over a fresh in-memory collection.
pub fn in_memory(config: &FeedServiceConfig) -> Arc<dyn FeedService> {
    build(Arc::new(MemoryCollection::new(config.collection.clone())))
}
