//! Reaction Service Library
//!
//! At most one reaction per (user, item) pair, drawn from a fixed
//! vocabulary. Runs over any [`DocumentCollection`] of reactions.

pub mod config;
pub mod repository;
pub mod service;

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use docstore::{DocumentCollection, MemoryCollection, SqlCollection};
use domain::Reaction;

use crate::config::ReactionServiceConfig;
use crate::repository::ReactionStore;
use crate::service::ReactionManager;

pub use crate::service::ReactionService;

/// Build the reaction service over an existing collection.
pub fn build(reactions: Arc<dyn DocumentCollection<Reaction>>) -> Arc<dyn ReactionService> {
    let reaction_repo = Arc::new(ReactionStore::new(reactions));
    Arc::new(ReactionManager::new(reaction_repo))
}

/// Build the reaction service over the configured SQL collection.
pub fn with_database(
    db: DatabaseConnection,
    config: &ReactionServiceConfig,
) -> Arc<dyn ReactionService> {
    build(Arc::new(SqlCollection::new(db, config.collection.clone())))
}

/// Build the reaction service over a fresh in-memory collection.
pub fn in_memory(config: &ReactionServiceConfig) -> Arc<dyn ReactionService> {
    build(Arc::new(MemoryCollection::new(config.collection.clone())))
}
