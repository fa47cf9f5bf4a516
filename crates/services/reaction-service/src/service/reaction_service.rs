//! Reaction service - one reaction per user per item.
//!
//! Labels are checked against the vocabulary ignoring case, but stored
//! exactly as the caller spelled them.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{Reaction, ReactionKind};

use crate::repository::ReactionRepository;

/// Reaction service trait for dependency injection.
#[async_trait]
pub trait ReactionService: Send + Sync {
    /// Set a user's reaction on an item, replacing any earlier one
    async fn add_reaction(&self, user: Uuid, item: Uuid, reaction: String) -> AppResult<Reaction>;

    /// Remove a user's reaction on an item
    async fn remove_reaction(&self, user: Uuid, item: Uuid) -> AppResult<Reaction>;

    /// Number of reactions left on an item
    async fn get_reaction_count(&self, item: Uuid) -> AppResult<u64>;
}

/// Concrete implementation of ReactionService using repository.
pub struct ReactionManager {
    repo: Arc<dyn ReactionRepository>,
}

impl ReactionManager {
    /// Create new reaction service instance with repository
    pub fn new(repo: Arc<dyn ReactionRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ReactionService for ReactionManager {
    async fn add_reaction(&self, user: Uuid, item: Uuid, reaction: String) -> AppResult<Reaction> {
        if let Err(err) = ReactionKind::parse(&reaction) {
            warn!(%user, %item, reaction = %reaction, "reaction outside vocabulary");
            return Err(err.into());
        }

        match self.repo.find_by_pair(user, item).await? {
            Some(existing) => {
                self.repo.update_label(existing.id, reaction).await?;
                info!(%user, %item, reaction_id = %existing.id, "reaction replaced");
            }
            None => {
                let created = self.repo.create(user, item, reaction).await?;
                info!(%user, %item, reaction_id = %created.id, "reaction added");
            }
        }

        // Removed by a concurrent caller between the write and this read
        self.repo
            .find_by_pair(user, item)
            .await?
            .ok_or(AppError::ReactionNotFound { user, item })
    }

    async fn remove_reaction(&self, user: Uuid, item: Uuid) -> AppResult<Reaction> {
        let removed = self
            .repo
            .take_by_pair(user, item)
            .await?
            .ok_or(AppError::ReactionNotFound { user, item })?;

        info!(%user, %item, reaction_id = %removed.id, "reaction removed");
        Ok(removed)
    }

    async fn get_reaction_count(&self, item: Uuid) -> AppResult<u64> {
        let count = self.repo.count_for_item(item).await?;
        debug!(%item, count, "reactions counted");
        Ok(count)
    }
}
