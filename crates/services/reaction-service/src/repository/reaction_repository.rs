//! Reaction repository implementation over a document collection.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use common::{AppError, AppResult};
use docstore::{DocumentCollection, Fields, Filter};
use domain::{NewReaction, Reaction};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Reaction repository trait for dependency injection.
///
/// Reactions are addressed by their (user, item) pair.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find the reaction a user left on an item
    async fn find_by_pair(&self, user: Uuid, item: Uuid) -> AppResult<Option<Reaction>>;

    /// Create a new reaction record
    async fn create(&self, user: Uuid, item: Uuid, reaction: String) -> AppResult<Reaction>;

    /// Overwrite the label of an existing reaction
    async fn update_label(&self, id: Uuid, reaction: String) -> AppResult<()>;

    /// Atomically remove and return the reaction a user left on an item
    async fn take_by_pair(&self, user: Uuid, item: Uuid) -> AppResult<Option<Reaction>>;

    /// Count reactions left on an item by anyone
    async fn count_for_item(&self, item: Uuid) -> AppResult<u64>;
}

fn pair(user: Uuid, item: Uuid) -> Filter {
    Filter::all().eq_id("user", user).eq_id("item", item)
}

/// Concrete implementation of ReactionRepository
pub struct ReactionStore {
    reactions: Arc<dyn DocumentCollection<Reaction>>,
}

impl ReactionStore {
    /// Create new repository instance
    pub fn new(reactions: Arc<dyn DocumentCollection<Reaction>>) -> Self {
        Self { reactions }
    }
}

#[async_trait]
impl ReactionRepository for ReactionStore {
    async fn find_by_pair(&self, user: Uuid, item: Uuid) -> AppResult<Option<Reaction>> {
        self.reactions.read_one(pair(user, item)).await
    }

    async fn create(&self, user: Uuid, item: Uuid, reaction: String) -> AppResult<Reaction> {
        let fields = Fields::from_record(&NewReaction {
            user,
            item,
            reaction,
        })?;
        self.reactions.create_one(fields).await
    }

    async fn update_label(&self, id: Uuid, reaction: String) -> AppResult<()> {
        let fields = Fields::new().set("reaction", reaction)?;
        let ack = self
            .reactions
            .partial_update_one(Filter::by_id(id), fields)
            .await?;

        if ack.matched == 0 {
            return Err(AppError::NotFound {
                entity: "Reaction",
                id,
            });
        }
        Ok(())
    }

    async fn take_by_pair(&self, user: Uuid, item: Uuid) -> AppResult<Option<Reaction>> {
        self.reactions.pop_one(pair(user, item)).await
    }

    async fn count_for_item(&self, item: Uuid) -> AppResult<u64> {
        self.reactions
            .count(Filter::all().eq_id("item", item))
            .await
    }
}
