//! Feed repository implementation over a document collection.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use common::{AppError, AppResult};
use docstore::{DocumentCollection, Fields, Filter};
use domain::{Feed, NewFeed};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Feed repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait FeedRepository: Send + Sync {
    /// Find feed by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Feed>>;

    /// Find feed by its name
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Feed>>;

    /// Create a new feed without posts
    async fn create(&self, name: String) -> AppResult<Feed>;

    /// Overwrite the stored post sequence of a feed
    async fn replace_posts(&self, id: Uuid, posts: Vec<Uuid>) -> AppResult<()>;

    /// List all feeds in insertion order
    async fn list(&self) -> AppResult<Vec<Feed>>;
}

/// Concrete implementation of FeedRepository
pub struct FeedStore {
    feeds: Arc<dyn DocumentCollection<Feed>>,
}

impl FeedStore {
    /// Create new repository instance
    pub fn new(feeds: Arc<dyn DocumentCollection<Feed>>) -> Self {
        Self { feeds }
    }
}

#[async_trait]
impl FeedRepository for FeedStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Feed>> {
        self.feeds.read_one(Filter::by_id(id)).await
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Feed>> {
        self.feeds.read_one(Filter::all().eq("name", name)).await
    }

    async fn create(&self, name: String) -> AppResult<Feed> {
        let fields = Fields::from_record(&NewFeed::named(name))?;
        self.feeds.create_one(fields).await
    }

    async fn replace_posts(&self, id: Uuid, posts: Vec<Uuid>) -> AppResult<()> {
        let fields = Fields::new().set("posts", posts)?;
        let ack = self.feeds.partial_update_one(Filter::by_id(id), fields).await?;

        if ack.matched == 0 {
            return Err(AppError::feed_not_found(id));
        }
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<Feed>> {
        self.feeds.read_many(Filter::all()).await
    }
}
