//! Feed service - named, ordered collections of post references.
//!
//! Adding or removing a post reads the feed, computes the new post
//! sequence and writes it back. The two steps are separate store calls:
//! concurrent edits of the same feed race and the last write wins.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::Feed;

use crate::repository::FeedRepository;

/// Feed service trait for dependency injection.
#[async_trait]
pub trait FeedService: Send + Sync {
    /// Create an empty feed under a name no other feed uses
    async fn create_feed(&self, name: String) -> AppResult<Feed>;

    /// Append a post to the end of a feed
    async fn add_post_to_feed(&self, feed_id: Uuid, post_id: Uuid) -> AppResult<()>;

    /// Drop a post from a feed and return the refreshed feed
    async fn remove_post_from_feed(&self, feed_id: Uuid, post_id: Uuid) -> AppResult<Feed>;

    /// Get a feed with its posts
    async fn get_feed_posts(&self, feed_id: Uuid) -> AppResult<Feed>;

    /// List all feeds
    async fn list_feeds(&self) -> AppResult<Vec<Feed>>;
}

/// Concrete implementation of FeedService using repository.
pub struct FeedManager {
    repo: Arc<dyn FeedRepository>,
}

impl FeedManager {
    /// Create new feed service instance with repository
    pub fn new(repo: Arc<dyn FeedRepository>) -> Self {
        Self { repo }
    }

    async fn require_feed(&self, feed_id: Uuid) -> AppResult<Feed> {
        self.repo
            .find_by_id(feed_id)
            .await?
            .ok_or_not_found("Feed", feed_id)
    }
}

#[async_trait]
impl FeedService for FeedManager {
    async fn create_feed(&self, name: String) -> AppResult<Feed> {
        if self.repo.find_by_name(&name).await?.is_some() {
            warn!(feed_name = %name, "feed name already taken");
            return Err(AppError::name_conflict(name));
        }

        let feed = self.repo.create(name).await?;
        info!(feed_id = %feed.id, feed_name = %feed.name, "feed created");
        Ok(feed)
    }

    async fn add_post_to_feed(&self, feed_id: Uuid, post_id: Uuid) -> AppResult<()> {
        let feed = self.require_feed(feed_id).await?;

        if feed.contains_post(&post_id) {
            warn!(%feed_id, %post_id, "post already in feed");
            return Err(AppError::DuplicateEntry {
                feed: feed_id,
                post: post_id,
            });
        }

        self.repo
            .replace_posts(feed_id, feed.posts_with(post_id))
            .await?;
        info!(%feed_id, %post_id, "post added to feed");
        Ok(())
    }

    async fn remove_post_from_feed(&self, feed_id: Uuid, post_id: Uuid) -> AppResult<Feed> {
        let feed = self.require_feed(feed_id).await?;

        if !feed.contains_post(&post_id) {
            return Err(AppError::EntryNotFound {
                feed: feed_id,
                post: post_id,
            });
        }

        self.repo
            .replace_posts(feed_id, feed.posts_without(&post_id))
            .await?;
        info!(%feed_id, %post_id, "post removed from feed");

        self.get_feed_posts(feed_id).await
    }

    async fn get_feed_posts(&self, feed_id: Uuid) -> AppResult<Feed> {
        let feed = self.require_feed(feed_id).await?;
        debug!(%feed_id, posts = feed.posts.len(), "feed loaded");
        Ok(feed)
    }

    async fn list_feeds(&self) -> AppResult<Vec<Feed>> {
        self.repo.list().await
    }
}
