//! Repository layer for data access.

mod feed_repository;

pub use feed_repository::{FeedRepository, FeedStore};

#[cfg(any(test, feature = "test-utils"))]
pub use feed_repository::MockFeedRepository;
