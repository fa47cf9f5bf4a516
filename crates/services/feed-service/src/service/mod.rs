//! Service layer - feed use cases.

mod feed_service;

pub use feed_service::{FeedManager, FeedService};
