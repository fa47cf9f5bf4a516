//! Feed service configuration.

use std::env;

use domain::DEFAULT_FEED_COLLECTION;

/// Feed service configuration.
#[derive(Debug, Clone)]
pub struct FeedServiceConfig {
    /// Collection holding feed documents
    pub collection: String,
}

impl FeedServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            collection: env::var("FEED_COLLECTION")
                .unwrap_or_else(|_| DEFAULT_FEED_COLLECTION.to_string()),
        }
    }
}

impl Default for FeedServiceConfig {
    fn default() -> Self {
        Self {
            collection: DEFAULT_FEED_COLLECTION.to_string(),
        }
    }
}
