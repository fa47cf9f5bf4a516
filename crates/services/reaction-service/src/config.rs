//! Reaction service configuration.

use std::env;

use domain::DEFAULT_REACTION_COLLECTION;

/// Reaction service configuration.
#[derive(Debug, Clone)]
pub struct ReactionServiceConfig {
    /// Collection holding reaction documents
    pub collection: String,
}

impl ReactionServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            collection: env::var("REACTION_COLLECTION")
                .unwrap_or_else(|_| DEFAULT_REACTION_COLLECTION.to_string()),
        }
    }
}

impl Default for ReactionServiceConfig {
    fn default() -> Self {
        Self {
            collection: DEFAULT_REACTION_COLLECTION.to_string(),
        }
    }
}
