//! Feed domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::id::same_id;

/// A named, ordered collection of post identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    /// Post identifiers in insertion order, without duplicates
    pub posts: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Feed {
    /// Check if a post is already part of this feed
    pub fn contains_post(&self, post: &Uuid) -> bool {
        self.posts.iter().any(|existing| same_id(existing, post))
    }

    /// Posts after appending `post` at the end.
    pub fn posts_with(&self, post: Uuid) -> Vec<Uuid> {
        let mut posts = self.posts.clone();
        posts.push(post);
        posts
    }

    /// Posts after dropping every entry equal to `post`.
    pub fn posts_without(&self, post: &Uuid) -> Vec<Uuid> {
        self.posts
            .iter()
            .filter(|existing| !same_id(existing, post))
            .copied()
            .collect()
    }
}

/// Feed creation data transfer object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFeed {
    pub name: String,
    pub posts: Vec<Uuid>,
}

impl NewFeed {
    /// New feeds always start without posts
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            posts: Vec::new(),
        }
    }
}
