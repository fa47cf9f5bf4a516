//! Domain layer - Core concept entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Feeds and reactions are defined here and shared by both concept services.

pub mod constants;
pub mod error;
pub mod feed;
pub mod id;
pub mod reaction;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use feed::{Feed, NewFeed};
pub use id::{canonical_id, parse_id, same_id};
pub use reaction::{NewReaction, Reaction, ReactionKind};
