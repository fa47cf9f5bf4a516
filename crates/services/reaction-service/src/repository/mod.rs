//! Repository layer for data access.

mod reaction_repository;

pub use reaction_repository::{ReactionRepository, ReactionStore};

#[cfg(any(test, feature = "test-utils"))]
pub use reaction_repository::MockReactionRepository;
