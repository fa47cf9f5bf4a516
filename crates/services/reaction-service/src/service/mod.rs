//! Service layer - reaction use cases.

mod reaction_service;

pub use reaction_service::{ReactionManager, ReactionService};
