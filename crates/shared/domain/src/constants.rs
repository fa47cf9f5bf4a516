//! Domain-level constants.
//!
//! These constants define business rules and operation acknowledgements.

// =============================================================================
// Reactions
// =============================================================================

/// Hug reaction label
pub const REACTION_HUG: &str = "Hug";

/// Smile reaction label
pub const REACTION_SMILE: &str = "Smile";

/// Cheer reaction label
pub const REACTION_CHEER: &str = "Cheer";

/// All reaction labels a user may attach to an item
pub const DEFINED_REACTIONS: &[&str] = &[REACTION_HUG, REACTION_SMILE, REACTION_CHEER];

// =============================================================================
// Collections
// =============================================================================

/// Default collection holding feed documents
pub const DEFAULT_FEED_COLLECTION: &str = "feeds";

/// Default collection holding reaction documents
pub const DEFAULT_REACTION_COLLECTION: &str = "reactions";

// =============================================================================
// Acknowledgements
// =============================================================================

pub const MSG_FEED_CREATED: &str = "Feed created!";
pub const MSG_POST_ADDED: &str = "Post added to feed!";
pub const MSG_POST_REMOVED: &str = "Post removed from feed!";
pub const MSG_REACTION_ADDED: &str = "Reaction added!";
pub const MSG_REACTION_REMOVED: &str = "Reaction removed!";
