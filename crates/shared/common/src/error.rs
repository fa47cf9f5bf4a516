//! Unified error handling for the concept services.
//!
//! Every service operation fails with an [`AppError`]. Variants carry the
//! identifiers involved so callers can report precise diagnostics; mapping
//! them onto a transport (HTTP status, gRPC code) is left to the caller.

use domain::DomainError;
use thiserror::Error;
use uuid::Uuid;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("{entity} {id} does not exist!")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("Post {post} does not exist in feed {feed}")]
    EntryNotFound { feed: Uuid, post: Uuid },

    #[error("Reaction on {item} by {user} does not exist!")]
    ReactionNotFound { user: Uuid, item: Uuid },

    #[error("Feed with name {0} already exists!")]
    NameConflict(String),

    #[error("Post {post} already exists in feed {feed}")]
    DuplicateEntry { feed: Uuid, post: Uuid },

    // Validation
    #[error("{0} is not Allowed")]
    InvalidValue(String),

    #[error("{0}")]
    Validation(String),

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),

    // Internal
    #[error("Internal error")]
    Internal(String),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound { .. }
            | AppError::EntryNotFound { .. }
            | AppError::ReactionNotFound { .. } => "NOT_FOUND",
            AppError::NameConflict(_) => "NAME_CONFLICT",
            AppError::DuplicateEntry { .. } => "DUPLICATE_ENTRY",
            AppError::InvalidValue(_) => "INVALID_VALUE",
            AppError::Validation(_) => "VALIDATION_ERROR",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// True for every "referenced thing does not exist" failure
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::NotFound { .. }
                | AppError::EntryNotFound { .. }
                | AppError::ReactionNotFound { .. }
        )
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Serialization(e) => {
                tracing::error!("Serialization error: {:?}", e);
                "A stored document could not be processed".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Client errors carry their full message
            _ => self.to_string(),
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::InvalidValue(value) => AppError::InvalidValue(value),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, entity: &'static str, id: Uuid) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, entity: &'static str, id: Uuid) -> AppResult<T> {
        self.ok_or(AppError::NotFound { entity, id })
    }
}

/// Convenience constructors
impl AppError {
    pub fn feed_not_found(id: Uuid) -> Self {
        AppError::NotFound { entity: "Feed", id }
    }

    pub fn name_conflict(name: impl Into<String>) -> Self {
        AppError::NameConflict(name.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
