//! Identifier normalization.
//!
//! Identifiers arrive in several equivalent spellings (upper case, simple,
//! braced, URN). Equality checks always go through the canonical form:
//! the lowercase hyphenated UUID.

use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// Parse any accepted UUID spelling into an identifier.
pub fn parse_id(raw: &str) -> DomainResult<Uuid> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| DomainError::validation(format!("'{}' is not a valid identifier", raw)))
}

/// Canonical string form of an identifier.
pub fn canonical_id(id: &Uuid) -> String {
    id.as_hyphenated().to_string()
}

/// Compare two identifiers by canonical form.
pub fn same_id(a: &Uuid, b: &Uuid) -> bool {
    canonical_id(a) == canonical_id(b)
}
