//! Database entities.

pub mod document;
