//! Document store shared by the concept services.
//!
//! Provides the [`DocumentCollection`] abstraction and two implementations:
//! - [`MemoryCollection`] for single-process use and tests
//! - [`SqlCollection`] persisting documents through SeaORM

pub mod collection;
pub mod entities;
pub mod infra;
pub mod memory;
pub mod query;
pub mod sql;

pub use collection::{
    Document, DocumentCollection, UpdateAck, CREATED_AT_FIELD, ID_FIELD, UPDATED_AT_FIELD,
};
pub use infra::{Database, Migrator};
pub use memory::MemoryCollection;
pub use query::{Fields, Filter};
pub use sql::SqlCollection;
