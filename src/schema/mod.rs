//! Validation layer
//!
//! Per-entity insert schemas: the subset of each entity's fields a caller may
//! supply, with primitive types and constraints. Server-generated fields (id,
//! createdAt, completedAt, publishedAt) are never declared here, so
//! caller-supplied values for them are dropped as unrecognized.

mod errors;
mod types;
mod validator;

pub use errors::FieldError;
pub use types::{FieldDef, FieldType, InsertSchema};
pub use validator::SchemaRegistry;
