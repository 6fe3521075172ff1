//! Record store
//!
//! In-process, non-persistent table-per-entity storage keyed by generated
//! identifiers. Contents live for the process lifetime only; the news table is
//! reseeded with fixed sample items at construction.

mod entity;
mod errors;
mod memory;
mod seed;

pub use entity::Entity;
pub use errors::{StoreError, StoreResult};
pub use memory::MemStore;
