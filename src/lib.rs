//! greffe - In-memory REST backend for a court-of-appeal citizen portal
//!
//! Four resources (feedback, quiz results, news, form downloads) backed by a
//! volatile table-per-entity store seeded with sample news content.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod schema;
pub mod store;
