//! Observability
//!
//! Structured request logging for the HTTP surface.

mod logger;

pub use logger::{Logger, Severity};
