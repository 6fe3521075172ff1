//! Store error types
//!
//! Store operations always succeed given well-formed input; the only failure
//! mode is a poisoned table lock, which the router maps to a 500.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// A handler panicked while holding the table lock
    #[error("Store lock poisoned")]
    LockPoisoned,
}
