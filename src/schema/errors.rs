//! Validation error values
//!
//! One `FieldError` per offending field. These serialize directly into the
//! `details` array of a 400 response, so the wire shape lives here.

use std::fmt;

use serde::Serialize;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field name as it appears in the request payload
    pub field: String,
    /// Human-readable reason (missing, wrong type, out of enum)
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Required field absent from the payload
    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(field, "Required")
    }

    /// Value present but of the wrong JSON type
    pub fn type_mismatch(field: impl Into<String>, expected: &str, actual: &str) -> Self {
        Self::new(field, format!("Expected {}, received {}", expected, actual))
    }

    /// Value not in the declared enum set
    pub fn invalid_enum(field: impl Into<String>, allowed: &[&str], actual: &str) -> Self {
        Self::new(
            field,
            format!(
                "Invalid value '{}', expected one of: {}",
                actual,
                allowed.join(", ")
            ),
        )
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field '{}': {}", self.field, self.message)
    }
}
