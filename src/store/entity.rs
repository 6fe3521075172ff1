//! Entity tables
//!
//! One table per entity; no entity references another. Each entity declares
//! which of its fields is server-set at insertion time.

use std::fmt;

/// The four entity tables of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    /// Portal accounts (no HTTP surface; username lookup only)
    Users,
    /// Citizen feedback submissions
    Feedback,
    /// Completed quiz results
    QuizResults,
    /// Published news items
    News,
}

impl Entity {
    /// Table name, used for logging and error context.
    pub fn table_name(self) -> &'static str {
        match self {
            Entity::Users => "users",
            Entity::Feedback => "feedback",
            Entity::QuizResults => "quiz_results",
            Entity::News => "news",
        }
    }

    /// The timestamp field the store sets at insertion, if the entity has one.
    ///
    /// Lists are ordered descending by this field.
    pub fn timestamp_field(self) -> Option<&'static str> {
        match self {
            Entity::Users => None,
            Entity::Feedback => Some("createdAt"),
            Entity::QuizResults => Some("completedAt"),
            Entity::News => Some("publishedAt"),
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.table_name())
    }
}
