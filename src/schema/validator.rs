//! Payload validation against insert schemas
//!
//! Validation semantics:
//! - All required fields must be present and non-null
//! - Field types must exactly match (no coercion from strings, no floats for int)
//! - Unrecognized fields are silently dropped, never an error
//! - Declared defaults are substituted for absent optional fields
//! - Every offending field is reported, not just the first
//!
//! Validation occurs before any store access and does not mutate its input.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::store::Entity;

use super::errors::FieldError;
use super::types::{FieldDef, FieldType, InsertSchema};

/// Holds the insert schema for every entity and validates inbound payloads.
///
/// Constructed once at startup next to the store; validation is deterministic.
pub struct SchemaRegistry {
    schemas: HashMap<Entity, InsertSchema>,
}

impl SchemaRegistry {
    /// Build the registry with the four entity insert schemas.
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        schemas.insert(
            Entity::Users,
            InsertSchema::new(vec![
                FieldDef::required_string("username"),
                FieldDef::required_string("password"),
            ]),
        );

        schemas.insert(
            Entity::Feedback,
            InsertSchema::new(vec![
                FieldDef::required_string("name"),
                FieldDef::required_string("email"),
                FieldDef::required_int("rating"),
                FieldDef::required_string("category"),
                FieldDef::required_string("message"),
                FieldDef::required_bool("privacyAccepted"),
            ]),
        );

        schemas.insert(
            Entity::QuizResults,
            InsertSchema::new(vec![
                FieldDef::required_int("score"),
                FieldDef::required_int("totalQuestions"),
                FieldDef::required_string("answers"),
            ]),
        );

        schemas.insert(
            Entity::News,
            InsertSchema::new(vec![
                FieldDef::required_string("title"),
                FieldDef::required_string("content"),
                FieldDef::required_string("category"),
                FieldDef::enum_with_default("priority", &["normal", "urgent"], "normal"),
            ]),
        );

        Self { schemas }
    }

    /// Returns the insert schema for an entity.
    pub fn schema(&self, entity: Entity) -> &InsertSchema {
        // Every entity is registered in new()
        &self.schemas[&entity]
    }

    /// Validates a raw payload against an entity's insert schema.
    ///
    /// On success returns the insertable record: recognized fields only, typed
    /// values, defaults applied. On failure returns one error per offending
    /// field.
    pub fn validate(
        &self,
        entity: Entity,
        payload: &Value,
    ) -> Result<Map<String, Value>, Vec<FieldError>> {
        let schema = self.schema(entity);

        let obj = match payload.as_object() {
            Some(obj) => obj,
            None => {
                return Err(vec![FieldError::type_mismatch(
                    "$root",
                    "object",
                    json_type_name(payload),
                )])
            }
        };

        let mut record = Map::new();
        let mut errors = Vec::new();

        for def in &schema.fields {
            match obj.get(def.name) {
                Some(value) => match check_value(def, value) {
                    Ok(()) => {
                        record.insert(def.name.to_string(), value.clone());
                    }
                    Err(err) => errors.push(err),
                },
                None => {
                    if def.required {
                        errors.push(FieldError::missing(def.name));
                    } else if let Some(default) = &def.default {
                        record.insert(def.name.to_string(), default.clone());
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(record)
        } else {
            Err(errors)
        }
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks a single present value against its field definition.
fn check_value(def: &FieldDef, value: &Value) -> Result<(), FieldError> {
    match &def.field_type {
        FieldType::String => {
            if !value.is_string() {
                return Err(type_error(def, value));
            }
        }
        FieldType::Int => {
            // Must be an integer, not a float and not a numeric string
            if !value.is_i64() && !value.is_u64() {
                return Err(type_error(def, value));
            }
        }
        FieldType::Bool => {
            if !value.is_boolean() {
                return Err(type_error(def, value));
            }
        }
        FieldType::Enum { values } => {
            let s = value.as_str().ok_or_else(|| type_error(def, value))?;
            if !values.iter().any(|v| *v == s) {
                return Err(FieldError::invalid_enum(def.name, values, s));
            }
        }
    }
    Ok(())
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Creates a type mismatch error for a field.
fn type_error(def: &FieldDef, actual: &Value) -> FieldError {
    FieldError::type_mismatch(def.name, def.field_type.type_name(), json_type_name(actual))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new()
    }

    #[test]
    fn test_valid_feedback_passes() {
        let payload = json!({
            "name": "Amina K.",
            "email": "amina@example.org",
            "rating": 4,
            "category": "accueil",
            "message": "Service rapide et clair.",
            "privacyAccepted": true
        });

        let record = registry().validate(Entity::Feedback, &payload).unwrap();
        assert_eq!(record["rating"], json!(4));
        assert_eq!(record["privacyAccepted"], json!(true));
    }

    #[test]
    fn test_missing_required_field_reported_by_name() {
        let payload = json!({
            "name": "Amina K.",
            "email": "amina@example.org",
            "category": "accueil",
            "message": "Service rapide.",
            "privacyAccepted": true
        });

        let errors = registry()
            .validate(Entity::Feedback, &payload)
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "rating");
    }

    #[test]
    fn test_empty_payload_reports_every_required_field() {
        let errors = registry()
            .validate(Entity::Feedback, &json!({}))
            .unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["name", "email", "rating", "category", "message", "privacyAccepted"]
        );
    }

    #[test]
    fn test_extra_fields_dropped_silently() {
        let payload = json!({
            "score": 8,
            "totalQuestions": 10,
            "answers": "[1,0,1]",
            "id": "forged",
            "completedAt": "2020-01-01T00:00:00Z"
        });

        let record = registry().validate(Entity::QuizResults, &payload).unwrap();
        assert!(!record.contains_key("id"));
        assert!(!record.contains_key("completedAt"));
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_numeric_string_is_type_error() {
        let payload = json!({
            "score": "8",
            "totalQuestions": 10,
            "answers": "[]"
        });

        let errors = registry()
            .validate(Entity::QuizResults, &payload)
            .unwrap_err();
        assert_eq!(errors[0].field, "score");
        assert!(errors[0].message.contains("string"));
    }

    #[test]
    fn test_float_rejected_for_int_field() {
        let payload = json!({
            "score": 8.5,
            "totalQuestions": 10,
            "answers": "[]"
        });

        let errors = registry()
            .validate(Entity::QuizResults, &payload)
            .unwrap_err();
        assert_eq!(errors[0].field, "score");
    }

    #[test]
    fn test_null_is_type_error() {
        let payload = json!({
            "username": null,
            "password": "secret"
        });

        let errors = registry().validate(Entity::Users, &payload).unwrap_err();
        assert_eq!(errors[0].field, "username");
        assert!(errors[0].message.contains("null"));
    }

    #[test]
    fn test_priority_default_applied() {
        let payload = json!({
            "title": "Audience solennelle",
            "content": "Rentrée judiciaire le 10 janvier.",
            "category": "evenement"
        });

        let record = registry().validate(Entity::News, &payload).unwrap();
        assert_eq!(record["priority"], json!("normal"));
    }

    #[test]
    fn test_priority_outside_enum_rejected() {
        let payload = json!({
            "title": "Audience",
            "content": "...",
            "category": "evenement",
            "priority": "low"
        });

        let errors = registry().validate(Entity::News, &payload).unwrap_err();
        assert_eq!(errors[0].field, "priority");
    }

    #[test]
    fn test_non_object_payload_is_root_error() {
        let errors = registry()
            .validate(Entity::Feedback, &json!([1, 2, 3]))
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "$root");
    }

    #[test]
    fn test_multiple_errors_collected() {
        let payload = json!({
            "name": 7,
            "email": "a@b.c",
            "rating": "five",
            "category": "accueil",
            "message": "ok",
            "privacyAccepted": "yes"
        });

        let errors = registry()
            .validate(Entity::Feedback, &payload)
            .unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "rating", "privacyAccepted"]);
    }
}
