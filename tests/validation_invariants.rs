//! Validation layer invariant tests
//!
//! - Validation is deterministic
//! - Every offending field is reported, one entry each
//! - Unrecognized fields are dropped, never an error
//! - Types match exactly: no string coercion, no floats for ints
//! - Declared defaults apply only when the field is absent

use serde_json::json;

use greffe::schema::SchemaRegistry;
use greffe::store::Entity;

// =============================================================================
// Determinism
// =============================================================================

/// Same payload validates the same way every time.
#[test]
fn test_validation_is_deterministic() {
    let registry = SchemaRegistry::new();
    let payload = json!({
        "name": "Amina K.",
        "email": "amina@example.org",
        "rating": 4,
        "category": "accueil",
        "message": "Merci.",
        "privacyAccepted": true
    });

    for _ in 0..100 {
        assert!(registry.validate(Entity::Feedback, &payload).is_ok());
    }
}

/// Invalid payload fails consistently with the same error list.
#[test]
fn test_invalid_payload_fails_consistently() {
    let registry = SchemaRegistry::new();
    let payload = json!({ "rating": "five" });

    let first = registry.validate(Entity::Feedback, &payload).unwrap_err();
    for _ in 0..100 {
        let errors = registry.validate(Entity::Feedback, &payload).unwrap_err();
        assert_eq!(errors, first);
    }
}

// =============================================================================
// Error Collection
// =============================================================================

/// Empty payload reports every required field as missing.
#[test]
fn test_empty_payload_reports_all_required() {
    let registry = SchemaRegistry::new();

    let errors = registry.validate(Entity::Feedback, &json!({})).unwrap_err();
    assert_eq!(errors.len(), 6);
    assert!(errors.iter().all(|e| e.message == "Required"));
}

/// Mixed missing and mistyped fields all show up, once each.
#[test]
fn test_mixed_errors_reported_once_per_field() {
    let registry = SchemaRegistry::new();
    let payload = json!({
        "name": "A",
        "email": 12,
        "rating": "high",
        "message": "ok"
        // category and privacyAccepted missing
    });

    let errors = registry.validate(Entity::Feedback, &payload).unwrap_err();
    let mut fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    fields.sort_unstable();
    assert_eq!(
        fields,
        vec!["category", "email", "privacyAccepted", "rating"]
    );
}

// =============================================================================
// Field Handling
// =============================================================================

/// Server-generated fields supplied by the caller are dropped, not errors.
#[test]
fn test_server_fields_dropped() {
    let registry = SchemaRegistry::new();
    let payload = json!({
        "title": "Audience solennelle",
        "content": "Rentrée judiciaire.",
        "category": "evenement",
        "id": "forged",
        "publishedAt": "2020-01-01T00:00:00Z",
        "somethingElse": 42
    });

    let record = registry.validate(Entity::News, &payload).unwrap();
    assert!(!record.contains_key("id"));
    assert!(!record.contains_key("publishedAt"));
    assert!(!record.contains_key("somethingElse"));
}

/// The news priority default applies only when absent.
#[test]
fn test_priority_default_only_when_absent() {
    let registry = SchemaRegistry::new();

    let absent = json!({
        "title": "T", "content": "C", "category": "procedure"
    });
    let record = registry.validate(Entity::News, &absent).unwrap();
    assert_eq!(record["priority"], json!("normal"));

    let explicit = json!({
        "title": "T", "content": "C", "category": "procedure", "priority": "urgent"
    });
    let record = registry.validate(Entity::News, &explicit).unwrap();
    assert_eq!(record["priority"], json!("urgent"));
}

// =============================================================================
// Type Strictness
// =============================================================================

/// Boolean fields reject strings that look like booleans.
#[test]
fn test_bool_rejects_string() {
    let registry = SchemaRegistry::new();
    let payload = json!({
        "name": "A",
        "email": "a@b.c",
        "rating": 3,
        "category": "accueil",
        "message": "ok",
        "privacyAccepted": "true"
    });

    let errors = registry.validate(Entity::Feedback, &payload).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "privacyAccepted");
}

/// Int fields reject floats.
#[test]
fn test_int_rejects_float() {
    let registry = SchemaRegistry::new();
    let payload = json!({
        "score": 7.5,
        "totalQuestions": 10,
        "answers": "[]"
    });

    let errors = registry.validate(Entity::QuizResults, &payload).unwrap_err();
    assert_eq!(errors[0].field, "score");
    assert!(errors[0].message.contains("float"));
}

/// The answers field is opaque: any string passes, non-strings fail.
#[test]
fn test_answers_opaque_string() {
    let registry = SchemaRegistry::new();

    let as_string = json!({
        "score": 1, "totalQuestions": 2, "answers": "not even json"
    });
    assert!(registry.validate(Entity::QuizResults, &as_string).is_ok());

    let as_array = json!({
        "score": 1, "totalQuestions": 2, "answers": [1, 0]
    });
    let errors = registry
        .validate(Entity::QuizResults, &as_array)
        .unwrap_err();
    assert_eq!(errors[0].field, "answers");
}
