//! Insert-schema type definitions
//!
//! Supported field types:
//! - string: UTF-8 string
//! - int: 64-bit signed integer (JSON floats rejected)
//! - bool: Boolean
//! - enum: string restricted to a fixed set, with an optional default

use serde_json::Value;

/// Supported field types for insertable payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// 64-bit signed integer
    Int,
    /// Boolean
    Bool,
    /// String restricted to a fixed set of values
    Enum {
        /// Allowed values
        values: &'static [&'static str],
    },
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "int",
            FieldType::Bool => "bool",
            FieldType::Enum { .. } => "string",
        }
    }
}

/// A single field of an insert schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    /// Field name as it appears on the wire (camelCase)
    pub name: &'static str,
    /// Field data type
    pub field_type: FieldType,
    /// Whether the field must be present
    pub required: bool,
    /// Value substituted when an optional field is absent
    pub default: Option<Value>,
}

impl FieldDef {
    /// Create a required string field
    pub fn required_string(name: &'static str) -> Self {
        Self {
            name,
            field_type: FieldType::String,
            required: true,
            default: None,
        }
    }

    /// Create a required int field
    pub fn required_int(name: &'static str) -> Self {
        Self {
            name,
            field_type: FieldType::Int,
            required: true,
            default: None,
        }
    }

    /// Create a required bool field
    pub fn required_bool(name: &'static str) -> Self {
        Self {
            name,
            field_type: FieldType::Bool,
            required: true,
            default: None,
        }
    }

    /// Create an optional enum field with a default value
    pub fn enum_with_default(
        name: &'static str,
        values: &'static [&'static str],
        default: &'static str,
    ) -> Self {
        Self {
            name,
            field_type: FieldType::Enum { values },
            required: false,
            default: Some(Value::String(default.to_string())),
        }
    }
}

/// Insert schema for one entity: the caller-suppliable subset of its fields.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertSchema {
    /// Field definitions, in wire order
    pub fields: Vec<FieldDef>,
}

impl InsertSchema {
    /// Create a new insert schema
    pub fn new(fields: Vec<FieldDef>) -> Self {
        Self { fields }
    }

    /// Look up a field definition by name
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}
