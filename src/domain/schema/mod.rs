//! Declarative schemas for the persisted collections.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map as JsonMap, Value as JsonValue};
use utoipa::ToSchema;

pub mod entities;
pub mod registry;

pub use entities::{DishSchema, ProductSchema, ReservationSchema, UserSchema};
pub use registry::SchemaRegistry;

/// Value kinds a schema field may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Int,
    Float,
    Bool,
    /// Calendar date as a `YYYY-MM-DD` string.
    Date,
}

/// Declarative description of a single field.
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Applied when the field is absent from the payload.
    pub default: Option<JsonValue>,
    /// Inclusive lower bound for numeric kinds.
    pub min: Option<f64>,
    /// Inclusive upper bound for numeric kinds.
    pub max: Option<f64>,
    pub description: &'static str,
}

impl FieldSpec {
    pub fn required(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self { name, kind, required: true, default: None, min: None, max: None, description }
    }

    pub fn optional(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self { name, kind, required: false, default: None, min: None, max: None, description }
    }

    pub fn with_default(mut self, default: JsonValue) -> Self {
        self.default = Some(default);
        self.required = false;
        self
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }
}

/// A single validation failure, reported per field.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldViolation {
    pub field: String,
    pub reason: String,
}

impl FieldViolation {
    fn new(field: &str, reason: impl Into<String>) -> Self {
        Self { field: field.to_string(), reason: reason.into() }
    }
}

/// Trait that defines the contract for any persisted collection schema.
///
/// Each implementation provides the collection name and its field specs; the
/// default `validate` walks those specs against an inbound JSON payload and
/// either normalizes it (defaults applied) or reports every violated field.
pub trait CollectionSchema: Send + Sync {
    /// Returns the name of the database collection for this schema
    /// (the entity name, lowercased).
    fn collection_name(&self) -> &str;

    /// Returns the declared fields of this schema.
    fn fields(&self) -> &[FieldSpec];

    /// Validates and normalizes a write payload.
    ///
    /// On success the returned object has defaults filled in and optional
    /// absent fields set to null. Unknown fields are passed through untouched;
    /// the underlying store is schema-flexible.
    fn validate(&self, payload: &JsonValue) -> Result<JsonMap<String, JsonValue>, Vec<FieldViolation>> {
        let Some(object) = payload.as_object() else {
            return Err(vec![FieldViolation::new("$body", "payload must be a JSON object")]);
        };

        let mut normalized = object.clone();
        let mut violations = Vec::new();

        for spec in self.fields() {
            match object.get(spec.name) {
                None => {
                    if spec.required {
                        violations.push(FieldViolation::new(spec.name, "field is required"));
                    } else if let Some(default) = &spec.default {
                        normalized.insert(spec.name.to_string(), default.clone());
                    } else {
                        normalized.insert(spec.name.to_string(), JsonValue::Null);
                    }
                }
                // Explicit null is only legal on optional fields without a
                // default; required and defaulted fields are non-nullable.
                Some(JsonValue::Null) => {
                    if spec.required || spec.default.is_some() {
                        violations.push(FieldViolation::new(spec.name, "field may not be null"));
                    }
                }
                Some(value) => {
                    if let Err(reason) = check_value(spec, value) {
                        violations.push(FieldViolation::new(spec.name, reason));
                    }
                }
            }
        }

        if violations.is_empty() {
            Ok(normalized)
        } else {
            Err(violations)
        }
    }
}

fn check_value(spec: &FieldSpec, value: &JsonValue) -> Result<(), String> {
    match spec.kind {
        FieldKind::Text => {
            if !value.is_string() {
                return Err("expected a string".to_string());
            }
        }
        FieldKind::Bool => {
            if !value.is_boolean() {
                return Err("expected a boolean".to_string());
            }
        }
        FieldKind::Int => {
            let Some(n) = value.as_i64() else {
                return Err("expected an integer".to_string());
            };
            check_range(spec, n as f64)?;
        }
        FieldKind::Float => {
            let Some(n) = value.as_f64() else {
                return Err("expected a number".to_string());
            };
            check_range(spec, n)?;
        }
        FieldKind::Date => {
            let Some(s) = value.as_str() else {
                return Err("expected a YYYY-MM-DD date string".to_string());
            };
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|_| format!("'{}' is not a valid YYYY-MM-DD date", s))?;
        }
    }
    Ok(())
}

fn check_range(spec: &FieldSpec, n: f64) -> Result<(), String> {
    if let Some(min) = spec.min {
        if n < min {
            return Err(format!("must be >= {}", min));
        }
    }
    if let Some(max) = spec.max {
        if n > max {
            return Err(format!("must be <= {}", max));
        }
    }
    Ok(())
}
