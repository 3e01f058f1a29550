//! Fluent construction surface for schema-driven objects.
//!
//! This module provides the raw input value type accepted by the
//! construction engine and a builder that models the per-type
//! `Type(*positional, **keyword)` call surface: positional arguments map
//! onto the schema's declared positional order, keyword arguments onto
//! property names.

use crate::error::ObjectResult;
use crate::object::context::CreationContext;
use crate::object::object::StixObject;
use crate::object::value_objects::Timestamp;
use crate::schema::types::TypeSchema;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Raw input for a single property, prior to validation and coercion.
///
/// Construction accepts plain JSON values, already-parsed timestamps, and
/// whole constructed objects (which reference-typed properties coerce to
/// their `id`). `From` impls cover the common shapes so call sites can pass
/// strings, objects, and datetimes directly.
#[derive(Debug, Clone)]
pub enum RawValue {
    /// An untyped JSON value.
    Json(Value),
    /// A constructed object; coerces to its `id` for reference properties.
    Object(StixObject),
    /// An already-normalized timestamp.
    Timestamp(Timestamp),
}

impl From<Value> for RawValue {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Json(Value::String(value.to_string()))
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Json(Value::String(value))
    }
}

impl From<Vec<String>> for RawValue {
    fn from(values: Vec<String>) -> Self {
        Self::Json(Value::Array(values.into_iter().map(Value::String).collect()))
    }
}

impl From<Vec<&str>> for RawValue {
    fn from(values: Vec<&str>) -> Self {
        Self::Json(Value::Array(
            values
                .into_iter()
                .map(|value| Value::String(value.to_string()))
                .collect(),
        ))
    }
}

impl From<StixObject> for RawValue {
    fn from(object: StixObject) -> Self {
        Self::Object(object)
    }
}

impl From<&StixObject> for RawValue {
    fn from(object: &StixObject) -> Self {
        Self::Object(object.clone())
    }
}

impl From<Timestamp> for RawValue {
    fn from(timestamp: Timestamp) -> Self {
        Self::Timestamp(timestamp)
    }
}

impl From<DateTime<Utc>> for RawValue {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::Timestamp(Timestamp::new(datetime))
    }
}

/// Builder for constructing an object against a resolved schema.
///
/// Collects positional and keyword arguments, then hands the whole call to
/// the construction engine, which performs merging, extra/missing/value
/// validation, default filling, and assembly.
///
/// # Example
///
/// ```rust
/// use stix_objects::{CreationContext, TypeRegistry};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let registry = TypeRegistry::with_core_schemas();
///     let context = CreationContext::default();
///
///     let relationship = registry
///         .create("relationship")?
///         .arg("indicator--01234567-89ab-cdef-0123-456789abcdef")
///         .arg("indicates")
///         .arg("malware--fedcba98-7654-3210-fedc-ba9876543210")
///         .build(&context)?;
///
///     assert_eq!(relationship.get_str("relationship_type"), Some("indicates"));
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ObjectBuilder<'a> {
    schema: &'a TypeSchema,
    positional: Vec<RawValue>,
    keyword: Vec<(String, RawValue)>,
}

impl<'a> ObjectBuilder<'a> {
    /// Start a builder for the given schema.
    pub fn new(schema: &'a TypeSchema) -> Self {
        Self {
            schema,
            positional: Vec::new(),
            keyword: Vec::new(),
        }
    }

    /// Append a positional argument, consumed in the schema's declared
    /// positional order.
    pub fn arg(mut self, value: impl Into<RawValue>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Set a property by name.
    pub fn prop(mut self, name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.keyword.push((name.into(), value.into()));
        self
    }

    /// Validate, coerce, fill defaults, and assemble the immutable object.
    pub fn build(self, context: &CreationContext) -> ObjectResult<StixObject> {
        self.schema.construct(self.positional, self.keyword, context)
    }
}

impl TypeSchema {
    /// Start a construction call against this schema.
    pub fn builder(&self) -> ObjectBuilder<'_> {
        ObjectBuilder::new(self)
    }
}
