//! Core immutable object representation.
//!
//! This module contains the StixObject struct produced by the construction
//! engine. Objects hold their canonical property values in schema
//! declaration order and never change after construction; the write surface
//! exists only to report the violation precisely.

use crate::error::{ObjectError, ObjectResult};
use crate::object::builder::RawValue;
use crate::object::value_objects::Timestamp;
use serde_json::{Map, Value};
use std::hash::{Hash, Hasher};
use std::ops::Index;

/// An immutable, schema-validated object.
///
/// Instances are created exclusively by the construction engine, so every
/// reachable `StixObject` has already passed required/extra/value validation
/// and carries canonical property values. Properties are stored in schema
/// declaration order, which is also the canonical serialization order.
///
/// Read access comes in two equivalent flavors:
///
/// - mapping style: [`get`](Self::get) / indexing (`object["id"]`)
/// - typed accessors: [`id`](Self::id), [`created`](Self::created), ...
///
/// Both return the same canonical values. Since no mutation is ever
/// permitted, shared references to an object are safe for unsynchronized
/// concurrent reads.
#[derive(Debug, Clone)]
pub struct StixObject {
    type_name: String,
    schema_name: String,
    properties: Map<String, Value>,
}

impl StixObject {
    /// Assemble an object from already-validated canonical values.
    ///
    /// Only the construction engine calls this; the property map must be in
    /// schema declaration order.
    pub(crate) fn new(
        type_name: String,
        schema_name: String,
        properties: Map<String, Value>,
    ) -> Self {
        Self {
            type_name,
            schema_name,
            properties,
        }
    }

    /// The type discriminator, e.g. `relationship`.
    pub fn object_type(&self) -> &str {
        &self.type_name
    }

    /// The schema's display name, e.g. `Relationship`.
    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    /// Mapping-style read access to a canonical property value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Read a string-valued property.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Whether the object carries the named property.
    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// The object's identifier, if the schema declares one.
    pub fn id(&self) -> Option<&str> {
        self.get_str("id")
    }

    /// The creation timestamp, parsed back from canonical form.
    pub fn created(&self) -> Option<Timestamp> {
        self.get_str("created")
            .and_then(|value| Timestamp::parse(value).ok())
    }

    /// The modification timestamp, parsed back from canonical form.
    pub fn modified(&self) -> Option<Timestamp> {
        self.get_str("modified")
            .and_then(|value| Timestamp::parse(value).ok())
    }

    /// The full canonical property map, in schema declaration order.
    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    /// Attempt to overwrite a property after construction.
    ///
    /// Always fails: objects are immutable once constructed.
    ///
    /// # Errors
    ///
    /// [`ObjectError::Immutable`] naming the property and the type.
    pub fn set(&mut self, name: &str, _value: impl Into<RawValue>) -> ObjectResult<()> {
        Err(ObjectError::immutable(&self.schema_name, name))
    }

    /// Attempt to delete a property after construction.
    ///
    /// Always fails: objects are immutable once constructed.
    pub fn remove(&mut self, name: &str) -> ObjectResult<()> {
        Err(ObjectError::immutable(&self.schema_name, name))
    }
}

impl Index<&str> for StixObject {
    type Output = Value;

    /// Indexing panics on an undeclared property, matching mapping
    /// semantics; use [`StixObject::get`] for fallible access.
    fn index(&self, name: &str) -> &Value {
        match self.properties.get(name) {
            Some(value) => value,
            None => panic!(
                "no property '{name}' in '{}' object",
                self.schema_name
            ),
        }
    }
}

/// Equality follows the canonical serialized form: two objects are equal
/// iff their canonical renderings are equal. Property maps are always in
/// schema declaration order, so map equality and text equality coincide.
impl PartialEq for StixObject {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name && self.properties == other.properties
    }
}

impl Eq for StixObject {}

impl Hash for StixObject {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_name.hash(state);
        for (name, value) in &self.properties {
            name.hash(state);
            value.to_string().hash(state);
        }
    }
}
