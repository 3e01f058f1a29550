//! Core schema type definitions for STIX objects.
//!
//! This module contains the fundamental data structures that define object
//! schemas: per-property descriptors with their coercion kind, default
//! generator, and constraint, plus the type schema that owns them.

/// Coercion applied to a property's raw input value.
///
/// Each kind maps raw input onto exactly one canonical representation;
/// anything that doesn't fit is an invalid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// Plain string value.
    String,
    /// RFC 3339 timestamp, normalized to UTC with millisecond precision.
    Timestamp,
    /// A `<type>--<suffix>` identifier naming this object.
    Identifier,
    /// A reference to another object: accepts either an identifier string
    /// or a constructed object, which coerces to its `id`.
    Reference,
    /// Non-empty list of strings.
    StringList,
}

/// Generator invoked when a property is absent from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultRule {
    /// A fresh `<type>--<uuid>` identifier from the creation context.
    NewIdentifier,
    /// The creation context's current time. All `CurrentTime` defaults in
    /// one construction share a single clock reading.
    CurrentTime,
    /// A fixed literal, e.g. the type discriminator itself.
    Constant(String),
}

/// Value constraint checked after coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// The canonical value must equal this string exactly.
    /// Violation reason: `must equal '<value>'.`
    Equals(String),
    /// The canonical value must start with this prefix.
    /// Violation reason: `must start with '<prefix>'.`
    StartsWith(String),
}

/// Definition of a single object property.
///
/// Defines the complete validation pipeline for one field: coercion kind,
/// required flag, optional default generator, and optional constraint.
#[derive(Debug, Clone)]
pub struct PropertyDescriptor {
    /// Property name as it appears in input and in the canonical form.
    pub name: String,
    /// Whether the property must be present (or defaulted).
    pub required: bool,
    /// Coercion applied to raw input.
    pub kind: PropertyKind,
    /// Generator for absent values, if any.
    pub default: Option<DefaultRule>,
    /// Post-coercion constraint, if any.
    pub constraint: Option<Constraint>,
}

impl PropertyDescriptor {
    /// Create an optional, unconstrained descriptor of the given kind.
    pub fn new(name: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            name: name.into(),
            required: false,
            kind,
            default: None,
            constraint: None,
        }
    }

    /// Mark the property as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attach a default generator for absent values.
    pub fn with_default(mut self, rule: DefaultRule) -> Self {
        self.default = Some(rule);
        self
    }

    /// Constrain the canonical value to equal `value` exactly.
    pub fn must_equal(mut self, value: impl Into<String>) -> Self {
        self.constraint = Some(Constraint::Equals(value.into()));
        self
    }

    /// Constrain the canonical value to start with `prefix`.
    pub fn must_start_with(mut self, prefix: impl Into<String>) -> Self {
        self.constraint = Some(Constraint::StartsWith(prefix.into()));
        self
    }
}

/// A complete object schema.
///
/// Owns its property descriptors; declaration order is normative and drives
/// both validation order and the canonical serialization order.
#[derive(Debug, Clone)]
pub struct TypeSchema {
    /// The type discriminator, e.g. `relationship`.
    pub type_name: String,
    /// Human-readable name used in error messages, e.g. `Relationship`.
    pub name: String,
    /// Schema description.
    pub description: String,
    /// Ordered property descriptors.
    pub properties: Vec<PropertyDescriptor>,
    /// Ordered subset of property names usable for positional construction.
    pub positional: Vec<String>,
}

impl TypeSchema {
    /// Create an empty schema for the given discriminator and display name.
    pub fn new(
        type_name: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
            description: description.into(),
            properties: Vec::new(),
            positional: Vec::new(),
        }
    }

    /// Append a property descriptor (declaration order is significant).
    pub fn with_property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }

    /// Append several property descriptors in order.
    pub fn with_properties(mut self, properties: Vec<PropertyDescriptor>) -> Self {
        self.properties.extend(properties);
        self
    }

    /// Declare the positional construction order.
    pub fn with_positional(mut self, names: &[&str]) -> Self {
        self.positional = names.iter().map(|name| (*name).to_string()).collect();
        self
    }

    /// Look up a descriptor by property name.
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|property| property.name == name)
    }

    /// Whether the schema declares a property with this name.
    pub fn declares(&self, name: &str) -> bool {
        self.property(name).is_some()
    }
}
