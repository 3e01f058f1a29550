//! Built-in core STIX schemas.
//!
//! The engine ships the core vocabulary so a registry is usable without any
//! external schema definitions: the relationship SRO plus the indicator,
//! malware, and identity SDOs. Property declaration order is normative — it
//! drives validation order and the canonical serialization order.

use super::types::{DefaultRule, PropertyDescriptor, PropertyKind, TypeSchema};

/// The four properties every core type starts with.
///
/// `type` is fixed to the discriminator and filled automatically when
/// absent; `id` must carry the `<type>--` prefix and defaults to a fresh
/// UUIDv4-based identifier; `created` and `modified` default to the
/// creation context's clock.
fn common_properties(type_name: &str) -> Vec<PropertyDescriptor> {
    vec![
        PropertyDescriptor::new("type", PropertyKind::String)
            .required()
            .with_default(DefaultRule::Constant(type_name.to_string()))
            .must_equal(type_name),
        PropertyDescriptor::new("id", PropertyKind::Identifier)
            .required()
            .with_default(DefaultRule::NewIdentifier)
            .must_start_with(format!("{type_name}--")),
        PropertyDescriptor::new("created", PropertyKind::Timestamp)
            .required()
            .with_default(DefaultRule::CurrentTime),
        PropertyDescriptor::new("modified", PropertyKind::Timestamp)
            .required()
            .with_default(DefaultRule::CurrentTime),
    ]
}

/// The relationship SRO: a typed link between two objects.
///
/// Supports positional construction as
/// `(source_ref, relationship_type, target_ref)`.
pub fn relationship() -> TypeSchema {
    TypeSchema::new(
        "relationship",
        "Relationship",
        "A link between two objects, qualified by the kind of relationship.",
    )
    .with_properties(common_properties("relationship"))
    .with_property(PropertyDescriptor::new("relationship_type", PropertyKind::String).required())
    .with_property(PropertyDescriptor::new("description", PropertyKind::String))
    .with_property(PropertyDescriptor::new("source_ref", PropertyKind::Reference).required())
    .with_property(PropertyDescriptor::new("target_ref", PropertyKind::Reference).required())
    .with_positional(&["source_ref", "relationship_type", "target_ref"])
}

/// The indicator SDO: a pattern that can detect suspicious activity.
pub fn indicator() -> TypeSchema {
    TypeSchema::new(
        "indicator",
        "Indicator",
        "A pattern that can be used to detect suspicious or malicious activity.",
    )
    .with_properties(common_properties("indicator"))
    .with_property(PropertyDescriptor::new("labels", PropertyKind::StringList).required())
    .with_property(PropertyDescriptor::new("name", PropertyKind::String))
    .with_property(PropertyDescriptor::new("description", PropertyKind::String))
    .with_property(PropertyDescriptor::new("pattern", PropertyKind::String).required())
    .with_property(
        PropertyDescriptor::new("valid_from", PropertyKind::Timestamp)
            .required()
            .with_default(DefaultRule::CurrentTime),
    )
}

/// The malware SDO: a characterization of malicious code.
pub fn malware() -> TypeSchema {
    TypeSchema::new(
        "malware",
        "Malware",
        "A characterization of malicious code or software.",
    )
    .with_properties(common_properties("malware"))
    .with_property(PropertyDescriptor::new("labels", PropertyKind::StringList).required())
    .with_property(PropertyDescriptor::new("name", PropertyKind::String).required())
    .with_property(PropertyDescriptor::new("description", PropertyKind::String))
}

/// The identity SDO: an individual, organization, or group.
pub fn identity() -> TypeSchema {
    TypeSchema::new(
        "identity",
        "Identity",
        "An individual, organization, or group, and its role.",
    )
    .with_properties(common_properties("identity"))
    .with_property(PropertyDescriptor::new("name", PropertyKind::String).required())
    .with_property(PropertyDescriptor::new("description", PropertyKind::String))
    .with_property(PropertyDescriptor::new("identity_class", PropertyKind::String).required())
}

/// The complete built-in vocabulary, in registration order.
pub fn core_schemas() -> Vec<TypeSchema> {
    vec![relationship(), indicator(), malware(), identity()]
}
