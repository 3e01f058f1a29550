//! Shared fixtures for integration tests.
//!
//! Identifier constants and a frozen creation context so that generated
//! defaults are the same on every run.

#![allow(dead_code)]

use stix_objects::{CreationContext, ObjectBuilder, StixObject, Timestamp, TypeRegistry};

pub const RELATIONSHIP_ID: &str = "relationship--00000000-1111-2222-3333-444444444444";
pub const INDICATOR_ID: &str = "indicator--01234567-89ab-cdef-0123-456789abcdef";
pub const MALWARE_ID: &str = "malware--fedcba98-7654-3210-fedc-ba9876543210";

/// Frozen instant used for all deterministic fixtures.
pub const FAKE_TIME: &str = "2017-01-01T12:34:56.000Z";

pub fn registry() -> TypeRegistry {
    TypeRegistry::with_core_schemas()
}

pub fn fake_time() -> Timestamp {
    Timestamp::parse(FAKE_TIME).unwrap()
}

/// A context with a frozen clock and sequenced identifiers starting at 1.
pub fn fixed_context() -> CreationContext {
    CreationContext::fixed(fake_time())
}

/// The minimal valid keyword arguments for a relationship.
pub fn relationship_kwargs(registry: &TypeRegistry) -> ObjectBuilder<'_> {
    registry
        .create("relationship")
        .unwrap()
        .prop("relationship_type", "indicates")
        .prop("source_ref", INDICATOR_ID)
        .prop("target_ref", MALWARE_ID)
}

/// A minimal valid indicator, with generated id and timestamps.
pub fn indicator(registry: &TypeRegistry, context: &CreationContext) -> StixObject {
    registry
        .create("indicator")
        .unwrap()
        .prop("labels", vec!["malicious-activity"])
        .prop("pattern", "[file:hashes.md5 = 'd41d8cd98f00b204e9800998ecf8427e']")
        .build(context)
        .unwrap()
}

/// A minimal valid malware object, with generated id and timestamps.
pub fn malware(registry: &TypeRegistry, context: &CreationContext) -> StixObject {
    registry
        .create("malware")
        .unwrap()
        .prop("labels", vec!["ransomware"])
        .prop("name", "Cryptolocker")
        .build(context)
        .unwrap()
}
