//! End-to-end behavior of the relationship type: construction with explicit
//! and generated properties, both read-access styles, the full error
//! surface, and parsing from canonical text and decoded mappings.

mod common;

use chrono::{TimeZone, Utc};
use common::*;
use serde_json::json;
use stix_objects::{CreationContext, ObjectError, Timestamp};

const EXPECTED_RELATIONSHIP: &str = r#"{
    "type": "relationship",
    "id": "relationship--00000000-1111-2222-3333-444444444444",
    "created": "2016-04-06T20:06:37.000Z",
    "modified": "2016-04-06T20:06:37.000Z",
    "relationship_type": "indicates",
    "source_ref": "indicator--01234567-89ab-cdef-0123-456789abcdef",
    "target_ref": "malware--fedcba98-7654-3210-fedc-ba9876543210"
}"#;

#[test]
fn relationship_all_required_properties() {
    let registry = registry();
    let now = Utc.with_ymd_and_hms(2016, 4, 6, 20, 6, 37).unwrap();

    let relationship = registry
        .create("relationship")
        .unwrap()
        .prop("type", "relationship")
        .prop("id", RELATIONSHIP_ID)
        .prop("created", now)
        .prop("modified", now)
        .prop("relationship_type", "indicates")
        .prop("source_ref", INDICATOR_ID)
        .prop("target_ref", MALWARE_ID)
        .build(&CreationContext::default())
        .unwrap();

    assert_eq!(relationship.to_canonical_string().unwrap(), EXPECTED_RELATIONSHIP);
    assert_eq!(format!("{relationship}"), EXPECTED_RELATIONSHIP);
}

#[test]
fn relationship_autogenerated_properties() {
    let registry = registry();
    let relationship = relationship_kwargs(&registry).build(&fixed_context()).unwrap();

    // typed accessors
    assert_eq!(relationship.object_type(), "relationship");
    assert_eq!(
        relationship.id(),
        Some("relationship--00000000-0000-0000-0000-000000000001")
    );
    assert_eq!(relationship.created(), Some(fake_time()));
    assert_eq!(relationship.modified(), Some(fake_time()));

    // mapping-style access returns the same canonical values
    assert_eq!(relationship["type"], json!("relationship"));
    assert_eq!(
        relationship["id"],
        json!("relationship--00000000-0000-0000-0000-000000000001")
    );
    assert_eq!(relationship["created"], json!(FAKE_TIME));
    assert_eq!(relationship["modified"], json!(FAKE_TIME));
    assert_eq!(relationship["relationship_type"], json!("indicates"));
    assert_eq!(relationship["source_ref"], json!(INDICATOR_ID));
    assert_eq!(relationship["target_ref"], json!(MALWARE_ID));
}

#[test]
fn relationship_type_must_be_relationship() {
    let registry = registry();
    let error = relationship_kwargs(&registry)
        .prop("type", "xxx")
        .build(&fixed_context())
        .unwrap_err();

    match &error {
        ObjectError::InvalidValue {
            type_name,
            property,
            reason,
        } => {
            assert_eq!(type_name, "Relationship");
            assert_eq!(property, "type");
            assert_eq!(reason, "must equal 'relationship'.");
        }
        other => panic!("Expected InvalidValue, got {other:?}"),
    }
    assert_eq!(
        error.to_string(),
        "Invalid value for Relationship 'type': must equal 'relationship'."
    );
}

#[test]
fn relationship_id_must_start_with_relationship() {
    let registry = registry();
    let error = relationship_kwargs(&registry)
        .prop("id", "my-prefix--")
        .build(&fixed_context())
        .unwrap_err();

    match &error {
        ObjectError::InvalidValue {
            type_name,
            property,
            reason,
        } => {
            assert_eq!(type_name, "Relationship");
            assert_eq!(property, "id");
            assert_eq!(reason, "must start with 'relationship--'.");
        }
        other => panic!("Expected InvalidValue, got {other:?}"),
    }
    assert_eq!(
        error.to_string(),
        "Invalid value for Relationship 'id': must start with 'relationship--'."
    );
}

#[test]
fn relationship_with_no_required_properties() {
    let registry = registry();
    let error = registry
        .create("relationship")
        .unwrap()
        .build(&fixed_context())
        .unwrap_err();

    match error {
        ObjectError::MissingProperties {
            type_name,
            properties,
        } => {
            assert_eq!(type_name, "Relationship");
            assert_eq!(properties, vec!["relationship_type", "source_ref", "target_ref"]);
        }
        other => panic!("Expected MissingProperties, got {other:?}"),
    }
}

#[test]
fn relationship_missing_some_required_properties() {
    let registry = registry();
    let error = registry
        .create("relationship")
        .unwrap()
        .prop("relationship_type", "indicates")
        .build(&fixed_context())
        .unwrap_err();

    match error {
        ObjectError::MissingProperties { properties, .. } => {
            assert_eq!(properties, vec!["source_ref", "target_ref"]);
        }
        other => panic!("Expected MissingProperties, got {other:?}"),
    }
}

#[test]
fn relationship_missing_only_target_ref() {
    let registry = registry();
    let error = registry
        .create("relationship")
        .unwrap()
        .prop("relationship_type", "indicates")
        .prop("source_ref", INDICATOR_ID)
        .build(&fixed_context())
        .unwrap_err();

    match error {
        ObjectError::MissingProperties { properties, .. } => {
            assert_eq!(properties, vec!["target_ref"]);
        }
        other => panic!("Expected MissingProperties, got {other:?}"),
    }
}

#[test]
fn cannot_assign_to_relationship_properties() {
    let registry = registry();
    let mut relationship = relationship_kwargs(&registry).build(&fixed_context()).unwrap();

    let error = relationship
        .set("relationship_type", "derived-from")
        .unwrap_err();
    assert_eq!(
        error.to_string(),
        "Cannot modify 'relationship_type' property in 'Relationship' after creation."
    );

    // the object is unchanged
    assert_eq!(relationship.get_str("relationship_type"), Some("indicates"));
}

#[test]
fn invalid_keyword_to_relationship() {
    let registry = registry();
    let error = relationship_kwargs(&registry)
        .prop("my_custom_property", "foo")
        .build(&fixed_context())
        .unwrap_err();

    match &error {
        ObjectError::ExtraProperties {
            type_name,
            properties,
        } => {
            assert_eq!(type_name, "Relationship");
            assert_eq!(properties, &vec!["my_custom_property".to_string()]);
        }
        other => panic!("Expected ExtraProperties, got {other:?}"),
    }
    assert_eq!(
        error.to_string(),
        "Unexpected properties for Relationship: (my_custom_property)."
    );
}

#[test]
fn create_relationship_from_objects_rather_than_ids() {
    let registry = registry();
    let context = fixed_context();
    let indicator = indicator(&registry, &context);
    let malware = malware(&registry, &context);

    let relationship = registry
        .create("relationship")
        .unwrap()
        .prop("relationship_type", "indicates")
        .prop("source_ref", &indicator)
        .prop("target_ref", &malware)
        .build(&context)
        .unwrap();

    assert_eq!(relationship.get_str("relationship_type"), Some("indicates"));
    assert_eq!(
        relationship.get_str("source_ref"),
        Some("indicator--00000000-0000-0000-0000-000000000001")
    );
    assert_eq!(
        relationship.get_str("target_ref"),
        Some("malware--00000000-0000-0000-0000-000000000002")
    );
    assert_eq!(
        relationship.id(),
        Some("relationship--00000000-0000-0000-0000-000000000003")
    );
}

#[test]
fn create_relationship_with_positional_args() {
    let registry = registry();
    let context = fixed_context();
    let indicator = indicator(&registry, &context);
    let malware = malware(&registry, &context);

    let relationship = registry
        .create("relationship")
        .unwrap()
        .arg(&indicator)
        .arg("indicates")
        .arg(&malware)
        .build(&context)
        .unwrap();

    assert_eq!(relationship.get_str("relationship_type"), Some("indicates"));
    assert_eq!(
        relationship.get_str("source_ref"),
        Some("indicator--00000000-0000-0000-0000-000000000001")
    );
    assert_eq!(
        relationship.get_str("target_ref"),
        Some("malware--00000000-0000-0000-0000-000000000002")
    );
    assert_eq!(
        relationship.id(),
        Some("relationship--00000000-0000-0000-0000-000000000003")
    );
}

#[test]
fn parse_relationship_from_canonical_text() {
    let registry = registry();
    let relationship = registry
        .parse(EXPECTED_RELATIONSHIP, &CreationContext::default())
        .unwrap();

    assert_relationship_contents(&relationship);
}

#[test]
fn parse_relationship_from_decoded_mapping() {
    // Keys deliberately unordered and timestamps without fractional
    // seconds; the canonical object comes out identical.
    let registry = registry();
    let data = json!({
        "created": "2016-04-06T20:06:37Z",
        "id": RELATIONSHIP_ID,
        "modified": "2016-04-06T20:06:37Z",
        "relationship_type": "indicates",
        "source_ref": INDICATOR_ID,
        "target_ref": MALWARE_ID,
        "type": "relationship"
    });
    let relationship = registry
        .parse_value(data, &CreationContext::default())
        .unwrap();

    assert_relationship_contents(&relationship);
}

fn assert_relationship_contents(relationship: &stix_objects::StixObject) {
    let expected_time = Timestamp::new(Utc.with_ymd_and_hms(2016, 4, 6, 20, 6, 37).unwrap());

    assert_eq!(relationship.object_type(), "relationship");
    assert_eq!(relationship.id(), Some(RELATIONSHIP_ID));
    assert_eq!(relationship.created(), Some(expected_time));
    assert_eq!(relationship.modified(), Some(expected_time));
    assert_eq!(relationship.get_str("relationship_type"), Some("indicates"));
    assert_eq!(relationship.get_str("source_ref"), Some(INDICATOR_ID));
    assert_eq!(relationship.get_str("target_ref"), Some(MALWARE_ID));
}
