//! Identifier value object for STIX object identifiers.
//!
//! This module provides a type-safe wrapper around STIX identifiers with
//! built-in validation. Identifiers take the form `<type>--<suffix>` where
//! the suffix is normally a UUIDv4; the type prefix ties an identifier to
//! the schema of the object it names.

use crate::error::{ValueError, ValueResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated STIX identifier.
///
/// StixIdentifier enforces the `<type>--<suffix>` shape at construction
/// time. Whether the prefix matches a particular schema is a per-schema
/// constraint checked by the construction engine, not here.
///
/// ## Validation Rules
///
/// - Must not be empty
/// - Must contain the `--` separator with a non-empty type prefix
///
/// ## Examples
///
/// ```rust
/// use stix_objects::StixIdentifier;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let id = StixIdentifier::new(
///         "indicator--01234567-89ab-cdef-0123-456789abcdef".to_string(),
///     )?;
///     assert_eq!(id.type_prefix(), "indicator");
///
///     let invalid = StixIdentifier::new("no-separator".to_string());
///     assert!(invalid.is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StixIdentifier(String);

impl StixIdentifier {
    /// Create a new StixIdentifier with validation.
    ///
    /// # Returns
    ///
    /// * `Ok(StixIdentifier)` - If the value has the `<type>--<suffix>` shape
    /// * `Err(ValueError)` - If the value violates validation rules
    pub fn new(value: String) -> ValueResult<Self> {
        Self::validate_format(&value)?;
        Ok(Self(value))
    }

    /// Build an identifier from a type name and a generated suffix.
    ///
    /// Used by default generators; the suffix is typically a UUIDv4 or a
    /// deterministic sequence value.
    pub fn from_parts(type_name: &str, suffix: impl fmt::Display) -> Self {
        Self(format!("{type_name}--{suffix}"))
    }

    /// Get the type prefix of the identifier (the part before `--`).
    pub fn type_prefix(&self) -> &str {
        self.0.split_once("--").map_or("", |(prefix, _)| prefix)
    }

    /// Get the string representation of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the owned string value of the identifier.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Validate the format of an identifier string.
    fn validate_format(value: &str) -> ValueResult<()> {
        if value.is_empty() {
            return Err(ValueError::new("must not be empty."));
        }
        match value.split_once("--") {
            Some((prefix, _)) if !prefix.is_empty() => Ok(()),
            _ => Err(ValueError::new("must contain a '--' separator.")),
        }
    }
}

impl fmt::Display for StixIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for StixIdentifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StixIdentifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
