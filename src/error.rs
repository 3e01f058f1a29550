//! Error types for object construction, mutation, and parsing.
//!
//! This module provides the complete error surface of the engine as explicit
//! tagged variants, each carrying its structured payload (type name, property
//! name or list, reason string) rather than a generic throwable with string
//! formatting. Callers are expected to match on specific variants.

/// Main error type for object construction, mutation, and parsing.
///
/// Every failure the engine can produce is a variant of this enum. All
/// failures are raised synchronously at the point of construction or
/// mutation attempt, never deferred, and the engine never auto-corrects
/// invalid input.
#[derive(Debug, thiserror::Error)]
pub enum ObjectError {
    /// One or more required properties were absent from the input.
    ///
    /// Carries the full ordered list of missing names (schema declaration
    /// order), never just the first one found.
    #[error("No values for required properties for {type_name}: ({props}).", props = .properties.join(", "))]
    MissingProperties {
        type_name: String,
        properties: Vec<String>,
    },

    /// One or more input properties are not declared in the schema.
    ///
    /// Carries the full list in order of first appearance in the input.
    #[error("Unexpected properties for {type_name}: ({props}).", props = .properties.join(", "))]
    ExtraProperties {
        type_name: String,
        properties: Vec<String>,
    },

    /// A declared property's value failed its coercion, pattern, or
    /// fixed-value check.
    #[error("Invalid value for {type_name} '{property}': {reason}")]
    InvalidValue {
        type_name: String,
        property: String,
        reason: String,
    },

    /// The same property was supplied both positionally and by keyword.
    #[error("Received multiple values for {type_name} property '{property}'.")]
    MultipleValues {
        type_name: String,
        property: String,
    },

    /// A write was attempted on an already-constructed object.
    #[error("Cannot modify '{property}' property in '{type_name}' after creation.")]
    Immutable {
        type_name: String,
        property: String,
    },

    /// The type discriminator does not name a registered schema.
    #[error("Can't parse unknown object type '{type_name}'!")]
    UnknownType { type_name: String },

    /// Raw input could not be decoded into a typed construction call:
    /// undecodable text, a non-object value, or a missing/malformed
    /// `type` discriminator.
    #[error("{message}")]
    Parse { message: String },

    /// JSON serialization errors from the underlying encoder.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// Convenience methods for creating common errors
impl ObjectError {
    /// Create a missing-properties error from the ordered list of names.
    pub fn missing_properties(type_name: impl Into<String>, properties: Vec<String>) -> Self {
        Self::MissingProperties {
            type_name: type_name.into(),
            properties,
        }
    }

    /// Create an extra-properties error from the ordered list of names.
    pub fn extra_properties(type_name: impl Into<String>, properties: Vec<String>) -> Self {
        Self::ExtraProperties {
            type_name: type_name.into(),
            properties,
        }
    }

    /// Create an invalid-value error for a single property.
    pub fn invalid_value(
        type_name: impl Into<String>,
        property: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            type_name: type_name.into(),
            property: property.into(),
            reason: reason.into(),
        }
    }

    /// Create a multiple-values conflict error.
    pub fn multiple_values(type_name: impl Into<String>, property: impl Into<String>) -> Self {
        Self::MultipleValues {
            type_name: type_name.into(),
            property: property.into(),
        }
    }

    /// Create an immutability violation error.
    pub fn immutable(type_name: impl Into<String>, property: impl Into<String>) -> Self {
        Self::Immutable {
            type_name: type_name.into(),
            property: property.into(),
        }
    }

    /// Create an unknown-type error.
    pub fn unknown_type(type_name: impl Into<String>) -> Self {
        Self::UnknownType {
            type_name: type_name.into(),
        }
    }

    /// Create a parse error with a custom message.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}

/// Descriptor-level validation failure, before the engine attaches type and
/// property context.
///
/// Property descriptors know how to reject a value but not which type they
/// belong to; the construction engine wraps this into
/// [`ObjectError::InvalidValue`] with the full context.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct ValueError {
    pub reason: String,
}

impl ValueError {
    /// Create a new descriptor-level failure with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

// Result type aliases for convenience
pub type ObjectResult<T> = Result<T, ObjectError>;
pub type ValueResult<T> = Result<T, ValueError>;
