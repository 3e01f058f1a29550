//! Schema-driven STIX 2.x object engine for Rust.
//!
//! Provides construction, validation, and canonical serialization of
//! immutable cyber-threat-intelligence objects against declarative
//! per-type schemas.
//!
//! # Core Components
//!
//! - [`TypeRegistry`] - Frozen mapping from type discriminators to schemas,
//!   and the dispatch point for generic parsing
//! - [`TypeSchema`] / [`PropertyDescriptor`] - Declarative property tables
//!   with required flags, coercions, defaults, and constraints
//! - [`StixObject`] - Immutable, schema-validated object with canonical
//!   serialization
//! - [`CreationContext`] - Clock and id source for generated defaults
//!
//! # Quick Start
//!
//! ```rust
//! use stix_objects::{CreationContext, TypeRegistry};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = TypeRegistry::with_core_schemas();
//!     let context = CreationContext::default();
//!
//!     let indicator = registry
//!         .create("indicator")?
//!         .prop("labels", vec!["malicious-activity"])
//!         .prop("pattern", "[url:value = 'http://198.51.100.1/malicious']")
//!         .build(&context)?;
//!
//!     // Constructed objects coerce to their id in reference properties.
//!     let relationship = registry
//!         .create("relationship")?
//!         .arg(&indicator)
//!         .arg("indicates")
//!         .arg("malware--fedcba98-7654-3210-fedc-ba9876543210")
//!         .build(&context)?;
//!
//!     assert_eq!(relationship.get_str("source_ref"), indicator.id());
//!     println!("{relationship}");
//!     Ok(())
//! }
//! ```
//!
//! Objects never change after construction: write attempts fail with a
//! precise immutability error, and equality follows the canonical
//! serialized form, so `registry.parse(&obj.to_canonical_string()?, &ctx)`
//! always round-trips to an equal object.

pub mod error;
pub mod object;
pub mod schema;

// Re-export commonly used types for convenience
pub use error::{ObjectError, ObjectResult, ValueError, ValueResult};
pub use object::{
    Clock, CreationContext, IdSource, ObjectBuilder, RawValue, StixIdentifier, StixObject,
    Timestamp,
};
pub use schema::{
    Constraint, DefaultRule, PropertyDescriptor, PropertyKind, RegistryBuilder, TypeRegistry,
    TypeSchema,
};
