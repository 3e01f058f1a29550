//! Immutable object model with type-safe value objects.
//!
//! This module provides the object side of the engine: the immutable
//! [`StixObject`] produced by construction, the raw-input and builder call
//! surface, the creation context that makes generated defaults
//! reproducible, and the validated domain primitives.
//!
//! # Key Components
//!
//! * [`StixObject`] - Immutable, schema-validated object
//! * [`ObjectBuilder`] / [`RawValue`] - Positional/keyword construction surface
//! * [`CreationContext`] - Clock and id source for default generators
//! * [`value_objects`] - Validated domain primitives (identifiers, timestamps)

pub mod builder;
pub mod context;
pub mod object;
pub mod serialization;
pub mod value_objects;

pub use builder::{ObjectBuilder, RawValue};
pub use context::{Clock, CreationContext, IdSource};
pub use object::StixObject;
pub use value_objects::{StixIdentifier, Timestamp};
