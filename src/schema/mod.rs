//! Schema definitions, the type registry, and the construction engine.
//!
//! A [`TypeSchema`] is an ordered list of [`PropertyDescriptor`]s keyed by a
//! type discriminator. Schemas are registered once at startup through
//! [`RegistryBuilder`] and frozen into a read-only [`TypeRegistry`], which
//! also serves as the dispatch point for generic parsing.

pub mod builtin;
pub mod registry;
pub mod types;

mod validation;

pub use registry::{RegistryBuilder, TypeRegistry};
pub use types::{Constraint, DefaultRule, PropertyDescriptor, PropertyKind, TypeSchema};
