//! Type registry for registering and resolving object schemas.
//!
//! The registry has a two-phase lifecycle enforced at the type level: a
//! mutable [`RegistryBuilder`] used during startup registration, and the
//! frozen [`TypeRegistry`] it builds, which is read-only and therefore safe
//! for unsynchronized concurrent reads. Generic parsing dispatches through
//! the registry by reading the `type` discriminator from raw input.

use super::builtin;
use super::types::TypeSchema;
use crate::error::{ObjectError, ObjectResult};
use crate::object::builder::{ObjectBuilder, RawValue};
use crate::object::context::CreationContext;
use crate::object::object::StixObject;
use log::{debug, trace};
use serde_json::Value;
use std::collections::HashMap;

/// Registration-phase registry.
///
/// Collects schemas during startup; [`build`](Self::build) freezes them into
/// a read-only [`TypeRegistry`]. Registering the same discriminator twice
/// keeps the later schema, matching last-write-wins startup configuration.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    schemas: Vec<TypeSchema>,
}

impl RegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema under its type discriminator.
    pub fn register(mut self, schema: TypeSchema) -> Self {
        trace!("Registering schema '{}'", schema.type_name);
        self.schemas.retain(|existing| existing.type_name != schema.type_name);
        self.schemas.push(schema);
        self
    }

    /// Freeze the registered schemas into a read-only registry.
    pub fn build(self) -> TypeRegistry {
        let index = self
            .schemas
            .iter()
            .enumerate()
            .map(|(position, schema)| (schema.type_name.clone(), position))
            .collect();
        debug!("Built type registry with {} schemas", self.schemas.len());
        TypeRegistry {
            schemas: self.schemas,
            index,
        }
    }
}

/// Frozen, read-only mapping from type discriminators to schemas.
///
/// Built once at startup and never mutated afterward; shared references can
/// be handed to any number of threads.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    schemas: Vec<TypeSchema>,
    index: HashMap<String, usize>,
}

impl TypeRegistry {
    /// Start an empty registration phase.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Build a registry preloaded with the core STIX vocabulary
    /// (relationship, indicator, malware, identity).
    pub fn with_core_schemas() -> Self {
        builtin::core_schemas()
            .into_iter()
            .fold(Self::builder(), RegistryBuilder::register)
            .build()
    }

    /// Resolve a discriminator to its schema.
    ///
    /// # Errors
    ///
    /// [`ObjectError::UnknownType`] if the discriminator is not registered.
    pub fn resolve(&self, type_name: &str) -> ObjectResult<&TypeSchema> {
        self.get(type_name)
            .ok_or_else(|| ObjectError::unknown_type(type_name))
    }

    /// Look up a schema without producing an error.
    pub fn get(&self, type_name: &str) -> Option<&TypeSchema> {
        self.index
            .get(type_name)
            .map(|position| &self.schemas[*position])
    }

    /// All registered schemas, in registration order.
    pub fn schemas(&self) -> &[TypeSchema] {
        &self.schemas
    }

    /// All registered discriminators, in registration order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.schemas.iter().map(|schema| schema.type_name.as_str())
    }

    /// Start a construction call for the named type.
    ///
    /// # Errors
    ///
    /// [`ObjectError::UnknownType`] if the discriminator is not registered.
    pub fn create(&self, type_name: &str) -> ObjectResult<ObjectBuilder<'_>> {
        Ok(self.resolve(type_name)?.builder())
    }

    /// Parse canonical text into the concrete object named by its `type`
    /// discriminator.
    ///
    /// # Errors
    ///
    /// * [`ObjectError::Parse`] - undecodable text, non-object input, or a
    ///   missing/malformed discriminator
    /// * [`ObjectError::UnknownType`] - unregistered discriminator
    /// * construction errors from the resolved schema
    pub fn parse(&self, text: &str, context: &CreationContext) -> ObjectResult<StixObject> {
        let value: Value = serde_json::from_str(text)
            .map_err(|error| ObjectError::parse(format!("Can't parse input text: {error}.")))?;
        self.parse_value(value, context)
    }

    /// Parse an already-decoded mapping into the concrete object named by
    /// its `type` discriminator.
    pub fn parse_value(&self, value: Value, context: &CreationContext) -> ObjectResult<StixObject> {
        let mapping = match value {
            Value::Object(mapping) => mapping,
            _ => return Err(ObjectError::parse("Can't parse non-object input.")),
        };
        let type_name = mapping
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| ObjectError::parse("Can't parse object with no 'type' property."))?
            .to_string();

        let schema = self.resolve(&type_name)?;
        debug!("Dispatching parse to schema '{type_name}'");

        let keyword: Vec<(String, RawValue)> = mapping
            .into_iter()
            .map(|(name, raw)| (name, RawValue::Json(raw)))
            .collect();
        schema.construct(Vec::new(), keyword, context)
    }
}
