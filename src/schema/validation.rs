//! The construction engine: validation, coercion, and object assembly.
//!
//! Given a schema and raw positional/keyword input, construction proceeds in
//! a fixed order:
//!
//! 1. merge positional arguments onto the declared positional names, then
//!    keyword arguments (a property supplied both ways is a conflict);
//! 2. reject input names the schema does not declare, all at once;
//! 3. run every descriptor in declaration order, filling defaults and
//!    collecting the complete set of required-but-missing names;
//! 4. report all missing names together, in schema order;
//! 5. otherwise report the first invalid value in schema order;
//! 6. otherwise assemble the immutable object.
//!
//! Missing-property detection is exhaustive because omissions are
//! independent and enumerable; invalid-value detection is fail-fast because
//! a malformed value leaves no meaningful partial state to keep validating.

use super::types::{Constraint, DefaultRule, PropertyDescriptor, PropertyKind, TypeSchema};
use crate::error::{ObjectError, ObjectResult, ValueError};
use crate::object::builder::RawValue;
use crate::object::context::CreationContext;
use crate::object::object::StixObject;
use crate::object::value_objects::{StixIdentifier, Timestamp};
use log::{debug, trace};
use serde_json::{Map, Value};

/// Outcome of a single descriptor run that did not produce a value.
enum PropertyFailure {
    /// Required, absent, and no default to fill it.
    Missing,
    /// Present but failed coercion or a constraint.
    Invalid(ValueError),
}

impl TypeSchema {
    /// Construct an immutable object from raw positional and keyword input.
    ///
    /// # Errors
    ///
    /// * [`ObjectError::Parse`] - more positional arguments than the schema declares
    /// * [`ObjectError::MultipleValues`] - a property supplied both positionally and by keyword
    /// * [`ObjectError::ExtraProperties`] - input names the schema does not declare
    /// * [`ObjectError::MissingProperties`] - required properties absent, all listed in schema order
    /// * [`ObjectError::InvalidValue`] - first coercion/constraint failure in schema order
    pub fn construct(
        &self,
        positional: Vec<RawValue>,
        keyword: Vec<(String, RawValue)>,
        context: &CreationContext,
    ) -> ObjectResult<StixObject> {
        debug!(
            "Constructing '{}' object ({} positional, {} keyword arguments)",
            self.type_name,
            positional.len(),
            keyword.len()
        );

        if positional.len() > self.positional.len() {
            return Err(ObjectError::parse(format!(
                "Too many positional arguments for {}: at most {} are accepted.",
                self.name,
                self.positional.len()
            )));
        }

        // Merge: positional first (declared order), then keyword in the
        // order given. Insertion order is what extra-property reporting
        // later relies on.
        let mut merged: Vec<(String, RawValue)> =
            self.positional.iter().cloned().zip(positional).collect();
        for (name, raw) in keyword {
            if merged.iter().any(|(existing, _)| *existing == name) {
                return Err(ObjectError::multiple_values(&self.name, name));
            }
            merged.push((name, raw));
        }

        // Undeclared names, in order of first appearance.
        let extra: Vec<String> = merged
            .iter()
            .filter(|(name, _)| !self.declares(name))
            .map(|(name, _)| name.clone())
            .collect();
        if !extra.is_empty() {
            debug!(
                "Rejecting '{}' construction: unexpected properties {:?}",
                self.type_name, extra
            );
            return Err(ObjectError::extra_properties(&self.name, extra));
        }

        // One clock reading per construction so that `created` and
        // `modified` defaults agree.
        let now = context.now();

        let mut properties = Map::new();
        let mut missing: Vec<String> = Vec::new();
        let mut first_invalid: Option<(String, ValueError)> = None;

        for descriptor in &self.properties {
            let raw = merged
                .iter()
                .position(|(name, _)| *name == descriptor.name)
                .map(|index| merged.swap_remove(index).1);

            match descriptor.validate_and_coerce(raw, self, now, context) {
                Ok(Some(value)) => {
                    properties.insert(descriptor.name.clone(), value);
                }
                Ok(None) => {}
                Err(PropertyFailure::Missing) => missing.push(descriptor.name.clone()),
                Err(PropertyFailure::Invalid(error)) => {
                    if first_invalid.is_none() {
                        first_invalid = Some((descriptor.name.clone(), error));
                    }
                }
            }
        }

        // Missing properties are reported exhaustively and take precedence
        // over value failures.
        if !missing.is_empty() {
            debug!(
                "Rejecting '{}' construction: missing required properties {:?}",
                self.type_name, missing
            );
            return Err(ObjectError::missing_properties(&self.name, missing));
        }
        if let Some((property, error)) = first_invalid {
            debug!(
                "Rejecting '{}' construction: invalid value for '{}'",
                self.type_name, property
            );
            return Err(ObjectError::invalid_value(&self.name, property, error.reason));
        }

        trace!(
            "Constructed '{}' object with {} properties",
            self.type_name,
            properties.len()
        );
        Ok(StixObject::new(
            self.type_name.clone(),
            self.name.clone(),
            properties,
        ))
    }
}

impl PropertyDescriptor {
    /// Run the full per-property pipeline: default filling, coercion, and
    /// constraint checking. Returns the canonical value, `None` for an
    /// absent optional property, or the specific failure.
    fn validate_and_coerce(
        &self,
        raw: Option<RawValue>,
        schema: &TypeSchema,
        now: Timestamp,
        context: &CreationContext,
    ) -> Result<Option<Value>, PropertyFailure> {
        let value = match raw {
            Some(raw) => self.coerce(raw).map_err(PropertyFailure::Invalid)?,
            None => match &self.default {
                Some(DefaultRule::NewIdentifier) => {
                    Value::String(context.new_id(&schema.type_name).into_string())
                }
                Some(DefaultRule::CurrentTime) => Value::String(now.to_string()),
                Some(DefaultRule::Constant(constant)) => Value::String(constant.clone()),
                None if self.required => return Err(PropertyFailure::Missing),
                None => return Ok(None),
            },
        };

        if let Some(constraint) = &self.constraint {
            self.check_constraint(constraint, &value)
                .map_err(PropertyFailure::Invalid)?;
        }

        Ok(Some(value))
    }

    /// Coerce a present raw value into canonical form according to the
    /// descriptor's kind.
    fn coerce(&self, raw: RawValue) -> Result<Value, ValueError> {
        match self.kind {
            PropertyKind::String => match raw {
                RawValue::Json(Value::String(value)) => Ok(Value::String(value)),
                _ => Err(ValueError::new("must be a string.")),
            },
            PropertyKind::Identifier => match raw {
                RawValue::Json(Value::String(value)) => {
                    StixIdentifier::new(value).map(|id| Value::String(id.into_string()))
                }
                _ => Err(ValueError::new("must be a string.")),
            },
            PropertyKind::Reference => match raw {
                RawValue::Object(object) => match object.id() {
                    Some(id) => Ok(Value::String(id.to_string())),
                    None => Err(ValueError::new("must be an object with an 'id' property.")),
                },
                RawValue::Json(Value::String(value)) => {
                    StixIdentifier::new(value).map(|id| Value::String(id.into_string()))
                }
                _ => Err(ValueError::new(
                    "must be an identifier string or a constructed object.",
                )),
            },
            PropertyKind::Timestamp => match raw {
                RawValue::Timestamp(timestamp) => Ok(Value::String(timestamp.to_string())),
                RawValue::Json(Value::String(value)) => {
                    Timestamp::parse(&value).map(|timestamp| Value::String(timestamp.to_string()))
                }
                _ => Err(ValueError::new("must be an RFC 3339 timestamp.")),
            },
            PropertyKind::StringList => match raw {
                RawValue::Json(Value::Array(items)) => {
                    if items.is_empty() {
                        return Err(ValueError::new("must not be empty."));
                    }
                    if items.iter().all(Value::is_string) {
                        Ok(Value::Array(items))
                    } else {
                        Err(ValueError::new("must be a list of strings."))
                    }
                }
                _ => Err(ValueError::new("must be a list of strings.")),
            },
        }
    }

    /// Check a post-coercion constraint against the canonical value.
    fn check_constraint(&self, constraint: &Constraint, value: &Value) -> Result<(), ValueError> {
        let text = value.as_str().unwrap_or_default();
        match constraint {
            Constraint::Equals(expected) => {
                if text == expected.as_str() {
                    Ok(())
                } else {
                    Err(ValueError::new(format!("must equal '{expected}'.")))
                }
            }
            Constraint::StartsWith(prefix) => {
                if text.starts_with(prefix.as_str()) {
                    Ok(())
                } else {
                    Err(ValueError::new(format!("must start with '{prefix}'.")))
                }
            }
        }
    }
}
