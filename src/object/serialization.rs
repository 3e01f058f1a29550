//! Canonical serialization for immutable objects.
//!
//! The canonical textual form is pretty-printed JSON with a four-space
//! indent and properties in schema declaration order. Because the property
//! map is assembled by the construction engine in that order, objects
//! constructed from differently-ordered input serialize identically, and
//! equality on objects coincides with equality of their canonical text.

use crate::error::{ObjectError, ObjectResult};
use crate::object::object::StixObject;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::ser::PrettyFormatter;
use std::fmt;

impl Serialize for StixObject {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.properties().len()))?;
        for (name, value) in self.properties() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl StixObject {
    /// Render the canonical textual form.
    ///
    /// Stable and deterministic: key order is schema declaration order and
    /// the indent is exactly four spaces.
    pub fn to_canonical_string(&self) -> ObjectResult<String> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)?;
        String::from_utf8(buffer)
            .map_err(|error| ObjectError::parse(format!("Canonical form is not UTF-8: {error}.")))
    }
}

impl fmt::Display for StixObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.to_canonical_string().map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
