//! Timestamp value object for STIX object timestamps.
//!
//! This module provides a type-safe wrapper around STIX timestamps with
//! built-in normalization. STIX timestamps are always UTC with millisecond
//! precision and render with exactly three fractional digits and a literal
//! `Z` suffix.

use crate::error::{ValueError, ValueResult};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated STIX timestamp.
///
/// Timestamp wraps a UTC datetime truncated to millisecond precision. The
/// truncation happens at construction time, so every `Timestamp` in the
/// system is already in canonical form and two timestamps compare equal iff
/// their canonical renderings are equal.
///
/// ## Normalization Rules
///
/// - Input datetimes are converted to UTC
/// - Sub-millisecond precision is truncated (not rounded)
/// - The canonical rendering is `YYYY-MM-DDTHH:MM:SS.mmmZ`
///
/// ## Examples
///
/// ```rust
/// use stix_objects::Timestamp;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let ts = Timestamp::parse("2016-04-06T20:06:37Z")?;
///     assert_eq!(ts.to_string(), "2016-04-06T20:06:37.000Z");
///
///     // Offsets are normalized to UTC
///     let offset = Timestamp::parse("2016-04-06T22:06:37+02:00")?;
///     assert_eq!(ts, offset);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a new Timestamp from a timezone-aware datetime.
    ///
    /// The value is converted to UTC and truncated to millisecond precision.
    pub fn new(datetime: DateTime<Utc>) -> Self {
        let sub_millis = datetime.timestamp_subsec_nanos() % 1_000_000;
        Self(datetime - Duration::nanoseconds(i64::from(sub_millis)))
    }

    /// Create a Timestamp holding the current time.
    pub fn now() -> Self {
        Self::new(Utc::now())
    }

    /// Parse a Timestamp from an RFC 3339 / ISO 8601 string.
    ///
    /// Accepts optional fractional seconds and either a `Z` or a numeric
    /// offset suffix. Offsets are normalized to UTC.
    ///
    /// # Returns
    ///
    /// * `Ok(Timestamp)` - If the string is a valid RFC 3339 timestamp
    /// * `Err(ValueError)` - If the string cannot be parsed
    pub fn parse(value: &str) -> ValueResult<Self> {
        DateTime::parse_from_rfc3339(value)
            .map(|parsed| Self::new(parsed.with_timezone(&Utc)))
            .map_err(|_| ValueError::new("must be an RFC 3339 timestamp."))
    }

    /// Get the underlying UTC datetime (already millisecond-truncated).
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // %.3f always emits exactly three fractional digits
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S%.3fZ"))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::new(datetime)
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_without_fractional_seconds() {
        let ts = Timestamp::parse("2016-04-06T20:06:37Z").unwrap();
        assert_eq!(ts.to_string(), "2016-04-06T20:06:37.000Z");
    }

    #[test]
    fn test_parse_with_fractional_seconds() {
        let ts = Timestamp::parse("2016-04-06T20:06:37.182Z").unwrap();
        assert_eq!(ts.to_string(), "2016-04-06T20:06:37.182Z");
    }

    #[test]
    fn test_sub_millisecond_precision_is_truncated() {
        let ts = Timestamp::parse("2016-04-06T20:06:37.182945Z").unwrap();
        assert_eq!(ts.to_string(), "2016-04-06T20:06:37.182Z");
    }

    #[test]
    fn test_offset_is_normalized_to_utc() {
        let ts = Timestamp::parse("2016-04-06T22:06:37+02:00").unwrap();
        assert_eq!(ts.to_string(), "2016-04-06T20:06:37.000Z");
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(Timestamp::parse("not-a-timestamp").is_err());
        assert!(Timestamp::parse("2016-04-06").is_err());
        assert!(Timestamp::parse("").is_err());
    }

    #[test]
    fn test_equality_follows_canonical_form() {
        let explicit = Timestamp::new(Utc.with_ymd_and_hms(2016, 4, 6, 20, 6, 37).unwrap());
        let parsed = Timestamp::parse("2016-04-06T20:06:37.000Z").unwrap();
        assert_eq!(explicit, parsed);
    }

    #[test]
    fn test_serde_round_trip() {
        let ts = Timestamp::parse("2016-04-06T20:06:37.123Z").unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2016-04-06T20:06:37.123Z\"");
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, back);
    }
}
