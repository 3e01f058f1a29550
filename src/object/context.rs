//! Creation context for object construction.
//!
//! Default generators (identifier and timestamp defaults) need a time source
//! and an id source. Rather than reaching for ambient global state, the
//! construction engine takes an explicit [`CreationContext`], which keeps
//! construction pure and makes generated defaults reproducible in tests and
//! pipelines.

use crate::object::value_objects::{StixIdentifier, Timestamp};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Time source used for `created` / `modified` style defaults.
#[derive(Debug, Clone, Copy)]
pub enum Clock {
    /// Current UTC time, truncated to millisecond precision.
    System,
    /// A frozen instant; every `now()` call returns the same timestamp.
    Fixed(Timestamp),
}

/// Identifier source used for generated `id` defaults.
#[derive(Debug)]
pub enum IdSource {
    /// Random UUIDv4 suffixes.
    Random,
    /// Deterministic counter suffixes of the form
    /// `00000000-0000-0000-0000-000000000001`, incrementing per generated id.
    Sequence(AtomicU64),
}

impl IdSource {
    /// Create a sequence source starting at 1.
    pub fn sequence() -> Self {
        Self::Sequence(AtomicU64::new(0))
    }
}

/// Context passed to the construction engine for filling defaults.
///
/// The default context uses the system clock and random UUIDs. A fixed
/// context produces identical `id`, `created`, and `modified` values for
/// identical explicit inputs, which is what test fixtures and reproducible
/// ingest pipelines want.
///
/// # Example
///
/// ```rust
/// use stix_objects::{CreationContext, Timestamp};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let frozen = Timestamp::parse("2017-01-01T12:34:56Z")?;
///     let context = CreationContext::fixed(frozen);
///
///     assert_eq!(context.now(), frozen);
///     assert_eq!(
///         context.new_id("relationship").as_str(),
///         "relationship--00000000-0000-0000-0000-000000000001"
///     );
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct CreationContext {
    clock: Clock,
    id_source: IdSource,
}

impl CreationContext {
    /// Create a context with the system clock and random UUIDs.
    pub fn new() -> Self {
        Self {
            clock: Clock::System,
            id_source: IdSource::Random,
        }
    }

    /// Create a fully deterministic context: a frozen clock and sequenced
    /// identifiers starting at 1.
    pub fn fixed(now: Timestamp) -> Self {
        Self {
            clock: Clock::Fixed(now),
            id_source: IdSource::sequence(),
        }
    }

    /// Replace the time source.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the identifier source.
    pub fn with_id_source(mut self, id_source: IdSource) -> Self {
        self.id_source = id_source;
        self
    }

    /// Produce the current timestamp according to the configured clock.
    pub fn now(&self) -> Timestamp {
        match self.clock {
            Clock::System => Timestamp::now(),
            Clock::Fixed(timestamp) => timestamp,
        }
    }

    /// Generate a fresh identifier for the given type name.
    pub fn new_id(&self, type_name: &str) -> StixIdentifier {
        match &self.id_source {
            IdSource::Random => StixIdentifier::from_parts(type_name, Uuid::new_v4()),
            IdSource::Sequence(counter) => {
                let n = counter.fetch_add(1, Ordering::Relaxed) + 1;
                StixIdentifier::from_parts(type_name, format!("00000000-0000-0000-0000-{n:012}"))
            }
        }
    }
}

impl Default for CreationContext {
    fn default() -> Self {
        Self::new()
    }
}
