//! Events consumed by a statechart.
//!
//! An event is an immutable named signal with an optional payload. Events are
//! either raised from outside the machine or internally by its own actions.

use crate::error::{Result, StatechartError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Where an event comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Sent to the machine by its environment.
    #[default]
    External,
    /// Raised by the machine itself.
    Internal,
}

/// Named signal carrying a key/value payload.
///
/// Equality only considers the name and the payload: an internal event and
/// an external event with the same name and data compare equal.
///
/// # Example
///
/// ```rust
/// use statechart::core::Event;
///
/// let event = Event::new("deposit").with("amount", 50);
///
/// assert_eq!(event.name(), "deposit");
/// assert_eq!(event.get("amount").unwrap(), 50);
/// assert!(event.get("currency").is_err());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Event {
    name: String,
    #[serde(default)]
    data: BTreeMap<String, Value>,
    #[serde(default)]
    kind: EventKind,
}

impl Event {
    /// Create an external event with an empty payload.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: BTreeMap::new(),
            kind: EventKind::External,
        }
    }

    /// Create an event raised by the machine itself.
    pub fn internal(name: impl Into<String>) -> Self {
        Self {
            kind: EventKind::Internal,
            ..Self::new(name)
        }
    }

    /// Add a payload entry, returning the extended event.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Event name, matched against transition events.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the event is external or internal.
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// True if the machine raised this event itself.
    pub fn is_internal(&self) -> bool {
        self.kind == EventKind::Internal
    }

    /// Read-only view of the payload.
    pub fn data(&self) -> &BTreeMap<String, Value> {
        &self.data
    }

    /// Look up a payload entry.
    ///
    /// Fails with [`StatechartError::AttributeMissing`] if the key is absent.
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.data
            .get(key)
            .ok_or_else(|| StatechartError::AttributeMissing {
                event: self.to_string(),
                attribute: key.to_string(),
            })
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.data == other.data
    }
}

impl Eq for Event {}

impl Hash for Event {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.kind {
            EventKind::External => "Event",
            EventKind::Internal => "InternalEvent",
        };
        if self.data.is_empty() {
            return write!(f, "{}({})", label, self.name);
        }
        let pairs: Vec<String> = self
            .data
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();
        write!(f, "{}({}, {})", label, self.name, pairs.join(", "))
    }
}
