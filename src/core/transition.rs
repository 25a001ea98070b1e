//! Transitions between states.

use super::contract::Contract;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// An edge leaving exactly one source state.
///
/// A transition without target is *internal*: it fires without exiting or
/// entering any state. A transition without event is *eventless*. Guard and
/// action are opaque code, never evaluated by the model.
///
/// Equality compares every field except the contract. Hashing only uses the
/// source state, so transitions leaving the same state share a hash bucket.
///
/// # Example
///
/// ```rust
/// use statechart::core::Transition;
///
/// let transition = Transition::new("idle", "running")
///     .on_event("start")
///     .with_guard("ready");
///
/// assert!(!transition.is_internal());
/// assert!(!transition.is_eventless());
/// assert_eq!(transition.to_string(), "idle+start -> running");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Transition {
    pub from_state: String,
    pub to_state: Option<String>,
    pub event: Option<String>,
    pub guard: Option<String>,
    pub action: Option<String>,
    #[serde(default)]
    pub contract: Contract,
}

impl Transition {
    /// Create an external transition from `from_state` to `to_state`.
    pub fn new(from_state: impl Into<String>, to_state: impl Into<String>) -> Self {
        Self {
            to_state: Some(to_state.into()),
            ..Self::internal(from_state)
        }
    }

    /// Create an internal transition on `from_state`.
    pub fn internal(from_state: impl Into<String>) -> Self {
        Self {
            from_state: from_state.into(),
            to_state: None,
            event: None,
            guard: None,
            action: None,
            contract: Contract::default(),
        }
    }

    /// Set the triggering event name.
    pub fn on_event(mut self, event: impl Into<String>) -> Self {
        self.event = Some(event.into());
        self
    }

    /// Set the guard code.
    pub fn with_guard(mut self, guard: impl Into<String>) -> Self {
        self.guard = Some(guard.into());
        self
    }

    /// Set the action code.
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Replace the contract.
    pub fn with_contract(mut self, contract: Contract) -> Self {
        self.contract = contract;
        self
    }

    /// True if this transition has no target.
    pub fn is_internal(&self) -> bool {
        self.to_state.is_none()
    }

    /// True if this transition has no event.
    pub fn is_eventless(&self) -> bool {
        self.event.is_none()
    }

    /// True if this transition ends in `name`. Internal transitions target
    /// their own source.
    pub fn targets(&self, name: &str) -> bool {
        match &self.to_state {
            Some(target) => target == name,
            None => self.from_state == name,
        }
    }
}

impl PartialEq for Transition {
    fn eq(&self, other: &Self) -> bool {
        self.from_state == other.from_state
            && self.to_state == other.to_state
            && self.event == other.event
            && self.guard == other.guard
            && self.action == other.action
    }
}

impl Eq for Transition {}

impl Hash for Transition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from_state.hash(state);
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.from_state)?;
        if let Some(event) = &self.event {
            write!(f, "+{}", event)?;
        }
        match &self.to_state {
            Some(target) => write!(f, " -> {}", target),
            None => write!(f, " -> [{}]", self.from_state),
        }
    }
}
