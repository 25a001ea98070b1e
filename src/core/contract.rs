//! Design-by-contract slots attached to states and transitions.
//!
//! Conditions are opaque text. The model stores them in declaration order and
//! never evaluates them; checking is up to an interpreter.

use serde::{Deserialize, Serialize};

/// Preconditions, postconditions and invariants of a state or transition.
///
/// # Example
///
/// ```rust
/// use statechart::core::Contract;
///
/// let contract = Contract::new()
///     .precondition("balance >= 0")
///     .invariant("balance >= 0")
///     .postcondition("balance == old.balance - amount");
///
/// assert_eq!(contract.preconditions(), ["balance >= 0"]);
/// assert!(!contract.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    #[serde(default)]
    preconditions: Vec<String>,
    #[serde(default)]
    postconditions: Vec<String>,
    #[serde(default)]
    invariants: Vec<String>,
}

impl Contract {
    /// Create a contract without conditions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a condition that must hold before entry or firing.
    pub fn precondition(mut self, condition: impl Into<String>) -> Self {
        self.preconditions.push(condition.into());
        self
    }

    /// Add a condition that must hold after exit or firing.
    pub fn postcondition(mut self, condition: impl Into<String>) -> Self {
        self.postconditions.push(condition.into());
        self
    }

    /// Add a condition that must hold while the state is active.
    pub fn invariant(mut self, condition: impl Into<String>) -> Self {
        self.invariants.push(condition.into());
        self
    }

    /// Preconditions in declaration order.
    pub fn preconditions(&self) -> &[String] {
        &self.preconditions
    }

    /// Postconditions in declaration order.
    pub fn postconditions(&self) -> &[String] {
        &self.postconditions
    }

    /// Invariants in declaration order.
    pub fn invariants(&self) -> &[String] {
        &self.invariants
    }

    /// Mutable preconditions, for in-place edits.
    pub fn preconditions_mut(&mut self) -> &mut Vec<String> {
        &mut self.preconditions
    }

    /// Mutable postconditions.
    pub fn postconditions_mut(&mut self) -> &mut Vec<String> {
        &mut self.postconditions
    }

    /// Mutable invariants.
    pub fn invariants_mut(&mut self) -> &mut Vec<String> {
        &mut self.invariants
    }

    /// True if no condition of any kind is declared.
    pub fn is_empty(&self) -> bool {
        self.preconditions.is_empty()
            && self.postconditions.is_empty()
            && self.invariants.is_empty()
    }
}
