//! State nodes of a statechart.
//!
//! A state is a named node of the state tree. Its kind decides what it may
//! contain, where it may be placed and whether it may originate transitions.
//! No check is done at construction time: placement rules are enforced when
//! the state is registered into a [`Statechart`](crate::chart::Statechart).

use super::contract::Contract;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Entry and exit action code of a state. Opaque to the model.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actions {
    pub on_entry: Option<String>,
    pub on_exit: Option<String>,
}

/// The closed set of state variants with their variant-specific fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateKind {
    /// Leaf state without children.
    Basic(Actions),
    /// Composite state with exactly one active child, `initial` by default.
    Compound {
        actions: Actions,
        initial: Option<String>,
    },
    /// Composite state whose children are all active at the same time.
    Orthogonal(Actions),
    /// Remembers the last active child of its parent.
    ShallowHistory { initial: Option<String> },
    /// Remembers the full nested configuration below its parent.
    DeepHistory { initial: Option<String> },
    /// Terminal state. Cannot originate transitions.
    Final(Actions),
}

impl StateKind {
    /// Short kind name used in `Display`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Basic(_) => "BasicState",
            Self::Compound { .. } => "CompoundState",
            Self::Orthogonal(_) => "OrthogonalState",
            Self::ShallowHistory { .. } => "ShallowHistoryState",
            Self::DeepHistory { .. } => "DeepHistoryState",
            Self::Final(_) => "FinalState",
        }
    }
}

/// A state of a statechart.
///
/// States are identified by their name alone: two states with the same name
/// are equal and hash alike whatever their kind, so names and states can be
/// used interchangeably in lookups.
///
/// # Example
///
/// ```rust
/// use statechart::core::State;
///
/// let door = State::compound("door")
///     .with_initial("closed")
///     .with_on_entry("log('enter door')");
///
/// assert!(door.is_composite());
/// assert_eq!(door.initial(), Some("closed"));
/// assert_eq!(State::basic("door"), door);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct State {
    name: String,
    kind: StateKind,
    #[serde(default)]
    contract: Contract,
}

impl State {
    fn with_kind(name: impl Into<String>, kind: StateKind) -> Self {
        Self {
            name: name.into(),
            kind,
            contract: Contract::default(),
        }
    }

    /// Create a leaf state.
    pub fn basic(name: impl Into<String>) -> Self {
        Self::with_kind(name, StateKind::Basic(Actions::default()))
    }

    /// Create a compound state with no initial child yet.
    pub fn compound(name: impl Into<String>) -> Self {
        Self::with_kind(
            name,
            StateKind::Compound {
                actions: Actions::default(),
                initial: None,
            },
        )
    }

    /// Create a state whose children run in parallel.
    pub fn orthogonal(name: impl Into<String>) -> Self {
        Self::with_kind(name, StateKind::Orthogonal(Actions::default()))
    }

    /// Create a shallow history state with no fallback child.
    pub fn shallow_history(name: impl Into<String>) -> Self {
        Self::with_kind(name, StateKind::ShallowHistory { initial: None })
    }

    /// Create a deep history state with no fallback child.
    pub fn deep_history(name: impl Into<String>) -> Self {
        Self::with_kind(name, StateKind::DeepHistory { initial: None })
    }

    /// Create a final state.
    pub fn final_state(name: impl Into<String>) -> Self {
        Self::with_kind(name, StateKind::Final(Actions::default()))
    }

    /// Set the initial (or history fallback) child.
    ///
    /// Ignored for kinds without an initial slot.
    pub fn with_initial(mut self, initial: impl Into<String>) -> Self {
        if let Some(slot) = self.initial_slot_mut() {
            *slot = Some(initial.into());
        }
        self
    }

    /// Set the entry action. Ignored for history states.
    pub fn with_on_entry(mut self, code: impl Into<String>) -> Self {
        if let Some(actions) = self.actions_mut() {
            actions.on_entry = Some(code.into());
        }
        self
    }

    /// Set the exit action. Ignored for history states.
    pub fn with_on_exit(mut self, code: impl Into<String>) -> Self {
        if let Some(actions) = self.actions_mut() {
            actions.on_exit = Some(code.into());
        }
        self
    }

    /// Replace the contract.
    pub fn with_contract(mut self, contract: Contract) -> Self {
        self.contract = contract;
        self
    }

    /// Unique name of this state.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Variant and variant-specific fields.
    pub fn kind(&self) -> &StateKind {
        &self.kind
    }

    /// Declared contract, possibly empty.
    pub fn contract(&self) -> &Contract {
        &self.contract
    }

    /// Mutable contract, for in-place edits.
    pub fn contract_mut(&mut self) -> &mut Contract {
        &mut self.contract
    }

    /// Entry and exit actions, `None` for history states.
    pub fn actions(&self) -> Option<&Actions> {
        match &self.kind {
            StateKind::Basic(actions)
            | StateKind::Orthogonal(actions)
            | StateKind::Final(actions)
            | StateKind::Compound { actions, .. } => Some(actions),
            StateKind::ShallowHistory { .. } | StateKind::DeepHistory { .. } => None,
        }
    }

    /// Mutable entry and exit actions, `None` for history states.
    pub fn actions_mut(&mut self) -> Option<&mut Actions> {
        match &mut self.kind {
            StateKind::Basic(actions)
            | StateKind::Orthogonal(actions)
            | StateKind::Final(actions)
            | StateKind::Compound { actions, .. } => Some(actions),
            StateKind::ShallowHistory { .. } | StateKind::DeepHistory { .. } => None,
        }
    }

    /// Entry action code, if any.
    pub fn on_entry(&self) -> Option<&str> {
        self.actions().and_then(|a| a.on_entry.as_deref())
    }

    /// Exit action code, if any.
    pub fn on_exit(&self) -> Option<&str> {
        self.actions().and_then(|a| a.on_exit.as_deref())
    }

    /// Initial child of a compound state, or fallback child of a history state.
    pub fn initial(&self) -> Option<&str> {
        match &self.kind {
            StateKind::Compound { initial, .. }
            | StateKind::ShallowHistory { initial }
            | StateKind::DeepHistory { initial } => initial.as_deref(),
            _ => None,
        }
    }

    /// `None` if this kind has no initial slot at all.
    pub(crate) fn initial_slot_mut(&mut self) -> Option<&mut Option<String>> {
        match &mut self.kind {
            StateKind::Compound { initial, .. }
            | StateKind::ShallowHistory { initial }
            | StateKind::DeepHistory { initial } => Some(initial),
            _ => None,
        }
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// Compound and orthogonal states may own children.
    pub fn is_composite(&self) -> bool {
        matches!(
            self.kind,
            StateKind::Compound { .. } | StateKind::Orthogonal(_)
        )
    }

    /// True for compound states.
    pub fn is_compound(&self) -> bool {
        matches!(self.kind, StateKind::Compound { .. })
    }

    /// True for orthogonal states.
    pub fn is_orthogonal(&self) -> bool {
        matches!(self.kind, StateKind::Orthogonal(_))
    }

    /// True for shallow and deep history states.
    pub fn is_history(&self) -> bool {
        matches!(
            self.kind,
            StateKind::ShallowHistory { .. } | StateKind::DeepHistory { .. }
        )
    }

    /// True for final states.
    pub fn is_final(&self) -> bool {
        matches!(self.kind, StateKind::Final(_))
    }

    /// Every kind except final states may originate transitions.
    pub fn is_transition_capable(&self) -> bool {
        !self.is_final()
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialEq<str> for State {
    fn eq(&self, other: &str) -> bool {
        self.name == other
    }
}

impl PartialEq<&str> for State {
    fn eq(&self, other: &&str) -> bool {
        self.name == *other
    }
}

impl std::borrow::Borrow<str> for State {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind.label(), self.name)
    }
}
