//! The statechart registry.
//!
//! [`Statechart`] owns every state and transition of a chart and keeps the
//! parent/children maps consistent with them. All mutations go through its
//! methods, which validate their arguments before touching anything: a call
//! either succeeds completely or fails leaving the chart unchanged.
//!
//! # Example
//!
//! ```rust
//! use statechart::chart::Statechart;
//! use statechart::core::{State, Transition};
//!
//! let mut chart = Statechart::new("door");
//! chart.add_state(State::compound("door").with_initial("closed"), None)?;
//! chart.add_state(State::basic("closed"), Some("door"))?;
//! chart.add_state(State::basic("open"), Some("door"))?;
//! chart.add_transition(Transition::new("closed", "open").on_event("push"))?;
//!
//! assert_eq!(chart.states(), ["closed", "door", "open"]);
//! assert_eq!(chart.least_common_ancestor("closed", "open")?, Some("door"));
//! assert_eq!(chart.events(), ["push"]);
//! # Ok::<(), statechart::StatechartError>(())
//! ```

mod transitions;
mod tree;

use crate::core::{Actions, Contract, State, StateKind, Transition};
use crate::error::{Result, StatechartError};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, trace};

/// Hierarchical, possibly parallel state machine definition.
#[derive(Clone, Debug)]
pub struct Statechart {
    name: String,
    description: Option<String>,
    preamble: Option<String>,
    states: BTreeMap<String, State>,
    parent: HashMap<String, Option<String>>,
    children: HashMap<String, Vec<String>>,
    transitions: Vec<Transition>,
    root: Option<String>,
}

impl Statechart {
    /// Create an empty statechart.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            preamble: None,
            states: BTreeMap::new(),
            parent: HashMap::new(),
            children: HashMap::new(),
            transitions: Vec::new(),
            root: None,
        }
    }

    /// Attach a human-readable description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Code an interpreter runs before starting the chart. Opaque here.
    pub fn with_preamble(mut self, preamble: impl Into<String>) -> Self {
        self.preamble = Some(preamble.into());
        self
    }

    /// Name of the chart.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Preamble code, if any.
    pub fn preamble(&self) -> Option<&str> {
        self.preamble.as_deref()
    }

    /// Name of the root state, if any state has been added.
    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    /// State names in lexicographic order.
    pub fn states(&self) -> Vec<&str> {
        self.states.keys().map(String::as_str).collect()
    }

    /// True if a state with this name is registered.
    pub fn contains_state(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// Register `state` under `parent`, or as root if `parent` is `None`.
    ///
    /// # Errors
    ///
    /// - [`StatechartError::DuplicateState`] if the name is taken
    /// - [`StatechartError::RootAlreadyDefined`] if `parent` is `None` and a root exists
    /// - [`StatechartError::UnknownState`] if `parent` is not registered
    /// - [`StatechartError::InvalidParent`] if `parent` is not composite
    /// - [`StatechartError::InvalidHistoryParent`] if `state` is a history
    ///   state and `parent` is not compound
    pub fn add_state(&mut self, state: State, parent: Option<&str>) -> Result<()> {
        if self.states.contains_key(state.name()) {
            return Err(StatechartError::DuplicateState(state.name().to_string()));
        }

        match parent {
            None => {
                if let Some(root) = &self.root {
                    return Err(StatechartError::RootAlreadyDefined {
                        root: root.clone(),
                        state: state.name().to_string(),
                    });
                }
            }
            Some(parent_name) => {
                let parent_state = self.state_for(parent_name)?;

                if !parent_state.is_composite() {
                    return Err(StatechartError::InvalidParent {
                        parent: parent_name.to_string(),
                        state: state.name().to_string(),
                    });
                }

                if state.is_history() && !parent_state.is_compound() {
                    return Err(StatechartError::InvalidHistoryParent {
                        parent: parent_name.to_string(),
                        state: state.name().to_string(),
                    });
                }
            }
        }

        let name = state.name().to_string();
        debug!(state = %name, parent = ?parent, kind = state.kind().label(), "Registered state");

        match parent {
            None => self.root = Some(name.clone()),
            Some(parent_name) => self
                .children
                .entry(parent_name.to_string())
                .or_default()
                .push(name.clone()),
        }
        self.parent.insert(name.clone(), parent.map(str::to_string));
        self.states.insert(name, state);
        Ok(())
    }

    /// Remove a state.
    ///
    /// The state must have no children, and every transition targeting it
    /// must be internal. Its outgoing transitions (internal ones included)
    /// are removed with it.
    pub fn remove_state(&mut self, name: &str) -> Result<()> {
        self.state_for(name)?;

        if !self.children_for(name)?.is_empty() {
            return Err(StatechartError::NotRemovable {
                state: name.to_string(),
                reason: "nested states".to_string(),
            });
        }

        let incoming = self.transitions_to(name)?;
        if incoming.iter().any(|t| !t.is_internal()) {
            return Err(StatechartError::NotRemovable {
                state: name.to_string(),
                reason: "incoming transitions".to_string(),
            });
        }

        // Internal incoming transitions leave `name` too, so one pass covers both.
        let before = self.transitions.len();
        self.transitions.retain(|t| t.from_state != name);
        let dropped = before - self.transitions.len();

        if let Some(Some(parent)) = self.parent.remove(name) {
            if let Some(siblings) = self.children.get_mut(&parent) {
                siblings.retain(|child| child != name);
            }
        }
        self.children.remove(name);
        self.states.remove(name);
        if self.root.as_deref() == Some(name) {
            self.root = None;
        }

        debug!(state = %name, transitions = dropped, "Removed state");
        Ok(())
    }

    /// Rename a state and every reference to it.
    ///
    /// Transitions, compound and history `initial` slots, the parent and
    /// children maps and the root are all updated.
    pub fn rename_state(&mut self, old_name: &str, new_name: &str) -> Result<()> {
        self.state_for(old_name)?;
        if self.states.contains_key(new_name) {
            return Err(StatechartError::DuplicateState(new_name.to_string()));
        }

        for transition in &mut self.transitions {
            if transition.from_state == old_name {
                trace!(transition = %transition, "Renaming transition source");
                transition.from_state = new_name.to_string();
            }
            if transition.to_state.as_deref() == Some(old_name) {
                trace!(transition = %transition, "Renaming transition target");
                transition.to_state = Some(new_name.to_string());
            }
        }

        for state in self.states.values_mut() {
            if state.initial() != Some(old_name) {
                continue;
            }
            trace!(state = %state.name(), "Renaming initial state");
            if let Some(initial) = state.initial_slot_mut() {
                *initial = Some(new_name.to_string());
            }
        }

        for parent in self.parent.values_mut() {
            if parent.as_deref() == Some(old_name) {
                *parent = Some(new_name.to_string());
            }
        }
        for siblings in self.children.values_mut() {
            for child in siblings.iter_mut().filter(|child| child.as_str() == old_name) {
                *child = new_name.to_string();
            }
        }
        if let Some(children) = self.children.remove(old_name) {
            self.children.insert(new_name.to_string(), children);
        }
        if let Some(parent) = self.parent.remove(old_name) {
            self.parent.insert(new_name.to_string(), parent);
        }
        if self.root.as_deref() == Some(old_name) {
            self.root = Some(new_name.to_string());
        }

        if let Some(mut state) = self.states.remove(old_name) {
            state.set_name(new_name.to_string());
            self.states.insert(new_name.to_string(), state);
        }

        debug!(from = %old_name, to = %new_name, "Renamed state");
        Ok(())
    }

    /// Set the initial child of a compound state, or the fallback child of
    /// a history state. `None` unsets it.
    pub fn set_initial(&mut self, name: &str, initial: Option<&str>) -> Result<()> {
        let state = self
            .states
            .get_mut(name)
            .ok_or_else(|| StatechartError::UnknownState(name.to_string()))?;
        let slot = state
            .initial_slot_mut()
            .ok_or_else(|| StatechartError::InitialNotSupported(name.to_string()))?;

        *slot = initial.map(str::to_string);
        debug!(state = %name, initial = ?initial, "Set initial state");
        Ok(())
    }

    /// Registered state with the given name.
    pub fn state_for(&self, name: &str) -> Result<&State> {
        self.states
            .get(name)
            .ok_or_else(|| StatechartError::UnknownState(name.to_string()))
    }

    /// Contract of a registered state, for in-place edits.
    pub fn contract_mut_for(&mut self, name: &str) -> Result<&mut Contract> {
        self.states
            .get_mut(name)
            .map(State::contract_mut)
            .ok_or_else(|| StatechartError::UnknownState(name.to_string()))
    }

    /// Entry/exit actions of a registered state, `None` for history states.
    ///
    /// Name and kind of a registered state can only change through
    /// [`Statechart::rename_state`] and [`Statechart::remove_state`].
    pub fn actions_mut_for(&mut self, name: &str) -> Result<Option<&mut Actions>> {
        self.states
            .get_mut(name)
            .map(State::actions_mut)
            .ok_or_else(|| StatechartError::UnknownState(name.to_string()))
    }

    /// Parent of the given state, `None` for the root.
    pub fn parent_for(&self, name: &str) -> Result<Option<&str>> {
        self.parent
            .get(name)
            .map(Option::as_deref)
            .ok_or_else(|| StatechartError::UnknownState(name.to_string()))
    }

    /// Children of the given state in insertion order, empty for leaves.
    pub fn children_for(&self, name: &str) -> Result<&[String]> {
        self.state_for(name)?;
        Ok(self.children.get(name).map(Vec::as_slice).unwrap_or(&[]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn door() -> Statechart {
        let mut chart = Statechart::new("door");
        chart
            .add_state(State::compound("door").with_initial("closed"), None)
            .unwrap();
        chart.add_state(State::basic("closed"), Some("door")).unwrap();
        chart.add_state(State::basic("open"), Some("door")).unwrap();
        chart
            .add_transition(Transition::new("closed", "open").on_event("push"))
            .unwrap();
        chart
            .add_transition(Transition::new("open", "closed").on_event("pull"))
            .unwrap();
        chart
    }

    #[test]
    fn metadata_is_stored() {
        let chart = Statechart::new("door")
            .with_description("A simple door")
            .with_preamble("x = 0");

        assert_eq!(chart.name(), "door");
        assert_eq!(chart.description(), Some("A simple door"));
        assert_eq!(chart.preamble(), Some("x = 0"));
        assert!(chart.root().is_none());
        assert!(chart.states().is_empty());
    }

    #[test]
    fn first_parentless_state_becomes_root() {
        let chart = door();
        assert_eq!(chart.root(), Some("door"));
        assert_eq!(chart.parent_for("door").unwrap(), None);
        assert_eq!(chart.parent_for("open").unwrap(), Some("door"));
    }

    #[test]
    fn children_keep_insertion_order() {
        let mut chart = Statechart::new("c");
        chart.add_state(State::orthogonal("root"), None).unwrap();
        for name in ["z", "a", "m"] {
            chart.add_state(State::compound(name), Some("root")).unwrap();
        }

        assert_eq!(chart.children_for("root").unwrap(), ["z", "a", "m"]);
        assert!(chart.children_for("a").unwrap().is_empty());
        assert_eq!(chart.states(), ["a", "m", "root", "z"]);
    }

    #[test]
    fn duplicate_state_is_rejected() {
        let mut chart = door();
        let result = chart.add_state(State::final_state("open"), Some("door"));
        assert_eq!(result, Err(StatechartError::DuplicateState("open".to_string())));
    }

    #[test]
    fn second_root_is_rejected() {
        let mut chart = door();
        let result = chart.add_state(State::basic("other"), None);
        assert_eq!(
            result,
            Err(StatechartError::RootAlreadyDefined {
                root: "door".to_string(),
                state: "other".to_string(),
            })
        );
        assert!(!chart.contains_state("other"));
    }

    #[test]
    fn unknown_parent_is_rejected() {
        let mut chart = door();
        let result = chart.add_state(State::basic("x"), Some("nowhere"));
        assert_eq!(result, Err(StatechartError::UnknownState("nowhere".to_string())));
    }

    #[test]
    fn leaf_parent_is_rejected() {
        let mut chart = door();
        let result = chart.add_state(State::basic("x"), Some("open"));
        assert!(matches!(result, Err(StatechartError::InvalidParent { .. })));
        assert!(chart.children_for("open").unwrap().is_empty());
    }

    #[test]
    fn history_requires_compound_parent() {
        let mut chart = Statechart::new("c");
        chart.add_state(State::orthogonal("o"), None).unwrap();
        chart.add_state(State::compound("c"), Some("o")).unwrap();

        let result = chart.add_state(State::deep_history("h"), Some("o"));
        assert!(matches!(
            result,
            Err(StatechartError::InvalidHistoryParent { .. })
        ));

        chart.add_state(State::deep_history("h"), Some("c")).unwrap();
        assert_eq!(chart.children_for("c").unwrap(), ["h"]);
    }

    #[test]
    fn remove_state_with_children_fails() {
        let mut chart = door();
        let result = chart.remove_state("door");
        assert!(matches!(result, Err(StatechartError::NotRemovable { .. })));
        assert_eq!(chart.states().len(), 3);
    }

    #[test]
    fn remove_state_with_incoming_transitions_fails() {
        let mut chart = door();
        let result = chart.remove_state("open");
        assert!(matches!(result, Err(StatechartError::NotRemovable { .. })));
        assert_eq!(chart.transitions().len(), 2);
    }

    #[test]
    fn remove_state_drops_outgoing_and_internal_transitions() {
        let mut chart = door();
        chart
            .add_transition(Transition::internal("open").on_event("tick"))
            .unwrap();
        chart
            .remove_transition(&Transition::new("closed", "open").on_event("push"))
            .unwrap();

        chart.remove_state("open").unwrap();

        assert_eq!(chart.states(), ["closed", "door"]);
        assert!(chart.transitions().is_empty());
        assert_eq!(chart.children_for("door").unwrap(), ["closed"]);
        assert!(chart.parent_for("open").is_err());
    }

    #[test]
    fn removing_root_clears_it() {
        let mut chart = Statechart::new("c");
        chart.add_state(State::basic("only"), None).unwrap();
        chart.remove_state("only").unwrap();

        assert!(chart.root().is_none());
        chart.add_state(State::basic("again"), None).unwrap();
        assert_eq!(chart.root(), Some("again"));
    }

    #[test]
    fn rename_cascades_everywhere() {
        let mut chart = door();
        chart.rename_state("closed", "shut").unwrap();

        assert_eq!(chart.states(), ["door", "open", "shut"]);
        assert_eq!(chart.state_for("shut").unwrap().name(), "shut");
        assert_eq!(chart.state_for("door").unwrap().initial(), Some("shut"));
        assert_eq!(chart.children_for("door").unwrap(), ["shut", "open"]);
        assert_eq!(chart.parent_for("shut").unwrap(), Some("door"));
        assert_eq!(
            chart.transitions(),
            [
                Transition::new("shut", "open").on_event("push"),
                Transition::new("open", "shut").on_event("pull"),
            ]
        );
    }

    #[test]
    fn rename_root_updates_parent_links() {
        let mut chart = door();
        chart.rename_state("door", "portal").unwrap();

        assert_eq!(chart.root(), Some("portal"));
        assert_eq!(chart.parent_for("open").unwrap(), Some("portal"));
        assert_eq!(chart.children_for("portal").unwrap(), ["closed", "open"]);
    }

    #[test]
    fn rename_keeps_internal_transitions_internal() {
        let mut chart = door();
        chart
            .add_transition(Transition::internal("open").on_event("tick"))
            .unwrap();
        chart.rename_state("open", "ajar").unwrap();

        assert!(chart
            .transitions()
            .contains(&Transition::internal("ajar").on_event("tick")));
    }

    #[test]
    fn rename_to_existing_name_changes_nothing() {
        let mut chart = door();
        let result = chart.rename_state("closed", "open");

        assert_eq!(result, Err(StatechartError::DuplicateState("open".to_string())));
        assert_eq!(chart.states(), ["closed", "door", "open"]);
        assert_eq!(chart.state_for("door").unwrap().initial(), Some("closed"));
    }

    #[test]
    fn rename_unknown_state_fails() {
        let mut chart = door();
        let result = chart.rename_state("ghost", "spirit");
        assert_eq!(result, Err(StatechartError::UnknownState("ghost".to_string())));
    }

    #[test]
    fn set_initial_requires_slot() {
        let mut chart = door();
        chart.set_initial("door", Some("open")).unwrap();
        assert_eq!(chart.state_for("door").unwrap().initial(), Some("open"));

        chart.set_initial("door", None).unwrap();
        assert_eq!(chart.state_for("door").unwrap().initial(), None);

        assert_eq!(
            chart.set_initial("open", Some("closed")),
            Err(StatechartError::InitialNotSupported("open".to_string()))
        );
    }

    #[test]
    fn contract_and_actions_edit_in_place() {
        let mut chart = door();
        chart
            .contract_mut_for("open")
            .unwrap()
            .invariants_mut()
            .push("angle > 0".to_string());
        if let Some(actions) = chart.actions_mut_for("open").unwrap() {
            actions.on_entry = Some("creak()".to_string());
        }

        let open = chart.state_for("open").unwrap();
        assert_eq!(open.contract().invariants(), ["angle > 0"]);
        assert_eq!(open.on_entry(), Some("creak()"));
    }

    #[test]
    fn in_place_edits_keep_name_and_kind() {
        let mut chart = door();
        chart.add_state(State::shallow_history("h"), Some("door")).unwrap();

        *chart.contract_mut_for("door").unwrap() = Contract::new().invariant("x");
        if let Some(actions) = chart.actions_mut_for("door").unwrap() {
            *actions = Actions::default();
        }
        assert!(chart.actions_mut_for("h").unwrap().is_none());

        let door = chart.state_for("door").unwrap();
        assert_eq!(door.name(), "door");
        assert!(matches!(door.kind(), StateKind::Compound { .. }));
        assert_eq!(door.initial(), Some("closed"));
        assert_eq!(chart.children_for("door").unwrap(), ["closed", "open", "h"]);
        assert_eq!(
            chart.contract_mut_for("ghost").map(|_| ()),
            Err(StatechartError::UnknownState("ghost".to_string()))
        );
    }

    #[test]
    fn queries_on_unknown_state_fail() {
        let chart = door();
        assert!(chart.state_for("x").is_err());
        assert!(chart.parent_for("x").is_err());
        assert!(chart.children_for("x").is_err());
    }
}
