//! Transition registration and lookups.

use super::Statechart;
use crate::core::Transition;
use crate::error::{Result, StatechartError};
use std::collections::BTreeSet;
use tracing::debug;

impl Statechart {
    /// Registered transitions, in insertion order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Register a transition.
    ///
    /// The source state must exist and must not be a final state. The
    /// target state, if any, must exist.
    pub fn add_transition(&mut self, transition: Transition) -> Result<()> {
        let source = self.state_for(&transition.from_state)?;
        if !source.is_transition_capable() {
            return Err(StatechartError::InvalidTransitionSource {
                transition: transition.to_string(),
                state: source.to_string(),
            });
        }

        if let Some(target) = &transition.to_state {
            self.state_for(target)?;
        }

        debug!(transition = %transition, "Registered transition");
        self.transitions.push(transition);
        Ok(())
    }

    /// Remove the first registered transition equal to `transition`.
    pub fn remove_transition(&mut self, transition: &Transition) -> Result<()> {
        let position = self
            .transitions
            .iter()
            .position(|t| t == transition)
            .ok_or_else(|| StatechartError::TransitionNotFound(transition.to_string()))?;

        self.transitions.remove(position);
        debug!(transition = %transition, "Removed transition");
        Ok(())
    }

    /// Transitions leaving the given state.
    pub fn transitions_from(&self, name: &str) -> Result<Vec<&Transition>> {
        self.state_for(name)?;
        Ok(self
            .transitions
            .iter()
            .filter(|t| t.from_state == name)
            .collect())
    }

    /// Transitions targeting the given state. Internal transitions target
    /// their own source and are included.
    pub fn transitions_to(&self, name: &str) -> Result<Vec<&Transition>> {
        self.state_for(name)?;
        Ok(self.transitions.iter().filter(|t| t.targets(name)).collect())
    }

    /// Transitions triggered by the given event name.
    pub fn transitions_with(&self, event: &str) -> Vec<&Transition> {
        self.transitions
            .iter()
            .filter(|t| t.event.as_deref() == Some(event))
            .collect()
    }

    /// Sorted names of every event that triggers a transition of the chart.
    pub fn events(&self) -> Vec<&str> {
        let names: BTreeSet<&str> = self
            .transitions
            .iter()
            .filter_map(|t| t.event.as_deref())
            .collect();
        names.into_iter().collect()
    }

    /// Sorted names of the events triggering a transition that leaves one
    /// of the given states.
    pub fn events_for<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<&str>> {
        let mut events = BTreeSet::new();
        for name in names {
            for transition in self.transitions_from(name.as_ref())? {
                if let Some(event) = transition.event.as_deref() {
                    events.insert(event);
                }
            }
        }
        Ok(events.into_iter().collect())
    }
}
