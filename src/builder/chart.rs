//! Builder for constructing statecharts.

use crate::builder::error::BuildError;
use crate::chart::Statechart;
use crate::core::{State, Transition};
use tracing::debug;

/// Builder for constructing statecharts with a fluent API.
///
/// States are registered in declaration order, then transitions, so a
/// transition may be declared before the states it refers to.
pub struct StatechartBuilder {
    name: String,
    description: Option<String>,
    preamble: Option<String>,
    states: Vec<(State, Option<String>)>,
    transitions: Vec<Transition>,
}

impl StatechartBuilder {
    /// Create a new builder for a chart called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            preamble: None,
            states: Vec::new(),
            transitions: Vec::new(),
        }
    }

    /// Set the chart description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the preamble code.
    pub fn preamble(mut self, preamble: impl Into<String>) -> Self {
        self.preamble = Some(preamble.into());
        self
    }

    /// Declare a state under `parent`, or the root if `parent` is `None`.
    pub fn state(mut self, state: State, parent: Option<&str>) -> Self {
        self.states.push((state, parent.map(str::to_string)));
        self
    }

    /// Declare several states sharing the same parent.
    pub fn states<I>(mut self, states: I, parent: &str) -> Self
    where
        I: IntoIterator<Item = State>,
    {
        self.states
            .extend(states.into_iter().map(|s| (s, Some(parent.to_string()))));
        self
    }

    /// Declare a transition.
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Declare several transitions at once.
    pub fn transitions<I>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = Transition>,
    {
        self.transitions.extend(transitions);
        self
    }

    /// Build the statechart.
    /// Returns the first structural error met, if any.
    pub fn build(self) -> Result<Statechart, BuildError> {
        if !self.states.iter().any(|(_, parent)| parent.is_none()) {
            return Err(BuildError::MissingRoot);
        }

        let mut chart = Statechart::new(self.name);
        if let Some(description) = self.description {
            chart = chart.with_description(description);
        }
        if let Some(preamble) = self.preamble {
            chart = chart.with_preamble(preamble);
        }

        for (state, parent) in self.states {
            chart.add_state(state, parent.as_deref())?;
        }
        for transition in self.transitions {
            chart.add_transition(transition)?;
        }

        debug!(
            chart = %chart.name(),
            states = chart.states().len(),
            transitions = chart.transitions().len(),
            "Built statechart"
        );
        Ok(chart)
    }
}
