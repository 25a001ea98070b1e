//! Execution trace records.
//!
//! An interpreter reports each transition firing as a [`MicroStep`] and each
//! fully processed event as a [`MacroStep`]. These are plain values: nothing
//! is validated, the producer is trusted.

use super::event::Event;
use super::transition::Transition;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Effect of firing (at most) one transition.
///
/// Order of `entered_states` and `exited_states` matters: it is the order in
/// which states were entered and exited.
///
/// # Example
///
/// ```rust
/// use statechart::core::{Event, MicroStep, Transition};
///
/// let step = MicroStep::new(
///     Some(Event::new("go")),
///     Some(Transition::new("b", "c").on_event("go")),
/// )
/// .exiting(["b"])
/// .entering(["c"]);
///
/// assert_eq!(step.exited_states, ["b"]);
/// assert_eq!(step.entered_states, ["c"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MicroStep {
    /// Consumed event, `None` for eventless steps
    pub event: Option<Event>,
    /// Fired transition, `None` for pure entry/exit steps
    pub transition: Option<Transition>,
    /// Entered state names, in entry order
    pub entered_states: Vec<String>,
    /// Exited state names, in exit order
    pub exited_states: Vec<String>,
}

impl MicroStep {
    /// Create a step with no entered or exited states.
    pub fn new(event: Option<Event>, transition: Option<Transition>) -> Self {
        Self {
            event,
            transition,
            entered_states: Vec::new(),
            exited_states: Vec::new(),
        }
    }

    /// Append entered state names.
    pub fn entering<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entered_states.extend(states.into_iter().map(Into::into));
        self
    }

    /// Append exited state names.
    pub fn exiting<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exited_states.extend(states.into_iter().map(Into::into));
        self
    }
}

fn display_event(event: Option<&Event>) -> String {
    event.map_or_else(|| "None".to_string(), ToString::to_string)
}

impl fmt::Display for MicroStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let transition = self
            .transition
            .as_ref()
            .map_or_else(|| "None".to_string(), ToString::to_string);
        write!(
            f,
            "MicroStep({}, {}, >{:?}, <{:?})",
            display_event(self.event.as_ref()),
            transition,
            self.entered_states,
            self.exited_states
        )
    }
}

/// Ordered micro steps produced while processing one event.
///
/// Recording is immutable: [`MacroStep::record`] returns a new macro step
/// and leaves the original untouched.
///
/// # Example
///
/// ```rust
/// use statechart::core::{Event, MacroStep, MicroStep, Transition};
///
/// let macro_step = MacroStep::new(1.5, Vec::new())
///     .record(MicroStep::new(None, None).entering(["a", "b"]))
///     .record(
///         MicroStep::new(Some(Event::new("go")), Some(Transition::new("b", "c")))
///             .exiting(["b"])
///             .entering(["c"]),
///     );
///
/// assert_eq!(macro_step.event(), Some(&Event::new("go")));
/// assert_eq!(macro_step.entered_states(), ["a", "b", "c"]);
/// assert_eq!(macro_step.exited_states(), ["b"]);
/// assert_eq!(macro_step.transitions().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MacroStep {
    time: f64,
    steps: Vec<MicroStep>,
}

impl MacroStep {
    /// Create a macro step at `time` from existing micro steps.
    pub fn new(time: f64, steps: Vec<MicroStep>) -> Self {
        Self { time, steps }
    }

    /// Append a micro step, returning a new macro step.
    pub fn record(&self, step: MicroStep) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self {
            time: self.time,
            steps,
        }
    }

    /// Time at which this step was executed.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Micro steps in execution order.
    pub fn steps(&self) -> &[MicroStep] {
        &self.steps
    }

    /// First event consumed by any of the steps.
    pub fn event(&self) -> Option<&Event> {
        self.steps.iter().find_map(|step| step.event.as_ref())
    }

    /// Transitions that were fired, in order.
    pub fn transitions(&self) -> Vec<&Transition> {
        self.steps
            .iter()
            .filter_map(|step| step.transition.as_ref())
            .collect()
    }

    /// Names of the entered states across all steps.
    pub fn entered_states(&self) -> Vec<&str> {
        self.steps
            .iter()
            .flat_map(|step| step.entered_states.iter().map(String::as_str))
            .collect()
    }

    /// Names of the exited states across all steps.
    pub fn exited_states(&self) -> Vec<&str> {
        self.steps
            .iter()
            .flat_map(|step| step.exited_states.iter().map(String::as_str))
            .collect()
    }
}

impl fmt::Display for MacroStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let transitions: Vec<String> = self.transitions().iter().map(|t| t.to_string()).collect();
        write!(
            f,
            "MacroStep@{:.3}({}, [{}], >{:?}, <{:?})",
            self.time,
            display_event(self.event()),
            transitions.join(", "),
            self.entered_states(),
            self.exited_states()
        )
    }
}
