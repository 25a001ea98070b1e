//! Statechart: the structural model of hierarchical, parallel state machines
//!
//! A statechart is a tree of states (with parallel regions and history
//! memory) plus a flat set of transitions referencing states by name. This
//! crate keeps that structure consistent under incremental mutation and
//! offers the tree lookups an interpreter needs to decide which states to
//! exit and enter when a transition fires.
//!
//! Executing a chart is out of scope: guards, actions and contracts are
//! opaque text, and step records are produced by an external interpreter.
//!
//! # Core Concepts
//!
//! - **State**: Named node of one of six kinds (basic, compound, orthogonal,
//!   shallow/deep history, final)
//! - **Transition**: Edge from a source state, optionally to a target, guarded
//!   by an event name and/or guard text
//! - **Statechart**: Registry owning states and transitions, enforcing
//!   placement and uniqueness rules
//! - **Steps**: Micro and macro step records describing an execution trace
//!
//! # Example
//!
//! ```rust
//! use statechart::builder::StatechartBuilder;
//! use statechart::core::{State, Transition};
//!
//! let chart = StatechartBuilder::new("example")
//!     .state(State::compound("A").with_initial("B"), None)
//!     .states([State::basic("B"), State::basic("C")], "A")
//!     .transition(Transition::new("B", "C").on_event("go"))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(chart.states(), ["A", "B", "C"]);
//! assert_eq!(chart.ancestors_for("B").unwrap(), ["A"]);
//! assert_eq!(chart.least_common_ancestor("B", "C").unwrap(), Some("A"));
//! assert_eq!(chart.events(), ["go"]);
//! assert!(chart.validate().is_success());
//! ```

pub mod builder;
pub mod chart;
pub mod core;
pub mod error;
pub mod validation;

// Re-export commonly used types
pub use builder::{BuildError, StatechartBuilder};
pub use chart::Statechart;
pub use crate::core::{Contract, Event, MacroStep, MicroStep, State, StateKind, Transition};
pub use error::{Result, StatechartError};
pub use validation::Violation;
