//! Builder API for ergonomic statechart construction.
//!
//! The builder collects state and transition declarations and replays them
//! against a fresh [`Statechart`](crate::chart::Statechart), so every
//! structural rule of the registry still applies.
//!
//! # Example
//!
//! ```
//! use statechart::builder::StatechartBuilder;
//! use statechart::core::{State, Transition};
//!
//! let chart = StatechartBuilder::new("traffic light")
//!     .state(State::compound("light").with_initial("red"), None)
//!     .states(
//!         [State::basic("red"), State::basic("green"), State::basic("yellow")],
//!         "light",
//!     )
//!     .transition(Transition::new("red", "green").on_event("tick"))
//!     .transition(Transition::new("green", "yellow").on_event("tick"))
//!     .transition(Transition::new("yellow", "red").on_event("tick"))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(chart.transitions_with("tick").len(), 3);
//! ```

pub mod chart;
pub mod error;

pub use chart::StatechartBuilder;
pub use error::BuildError;
