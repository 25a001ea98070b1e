//! Core value types of the statechart model.
//!
//! This module contains the leaf vocabulary shared by the registry and by
//! any interpreter built on top of it:
//! - Events and their payloads
//! - States and their kinds
//! - Transitions
//! - Contracts attached to states and transitions
//! - Micro and macro step records
//!
//! All types here are plain values with no cross-entity checks. Placement
//! and reference rules are enforced by [`Statechart`](crate::chart::Statechart).

mod contract;
mod event;
mod state;
mod step;
mod transition;

pub use contract::Contract;
pub use event::{Event, EventKind};
pub use state::{Actions, State, StateKind};
pub use step::{MacroStep, MicroStep};
pub use transition::Transition;
