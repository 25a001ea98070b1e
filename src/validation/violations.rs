//! Well-formedness violations of a finished statechart.

use thiserror::Error;

/// Problems that can only be judged on a complete chart.
///
/// Unlike [`StatechartError`](crate::StatechartError), these never prevent a
/// mutation: a chart under construction is expected to have some of them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Violation {
    #[error("Statechart has no root state")]
    MissingRoot,

    #[error("Compound state {state} has no child")]
    CompoundWithoutChildren { state: String },

    #[error("Orthogonal state {state} has no child")]
    OrthogonalWithoutChildren { state: String },

    #[error("Initial state {initial} of {state} is not one of its children")]
    InitialNotAChild { state: String, initial: String },

    #[error("Initial state {initial} of history state {state} is not a child of its parent")]
    HistoryInitialNotASibling { state: String, initial: String },

    #[error("Internal transition {transition} has neither event nor guard")]
    UnboundedInternalTransition { transition: String },
}
