//! Structural errors raised by the statechart model.

use thiserror::Error;

/// Convenience alias for results of model operations.
pub type Result<T> = std::result::Result<T, StatechartError>;

/// Errors that can occur when mutating or querying a statechart.
///
/// Every error is raised by the call that would have broken an invariant.
/// The registry is left exactly as it was before that call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StatechartError {
    #[error("State {0} already exists")]
    DuplicateState(String),

    #[error("State {0} does not exist")]
    UnknownState(String),

    #[error("{parent} cannot be used as a parent for {state}: it is not a composite state")]
    InvalidParent { parent: String, state: String },

    #[error("{parent} cannot be used as a parent for history state {state}: it is not a compound state")]
    InvalidHistoryParent { parent: String, state: String },

    #[error("Root is already defined as {root}, {state} should declare an existing parent state")]
    RootAlreadyDefined { root: String, state: String },

    #[error("Cannot remove {state} while it has {reason}")]
    NotRemovable { state: String, reason: String },

    #[error("Transition {0} does not exist")]
    TransitionNotFound(String),

    #[error("Cannot add {transition} on {state}: final states cannot have transitions")]
    InvalidTransitionSource { transition: String, state: String },

    #[error("State {0} has no initial state slot")]
    InitialNotSupported(String),

    #[error("{event} has no attribute {attribute}")]
    AttributeMissing { event: String, attribute: String },
}
