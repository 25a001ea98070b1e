//! Build errors for the statechart builder.

use crate::error::StatechartError;
use thiserror::Error;

/// Errors that can occur when building a statechart.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("No root state declared. Call .state(state, None) before .build()")]
    MissingRoot,

    #[error("Invalid statechart: {0}")]
    Invalid(#[from] StatechartError),
}
