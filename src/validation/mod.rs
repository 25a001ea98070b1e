//! Whole-chart well-formedness checks.
//!
//! The mutation API keeps the structural invariants of a chart at all times,
//! but some rules can only be judged once a chart is complete: a compound
//! state under construction has no children yet, and its `initial` may be
//! set before the child exists.
//!
//! [`Statechart::validate`] runs every rule and accumulates ALL violations
//! using Stillwater's `Validation`, instead of stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use statechart::chart::Statechart;
//! use statechart::core::State;
//! use statechart::validation::Violation;
//! use stillwater::validation::Validation;
//!
//! let mut chart = Statechart::new("draft");
//! chart.add_state(State::compound("root").with_initial("missing"), None)?;
//! chart.add_state(State::orthogonal("parallel"), Some("root"))?;
//!
//! match chart.validate() {
//!     Validation::Failure(violations) => {
//!         assert_eq!(violations.len(), 2);
//!         assert!(violations.iter().any(|v| matches!(v, Violation::InitialNotAChild { .. })));
//!         assert!(violations
//!             .iter()
//!             .any(|v| matches!(v, Violation::OrthogonalWithoutChildren { .. })));
//!     }
//!     Validation::Success(_) => panic!("draft chart should not validate"),
//! }
//! # Ok::<(), statechart::StatechartError>(())
//! ```

pub mod rules;
pub mod violations;

pub use rules::Check;
pub use violations::Violation;

use crate::chart::Statechart;
use stillwater::validation::Validation;
use tracing::trace;

impl Statechart {
    /// Check every well-formedness rule, accumulating all violations.
    ///
    /// Returns `Validation::Success(())` for a well-formed chart.
    pub fn validate(&self) -> Check {
        let mut checks = vec![rules::has_root(self)];

        for name in self.states() {
            if let Ok(state) = self.state_for(name) {
                checks.push(rules::composite_has_children(self, state));
                checks.push(rules::initial_is_reachable(self, state));
            }
        }

        for transition in self.transitions() {
            checks.push(rules::internal_transition_is_bounded(transition));
        }

        trace!(chart = %self.name(), checks = checks.len(), "Validating statechart");
        Validation::all_vec(checks).map(|_| ())
    }
}
