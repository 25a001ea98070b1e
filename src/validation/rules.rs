//! Individual well-formedness rules.
//!
//! Each rule inspects one element and yields a `Validation`, so that
//! [`Statechart::validate`](crate::chart::Statechart::validate) can run them
//! all and report every violation at once.

use crate::chart::Statechart;
use crate::core::{State, Transition};
use crate::validation::violations::Violation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a single rule.
pub type Check = Validation<(), NonEmptyVec<Violation>>;

fn check(holds: bool, violation: impl FnOnce() -> Violation) -> Check {
    if holds {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

pub(crate) fn has_root(chart: &Statechart) -> Check {
    check(chart.root().is_some(), || Violation::MissingRoot)
}

/// Composite states must own at least one child.
pub(crate) fn composite_has_children(chart: &Statechart, state: &State) -> Check {
    let has_children = chart
        .children_for(state.name())
        .map(|children| !children.is_empty())
        .unwrap_or(false);

    if state.is_compound() {
        check(has_children, || Violation::CompoundWithoutChildren {
            state: state.name().to_string(),
        })
    } else if state.is_orthogonal() {
        check(has_children, || Violation::OrthogonalWithoutChildren {
            state: state.name().to_string(),
        })
    } else {
        Validation::success(())
    }
}

/// A compound `initial` must designate one of its children, and a history
/// `initial` one of its siblings.
pub(crate) fn initial_is_reachable(chart: &Statechart, state: &State) -> Check {
    let Some(initial) = state.initial() else {
        return Validation::success(());
    };

    let scope = if state.is_history() {
        chart.parent_for(state.name()).ok().flatten()
    } else {
        Some(state.name())
    };
    let reachable = scope
        .and_then(|scope| chart.children_for(scope).ok())
        .is_some_and(|children| children.iter().any(|child| child == initial));

    if state.is_history() {
        check(reachable, || Violation::HistoryInitialNotASibling {
            state: state.name().to_string(),
            initial: initial.to_string(),
        })
    } else {
        check(reachable, || Violation::InitialNotAChild {
            state: state.name().to_string(),
            initial: initial.to_string(),
        })
    }
}

/// An internal transition with neither event nor guard would fire forever.
pub(crate) fn internal_transition_is_bounded(transition: &Transition) -> Check {
    let unbounded =
        transition.is_internal() && transition.is_eventless() && transition.guard.is_none();
    check(!unbounded, || Violation::UnboundedInternalTransition {
        transition: transition.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_chart_has_no_root() {
        let chart = Statechart::new("empty");
        assert!(has_root(&chart).is_failure());
    }

    #[test]
    fn leaf_states_need_no_children() {
        let mut chart = Statechart::new("c");
        chart.add_state(State::basic("b"), None).unwrap();
        let state = chart.state_for("b").unwrap();

        assert!(composite_has_children(&chart, state).is_success());
        assert!(initial_is_reachable(&chart, state).is_success());
    }

    #[test]
    fn childless_composites_fail() {
        let mut chart = Statechart::new("c");
        chart.add_state(State::orthogonal("o"), None).unwrap();
        chart.add_state(State::compound("c"), Some("o")).unwrap();

        match composite_has_children(&chart, chart.state_for("o").unwrap()) {
            Validation::Success(_) => {}
            Validation::Failure(_) => panic!("o has a child"),
        }
        match composite_has_children(&chart, chart.state_for("c").unwrap()) {
            Validation::Failure(errors) => assert!(errors.iter().any(|e| matches!(
                e,
                Violation::CompoundWithoutChildren { state } if state == "c"
            ))),
            Validation::Success(_) => panic!("Expected failure, got success"),
        }
    }

    #[test]
    fn history_initial_must_be_a_sibling() {
        let mut chart = Statechart::new("c");
        chart.add_state(State::compound("root"), None).unwrap();
        chart.add_state(State::compound("inner"), Some("root")).unwrap();
        chart.add_state(State::basic("a"), Some("root")).unwrap();
        chart.add_state(State::basic("deep"), Some("inner")).unwrap();
        chart
            .add_state(State::shallow_history("good").with_initial("a"), Some("root"))
            .unwrap();
        chart
            .add_state(State::deep_history("bad").with_initial("deep"), Some("root"))
            .unwrap();

        assert!(initial_is_reachable(&chart, chart.state_for("good").unwrap()).is_success());
        assert!(initial_is_reachable(&chart, chart.state_for("bad").unwrap()).is_failure());
    }

    #[test]
    fn internal_transitions_need_event_or_guard() {
        assert!(internal_transition_is_bounded(&Transition::internal("a")).is_failure());
        let with_event = Transition::internal("a").on_event("e");
        let with_guard = Transition::internal("a").with_guard("x");
        assert!(internal_transition_is_bounded(&with_event).is_success());
        assert!(internal_transition_is_bounded(&with_guard).is_success());
        assert!(internal_transition_is_bounded(&Transition::new("a", "b")).is_success());
    }
}
