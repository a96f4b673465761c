//! Guard oracles: the per-edge, per-subject yes/no check.

use crate::core::State;
use crate::graph::Transition;

/// Decides whether a transition may fire for a subject.
///
/// The enumerator only asks this question when guard checking is
/// enabled, and only for edges not already used in the current path.
/// Implementations must be pure with respect to the graph.
///
/// Any `Fn(&Transition<S, T>, &T) -> bool` closure is an oracle.
pub trait GuardOracle<S: State, T> {
    fn allows(&self, transition: &Transition<S, T>, subject: &T) -> bool;
}

/// Oracle that consults each transition's declared guard.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeclaredGuards;

impl<S: State, T> GuardOracle<S, T> for DeclaredGuards {
    fn allows(&self, transition: &Transition<S, T>, subject: &T) -> bool {
        transition.allows(subject)
    }
}

impl<S, T, F> GuardOracle<S, T> for F
where
    S: State,
    F: Fn(&Transition<S, T>, &T) -> bool,
{
    fn allows(&self, transition: &Transition<S, T>, subject: &T) -> bool {
        self(transition, subject)
    }
}
