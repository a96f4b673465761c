//! Named events grouping one or more transitions.

use crate::core::State;
use crate::graph::transition::Transition;

/// A named group of transitions, any one of which may fire when the
/// event is triggered from a matching source state.
///
/// Transitions are kept in declaration order.
pub struct Event<S: State, T> {
    name: String,
    transitions: Vec<Transition<S, T>>,
}

impl<S: State, T> Event<S, T> {
    pub(crate) fn new(name: String, transitions: Vec<Transition<S, T>>) -> Self {
        Self { name, transitions }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All transitions of this event, in declaration order.
    pub fn transitions(&self) -> &[Transition<S, T>] {
        &self.transitions
    }

    pub(crate) fn transitions_mut(&mut self) -> &mut Vec<Transition<S, T>> {
        &mut self.transitions
    }
}

impl<S: State, T> Clone for Event<S, T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            transitions: self.transitions.clone(),
        }
    }
}

impl<S: State, T> std::fmt::Debug for Event<S, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Event")
            .field("name", &self.name)
            .field("transitions", &self.transitions)
            .finish()
    }
}
