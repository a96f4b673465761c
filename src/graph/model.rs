//! Immutable snapshot of states, events and transitions.

use crate::core::State;
use crate::graph::event::Event;
use crate::graph::transition::Transition;
use crate::paths::{PathCollection, PathError, PathOptions};
use std::sync::Arc;

/// Type alias for the function reading a subject's current state.
pub type StateReader<S, T> = Arc<dyn Fn(&T) -> S + Send + Sync>;

/// Read-only transition graph for subjects of type `T`.
///
/// Built once through [`GraphBuilder`](crate::builder::GraphBuilder) and
/// never mutated afterwards, so any number of enumerations may walk it
/// concurrently.
pub struct Graph<S: State, T> {
    states: Vec<S>,
    events: Vec<Event<S, T>>,
    reader: StateReader<S, T>,
}

impl<S: State, T> Graph<S, T> {
    pub(crate) fn new(states: Vec<S>, events: Vec<Event<S, T>>, reader: StateReader<S, T>) -> Self {
        Self {
            states,
            events,
            reader,
        }
    }

    /// Defined states in registration order.
    pub fn states(&self) -> &[S] {
        &self.states
    }

    pub fn has_state(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    /// Look a state up by its name.
    pub fn state_named(&self, name: &str) -> Option<&S> {
        self.states.iter().find(|s| s.name() == name)
    }

    /// Declared events in declaration order.
    pub fn events(&self) -> &[Event<S, T>] {
        &self.events
    }

    pub fn event(&self, name: &str) -> Option<&Event<S, T>> {
        self.events.iter().find(|e| e.name() == name)
    }

    /// Every transition: events in declaration order, then transitions
    /// within each event in declaration order.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition<S, T>> + '_ {
        self.events.iter().flat_map(|e| e.transitions().iter())
    }

    /// Transitions leaving `state`, in the same order as [`Graph::transitions`],
    /// each paired with its position in that order.
    ///
    /// The builder drops transitions repeating an `(event, from, to)` tuple,
    /// so the position identifies an edge exactly as its [`Step`] does.
    ///
    /// [`Step`]: crate::graph::Step
    pub fn transitions_from<'a, 's>(
        &'a self,
        state: &'s S,
    ) -> impl Iterator<Item = (usize, &'a Transition<S, T>)> + 's
    where
        'a: 's,
    {
        self.transitions()
            .enumerate()
            .filter(move |(_, t)| t.from == *state)
    }

    pub fn edge_count(&self) -> usize {
        self.events.iter().map(|e| e.transitions().len()).sum()
    }

    /// Read the subject's current state through the bound reader.
    pub fn current_state_of(&self, subject: &T) -> S {
        (self.reader)(subject)
    }

    /// Enumerate paths for `subject` through this graph.
    ///
    /// Shorthand for [`PathCollection::new`].
    pub fn paths_for(
        &self,
        subject: &T,
        options: PathOptions<S>,
    ) -> Result<PathCollection<S>, PathError> {
        PathCollection::new(self, subject, options)
    }
}

impl<S: State, T> Clone for Graph<S, T> {
    fn clone(&self) -> Self {
        Self {
            states: self.states.clone(),
            events: self.events.clone(),
            reader: Arc::clone(&self.reader),
        }
    }
}

impl<S: State, T> std::fmt::Debug for Graph<S, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("states", &self.states)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}
