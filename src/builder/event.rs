//! Builder for declaring an event and its transitions.

use crate::builder::error::BuildError;
use crate::core::{Guard, State};
use crate::graph::{Event, Transition};

/// Builder for constructing events with a fluent API.
///
/// Transitions keep the order in which they are declared; that order is
/// the order path enumeration tries them in.
pub struct EventBuilder<S: State, T> {
    name: String,
    transitions: Vec<Transition<S, T>>,
}

impl<S: State, T> EventBuilder<S, T> {
    /// Start declaring the event called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transitions: Vec::new(),
        }
    }

    /// Add an unguarded transition.
    pub fn transition(self, from: S, to: S) -> Self {
        self.push(from, to, None)
    }

    /// Add a transition with a guard.
    pub fn guarded(self, from: S, to: S, guard: Guard<T>) -> Self {
        self.push(from, to, Some(guard))
    }

    /// Add a transition guarded by a closure.
    pub fn transition_when<F>(self, from: S, to: S, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.push(from, to, Some(Guard::new(predicate)))
    }

    /// Add one unguarded transition to `to` from each of `sources`.
    pub fn transitions_from<I>(mut self, sources: I, to: S) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        for from in sources {
            self = self.push(from, to.clone(), None);
        }
        self
    }

    fn push(mut self, from: S, to: S, guard: Option<Guard<T>>) -> Self {
        self.transitions.push(Transition {
            event: self.name.clone(),
            from,
            to,
            guard,
        });
        self
    }

    /// Build the event.
    pub fn build(self) -> Result<Event<S, T>, BuildError> {
        if self.name.is_empty() {
            return Err(BuildError::EmptyEventName);
        }

        Ok(Event::new(self.name, self.transitions))
    }
}
