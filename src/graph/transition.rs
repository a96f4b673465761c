//! Transition edges and their identities.

use crate::core::{Guard, State};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a directed edge: `(event, from, to)`.
///
/// Two transitions with the same tuple are the same edge, regardless of
/// where they were declared. A `Step` is also the by-value element of a
/// reported path, so it carries no guard.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Step<S: State> {
    /// Name of the event that owns the edge
    pub event: String,
    /// Source state
    pub from: S,
    /// Destination state
    pub to: S,
}

impl<S: State> Step<S> {
    pub fn new(event: impl Into<String>, from: S, to: S) -> Self {
        Self {
            event: event.into(),
            from,
            to,
        }
    }
}

impl<S: State> fmt::Display for Step<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({} -> {})", self.event, self.from.name(), self.to.name())
    }
}

/// A directed, possibly guarded edge owned by a named event.
pub struct Transition<S: State, T> {
    pub event: String,
    pub from: S,
    pub to: S,
    pub guard: Option<Guard<T>>,
}

impl<S: State, T> Transition<S, T> {
    /// The edge identity of this transition.
    pub fn step(&self) -> Step<S> {
        Step::new(self.event.clone(), self.from.clone(), self.to.clone())
    }

    /// True if this transition has the given identity (no allocation).
    pub fn is(&self, step: &Step<S>) -> bool {
        self.event == step.event && self.from == step.from && self.to == step.to
    }

    /// Check the declared guard for a subject (pure). Unguarded
    /// transitions always allow firing.
    pub fn allows(&self, subject: &T) -> bool {
        self.guard.as_ref().is_none_or(|g| g.check(subject))
    }
}

impl<S: State, T> Clone for Transition<S, T> {
    fn clone(&self) -> Self {
        Self {
            event: self.event.clone(),
            from: self.from.clone(),
            to: self.to.clone(),
            guard: self.guard.clone(),
        }
    }
}

impl<S: State, T> fmt::Debug for Transition<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("event", &self.event)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("guarded", &self.guard.is_some())
            .finish()
    }
}
