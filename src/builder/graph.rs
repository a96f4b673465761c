//! Builder for constructing transition graphs.

use crate::builder::error::BuildError;
use crate::builder::event::EventBuilder;
use crate::core::State;
use crate::graph::{Event, Graph, StateReader};
use std::sync::Arc;

/// Builder for constructing graphs with a fluent API.
///
/// States referenced by a transition but never declared are registered
/// automatically, after the declared ones, in first-reference order.
/// Declaring an event name twice appends to the first declaration.
pub struct GraphBuilder<S: State, T> {
    states: Vec<S>,
    events: Vec<EventBuilder<S, T>>,
    reader: Option<StateReader<S, T>>,
}

impl<S: State, T> GraphBuilder<S, T> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            events: Vec::new(),
            reader: None,
        }
    }

    /// Set how a subject's current state is read (required).
    pub fn state_of<F>(mut self, reader: F) -> Self
    where
        F: Fn(&T) -> S + Send + Sync + 'static,
    {
        self.reader = Some(Arc::new(reader));
        self
    }

    /// Declare a state.
    pub fn state(mut self, state: S) -> Self {
        self.states.push(state);
        self
    }

    /// Declare several states at once.
    pub fn states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        self.states.extend(states);
        self
    }

    /// Declare an event.
    pub fn event(mut self, event: EventBuilder<S, T>) -> Self {
        self.events.push(event);
        self
    }

    /// Build the graph.
    /// Returns an error if the state reader is missing or an event is invalid.
    pub fn build(self) -> Result<Graph<S, T>, BuildError> {
        let reader = self.reader.ok_or(BuildError::MissingStateReader)?;

        let mut states: Vec<S> = Vec::new();
        for state in self.states {
            register(&mut states, state);
        }

        let mut events: Vec<Event<S, T>> = Vec::new();
        for builder in self.events {
            let declared = builder.build()?;
            let index = match events.iter().position(|e| e.name() == declared.name()) {
                Some(index) => index,
                None => {
                    events.push(Event::new(declared.name().to_string(), Vec::new()));
                    events.len() - 1
                }
            };

            let merged = events[index].transitions_mut();
            for transition in declared.transitions() {
                register(&mut states, transition.from.clone());
                register(&mut states, transition.to.clone());

                let step = transition.step();
                if merged.iter().any(|t| t.is(&step)) {
                    tracing::debug!(transition = %step, "dropping duplicate transition");
                    continue;
                }
                merged.push(transition.clone());
            }
        }

        tracing::debug!(
            states = states.len(),
            events = events.len(),
            "built transition graph"
        );

        Ok(Graph::new(states, events, reader))
    }
}

impl<S: State, T> Default for GraphBuilder<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

fn register<S: State>(states: &mut Vec<S>, state: S) {
    if !states.contains(&state) {
        states.push(state);
    }
}
