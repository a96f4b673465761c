//! Builder API for ergonomic graph construction.
//!
//! This module provides fluent builders and a macro for declaring states,
//! events and guarded transitions with minimal boilerplate.

pub mod error;
pub mod event;
pub mod graph;
pub mod macros;

pub use error::BuildError;
pub use event::EventBuilder;
pub use graph::GraphBuilder;

use crate::core::State;
use crate::graph::Graph;

/// Build a graph whose subject *is* its current state.
///
/// Handy when there is no separate host object: the state value itself
/// is the subject that guards are evaluated against.
///
/// # Example
///
/// ```
/// use waypoints::builder::{self_subject_graph, EventBuilder};
/// use waypoints::paths::PathOptions;
///
/// let graph = self_subject_graph(
///     ["parked".to_string(), "idling".to_string()],
///     vec![EventBuilder::new("ignite").transition("parked".to_string(), "idling".to_string())],
/// )
/// .unwrap();
///
/// let paths = graph.paths_for(&"parked".to_string(), PathOptions::new()).unwrap();
/// assert_eq!(paths.len(), 1);
/// ```
pub fn self_subject_graph<S, I>(
    states: I,
    events: Vec<EventBuilder<S, S>>,
) -> Result<Graph<S, S>, BuildError>
where
    S: State + 'static,
    I: IntoIterator<Item = S>,
{
    events
        .into_iter()
        .fold(
            GraphBuilder::new().state_of(|s: &S| s.clone()).states(states),
            GraphBuilder::event,
        )
        .build()
}
