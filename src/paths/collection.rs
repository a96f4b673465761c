//! The result of a traversal request.

use crate::core::State;
use crate::graph::{Graph, Step};
use crate::paths::enumerator::PathEnumerator;
use crate::paths::error::PathError;
use crate::paths::oracle::{DeclaredGuards, GuardOracle};
use crate::paths::options::PathOptions;
use crate::paths::path::{first_seen, Path};
use serde::Serialize;
use std::ops::Index;

/// Every path a subject could take through a graph, in discovery order.
///
/// A collection is built once and never changes. `from_states`,
/// `to_states` and `events` are derived from the paths at construction:
/// each lists distinct values in the order they are first met, walking
/// paths in order and steps within a path in order.
///
/// # Example
///
/// ```
/// use waypoints::builder::{EventBuilder, GraphBuilder};
/// use waypoints::paths::{PathCollection, PathOptions};
///
/// struct Car {
///     state: String,
/// }
///
/// let graph = GraphBuilder::new()
///     .state_of(|car: &Car| car.state.clone())
///     .event(EventBuilder::new("ignite").transition("parked".into(), "idling".into()))
///     .event(EventBuilder::new("shift_up").transition("idling".into(), "first_gear".into()))
///     .build()
///     .unwrap();
///
/// let car = Car { state: "parked".into() };
/// let paths = PathCollection::new(&graph, &car, PathOptions::new()).unwrap();
///
/// assert_eq!(paths.len(), 1);
/// assert_eq!(paths.from_states(), &["parked".to_string(), "idling".to_string()]);
/// assert_eq!(paths.events(), &["ignite".to_string(), "shift_up".to_string()]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(bound = "")]
pub struct PathCollection<S: State> {
    from_name: S,
    to_name: Option<S>,
    paths: Vec<Path<S>>,
    from_states: Vec<S>,
    to_states: Vec<S>,
    events: Vec<String>,
}

impl<S: State> PathCollection<S> {
    /// Enumerate paths for `subject`, consulting each transition's
    /// declared guard.
    pub fn new<T>(
        graph: &Graph<S, T>,
        subject: &T,
        options: PathOptions<S>,
    ) -> Result<Self, PathError> {
        Self::with_oracle(graph, subject, options, &DeclaredGuards)
    }

    /// Enumerate paths for `subject`, asking `oracle` whether each
    /// candidate edge may fire.
    pub fn with_oracle<T, O>(
        graph: &Graph<S, T>,
        subject: &T,
        options: PathOptions<S>,
        oracle: &O,
    ) -> Result<Self, PathError>
    where
        O: GuardOracle<S, T>,
    {
        let from = match options.from_state() {
            Some(from) => from.clone(),
            None => graph.current_state_of(subject),
        };
        let from_name = known_state(graph, from)?;
        let to_name = options
            .to_state()
            .cloned()
            .map(|to| known_state(graph, to))
            .transpose()?;

        tracing::debug!(
            from = from_name.name(),
            to = ?to_name.as_ref().map(State::name),
            deep = options.is_deep(),
            guard = options.checks_guards(),
            "enumerating paths"
        );

        let paths = PathEnumerator::new(graph, subject, oracle)
            .target(to_name.as_ref())
            .deep(options.is_deep())
            .guard(options.checks_guards())
            .enumerate(&from_name);

        tracing::debug!(paths = paths.len(), "path enumeration complete");

        Ok(Self::from_paths(from_name, to_name, paths))
    }

    fn from_paths(from_name: S, to_name: Option<S>, paths: Vec<Path<S>>) -> Self {
        let steps = || paths.iter().flat_map(Path::iter);
        let from_states = first_seen(steps().map(|step| step.from.clone()));
        let to_states = first_seen(steps().map(|step| step.to.clone()));
        let events = first_seen(steps().map(|step| step.event.clone()));

        Self {
            from_name,
            to_name,
            paths,
            from_states,
            to_states,
            events,
        }
    }

    /// The state every path starts from.
    pub fn from_name(&self) -> &S {
        &self.from_name
    }

    /// The requested target, if any.
    pub fn to_name(&self) -> Option<&S> {
        self.to_name.as_ref()
    }

    pub fn from_states(&self) -> &[S] {
        &self.from_states
    }

    pub fn to_states(&self) -> &[S] {
        &self.to_states
    }

    /// Event names used by any path, de-duplicated by name.
    pub fn events(&self) -> &[String] {
        &self.events
    }

    pub fn paths(&self) -> &[Path<S>] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Path<S>> {
        self.paths.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Path<S>> {
        self.paths.iter()
    }

    /// True if some path consists of exactly `steps`.
    pub fn contains(&self, steps: &[Step<S>]) -> bool {
        self.paths.iter().any(|path| path.steps() == steps)
    }

    pub fn into_paths(self) -> Vec<Path<S>> {
        self.paths
    }
}

fn known_state<S: State, T>(graph: &Graph<S, T>, state: S) -> Result<S, PathError> {
    if graph.has_state(&state) {
        Ok(state)
    } else {
        Err(PathError::UnknownState {
            name: state.name().to_string(),
        })
    }
}

impl<S: State> PartialEq<Vec<Vec<Step<S>>>> for PathCollection<S> {
    fn eq(&self, other: &Vec<Vec<Step<S>>>) -> bool {
        self.paths.len() == other.len()
            && self.paths.iter().zip(other).all(|(path, steps)| path == steps)
    }
}

impl<S: State> PartialEq<Vec<Path<S>>> for PathCollection<S> {
    fn eq(&self, other: &Vec<Path<S>>) -> bool {
        self.paths == *other
    }
}

impl<S: State> Index<usize> for PathCollection<S> {
    type Output = Path<S>;

    fn index(&self, index: usize) -> &Path<S> {
        &self.paths[index]
    }
}

impl<'a, S: State> IntoIterator for &'a PathCollection<S> {
    type Item = &'a Path<S>;
    type IntoIter = std::slice::Iter<'a, Path<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

impl<S: State> IntoIterator for PathCollection<S> {
    type Item = Path<S>;
    type IntoIter = std::vec::IntoIter<Path<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}
