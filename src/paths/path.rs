//! A single enumerated path.

use crate::core::State;
use crate::graph::Step;
use crate::paths::error::PathError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::Hash;
use std::ops::Index;

/// An ordered, non-empty walk of transitions from a start state.
///
/// Each step's `from` equals the previous step's `to`, and no step
/// appears twice. Deserialization checks all three.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "", try_from = "Vec<Step<S>>", into = "Vec<Step<S>>")]
pub struct Path<S: State> {
    steps: Vec<Step<S>>,
}

impl<S: State> Path<S> {
    pub(crate) fn new(steps: Vec<Step<S>>) -> Self {
        debug_assert!(!steps.is_empty(), "paths are never empty");
        Self { steps }
    }

    pub fn steps(&self) -> &[Step<S>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step<S>> {
        self.steps.iter()
    }

    /// State the path starts from.
    pub fn from_name(&self) -> &S {
        &self.steps[0].from
    }

    /// State the path ends at.
    pub fn to_name(&self) -> &S {
        &self.steps[self.steps.len() - 1].to
    }

    pub fn from_states(&self) -> Vec<&S> {
        first_seen(self.steps.iter().map(|step| &step.from))
    }

    pub fn to_states(&self) -> Vec<&S> {
        first_seen(self.steps.iter().map(|step| &step.to))
    }

    pub fn events(&self) -> Vec<&str> {
        first_seen(self.steps.iter().map(|step| step.event.as_str()))
    }

    /// True if every step of `self` opens `other`.
    pub fn is_prefix_of(&self, other: &Path<S>) -> bool {
        other.steps.starts_with(&self.steps)
    }

    pub fn into_steps(self) -> Vec<Step<S>> {
        self.steps
    }
}

impl<S: State> TryFrom<Vec<Step<S>>> for Path<S> {
    type Error = PathError;

    fn try_from(steps: Vec<Step<S>>) -> Result<Self, PathError> {
        if steps.is_empty() {
            return Err(PathError::EmptyPath);
        }
        if let Some(index) = steps.windows(2).position(|pair| pair[0].to != pair[1].from) {
            return Err(PathError::DisconnectedPath { index: index + 1 });
        }
        let mut seen = HashSet::new();
        if let Some(index) = steps.iter().position(|step| !seen.insert(step)) {
            return Err(PathError::RepeatedStep { index });
        }
        Ok(Self { steps })
    }
}

impl<S: State> From<Path<S>> for Vec<Step<S>> {
    fn from(path: Path<S>) -> Self {
        path.steps
    }
}

impl<S: State> PartialEq<Vec<Step<S>>> for Path<S> {
    fn eq(&self, other: &Vec<Step<S>>) -> bool {
        self.steps == *other
    }
}

impl<S: State> Index<usize> for Path<S> {
    type Output = Step<S>;

    fn index(&self, index: usize) -> &Step<S> {
        &self.steps[index]
    }
}

impl<'a, S: State> IntoIterator for &'a Path<S> {
    type Item = &'a Step<S>;
    type IntoIter = std::slice::Iter<'a, Step<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// De-duplicate `values`, keeping the first occurrence of each.
pub(crate) fn first_seen<V, I>(values: I) -> Vec<V>
where
    V: Eq + Hash + Clone,
    I: IntoIterator<Item = V>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}
