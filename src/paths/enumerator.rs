//! Depth-first path enumeration over a transition graph.

use crate::core::State;
use crate::graph::{Graph, Transition};
use crate::paths::oracle::GuardOracle;
use crate::paths::path::Path;

/// Walks a graph from a start state and collects every distinct path.
///
/// An edge is used at most once per path. Since every level of the walk
/// consumes an unused edge, the depth is bounded by the graph's edge count
/// and the walk always terminates, cycles included.
///
/// Paths are returned in depth-first, left-to-right discovery order,
/// where "left to right" is the graph's declaration order.
pub struct PathEnumerator<'a, S: State, T, O> {
    graph: &'a Graph<S, T>,
    subject: &'a T,
    oracle: &'a O,
    target: Option<&'a S>,
    deep: bool,
    guard: bool,
}

/// Mutable state of a single walk, shared across its branches.
struct Walk<'a, S: State, T> {
    trail: Vec<&'a Transition<S, T>>,
    /// Indexed by position in [`Graph::transitions`]. The builder keeps one
    /// transition per `(event, from, to)` tuple, so this is edge identity.
    used: Vec<bool>,
    found: Vec<Path<S>>,
}

impl<'a, S, T, O> PathEnumerator<'a, S, T, O>
where
    S: State,
    O: GuardOracle<S, T>,
{
    pub fn new(graph: &'a Graph<S, T>, subject: &'a T, oracle: &'a O) -> Self {
        Self {
            graph,
            subject,
            oracle,
            target: None,
            deep: false,
            guard: true,
        }
    }

    /// Only report paths ending at `target`.
    pub fn target(mut self, target: Option<&'a S>) -> Self {
        self.target = target;
        self
    }

    pub fn deep(mut self, deep: bool) -> Self {
        self.deep = deep;
        self
    }

    pub fn guard(mut self, guard: bool) -> Self {
        self.guard = guard;
        self
    }

    /// Enumerate every path starting at `from`.
    pub fn enumerate(&self, from: &S) -> Vec<Path<S>> {
        let mut walk = Walk {
            trail: Vec::new(),
            used: vec![false; self.graph.edge_count()],
            found: Vec::new(),
        };
        self.visit(from, &mut walk);
        walk.found
    }

    fn visit(&self, state: &S, walk: &mut Walk<'a, S, T>) {
        if let Some(target) = self.target {
            if state == target && !walk.trail.is_empty() {
                self.record(walk);
                if !self.deep {
                    return;
                }
            }
        }

        let candidates = self.candidates(state, &walk.used);
        if candidates.is_empty() {
            if self.target.is_none() && !walk.trail.is_empty() {
                self.record(walk);
            }
            return;
        }

        for (index, transition) in candidates {
            walk.used[index] = true;
            walk.trail.push(transition);

            self.visit(&transition.to, walk);

            walk.trail.pop();
            walk.used[index] = false;
        }
    }

    /// Unused edges leaving `state` that the oracle lets fire, in
    /// declaration order. The oracle only sees unused edges.
    fn candidates(&self, state: &S, used: &[bool]) -> Vec<(usize, &'a Transition<S, T>)> {
        let graph: &'a Graph<S, T> = self.graph;
        graph
            .transitions_from(state)
            .filter(|&(index, _)| !used[index])
            .filter(|&(_, t)| !self.guard || self.oracle.allows(t, self.subject))
            .collect()
    }

    fn record(&self, walk: &mut Walk<'a, S, T>) {
        tracing::trace!(
            length = walk.trail.len(),
            end = ?walk.trail.last().map(|t| t.to.name()),
            "recorded path"
        );
        let steps = walk.trail.iter().map(|t| t.step()).collect();
        walk.found.push(Path::new(steps));
    }
}
