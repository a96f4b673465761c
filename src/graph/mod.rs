//! Read model of a transition graph.
//!
//! A graph is an immutable snapshot: the states it defines, its events in
//! declaration order, and the transitions each event owns. Path
//! enumeration only ever reads from it.

mod event;
mod model;
mod transition;

pub use event::Event;
pub use model::{Graph, StateReader};
pub use transition::{Step, Transition};
