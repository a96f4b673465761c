//! Waypoints: path enumeration over guarded transition graphs
//!
//! Given a graph of named states connected by named, guarded transitions,
//! waypoints answers: "starting from this state, optionally ending at that
//! one, what are all the distinct sequences of transitions a subject could
//! legally undergo?"
//!
//! Following the "pure core" philosophy, enumeration never fires a
//! transition or touches the subject beyond asking guards for a yes/no.
//!
//! # Core Concepts
//!
//! - **State**: Type-safe state representation via the `State` trait
//! - **Guards**: Pure predicates over the subject that control transitions
//! - **Graph**: Immutable snapshot of states, events and transitions
//! - **Paths**: Depth-first enumeration with derived summaries
//!
//! # Example
//!
//! ```rust
//! use waypoints::builder::{EventBuilder, GraphBuilder};
//! use waypoints::graph::Step;
//! use waypoints::paths::PathOptions;
//! use waypoints::state_enum;
//!
//! state_enum! {
//!     enum Gear {
//!         Parked => "parked",
//!         Idling => "idling",
//!         FirstGear => "first_gear",
//!     }
//! }
//!
//! struct Car {
//!     gear: Gear,
//! }
//!
//! let graph = GraphBuilder::new()
//!     .state_of(|car: &Car| car.gear.clone())
//!     .states([Gear::Parked, Gear::Idling, Gear::FirstGear])
//!     .event(EventBuilder::new("ignite").transition(Gear::Parked, Gear::Idling))
//!     .event(
//!         EventBuilder::new("shift_up")
//!             .transition(Gear::Parked, Gear::Idling)
//!             .transition(Gear::Idling, Gear::FirstGear),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let car = Car { gear: Gear::Parked };
//! let paths = graph
//!     .paths_for(&car, PathOptions::new().to(Gear::Idling))
//!     .unwrap();
//!
//! assert_eq!(
//!     paths,
//!     vec![
//!         vec![Step::new("ignite", Gear::Parked, Gear::Idling)],
//!         vec![Step::new("shift_up", Gear::Parked, Gear::Idling)],
//!     ]
//! );
//! ```

pub mod builder;
pub mod core;
pub mod graph;
pub mod paths;

// Re-export commonly used types
pub use builder::{BuildError, EventBuilder, GraphBuilder};
pub use crate::core::{Guard, State};
pub use graph::{Graph, Step, Transition};
pub use paths::{Path, PathCollection, PathError, PathOptions};
