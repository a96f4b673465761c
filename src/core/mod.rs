//! Core value types shared by the graph model and the path enumerator.
//!
//! This module contains:
//! - State definitions via the `State` trait
//! - Guard predicates evaluated against a subject
//!
//! All logic in this module is pure (no side effects).

mod guard;
mod state;

pub use guard::Guard;
pub use state::State;
