//! Errors raised while preparing a path enumeration.

use thiserror::Error;

/// Option keys accepted by a traversal request, in canonical order.
pub const VALID_OPTIONS: [&str; 4] = ["from", "to", "deep", "guard"];

/// Errors that can occur when constructing a path collection, or when
/// rebuilding a [`Path`](crate::paths::Path) from a plain step list.
///
/// Option and state errors are raised before any traversal happens.
/// Finding no paths is not an error.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PathError {
    #[error("Unknown key: {key}. Valid keys are: {valid}", valid = VALID_OPTIONS.join(", "))]
    UnknownOption { key: String },

    #[error("Invalid value for option '{key}': expected {expected}")]
    InvalidOptionValue { key: String, expected: &'static str },

    #[error("{name} is an invalid state name")]
    UnknownState { name: String },

    #[error("Malformed options: {0}")]
    MalformedOptions(String),

    #[error("A path needs at least one step")]
    EmptyPath,

    #[error("Step {index} does not start where the previous step ends")]
    DisconnectedPath { index: usize },

    #[error("Step {index} repeats an earlier step")]
    RepeatedStep { index: usize },
}
