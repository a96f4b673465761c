//! Build errors for graph and event builders.

use thiserror::Error;

/// Errors that can occur when building transition graphs.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("State reader not specified. Call .state_of(reader) before .build()")]
    MissingStateReader,

    #[error("Event name is empty. Every event needs a name")]
    EmptyEventName,
}
