//! Path enumeration: every route a subject could legally take.
//!
//! A traversal request names a start state (defaulting to the subject's
//! current one), an optional target, and two flags:
//!
//! - `deep`: let a path pass through the target and keep going
//! - `guard`: consult guard predicates when picking edges
//!
//! The walk is depth-first and never reuses an edge within a path, so it
//! terminates on cyclic graphs while still letting a path re-enter a
//! state through a different edge. Nothing here fires transitions or
//! mutates the subject.

mod collection;
mod enumerator;
mod error;
mod options;
mod oracle;
mod path;

pub use collection::PathCollection;
pub use enumerator::PathEnumerator;
pub use error::{PathError, VALID_OPTIONS};
pub use options::{OptionValue, PathOptions};
pub use oracle::{DeclaredGuards, GuardOracle};
pub use path::Path;
