//! Guard predicates for controlling transitions.
//!
//! Guards are pure boolean functions over the subject whose paths are
//! being enumerated. They decide whether a transition may fire for that
//! subject without changing it.

use std::fmt;
use std::sync::Arc;

/// Pure predicate that determines if a transition may fire for a subject.
///
/// Guards are shared between clones of the transition that owns them, so
/// cloning a guard is cheap.
///
/// # Example
///
/// ```rust
/// use waypoints::core::Guard;
///
/// struct Car {
///     seatbelt_on: bool,
/// }
///
/// let buckled = Guard::new(|car: &Car| car.seatbelt_on);
///
/// assert!(buckled.check(&Car { seatbelt_on: true }));
/// assert!(!buckled.check(&Car { seatbelt_on: false }));
/// ```
pub struct Guard<T> {
    predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic, side-effect free and
    /// thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Check if the guard allows firing for this subject.
    pub fn check(&self, subject: &T) -> bool {
        (self.predicate)(subject)
    }
}

impl<T> Clone for Guard<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T> fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}
