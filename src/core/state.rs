//! Core State trait for transition graph nodes.
//!
//! A state is nothing more than a named, comparable value. The path
//! enumerator never looks inside a state beyond equality, hashing and
//! its name.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for the nodes of a transition graph.
///
/// All methods are pure. States are immutable values, unique within a
/// graph, and identified by equality.
///
/// # Required Traits
///
/// - `Clone`: states are copied into reported paths
/// - `Eq` + `Hash`: states take part in edge identity
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: paths are serializable
///
/// # Example
///
/// ```rust
/// use waypoints::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Gear {
///     Parked,
///     Idling,
///     FirstGear,
/// }
///
/// impl State for Gear {
///     fn name(&self) -> &str {
///         match self {
///             Self::Parked => "parked",
///             Self::Idling => "idling",
///             Self::FirstGear => "first_gear",
///         }
///     }
/// }
///
/// assert_eq!(Gear::Idling.name(), "idling");
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display, logging and name lookup.
    fn name(&self) -> &str;
}

/// Plain strings are states named by themselves.
impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Parked,
        Idling,
        FirstGear,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Parked => "parked",
                Self::Idling => "idling",
                Self::FirstGear => "first_gear",
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Parked.name(), "parked");
        assert_eq!(TestState::Idling.name(), "idling");
        assert_eq!(TestState::FirstGear.name(), "first_gear");
    }

    #[test]
    fn string_state_is_named_by_its_contents() {
        let state = "idling".to_string();
        assert_eq!(state.name(), "idling");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::FirstGear;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_is_hashable() {
        let mut seen = std::collections::HashSet::new();
        assert!(seen.insert(TestState::Parked));
        assert!(!seen.insert(TestState::Parked));
        assert!(seen.insert(TestState::Idling));
    }
}
