//! Options controlling a traversal request.

use crate::core::State;
use crate::graph::Graph;
use crate::paths::error::{PathError, VALID_OPTIONS};
use serde_json::Value;

/// The four recognized traversal options.
///
/// | option  | default                   |
/// |---------|---------------------------|
/// | `from`  | the subject's current state |
/// | `to`    | none                      |
/// | `deep`  | `false`                   |
/// | `guard` | `true`                    |
///
/// # Example
///
/// ```
/// use waypoints::paths::PathOptions;
///
/// let options = PathOptions::new()
///     .from("parked".to_string())
///     .to("idling".to_string())
///     .deep(true);
///
/// assert!(options.is_deep());
/// assert!(options.checks_guards());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PathOptions<S: State> {
    from: Option<S>,
    to: Option<S>,
    deep: bool,
    guard: bool,
}

/// A loosely-typed option value, for key/value construction.
#[derive(Clone, Debug, PartialEq)]
pub enum OptionValue<S> {
    State(S),
    Flag(bool),
}

impl<S: State> PathOptions<S> {
    pub fn new() -> Self {
        Self {
            from: None,
            to: None,
            deep: false,
            guard: true,
        }
    }

    /// Start state (defaults to the subject's current state).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Target state that terminates (or, in deep mode, marks) a path.
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Allow a path to pass through the target more than once.
    pub fn deep(mut self, deep: bool) -> Self {
        self.deep = deep;
        self
    }

    /// Consult guard predicates when selecting edges.
    pub fn guard(mut self, guard: bool) -> Self {
        self.guard = guard;
        self
    }

    pub fn from_state(&self) -> Option<&S> {
        self.from.as_ref()
    }

    pub fn to_state(&self) -> Option<&S> {
        self.to.as_ref()
    }

    pub fn is_deep(&self) -> bool {
        self.deep
    }

    pub fn checks_guards(&self) -> bool {
        self.guard
    }

    /// Build options from key/value pairs.
    ///
    /// Every key is checked before any value, so an unrecognized key is
    /// always the error reported when one is present.
    pub fn from_pairs<I, K>(pairs: I) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = (K, OptionValue<S>)>,
        K: AsRef<str>,
    {
        let pairs: Vec<(K, OptionValue<S>)> = pairs.into_iter().collect();
        assert_valid_keys(pairs.iter().map(|(key, _)| key.as_ref()))?;

        pairs
            .into_iter()
            .try_fold(Self::new(), |options, (key, value)| {
                match (key.as_ref(), value) {
                    ("from", OptionValue::State(state)) => Ok(options.from(state)),
                    ("to", OptionValue::State(state)) => Ok(options.to(state)),
                    ("deep", OptionValue::Flag(flag)) => Ok(options.deep(flag)),
                    ("guard", OptionValue::Flag(flag)) => Ok(options.guard(flag)),
                    (key, _) => Err(PathError::InvalidOptionValue {
                        key: key.to_string(),
                        expected: expected_kind(key),
                    }),
                }
            })
    }

    /// Build options from a JSON object such as
    /// `{"from": "parked", "to": "idling", "deep": true}`.
    ///
    /// State names are resolved against `graph`; `null` leaves an option
    /// at its default.
    pub fn from_json<T>(graph: &Graph<S, T>, value: &Value) -> Result<Self, PathError> {
        let object = value
            .as_object()
            .ok_or_else(|| PathError::MalformedOptions(format!("expected an object, got {value}")))?;
        assert_valid_keys(object.keys().map(String::as_str))?;

        let mut pairs = Vec::with_capacity(object.len());
        for (key, value) in object {
            if value.is_null() {
                continue;
            }
            let invalid = || PathError::InvalidOptionValue {
                key: key.clone(),
                expected: expected_kind(key),
            };
            let option = match key.as_str() {
                "from" | "to" => {
                    let name = value.as_str().ok_or_else(invalid)?;
                    let state = graph
                        .state_named(name)
                        .ok_or_else(|| PathError::UnknownState {
                            name: name.to_string(),
                        })?;
                    OptionValue::State(state.clone())
                }
                _ => OptionValue::Flag(value.as_bool().ok_or_else(invalid)?),
            };
            pairs.push((key.as_str(), option));
        }

        Self::from_pairs(pairs)
    }
}

impl<S: State> Default for PathOptions<S> {
    fn default() -> Self {
        Self::new()
    }
}

fn assert_valid_keys<'a>(mut keys: impl Iterator<Item = &'a str>) -> Result<(), PathError> {
    match keys.find(|key| !VALID_OPTIONS.contains(key)) {
        Some(key) => Err(PathError::UnknownOption {
            key: key.to_string(),
        }),
        None => Ok(()),
    }
}

fn expected_kind(key: &str) -> &'static str {
    match key {
        "from" | "to" => "a state",
        _ => "a boolean",
    }
}
