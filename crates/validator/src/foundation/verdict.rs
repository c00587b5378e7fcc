//! Settled outcome of a validator.

use std::ops::ControlFlow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The settled outcome of one validator.
///
/// The host pipeline speaks in raw values: exactly `true` means the change
/// passed, and anything else is a failure payload handed back unchanged.
/// `Verdict` keeps that contract on the wire (see the serde attributes)
/// while giving the rest of the crate an explicit tag to match on.
///
/// Only `true` converts to [`Verdict::Valid`]. Truthy values such as `1`
/// or `"ok"` are failures.
///
/// # Examples
///
/// ```rust
/// use changeset_hofs::foundation::Verdict;
/// use serde_json::json;
///
/// assert_eq!(Verdict::from(true), Verdict::Valid);
/// assert_eq!(Verdict::from(json!(1)), Verdict::invalid(1));
/// assert_eq!(Verdict::from("too short"), Verdict::invalid("too short"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum Verdict {
    /// The change passed.
    Valid,
    /// The change failed; the payload describes why.
    Invalid(Value),
}

impl Verdict {
    /// Creates a failure carrying `payload`.
    pub fn invalid(payload: impl Into<Value>) -> Self {
        Self::Invalid(payload.into())
    }

    /// Returns `true` for [`Verdict::Valid`].
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns the failure payload, if any.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            Self::Valid => None,
            Self::Invalid(payload) => Some(payload),
        }
    }

    /// Evaluation policy shared by every conjunction: keep going on a
    /// valid verdict, stop with the payload otherwise.
    pub fn into_flow(self) -> ControlFlow<Value> {
        match self {
            Self::Valid => ControlFlow::Continue(()),
            Self::Invalid(payload) => ControlFlow::Break(payload),
        }
    }
}

impl From<Value> for Verdict {
    fn from(value: Value) -> Self {
        match value {
            Value::Bool(true) => Self::Valid,
            other => Self::Invalid(other),
        }
    }
}

impl From<bool> for Verdict {
    fn from(value: bool) -> Self {
        if value {
            Self::Valid
        } else {
            Self::Invalid(Value::Bool(false))
        }
    }
}

impl From<String> for Verdict {
    fn from(value: String) -> Self {
        Self::Invalid(Value::String(value))
    }
}

impl From<&str> for Verdict {
    fn from(value: &str) -> Self {
        Self::Invalid(Value::String(value.to_owned()))
    }
}

impl From<Verdict> for Value {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Valid => Self::Bool(true),
            Verdict::Invalid(payload) => payload,
        }
    }
}
