//! The argument record every validator receives.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One field change as seen by a validator.
///
/// The host pipeline calls each validator with the changed field's key,
/// the proposed and previous values, the full pending change set and the
/// object being validated. Combinators forward the same record, untouched,
/// to every child validator.
///
/// # Examples
///
/// ```rust
/// use changeset_hofs::foundation::ChangeArgs;
/// use serde_json::json;
///
/// let args = ChangeArgs::new("email")
///     .with_new_value(json!("alice@example.com"))
///     .with_old_value(json!(null));
///
/// assert_eq!(args.key, "email");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChangeArgs {
    /// Identifier of the field being changed.
    pub key: String,
    /// Proposed value.
    pub new_value: Value,
    /// Value before the change.
    pub old_value: Value,
    /// Every pending change on the object, keyed by field.
    pub changes: Value,
    /// The object being validated.
    pub object: Value,
}

impl ChangeArgs {
    /// Creates a record for `key` with every value set to `null`.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Sets the proposed value.
    pub fn with_new_value(mut self, value: impl Into<Value>) -> Self {
        self.new_value = value.into();
        self
    }

    /// Sets the previous value.
    pub fn with_old_value(mut self, value: impl Into<Value>) -> Self {
        self.old_value = value.into();
        self
    }

    /// Sets the pending change set.
    pub fn with_changes(mut self, changes: impl Into<Value>) -> Self {
        self.changes = changes.into();
        self
    }

    /// Sets the object under validation.
    pub fn with_object(mut self, object: impl Into<Value>) -> Self {
        self.object = object.into();
        self
    }

    /// Renders the record in positional form:
    /// `[key, newValue, oldValue, changes, object]`.
    #[must_use]
    pub fn to_payload(&self) -> Value {
        Value::Array(vec![
            Value::String(self.key.clone()),
            self.new_value.clone(),
            self.old_value.clone(),
            self.changes.clone(),
            self.object.clone(),
        ])
    }
}
