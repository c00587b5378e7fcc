//! Faults raised by validators.

use serde_json::Value;

/// A genuine fault raised while running a validator, as opposed to a
/// failed validation.
///
/// A validator that cannot reach a verdict returns `Err(ValidatorFault)`
/// (or a deferred result that settles to one). Outside the deferred chain
/// of a conjunction the fault propagates to the caller as-is; inside it
/// the payload becomes the chain's failure verdict.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("validator fault: {payload}")]
pub struct ValidatorFault {
    payload: Value,
}

impl ValidatorFault {
    /// Creates a fault carrying `payload`.
    pub fn new(payload: impl Into<Value>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    /// Returns the fault payload.
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Consumes the fault, returning its payload.
    pub fn into_payload(self) -> Value {
        self.payload
    }
}

impl From<serde_json::Error> for ValidatorFault {
    fn from(error: serde_json::Error) -> Self {
        Self::new(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_includes_payload() {
        let fault = ValidatorFault::new("lookup failed");
        assert_eq!(fault.to_string(), r#"validator fault: "lookup failed""#);
    }

    #[test]
    fn test_from_serde_error() {
        let error = serde_json::from_value::<u8>(json!("x")).unwrap_err();
        let fault = ValidatorFault::from(error);
        assert!(fault.payload().is_string());
    }
}
