//! Integration tests for the prelude module.
//!
//! Verifies that `use changeset_hofs::prelude::*` brings in everything a
//! consumer needs to write and compose validators.

use changeset_hofs::prelude::*;
use serde_json::json;

// ============================================================================
// PRELUDE IMPORT SMOKE TEST
// ============================================================================

#[test]
fn prelude_import_provides_validator_trait() {
    let v = from_fn(|_| true).and(from_fn(|_| "nope"));
    let result = v.validate(&ChangeArgs::default()).unwrap();
    assert_eq!(result.as_immediate(), Some(&Verdict::invalid("nope")));
}

#[test]
fn prelude_provides_compose_macro() {
    let v = compose![from_fn(|_| true), from_fn(|_| true)];
    let result = v.validate(&ChangeArgs::default()).unwrap();
    assert_eq!(result.as_immediate(), Some(&Verdict::Valid));
}

// ============================================================================
// HAND-WRITTEN VALIDATOR VIA PRELUDE
// ============================================================================

struct MaxLength(usize);

impl Validator for MaxLength {
    fn validate(&self, args: &ChangeArgs) -> ValidationResult {
        let len = args.new_value.as_str().map_or(0, str::len);
        if len <= self.0 {
            Ok(Validation::valid())
        } else {
            Ok(Validation::invalid(json!({
                "key": args.key,
                "message": format!("must be at most {} characters", self.0),
            })))
        }
    }
}

#[test]
fn custom_validator_composes_with_closures() {
    let v = compose![MaxLength(5), from_fn(|args| args.new_value != "admin")];

    let ok = v
        .validate(&ChangeArgs::new("login").with_new_value("alice"))
        .unwrap();
    assert_eq!(ok.as_immediate(), Some(&Verdict::Valid));

    let too_long = v
        .validate(&ChangeArgs::new("login").with_new_value("alice-in-wonderland"))
        .unwrap();
    assert_eq!(
        too_long.as_immediate(),
        Some(&Verdict::invalid(json!({
            "key": "login",
            "message": "must be at most 5 characters",
        })))
    );

    let reserved = v
        .validate(&ChangeArgs::new("login").with_new_value("admin"))
        .unwrap();
    assert_eq!(reserved.as_immediate(), Some(&Verdict::invalid(false)));
}

#[test]
fn verdict_serializes_for_the_host() {
    let v = compose![from_fn(|_| true)];
    let verdict = v
        .validate(&ChangeArgs::default())
        .unwrap()
        .as_immediate()
        .cloned()
        .unwrap();
    assert_eq!(serde_json::to_value(verdict).unwrap(), json!(true));
}
