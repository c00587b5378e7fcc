//! Validating a signup form change with immediate and deferred checks.
//!
//! The combinator's trace events are printed through the `fmt` subscriber
//! installed in `main`.

use std::time::Duration;

use changeset_hofs::prelude::*;
use serde_json::json;

fn required() -> impl Validator {
    from_fn(|args| {
        if args.new_value.is_null() {
            Verdict::invalid(format!("{} is required", args.key))
        } else {
            Verdict::Valid
        }
    })
}

fn max_length(max: usize) -> impl Validator {
    from_fn(move |args| {
        let len = args.new_value.as_str().map_or(0, str::len);
        if len <= max {
            Verdict::Valid
        } else {
            Verdict::invalid(json!({ "key": args.key, "max": max, "actual": len }))
        }
    })
}

/// Pretends to ask a remote service whether the username is free.
fn available() -> impl Validator {
    from_async(|args| {
        let wanted = args.new_value.as_str().unwrap_or_default().to_owned();
        async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            if wanted == "admin" {
                Verdict::invalid("username is taken")
            } else {
                Verdict::Valid
            }
        }
    })
}

#[tokio::main]
async fn main() -> Result<(), ValidatorFault> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let username = compose![required(), max_length(12), available()];

    let candidates = [
        json!(null),
        json!("a-very-long-username"),
        json!("admin"),
        json!("alice"),
    ];

    for candidate in candidates {
        let args = ChangeArgs::new("username")
            .with_new_value(candidate.clone())
            .with_changes(json!({ "username": candidate }));

        let validation = username.validate(&args)?;
        let mode = if validation.is_deferred() {
            "deferred"
        } else {
            "immediate"
        };

        match validation.resolve().await? {
            Verdict::Valid => println!("✓ {candidate} is valid ({mode})"),
            Verdict::Invalid(payload) => println!("✗ {candidate}: {payload} ({mode})"),
        }
    }

    Ok(())
}
