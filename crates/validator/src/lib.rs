//! # changeset-hofs
//!
//! Higher-order validators for changeset validation pipelines.
//!
//! A changeset pipeline calls one validator per field change with the
//! field's key, new and old values, the pending change set and the object
//! being validated. It treats exactly `true` as a pass and any other value
//! as a failure payload. This crate composes such validators: [`compose!`]
//! (or [`combinators::and`]) runs them in order and stops at the first
//! failure, whether the children answer immediately or through a future.
//!
//! ## Quick Start
//!
//! ```rust
//! use changeset_hofs::prelude::*;
//!
//! let present = from_fn(|args| {
//!     if args.new_value.is_null() { Verdict::invalid("is required") } else { Verdict::Valid }
//! });
//! let available = from_async(|args| {
//!     let taken = args.new_value == "admin";
//!     async move { if taken { Verdict::invalid("is taken") } else { Verdict::Valid } }
//! });
//!
//! let username = compose![present, available];
//!
//! let args = ChangeArgs::new("username").with_new_value("admin");
//! let validation = username.validate(&args).unwrap();
//! let verdict = futures::executor::block_on(validation.resolve()).unwrap();
//! assert_eq!(verdict, Verdict::invalid("is taken"));
//! ```
//!
//! ## Immediate until proven otherwise
//!
//! A conjunction evaluates synchronously and returns an immediate
//! [`Validation`](foundation::Validation) as long as every child does.
//! The first deferred child turns the rest of the sequence into a single
//! sequential future; see [`combinators::And`] for the exact rules.

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
