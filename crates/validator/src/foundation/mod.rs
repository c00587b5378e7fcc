//! Core validation types and traits
//!
//! This module contains the building blocks every combinator works with:
//!
//! - **Input**: [`ChangeArgs`], the field change handed to each validator
//! - **Outcomes**: [`Verdict`] (settled) and [`Validation`] (immediate or deferred)
//! - **Faults**: [`ValidatorFault`]
//! - **Traits**: [`Validator`], [`ValidateExt`], [`Settle`], [`IntoValidation`]
//!
//! # Success is exactly `true`
//!
//! The host pipeline treats the literal `true` as a pass and every other
//! value as a failure payload. [`Verdict`] encodes that rule once, in its
//! conversions, so the rest of the crate matches on a tag instead of
//! comparing values.
//!
//! ```rust
//! use changeset_hofs::foundation::Verdict;
//!
//! assert!(Verdict::from(true).is_valid());
//! assert!(!Verdict::from("ok").is_valid());
//! ```
//!
//! # Immediate and deferred results
//!
//! A validator may answer right away or return a future. Callers that do
//! not care which can always `resolve()` a [`Validation`]:
//!
//! ```rust
//! use changeset_hofs::prelude::*;
//!
//! let v = from_async(|_| async { true });
//! let validation = v.validate(&ChangeArgs::default()).unwrap();
//! assert_eq!(futures::executor::block_on(validation.resolve()), Ok(Verdict::Valid));
//! ```

// Module declarations
pub mod args;
pub mod error;
pub mod traits;
pub mod validation;
pub mod verdict;

// Re-export everything at the foundation level for convenience
pub use args::ChangeArgs;
pub use error::ValidatorFault;
pub use traits::{AsyncFn, ValidateExt, Validator, from_async, from_fn};
pub use validation::{IntoValidation, Pending, Settle, Validation};
pub use verdict::Verdict;

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// The result of invoking a validator: a validation, or a synchronous fault.
pub type ValidationResult = Result<Validation, ValidatorFault>;
