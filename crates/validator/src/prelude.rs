//! Prelude module for convenient imports.
//!
//! Provides a single `use changeset_hofs::prelude::*;` import that brings
//! in the traits, types and combinators needed to write and compose
//! validators.
//!
//! # Examples
//!
//! ```rust
//! use changeset_hofs::prelude::*;
//!
//! let validator = compose![from_fn(|_| true), from_async(|_| async { true })];
//! let validation = validator.validate(&ChangeArgs::default()).unwrap();
//! assert!(validation.is_deferred());
//! ```

// ============================================================================
// FOUNDATION: Core traits, outcomes, faults
// ============================================================================

pub use crate::foundation::{
    AsyncFn, ChangeArgs, IntoValidation, Pending, Settle, ValidateExt, Validation,
    ValidationResult, Validator, ValidatorFault, Verdict, from_async, from_fn,
};

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{And, and};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::compose;
