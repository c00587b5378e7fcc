//! Core traits for the validation system
//!
//! This module defines the [`Validator`] trait every validator implements,
//! the adapters that turn closures into validators, and the fluent
//! [`ValidateExt`] extension.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use crate::combinators::And;
use crate::foundation::{ChangeArgs, IntoValidation, Settle, Validation, ValidatorFault};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// A validator looks at one field change and answers with a
/// [`Validation`]: either an immediate verdict or a deferred one. `Err` is
/// reserved for genuine faults; a failed validation is
/// `Ok(Validation::Immediate(Verdict::Invalid(..)))`.
///
/// Plain closures of shape `Fn(&ChangeArgs) -> R` are validators whenever
/// `R` implements [`IntoValidation`] (`bool`, `&str`, `String`,
/// `serde_json::Value`, `Verdict`, `Validation`, or a `Result` of those).
///
/// # Examples
///
/// ```rust
/// use changeset_hofs::foundation::{ChangeArgs, Validation, Validator, ValidatorFault};
///
/// struct NotBlank;
///
/// impl Validator for NotBlank {
///     fn validate(&self, args: &ChangeArgs) -> Result<Validation, ValidatorFault> {
///         match args.new_value.as_str() {
///             Some(s) if !s.trim().is_empty() => Ok(Validation::valid()),
///             _ => Ok(Validation::invalid(format!("{} can't be blank", args.key))),
///         }
///     }
/// }
///
/// let result = NotBlank.validate(&ChangeArgs::new("name").with_new_value(" ")).unwrap();
/// assert!(!result.as_immediate().unwrap().is_valid());
/// ```
pub trait Validator: Send + Sync {
    /// Validates one field change.
    fn validate(&self, args: &ChangeArgs) -> Result<Validation, ValidatorFault>;
}

impl<F, R> Validator for F
where
    F: Fn(&ChangeArgs) -> R + Send + Sync,
    R: IntoValidation,
{
    fn validate(&self, args: &ChangeArgs) -> Result<Validation, ValidatorFault> {
        self(args).into_validation()
    }
}

impl Validator for Arc<dyn Validator> {
    fn validate(&self, args: &ChangeArgs) -> Result<Validation, ValidatorFault> {
        (**self).validate(args)
    }
}

/// Pins a closure to the validator signature.
///
/// Closures handed straight to a generic `V: Validator` parameter need an
/// explicit `&ChangeArgs` annotation; routing them through `from_fn` lets
/// the compiler infer it.
///
/// ```rust
/// use changeset_hofs::foundation::{from_fn, ChangeArgs, Validator};
///
/// let present = from_fn(|args| !args.new_value.is_null());
/// assert!(present.validate(&ChangeArgs::new("k").with_new_value(1)).is_ok());
/// ```
pub fn from_fn<F, R>(f: F) -> F
where
    F: Fn(&ChangeArgs) -> R + Send + Sync,
    R: IntoValidation,
{
    f
}

/// Wraps a closure returning a future into a validator whose result is
/// always deferred.
///
/// ```rust
/// use changeset_hofs::foundation::{from_async, ChangeArgs, Validator, Verdict};
///
/// let unique = from_async(|args| {
///     let taken = args.new_value == "admin";
///     async move { if taken { Verdict::invalid("taken") } else { Verdict::Valid } }
/// });
///
/// let validation = unique.validate(&ChangeArgs::new("login").with_new_value("admin")).unwrap();
/// assert!(validation.is_deferred());
/// ```
pub fn from_async<F, Fut>(f: F) -> AsyncFn<F>
where
    F: Fn(&ChangeArgs) -> Fut + Send + Sync,
    Fut: Future + Send + 'static,
    Fut::Output: Settle,
{
    AsyncFn { f }
}

/// Validator built by [`from_async`].
#[derive(Clone, Copy)]
pub struct AsyncFn<F> {
    f: F,
}

impl<F> fmt::Debug for AsyncFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncFn").finish_non_exhaustive()
    }
}

impl<F, Fut> Validator for AsyncFn<F>
where
    F: Fn(&ChangeArgs) -> Fut + Send + Sync,
    Fut: Future + Send + 'static,
    Fut::Output: Settle,
{
    fn validate(&self, args: &ChangeArgs) -> Result<Validation, ValidatorFault> {
        Ok(Validation::deferred((self.f)(args)))
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every [`Validator`].
///
/// # Examples
///
/// ```rust
/// use changeset_hofs::prelude::*;
///
/// let validator = from_fn(|_| true).and(from_fn(|_| "second failed"));
/// let result = validator.validate(&ChangeArgs::default()).unwrap();
/// assert_eq!(result.as_immediate(), Some(&Verdict::invalid("second failed")));
/// ```
pub trait ValidateExt: Validator + Sized + 'static {
    /// Combines two validators with short-circuiting AND.
    ///
    /// `other` only runs once `self` has settled to valid.
    fn and<V>(self, other: V) -> And
    where
        V: Validator + 'static,
    {
        And::new([self.shared(), other.shared()])
    }

    /// Erases the validator's type so it can sit in a conjunction.
    fn shared(self) -> Arc<dyn Validator> {
        Arc::new(self)
    }
}

impl<T: Validator + 'static> ValidateExt for T {}
