//! Immediate and deferred validation results.

use std::fmt;
use std::future::Future;

use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::Value;

use crate::foundation::{ValidatorFault, Verdict};

/// A deferred verdict. An `Err` output is a rejected result.
///
/// Deferred results must be `Send` so a conjunction can be handed to a
/// multi-threaded runtime. Futures holding `Rc` or other `!Send` state,
/// even on a current-thread runtime, are not accepted.
pub type Pending = BoxFuture<'static, Result<Verdict, ValidatorFault>>;

/// What a single validator invocation produces.
///
/// Most validators answer on the spot with [`Validation::Immediate`]. Those
/// that must wait on I/O hand back a [`Validation::Deferred`] future; the
/// caller decides when to drive it.
pub enum Validation {
    /// The verdict is already known.
    Immediate(Verdict),
    /// The verdict settles later.
    Deferred(Pending),
}

impl Validation {
    /// An immediate success.
    pub fn valid() -> Self {
        Self::Immediate(Verdict::Valid)
    }

    /// An immediate failure carrying `payload`.
    pub fn invalid(payload: impl Into<Value>) -> Self {
        Self::Immediate(Verdict::invalid(payload))
    }

    /// Wraps any awaitable whose output can settle into a verdict.
    ///
    /// ```rust
    /// use changeset_hofs::foundation::{Validation, Verdict};
    ///
    /// let validation = Validation::deferred(async { "taken" });
    /// assert!(validation.is_deferred());
    ///
    /// let verdict = futures::executor::block_on(validation.resolve());
    /// assert_eq!(verdict, Ok(Verdict::invalid("taken")));
    /// ```
    pub fn deferred<F>(future: F) -> Self
    where
        F: Future + Send + 'static,
        F::Output: Settle,
    {
        Self::Deferred(future.map(Settle::settle).boxed())
    }

    /// Returns `true` if the verdict has not settled yet.
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }

    /// Returns the verdict if it is already known.
    pub fn as_immediate(&self) -> Option<&Verdict> {
        match self {
            Self::Immediate(verdict) => Some(verdict),
            Self::Deferred(_) => None,
        }
    }

    /// Waits for the verdict, whichever variant this is.
    pub async fn resolve(self) -> Result<Verdict, ValidatorFault> {
        match self {
            Self::Immediate(verdict) => Ok(verdict),
            Self::Deferred(pending) => pending.await,
        }
    }
}

impl fmt::Debug for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Immediate(verdict) => f.debug_tuple("Immediate").field(verdict).finish(),
            Self::Deferred(_) => f.debug_tuple("Deferred").finish_non_exhaustive(),
        }
    }
}

impl From<Verdict> for Validation {
    fn from(verdict: Verdict) -> Self {
        Self::Immediate(verdict)
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

/// Output of an awaitable that can settle into a verdict.
///
/// `Err` settles as a rejection.
pub trait Settle {
    /// Converts the settled value.
    fn settle(self) -> Result<Verdict, ValidatorFault>;
}

/// Anything a plain function validator may return.
///
/// `Err` is a synchronous fault.
pub trait IntoValidation {
    /// Converts the return value.
    fn into_validation(self) -> Result<Validation, ValidatorFault>;
}

macro_rules! impl_verdict_like {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Settle for $ty {
                fn settle(self) -> Result<Verdict, ValidatorFault> {
                    Ok(Verdict::from(self))
                }
            }

            impl IntoValidation for $ty {
                fn into_validation(self) -> Result<Validation, ValidatorFault> {
                    Ok(Validation::Immediate(Verdict::from(self)))
                }
            }
        )*
    };
}

impl_verdict_like!(Verdict, bool, Value, String, &str);

impl<T: Settle> Settle for Result<T, ValidatorFault> {
    fn settle(self) -> Result<Verdict, ValidatorFault> {
        self.and_then(Settle::settle)
    }
}

impl IntoValidation for Validation {
    fn into_validation(self) -> Result<Validation, ValidatorFault> {
        Ok(self)
    }
}

impl<T: IntoValidation> IntoValidation for Result<T, ValidatorFault> {
    fn into_validation(self) -> Result<Validation, ValidatorFault> {
        self.and_then(IntoValidation::into_validation)
    }
}
