//! AND combinator - short-circuiting conjunction of validators
//!
//! This module provides the [`And`] combinator which runs a sequence of
//! validators left to right and stops at the first one that does not pass.
//!
//! Children may answer immediately or hand back a deferred result. The walk
//! stays synchronous until the first deferred result shows up; from there
//! on every remaining child is folded into one sequential future, even the
//! ones that would have answered immediately.
//!
//! # Examples
//!
//! ```rust
//! use changeset_hofs::prelude::*;
//!
//! let validator = compose![
//!     from_fn(|args| {
//!         if args.new_value.is_string() { Verdict::Valid } else { Verdict::invalid("must be a string") }
//!     }),
//!     from_fn(|args| {
//!         if args.new_value == "root" { Verdict::invalid("reserved") } else { Verdict::Valid }
//!     }),
//! ];
//!
//! let args = ChangeArgs::new("login").with_new_value("root");
//! let result = validator.validate(&args).unwrap();
//! assert_eq!(result.as_immediate(), Some(&Verdict::invalid("reserved")));
//! ```

use std::fmt;
use std::sync::Arc;

use futures::FutureExt;

use crate::combinators::chain::Chain;
use crate::foundation::{
    ChangeArgs, Validation, ValidationResult, Validator, ValidatorFault, Verdict,
};

/// Combines any number of validators with logical AND.
///
/// Validators run strictly in order with the same [`ChangeArgs`]. The first
/// verdict that is not valid becomes the result and nothing after it runs.
/// An empty conjunction is valid.
///
/// The result is immediate unless some child returned a deferred result
/// before any child failed; in that case it is a deferred result that
/// always settles to `Ok`. Faults from children in that deferred tail
/// become its failure payload. Faults raised before the first deferred
/// result are returned as `Err`.
///
/// The deferred result is a lazy future: the remaining children only run
/// while the caller polls it, and dropping it stops the chain. Callers
/// must drive it to completion (for example with
/// [`Validation::resolve`]) to get a verdict.
///
/// `And` is itself a [`Validator`], so conjunctions nest freely.
#[derive(Clone)]
pub struct And {
    validators: Arc<[Arc<dyn Validator>]>,
}

impl And {
    /// Creates a new `And` combinator over `validators`, in order.
    pub fn new<I>(validators: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Validator>>,
    {
        Self {
            validators: validators.into_iter().collect(),
        }
    }

    /// Number of child validators.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns `true` if there are no child validators.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Returns a conjunction with `other` appended after the current children.
    ///
    /// ```rust
    /// use changeset_hofs::prelude::*;
    ///
    /// let validator = compose![from_fn(|_| true)].and(from_fn(|_| true));
    /// assert_eq!(validator.len(), 2);
    /// ```
    pub fn and<V>(self, other: V) -> Self
    where
        V: Validator + 'static,
    {
        let mut validators = self.validators.to_vec();
        validators.push(Arc::new(other));
        Self::new(validators)
    }
}

impl fmt::Debug for And {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("And")
            .field("validators", &self.validators.len())
            .finish()
    }
}

impl Validator for And {
    fn validate(&self, args: &ChangeArgs) -> ValidationResult {
        for (index, validator) in self.validators.iter().enumerate() {
            match validator.validate(args)? {
                Validation::Immediate(Verdict::Valid) => {}
                Validation::Immediate(failed) => {
                    tracing::trace!(target: "changeset_hofs::and", index, "short-circuit");
                    return Ok(Validation::Immediate(failed));
                }
                Validation::Deferred(head) => {
                    tracing::trace!(
                        target: "changeset_hofs::and",
                        index,
                        "switching to deferred chain"
                    );
                    let chain = Chain::new(
                        head,
                        Arc::clone(&self.validators),
                        index + 1,
                        args.clone(),
                    );
                    let pending = chain.run().map(Ok::<_, ValidatorFault>).boxed();
                    return Ok(Validation::Deferred(pending));
                }
            }
        }

        Ok(Validation::valid())
    }
}

/// Creates an [`And`] combinator from a sequence of validators.
///
/// # Examples
///
/// ```rust
/// use changeset_hofs::prelude::*;
///
/// let validator = and([from_fn(|_| true).shared(), from_fn(|_| false).shared()]);
/// let result = validator.validate(&ChangeArgs::default()).unwrap();
/// assert_eq!(result.as_immediate(), Some(&Verdict::invalid(false)));
/// ```
pub fn and<I>(validators: I) -> And
where
    I: IntoIterator<Item = Arc<dyn Validator>>,
{
    And::new(validators)
}
