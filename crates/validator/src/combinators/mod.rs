//! Validator combinators
//!
//! Combinators build new validators out of existing ones. A combinator is a
//! [`Validator`](crate::foundation::Validator) itself, so combinators nest
//! without the outer one knowing what its children are made of.
//!
//! - [`And`] / [`and`]: short-circuiting conjunction over any number of
//!   validators, immediate or deferred.

pub mod and;
mod chain;

pub use and::{And, and};
