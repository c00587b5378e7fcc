//! Macros for composing validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`compose!`]: AND-chain any number of validators

// ============================================================================
// COMPOSE MACRO
// ============================================================================

/// Composes validators of any types into a single [`And`](crate::combinators::And).
///
/// Each argument must implement [`Validator`](crate::foundation::Validator);
/// they run in the order written. `compose![]` is always valid.
///
/// ```rust
/// use changeset_hofs::prelude::*;
///
/// let inner = compose![from_fn(|_| true), from_fn(|_| "inner failed")];
/// let outer = compose![inner, from_fn(|_| "never reached")];
///
/// let result = outer.validate(&ChangeArgs::default()).unwrap();
/// assert_eq!(result.as_immediate(), Some(&Verdict::invalid("inner failed")));
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        $crate::combinators::And::new(::std::vec::Vec::<
            ::std::sync::Arc<dyn $crate::foundation::Validator>,
        >::new())
    };
    ($($validator:expr),+ $(,)?) => {
        $crate::combinators::And::new([
            $($crate::foundation::ValidateExt::shared($validator)),+
        ])
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::foundation::{ChangeArgs, Validator, Verdict, from_fn};

    #[test]
    fn test_compose_empty() {
        let validator = compose![];
        assert!(validator.is_empty());
        let result = validator.validate(&ChangeArgs::new("any")).unwrap();
        assert_eq!(result.as_immediate(), Some(&Verdict::Valid));
    }

    #[test]
    fn test_compose_mixed_types() {
        let validator = compose![
            from_fn(|_| true),
            |_: &ChangeArgs| Verdict::Valid,
            compose![from_fn(|args| args.key == "name")],
        ];
        assert_eq!(validator.len(), 3);

        let ok = validator.validate(&ChangeArgs::new("name")).unwrap();
        assert_eq!(ok.as_immediate(), Some(&Verdict::Valid));

        let failed = validator.validate(&ChangeArgs::new("age")).unwrap();
        assert_eq!(failed.as_immediate(), Some(&Verdict::invalid(false)));
    }

    #[test]
    fn test_compose_trailing_comma() {
        let validator = compose![from_fn(|_| "only"),];
        let result = validator.validate(&ChangeArgs::default()).unwrap();
        assert_eq!(result.as_immediate(), Some(&Verdict::invalid("only")));
    }
}
