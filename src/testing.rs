//! Testing utilities for validators
//!
//! Assertion macros over [`ValidationOutcome`](crate::ValidationOutcome) and,
//! with the `proptest` feature, an `Arbitrary` implementation for it.
//!
//! # Example
//!
//! ```rust
//! use fluentrule::{assert_errors, assert_invalid, assert_valid, ValidationOutcome};
//!
//! assert_valid!(ValidationOutcome::valid());
//!
//! let outcome = ValidationOutcome::from(vec!["must not be null.".to_string()]);
//! assert_invalid!(outcome.clone());
//! assert_errors!(outcome, ["must not be null."]);
//! ```

/// Assert that an outcome has no failures.
///
/// # Example
///
/// ```rust
/// use fluentrule::{assert_valid, ValidationOutcome};
///
/// assert_valid!(ValidationOutcome::new(None));
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($outcome:expr) => {{
        let outcome: $crate::ValidationOutcome = $outcome;
        if !outcome.is_valid() {
            panic!("Expected valid outcome, got errors: {:?}", outcome.errors());
        }
    }};
}

/// Assert that an outcome has at least one failure.
///
/// # Example
///
/// ```rust
/// use fluentrule::{assert_invalid, ValidationOutcome};
///
/// assert_invalid!(ValidationOutcome::from(vec!["error".to_string()]));
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($outcome:expr) => {{
        let outcome: $crate::ValidationOutcome = $outcome;
        if outcome.is_valid() {
            panic!("Expected invalid outcome, got no errors");
        }
    }};
}

/// Assert that an outcome failed with exactly the given messages, in order.
///
/// # Example
///
/// ```rust
/// use fluentrule::{assert_errors, ValidationOutcome};
///
/// let outcome = ValidationOutcome::from(vec!["a".to_string(), "b".to_string()]);
/// assert_errors!(outcome, ["a", "b"]);
/// ```
#[macro_export]
macro_rules! assert_errors {
    ($outcome:expr, $expected:expr) => {{
        let outcome: $crate::ValidationOutcome = $outcome;
        if outcome.is_valid() {
            panic!(
                "Expected invalid outcome with errors {:?}, got no errors",
                $expected
            );
        }
        assert_eq!(outcome.errors(), $expected);
    }};
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for crate::ValidationOutcome {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(crate::ValidationOutcome::valid()),
            prop::collection::vec("[a-z ]{1,24}\\.", 1..5).prop_map(crate::ValidationOutcome::from),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::ValidationOutcome;

    fn invalid(errors: &[&str]) -> ValidationOutcome {
        errors.iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn assert_valid_macro() {
        assert_valid!(ValidationOutcome::valid());
    }

    #[test]
    fn assert_invalid_macro() {
        assert_invalid!(invalid(&["error"]));
    }

    #[test]
    fn assert_errors_macro() {
        assert_errors!(invalid(&["error1", "error2"]), ["error1", "error2"]);
    }

    #[test]
    #[should_panic(expected = "Expected valid outcome")]
    fn assert_valid_panics_on_errors() {
        assert_valid!(invalid(&["error"]));
    }

    #[test]
    #[should_panic(expected = "Expected invalid outcome, got no errors")]
    fn assert_invalid_panics_on_valid() {
        assert_invalid!(ValidationOutcome::valid());
    }

    #[test]
    #[should_panic(expected = "Expected invalid outcome with errors")]
    fn assert_errors_panics_on_valid() {
        assert_errors!(ValidationOutcome::valid(), ["error"]);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn arbitrary_outcome_validity_matches_errors(outcome in any::<ValidationOutcome>()) {
                prop_assert_eq!(outcome.is_valid(), outcome.errors().is_empty());
            }
        }
    }
}
