//! Presence predicates
//!
//! These are the only built-in checks that fail on an absent value.

use std::fmt;
use std::marker::PhantomData;

use super::combinators::Predicate;
use super::value::{Emptiness, PropertyValue};

/// Predicate that fails when the value is absent.
pub struct NotNull<K>(PhantomData<fn(&K)>);

impl<K: PropertyValue> Predicate<K> for NotNull<K> {
    #[inline]
    fn check(&self, value: &K) -> bool {
        value.present().is_some()
    }
}

impl<K> fmt::Debug for NotNull<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NotNull")
    }
}

/// Create a predicate that fails when the value is absent.
///
/// # Example
///
/// ```rust
/// use fluentrule::predicate::*;
///
/// assert!(not_null().check(&Some("x")));
/// assert!(!not_null().check(&None::<&str>));
/// assert!(not_null().check(&0_i32));
/// ```
pub fn not_null<K: PropertyValue>() -> NotNull<K> {
    NotNull(PhantomData)
}

/// Predicate that fails when the value is absent or empty.
pub struct NotEmpty<K>(PhantomData<fn(&K)>);

impl<K> Predicate<K> for NotEmpty<K>
where
    K: PropertyValue,
    K::Target: Emptiness,
{
    #[inline]
    fn check(&self, value: &K) -> bool {
        value.present().is_some_and(|v| !v.is_empty_value())
    }
}

impl<K> fmt::Debug for NotEmpty<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NotEmpty")
    }
}

/// Create a predicate that fails on absent or empty values.
///
/// Absence counts as empty. Present scalars are never empty.
///
/// # Example
///
/// ```rust
/// use fluentrule::predicate::*;
///
/// assert!(not_empty().check(&String::from("hello")));
/// assert!(!not_empty().check(&String::new()));
/// assert!(!not_empty().check(&None::<Vec<i32>>));
/// assert!(not_empty().check(&0_i32));
/// ```
pub fn not_empty<K>() -> NotEmpty<K>
where
    K: PropertyValue,
    K::Target: Emptiness,
{
    NotEmpty(PhantomData)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn not_null_only_fails_on_none() {
        assert!(!not_null().check(&None::<i32>));
        assert!(not_null().check(&Some(0)));
        assert!(not_null().check(&String::new()));
    }

    #[test]
    fn not_empty_text() {
        assert!(!not_empty().check(&None::<String>));
        assert!(!not_empty().check(&Some(String::new())));
        assert!(not_empty().check(&Some(String::from("a"))));
        assert!(!not_empty().check(&""));
    }

    #[test]
    fn not_empty_collections() {
        assert!(!not_empty().check(&Vec::<u8>::new()));
        assert!(not_empty().check(&vec![1]));
        assert!(!not_empty().check(&HashMap::<String, i32>::new()));
        assert!(!not_empty().check(&[0_u8; 0]));
        assert!(not_empty().check(&[1_u8, 2]));
    }

    #[test]
    fn not_empty_passes_present_scalars() {
        assert!(not_empty().check(&0_i32));
        assert!(not_empty().check(&Some(0.0_f64)));
        assert!(!not_empty().check(&None::<i32>));
    }
}
