//! Property checks and how they compose
//!
//! A [`Predicate`] answers one question about an extracted property value.
//! `PropertyRule::must_satisfy` accepts any of them, so a rule entry can be a
//! plain closure, one of the built-in checks, or a composition of both built
//! with [`PredicateExt`].
//!
//! Built-in checks pass vacuously on an absent value. Composition keeps that
//! in mind: `and` of two such checks still passes on `None`, while `not`
//! flips the vacuous pass into a failure.

/// A check over an extracted property value of type `K`.
///
/// # Example
///
/// ```rust
/// use fluentrule::PropertyRule;
/// use fluentrule::predicate::*;
///
/// struct Signup {
///     age: Option<u32>,
/// }
///
/// let mut age = PropertyRule::new(|s: &Signup| s.age);
/// age.must_satisfy(
///     greater_than_or_equal_to(18).and(less_than(130)),
///     "Age is out of range.",
/// );
///
/// assert!(age.validate(&Signup { age: Some(30) }).is_empty());
/// assert!(age.validate(&Signup { age: None }).is_empty());
/// assert_eq!(age.validate(&Signup { age: Some(12) }), ["Age is out of range."]);
/// ```
pub trait Predicate<K: ?Sized>: Send + Sync {
    /// Returns `true` when the value satisfies the check.
    fn check(&self, value: &K) -> bool;
}

impl<K: ?Sized, F> Predicate<K> for F
where
    F: Fn(&K) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &K) -> bool {
        self(value)
    }
}

/// Composition of property checks.
///
/// How an absent value fares under each combinator follows from the parts:
///
/// | Combinator | Absent value, both parts vacuous |
/// |---|---|
/// | `a.and(b)` | passes |
/// | `a.or(b)` | passes |
/// | `a.not()` | fails |
///
/// Pair a negation with `not_null()` in `or` when absence should still pass.
///
/// # Example
///
/// ```rust
/// use fluentrule::predicate::*;
///
/// let reserved = greater_than(0).and(less_than(1024));
/// let unprivileged = not_null().not().or(reserved.not());
///
/// assert!(unprivileged.check(&Some(8080)));
/// assert!(unprivileged.check(&None::<i32>));
/// assert!(!unprivileged.check(&Some(80)));
/// ```
pub trait PredicateExt<K: ?Sized>: Predicate<K> + Sized {
    /// Holds when both checks hold; `other` is skipped once `self` fails.
    fn and<P: Predicate<K>>(self, other: P) -> And<Self, P> {
        And {
            left: self,
            right: other,
        }
    }

    /// Holds when either check holds; `other` is skipped once `self` passes.
    fn or<P: Predicate<K>>(self, other: P) -> Or<Self, P> {
        Or {
            left: self,
            right: other,
        }
    }

    /// Holds when the check fails, including a vacuous pass on absence.
    fn not(self) -> Not<Self> {
        Not { inner: self }
    }
}

impl<K: ?Sized, P: Predicate<K>> PredicateExt<K> for P {}

/// Both checks, built by [`PredicateExt::and`].
#[derive(Clone, Copy, Debug)]
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<K: ?Sized, L: Predicate<K>, R: Predicate<K>> Predicate<K> for And<L, R> {
    #[inline]
    fn check(&self, value: &K) -> bool {
        self.left.check(value) && self.right.check(value)
    }
}

/// Either check, built by [`PredicateExt::or`].
#[derive(Clone, Copy, Debug)]
pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<K: ?Sized, L: Predicate<K>, R: Predicate<K>> Predicate<K> for Or<L, R> {
    #[inline]
    fn check(&self, value: &K) -> bool {
        self.left.check(value) || self.right.check(value)
    }
}

/// Negated check, built by [`PredicateExt::not`].
#[derive(Clone, Copy, Debug)]
pub struct Not<P> {
    inner: P,
}

impl<K: ?Sized, P: Predicate<K>> Predicate<K> for Not<P> {
    #[inline]
    fn check(&self, value: &K) -> bool {
        !self.inner.check(value)
    }
}
