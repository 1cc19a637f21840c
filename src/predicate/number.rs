//! Ordering predicates
//!
//! Comparisons pass vacuously on absent values. A present value that cannot
//! be ordered against the bound (`partial_cmp` returns `None`, e.g. NaN)
//! fails.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use super::combinators::Predicate;
use super::value::PropertyValue;

/// Which side of the bound a value must fall on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// `value > bound`
    GreaterThan,
    /// `value < bound`
    LessThan,
    /// `value >= bound`
    GreaterThanOrEqualTo,
    /// `value <= bound`
    LessThanOrEqualTo,
}

impl Comparison {
    /// Whether `value.partial_cmp(bound)` satisfies this comparison.
    #[inline]
    pub fn holds(self, ordering: Ordering) -> bool {
        match self {
            Self::GreaterThan => ordering == Ordering::Greater,
            Self::LessThan => ordering == Ordering::Less,
            Self::GreaterThanOrEqualTo => ordering != Ordering::Less,
            Self::LessThanOrEqualTo => ordering != Ordering::Greater,
        }
    }

    /// Human-readable phrase, e.g. `"greater than or equal to"`.
    pub fn phrase(self) -> &'static str {
        match self {
            Self::GreaterThan => "greater than",
            Self::LessThan => "less than",
            Self::GreaterThanOrEqualTo => "greater than or equal to",
            Self::LessThanOrEqualTo => "less than or equal to",
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}

/// Predicate comparing a value against a fixed bound.
pub struct Compare<K, V> {
    bound: V,
    comparison: Comparison,
    _value: PhantomData<fn(&K)>,
}

impl<K, V> Compare<K, V> {
    /// The bound values are compared against.
    pub fn bound(&self) -> &V {
        &self.bound
    }

    /// The comparison applied.
    pub fn comparison(&self) -> Comparison {
        self.comparison
    }
}

impl<K, V> Predicate<K> for Compare<K, V>
where
    K: PropertyValue,
    K::Target: PartialOrd<V>,
    V: Send + Sync,
{
    #[inline]
    fn check(&self, value: &K) -> bool {
        match value.present() {
            None => true,
            Some(v) => v
                .partial_cmp(&self.bound)
                .is_some_and(|ordering| self.comparison.holds(ordering)),
        }
    }
}

impl<K, V: Clone> Clone for Compare<K, V> {
    fn clone(&self) -> Self {
        Self {
            bound: self.bound.clone(),
            comparison: self.comparison,
            _value: PhantomData,
        }
    }
}

impl<K, V: fmt::Debug> fmt::Debug for Compare<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compare")
            .field("bound", &self.bound)
            .field("comparison", &self.comparison)
            .finish()
    }
}

/// Create a comparison predicate from its parts.
///
/// # Example
///
/// ```rust
/// use fluentrule::predicate::*;
///
/// let p = compare(10, Comparison::LessThanOrEqualTo);
/// assert!(p.check(&10));
/// assert!(!p.check(&11));
/// ```
pub fn compare<K, V>(bound: V, comparison: Comparison) -> Compare<K, V>
where
    K: PropertyValue,
    K::Target: PartialOrd<V>,
{
    Compare {
        bound,
        comparison,
        _value: PhantomData,
    }
}

/// Create a predicate that checks if value is greater than `min`.
///
/// # Example
///
/// ```rust
/// use fluentrule::predicate::*;
///
/// assert!(greater_than(5).check(&6));
/// assert!(!greater_than(5).check(&5));
/// assert!(greater_than(5).check(&None::<i32>));
/// ```
pub fn greater_than<K, V>(min: V) -> Compare<K, V>
where
    K: PropertyValue,
    K::Target: PartialOrd<V>,
{
    compare(min, Comparison::GreaterThan)
}

/// Create a predicate that checks if value is less than `max`.
///
/// # Example
///
/// ```rust
/// use fluentrule::predicate::*;
///
/// assert!(less_than(5).check(&4));
/// assert!(!less_than(5).check(&5));
/// ```
pub fn less_than<K, V>(max: V) -> Compare<K, V>
where
    K: PropertyValue,
    K::Target: PartialOrd<V>,
{
    compare(max, Comparison::LessThan)
}

/// Create a predicate that checks if value is greater than or equal to `min`.
///
/// # Example
///
/// ```rust
/// use fluentrule::predicate::*;
///
/// assert!(greater_than_or_equal_to(5).check(&5));
/// assert!(!greater_than_or_equal_to(5).check(&4));
/// ```
pub fn greater_than_or_equal_to<K, V>(min: V) -> Compare<K, V>
where
    K: PropertyValue,
    K::Target: PartialOrd<V>,
{
    compare(min, Comparison::GreaterThanOrEqualTo)
}

/// Create a predicate that checks if value is less than or equal to `max`.
///
/// # Example
///
/// ```rust
/// use fluentrule::predicate::*;
///
/// assert!(less_than_or_equal_to(5).check(&5));
/// assert!(!less_than_or_equal_to(5).check(&6));
/// ```
pub fn less_than_or_equal_to<K, V>(max: V) -> Compare<K, V>
where
    K: PropertyValue,
    K::Target: PartialOrd<V>,
{
    compare(max, Comparison::LessThanOrEqualTo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_bounds() {
        assert!(greater_than(18).check(&19));
        assert!(!greater_than(18).check(&18));
        assert!(less_than(18).check(&17));
        assert!(!less_than(18).check(&18));
    }

    #[test]
    fn test_inclusive_bounds() {
        assert!(greater_than_or_equal_to(18).check(&18));
        assert!(!greater_than_or_equal_to(18).check(&17));
        assert!(less_than_or_equal_to(18).check(&18));
        assert!(!less_than_or_equal_to(18).check(&19));
    }

    #[test]
    fn test_absent_passes() {
        assert!(greater_than(0).check(&None::<i64>));
        assert!(less_than(0).check(&None::<i64>));
        assert!(greater_than_or_equal_to(0).check(&None::<i64>));
        assert!(less_than_or_equal_to(0).check(&None::<i64>));
    }

    #[test]
    fn test_unordered_fails() {
        assert!(!greater_than(0.0).check(&f64::NAN));
        assert!(!less_than_or_equal_to(0.0).check(&Some(f64::NAN)));
        assert!(!greater_than(f64::NAN).check(&1.0_f64));
    }

    #[test]
    fn test_text_ordering() {
        let after_b = greater_than(String::from("b"));
        assert!(after_b.check(&Some(String::from("c"))));
        assert!(!after_b.check(&Some(String::from("a"))));
    }

    #[test]
    fn test_comparison_phrase() {
        assert_eq!(Comparison::GreaterThanOrEqualTo.to_string(), "greater than or equal to");
        assert_eq!(Comparison::LessThan.phrase(), "less than");
    }
}
