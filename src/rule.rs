//! Property rules
//!
//! A [`PropertyRule`] binds one extractor (`&T -> K`) to an ordered chain of
//! checks. Each check is a predicate over the extracted value and the message
//! reported when the predicate returns `false`.
//!
//! Evaluation extracts the value once, runs every check in the order it was
//! added, and collects the messages of the failing ones. Nothing
//! short-circuits and nothing is deduplicated.
//!
//! # Example
//!
//! ```rust
//! use fluentrule::PropertyRule;
//!
//! struct Person {
//!     age: Option<u32>,
//! }
//!
//! let mut rule = PropertyRule::new(|p: &Person| p.age);
//! rule.not_null()
//!     .greater_than_or_equal_to(18)
//!     .with_message("Must be 18 or older.");
//!
//! assert_eq!(rule.validate(&Person { age: None }), ["must not be null."]);
//! assert_eq!(rule.validate(&Person { age: Some(17) }), ["Must be 18 or older."]);
//! assert!(rule.validate(&Person { age: Some(18) }).is_empty());
//! ```

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use crate::error::PatternError;
use crate::predicate::{self, Emptiness, Predicate, PropertyValue};

pub(crate) type Extractor<T, K> = Arc<dyn Fn(&T) -> K + Send + Sync>;

pub(crate) struct Check<K> {
    predicate: Box<dyn Predicate<K>>,
    message: String,
}

/// An ordered chain of checks over one extracted property.
pub struct PropertyRule<T, K> {
    pub(crate) extractor: Extractor<T, K>,
    pub(crate) checks: Vec<Check<K>>,
}

impl<T, K: 'static> PropertyRule<T, K> {
    /// Create a rule with no checks around `extractor`.
    ///
    /// The extractor is fixed for the lifetime of the rule.
    pub fn new<F>(extractor: F) -> Self
    where
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self {
            extractor: Arc::new(extractor),
            checks: Vec::new(),
        }
    }

    /// Append a custom check.
    ///
    /// The closure sees the raw extracted value, absent or not. Handling
    /// absence is up to the caller.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fluentrule::PropertyRule;
    ///
    /// let mut rule = PropertyRule::new(|n: &i32| *n);
    /// rule.must(|n| *n > 0, "positive").must(|n| n % 2 == 0, "even");
    ///
    /// assert_eq!(rule.validate(&-1), ["positive", "even"]);
    /// ```
    pub fn must<F>(&mut self, predicate: F, message: impl Into<String>) -> RuleEntry<'_, T, K>
    where
        F: Fn(&K) -> bool + Send + Sync + 'static,
    {
        self.push(Box::new(predicate), message.into())
    }

    /// Append a check built from a [`Predicate`], such as a composition of
    /// the built-ins.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fluentrule::PropertyRule;
    /// use fluentrule::predicate::*;
    ///
    /// let mut rule = PropertyRule::new(|n: &Option<i32>| *n);
    /// rule.must_satisfy(
    ///     less_than(0).or(greater_than(100)),
    ///     "must be outside 0..=100.",
    /// );
    ///
    /// assert!(rule.validate(&Some(150)).is_empty());
    /// assert_eq!(rule.validate(&Some(50)), ["must be outside 0..=100."]);
    /// ```
    pub fn must_satisfy<P>(&mut self, predicate: P, message: impl Into<String>) -> RuleEntry<'_, T, K>
    where
        P: Predicate<K> + 'static,
    {
        self.push(Box::new(predicate), message.into())
    }

    /// Replace the message of the most recently added check.
    ///
    /// Does nothing when the rule has no checks yet. Prefer
    /// [`RuleEntry::with_message`], which is bound to a specific check.
    pub fn with_message(&mut self, message: impl Into<String>) -> &mut Self {
        if let Some(last) = self.checks.last_mut() {
            last.message = message.into();
        }
        self
    }

    /// Fails when the value is absent.
    ///
    /// Default message: `must not be null.`
    pub fn not_null(&mut self) -> RuleEntry<'_, T, K>
    where
        K: PropertyValue,
    {
        self.must_satisfy(predicate::not_null(), "must not be null.")
    }

    /// Fails when the value is absent or empty.
    ///
    /// Present scalars are never empty. Default message: `must not be empty.`
    pub fn not_empty(&mut self) -> RuleEntry<'_, T, K>
    where
        K: PropertyValue,
        K::Target: Emptiness,
    {
        self.must_satisfy(predicate::not_empty(), "must not be empty.")
    }

    /// Requires between `min` and `max` characters, inclusive.
    ///
    /// Passes when the value is absent. Default message:
    /// `must be between {min} and {max} characters.`
    pub fn length(&mut self, min: usize, max: usize) -> RuleEntry<'_, T, K>
    where
        K: PropertyValue,
        K::Target: AsRef<str>,
    {
        self.must_satisfy(
            predicate::length_between(min, max),
            format!("must be between {min} and {max} characters."),
        )
    }

    /// Requires `value > min`. Passes when the value is absent.
    ///
    /// Default message: `must be greater than {min}.`
    pub fn greater_than<V>(&mut self, min: V) -> RuleEntry<'_, T, K>
    where
        K: PropertyValue,
        K::Target: PartialOrd<V>,
        V: fmt::Display + Send + Sync + 'static,
    {
        let message = format!("must be greater than {min}.");
        self.must_satisfy(predicate::greater_than(min), message)
    }

    /// Requires `value < max`. Passes when the value is absent.
    ///
    /// Default message: `must be less than {max}.`
    pub fn less_than<V>(&mut self, max: V) -> RuleEntry<'_, T, K>
    where
        K: PropertyValue,
        K::Target: PartialOrd<V>,
        V: fmt::Display + Send + Sync + 'static,
    {
        let message = format!("must be less than {max}.");
        self.must_satisfy(predicate::less_than(max), message)
    }

    /// Requires `value >= min`. Passes when the value is absent.
    ///
    /// Default message: `must be greater than or equal to {min}.`
    pub fn greater_than_or_equal_to<V>(&mut self, min: V) -> RuleEntry<'_, T, K>
    where
        K: PropertyValue,
        K::Target: PartialOrd<V>,
        V: fmt::Display + Send + Sync + 'static,
    {
        let message = format!("must be greater than or equal to {min}.");
        self.must_satisfy(predicate::greater_than_or_equal_to(min), message)
    }

    /// Requires `value <= max`. Passes when the value is absent.
    ///
    /// Default message: `must be less than or equal to {max}.`
    pub fn less_than_or_equal_to<V>(&mut self, max: V) -> RuleEntry<'_, T, K>
    where
        K: PropertyValue,
        K::Target: PartialOrd<V>,
        V: fmt::Display + Send + Sync + 'static,
    {
        let message = format!("must be less than or equal to {max}.");
        self.must_satisfy(predicate::less_than_or_equal_to(max), message)
    }

    /// Requires the whole text to match `pattern`. Passes when the value is
    /// absent.
    ///
    /// Default message: `must match pattern {pattern}.`
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when `pattern` does not compile. No check is
    /// added in that case.
    pub fn matches(&mut self, pattern: &str) -> Result<RuleEntry<'_, T, K>, PatternError>
    where
        K: PropertyValue,
        K::Target: AsRef<str>,
    {
        let check = predicate::matches(pattern)?;
        Ok(self.must_satisfy(check, format!("must match pattern {pattern}.")))
    }

    /// Requires a plausible email address. Passes when the value is absent.
    ///
    /// Default message: `must be a valid email address.`
    pub fn email_address(&mut self) -> RuleEntry<'_, T, K>
    where
        K: PropertyValue,
        K::Target: AsRef<str>,
    {
        self.must_satisfy(predicate::email_address(), "must be a valid email address.")
    }

    /// Run every check against the value extracted from `entity`.
    ///
    /// Returns the messages of the failing checks in the order the checks
    /// were added.
    pub fn validate(&self, entity: &T) -> Vec<String> {
        let value = (self.extractor)(entity);
        let errors: Vec<String> = self
            .checks
            .iter()
            .filter(|check| !check.predicate.check(&value))
            .map(|check| check.message.clone())
            .collect();

        #[cfg(feature = "tracing")]
        if !errors.is_empty() {
            tracing::trace!(
                property = std::any::type_name::<K>(),
                checks = self.checks.len(),
                failures = errors.len(),
                "property rule failed"
            );
        }

        errors
    }

    /// Number of checks in the chain.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// True when no check has been added.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Messages of all checks, in order.
    pub fn messages(&self) -> impl Iterator<Item = &str> + '_ {
        self.checks.iter().map(|check| check.message.as_str())
    }

    fn push(&mut self, predicate: Box<dyn Predicate<K>>, message: String) -> RuleEntry<'_, T, K> {
        let index = self.checks.len();
        self.checks.push(Check { predicate, message });
        RuleEntry { rule: self, index }
    }
}

impl<T, K> fmt::Debug for PropertyRule<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyRule")
            .field("property", &std::any::type_name::<K>())
            .field(
                "messages",
                &self.checks.iter().map(|c| &c.message).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Handle to the check a combinator just appended.
///
/// [`with_message`](Self::with_message) overrides that check's message. The
/// handle dereferences to the rule, so further combinators chain directly:
///
/// ```rust
/// use fluentrule::PropertyRule;
///
/// let mut rule = PropertyRule::new(|name: &Option<String>| name.clone());
/// rule.not_null()
///     .with_message("Name is required.")
///     .length(2, 40)
///     .with_message("Name must be 2-40 characters.");
///
/// assert_eq!(rule.validate(&None), ["Name is required."]);
/// assert_eq!(
///     rule.validate(&Some("J".to_string())),
///     ["Name must be 2-40 characters."]
/// );
/// ```
pub struct RuleEntry<'r, T, K> {
    rule: &'r mut PropertyRule<T, K>,
    index: usize,
}

impl<'r, T, K> RuleEntry<'r, T, K> {
    /// Replace the message of this check.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        self.rule.checks[self.index].message = message.into();
        self
    }

    /// The message currently reported when this check fails.
    pub fn message(&self) -> &str {
        &self.rule.checks[self.index].message
    }

    /// Position of this check in the rule's chain.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<T, K> Deref for RuleEntry<'_, T, K> {
    type Target = PropertyRule<T, K>;

    fn deref(&self) -> &Self::Target {
        self.rule
    }
}

impl<T, K> DerefMut for RuleEntry<'_, T, K> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.rule
    }
}

impl<T, K> fmt::Debug for RuleEntry<'_, T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleEntry")
            .field("index", &self.index)
            .field("message", &self.rule.checks[self.index].message)
            .finish()
    }
}
