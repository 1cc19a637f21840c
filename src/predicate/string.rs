//! Text predicates
//!
//! Both checks pass vacuously on absent values and only accept textual
//! properties (`Target: AsRef<str>`).

use std::fmt;
use std::marker::PhantomData;
use std::sync::LazyLock;

use regex::Regex;

use super::combinators::Predicate;
use super::value::PropertyValue;
use crate::error::PatternError;

/// Loose address shape: local part, `@`, domain. No TLD requirement.
const EMAIL_PATTERN: &str = "^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+$";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

/// Predicate that checks the character count of a text value.
pub struct LengthBetween<K> {
    min: usize,
    max: usize,
    _value: PhantomData<fn(&K)>,
}

impl<K> LengthBetween<K> {
    /// Inclusive lower bound.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Inclusive upper bound.
    pub fn max(&self) -> usize {
        self.max
    }
}

impl<K> Predicate<K> for LengthBetween<K>
where
    K: PropertyValue,
    K::Target: AsRef<str>,
{
    #[inline]
    fn check(&self, value: &K) -> bool {
        match value.present() {
            None => true,
            Some(text) => {
                let len = text.as_ref().chars().count();
                len >= self.min && len <= self.max
            }
        }
    }
}

impl<K> fmt::Debug for LengthBetween<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LengthBetween")
            .field("min", &self.min)
            .field("max", &self.max)
            .finish()
    }
}

/// Create a predicate that checks text length is between min and max (inclusive).
///
/// Length is counted in characters, not bytes.
///
/// # Example
///
/// ```rust
/// use fluentrule::predicate::*;
///
/// let p = length_between(3, 5);
/// assert!(!p.check(&"ab"));
/// assert!(p.check(&"abc"));
/// assert!(p.check(&"héllo"));
/// assert!(!p.check(&"toolong"));
///
/// assert!(length_between(3, 5).check(&None::<String>));
/// ```
pub fn length_between<K>(min: usize, max: usize) -> LengthBetween<K>
where
    K: PropertyValue,
    K::Target: AsRef<str>,
{
    LengthBetween {
        min,
        max,
        _value: PhantomData,
    }
}

/// Predicate that requires the whole text to match a regular expression.
pub struct Matches<K> {
    pattern: String,
    regex: Regex,
    _value: PhantomData<fn(&K)>,
}

impl<K> Matches<K> {
    /// The pattern as supplied by the caller, without anchors.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl<K> Predicate<K> for Matches<K>
where
    K: PropertyValue,
    K::Target: AsRef<str>,
{
    #[inline]
    fn check(&self, value: &K) -> bool {
        value
            .present()
            .is_none_or(|text| self.regex.is_match(text.as_ref()))
    }
}

impl<K> Clone for Matches<K> {
    fn clone(&self) -> Self {
        Self {
            pattern: self.pattern.clone(),
            regex: self.regex.clone(),
            _value: PhantomData,
        }
    }
}

impl<K> fmt::Debug for Matches<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matches")
            .field("pattern", &self.pattern)
            .finish()
    }
}

/// Create a predicate that requires a full-string match against `pattern`.
///
/// The pattern is anchored at both ends, so a partial match is not enough.
///
/// # Errors
///
/// Returns [`PatternError`] when `pattern` is not a valid regular expression.
///
/// # Example
///
/// ```rust
/// use fluentrule::predicate::*;
///
/// let digits = matches("[0-9]+").unwrap();
/// assert!(digits.check(&"2024"));
/// assert!(!digits.check(&"year 2024"));
///
/// assert!(matches::<String>("[0-9").is_err());
/// ```
pub fn matches<K>(pattern: &str) -> Result<Matches<K>, PatternError>
where
    K: PropertyValue,
    K::Target: AsRef<str>,
{
    // A stray `)` could close the anchoring group, so compile the pattern alone first.
    Regex::new(pattern).map_err(|source| PatternError::new(pattern, source))?;
    let regex = Regex::new(&format!("^(?:{pattern})$"))
        .map_err(|source| PatternError::new(pattern, source))?;
    Ok(Matches {
        pattern: pattern.to_string(),
        regex,
        _value: PhantomData,
    })
}

/// Create a predicate that checks for a plausible email address.
///
/// # Example
///
/// ```rust
/// use fluentrule::predicate::*;
///
/// assert!(email_address().check(&"john@example.com"));
/// assert!(!email_address().check(&"invalid-email"));
/// ```
pub fn email_address<K>() -> Matches<K>
where
    K: PropertyValue,
    K::Target: AsRef<str>,
{
    Matches {
        pattern: EMAIL_PATTERN.to_string(),
        regex: EMAIL_REGEX.clone(),
        _value: PhantomData,
    }
}
