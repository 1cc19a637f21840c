//! Error types for rule authoring.
//!
//! Failed checks are never errors; they end up as messages in a
//! [`ValidationOutcome`](crate::ValidationOutcome). The types here report
//! mistakes made while building rules.

use std::error::Error;
use std::fmt;

/// Error returned when a `matches` pattern is not a valid regular expression.
///
/// # Examples
///
/// ```rust
/// use fluentrule::predicate::matches;
///
/// let err = matches::<String>("[a-z").unwrap_err();
/// assert_eq!(err.pattern(), "[a-z");
/// assert!(err.to_string().starts_with("invalid pattern `[a-z`"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PatternError {
    pattern: String,
    source: regex::Error,
}

impl PatternError {
    pub(crate) fn new(pattern: &str, source: regex::Error) -> Self {
        Self {
            pattern: pattern.to_string(),
            source,
        }
    }

    /// The pattern that failed to compile.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The underlying regex compilation error.
    pub fn regex_error(&self) -> &regex::Error {
        &self.source
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid pattern `{}`: {}", self.pattern, self.source)
    }
}

impl Error for PatternError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}
