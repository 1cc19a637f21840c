//! The result of one validation run
//!
//! A [`ValidationOutcome`] owns the ordered failure messages produced by a
//! validator. It is valid exactly when there are no messages.

use std::fmt;

/// Ordered failure messages from one validation run.
///
/// # Example
///
/// ```rust
/// use fluentrule::ValidationOutcome;
///
/// let outcome = ValidationOutcome::from(vec!["must not be null.".to_string()]);
/// assert!(!outcome.is_valid());
/// assert_eq!(outcome.errors(), ["must not be null."]);
///
/// let outcome = ValidationOutcome::new(None);
/// assert!(outcome.is_valid());
/// assert!(outcome.errors().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ValidationOutcome {
    errors: Vec<String>,
}

impl ValidationOutcome {
    /// Create an outcome from a possibly absent list of messages.
    ///
    /// An absent list is the same as an empty one.
    pub fn new(errors: Option<Vec<String>>) -> Self {
        Self {
            errors: errors.unwrap_or_default(),
        }
    }

    /// An outcome with no failures.
    pub fn valid() -> Self {
        Self::default()
    }

    /// True when no check failed.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failure messages in rule order, then check order within each rule.
    #[inline]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Number of failure messages.
    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Same as [`is_valid`](Self::is_valid).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterate over the failure messages.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.errors.iter()
    }

    /// Take ownership of the failure messages.
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }

    /// Convert into a `Result`, failing with the messages when invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fluentrule::ValidationOutcome;
    ///
    /// assert_eq!(ValidationOutcome::valid().into_result(), Ok(()));
    ///
    /// let outcome = ValidationOutcome::from(vec!["too short".to_string()]);
    /// assert_eq!(outcome.into_result(), Err(vec!["too short".to_string()]));
    /// ```
    pub fn into_result(self) -> Result<(), Vec<String>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

impl From<Vec<String>> for ValidationOutcome {
    fn from(errors: Vec<String>) -> Self {
        Self { errors }
    }
}

impl From<Option<Vec<String>>> for ValidationOutcome {
    fn from(errors: Option<Vec<String>>) -> Self {
        Self::new(errors)
    }
}

impl FromIterator<String> for ValidationOutcome {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationOutcome {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationOutcome {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.errors.join("; "))
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::ser::SerializeStruct;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::ValidationOutcome;

    impl Serialize for ValidationOutcome {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut state = serializer.serialize_struct("ValidationOutcome", 2)?;
            state.serialize_field("valid", &self.is_valid())?;
            state.serialize_field("errors", &self.errors)?;
            state.end()
        }
    }

    #[derive(Deserialize)]
    struct Repr {
        #[serde(default)]
        errors: Option<Vec<String>>,
    }

    // `valid` is derived from `errors`, so it is ignored on input.
    impl<'de> Deserialize<'de> for ValidationOutcome {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let repr = Repr::deserialize(deserializer)?;
            Ok(ValidationOutcome::new(repr.errors))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn serializes_validity_and_errors() {
            let outcome = ValidationOutcome::from(vec!["a".to_string(), "b".to_string()]);
            let json = serde_json::to_string(&outcome).unwrap();
            assert_eq!(json, r#"{"valid":false,"errors":["a","b"]}"#);
        }

        #[test]
        fn null_errors_normalize_to_empty() {
            let outcome: ValidationOutcome =
                serde_json::from_str(r#"{"errors":null}"#).unwrap();
            assert!(outcome.is_valid());

            let outcome: ValidationOutcome = serde_json::from_str("{}").unwrap();
            assert!(outcome.errors().is_empty());
        }

        #[test]
        fn valid_flag_is_recomputed() {
            let outcome: ValidationOutcome =
                serde_json::from_str(r#"{"valid":true,"errors":["x"]}"#).unwrap();
            assert!(!outcome.is_valid());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_errors_are_valid() {
        let outcome = ValidationOutcome::new(None);
        assert!(outcome.is_valid());
        assert!(outcome.errors().is_empty());
    }

    #[test]
    fn empty_errors_are_valid() {
        let outcome = ValidationOutcome::new(Some(Vec::new()));
        assert!(outcome.is_valid());
        assert_eq!(outcome.len(), 0);
    }

    #[test]
    fn errors_make_outcome_invalid() {
        let outcome = ValidationOutcome::from(vec!["Error 1".to_string()]);
        assert!(!outcome.is_valid());
    }

    #[test]
    fn errors_keep_their_order() {
        let outcome = ValidationOutcome::new(Some(vec!["Error 1".into(), "Error 2".into()]));
        assert_eq!(outcome.errors(), ["Error 1", "Error 2"]);
        assert_eq!(outcome.to_string(), "Error 1; Error 2");
    }

    #[test]
    fn duplicates_are_kept() {
        let outcome: ValidationOutcome = ["same", "same"].iter().map(|s| s.to_string()).collect();
        assert_eq!(outcome.len(), 2);
    }

    #[test]
    fn into_result() {
        assert_eq!(ValidationOutcome::valid().into_result(), Ok(()));
        let errors = vec!["x".to_string()];
        assert_eq!(
            ValidationOutcome::from(errors.clone()).into_result(),
            Err(errors)
        );
    }
}
