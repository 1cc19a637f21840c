//! Entity validators
//!
//! An [`EntityValidator`] is the ordered registry of property rules for one
//! entity type. Rules are registered once, usually in the constructor of a
//! concrete validator, and the registry is read-only afterwards.
//!
//! # Example
//!
//! ```rust
//! use fluentrule::{EntityValidator, Validator};
//!
//! struct User {
//!     username: String,
//!     email: String,
//! }
//!
//! struct UserValidator {
//!     rules: EntityValidator<User>,
//! }
//!
//! impl UserValidator {
//!     fn new() -> Self {
//!         let mut rules = EntityValidator::<User>::new();
//!         rules
//!             .rule_for(|u| u.username.clone())
//!             .not_null()
//!             .must(|name| name.len() >= 3, "Username too short");
//!         rules
//!             .rule_for(|u| u.email.clone())
//!             .not_null()
//!             .must(|email| email.contains('@'), "Invalid email");
//!         Self { rules }
//!     }
//! }
//!
//! impl Validator<User> for UserValidator {
//!     fn rules(&self) -> &EntityValidator<User> {
//!         &self.rules
//!     }
//! }
//!
//! let validator = UserValidator::new();
//! let outcome = validator.validate(&User {
//!     username: "Jo".into(),
//!     email: "invalid-email".into(),
//! });
//! assert!(!outcome.is_valid());
//! assert_eq!(outcome.errors(), ["Username too short", "Invalid email"]);
//! ```

use std::fmt;
use std::mem;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use crate::outcome::ValidationOutcome;
use crate::rule::PropertyRule;

/// A registered rule with its property type erased.
trait PropertyCheck<T>: Send + Sync {
    fn validate(&self, entity: &T) -> Vec<String>;

    fn describe(&self) -> String;
}

impl<T, K: 'static> PropertyCheck<T> for PropertyRule<T, K> {
    fn validate(&self, entity: &T) -> Vec<String> {
        PropertyRule::validate(self, entity)
    }

    fn describe(&self) -> String {
        format!("{self:?}")
    }
}

/// Ordered registry of property rules for entities of type `T`.
///
/// Validation runs the rules in registration order and concatenates their
/// messages. A validator that is done registering can be shared across
/// threads and validated concurrently.
pub struct EntityValidator<T> {
    rules: Vec<Box<dyn PropertyCheck<T>>>,
}

impl<T: 'static> EntityValidator<T> {
    /// Create a validator with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Start a rule for the property returned by `extractor`.
    ///
    /// Chain combinators on the returned builder. The rule is registered, at
    /// the end of the registry, when the builder is dropped, which for a
    /// chained statement is the end of that statement.
    ///
    /// An extractor that panics is not caught by [`validate`](Self::validate).
    pub fn rule_for<K, F>(&mut self, extractor: F) -> RuleBuilder<'_, T, K>
    where
        K: 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        RuleBuilder {
            rules: &mut self.rules,
            rule: PropertyRule::new(extractor),
        }
    }

    /// Register a rule built on its own.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fluentrule::{EntityValidator, PropertyRule};
    ///
    /// let mut age = PropertyRule::new(|age: &i32| *age);
    /// age.must(|age| *age >= 18, "Must be 18 or older.");
    ///
    /// let mut validator = EntityValidator::new();
    /// validator.add_rule(age);
    ///
    /// assert_eq!(validator.validate(&17).errors(), ["Must be 18 or older."]);
    /// assert!(validator.validate(&18).is_valid());
    /// ```
    pub fn add_rule<K: 'static>(&mut self, rule: PropertyRule<T, K>) -> &mut Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            entity = std::any::type_name::<T>(),
            property = std::any::type_name::<K>(),
            checks = rule.len(),
            "registered property rule"
        );

        self.rules.push(Box::new(rule));
        self
    }

    /// Run every rule against `entity` and collect the failures.
    ///
    /// Messages are ordered by rule registration, then by check order within
    /// each rule.
    pub fn validate(&self, entity: &T) -> ValidationOutcome {
        let errors: Vec<String> = self
            .rules
            .iter()
            .flat_map(|rule| rule.validate(entity))
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            entity = std::any::type_name::<T>(),
            rules = self.rules.len(),
            failures = errors.len(),
            "validated entity"
        );

        ValidationOutcome::from(errors)
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when no rule is registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<T: 'static> Default for EntityValidator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EntityValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityValidator")
            .field("entity", &std::any::type_name::<T>())
            .field(
                "rules",
                &self.rules.iter().map(|r| r.describe()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// A property rule under construction.
///
/// Returned by [`EntityValidator::rule_for`]. Dereferences to the
/// [`PropertyRule`] so combinators can be chained, and appends the rule to
/// the validator when dropped.
pub struct RuleBuilder<'v, T: 'static, K: 'static> {
    rules: &'v mut Vec<Box<dyn PropertyCheck<T>>>,
    rule: PropertyRule<T, K>,
}

impl<T: 'static, K: 'static> Deref for RuleBuilder<'_, T, K> {
    type Target = PropertyRule<T, K>;

    fn deref(&self) -> &Self::Target {
        &self.rule
    }
}

impl<T: 'static, K: 'static> DerefMut for RuleBuilder<'_, T, K> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.rule
    }
}

impl<T: 'static, K: 'static> Drop for RuleBuilder<'_, T, K> {
    fn drop(&mut self) {
        let rule = PropertyRule {
            extractor: Arc::clone(&self.rule.extractor),
            checks: mem::take(&mut self.rule.checks),
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(
            entity = std::any::type_name::<T>(),
            property = std::any::type_name::<K>(),
            checks = rule.len(),
            "registered property rule"
        );

        self.rules.push(Box::new(rule));
    }
}

impl<T: 'static, K: 'static> fmt::Debug for RuleBuilder<'_, T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RuleBuilder").field(&self.rule).finish()
    }
}

/// A concrete validator for entities of type `T`.
///
/// Implementors build their [`EntityValidator`] once, typically in a
/// constructor, and expose it through [`rules`](Self::rules). This is the
/// seam host-framework adapters call into.
pub trait Validator<T> {
    /// The rules this validator runs.
    fn rules(&self) -> &EntityValidator<T>;

    /// Validate `entity` against every registered rule.
    fn validate(&self, entity: &T) -> ValidationOutcome
    where
        T: 'static,
    {
        self.rules().validate(entity)
    }
}

impl<T> Validator<T> for EntityValidator<T> {
    fn rules(&self) -> &EntityValidator<T> {
        self
    }
}


#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use super::*;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn validate_emits_events() {
        let mut v = EntityValidator::new();
        v.rule_for(|n: &i32| *n).greater_than(0);
        v.validate(&-1);

        assert!(logs_contain("registered property rule"));
        assert!(logs_contain("property rule failed"));
        assert!(logs_contain("validated entity"));
        assert!(logs_contain("failures=1"));
    }

    #[traced_test]
    #[test]
    fn passing_rules_do_not_log_failures() {
        let mut v = EntityValidator::new();
        v.rule_for(|n: &i32| *n).greater_than(0);
        v.validate(&1);

        assert!(logs_contain("failures=0"));
        assert!(!logs_contain("property rule failed"));
    }
}
