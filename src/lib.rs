//! # fluentrule
//!
//! Declarative, per-property validation rules.
//!
//! A validator for an entity type is a list of property rules. Each rule
//! extracts one value from the entity and runs an ordered chain of checks
//! against it. Validation never stops early: every failing check contributes
//! its message, in registration order, to a [`ValidationOutcome`].
//!
//! ## Quick Example
//!
//! ```rust
//! use fluentrule::{EntityValidator, Validator};
//!
//! struct Customer {
//!     name: Option<String>,
//!     email: Option<String>,
//!     age: Option<u32>,
//! }
//!
//! struct CustomerValidator(EntityValidator<Customer>);
//!
//! impl CustomerValidator {
//!     fn new() -> Self {
//!         let mut rules = EntityValidator::<Customer>::new();
//!         rules.rule_for(|c| c.name.clone()).not_empty();
//!         rules.rule_for(|c| c.email.clone()).not_null().email_address();
//!         rules
//!             .rule_for(|c| c.age)
//!             .greater_than_or_equal_to(18)
//!             .with_message("Must be 18 or older.");
//!         Self(rules)
//!     }
//! }
//!
//! impl Validator<Customer> for CustomerValidator {
//!     fn rules(&self) -> &EntityValidator<Customer> {
//!         &self.0
//!     }
//! }
//!
//! let outcome = CustomerValidator::new().validate(&Customer {
//!     name: Some(String::new()),
//!     email: None,
//!     age: Some(17),
//! });
//!
//! assert_eq!(
//!     outcome.errors(),
//!     ["must not be empty.", "must not be null.", "Must be 18 or older."]
//! );
//! ```
//!
//! ## Absent values
//!
//! Properties of type `Option<V>` can be absent. Range and format checks
//! pass on absent values so that `not_null` alone reports a missing value;
//! `not_empty` is the exception and treats absence as empty. See
//! [`predicate`] for the capability traits the checks rely on.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events while registering rules and validating.
//! - `serde`: `Serialize`/`Deserialize` for [`ValidationOutcome`].
//! - `proptest`: `Arbitrary` for [`ValidationOutcome`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod outcome;
pub mod predicate;
pub mod rule;
pub mod testing;
pub mod validator;

// Re-exports
pub use error::PatternError;
pub use outcome::ValidationOutcome;
pub use rule::{PropertyRule, RuleEntry};
pub use validator::{EntityValidator, RuleBuilder, Validator};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::PatternError;
    pub use crate::outcome::ValidationOutcome;
    pub use crate::predicate::{Emptiness, Predicate, PredicateExt, PropertyValue};
    pub use crate::rule::{PropertyRule, RuleEntry};
    pub use crate::validator::{EntityValidator, RuleBuilder, Validator};
}
