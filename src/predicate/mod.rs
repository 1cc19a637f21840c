//! Predicates behind the property rule combinators
//!
//! Each built-in combinator on [`PropertyRule`](crate::PropertyRule) appends
//! one of the predicates defined here. They are public so custom checks
//! passed to `must` can be composed from the same pieces:
//!
//! ```rust
//! use fluentrule::predicate::*;
//!
//! let working_age = greater_than_or_equal_to(16).and(less_than(70));
//! assert!(working_age.check(&Some(30)));
//! assert!(working_age.check(&None)); // absent values pass vacuously
//! assert!(!working_age.check(&Some(80)));
//! ```
//!
//! # Absence
//!
//! A property is absent when its [`PropertyValue::present`] returns `None`.
//! Every predicate except [`NotNull`] and [`NotEmpty`] passes on an absent
//! value, so presence is checked once by `not_null` and not reported again
//! by the range and format checks.
//!
//! # Capabilities
//!
//! Type requirements are resolved at compile time: `not_empty` needs
//! [`Emptiness`], text checks need `Target: AsRef<str>`, comparisons need
//! `Target: PartialOrd<V>`.

mod combinators;
mod number;
mod presence;
mod string;
mod value;

pub mod prelude;

pub use combinators::{And, Not, Or, Predicate, PredicateExt};

pub use value::{Emptiness, PropertyValue};

pub use presence::{not_empty, not_null, NotEmpty, NotNull};

pub use string::{email_address, length_between, matches, LengthBetween, Matches};

pub use number::{
    compare, greater_than, greater_than_or_equal_to, less_than, less_than_or_equal_to, Compare,
    Comparison,
};
