//! Predicate prelude for convenient imports
//!
//! # Example
//!
//! ```rust
//! use fluentrule::predicate::prelude::*;
//!
//! let valid_age = greater_than_or_equal_to(0).and(less_than_or_equal_to(150));
//! assert!(valid_age.check(&25));
//! ```

pub use super::combinators::{Predicate, PredicateExt};

pub use super::value::{Emptiness, PropertyValue};

pub use super::presence::{not_empty, not_null};

pub use super::string::{email_address, length_between, matches};

pub use super::number::{
    greater_than, greater_than_or_equal_to, less_than, less_than_or_equal_to,
};
