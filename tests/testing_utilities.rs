//! Tests and examples for the assertion macros
//!
//! This suite shows how validators built with fluentrule are usually tested.

use fluentrule::prelude::*;
use fluentrule::{assert_errors, assert_invalid, assert_valid};

// Example domain types for testing
#[derive(Debug, Clone, PartialEq)]
struct User {
    username: String,
    email: String,
}

impl User {
    fn new(username: &str, email: &str) -> Self {
        Self {
            username: username.to_string(),
            email: email.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Person {
    name: Option<String>,
    age: Option<i32>,
}

struct UserValidator {
    rules: EntityValidator<User>,
}

impl UserValidator {
    fn new() -> Self {
        let mut rules = EntityValidator::<User>::new();
        rules
            .rule_for(|user| user.username.clone())
            .not_null()
            .must(|name| name.len() >= 3, "Username too short");
        rules
            .rule_for(|user| user.email.clone())
            .not_null()
            .must(|email| email.contains('@'), "Invalid email");
        Self { rules }
    }
}

impl Validator<User> for UserValidator {
    fn rules(&self) -> &EntityValidator<User> {
        &self.rules
    }
}

// Tests demonstrating assertion macros

#[test]
fn test_assert_errors_returns_all_errors() {
    let result = UserValidator::new().validate(&User::new("Jo", "invalid-email"));
    assert_errors!(result, ["Username too short", "Invalid email"]);
}

#[test]
fn test_assert_valid_when_all_rules_satisfied() {
    let result = UserValidator::new().validate(&User::new("John", "john@example.com"));
    assert_valid!(result.clone());
    assert!(result.errors().is_empty());
}

#[test]
fn test_assert_invalid_with_single_failure() {
    let result = UserValidator::new().validate(&User::new("John", "john.example.com"));
    assert_invalid!(result.clone());
    assert_eq!(result.len(), 1);
}

// Tests demonstrating standalone rules

#[test]
fn test_standalone_rule_not_null() {
    let mut rule = PropertyRule::new(|p: &Person| p.name.clone());
    rule.not_null();

    let errors = rule.validate(&Person {
        name: None,
        age: Some(25),
    });
    assert_eq!(errors, ["must not be null."]);
}

#[test]
fn test_standalone_rule_must() {
    let mut rule = PropertyRule::new(|p: &Person| p.age.unwrap_or(0));
    rule.must(|age| *age >= 18, "must be at least 18.");

    let minor = Person {
        name: Some("John".into()),
        age: Some(17),
    };
    let adult = Person {
        age: Some(18),
        ..minor.clone()
    };

    assert_eq!(rule.validate(&minor), ["must be at least 18."]);
    assert!(rule.validate(&adult).is_empty());
}

#[test]
fn test_standalone_rule_multiple_predicates() {
    let mut rule = PropertyRule::new(|p: &Person| p.age);
    rule.not_null()
        .must(|age| age.is_some_and(|a| a >= 18), "must be at least 18.");

    let errors = rule.validate(&Person {
        name: Some("John".into()),
        age: None,
    });
    assert_eq!(errors, ["must not be null.", "must be at least 18."]);
}

// Tests demonstrating outcome construction

#[test]
fn test_outcome_from_absent_errors() {
    assert_valid!(ValidationOutcome::new(None));
    assert_valid!(ValidationOutcome::from(Vec::new()));
}

#[test]
fn test_outcome_from_errors() {
    let outcome = ValidationOutcome::new(Some(vec!["Error 1".into(), "Error 2".into()]));
    assert_errors!(outcome, ["Error 1", "Error 2"]);
}
