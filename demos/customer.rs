//! Customer validation example
//!
//! A concrete validator for a customer record, the way an HTTP handler would
//! use it before accepting a request body.
//!
//! Run with: cargo run --example customer

use fluentrule::{EntityValidator, ValidationOutcome, Validator};

// Domain type as received from a form or JSON body
#[derive(Debug, Clone)]
struct Customer {
    name: Option<String>,
    email: Option<String>,
    age: Option<u32>,
    phone: Option<String>,
}

struct CustomerValidator {
    rules: EntityValidator<Customer>,
}

impl CustomerValidator {
    fn new() -> Self {
        let mut rules = EntityValidator::<Customer>::new();

        rules
            .rule_for(|c| c.name.clone())
            .not_null()
            .must(
                |name| name.as_ref().is_none_or(|n| !n.is_empty()),
                "Name must not be empty.",
            );

        rules
            .rule_for(|c| c.email.clone())
            .not_null()
            .must(
                |email| email.as_ref().is_none_or(|e| e.contains('@')),
                "Email must be valid.",
            );

        rules
            .rule_for(|c| c.age)
            .greater_than_or_equal_to(18)
            .with_message("Must be 18 or older.");

        rules
            .rule_for(|c| c.phone.clone())
            .matches(r"\+?[0-9 ]{7,15}")
            .expect("phone pattern compiles");

        Self { rules }
    }
}

impl Validator<Customer> for CustomerValidator {
    fn rules(&self) -> &EntityValidator<Customer> {
        &self.rules
    }
}

fn report(label: &str, outcome: &ValidationOutcome) {
    println!("\n{label}:");
    if outcome.is_valid() {
        println!("  valid");
    } else {
        println!("  {} error(s):", outcome.len());
        for error in outcome {
            println!("    - {error}");
        }
    }
}

fn main() {
    println!("Customer Validation Example");
    println!("===========================");

    let validator = CustomerValidator::new();

    let good = Customer {
        name: Some("Ada Lovelace".into()),
        email: Some("ada@example.com".into()),
        age: Some(36),
        phone: Some("+44 20 7946 0000".into()),
    };
    report("Complete customer", &validator.validate(&good));

    let missing = Customer {
        name: None,
        email: None,
        age: None,
        phone: None,
    };
    report("Missing fields", &validator.validate(&missing));

    let bad = Customer {
        name: Some(String::new()),
        email: Some("ada.example.com".into()),
        age: Some(16),
        phone: Some("call me".into()),
    };
    report("Invalid fields", &validator.validate(&bad));

    // Adapters usually want a Result
    match validator.validate(&bad).into_result() {
        Ok(()) => println!("\naccepted"),
        Err(errors) => println!("\nrejected: {}", errors.join(" | ")),
    }
}
