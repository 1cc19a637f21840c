//! Demonstrates tracing integration with validators
//!
//! Run with: cargo run --example tracing_demo --features tracing

use fluentrule::EntityValidator;

struct Order {
    quantity: i64,
    coupon: Option<String>,
}

fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Starting tracing demo");

    let mut rules = EntityValidator::<Order>::new();
    rules
        .rule_for(|o| o.quantity)
        .greater_than(0)
        .less_than_or_equal_to(100);
    rules.rule_for(|o| o.coupon.clone()).length(4, 12);

    let orders = [
        Order {
            quantity: 3,
            coupon: None,
        },
        Order {
            quantity: 0,
            coupon: Some("XY".into()),
        },
    ];

    for order in &orders {
        let outcome = rules.validate(order);
        tracing::info!(valid = outcome.is_valid(), errors = %outcome, "order checked");
    }
}
