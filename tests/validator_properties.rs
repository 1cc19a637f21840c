//! Property-based tests for validation outcomes

use fluentrule::{EntityValidator, PropertyRule, ValidationOutcome};
use proptest::prelude::*;

fn bounded_rule(min: i64, max: i64) -> PropertyRule<i64, i64> {
    let mut rule = PropertyRule::new(|n: &i64| *n);
    rule.greater_than_or_equal_to(min)
        .with_message("below")
        .less_than_or_equal_to(max)
        .with_message("above");
    rule
}

proptest! {
    #[test]
    fn prop_valid_iff_no_check_fails(
        value in any::<i64>(),
        min in -1000i64..1000,
        span in 0i64..1000
    ) {
        let max = min + span;
        let mut validator = EntityValidator::new();
        validator.add_rule(bounded_rule(min, max));

        let outcome = validator.validate(&value);
        prop_assert_eq!(outcome.is_valid(), value >= min && value <= max);
    }

    #[test]
    fn prop_messages_follow_rule_then_check_order(
        values in prop::collection::vec(any::<bool>(), 1..20)
    ) {
        let mut validator = EntityValidator::<Vec<bool>>::new();
        for (i, _) in values.iter().enumerate() {
            validator
                .rule_for(move |v: &Vec<bool>| v[i])
                .must(|ok| *ok, format!("rule {i} first"))
                .must(|ok| *ok, format!("rule {i} second"));
        }

        let expected: Vec<String> = values
            .iter()
            .enumerate()
            .filter(|(_, ok)| !**ok)
            .flat_map(|(i, _)| [format!("rule {i} first"), format!("rule {i} second")])
            .collect();

        let outcome = validator.validate(&values);
        prop_assert_eq!(outcome.errors(), expected.as_slice());
        prop_assert_eq!(validator.validate(&values), outcome);
    }

    #[test]
    fn prop_absent_values_pass_range_and_format_checks(
        min in any::<i32>(),
        max in any::<i32>()
    ) {
        let mut rule = PropertyRule::new(|v: &Option<i32>| *v);
        rule.greater_than(min)
            .less_than(max)
            .greater_than_or_equal_to(min)
            .less_than_or_equal_to(max);

        prop_assert!(rule.validate(&None).is_empty());
    }

    #[test]
    fn prop_length_matches_char_count(text in "\\PC{0,12}", min in 0usize..6, span in 0usize..6) {
        let max = min + span;
        let mut rule = PropertyRule::new(|s: &String| s.clone());
        rule.length(min, max);

        let len = text.chars().count();
        prop_assert_eq!(rule.validate(&text).is_empty(), len >= min && len <= max);
    }

    #[test]
    fn prop_outcome_validity_matches_errors(errors in prop::collection::vec(".*", 0..5)) {
        let empty = errors.is_empty();
        let outcome = ValidationOutcome::new(Some(errors));
        prop_assert_eq!(outcome.is_valid(), empty);
    }
}
