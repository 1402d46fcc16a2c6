//! Property-based tests for field rules and report accumulation

use fieldwise::{ErrorReport, FieldError, FieldRule, Record, Schema, Semigroup, Value};
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e6..1.0e6f64).prop_map(Value::Float),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::String),
    ]
}

fn report() -> impl Strategy<Value = ErrorReport> {
    prop::collection::vec(("[a-d]", "[a-z]{1,4}"), 0..6)
        .prop_map(|pairs| pairs.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_text_length_bounds(s in "\\PC{0,30}", min in 0usize..10, extra in 0usize..10) {
        let max = min + extra;
        let rule = FieldRule::text().min_length(min).max_length(max);
        let len = s.chars().count();

        let result = rule.validate(Some(&Value::from(s.as_str())));
        if len < min && min > 0 {
            prop_assert_eq!(result.error(), Some(&FieldError::TooShort { min, actual: len }));
        } else if len > max && max > 0 {
            prop_assert_eq!(result.error(), Some(&FieldError::TooLong { max, actual: len }));
        } else {
            prop_assert!(result.is_success());
        }
    }

    #[test]
    fn prop_optional_rules_accept_absence(v in scalar()) {
        let rules = [
            FieldRule::text(),
            FieldRule::integer(),
            FieldRule::float(),
            FieldRule::email(),
            FieldRule::url(),
            FieldRule::date(),
            FieldRule::sequence(),
        ];
        for rule in &rules {
            prop_assert!(rule.validate(None).is_success());
            prop_assert!(rule.validate(Some(&Value::Null)).is_success());
            // Required turns absence into exactly one error.
            let required = rule.clone().required();
            let outcome = required.validate(None);
            prop_assert_eq!(outcome.error(), Some(&FieldError::Required));
        }
        // Some value either passes or yields exactly one error; never panics.
        for rule in &rules {
            let _ = rule.validate(Some(&v));
        }
    }

    #[test]
    fn prop_integer_rule_matches_whole_numbers(f in -1.0e9..1.0e9f64) {
        let accepted = FieldRule::integer().validate(Some(&Value::Float(f))).is_success();
        prop_assert_eq!(accepted, f.fract() == 0.0);
    }

    #[test]
    fn prop_one_message_per_failing_field(
        values in prop::collection::vec(scalar(), 1..6)
    ) {
        let names: Vec<String> = (0..values.len()).map(|i| format!("f{}", i)).collect();
        let schema: Schema = names
            .iter()
            .map(|name| (name.clone(), FieldRule::integer().required()))
            .collect();
        let input: Record = names.iter().cloned().zip(values).collect();

        match schema.validate(&input).expect("no validators") {
            fieldwise::Validation::Success(()) => {}
            fieldwise::Validation::Failure(report) => {
                prop_assert_eq!(report.message_count(), report.len());
                for field in report.fields() {
                    prop_assert!(schema.rule(field).is_some());
                }
            }
        }
    }

    #[test]
    fn prop_report_combine_is_associative(a in report(), b in report(), c in report()) {
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_report_combine_keeps_every_message(a in report(), b in report()) {
        let total = a.message_count() + b.message_count();
        prop_assert_eq!(a.combine(b).message_count(), total);
    }

    #[test]
    fn prop_choice_membership(pick in 0usize..3, other in "[a-z]{6,8}") {
        let choices = ["red", "green", "blue"];
        let rule = FieldRule::choice(choices).required();

        prop_assert!(rule.validate(Some(&Value::from(choices[pick]))).is_success());
        prop_assume!(!choices.contains(&other.as_str()));
        prop_assert!(rule.validate(Some(&Value::from(other))).is_failure());
    }
}
