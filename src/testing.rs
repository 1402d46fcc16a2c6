//! Testing utilities
//!
//! Assertion macros for validation outcomes and, with the `proptest` feature,
//! a strategy generating arbitrary [`Value`](crate::Value)s.
//!
//! # Examples
//!
//! ```rust
//! use fieldwise::{assert_field_errors, assert_invalid, assert_valid, record, FieldRule, Schema};
//!
//! let schema = Schema::new().field("age", FieldRule::integer().required());
//!
//! assert_valid!(schema.validate(&record! { "age" => 30 }).unwrap());
//!
//! let report = assert_invalid!(schema.validate(&record! {}).unwrap());
//! assert_field_errors!(report, "age", ["field is required"]);
//! ```

/// Assert that a validation succeeded.
///
/// Panics with the errors if it is a `Failure`.
#[macro_export]
macro_rules! assert_valid {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success(_) => {}
            $crate::Validation::Failure(e) => {
                panic!("Expected valid, got errors: {:?}", e);
            }
        }
    };
}

/// Assert that a validation failed and evaluate to its error.
///
/// ```rust
/// use fieldwise::{assert_invalid, FieldError, FieldRule};
///
/// let err = assert_invalid!(FieldRule::text().required().validate(None));
/// assert_eq!(err, FieldError::Required);
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(e) => e,
            $crate::Validation::Success(v) => {
                panic!("Expected errors, got valid: {:?}", v);
            }
        }
    };
}

/// Assert the exact messages an [`ErrorReport`](crate::ErrorReport) holds for one key.
///
/// An empty list asserts the key is absent.
#[macro_export]
macro_rules! assert_field_errors {
    ($report:expr, $field:expr, [$($message:expr),* $(,)?]) => {{
        let expected: ::std::vec::Vec<&str> = ::std::vec![$($message),*];
        let actual: ::std::vec::Vec<&str> = $report
            .get($field)
            .map(|messages| messages.iter().map(::std::string::String::as_str).collect())
            .unwrap_or_default();
        assert_eq!(actual, expected, "messages for {:?}", $field);
    }};
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for crate::Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use crate::Value;

        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::Int),
            any::<f64>().prop_map(Value::Float),
            "[a-zA-Z0-9 @.:/_-]{0,24}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::vec(("[a-z]{1,6}", inner), 0..4)
                    .prop_map(|pairs| Value::Object(pairs.into_iter().collect())),
            ]
        })
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::{ErrorReport, FieldError, Validation};

    #[test]
    fn assert_valid_macro() {
        assert_valid!(Validation::<(), ErrorReport>::Success(()));
    }

    #[test]
    fn assert_invalid_macro_yields_error() {
        let err = assert_invalid!(Validation::<(), _>::failure(FieldError::Required));
        assert_eq!(err, FieldError::Required);
    }

    #[test]
    fn assert_field_errors_macro() {
        let mut report = ErrorReport::new();
        report.add_field_error("age", "too young");
        assert_field_errors!(report, "age", ["too young"]);
        assert_field_errors!(report, "name", []);
    }

    #[test]
    #[should_panic(expected = "Expected valid, got errors")]
    fn assert_valid_panics_on_failure() {
        assert_valid!(Validation::<(), _>::failure(FieldError::Required));
    }

    #[test]
    #[should_panic(expected = "Expected errors, got valid")]
    fn assert_invalid_panics_on_success() {
        let _ = assert_invalid!(Validation::<(), FieldError>::success(()));
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::{FieldRule, Value};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn optional_boolean_accepts_anything(v in any::<Value>()) {
                prop_assert!(FieldRule::boolean().validate(Some(&v)).is_success());
            }

            #[test]
            fn text_rule_accepts_exactly_strings(v in any::<Value>()) {
                let accepted = FieldRule::text().validate(Some(&v)).is_success();
                prop_assert_eq!(accepted, v.is_null() || v.as_str().is_some());
            }
        }
    }
}
