//! Decoding JSON bodies into records and encoding reports back to JSON

#![cfg(feature = "serde")]

use fieldwise::prelude::*;
use serde_json::json;

fn signup() -> Schema {
    Schema::new()
        .field(
            "name",
            FieldRule::text()
                .required()
                .max_length(20)
                .with_hook(hook::letters_only()),
        )
        .field("age", FieldRule::integer().required())
        .field("email", FieldRule::email().required())
        .field("tags", FieldRule::sequence().max_length(3))
        .validator(|r: &Record| match r.get("age").and_then(Value::as_i64) {
            Some(age) if age < 18 => Err(RecordFailure::field("age", "age must be >= 18")),
            _ => Ok(()),
        })
}

fn decode(body: serde_json::Value) -> Record {
    serde_json::from_value(body).expect("JSON object decodes into a record")
}

#[test]
fn test_json_body_round_trips_to_report() {
    let input = decode(json!({
        "name": "Krishna123",
        "age": 17,
        "email": "krish@example.com",
        "tags": ["a", "b", "c", "d"]
    }));

    let report = match signup().validate(&input).expect("no fault") {
        Validation::Failure(report) => report,
        Validation::Success(()) => panic!("expected a report"),
    };

    assert_eq!(
        serde_json::to_value(&report).expect("serializable"),
        json!({
            "name": ["must contain letters only"],
            "age": ["age must be >= 18"],
            "tags": ["length must be at most 3"]
        })
    );
}

#[test]
fn test_json_floats_and_nulls() {
    let schema = Schema::new()
        .field("age", FieldRule::integer().required())
        .field("nickname", FieldRule::text());

    let input = decode(json!({ "age": 25.0, "nickname": null }));
    assert!(schema.validate(&input).expect("no fault").is_success());

    let input = decode(json!({ "age": null }));
    let report = schema
        .validate(&input)
        .expect("no fault")
        .into_result()
        .expect_err("null counts as missing");
    assert_eq!(
        serde_json::to_string(&report).expect("serializable"),
        r#"{"age":["field is required"]}"#
    );
}

#[test]
fn test_nested_objects_decode() {
    let input = decode(json!({ "address": { "city": "Pune", "zip": 411001 } }));
    let address = input
        .get("address")
        .and_then(Value::as_object)
        .expect("object value");
    assert_eq!(address.get("city"), Some(&Value::from("Pune")));
    assert_eq!(address.get("zip"), Some(&Value::from(411001)));
}

#[test]
fn test_report_deserializes() {
    let report: ErrorReport =
        serde_json::from_str(r#"{"non_field_errors":["passwords do not match"]}"#)
            .expect("valid report JSON");
    assert_eq!(
        report.non_field_errors(),
        Some(&["passwords do not match".to_string()][..])
    );
}
