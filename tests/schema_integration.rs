//! End-to-end validation runs over realistic schemas

use fieldwise::prelude::*;
use fieldwise::predicate::{between, len_min, starts_with};
use fieldwise::{assert_field_errors, assert_invalid, assert_valid};
use std::sync::{Arc, Barrier};
use std::thread;

fn adult(record: &Record) -> Result<(), RecordFailure> {
    match record.get("age").and_then(Value::as_i64) {
        Some(age) if age < 18 => Err(RecordFailure::field("age", "age must be >= 18")),
        _ => Ok(()),
    }
}

fn user_schema() -> Schema {
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
        .field("is_active", FieldRule::boolean())
        .validator(adult)
}

fn run(schema: &Schema, record: &Record) -> Outcome {
    schema.validate(record).expect("no validator faults")
}

#[test]
fn test_valid_user() {
    let input = record! {
        "name" => "Krishna",
        "age" => 25,
        "email" => "krish@example.com",
        "is_active" => true,
    };
    assert_valid!(run(&user_schema(), &input));
}

#[test]
fn test_hook_and_record_validator_failures_compose() {
    let input = record! {
        "name" => "Krishna123",
        "age" => 17,
        "email" => "krish@example.com",
        "is_active" => true,
    };
    let report = assert_invalid!(run(&user_schema(), &input));

    assert_eq!(report.len(), 2);
    assert_field_errors!(report, "name", ["must contain letters only"]);
    assert_field_errors!(report, "age", ["age must be >= 18"]);
    assert_field_errors!(report, NON_FIELD_ERRORS, []);
}

#[test]
fn test_missing_required_and_optional_fields() {
    let report = assert_invalid!(run(&user_schema(), &record! {}));

    assert_field_errors!(report, "name", ["field is required"]);
    assert_field_errors!(report, "age", ["field is required"]);
    assert_field_errors!(report, "email", ["field is required"]);
    assert_field_errors!(report, "is_active", []);
    assert_eq!(
        report.fields().collect::<Vec<_>>(),
        vec!["name", "age", "email"]
    );
}

#[test]
fn test_integer_rule_accepts_whole_floats() {
    let schema = Schema::new().field("age", FieldRule::integer().required());

    assert_valid!(run(&schema, &record! { "age" => 42 }));
    assert_valid!(run(&schema, &record! { "age" => 25.0 }));

    let report = assert_invalid!(run(&schema, &record! { "age" => 2.5 }));
    assert_field_errors!(report, "age", ["value must be integer"]);

    let report = assert_invalid!(run(&schema, &record! { "age" => "42" }));
    assert_field_errors!(report, "age", ["value must be integer"]);
}

#[test]
fn test_choice_rule() {
    let schema = Schema::new().field(
        "status",
        FieldRule::choice(["active", "inactive", "pending"]).required(),
    );

    assert_valid!(run(&schema, &record! { "status" => "active" }));

    let report = assert_invalid!(run(&schema, &record! { "status" => "blocked" }));
    assert_field_errors!(
        report,
        "status",
        [r#"value must be one of ["active", "inactive", "pending"]"#]
    );
}

#[test]
fn test_sequence_bounds() {
    let schema = Schema::new().field("tags", FieldRule::sequence().min_length(3).max_length(5));

    let report = assert_invalid!(run(&schema, &record! { "tags" => vec![1, 3] }));
    assert_field_errors!(report, "tags", ["length must be at least 3"]);

    assert_valid!(run(&schema, &record! { "tags" => vec![1, 2, 3] }));

    let report = assert_invalid!(run(&schema, &record! { "tags" => vec![1, 2, 3, 4, 5, 6] }));
    assert_field_errors!(report, "tags", ["length must be at most 5"]);

    let report = assert_invalid!(run(&schema, &record! { "tags" => "a,b,c" }));
    assert_field_errors!(report, "tags", ["value must be list"]);
}

#[test]
fn test_date_and_url_fields() {
    let schema = Schema::new()
        .field("birthday", FieldRule::date())
        .field("website", FieldRule::url());

    assert_valid!(run(
        &schema,
        &record! { "birthday" => "1999-12-31", "website" => "https://example.com/about" }
    ));

    let report = assert_invalid!(run(
        &schema,
        &record! { "birthday" => "31/12/1999", "website" => "ftp://example.com" }
    ));
    assert_field_errors!(report, "birthday", ["value must match format YYYY-MM-DD"]);
    assert_field_errors!(report, "website", ["URL scheme must be http or https"]);

    let report = assert_invalid!(run(&schema, &record! { "website" => "not a url" }));
    assert_field_errors!(report, "website", ["value must be a valid URL"]);
}

#[test]
fn test_hooks_built_from_predicates() {
    let schema = Schema::new()
        .field(
            "code",
            FieldRule::text()
                .required()
                .with_hook(hook::text(starts_with("SKU-"), "must start with SKU-"))
                .with_hook(hook::text(len_min(8), "code is too short")),
        )
        .field(
            "quantity",
            FieldRule::integer().with_hook(hook::integer(between(1, 99), "must be 1..=99")),
        );

    assert_valid!(run(&schema, &record! { "code" => "SKU-0042", "quantity" => 3 }));

    // First failing hook wins; later hooks are not consulted.
    let report = assert_invalid!(run(&schema, &record! { "code" => "X1", "quantity" => 0 }));
    assert_field_errors!(report, "code", ["must start with SKU-"]);
    assert_field_errors!(report, "quantity", ["must be 1..=99"]);
}

#[test]
fn test_hooks_do_not_run_after_builtin_failure() {
    let schema = Schema::new().field(
        "name",
        FieldRule::text()
            .max_length(3)
            .with_hook(|_: &Value| -> Result<(), String> { Err("hook ran".into()) }),
    );

    let report = assert_invalid!(run(&schema, &record! { "name" => "abcdef" }));
    assert_field_errors!(report, "name", ["length must be at most 3"]);

    // Absent optional values skip hooks entirely.
    assert_valid!(run(&schema, &record! {}));
}

#[test]
fn test_cross_field_non_field_error() {
    let schema = Schema::new()
        .field("password", FieldRule::text().required())
        .field("confirm", FieldRule::text().required())
        .validator(|r: &Record| -> Result<(), RecordFailure> {
            if r.get("password") != r.get("confirm") {
                return Err(RecordFailure::non_field("passwords do not match"));
            }
            Ok(())
        });

    let report = assert_invalid!(run(
        &schema,
        &record! { "password" => "hunter22", "confirm" => "hunter2" }
    ));
    assert_eq!(
        report.non_field_errors(),
        Some(&["passwords do not match".to_string()][..])
    );
}

#[test]
fn test_validators_run_in_order_and_accumulate() {
    let schema = Schema::new()
        .validator(|_: &Record| -> Result<(), RecordFailure> { Err("first".into()) })
        .validator(|_: &Record| -> Result<(), RecordFailure> { Err("second".into()) })
        .validator(|_: &Record| -> Result<(), RecordFailure> { Ok(()) });

    let report = assert_invalid!(run(&schema, &record! {}));
    assert_field_errors!(report, NON_FIELD_ERRORS, ["first", "second"]);
}

#[test]
fn test_fatal_validator_surfaces_as_fault() {
    let schema = user_schema().validator(|_: &Record| -> Result<(), RecordFailure> {
        Err(RecordFailure::fatal("lookup table missing"))
    });

    let fault = schema
        .validate(&record! { "name" => "Ana", "age" => 30, "email" => "ana@example.com" })
        .expect_err("fault propagates");
    assert_eq!(fault.index(), 1);
    assert_eq!(
        fault.to_string(),
        "record validator #1 failed: lookup table missing"
    );
}

#[test]
fn test_validation_is_idempotent() {
    let schema = user_schema();
    let input = record! { "name" => "Krishna123", "age" => 17, "email" => "nope" };

    let first = run(&schema, &input);
    let second = run(&schema, &input);
    assert_eq!(first, second);
}

#[test]
fn test_shared_schema_across_threads() {
    let schema = Arc::new(user_schema());
    let start = Arc::new(Barrier::new(8));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let schema = Arc::clone(&schema);
            let start = Arc::clone(&start);
            thread::spawn(move || {
                let input = record! {
                    "name" => "Krishna",
                    "age" => 10 + i * 2,
                    "email" => "krish@example.com",
                };
                // Every thread is alive before any run begins.
                start.wait();
                (i, schema.validate(&input).expect("no fault"))
            })
        })
        .collect();

    for handle in handles {
        let (i, outcome) = handle.join().expect("thread completed");
        assert_eq!(outcome.is_success(), 10 + i * 2 >= 18, "run {}", i);
    }
}

#[test]
fn test_report_merge_across_schemas() {
    let account = Schema::new().field("email", FieldRule::email().required());
    let profile = Schema::new()
        .field("email", FieldRule::text().min_length(50))
        .field("bio", FieldRule::text().required());
    let input = record! { "email" => "bad" };

    let merged = run(&account, &input).and(run(&profile, &input));
    let report = assert_invalid!(merged);
    assert_field_errors!(report, "email", ["invalid email", "length must be at least 50"]);
    assert_field_errors!(report, "bio", ["field is required"]);
}
