//! User Signup Example
//!
//! Validates signup records against one shared schema:
//! - Required and optional fields
//! - A custom hook on the name field
//! - A record-level age check attributed to the `age` field
//! - A cross-field password check filed under `non_field_errors`

use fieldwise::prelude::*;

fn signup_schema() -> Schema {
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
        .field("password", FieldRule::text().required().min_length(8))
        .field("confirm", FieldRule::text().required())
        .field("is_active", FieldRule::boolean())
        .validator(minimum_age)
        .validator(passwords_match)
}

fn minimum_age(record: &Record) -> Result<(), RecordFailure> {
    match record.get("age").and_then(Value::as_i64) {
        Some(age) if age < 18 => Err(RecordFailure::field("age", "age must be >= 18")),
        _ => Ok(()),
    }
}

fn passwords_match(record: &Record) -> Result<(), RecordFailure> {
    if record.get("password") != record.get("confirm") {
        return Err(RecordFailure::non_field("passwords do not match"));
    }
    Ok(())
}

fn show(title: &str, schema: &Schema, input: &Record) {
    println!("\n{}", title);
    match schema.validate(input) {
        Ok(Validation::Success(())) => println!("  valid"),
        Ok(Validation::Failure(report)) => {
            for (field, messages) in report.iter() {
                println!("  {}: {:?}", field, messages);
            }
        }
        Err(fault) => println!("  aborted: {}", fault),
    }
}

fn main() {
    println!("User Signup Validation");
    println!("======================");

    let schema = signup_schema();

    show(
        "Test 1: Valid signup",
        &schema,
        &record! {
            "name" => "Krishna",
            "age" => 25,
            "email" => "krish@example.com",
            "password" => "correct horse",
            "confirm" => "correct horse",
            "is_active" => true,
        },
    );

    show(
        "Test 2: Bad name, underage, mismatched passwords",
        &schema,
        &record! {
            "name" => "Krishna123",
            "age" => 17,
            "email" => "krish@example.com",
            "password" => "correct horse",
            "confirm" => "battery staple",
        },
    );

    show(
        "Test 3: Mostly empty",
        &schema,
        &record! { "email" => "", "age" => 2.5 },
    );
}

/* Expected Output:

User Signup Validation
======================

Test 1: Valid signup
  valid

Test 2: Bad name, underage, mismatched passwords
  name: ["must contain letters only"]
  age: ["age must be >= 18"]
  non_field_errors: ["passwords do not match"]

Test 3: Mostly empty
  name: ["field is required"]
  age: ["value must be integer"]
  email: ["field is required"]
  password: ["field is required"]
  confirm: ["field is required"]
*/
