//! JSON Report Example
//!
//! Decodes request bodies with serde_json, validates them, and answers with
//! either `{"ok": true}` or the error report as a JSON object.
//!
//! Run with: cargo run --example json_report --features serde

use fieldwise::prelude::*;

fn order_schema() -> Schema {
    Schema::new()
        .field("sku", FieldRule::text().required().min_length(4))
        .field("quantity", FieldRule::integer().required())
        .field("delivery", FieldRule::date())
        .field("channel", FieldRule::choice(["web", "store", "phone"]))
        .field("notes", FieldRule::text().max_length(140))
        .validator(|r: &Record| match r.get("quantity").and_then(Value::as_i64) {
            Some(q) if q <= 0 => Err(RecordFailure::field("quantity", "quantity must be positive")),
            _ => Ok(()),
        })
}

fn respond(schema: &Schema, body: &str) -> Result<String, Box<dyn std::error::Error>> {
    let record: Record = serde_json::from_str(body)?;
    let response = match schema.validate(&record)? {
        Validation::Success(()) => serde_json::json!({ "ok": true }),
        Validation::Failure(report) => serde_json::json!({ "ok": false, "errors": report }),
    };
    Ok(serde_json::to_string_pretty(&response)?)
}

fn main() {
    let schema = order_schema();
    let bodies = [
        r#"{"sku": "AB-12", "quantity": 2, "delivery": "2026-11-03", "channel": "web"}"#,
        r#"{"sku": "AB", "quantity": 0, "delivery": "next tuesday", "channel": "fax"}"#,
        r#"{"quantity": 1.0}"#,
        r#"["not", "an", "object"]"#,
    ];

    for body in bodies {
        println!("\n> {}", body);
        match respond(&schema, body) {
            Ok(json) => println!("{}", json),
            Err(e) => println!("rejected: {}", e),
        }
    }
}
