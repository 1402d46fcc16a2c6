//! Demonstrates the debug events emitted during validation
//!
//! Run with: cargo run --example tracing_run --features tracing

use fieldwise::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let schema = Schema::new()
        .field(
            "name",
            FieldRule::text()
                .required()
                .with_hook(hook::letters_only()),
        )
        .field("age", FieldRule::integer().required())
        .field("website", FieldRule::url())
        .validator(|r: &Record| match r.get("age").and_then(Value::as_i64) {
            Some(age) if age < 18 => Err(RecordFailure::field("age", "age must be >= 18")),
            _ => Ok(()),
        });

    tracing::info!("validating a clean record");
    let clean = record! { "name" => "Ana", "age" => 30 };
    if let Ok(outcome) = schema.validate(&clean) {
        tracing::info!(valid = outcome.is_success(), "first run done");
    }

    tracing::info!("validating a broken record");
    let broken = record! { "name" => "Ana99", "age" => 12, "website" => "gopher://old" };
    if let Ok(Validation::Failure(report)) = schema.validate(&broken) {
        tracing::info!(keys = report.len(), "second run done:\n{}", report);
    }

    tracing::info!("validating with a faulty validator");
    let faulty = schema.clone().validator(|_: &Record| -> Result<(), RecordFailure> {
        Err(RecordFailure::fatal("currency table not loaded"))
    });
    if let Err(fault) = faulty.validate(&clean) {
        tracing::error!("run aborted: {}", fault);
    }
}
