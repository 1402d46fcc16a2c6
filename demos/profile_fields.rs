//! Profile Fields Example
//!
//! Walks through each built-in field kind on its own, using
//! `FieldRule::validate` directly instead of a whole schema.

use fieldwise::predicate::{ends_with, PredicateExt};
use fieldwise::prelude::*;

fn check(label: &str, rule: &FieldRule, value: Option<Value>) {
    let shown = value
        .as_ref()
        .map_or_else(|| "<missing>".to_string(), Value::to_string);
    match rule.validate(value.as_ref()) {
        Validation::Success(()) => println!("  {:<10} {:<28} ok", label, shown),
        Validation::Failure(err) => {
            println!("  {:<10} {:<28} {:?}: {}", label, shown, err.kind(), err)
        }
    }
}

fn main() {
    println!("\n=== Text ===");
    let nickname = FieldRule::text().min_length(2).max_length(12);
    check("nickname", &nickname, Some("K".into()));
    check("nickname", &nickname, Some("Kris".into()));
    check("nickname", &nickname, Some(42.into()));
    check("nickname", &nickname, None);

    println!("\n=== Numbers ===");
    let age = FieldRule::integer().required();
    check("age", &age, Some(25.0.into()));
    check("age", &age, Some(2.5.into()));
    let score = FieldRule::float()
        .with_hook(hook::float(fieldwise::predicate::between(0.0, 1.0), "score must be within 0..1"));
    check("score", &score, Some(7.into()));
    check("score", &score, Some(0.25.into()));

    println!("\n=== Choice ===");
    let status = FieldRule::choice(["active", "inactive", "pending"]).required();
    check("status", &status, Some("pending".into()));
    check("status", &status, Some("blocked".into()));

    println!("\n=== Dates ===");
    check("born", &FieldRule::date(), Some("1999-12-31".into()));
    check("born", &FieldRule::date(), Some("1999-02-30".into()));
    check(
        "born",
        &FieldRule::date_with_format("%d/%m/%Y"),
        Some("31/12/1999".into()),
    );

    println!("\n=== Email and URL ===");
    let work_email = FieldRule::email().required().with_hook(hook::text(
        ends_with("@example.com").or(ends_with("@example.org")),
        "must be a company address",
    ));
    check("email", &work_email, Some("ana@example.com".into()));
    check("email", &work_email, Some("ana@gmail.com".into()));
    check("email", &work_email, Some("not-an-email".into()));
    check("website", &FieldRule::url(), Some("https://example.com".into()));
    check("website", &FieldRule::url(), Some("mailto:ana@example.com".into()));

    println!("\n=== Sequences ===");
    let tags = FieldRule::sequence().min_length(1).max_length(3);
    check("tags", &tags, Some(vec!["rust"].into()));
    check("tags", &tags, Some(Vec::<Value>::new().into()));
    check("tags", &tags, Some(vec!["a", "b", "c", "d"].into()));
}
