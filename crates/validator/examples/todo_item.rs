//! Validating a todo item with a registry-backed validator.
//!
//! Run with `RUST_LOG=fieldcheck_validator=trace` to see each failing rule.

use fieldcheck_validator::prelude::*;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Debug)]
struct TodoItem {
    id: Uuid,
    label: String,
    int_value: i32,
    contact: Option<String>,
    tags: Vec<String>,
}

fn todo_validator() -> Validator<TodoItem> {
    Validator::builder()
        .rule("Id", |t: &TodoItem| &t.id, guid_not_empty())
        .rules(
            "Label",
            |t: &TodoItem| t.label.as_str(),
            [not_empty(), longer_than(3)],
        )
        .rule("IntValue", |t: &TodoItem| &t.int_value, greater_than(0))
        .rule(
            Field::named("Contact").display_as("Contact phone"),
            |t: &TodoItem| &t.contact,
            optional([e164_phone()]),
        )
        .rule(
            Field::named("Tags").with_message("Tags must be short words"),
            |t: &TodoItem| t.tags.as_slice(),
            for_each(length_between(2, 12)),
        )
        .build()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let validator = todo_validator();

    let good = TodoItem {
        id: Uuid::new_v4(),
        label: "Water the plants".to_string(),
        int_value: 2,
        contact: Some("+14155550123".to_string()),
        tags: vec!["home".to_string()],
    };

    match validator.validate(good) {
        Ok(item) => println!("✓ '{}' is valid", item.label),
        Err(report) => println!("✗ unexpected: {report}"),
    }

    let bad = TodoItem {
        id: Uuid::nil(),
        label: String::new(),
        int_value: 0,
        contact: Some("555-0123".to_string()),
        tags: vec!["x".to_string(), "garden".to_string()],
    };

    match validator.validate(bad) {
        Ok(_) => println!("✓ unexpectedly valid"),
        Err(report) => {
            println!("✗ {} fields failed:", report.len());
            for field in &report {
                println!("  {field}");
            }
        }
    }
}
