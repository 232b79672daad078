use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{display_value, flatten};

/// Format output as a table using the tabled crate.
pub fn print_table(value: &Value) {
    match value {
        Value::Array(items) => print_array_table(items),
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                // Simulation envelope: result table plus warnings/methodology
                print_field_table(result);
                if let Some(Value::Array(warnings)) = map.get("warnings") {
                    if !warnings.is_empty() {
                        println!("\nWarnings:");
                        for warning in warnings {
                            println!("  - {}", display_value(warning));
                        }
                    }
                }
                if let Some(Value::String(methodology)) = map.get("methodology") {
                    println!("\nMethodology: {}", methodology);
                }
            } else if let Some(recommendation) = map.get("recommendation") {
                // Recommendation outcome: table plus the fallback reason
                print_field_table(recommendation);
                if let Some(Value::String(reason)) = map.get("reason") {
                    println!("\nReason: {}", reason);
                }
            } else {
                print_field_table(value);
            }
        }
        _ => println!("{}", value),
    }
}

/// Two-column Field/Value table over the flattened object.
fn print_field_table(value: &Value) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (field, rendered) in flatten(value) {
        builder.push_record([field.as_str(), rendered.as_str()]);
    }
    println!("{}", Table::from(builder));
}

/// One row per element; headers come from the first object's keys.
fn print_array_table(items: &[Value]) {
    if items.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = items.first() {
        let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
        let mut builder = Builder::default();
        builder.push_record(headers.clone());
        for item in items {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(*h).map(display_value).unwrap_or_default())
                    .collect();
                builder.push_record(row);
            }
        }
        println!("{}", Table::from(builder));
    } else {
        for item in items {
            println!("{}", display_value(item));
        }
    }
}
