use serde_json::Value;

use super::display_value;

/// Print just the key answer from the output.
///
/// Alert lists print one `id: severity` line per alert. Objects are unwrapped
/// from their envelope ("recommendation" or "result"), then probed for
/// well-known answer fields before falling back to the first field.
pub fn print_minimal(value: &Value) {
    if let Value::Array(items) = value {
        for item in items {
            match (item.get("id"), item.get("severity")) {
                (Some(id), Some(severity)) => {
                    println!("{}: {}", display_value(id), display_value(severity))
                }
                _ => println!("{}", display_value(item)),
            }
        }
        return;
    }

    let core = value
        .get("recommendation")
        .or_else(|| value.get("result"))
        .unwrap_or(value);

    // A full recommendation answers with the legal form
    if let Some(form) = core.pointer("/company_form/form") {
        println!("{}", display_value(form));
        return;
    }

    // Priority list of key output fields
    let priority_keys = ["total_taxes", "total_charges", "form", "value", "regime"];
    if let Value::Object(map) = core {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", display_value(val));
                    return;
                }
            }
        }
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, display_value(val));
            return;
        }
    }

    println!("{}", display_value(core));
}
