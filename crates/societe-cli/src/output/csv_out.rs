use serde_json::Value;
use std::io;

use super::{display_value, flatten};

/// Write output as CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Array(items) => write_array(&mut wtr, items),
        Value::Object(map) => {
            // Unwrap envelopes so the CSV carries the payload only
            let core = map
                .get("result")
                .or_else(|| map.get("recommendation"))
                .unwrap_or(value);
            let _ = wtr.write_record(["field", "value"]);
            for (field, rendered) in flatten(core) {
                let _ = wtr.write_record([field.as_str(), rendered.as_str()]);
            }
        }
        _ => {
            let _ = wtr.write_record([display_value(value)]);
        }
    }

    let _ = wtr.flush();
}

/// Header row from the first object's keys, one record per element.
fn write_array(wtr: &mut csv::Writer<io::StdoutLock<'_>>, items: &[Value]) {
    if items.is_empty() {
        return;
    }

    if let Some(Value::Object(first)) = items.first() {
        let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
        let _ = wtr.write_record(&headers);
        for item in items {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(*h).map(display_value).unwrap_or_default())
                    .collect();
                let _ = wtr.write_record(&row);
            }
        }
    } else {
        for item in items {
            let _ = wtr.write_record([display_value(item)]);
        }
    }
}
