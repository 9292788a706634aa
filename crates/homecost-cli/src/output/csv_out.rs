use serde_json::Value;
use std::io;

/// Write output as CSV to stdout.
///
/// When the result carries a repayment schedule, the year-by-year rows are
/// what a spreadsheet wants; otherwise fall back to field/value pairs.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Some(Value::Array(schedule)) = lookup_schedule(result) {
        write_records(&mut wtr, schedule);
    } else {
        match result {
            Value::Object(map) => {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in map {
                    if !val.is_object() && !val.is_array() {
                        let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
                    }
                }
            }
            Value::Array(arr) => {
                write_records(&mut wtr, arr);
            }
            _ => {
                let _ = wtr.write_record([&format_csv_value(result)]);
            }
        }
    }

    let _ = wtr.flush();
}

/// The schedule lives at the result root for a repayment analysis, or one
/// level down inside the embedded analysis of a costs estimate.
fn lookup_schedule(result: &Value) -> Option<&Value> {
    result
        .get("schedule")
        .or_else(|| result.get("repayment").and_then(|r| r.get("schedule")))
        .filter(|v| v.as_array().is_some_and(|a| !a.is_empty()))
}

fn write_records(wtr: &mut csv::Writer<io::StdoutLock<'_>>, arr: &[Value]) {
    if arr.is_empty() {
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
        let _ = wtr.write_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| {
                        map.get(*h)
                            .map(|v| format_csv_value(v))
                            .unwrap_or_default()
                    })
                    .collect();
                let _ = wtr.write_record(&row);
            }
        }
    } else {
        for item in arr {
            let _ = wtr.write_record([&format_csv_value(item)]);
        }
    }
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
