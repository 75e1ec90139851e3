use crate::error::CoreResult;
use crate::normalized::model::NormalizedCollection;
use crate::normalized::record::{js_string, FieldValue, Record};
use serde_json::Value;

/// One CSV row per id, in `ids` order. With no explicit `columns`, the header
/// is every field name in first-seen order. Ids without an item are skipped.
pub fn render_collection_csv(
    collection: &NormalizedCollection<Record>,
    columns: &[&str],
) -> CoreResult<String> {
    let header: Vec<String> = if columns.is_empty() {
        let mut seen: Vec<String> = Vec::new();
        for r in collection.iter() {
            for k in r.keys() {
                if !seen.iter().any(|s| s == k) {
                    seen.push(k.to_string());
                }
            }
        }
        seen
    } else {
        columns.iter().map(|c| c.to_string()).collect()
    };

    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(vec![]);
    wtr.write_record(&header)?;
    for r in collection.iter() {
        wtr.write_record(header.iter().map(|k| cell(r.get(k))))?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn cell(v: &FieldValue) -> String {
    match v.as_json() {
        Some(inner @ (Value::Object(_) | Value::Array(_))) => inner.to_string(),
        Some(inner) => js_string(inner),
        None => String::new(),
    }
}
