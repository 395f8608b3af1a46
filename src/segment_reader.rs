use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::model::{CliError, PropertyMap, PropertyValue};

/// a thin, swappable row adapter: reads either NDJSON (one `{wkb_hex,
/// properties}` object per line) or a CSV with a `wkb_hex` column plus one
/// column per property, and produces the `(wkb_bytes, PropertyMap)` pairs
/// the core `convert` entry point expects. this is glue to make the binary
/// runnable end-to-end, not a production tabular reader.
pub fn read_segments(path: &Path) -> Result<Vec<(Vec<u8>, PropertyMap)>, CliError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ndjson") | Some("jsonl") => read_ndjson(path),
        Some("csv") => read_csv(path),
        other => Err(CliError::RowDecodeError(
            0,
            format!("unsupported input extension: {other:?}"),
        )),
    }
}

#[derive(Deserialize)]
struct NdjsonRow {
    wkb_hex: String,
    #[serde(default)]
    properties: HashMap<String, Value>,
}

fn read_ndjson(path: &Path) -> Result<Vec<(Vec<u8>, PropertyMap)>, CliError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut out = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let row: NdjsonRow = serde_json::from_str(&line)
            .map_err(|e| CliError::RowDecodeError(line_no as u64, e.to_string()))?;
        let wkb = hex::decode(row.wkb_hex.trim())
            .map_err(|e| CliError::RowDecodeError(line_no as u64, e.to_string()))?;
        let properties = row.properties.into_iter().map(|(k, v)| (k, json_to_property(v))).collect();
        out.push((wkb, properties));
    }
    Ok(out)
}

fn read_csv(path: &Path) -> Result<Vec<(Vec<u8>, PropertyMap)>, CliError> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = reader.headers()?.clone();
    let mut out = Vec::new();

    for (row_no, record) in reader.records().enumerate() {
        let record = record?;
        let mut wkb = None;
        let mut properties = PropertyMap::new();

        for (header, field) in headers.iter().zip(record.iter()) {
            if header == "wkb_hex" {
                wkb = Some(hex::decode(field.trim()).map_err(|e| CliError::RowDecodeError(row_no as u64, e.to_string()))?);
            } else if !field.is_empty() {
                properties.insert(header.to_string(), PropertyValue::Str(field.to_string()));
            }
        }

        let wkb = wkb.ok_or_else(|| CliError::RowDecodeError(row_no as u64, "missing wkb_hex column".to_string()))?;
        out.push((wkb, properties));
    }
    Ok(out)
}

fn json_to_property(value: Value) -> PropertyValue {
    match value {
        Value::Null => PropertyValue::Null,
        Value::Bool(b) => PropertyValue::Bool(b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                PropertyValue::Int(i)
            } else {
                PropertyValue::Float(n.as_f64().unwrap_or(0.0))
            }
        }
        Value::String(s) => PropertyValue::Str(s),
        other => PropertyValue::Str(other.to_string()),
    }
}

impl From<csv::Error> for CliError {
    fn from(e: csv::Error) -> Self {
        CliError::RowDecodeError(0, e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn reads_ndjson_rows() {
        let mut file = tempfile::Builder::new().suffix(".ndjson").tempfile().unwrap();
        writeln!(file, r#"{{"wkb_hex": "0102", "properties": {{"Klass_181": 3}}}}"#).unwrap();
        let rows = read_segments(file.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0, vec![0x01, 0x02]);
        assert_eq!(rows[0].1.get("Klass_181"), Some(&PropertyValue::Int(3)));
    }

    #[test]
    fn reads_csv_rows() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "wkb_hex,Klass_181").unwrap();
        writeln!(file, "0102,3").unwrap();
        let rows = read_segments(file.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0, vec![0x01, 0x02]);
        assert_eq!(rows[0].1.get("Klass_181"), Some(&PropertyValue::Str("3".to_string())));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let file = NamedTempFile::new().unwrap();
        let err = read_segments(file.path()).unwrap_err();
        assert!(matches!(err, CliError::RowDecodeError(_, _)));
    }
}
