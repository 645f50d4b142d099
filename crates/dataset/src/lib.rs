//! CSV-to-JSON record loading for the query service.
//!
//! The combined dataset and the predictions file are plain CSVs on disk;
//! the service returns them as one JSON object per row. Cells that have no
//! JSON representation (NaN, infinities, empty) are normalized to null.

use serde_json::{Map, Number, Value};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// One CSV row keyed by its header names.
pub type Record = Map<String, Value>;

/// Load a CSV file as one JSON object per row.
pub fn load_records(path: &Path) -> Result<Vec<Record>, DatasetError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut record = Record::new();
        for (header, field) in headers.iter().zip(row.iter()) {
            record.insert(header.to_string(), cell_value(field));
        }
        records.push(record);
    }
    Ok(records)
}

/// Best-effort typing of one CSV cell.
fn cell_value(field: &str) -> Value {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return Value::Number(n.into());
    }
    if let Ok(n) = trimmed.parse::<f64>() {
        // NaN and infinities have no JSON representation; serve null instead.
        return Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null);
    }
    Value::String(field.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn csv_file(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn rows_become_header_keyed_objects() {
        let (_dir, path) = csv_file("name,SS_2024,rank\nIIT Madras,18.5,1\nIIT Delhi,17.2,2\n");
        let records = load_records(&path).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["name"], Value::String("IIT Madras".into()));
        assert_eq!(records[0]["SS_2024"], serde_json::json!(18.5));
        assert_eq!(records[0]["rank"], serde_json::json!(1));
    }

    #[test]
    fn non_finite_and_empty_cells_become_null() {
        let (_dir, path) = csv_file("a,b,c,d\nNaN,inf,-inf,\n");
        let records = load_records(&path).unwrap();

        assert_eq!(records[0]["a"], Value::Null);
        assert_eq!(records[0]["b"], Value::Null);
        assert_eq!(records[0]["c"], Value::Null);
        assert_eq!(records[0]["d"], Value::Null);
    }

    #[test]
    fn integers_stay_integers() {
        let (_dir, path) = csv_file("id,score\n42,42.0\n");
        let records = load_records(&path).unwrap();

        assert_eq!(records[0]["id"], serde_json::json!(42));
        assert_eq!(records[0]["score"], serde_json::json!(42.0));
    }

    #[test]
    fn result_is_json_serializable() {
        let (_dir, path) = csv_file("a,b\nNaN,1.5\n");
        let records = load_records(&path).unwrap();
        let json = serde_json::to_string(&records).unwrap();
        assert_eq!(json, r#"[{"a":null,"b":1.5}]"#);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_records(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::Csv(_)));
    }
}
