use serde::Serialize;
use std::path::Path;
use thiserror::Error;

use crate::params::{header_names, PARAM_COUNT};

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// One college's extracted score row: exactly 17 values for one ranking year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterRecord {
    pub year: u16,
    pub values: [f64; PARAM_COUNT],
}

impl ParameterRecord {
    pub fn new(year: u16, values: [f64; PARAM_COUNT]) -> Self {
        Self { year, values }
    }

    /// Write the record as a one-row CSV file: `{ABBR}_{year}` headers plus
    /// the 17 values.
    pub fn write_csv(&self, path: &Path) -> Result<(), RecordError> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(header_names(self.year))?;
        writer.write_record(self.values.iter().map(|v| v.to_string()))?;
        writer.flush()?;
        Ok(())
    }
}
