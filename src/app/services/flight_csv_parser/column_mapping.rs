//! Header column mapping for flight-operations CSV files

use crate::constants::REQUIRED_COLUMNS;
use crate::{Error, Result};
use csv::StringRecord;
use std::collections::HashMap;

/// Mapping from column names to positions in the CSV header
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Column name to zero-based index
    pub name_to_index: HashMap<String, usize>,
}

impl ColumnMapping {
    /// Build a mapping from a header row, verifying all required columns
    ///
    /// Returns an ingestion error naming every missing column, raised before
    /// any data row is read.
    pub fn from_headers(headers: &StringRecord, file: &str) -> Result<Self> {
        let name_to_index: HashMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(index, name)| (name.trim().to_string(), index))
            .collect();

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .filter(|column| !name_to_index.contains_key(**column))
            .copied()
            .collect();

        if !missing.is_empty() {
            return Err(Error::ingestion(
                file,
                format!("Missing required columns: {}", missing.join(", ")),
            ));
        }

        Ok(Self { name_to_index })
    }

    /// Get the index of a column by name
    pub fn index_of(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }
}
