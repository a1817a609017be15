//! Parse statistics for CSV ingestion

/// Statistics for a single CSV parse pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseStats {
    /// Number of data rows read from the source
    pub rows_read: usize,
    /// Number of absent values in fields the pipeline treats as meaningful
    pub fields_missing: usize,
    /// Number of non-empty values that could not be parsed to their type
    pub fields_unparseable: usize,
}

impl ParseStats {
    /// Create new empty parse statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether every field of every row parsed cleanly
    pub fn is_clean(&self) -> bool {
        self.fields_missing == 0 && self.fields_unparseable == 0
    }

    /// Get summary of the parse pass
    pub fn summary(&self) -> String {
        format!(
            "Parsed {} rows ({} missing values, {} unparseable values)",
            self.rows_read, self.fields_missing, self.fields_unparseable
        )
    }
}
