//! Main CSV parser for flight-operations exports

use csv::ReaderBuilder;
use std::path::Path;
use tracing::{debug, info};

use super::column_mapping::ColumnMapping;
use super::record_parser::parse_flight_record;
use super::stats::ParseStats;
use crate::app::models::RawFlightRecord;
use crate::{Error, Result};

/// Result of parsing one flight-operations CSV file
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    /// One raw record per data row, in source order
    pub records: Vec<RawFlightRecord>,
    /// Parse statistics for reporting
    pub stats: ParseStats,
}

/// Parser for flight-operations CSV files
#[derive(Debug, Default)]
pub struct FlightCsvParser;

impl FlightCsvParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a flight-operations CSV file into raw records
    ///
    /// Verifies that every required column is present before reading any
    /// data row; a missing column is a fatal ingestion error. Individual
    /// field problems never abort the parse — they surface as absent fields
    /// on the raw records, to be judged by the cleansing stage.
    pub fn parse_file(&self, path: &Path) -> Result<ParseOutcome> {
        let file_display = path.display().to_string();

        if !path.exists() {
            return Err(Error::file_not_found(file_display));
        }

        info!("Reading flight operations CSV: {}", file_display);

        let mut reader = ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| {
                Error::csv_parsing(&file_display, "Failed to open CSV reader", Some(e))
            })?;

        let headers = reader
            .headers()
            .map_err(|e| Error::csv_parsing(&file_display, "Failed to read header row", Some(e)))?
            .clone();

        let mapping = ColumnMapping::from_headers(&headers, &file_display)?;
        debug!("Header verified: {} columns", headers.len());

        let mut stats = ParseStats::new();
        let mut records = Vec::new();

        for (row_index, row) in reader.records().enumerate() {
            let row = row.map_err(|e| {
                Error::csv_parsing(
                    &file_display,
                    // Header occupies line 1
                    format!("Failed to read row at line {}", row_index + 2),
                    Some(e),
                )
            })?;

            records.push(parse_flight_record(&row, &mapping, &mut stats));
            stats.rows_read += 1;
        }

        info!("{}", stats.summary());

        Ok(ParseOutcome { records, stats })
    }
}
