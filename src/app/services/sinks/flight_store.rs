//! SQLite persistence for curated flight records
//!
//! The store keys the `flights` table on `flight_id` and writes batches
//! with `INSERT OR IGNORE` inside a single transaction: re-submitting an
//! identical curated batch leaves the stored logical state unchanged, and a
//! failed batch leaves no partial rows behind.

use rusqlite::{Connection, params};
use std::path::Path;
use tracing::{debug, info};

use super::CuratedSink;
use crate::app::models::FlightRecord;
use crate::constants::{FLIGHTS_TABLE, STORAGE_DATE_FORMAT, STORAGE_DATETIME_FORMAT};
use crate::{Error, Result};

/// Outcome of one persistence call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistStats {
    /// Records handed to the store
    pub submitted: usize,
    /// Records newly inserted
    pub inserted: usize,
    /// Records skipped because their flight_id already existed
    pub skipped: usize,
}

/// SQLite-backed store for curated flight records
#[derive(Debug)]
pub struct FlightStore {
    conn: Connection,
}

impl FlightStore {
    /// Open (or create) a store at the given path
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self> {
        let db_path = db_path.as_ref();

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    Error::io(
                        format!("Failed to create database directory {}", parent.display()),
                        e,
                    )
                })?;
            }
        }

        let conn = Connection::open(db_path)
            .map_err(|e| Error::store(format!("Failed to open {}", db_path.display()), e))?;

        let store = Self { conn };
        store.init_schema()?;

        info!("Flight store ready at {}", db_path.display());
        Ok(store)
    }

    /// Open an in-memory store, useful for tests and dry runs
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::store("Failed to open in-memory database", e))?;

        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Create the flights table and supporting index if absent
    fn init_schema(&self) -> Result<()> {
        self.conn.execute(
            &format!(
                "CREATE TABLE IF NOT EXISTS {} (
                    flight_id TEXT PRIMARY KEY,
                    aircraft_id TEXT NOT NULL,
                    origin TEXT NOT NULL,
                    destination TEXT NOT NULL,
                    scheduled_departure TEXT NOT NULL,
                    actual_departure TEXT,
                    scheduled_arrival TEXT NOT NULL,
                    actual_arrival TEXT,
                    status TEXT NOT NULL,
                    delay_minutes REAL,
                    fare_usd REAL NOT NULL,
                    flight_date TEXT NOT NULL
                )",
                FLIGHTS_TABLE
            ),
            [],
        )?;

        self.conn.execute(
            &format!(
                "CREATE INDEX IF NOT EXISTS idx_flight_date ON {}(flight_date)",
                FLIGHTS_TABLE
            ),
            [],
        )?;

        Ok(())
    }

    /// Number of stored flight records
    pub fn count(&self) -> Result<u64> {
        let count: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", FLIGHTS_TABLE),
            [],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }
}

impl CuratedSink for FlightStore {
    fn persist(&mut self, records: &[FlightRecord]) -> Result<PersistStats> {
        let tx = self.conn.transaction()?;
        let mut inserted = 0;

        {
            let mut statement = tx.prepare(&format!(
                "INSERT OR IGNORE INTO {} (
                    flight_id, aircraft_id, origin, destination,
                    scheduled_departure, actual_departure,
                    scheduled_arrival, actual_arrival,
                    status, delay_minutes, fare_usd, flight_date
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
                FLIGHTS_TABLE
            ))?;

            for record in records {
                inserted += statement.execute(params![
                    record.flight_id,
                    record.aircraft_id,
                    record.origin,
                    record.destination,
                    format_timestamp(&record.scheduled_departure),
                    record.actual_departure.as_ref().map(format_timestamp),
                    format_timestamp(&record.scheduled_arrival),
                    record.actual_arrival.as_ref().map(format_timestamp),
                    record.status.as_str(),
                    // The CSV-supplied delay is untrusted and never stored;
                    // delay is recomputed from timestamps at report time
                    Option::<f64>::None,
                    record.fare_usd,
                    record.flight_date.format(STORAGE_DATE_FORMAT).to_string(),
                ])?;
            }
        }

        tx.commit()?;

        let stats = PersistStats {
            submitted: records.len(),
            inserted,
            skipped: records.len() - inserted,
        };

        info!(
            "Persisted batch: {} submitted, {} inserted, {} already present",
            stats.submitted, stats.inserted, stats.skipped
        );
        if stats.skipped > 0 {
            debug!("Skipped records were already stored under the same flight_id");
        }

        Ok(stats)
    }
}

/// Render a timestamp in the storage format
fn format_timestamp(timestamp: &chrono::DateTime<chrono::Utc>) -> String {
    timestamp.format(STORAGE_DATETIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{FlightRecord, FlightStatus};
    use chrono::{NaiveDate, TimeZone, Utc};
    use tempfile::tempdir;

    fn create_test_record(flight_id: &str) -> FlightRecord {
        FlightRecord {
            flight_id: flight_id.to_string(),
            aircraft_id: "B737".to_string(),
            origin: "LHR".to_string(),
            destination: "JFK".to_string(),
            scheduled_departure: Utc.with_ymd_and_hms(2025, 3, 14, 9, 0, 0).unwrap(),
            scheduled_arrival: Utc.with_ymd_and_hms(2025, 3, 14, 17, 0, 0).unwrap(),
            actual_departure: Some(Utc.with_ymd_and_hms(2025, 3, 14, 9, 20, 0).unwrap()),
            actual_arrival: Some(Utc.with_ymd_and_hms(2025, 3, 14, 17, 10, 0).unwrap()),
            status: FlightStatus::Completed,
            fare_usd: 450.0,
            flight_date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        }
    }

    #[test]
    fn test_persist_basic_batch() {
        let mut store = FlightStore::open_in_memory().unwrap();

        let records = vec![create_test_record("FL100"), create_test_record("FL101")];
        let stats = store.persist(&records).unwrap();

        assert_eq!(stats.submitted, 2);
        assert_eq!(stats.inserted, 2);
        assert_eq!(stats.skipped, 0);
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_repersist_is_idempotent() {
        let mut store = FlightStore::open_in_memory().unwrap();
        let records = vec![create_test_record("FL100"), create_test_record("FL101")];

        store.persist(&records).unwrap();
        let second = store.persist(&records).unwrap();

        assert_eq!(second.inserted, 0);
        assert_eq!(second.skipped, 2);
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_existing_row_is_not_overwritten() {
        let mut store = FlightStore::open_in_memory().unwrap();

        store.persist(&[create_test_record("FL100")]).unwrap();

        let mut changed = create_test_record("FL100");
        changed.fare_usd = 999.0;
        store.persist(&[changed]).unwrap();

        let fare: f64 = store
            .conn
            .query_row(
                "SELECT fare_usd FROM flights WHERE flight_id = ?1",
                params!["FL100"],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(fare, 450.0);
    }

    #[test]
    fn test_cancelled_record_stores_null_actuals() {
        let mut store = FlightStore::open_in_memory().unwrap();

        let mut record = create_test_record("FL200");
        record.actual_departure = None;
        record.actual_arrival = None;
        record.status = FlightStatus::Cancelled;
        record.fare_usd = 0.0;
        store.persist(&[record]).unwrap();

        let (actual_departure, status): (Option<String>, String) = store
            .conn
            .query_row(
                "SELECT actual_departure, status FROM flights WHERE flight_id = ?1",
                params!["FL200"],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();

        assert_eq!(actual_departure, None);
        assert_eq!(status, "cancelled");
    }

    #[test]
    fn test_delay_minutes_is_stored_as_null() {
        let mut store = FlightStore::open_in_memory().unwrap();
        store.persist(&[create_test_record("FL100")]).unwrap();

        let delay: Option<f64> = store
            .conn
            .query_row(
                "SELECT delay_minutes FROM flights WHERE flight_id = ?1",
                params!["FL100"],
                |row| row.get(0),
            )
            .unwrap();

        assert_eq!(delay, None);
    }

    #[test]
    fn test_store_survives_reopen() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("flights.db");

        {
            let mut store = FlightStore::open(&db_path).unwrap();
            store.persist(&[create_test_record("FL100")]).unwrap();
        }

        let store = FlightStore::open(&db_path).unwrap();
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_empty_batch_is_a_no_op() {
        let mut store = FlightStore::open_in_memory().unwrap();
        let stats = store.persist(&[]).unwrap();

        assert_eq!(stats, PersistStats::default());
        assert_eq!(store.count().unwrap(), 0);
    }
}
