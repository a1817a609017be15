//! Command-line argument definitions for the FlightOps processor
//!
//! This module defines the complete CLI interface using the clap derive
//! API, together with argument validation and logging-level helpers.

use crate::config::Config;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the FlightOps processor
///
/// Cleanses batches of airline flight-operation records and derives
/// operational KPIs, persisting curated records to SQLite and exporting the
/// metrics report as JSON.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "flightops-processor",
    version,
    about = "Cleanse flight-operation records and derive operational KPIs",
    long_about = "A batch pipeline that ingests a flight-operations CSV export, removes \
                  duplicate and invalid records, derives seven operational KPIs from \
                  timestamp arithmetic, and writes both the curated record set (SQLite, \
                  idempotent upsert) and a metrics summary (JSON)."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the FlightOps processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run the full pipeline: cleanse, compute metrics, persist, export
    Run(RunArgs),
    /// Cleanse and compute metrics only, printing the report without sinks
    Metrics(MetricsArgs),
}

/// Arguments for the run command (full pipeline)
#[derive(Debug, Clone, Parser)]
pub struct RunArgs {
    /// Input path to the flight-operations CSV export
    ///
    /// If not specified, defaults to ./flights.csv
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input path to the flight-operations CSV export"
    )]
    pub input_path: Option<PathBuf>,

    /// Output directory for the exported metrics document
    ///
    /// Will be created if it doesn't exist. If not specified, defaults to
    /// ./output
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output directory for the exported metrics document"
    )]
    pub output_dir: Option<PathBuf>,

    /// Path to the SQLite database receiving curated records
    ///
    /// If not specified, a persistent database in the user data directory
    /// is used so repeated runs upsert into the same store.
    #[arg(
        long = "database",
        value_name = "FILE",
        help = "Path to the SQLite database receiving curated records"
    )]
    pub database_path: Option<PathBuf>,

    /// Perform a dry run without touching either sink
    ///
    /// Parses, cleanses, and computes metrics, then reports what would be
    /// written without persisting records or exporting the document.
    #[arg(long = "dry-run", help = "Cleanse and compute without writing to sinks")]
    pub dry_run: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for the final report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the final report"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the metrics command (no-sink analysis)
#[derive(Debug, Clone, Parser)]
pub struct MetricsArgs {
    /// Input path to the flight-operations CSV export
    ///
    /// If not specified, defaults to ./flights.csv
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input path to the flight-operations CSV export"
    )]
    pub input_path: Option<PathBuf>,

    /// Output format for the metrics report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the metrics report"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for the final report
#[derive(Debug, Clone, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl RunArgs {
    /// Validate the run command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input_path) = &self.input_path {
            if !input_path.exists() {
                return Err(Error::configuration(format!(
                    "Input path does not exist: {}",
                    input_path.display()
                )));
            }

            if !input_path.is_file() {
                return Err(Error::configuration(format!(
                    "Input path is not a file: {}",
                    input_path.display()
                )));
            }
        }

        Ok(())
    }

    /// Build the pipeline configuration from these arguments
    pub fn to_config(&self) -> Config {
        let mut config = Config::default();
        if let Some(input_path) = &self.input_path {
            config = config.with_input_path(input_path.clone());
        }
        if let Some(output_dir) = &self.output_dir {
            config = config.with_output_dir(output_dir.clone());
        }
        if let Some(database_path) = &self.database_path {
            config = config.with_database_path(database_path.clone());
        }
        config
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl MetricsArgs {
    /// Validate the metrics command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input_path) = &self.input_path {
            if !input_path.exists() {
                return Err(Error::configuration(format!(
                    "Input path does not exist: {}",
                    input_path.display()
                )));
            }
        }

        Ok(())
    }

    /// Build the pipeline configuration from these arguments
    pub fn to_config(&self) -> Config {
        let mut config = Config::default();
        if let Some(input_path) = &self.input_path {
            config = config.with_input_path(input_path.clone());
        }
        config
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            input_path: None,
            output_dir: None,
            database_path: None,
            dry_run: false,
            verbose: 0,
            quiet: false,
            output_format: OutputFormat::Human,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_input_file(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("flights.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "flight_id").unwrap();
        path
    }

    #[test]
    fn test_run_args_validation() {
        let temp_dir = TempDir::new().unwrap();
        let input_path = write_input_file(&temp_dir);

        let args = RunArgs {
            input_path: Some(input_path),
            ..Default::default()
        };
        assert!(args.validate().is_ok());

        // Unspecified input falls back to the default path, checked later
        let args = RunArgs::default();
        assert!(args.validate().is_ok());

        // Nonexistent input path
        let args = RunArgs {
            input_path: Some(PathBuf::from("/nonexistent/flights.csv")),
            ..Default::default()
        };
        assert!(args.validate().is_err());

        // Directory instead of a file
        let args = RunArgs {
            input_path: Some(temp_dir.path().to_path_buf()),
            ..Default::default()
        };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_run_args_to_config() {
        let args = RunArgs {
            input_path: Some(PathBuf::from("/data/march.csv")),
            output_dir: Some(PathBuf::from("/tmp/out")),
            database_path: Some(PathBuf::from("/tmp/out/flights.db")),
            ..Default::default()
        };

        let config = args.to_config();
        assert_eq!(config.ingestion.input_path, PathBuf::from("/data/march.csv"));
        assert_eq!(
            config.output.metrics_path(),
            PathBuf::from("/tmp/out").join("metrics.json")
        );
        assert_eq!(
            config.output.database_path,
            Some(PathBuf::from("/tmp/out/flights.db"))
        );
    }

    #[test]
    fn test_log_level() {
        let mut args = RunArgs::default();

        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_show_progress() {
        let mut args = RunArgs::default();
        assert!(args.show_progress());

        args.quiet = true;
        assert!(!args.show_progress());
    }
}
