//! Command implementations for the FlightOps processor CLI
//!
//! This module contains the command execution logic, progress reporting,
//! and final report printing for the CLI interface. Each command is
//! implemented in its own module.

pub mod metrics;
pub mod run;
pub mod shared;

// Re-export the main types and functions for backward compatibility
pub use shared::PipelineStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the FlightOps processor
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `run`: the full pipeline with persistence and metrics export
/// - `metrics`: cleanse and compute only, printing the report without sinks
pub async fn run(args: Args) -> Result<PipelineStats> {
    match args.get_command() {
        Commands::Run(run_args) => run::run_pipeline(run_args).await,
        Commands::Metrics(metrics_args) => metrics::run_metrics(metrics_args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_stats_re_export() {
        // Verify that PipelineStats is properly re-exported
        let stats = PipelineStats::default();
        assert_eq!(stats.rows_read, 0);
        assert_eq!(stats.total_removed(), 0);
    }
}
