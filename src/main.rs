use clap::Parser;
use flightops_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic with signal handling
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        // Set up graceful shutdown handling
        let shutdown_signal = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install CTRL+C signal handler");
        };

        // Run the main command, abandoning the batch on Ctrl+C; neither
        // sink is touched until the batch is complete, so interruption
        // leaves no partial output behind
        tokio::select! {
            result = commands::run(args) => {
                result
            }
            _ = shutdown_signal => {
                eprintln!("\nReceived CTRL+C, shutting down gracefully...");
                Err(flightops_processor::Error::processing_interrupted(
                    "Processing interrupted by user".to_string()
                ))
            }
        }
    });

    match result {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("FlightOps Processor - Flight Operations Batch Pipeline");
    println!("======================================================");
    println!();
    println!("Cleanse a batch of flight-operation records and derive operational KPIs,");
    println!("persisting curated records to SQLite and exporting a metrics summary as JSON.");
    println!();
    println!("USAGE:");
    println!("    flightops-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    run         Run the full pipeline with persistence and export (main command)");
    println!("    metrics     Cleanse and compute KPIs only, printing the report");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Run the full pipeline on ./flights.csv:");
    println!("    flightops-processor run");
    println!();
    println!("    # Run with explicit paths:");
    println!("    flightops-processor run --input /data/march.csv --output /data/reports \\");
    println!("                            --database /data/flights.db");
    println!();
    println!("    # Inspect an export without writing anything:");
    println!("    flightops-processor metrics --input /data/march.csv --output-format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    flightops-processor <COMMAND> --help");
}
