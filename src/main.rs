use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use fleet_usage::analyzer::ProcessOptions;
use fleet_usage::{logging, FleetAnalyzer};

#[derive(Parser)]
#[command(name = "fleet-usage")]
#[command(about = "Fast Rust implementation for fleet vehicle usage analysis and reporting")]
#[command(version = "1.0.0")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show per-vehicle statistics (fuel cost, distance, cost per km, frequent drivers)
    Vehicles {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
        /// Show first N rows
        #[arg(long)]
        limit: Option<usize>,
        /// Export the summary table as CSV (dated default filename when no path given)
        #[arg(long)]
        export: Option<Option<PathBuf>>,
    },
    /// Show per-driver statistics (fuel cost, distance, trips, days, frequent vehicles)
    Drivers {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
        /// Show first N rows
        #[arg(long)]
        limit: Option<usize>,
        /// Export the summary table as CSV (dated default filename when no path given)
        #[arg(long)]
        export: Option<Option<PathBuf>>,
    },
    /// Show the current raw dataset
    Raw {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
        /// Show first N records
        #[arg(long)]
        limit: Option<usize>,
        /// Export the raw dataset as CSV (dated default filename when no path given)
        #[arg(long)]
        export: Option<Option<PathBuf>>,
    },
    /// Replace the current dataset with records from a CSV file
    Import {
        /// CSV file to import
        file: PathBuf,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Write the blank dataset template
    Template {
        /// Destination path (default: template.csv)
        dest: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging();
    let cli = Cli::parse();

    // Handle command with its specific options
    match cli.command.unwrap_or(Commands::Vehicles {
        json: false,
        limit: None,
        export: None,
    }) {
        Commands::Vehicles { json, limit, export } => {
            let (mut analyzer, options) = parse_common_args(json, limit, export, "vehicles");

            match analyzer.run_command("vehicles", options).await {
                Ok(_) => Ok(()),
                Err(e) => handle_error(e, json),
            }
        }
        Commands::Drivers { json, limit, export } => {
            let (mut analyzer, options) = parse_common_args(json, limit, export, "drivers");

            match analyzer.run_command("drivers", options).await {
                Ok(_) => Ok(()),
                Err(e) => handle_error(e, json),
            }
        }
        Commands::Raw { json, limit, export } => {
            let (mut analyzer, options) = parse_common_args(json, limit, export, "raw");

            match analyzer.run_command("raw", options).await {
                Ok(_) => Ok(()),
                Err(e) => handle_error(e, json),
            }
        }
        Commands::Import { file, json } => {
            let analyzer = FleetAnalyzer::new();

            match analyzer.import(&file, json).await {
                Ok(_) => Ok(()),
                Err(e) => handle_error(e, json),
            }
        }
        Commands::Template { dest } => {
            let analyzer = FleetAnalyzer::new();
            let dest = dest.unwrap_or_else(|| PathBuf::from("template.csv"));

            match analyzer.export_template(&dest).await {
                Ok(_) => Ok(()),
                Err(e) => handle_error(e, false),
            }
        }
    }
}

fn parse_common_args(
    json: bool,
    limit: Option<usize>,
    export: Option<Option<PathBuf>>,
    command: &str,
) -> (FleetAnalyzer, ProcessOptions) {
    let analyzer = FleetAnalyzer::new();

    let options = ProcessOptions {
        command: command.to_string(),
        json_output: json,
        limit,
        export,
    };

    (analyzer, options)
}

fn handle_error(e: anyhow::Error, json: bool) -> Result<(), anyhow::Error> {
    if json {
        println!("{{\"error\": \"{}\"}}", e);
    } else {
        eprintln!("Error: {}", e);
    }
    process::exit(1);
}
