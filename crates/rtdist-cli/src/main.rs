//! # rtdist
//!
//! Command-line interface for response time distribution graphs.
//!
//! ## Usage
//!
//! ```bash
//! # Bucket ticks for the default thresholds (500ms / 1,500ms)
//! rtdist ticks
//!
//! # Classify one sample
//! rtdist --satisfied 100 --tolerated 500 classify --elapsed 300
//! rtdist classify --elapsed 20 --failed
//!
//! # Effective configuration
//! rtdist --config rtdist.toml config --show
//! ```

use clap::{Parser, Subcommand};
use rtdist_core::ResponseTimeDistributionGraph;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::CliError;
pub use output::Output;

/// Response time distribution CLI
#[derive(Parser, Debug)]
#[command(name = "rtdist")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Satisfied threshold in milliseconds
    #[arg(long, global = true, allow_negative_numbers = true)]
    satisfied: Option<i64>,

    /// Tolerated threshold in milliseconds
    #[arg(long, global = true, allow_negative_numbers = true)]
    tolerated: Option<i64>,

    /// Label locale (en, fr)
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

/// CLI commands
#[derive(Debug, Subcommand)]
enum Commands {
    /// List the axis ticks of every bucket
    Ticks,
    /// Classify a single sample
    Classify(commands::classify::ClassifyArgs),
    /// Show the effective configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Err(e) = run(&cli) {
        if cli.json {
            println!(
                "{}",
                serde_json::json!({
                    "error": e.to_string(),
                    "success": false
                })
            );
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = config::resolve(
        cli.config.as_deref(),
        config::Overrides {
            satisfied: cli.satisfied,
            tolerated: cli.tolerated,
            locale: cli.locale.clone(),
        },
    )?;
    let graph = ResponseTimeDistributionGraph::from_config(&config)?;
    graph.thresholds().warn_if_degenerate();

    match &cli.command {
        Commands::Ticks => commands::ticks::execute(&graph, cli.json),
        Commands::Classify(args) => args.execute(&graph, cli.json),
        Commands::Config { show } => {
            if *show {
                Output::new(cli.json)
                    .field_i64("satisfied_threshold", config.satisfied_threshold)
                    .field_i64("tolerated_threshold", config.tolerated_threshold)
                    .field("locale", &config.locale)
                    .message(&format!(
                        "Satisfied threshold: {}ms\nTolerated threshold: {}ms\nLocale: {}",
                        config.satisfied_threshold, config.tolerated_threshold, config.locale
                    ))
                    .print();
            } else {
                Output::new(cli.json)
                    .message("Use --show to display the effective configuration")
                    .print();
            }
            Ok(())
        }
    }
}
