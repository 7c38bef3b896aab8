//! histoquote CLI - Historical quote tables and end-of-day ticks.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use histoquote_lib::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

mod commands;
mod display;

use display::Output;

#[derive(Parser)]
#[command(name = "histoquote")]
#[command(about = "Historical quote tables and end-of-day ticks", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format (csv, json, ndjson)
    #[arg(short, long, default_value = "json", global = true)]
    format: OutputFormat,

    /// Pretty-print JSON array output
    #[arg(long, global = true)]
    pretty: bool,

    /// CSV field delimiter
    #[arg(long, default_value = ",", global = true)]
    delimiter: char,

    /// Output file path. Defaults to stdout.
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Base URL of the quote source
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long, global = true)]
    timeout: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the historical quote table of an instrument
    Quotes {
        /// Instrument symbol (e.g., 1rPAF)
        symbol: String,

        /// Start date (DD/MM/YYYY). Defaults to one month ago.
        #[arg(short, long)]
        start: Option<String>,

        /// History duration (1M..11M, 1Y, 2Y, 3Y)
        #[arg(short, long, default_value = "3M")]
        duration: String,

        /// Sampling period in days (1, 7, 30, 365)
        #[arg(short, long, default_value = "1")]
        period: String,
    },

    /// Download end-of-day ticks of an instrument
    Ticks {
        /// Instrument symbol (e.g., 1rPAF)
        symbol: String,

        /// Number of sessions
        #[arg(short, long, default_value = "1")]
        days: u32,

        /// Fail on the first undecodable timestamp instead of keeping it
        #[arg(long)]
        strict: bool,
    },

    /// Search instruments by keyword
    Search {
        /// Search keywords
        query: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let mut config = ClientConfig {
        timeout: cli.timeout.map(Duration::from_secs),
        ..Default::default()
    };
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    let source = Arc::new(HttpSource::new(&config)?);
    let output = Output::new(cli.output, cli.format, cli.pretty, cli.delimiter)?;

    match command {
        Commands::Quotes {
            symbol,
            start,
            duration,
            period,
        } => {
            let aggregator = QuoteAggregator::new(source, config.base_url);
            commands::quotes::quotes(
                &aggregator,
                &symbol,
                start.as_deref(),
                &duration,
                &period,
                &output,
            )
            .await
        }
        Commands::Ticks {
            symbol,
            days,
            strict,
        } => {
            let policy = if strict {
                TimestampPolicy::Strict
            } else {
                TimestampPolicy::Lenient
            };
            let feed = TickFeed::new(source, config.base_url).with_policy(policy);
            commands::ticks::ticks(&feed, &symbol, days, &output).await
        }
        Commands::Search { query } => {
            let search = AssetSearch::new(source, config.base_url);
            commands::search::search(&search, &query, &output).await
        }
    }
}

/// Logs to stderr at a level picked from `-v` unless `RUST_LOG` is set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .init();
}
