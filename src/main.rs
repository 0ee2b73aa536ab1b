//! Command-line entry point: annotate an OHLC CSV with detected patterns.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};

use candlesift::prelude::*;
use candlesift::{chart, io};

#[derive(Parser)]
#[command(name = "candlesift", version)]
#[command(about = "Detect common candlestick patterns in an OHLC CSV")]
struct Cli {
    /// Input CSV with open/high/low/close columns (case-insensitive),
    /// plus any passthrough columns such as a date
    input: PathBuf,

    /// Write the annotated CSV here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Render a text chart of the most recent 50 rows to stderr
    #[arg(long)]
    chart: bool,
}

fn run(cli: &Cli) -> Result<()> {
    let table = io::read_table_path(&cli.input)?;
    info!(rows = table.len(), input = %cli.input.display(), "loaded table");

    let scan = PatternScan::with_defaults();
    scan.validate_config()?;

    // keep a copy of the candles for the optional chart before the table
    // is consumed by annotation
    let candles: Vec<Candle> = table.candles().copied().collect();
    let annotated = table.annotate(&scan);

    match &cli.output {
        Some(path) => {
            io::write_annotated_path(&annotated, path)?;
            info!(output = %path.display(), "wrote detections");
        }
        None => {
            io::write_annotated(&annotated, std::io::stdout().lock())?;
        }
    }

    // Supplementary only: a failed chart is logged and otherwise ignored.
    if cli.chart {
        match chart::render_tail(&candles, chart::DEFAULT_WINDOW) {
            Ok(rendered) => eprintln!("{rendered}"),
            Err(e) => warn!("chart rendering failed: {e}"),
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
