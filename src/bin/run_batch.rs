//! Run a batch of calculations from a JSON file
//!
//! Usage: run_batch <requests.json> [--config config.json] [--output results.json]
//!
//! The input is a JSON array of tagged requests, e.g.
//! `[{"calculator": "loan", "amount": 10000, "annual_rate": 12, "months": 12}]`.
//! The output is an array of `{"ok": result}` / `{"error": message}` in the
//! same order.

use anyhow::{Context, Result};
use clap::Parser;
use finance_calculators::{CalculationRequest, CalculationResult, CalculatorConfig, ScenarioRunner};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "run_batch")]
#[command(about = "Evaluate a JSON array of calculation requests in parallel")]
struct Args {
    /// JSON file with an array of requests
    requests: PathBuf,

    /// JSON calculator configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum BatchOutcome {
    Ok(CalculationResult),
    Error(String),
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();

    let config = match &args.config {
        Some(path) => CalculatorConfig::from_json_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CalculatorConfig::default(),
    };

    let file = File::open(&args.requests)
        .with_context(|| format!("opening {}", args.requests.display()))?;
    let requests: Vec<CalculationRequest> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", args.requests.display()))?;

    let runner = ScenarioRunner::with_config(config);
    let outcomes: Vec<BatchOutcome> = runner
        .run_batch(&requests)
        .into_iter()
        .map(|result| match result {
            Ok(result) => BatchOutcome::Ok(result),
            Err(err) => BatchOutcome::Error(err.to_string()),
        })
        .collect();

    let failed = outcomes
        .iter()
        .filter(|o| matches!(o, BatchOutcome::Error(_)))
        .count();

    match &args.output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, &outcomes)?;
            writer.flush()?;
        }
        None => println!("{}", serde_json::to_string_pretty(&outcomes)?),
    }

    log::info!(
        "Evaluated {} requests ({} failed) in {:?}",
        requests.len(),
        failed,
        start.elapsed()
    );

    Ok(())
}
