//! Convert an amount between currencies using a CSV of BRL bids
//!
//! Usage: convert <amount> --from USD --to EUR [--rates rates.csv]
//!
//! Without `--rates` only BRL is known and every other currency quotes at 1.

use anyhow::{Context, Result};
use clap::Parser;
use finance_calculators::converter::{load_rates, RateTable};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "convert")]
#[command(about = "Convert an amount between currencies through BRL")]
struct Args {
    /// Amount in the base currency
    amount: f64,

    /// Base currency code
    #[arg(long, default_value = "USD")]
    from: String,

    /// Target currency code
    #[arg(long, default_value = "BRL")]
    to: String,

    /// CSV file with `code,bid` columns (bid = price of one unit in BRL)
    #[arg(long)]
    rates: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let rates = match &args.rates {
        Some(path) => load_rates(path).with_context(|| format!("loading rates {}", path.display()))?,
        None => RateTable::new(),
    };

    for code in [&args.from, &args.to] {
        if !rates.contains(code) {
            log::warn!("No bid for {}, quoting at 1", code);
        }
    }

    let converted = rates.convert(args.amount, &args.from, &args.to);
    println!("{:.4} {} = {:.4} {}", args.amount, args.from, converted, args.to);
    println!(
        "1 {} = {:.4} {}",
        args.from,
        rates.cross_rate(&args.from, &args.to),
        args.to
    );

    Ok(())
}
