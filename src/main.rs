//! Finance calculators CLI
//!
//! Runs one calculator and prints a summary, the full JSON result, or a CSV
//! table of the schedule / series and of the bank comparison.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use finance_calculators::{
    calculator::{load_bank_offers, CalculatorForm},
    export::{write_comparison_csv, write_result_csv},
    BankOffer, CalculationResult, Calculator, CalculatorConfig, CalculatorKind, CurrencyFormat,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliCalculator {
    Compound,
    Savings,
    Loan,
    Financing,
    CreditCard,
    Retirement,
    Compare,
    Fund,
}

impl From<CliCalculator> for CalculatorKind {
    fn from(value: CliCalculator) -> Self {
        match value {
            CliCalculator::Compound => CalculatorKind::CompoundInterest,
            CliCalculator::Savings => CalculatorKind::Savings,
            CliCalculator::Loan => CalculatorKind::Loan,
            CliCalculator::Financing => CalculatorKind::Financing,
            CliCalculator::CreditCard => CalculatorKind::CreditCard,
            CliCalculator::Retirement => CalculatorKind::Retirement,
            CliCalculator::Compare => CalculatorKind::Comparison,
            CliCalculator::Fund => CalculatorKind::RealEstateFund,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "finance_calculators")]
#[command(about = "Personal-finance projections: interest, loans, funds, retirement")]
struct Args {
    /// Calculator to run
    #[arg(value_enum)]
    calculator: CliCalculator,

    /// Principal, initial deposit or current savings
    #[arg(long)]
    amount: Option<f64>,

    /// Annual rate in percent (monthly dividend yield for `fund`)
    #[arg(long)]
    rate: Option<f64>,

    /// Term in months
    #[arg(long)]
    months: Option<u32>,

    /// Monthly contribution
    #[arg(long)]
    contribution: Option<f64>,

    #[arg(long)]
    current_age: Option<u32>,

    #[arg(long)]
    target_age: Option<u32>,

    /// Desired monthly income at retirement
    #[arg(long)]
    desired_income: Option<f64>,

    /// Annual appreciation in percent (`fund`)
    #[arg(long)]
    appreciation: Option<f64>,

    /// Annual return of the alternative investment in percent (`compare`)
    #[arg(long)]
    investment_rate: Option<f64>,

    /// Bank offer as NAME=RATE; repeat for each offer (`compare`)
    #[arg(long = "bank", value_parser = parse_bank)]
    banks: Vec<BankOffer>,

    /// CSV file of bank offers with `name,rate` columns (`compare`)
    #[arg(long, conflicts_with = "banks")]
    banks_csv: Option<PathBuf>,

    /// JSON calculator configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the full result as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// Write the schedule (loans) or time series to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the bank comparison table to this CSV file (`compare`)
    #[arg(long)]
    comparison_csv: Option<PathBuf>,
}

fn parse_bank(raw: &str) -> std::result::Result<BankOffer, String> {
    let (name, rate) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=RATE, got '{}'", raw))?;
    let rate: f64 = rate
        .trim()
        .parse()
        .map_err(|_| format!("invalid rate in '{}'", raw))?;
    Ok(BankOffer::new(name.trim(), rate))
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => CalculatorConfig::from_json_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CalculatorConfig::default(),
    };

    let banks = match &args.banks_csv {
        Some(path) => Some(
            load_bank_offers(path)
                .with_context(|| format!("loading bank offers {}", path.display()))?,
        ),
        None if args.banks.is_empty() => None,
        None => Some(args.banks.clone()),
    };

    let form = CalculatorForm {
        amount: args.amount,
        rate: args.rate,
        months: args.months,
        monthly_contribution: args.contribution,
        current_age: args.current_age,
        target_age: args.target_age,
        desired_monthly_income: args.desired_income,
        appreciation: args.appreciation,
        investment_rate: args.investment_rate,
        banks,
    };

    let kind = CalculatorKind::from(args.calculator);
    let request = form.into_request(kind, &config.form_defaults);
    let currency = config.currency.clone();
    let calculator = Calculator::new(config);

    let result = calculator
        .run(&request)
        .with_context(|| format!("{} calculation failed", kind))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_summary(kind, &result, &currency);
    }

    if let Some(path) = &args.csv {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_result_csv(BufWriter::new(file), &result)?;
        println!("\nTable written to: {}", path.display());
    }

    if let Some(path) = &args.comparison_csv {
        let banks = result
            .comparison_data
            .as_deref()
            .with_context(|| format!("{} produces no comparison table", kind))?;
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_comparison_csv(BufWriter::new(file), banks)?;
        println!("Comparison written to: {}", path.display());
    }

    Ok(())
}

fn print_summary(kind: CalculatorKind, result: &CalculationResult, currency: &CurrencyFormat) {
    println!("{}", kind);
    println!("{}", "=".repeat(kind.to_string().len()));
    println!("  Total:     {:>20}", currency.format(result.total_amount));
    println!("  Base:      {:>20}", currency.format(result.principal));
    println!("  Interest:  {:>20}", currency.format(result.total_interest));
    println!("  Return:    {:>20}", currency.format_percent(result.percentage_interest, 1));

    if let (Some(count), Some(value)) = (result.installments, result.installment_value) {
        println!("  Payments:  {:>20}", format!("{} x {}", count, currency.format(value)));
    }

    if let Some(banks) = &result.comparison_data {
        println!("\n{:<16} {:>8} {:>18} {:>18}", "Bank", "Rate", "Installment", "Total");
        println!("{}", "-".repeat(63));
        for bank in banks {
            println!(
                "{:<16} {:>8} {:>18} {:>18}",
                bank.bank_name,
                currency.format_percent(bank.rate, 2),
                currency.format(bank.installment_value),
                currency.format(bank.total_amount)
            );
        }
    }

    if let Some(cost) = &result.opportunity_cost {
        println!(
            "\n  Investing instead at {}: {} (gain {})",
            currency.format_percent(cost.investment_rate, 2),
            currency.format(cost.investment_final_value),
            currency.format(cost.investment_gain)
        );
        if let Some(gap) = cost.interest_versus_gain {
            println!("  Interest vs. gain:  {}", currency.format(gap));
        }
    }

    if let Some(income) = &result.sustainable_income {
        println!(
            "\n  Sustainable income: {} / month",
            currency.format(income.possible_monthly_income)
        );
        if let Some(gap) = income.income_gap {
            println!("  Gap to desired:     {}", currency.format(gap));
        }
    }

    // First and last few points
    println!("\n{:<12} {:>18} {:>18}", "Step", "Balance", "Interest");
    let points = &result.time_series;
    for point in points.iter().take(6) {
        println!("{:<12} {:>18} {:>18}", point.name, currency.format(point.value), currency.format(point.interest));
    }
    if points.len() > 12 {
        println!("... ({} more)", points.len() - 12);
    }
    for point in points.iter().skip(points.len().saturating_sub(6).max(6)) {
        println!("{:<12} {:>18} {:>18}", point.name, currency.format(point.value), currency.format(point.interest));
    }

    println!("\n{}", result.impact_message);
}
