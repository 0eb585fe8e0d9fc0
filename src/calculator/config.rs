//! Calculator configuration: input limits, product rates and form defaults

use log::info;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::Result;
use crate::format::CurrencyFormat;
use crate::projection::{BankOffer, SAFE_WITHDRAWAL_RATE};

/// Longest term accepted at the input boundary (100 years)
pub const DEFAULT_MAX_MONTHS: u32 = 1200;

/// Annual rate used by the savings calculator when none is given
pub const DEFAULT_SAVINGS_ANNUAL_RATE: f64 = 10.75;

/// Typical revolving credit-card rate, percent per month
pub const DEFAULT_CREDIT_CARD_MONTHLY_RATE: f64 = 14.5;

/// Limits and product parameters applied by [`super::Calculator`]
///
/// Every field has a default, so a JSON file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Upper bound on any projection term, in months
    pub max_months: u32,

    /// Minimum number of offers in a bank comparison
    pub min_banks: usize,

    /// Maximum number of offers in a bank comparison
    pub max_banks: usize,

    /// Annual rate (%) for the savings calculator when the caller gives 0 or none
    pub savings_default_annual_rate: f64,

    /// Credit-card revolving rate (% per month)
    pub credit_card_monthly_rate: f64,

    /// Monthly safe-withdrawal fraction for retirement estimates
    pub safe_withdrawal_rate: f64,

    /// Currency convention for narrative and CLI output
    pub currency: CurrencyFormat,

    /// Values used for any form field the caller leaves empty
    pub form_defaults: FormDefaults,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_months: DEFAULT_MAX_MONTHS,
            min_banks: 2,
            max_banks: 6,
            savings_default_annual_rate: DEFAULT_SAVINGS_ANNUAL_RATE,
            credit_card_monthly_rate: DEFAULT_CREDIT_CARD_MONTHLY_RATE,
            safe_withdrawal_rate: SAFE_WITHDRAWAL_RATE,
            currency: CurrencyFormat::brl(),
            form_defaults: FormDefaults::default(),
        }
    }
}

impl CalculatorConfig {
    /// Load configuration from a JSON file; missing keys keep their defaults
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        info!(
            "Loaded calculator config from {} (max_months={}, banks={}..={})",
            path.display(),
            config.max_months,
            config.min_banks,
            config.max_banks
        );
        Ok(config)
    }

    /// Parse configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Initial values of the calculator form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDefaults {
    pub amount: f64,
    /// Annual rate (%) for interest and loan calculators
    pub annual_rate: f64,
    /// Monthly dividend yield (%) for the real-estate fund calculator
    pub dividend_yield: f64,
    pub months: u32,
    pub monthly_contribution: f64,
    pub current_age: u32,
    pub target_age: u32,
    /// Annual appreciation (%) for the real-estate fund calculator
    pub appreciation: f64,
    /// Annual return (%) of the alternative investment in a comparison
    pub investment_rate: f64,
    pub banks: Vec<BankOffer>,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            amount: 5000.0,
            annual_rate: 12.0,
            dividend_yield: 0.8,
            months: 24,
            monthly_contribution: 200.0,
            current_age: 30,
            target_age: 65,
            appreciation: 5.0,
            investment_rate: 10.75,
            banks: vec![BankOffer::new("Bank A", 12.0), BankOffer::new("Bank B", 10.5)],
        }
    }
}
