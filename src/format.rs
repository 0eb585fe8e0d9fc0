//! Currency formatting for presentation and narrative messages
//!
//! Amounts render with two decimals, symbol first: `R$ 1.234,56` for the
//! default Brazilian real format. Rounding works on the shortest decimal
//! form of the value (what a user would type), half away from zero, so
//! `1.005` renders as `1,01`.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Locale conventions for rendering monetary values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    pub symbol: String,
    /// Placed between symbol and digits (NBSP for pt-BR, nothing for en-US)
    pub symbol_separator: String,
    pub thousands_separator: char,
    pub decimal_separator: char,
}

impl CurrencyFormat {
    /// Brazilian real, pt-BR grouping
    pub fn brl() -> Self {
        Self {
            symbol: "R$".to_string(),
            symbol_separator: "\u{a0}".to_string(),
            thousands_separator: '.',
            decimal_separator: ',',
        }
    }

    /// US dollar, en-US grouping
    pub fn usd() -> Self {
        Self {
            symbol: "$".to_string(),
            symbol_separator: String::new(),
            thousands_separator: ',',
            decimal_separator: '.',
        }
    }

    /// Render a monetary value
    ///
    /// Negative values keep their sign even when they round to zero
    /// (`-0.001` renders as `-R$ 0,00`).
    pub fn format(&self, value: f64) -> String {
        let sign = if value.is_sign_negative() && !value.is_nan() { "-" } else { "" };
        let prefix = format!("{}{}{}", sign, self.symbol, self.symbol_separator);

        if value.is_nan() {
            return format!("{}NaN", prefix);
        }
        if value.is_infinite() {
            return format!("{}∞", prefix);
        }

        let fixed = match to_decimal(value.abs()) {
            Some(amount) => {
                let mut cents =
                    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
                cents.rescale(2);
                cents.to_string()
            }
            // Beyond Decimal's range the binary value is used as-is
            None => format!("{:.2}", value.abs()),
        };

        let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        format!(
            "{}{}{}{}",
            prefix,
            self.group_thousands(whole),
            self.decimal_separator,
            fraction
        )
    }

    /// Render a percentage with the locale's decimal separator
    pub fn format_percent(&self, value: f64, decimals: usize) -> String {
        let raw = format!("{:.*}", decimals, value);
        format!("{}%", raw.replace('.', &self.decimal_separator.to_string()))
    }

    fn group_thousands(&self, digits: &str) -> String {
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

        for (idx, ch) in digits.chars().enumerate() {
            if idx > 0 && (digits.len() - idx) % 3 == 0 {
                grouped.push(self.thousands_separator);
            }
            grouped.push(ch);
        }

        grouped
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::brl()
    }
}

/// Shortest round-trip decimal form of a finite float
fn to_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_str(&value.to_string())
        .ok()
        .or_else(|| Decimal::from_f64_retain(value))
}

/// Format with the default (BRL) convention
pub fn format_currency(value: f64) -> String {
    CurrencyFormat::brl().format(value)
}
