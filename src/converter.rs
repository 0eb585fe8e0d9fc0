//! Currency conversion through the Brazilian real
//!
//! Rates are caller-supplied bids quoting one unit of each currency in BRL
//! (`USD -> 5.0` means 1 USD buys 5 BRL). Every conversion goes
//! `base -> BRL -> target`. A currency missing from the table is quoted at 1,
//! so conversions never fail.

use csv::Trim;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use crate::error::Result;

/// Pivot currency every bid is quoted in
pub const PIVOT: &str = "BRL";

/// Bids in BRL keyed by currency code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    bids: HashMap<String, f64>,
}

impl RateTable {
    /// Table holding only the pivot (`BRL -> 1`)
    pub fn new() -> Self {
        let mut bids = HashMap::new();
        bids.insert(PIVOT.to_string(), 1.0);
        Self { bids }
    }

    /// Record a bid; returns false and leaves the table unchanged unless the
    /// bid is finite and positive
    pub fn insert(&mut self, code: impl Into<String>, bid: f64) -> bool {
        if !bid.is_finite() || bid <= 0.0 {
            return false;
        }
        self.bids.insert(code.into(), bid);
        true
    }

    /// BRL bid for `code`, 1 when unknown
    pub fn bid(&self, code: &str) -> f64 {
        self.bids.get(code).copied().unwrap_or(1.0)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.bids.contains_key(code)
    }

    /// Known currency codes, sorted
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.bids.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Units of `target` bought by one unit of `base`
    pub fn cross_rate(&self, base: &str, target: &str) -> f64 {
        self.bid(base) / self.bid(target)
    }

    /// Convert `value` units of `base` into `target`
    pub fn convert(&self, value: f64, base: &str, target: &str) -> f64 {
        let in_pivot = if base == PIVOT { value } else { value * self.bid(base) };
        if target == PIVOT {
            in_pivot
        } else {
            in_pivot / self.bid(target)
        }
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<(String, f64)> for RateTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (code, bid) in iter {
            table.insert(code, bid);
        }
        table
    }
}

/// Raw CSV row
#[derive(Debug, Deserialize)]
struct CsvRow {
    code: String,
    bid: f64,
}

/// Load bids from a CSV file with `code,bid` columns
pub fn load_rates<P: AsRef<Path>>(path: P) -> Result<RateTable> {
    let path = path.as_ref();
    let reader = csv::ReaderBuilder::new().trim(Trim::All).from_path(path)?;
    let table = read_rates(reader)?;
    debug!("Loaded {} currency bids from {}", table.bids.len() - 1, path.display());
    Ok(table)
}

/// Load bids from any reader
pub fn load_rates_from_reader<R: Read>(reader: R) -> Result<RateTable> {
    read_rates(csv::ReaderBuilder::new().trim(Trim::All).from_reader(reader))
}

fn read_rates<R: Read>(mut reader: csv::Reader<R>) -> Result<RateTable> {
    let mut table = RateTable::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        if row.code.is_empty() || !table.insert(row.code.clone(), row.bid) {
            warn!("Skipping currency row '{}' with bid {}", row.code, row.bid);
        }
    }

    Ok(table)
}

/// Convert with a one-off table
pub fn convert(value: f64, base: &str, target: &str, rates: &RateTable) -> f64 {
    rates.convert(value, base, target)
}

/// Cross rate with a one-off table
pub fn cross_rate(base: &str, target: &str, rates: &RateTable) -> f64 {
    rates.cross_rate(base, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn table() -> RateTable {
        vec![("USD".to_string(), 5.0), ("EUR".to_string(), 5.5)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_convert_through_brl() {
        let rates = table();

        assert_relative_eq!(rates.convert(100.0, "USD", "BRL"), 500.0);
        assert_relative_eq!(rates.convert(500.0, "BRL", "USD"), 100.0);
        assert_relative_eq!(rates.convert(110.0, "EUR", "USD"), 121.0, epsilon = 1e-9);
        assert_eq!(rates.convert(42.0, "BRL", "BRL"), 42.0);
    }

    #[test]
    fn test_cross_rate() {
        let rates = table();

        assert_relative_eq!(cross_rate("USD", "EUR", &rates), 5.0 / 5.5);
        assert_relative_eq!(cross_rate("EUR", "BRL", &rates), 5.5);
        assert_relative_eq!(
            convert(1.0, "USD", "EUR", &rates),
            cross_rate("USD", "EUR", &rates)
        );
    }

    #[test]
    fn test_unknown_currency_quotes_at_one() {
        let rates = table();

        assert_eq!(rates.bid("JPY"), 1.0);
        assert_relative_eq!(rates.convert(10.0, "JPY", "USD"), 2.0);
        assert_relative_eq!(rates.convert(10.0, "USD", "JPY"), 50.0);
        assert_relative_eq!(rates.cross_rate("JPY", "GBP"), 1.0);
    }

    #[test]
    fn test_rejects_bad_bids() {
        let mut rates = RateTable::new();

        assert!(!rates.insert("USD", 0.0));
        assert!(!rates.insert("USD", -5.0));
        assert!(!rates.insert("USD", f64::NAN));
        assert!(!rates.contains("USD"));
        assert_eq!(rates.convert(10.0, "USD", "BRL"), 10.0);
    }

    #[test]
    fn test_load_from_reader() {
        let data = "code,bid\nUSD, 5.0\nEUR,5.5\nARS,0\n";
        let rates = load_rates_from_reader(data.as_bytes()).unwrap();

        assert_eq!(rates.codes(), vec!["BRL", "EUR", "USD"]);
        assert_eq!(rates.bid("USD"), 5.0);
    }

    #[test]
    fn test_load_bad_bid() {
        let data = "code,bid\nUSD,five\n";
        assert!(matches!(
            load_rates_from_reader(data.as_bytes()),
            Err(crate::CalcError::Csv(_))
        ));
    }
}
