//! Real-estate fund projector: reinvested dividends plus price appreciation

use serde::{Deserialize, Serialize};

use super::rates::{monthly_from_annual_compound, percentage_of, round_half_up};
use super::result::{CalculationResult, SeriesPoint};
use crate::format::format_currency;

/// Inputs for a real-estate fund projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundInputs {
    pub initial_amount: f64,
    pub monthly_contribution: f64,
    /// Monthly dividend yield in percent (0.8 = 0.8%/month)
    pub monthly_dividend_yield_pct: f64,
    /// Annual price appreciation in percent
    pub annual_appreciation_pct: f64,
    pub months: u32,
}

/// Project a fund position whose dividends are reinvested
///
/// Each month appreciation and dividends are both computed on the opening
/// balance, then added together with the contribution. The series reports
/// dividends + appreciation combined as one gain figure.
pub fn calculate_real_estate_fund(inputs: &FundInputs) -> CalculationResult {
    let appreciation_rate = monthly_from_annual_compound(inputs.annual_appreciation_pct);
    let dividend_rate = inputs.monthly_dividend_yield_pct / 100.0;

    let mut balance = inputs.initial_amount;
    let mut total_dividends = 0.0;
    let mut total_appreciation = 0.0;
    let mut series = Vec::with_capacity(inputs.months as usize + 1);

    series.push(SeriesPoint::new("Month 0", round_half_up(balance), 0.0));

    for month in 1..=inputs.months {
        let appreciation = balance * appreciation_rate;
        let dividends = balance * dividend_rate;

        total_dividends += dividends;
        total_appreciation += appreciation;
        balance += appreciation + dividends + inputs.monthly_contribution;

        series.push(SeriesPoint::new(
            format!("Month {}", month),
            round_half_up(balance),
            round_half_up(total_dividends + total_appreciation),
        ));
    }

    let total_invested = inputs.initial_amount + inputs.monthly_contribution * inputs.months as f64;
    let total_gain = balance - total_invested;

    CalculationResult::new(
        balance,
        total_gain,
        total_invested,
        percentage_of(total_gain, total_invested),
        series,
        format!(
            "Your fund position returned {} in total, {} of it from tax-exempt dividends.",
            format_currency(total_gain),
            format_currency(total_dividends)
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn inputs() -> FundInputs {
        FundInputs {
            initial_amount: 5000.0,
            monthly_contribution: 200.0,
            monthly_dividend_yield_pct: 0.8,
            annual_appreciation_pct: 5.0,
            months: 24,
        }
    }

    #[test]
    fn test_fund_projection() {
        let result = calculate_real_estate_fund(&inputs());

        assert_eq!(result.time_series.len(), 25);
        assert_relative_eq!(result.principal, 9800.0);
        assert!(result.total_amount > result.principal);
        assert_relative_eq!(
            result.total_amount,
            result.principal + result.total_interest,
            max_relative = 1e-6
        );
    }

    #[test]
    fn test_dividends_only() {
        let result = calculate_real_estate_fund(&FundInputs {
            initial_amount: 1000.0,
            monthly_contribution: 0.0,
            monthly_dividend_yield_pct: 1.0,
            annual_appreciation_pct: 0.0,
            months: 12,
        });

        assert_relative_eq!(result.total_amount, 1000.0 * 1.01_f64.powi(12), epsilon = 1e-9);
    }

    #[test]
    fn test_appreciation_only_matches_annual_rate() {
        let result = calculate_real_estate_fund(&FundInputs {
            initial_amount: 1000.0,
            monthly_contribution: 0.0,
            monthly_dividend_yield_pct: 0.0,
            annual_appreciation_pct: 10.0,
            months: 12,
        });

        assert_relative_eq!(result.total_amount, 1100.0, epsilon = 1e-9);
        assert_relative_eq!(result.percentage_interest, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_series_interest_is_combined_gain() {
        let result = calculate_real_estate_fund(&FundInputs {
            initial_amount: 10_000.0,
            monthly_contribution: 0.0,
            monthly_dividend_yield_pct: 1.0,
            annual_appreciation_pct: 0.0,
            months: 1,
        });

        assert_eq!(result.time_series[1].value, 10_100.0);
        assert_eq!(result.time_series[1].interest, 100.0);
    }
}
