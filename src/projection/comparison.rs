//! Multi-bank loan comparison with an opportunity-cost estimate

use serde::{Deserialize, Serialize};

use super::loan::{calculate_loan, LoanTotals};
use super::rates::{future_value, monthly_from_annual_compound};
use super::result::{BankComparisonEntry, CalculationResult, OpportunityCost};
use crate::format::format_currency;

/// A financing offer to compare
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankOffer {
    pub name: String,
    /// Nominal annual rate in percent
    pub rate: f64,
}

impl BankOffer {
    pub fn new(name: impl Into<String>, rate: f64) -> Self {
        Self {
            name: name.into(),
            rate,
        }
    }
}

/// Value of `principal` invested at an annual rate, compounded monthly
pub fn opportunity_cost(principal: f64, investment_rate_pct: f64, months: u32) -> OpportunityCost {
    let monthly_rate = monthly_from_annual_compound(investment_rate_pct);
    let investment_final_value = future_value(principal, monthly_rate, months);

    OpportunityCost {
        investment_final_value,
        investment_gain: investment_final_value - principal,
        investment_rate: investment_rate_pct,
        interest_versus_gain: None,
    }
}

/// Index of the offer with the strictly lowest total cost
///
/// Ties keep the earliest entry. `None` for an empty table.
pub fn cheapest(entries: &[BankComparisonEntry]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, entry) in entries.iter().enumerate() {
        match best {
            Some(current) if entries[current].total_amount <= entry.total_amount => {}
            _ => best = Some(idx),
        }
    }
    best
}

/// Compare offers for the same principal and term
///
/// Each offer gets closed-form totals; the offer with the strictly lowest
/// total cost wins, ties going to the earliest in `banks`. The winner is then
/// projected in full with [`calculate_loan`] and the comparison table plus
/// opportunity cost are attached to that result.
///
/// Returns `None` when `banks` is empty.
pub fn calculate_bank_comparison(
    principal: f64,
    months: u32,
    banks: &[BankOffer],
    investment_rate_pct: f64,
) -> Option<CalculationResult> {
    let comparison: Vec<BankComparisonEntry> = banks
        .iter()
        .map(|bank| {
            let totals = LoanTotals::new(principal, bank.rate, months);
            BankComparisonEntry {
                bank_name: bank.name.clone(),
                rate: bank.rate,
                total_amount: totals.total_amount,
                total_interest: totals.total_interest,
                installment_value: totals.installment,
            }
        })
        .collect();

    let best = comparison[cheapest(&comparison)?].clone();

    let mut opportunity = opportunity_cost(principal, investment_rate_pct, months);
    opportunity.interest_versus_gain =
        Some((best.total_interest - opportunity.investment_gain).abs());

    let mut result = calculate_loan(principal, best.rate, months);
    result.impact_message = format!(
        "There are {} options available. The best rate ({}%) costs {} in interest, \
         while investing the same amount would earn {}.",
        banks.len(),
        best.rate,
        format_currency(best.total_interest),
        format_currency(opportunity.investment_gain)
    );
    result.comparison_data = Some(comparison);
    result.opportunity_cost = Some(opportunity);

    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn offers() -> Vec<BankOffer> {
        vec![
            BankOffer::new("Bank A", 12.0),
            BankOffer::new("Bank B", 10.5),
            BankOffer::new("Bank C", 14.0),
        ]
    }

    #[test]
    fn test_picks_cheapest() {
        let result = calculate_bank_comparison(5000.0, 24, &offers(), 10.75).unwrap();
        let expected = calculate_loan(5000.0, 10.5, 24);

        assert_eq!(result.total_amount, expected.total_amount);
        assert_eq!(result.amortization_schedule, expected.amortization_schedule);
        assert_eq!(result.time_series, expected.time_series);
        assert_eq!(result.comparison_data.as_ref().unwrap().len(), 3);
    }

    fn entry(name: &str, total_amount: f64) -> BankComparisonEntry {
        BankComparisonEntry {
            bank_name: name.to_string(),
            rate: 0.0,
            total_amount,
            total_interest: 0.0,
            installment_value: 0.0,
        }
    }

    #[test]
    fn test_tie_goes_to_first() {
        let tied = [entry("A", 100.0), entry("B", 100.0), entry("C", 120.0)];
        assert_eq!(cheapest(&tied), Some(0));

        let tied_later = [entry("A", 120.0), entry("B", 100.0), entry("C", 100.0)];
        assert_eq!(cheapest(&tied_later), Some(1));

        assert_eq!(cheapest(&[]), None);
    }

    #[test]
    fn test_tied_offers_project_the_first() {
        let banks = vec![
            BankOffer::new("A", 10.0),
            BankOffer::new("B", 10.0),
            BankOffer::new("C", 12.0),
        ];
        let result = calculate_bank_comparison(8000.0, 36, &banks, 0.0).unwrap();
        let table = result.comparison_data.as_ref().unwrap();

        assert_eq!(cheapest(table), Some(0));
        assert_eq!(result.total_amount, table[0].total_amount);
    }

    #[test]
    fn test_interest_versus_gain() {
        let result = calculate_bank_comparison(5000.0, 24, &offers(), 10.75).unwrap();
        let cost = result.opportunity_cost.unwrap();

        assert_relative_eq!(
            cost.interest_versus_gain.unwrap(),
            (result.total_interest - cost.investment_gain).abs(),
            epsilon = 1e-9
        );
        assert!(opportunity_cost(5000.0, 10.75, 24).interest_versus_gain.is_none());
    }

    #[test]
    fn test_comparison_table_preserves_order() {
        let result = calculate_bank_comparison(5000.0, 24, &offers(), 0.0).unwrap();
        let names: Vec<_> = result
            .comparison_data
            .unwrap()
            .into_iter()
            .map(|e| e.bank_name)
            .collect();
        assert_eq!(names, vec!["Bank A", "Bank B", "Bank C"]);
    }

    #[test]
    fn test_opportunity_cost() {
        let cost = opportunity_cost(10_000.0, 12.0, 12);
        assert_relative_eq!(cost.investment_final_value, 11_200.0, epsilon = 1e-6);
        assert_relative_eq!(cost.investment_gain, 1_200.0, epsilon = 1e-6);
        assert_eq!(cost.investment_rate, 12.0);

        let zero = opportunity_cost(10_000.0, 0.0, 24);
        assert_eq!(zero.investment_gain, 0.0);
    }

    #[test]
    fn test_zero_rate_offer_wins() {
        let banks = vec![BankOffer::new("Promo", 0.0), BankOffer::new("Regular", 9.0)];
        let result = calculate_bank_comparison(12_000.0, 12, &banks, 10.0).unwrap();

        assert_eq!(result.installment_value, Some(1000.0));
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn test_empty_offers() {
        assert!(calculate_bank_comparison(1000.0, 12, &[], 5.0).is_none());
    }

    #[test]
    fn test_conservation() {
        let result = calculate_bank_comparison(5000.0, 24, &offers(), 10.75).unwrap();
        assert!(result.conservation_gap() <= 1e-6 * result.total_amount);
    }
}
