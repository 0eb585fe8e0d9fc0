//! Amortized loan / financing projector (Price system)

use super::rates::{monthly_from_annual_nominal, percentage_of, price_installment, round_half_up};
use super::result::{AmortizationEntry, CalculationResult, SeriesPoint};

/// Closed-form totals of an amortized loan, without the schedule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanTotals {
    /// Monthly periodic rate (decimal)
    pub periodic_rate: f64,
    pub installment: f64,
    pub total_amount: f64,
    pub total_interest: f64,
}

impl LoanTotals {
    /// Compute installment and totals for `principal` at a nominal annual rate
    pub fn new(principal: f64, annual_rate_pct: f64, months: u32) -> Self {
        let periodic_rate = monthly_from_annual_nominal(annual_rate_pct);
        let installment = price_installment(principal, periodic_rate, months);
        let total_amount = installment * months as f64;

        Self {
            periodic_rate,
            installment,
            total_amount,
            total_interest: total_amount - principal,
        }
    }
}

/// Build the payment-by-payment schedule for a fixed installment
///
/// Every period reports `max(0, balance)`; the last period's remaining
/// balance is forced to exactly 0 to absorb floating-point drift.
pub fn amortization_schedule(
    principal: f64,
    periodic_rate: f64,
    installment: f64,
    months: u32,
) -> Vec<AmortizationEntry> {
    let mut balance = principal;
    let mut schedule = Vec::with_capacity(months as usize);

    for period in 1..=months {
        let interest_paid = balance * periodic_rate;
        let principal_paid = installment - interest_paid;
        balance -= principal_paid;

        let remaining_balance = if period == months { 0.0 } else { balance.max(0.0) };

        schedule.push(AmortizationEntry {
            period,
            installment,
            principal_paid,
            interest_paid,
            remaining_balance,
        });
    }

    schedule
}

/// Project an amortized loan with a fixed monthly installment
///
/// # Arguments
/// * `principal` - Amount financed
/// * `annual_rate_pct` - Nominal annual rate in percent; 0 gives flat amortization
/// * `months` - Number of installments
///
/// The time series reports the outstanding balance, with cumulative interest
/// linearly interpolated as `total_interest * m / months` (a smoothed curve,
/// not the exact running sum).
pub fn calculate_loan(principal: f64, annual_rate_pct: f64, months: u32) -> CalculationResult {
    let totals = LoanTotals::new(principal, annual_rate_pct, months);
    let schedule = amortization_schedule(principal, totals.periodic_rate, totals.installment, months);

    let mut series = Vec::with_capacity(months as usize + 1);
    series.push(SeriesPoint::new("Month 0", round_half_up(principal), 0.0));
    for entry in &schedule {
        let progress = entry.period as f64 / months as f64;
        series.push(SeriesPoint::new(
            format!("Month {}", entry.period),
            round_half_up(entry.remaining_balance),
            round_half_up(totals.total_interest * progress),
        ));
    }

    let multiplier = totals.total_amount / principal;
    let interest_share = percentage_of(totals.total_interest, totals.total_amount);

    let mut result = CalculationResult::new(
        totals.total_amount,
        totals.total_interest,
        principal,
        percentage_of(totals.total_interest, principal),
        series,
        format!(
            "You will pay {:.2}x the original amount. Interest makes up {:.0}% of the total paid.",
            multiplier, interest_share
        ),
    );
    result.installments = Some(months);
    result.installment_value = Some(totals.installment);
    result.amortization_schedule = Some(schedule);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_loan_totals() {
        let result = calculate_loan(10_000.0, 12.0, 12);
        let installment = result.installment_value.unwrap();

        assert!(installment > 0.0);
        assert_relative_eq!(result.total_amount, installment * 12.0);
        assert_relative_eq!(result.total_interest, result.total_amount - 10_000.0);
        assert_eq!(result.installments, Some(12));
        assert!((installment - 888.4879).abs() < 1e-3);
    }

    #[test]
    fn test_schedule_terminates_at_zero() {
        for &(principal, rate, months) in &[
            (10_000.0, 12.0, 12),
            (250_000.0, 9.5, 360),
            (1_000.0, 174.0, 7),
            (12_000.0, 0.0, 12),
            (500.0, 3.0, 1),
        ] {
            let result = calculate_loan(principal, rate, months);
            let schedule = result.amortization_schedule.as_ref().unwrap();

            assert_eq!(schedule.len(), months as usize);
            assert_eq!(schedule[months as usize - 1].remaining_balance, 0.0);
            for (k, entry) in schedule.iter().enumerate() {
                assert_eq!(entry.period, k as u32 + 1);
                assert!(entry.remaining_balance >= 0.0);
            }
        }
    }

    #[test]
    fn test_zero_rate_loan() {
        let result = calculate_loan(12_000.0, 0.0, 12);

        assert_eq!(result.installment_value, Some(1000.0));
        assert_eq!(result.total_interest, 0.0);
        assert!(result.total_amount.is_finite());

        let schedule = result.amortization_schedule.unwrap();
        assert!(schedule.iter().all(|e| e.interest_paid == 0.0));
        assert_eq!(schedule[5].remaining_balance, 6000.0);
    }

    #[test]
    fn test_vanishing_rate_loan_is_flat() {
        let result = calculate_loan(12_000.0, 1e-15, 12);

        assert_eq!(result.installment_value, Some(1000.0));
        assert_eq!(result.total_interest, 0.0);
        assert!(result.time_series.iter().all(|p| p.value.is_finite()));
    }

    #[test]
    fn test_series_interpolates_interest() {
        let result = calculate_loan(10_000.0, 12.0, 12);

        assert_eq!(result.time_series.len(), 13);
        assert_eq!(result.time_series[0].value, 10_000.0);
        assert_eq!(result.time_series[0].interest, 0.0);
        assert_eq!(
            result.time_series[6].interest,
            round_half_up(result.total_interest * 0.5)
        );
        assert_eq!(result.time_series[12].value, 0.0);
        assert_eq!(
            result.time_series[12].interest,
            round_half_up(result.total_interest)
        );
    }

    #[test]
    fn test_principal_and_interest_split() {
        let result = calculate_loan(10_000.0, 12.0, 12);
        let schedule = result.amortization_schedule.unwrap();

        let principal_sum: f64 = schedule.iter().map(|e| e.principal_paid).sum();
        let interest_sum: f64 = schedule.iter().map(|e| e.interest_paid).sum();
        assert_relative_eq!(principal_sum, 10_000.0, epsilon = 1e-6);
        assert_relative_eq!(interest_sum, result.total_interest, epsilon = 1e-6);

        // Interest share falls as the balance is paid down
        assert!(schedule[0].interest_paid > schedule[11].interest_paid);
        assert_relative_eq!(schedule[0].interest_paid, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_conservation_and_percentage() {
        let result = calculate_loan(20_000.0, 18.0, 48);
        assert!(result.conservation_gap() <= 1e-6 * result.total_amount);
        assert_relative_eq!(
            result.percentage_interest,
            result.total_interest / 20_000.0 * 100.0
        );
    }
}
