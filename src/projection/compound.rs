//! Compound-interest / savings projector

use super::rates::{percentage_of, round_half_up};
use super::result::{CalculationResult, SeriesPoint};
use super::state::CompoundingState;

/// Project a balance compounded monthly with a fixed contribution added
/// after each month's interest.
///
/// # Arguments
/// * `principal` - Initial deposit
/// * `monthly_rate_pct` - Monthly rate in percent (1.0 = 1%/month); negative
///   rates shrink the balance
/// * `months` - Number of periods; 0 yields only the starting point
/// * `monthly_contribution` - Amount added at the end of every month
///
/// The returned `principal` is the capital committed
/// (`principal + contribution * months`), not the initial deposit.
pub fn calculate_compound_interest(
    principal: f64,
    monthly_rate_pct: f64,
    months: u32,
    monthly_contribution: f64,
) -> CalculationResult {
    let rate = monthly_rate_pct / 100.0;
    let mut state = CompoundingState::new(principal);
    let mut series = Vec::with_capacity(months as usize + 1);

    series.push(sample(&state));
    for _ in 1..=months {
        state.advance(rate, monthly_contribution);
        series.push(sample(&state));
    }

    let total_committed = principal + monthly_contribution * months as f64;
    let growth_ratio = state.balance / total_committed * 100.0;

    CalculationResult::new(
        state.balance,
        state.total_interest,
        total_committed,
        percentage_of(state.balance - total_committed, total_committed),
        series,
        format!(
            "Your money grew to {:.0}% of the amount invested.",
            growth_ratio
        ),
    )
}

fn sample(state: &CompoundingState) -> SeriesPoint {
    SeriesPoint::new(
        format!("Month {}", state.step),
        round_half_up(state.balance),
        round_half_up(state.total_interest),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_committed_principal_includes_contributions() {
        let result = calculate_compound_interest(5000.0, 1.0, 24, 200.0);

        assert_relative_eq!(result.principal, 9800.0);
        assert!(result.total_amount > 9800.0);
        assert!(result.percentage_interest > 0.0);
        assert_eq!(result.time_series.len(), 25);
    }

    #[test]
    fn test_conservation() {
        let result = calculate_compound_interest(5000.0, 1.0, 24, 200.0);
        assert_relative_eq!(
            result.total_amount,
            result.principal + result.total_interest,
            max_relative = 1e-6
        );
    }

    #[test]
    fn test_no_contribution_matches_closed_form() {
        let result = calculate_compound_interest(1000.0, 1.0, 12, 0.0);
        let expected = 1000.0 * 1.01_f64.powi(12);
        assert_relative_eq!(result.total_amount, expected, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_months() {
        let result = calculate_compound_interest(1000.0, 1.0, 0, 50.0);

        assert_eq!(result.time_series.len(), 1);
        assert_eq!(result.time_series[0].name, "Month 0");
        assert_eq!(result.total_interest, 0.0);
        assert_eq!(result.total_amount, 1000.0);
        assert_eq!(result.principal, 1000.0);
    }

    #[test]
    fn test_step_zero_has_no_interest() {
        let result = calculate_compound_interest(1000.0, 5.0, 3, 0.0);
        assert_eq!(result.time_series[0].value, 1000.0);
        assert_eq!(result.time_series[0].interest, 0.0);
        assert_eq!(result.time_series[1].value, 1050.0);
        assert_eq!(result.time_series[1].interest, 50.0);
    }

    #[test]
    fn test_negative_rate_shrinks() {
        let result = calculate_compound_interest(1000.0, -1.0, 12, 0.0);
        assert!(result.total_amount < 1000.0);
        assert!(result.total_interest < 0.0);
        assert!(result.percentage_interest < 0.0);
    }

    #[test]
    fn test_idempotent() {
        let a = calculate_compound_interest(5000.0, 0.9, 60, 150.0);
        let b = calculate_compound_interest(5000.0, 0.9, 60, 150.0);
        assert_eq!(a, b);
    }
}
