//! Retirement accumulation projector with a safe-withdrawal estimate

use serde::{Deserialize, Serialize};

use super::rates::{monthly_from_annual_compound, percentage_of, round_half_up};
use super::result::{CalculationResult, SeriesPoint, SustainableIncome};
use super::state::CompoundingState;
use crate::format::format_currency;

/// Monthly fraction of the final balance assumed sustainably withdrawable
/// (0.4%/month, about 4.8% a year)
pub const SAFE_WITHDRAWAL_RATE: f64 = 0.004;

/// Inputs for a retirement projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementInputs {
    pub current_age: u32,
    pub target_age: u32,
    pub current_savings: f64,
    pub monthly_contribution: f64,
    /// Annual return in percent, converted to a monthly-equivalent rate
    pub annual_return_pct: f64,
    /// Income goal; only compared against the estimate, never compounded
    #[serde(default)]
    pub desired_monthly_income: Option<f64>,
    #[serde(default = "default_safe_withdrawal_rate")]
    pub safe_withdrawal_rate: f64,
}

fn default_safe_withdrawal_rate() -> f64 {
    SAFE_WITHDRAWAL_RATE
}

impl RetirementInputs {
    /// Months until the target age; 0 when the target is not in the future
    pub fn months(&self) -> u32 {
        self.target_age.saturating_sub(self.current_age).saturating_mul(12)
    }
}

/// Project savings compounded monthly until `target_age`, sampling the
/// series once a year
pub fn calculate_retirement(inputs: &RetirementInputs) -> CalculationResult {
    let months = inputs.months();
    let rate = monthly_from_annual_compound(inputs.annual_return_pct);
    let mut state = CompoundingState::new(inputs.current_savings);
    let mut series = Vec::with_capacity(months as usize / 12 + 1);

    series.push(sample(&state, inputs.current_age));
    for _ in 1..=months {
        state.advance(rate, inputs.monthly_contribution);
        if state.step % 12 == 0 {
            series.push(sample(&state, inputs.current_age));
        }
    }

    let committed = inputs.current_savings + inputs.monthly_contribution * months as f64;
    let possible_monthly_income = state.balance * inputs.safe_withdrawal_rate;

    let mut result = CalculationResult::new(
        state.balance,
        state.total_interest,
        committed,
        percentage_of(state.total_interest, committed),
        series,
        format!(
            "With this balance you could withdraw about {} per month indefinitely.",
            format_currency(possible_monthly_income)
        ),
    );
    result.sustainable_income = Some(SustainableIncome {
        safe_withdrawal_rate: inputs.safe_withdrawal_rate,
        possible_monthly_income,
        desired_monthly_income: inputs.desired_monthly_income,
        income_gap: inputs
            .desired_monthly_income
            .map(|desired| possible_monthly_income - desired),
    });
    result
}

fn sample(state: &CompoundingState, current_age: u32) -> SeriesPoint {
    SeriesPoint::new(
        format!("Age {}", current_age + state.step / 12),
        round_half_up(state.balance),
        round_half_up(state.total_interest),
    )
}
