//! Output structures shared by every projector

use serde::{Deserialize, Serialize};

/// One sampled point (month or year) of a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Human label, e.g. "Month 3" or "Age 41"
    pub name: String,
    /// Cumulative balance at this step (rounded)
    pub value: f64,
    /// Cumulative interest / gain at this step (rounded)
    pub interest: f64,
}

impl SeriesPoint {
    pub fn new(name: impl Into<String>, value: f64, interest: f64) -> Self {
        Self {
            name: name.into(),
            value,
            interest,
        }
    }
}

/// A single row of an amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationEntry {
    /// Payment period (1-indexed)
    pub period: u32,
    pub installment: f64,
    pub principal_paid: f64,
    pub interest_paid: f64,
    pub remaining_balance: f64,
}

/// Closed-form totals for one compared bank offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankComparisonEntry {
    pub bank_name: String,
    /// Annual rate in percent
    pub rate: f64,
    pub total_amount: f64,
    pub total_interest: f64,
    pub installment_value: f64,
}

/// What the financed principal would have earned if invested instead
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityCost {
    pub investment_final_value: f64,
    pub investment_gain: f64,
    /// Annual rate in percent
    pub investment_rate: f64,
    /// `|winning offer's interest - investment_gain|`, set by the comparison
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_versus_gain: Option<f64>,
}

/// Safe-withdrawal estimate attached to retirement projections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SustainableIncome {
    /// Monthly fraction of the balance assumed withdrawable (0.004 = 0.4%)
    pub safe_withdrawal_rate: f64,
    pub possible_monthly_income: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired_monthly_income: Option<f64>,
    /// possible - desired; negative means a shortfall
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income_gap: Option<f64>,
}

/// Universal result of every projector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// Final balance or total cost
    pub total_amount: f64,

    /// Interest, dividends or appreciation beyond the committed capital
    pub total_interest: f64,

    /// Capital committed (baseline for `total_interest`)
    pub principal: f64,

    /// `total_interest` relative to the baseline, in percent
    pub percentage_interest: f64,

    /// One point per simulated step, step 0 first
    pub time_series: Vec<SeriesPoint>,

    /// Narrative summary; derived from the numeric fields
    pub impact_message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installments: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installment_value: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amortization_schedule: Option<Vec<AmortizationEntry>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison_data: Option<Vec<BankComparisonEntry>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opportunity_cost: Option<OpportunityCost>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sustainable_income: Option<SustainableIncome>,
}

impl CalculationResult {
    /// Result with only the mandatory fields set
    pub fn new(
        total_amount: f64,
        total_interest: f64,
        principal: f64,
        percentage_interest: f64,
        time_series: Vec<SeriesPoint>,
        impact_message: String,
    ) -> Self {
        Self {
            total_amount,
            total_interest,
            principal,
            percentage_interest,
            time_series,
            impact_message,
            installments: None,
            installment_value: None,
            amortization_schedule: None,
            comparison_data: None,
            opportunity_cost: None,
            sustainable_income: None,
        }
    }

    /// Absolute difference between `total_amount` and `principal + total_interest`
    pub fn conservation_gap(&self) -> f64 {
        (self.total_amount - (self.principal + self.total_interest)).abs()
    }

    /// Last sampled point of the time series
    pub fn final_point(&self) -> Option<&SeriesPoint> {
        self.time_series.last()
    }

    /// Whether this result describes a loan-like projection
    pub fn is_loan(&self) -> bool {
        self.amortization_schedule.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case_and_skips_absent_options() {
        let result = CalculationResult::new(
            110.0,
            10.0,
            100.0,
            10.0,
            vec![SeriesPoint::new("Month 0", 100.0, 0.0)],
            "ok".to_string(),
        );

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["totalAmount"], 110.0);
        assert_eq!(json["percentageInterest"], 10.0);
        assert_eq!(json["timeSeries"][0]["name"], "Month 0");
        assert!(json.get("amortizationSchedule").is_none());
        assert!(json.get("opportunityCost").is_none());
    }

    #[test]
    fn test_conservation_gap() {
        let result = CalculationResult::new(110.0, 10.0, 100.0, 10.0, Vec::new(), String::new());
        assert!(result.conservation_gap() < 1e-12);
        assert!(result.final_point().is_none());
        assert!(!result.is_loan());
    }
}
