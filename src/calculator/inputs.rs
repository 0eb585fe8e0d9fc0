//! Loosely-typed form inputs and their conversion into requests

use serde::{Deserialize, Serialize};

use super::config::FormDefaults;
use super::request::{CalculationRequest, CalculatorKind};
use crate::projection::BankOffer;

/// Coerce a form field to a number; anything unparsable becomes 0
pub fn parse_or_zero(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Shared field set of the calculator form
///
/// Each calculator reads the subset it needs; empty fields take the
/// configured defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorForm {
    pub amount: Option<f64>,
    /// Annual rate (%); monthly dividend yield (%) for the fund calculator
    pub rate: Option<f64>,
    pub months: Option<u32>,
    pub monthly_contribution: Option<f64>,
    pub current_age: Option<u32>,
    pub target_age: Option<u32>,
    pub desired_monthly_income: Option<f64>,
    pub appreciation: Option<f64>,
    pub investment_rate: Option<f64>,
    pub banks: Option<Vec<BankOffer>>,
}

impl CalculatorForm {
    /// Build the request for `kind`, filling gaps from `defaults`
    pub fn into_request(self, kind: CalculatorKind, defaults: &FormDefaults) -> CalculationRequest {
        let amount = self.amount.unwrap_or(defaults.amount);
        let months = self.months.unwrap_or(defaults.months);
        let contribution = self.monthly_contribution.unwrap_or(defaults.monthly_contribution);
        let annual_rate = self.rate.unwrap_or(defaults.annual_rate);

        match kind {
            CalculatorKind::CompoundInterest => CalculationRequest::CompoundInterest {
                amount,
                annual_rate,
                months,
                monthly_contribution: contribution,
            },
            CalculatorKind::Savings => CalculationRequest::Savings {
                amount,
                annual_rate: self.rate,
                months,
                monthly_contribution: contribution,
            },
            CalculatorKind::Loan => CalculationRequest::Loan {
                amount,
                annual_rate,
                months,
            },
            CalculatorKind::Financing => CalculationRequest::Financing {
                amount,
                annual_rate,
                months,
            },
            CalculatorKind::CreditCard => CalculationRequest::CreditCard { amount, months },
            CalculatorKind::Retirement => CalculationRequest::Retirement {
                current_age: self.current_age.unwrap_or(defaults.current_age),
                target_age: self.target_age.unwrap_or(defaults.target_age),
                current_savings: amount,
                monthly_contribution: contribution,
                annual_return: annual_rate,
                desired_monthly_income: self.desired_monthly_income,
            },
            CalculatorKind::Comparison => CalculationRequest::Comparison {
                amount,
                months,
                banks: self.banks.unwrap_or_else(|| defaults.banks.clone()),
                investment_rate: self.investment_rate.unwrap_or(defaults.investment_rate),
            },
            CalculatorKind::RealEstateFund => CalculationRequest::RealEstateFund {
                amount,
                monthly_contribution: contribution,
                dividend_yield: self.rate.unwrap_or(defaults.dividend_yield),
                annual_appreciation: self.appreciation.unwrap_or(defaults.appreciation),
                months,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_zero() {
        assert_eq!(parse_or_zero("12.5"), 12.5);
        assert_eq!(parse_or_zero(" 7 "), 7.0);
        assert_eq!(parse_or_zero(""), 0.0);
        assert_eq!(parse_or_zero("abc"), 0.0);
        assert_eq!(parse_or_zero("NaN"), 0.0);
    }

    #[test]
    fn test_empty_form_uses_defaults() {
        let defaults = FormDefaults::default();
        let request = CalculatorForm::default().into_request(CalculatorKind::Loan, &defaults);

        assert_eq!(
            request,
            CalculationRequest::Loan {
                amount: 5000.0,
                annual_rate: 12.0,
                months: 24
            }
        );
    }

    #[test]
    fn test_fund_uses_dividend_default() {
        let defaults = FormDefaults::default();
        let request =
            CalculatorForm::default().into_request(CalculatorKind::RealEstateFund, &defaults);

        match request {
            CalculationRequest::RealEstateFund {
                dividend_yield,
                annual_appreciation,
                ..
            } => {
                assert_eq!(dividend_yield, 0.8);
                assert_eq!(annual_appreciation, 5.0);
            }
            other => panic!("unexpected request {:?}", other),
        }
    }

    #[test]
    fn test_retirement_keeps_desired_income_separate() {
        let form = CalculatorForm {
            amount: Some(20_000.0),
            monthly_contribution: Some(500.0),
            desired_monthly_income: Some(4000.0),
            ..Default::default()
        };
        let request = form.into_request(CalculatorKind::Retirement, &FormDefaults::default());

        match request {
            CalculationRequest::Retirement {
                current_savings,
                monthly_contribution,
                desired_monthly_income,
                current_age,
                target_age,
                ..
            } => {
                assert_eq!(current_savings, 20_000.0);
                assert_eq!(monthly_contribution, 500.0);
                assert_eq!(desired_monthly_income, Some(4000.0));
                assert_eq!((current_age, target_age), (30, 65));
            }
            other => panic!("unexpected request {:?}", other),
        }
    }

    #[test]
    fn test_savings_leaves_rate_unset() {
        let request =
            CalculatorForm::default().into_request(CalculatorKind::Savings, &FormDefaults::default());
        assert!(matches!(
            request,
            CalculationRequest::Savings { annual_rate: None, .. }
        ));
    }
}
