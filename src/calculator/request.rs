//! Typed calculation requests, one variant per calculator

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::projection::BankOffer;

/// Which calculator a request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorKind {
    CompoundInterest,
    Savings,
    Loan,
    Financing,
    CreditCard,
    Retirement,
    Comparison,
    RealEstateFund,
}

impl CalculatorKind {
    pub const ALL: [CalculatorKind; 8] = [
        CalculatorKind::CompoundInterest,
        CalculatorKind::Savings,
        CalculatorKind::Loan,
        CalculatorKind::Financing,
        CalculatorKind::CreditCard,
        CalculatorKind::Retirement,
        CalculatorKind::Comparison,
        CalculatorKind::RealEstateFund,
    ];

    /// Loan-like calculators require at least one installment
    pub fn is_loan(self) -> bool {
        matches!(
            self,
            CalculatorKind::Loan
                | CalculatorKind::Financing
                | CalculatorKind::CreditCard
                | CalculatorKind::Comparison
        )
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CalculatorKind::CompoundInterest => "Compound interest",
            CalculatorKind::Savings => "Savings",
            CalculatorKind::Loan => "Loan",
            CalculatorKind::Financing => "Financing",
            CalculatorKind::CreditCard => "Credit card",
            CalculatorKind::Retirement => "Retirement",
            CalculatorKind::Comparison => "Bank comparison",
            CalculatorKind::RealEstateFund => "Real-estate fund",
        };
        f.write_str(label)
    }
}

/// A single user action: one calculator and its inputs
///
/// Rates are percentages. Serialized with a `"calculator"` tag, e.g.
/// `{"calculator": "loan", "amount": 10000, "annual_rate": 12, "months": 12}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "snake_case")]
pub enum CalculationRequest {
    CompoundInterest {
        amount: f64,
        annual_rate: f64,
        months: u32,
        #[serde(default)]
        monthly_contribution: f64,
    },
    Savings {
        amount: f64,
        /// Falls back to the configured savings rate when absent or 0
        #[serde(default)]
        annual_rate: Option<f64>,
        months: u32,
        #[serde(default)]
        monthly_contribution: f64,
    },
    Loan {
        amount: f64,
        annual_rate: f64,
        months: u32,
    },
    Financing {
        amount: f64,
        annual_rate: f64,
        months: u32,
    },
    /// Uses the configured revolving rate
    CreditCard {
        amount: f64,
        months: u32,
    },
    Retirement {
        current_age: u32,
        target_age: u32,
        current_savings: f64,
        monthly_contribution: f64,
        annual_return: f64,
        #[serde(default)]
        desired_monthly_income: Option<f64>,
    },
    Comparison {
        amount: f64,
        months: u32,
        banks: Vec<BankOffer>,
        #[serde(default)]
        investment_rate: f64,
    },
    RealEstateFund {
        amount: f64,
        #[serde(default)]
        monthly_contribution: f64,
        /// Monthly dividend yield (%)
        dividend_yield: f64,
        /// Annual appreciation (%)
        annual_appreciation: f64,
        months: u32,
    },
}

impl CalculationRequest {
    pub fn kind(&self) -> CalculatorKind {
        match self {
            CalculationRequest::CompoundInterest { .. } => CalculatorKind::CompoundInterest,
            CalculationRequest::Savings { .. } => CalculatorKind::Savings,
            CalculationRequest::Loan { .. } => CalculatorKind::Loan,
            CalculationRequest::Financing { .. } => CalculatorKind::Financing,
            CalculationRequest::CreditCard { .. } => CalculatorKind::CreditCard,
            CalculationRequest::Retirement { .. } => CalculatorKind::Retirement,
            CalculationRequest::Comparison { .. } => CalculatorKind::Comparison,
            CalculationRequest::RealEstateFund { .. } => CalculatorKind::RealEstateFund,
        }
    }

    /// Copy of this request with its main rate input replaced
    ///
    /// Credit-card requests come back unchanged; their rate is configured.
    pub fn with_rate(&self, rate: f64) -> Self {
        let mut request = self.clone();
        match &mut request {
            CalculationRequest::CompoundInterest { annual_rate, .. }
            | CalculationRequest::Loan { annual_rate, .. }
            | CalculationRequest::Financing { annual_rate, .. } => *annual_rate = rate,
            CalculationRequest::Savings { annual_rate, .. } => *annual_rate = Some(rate),
            CalculationRequest::Retirement { annual_return, .. } => *annual_return = rate,
            CalculationRequest::Comparison { investment_rate, .. } => *investment_rate = rate,
            CalculationRequest::RealEstateFund { dividend_yield, .. } => *dividend_yield = rate,
            CalculationRequest::CreditCard { .. } => {}
        }
        request
    }
}
