//! Calculator front end: requests, validation, configuration and dispatch
//! to the projection engine

mod config;
mod inputs;
mod request;
pub mod loader;
pub mod validation;

pub use config::{
    CalculatorConfig, FormDefaults, DEFAULT_CREDIT_CARD_MONTHLY_RATE, DEFAULT_MAX_MONTHS,
    DEFAULT_SAVINGS_ANNUAL_RATE,
};
pub use inputs::{parse_or_zero, CalculatorForm};
pub use loader::{load_bank_offers, load_bank_offers_from_reader};
pub use request::{CalculationRequest, CalculatorKind};

use log::{debug, warn};

use crate::error::{CalcError, Result};
use crate::projection::{
    calculate_bank_comparison, calculate_compound_interest, calculate_loan,
    calculate_real_estate_fund, calculate_retirement, CalculationResult, FundInputs,
    RetirementInputs,
};
use validation::{check_amount, check_ages, check_banks, check_positive, check_rate, check_term};

/// Validates requests and runs the matching projector
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    config: CalculatorConfig,
}

impl Calculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Check a request against the input contract without running it
    pub fn validate(&self, request: &CalculationRequest) -> Result<()> {
        let max = self.config.max_months;

        match request {
            CalculationRequest::CompoundInterest {
                amount,
                annual_rate,
                months,
                monthly_contribution,
            } => {
                check_amount("amount", *amount)?;
                check_rate("annual rate", *annual_rate)?;
                check_amount("monthly contribution", *monthly_contribution)?;
                check_term(*months, 0, max)
            }
            CalculationRequest::Savings {
                amount,
                annual_rate,
                months,
                monthly_contribution,
            } => {
                check_amount("amount", *amount)?;
                if let Some(rate) = annual_rate {
                    check_rate("annual rate", *rate)?;
                }
                check_amount("monthly contribution", *monthly_contribution)?;
                check_term(*months, 0, max)
            }
            CalculationRequest::Loan {
                amount,
                annual_rate,
                months,
            }
            | CalculationRequest::Financing {
                amount,
                annual_rate,
                months,
            } => {
                check_positive("amount", *amount)?;
                check_amount("annual rate", *annual_rate)?;
                check_term(*months, 1, max)
            }
            CalculationRequest::CreditCard { amount, months } => {
                check_positive("amount", *amount)?;
                check_term(*months, 1, max)
            }
            CalculationRequest::Retirement {
                current_age,
                target_age,
                current_savings,
                monthly_contribution,
                annual_return,
                desired_monthly_income,
            } => {
                check_ages(*current_age, *target_age, max)?;
                check_amount("current savings", *current_savings)?;
                check_amount("monthly contribution", *monthly_contribution)?;
                check_rate("annual return", *annual_return)?;
                if let Some(income) = desired_monthly_income {
                    check_amount("desired monthly income", *income)?;
                }
                Ok(())
            }
            CalculationRequest::Comparison {
                amount,
                months,
                banks,
                investment_rate,
            } => {
                check_positive("amount", *amount)?;
                check_term(*months, 1, max)?;
                check_banks(banks, self.config.min_banks, self.config.max_banks)?;
                check_rate("investment rate", *investment_rate)
            }
            CalculationRequest::RealEstateFund {
                amount,
                monthly_contribution,
                dividend_yield,
                annual_appreciation,
                months,
            } => {
                check_amount("amount", *amount)?;
                check_amount("monthly contribution", *monthly_contribution)?;
                check_rate("dividend yield", *dividend_yield)?;
                check_rate("annual appreciation", *annual_appreciation)?;
                check_term(*months, 0, max)
            }
        }
    }

    /// Validate and run a request
    pub fn run(&self, request: &CalculationRequest) -> Result<CalculationResult> {
        if let Err(err) = self.validate(request) {
            warn!("Rejected {} request: {}", request.kind(), err);
            return Err(err);
        }

        debug!("Running {} calculator", request.kind());
        let result = self.project(request)?;
        debug!(
            "{} result: total={:.2} interest={:.2} points={}",
            request.kind(),
            result.total_amount,
            result.total_interest,
            result.time_series.len()
        );
        Ok(result)
    }

    /// Dispatch to the projector; inputs are assumed valid
    fn project(&self, request: &CalculationRequest) -> Result<CalculationResult> {
        let result = match request {
            CalculationRequest::CompoundInterest {
                amount,
                annual_rate,
                months,
                monthly_contribution,
            } => calculate_compound_interest(*amount, annual_rate / 12.0, *months, *monthly_contribution),
            CalculationRequest::Savings {
                amount,
                annual_rate,
                months,
                monthly_contribution,
            } => {
                let rate = annual_rate
                    .filter(|r| *r != 0.0)
                    .unwrap_or(self.config.savings_default_annual_rate);
                calculate_compound_interest(*amount, rate / 12.0, *months, *monthly_contribution)
            }
            CalculationRequest::Loan {
                amount,
                annual_rate,
                months,
            }
            | CalculationRequest::Financing {
                amount,
                annual_rate,
                months,
            } => calculate_loan(*amount, *annual_rate, *months),
            CalculationRequest::CreditCard { amount, months } => {
                calculate_loan(*amount, self.config.credit_card_monthly_rate * 12.0, *months)
            }
            CalculationRequest::Retirement {
                current_age,
                target_age,
                current_savings,
                monthly_contribution,
                annual_return,
                desired_monthly_income,
            } => calculate_retirement(&RetirementInputs {
                current_age: *current_age,
                target_age: *target_age,
                current_savings: *current_savings,
                monthly_contribution: *monthly_contribution,
                annual_return_pct: *annual_return,
                desired_monthly_income: *desired_monthly_income,
                safe_withdrawal_rate: self.config.safe_withdrawal_rate,
            }),
            CalculationRequest::Comparison {
                amount,
                months,
                banks,
                investment_rate,
            } => calculate_bank_comparison(*amount, *months, banks, *investment_rate)
                .ok_or(CalcError::NoOffers)?,
            CalculationRequest::RealEstateFund {
                amount,
                monthly_contribution,
                dividend_yield,
                annual_appreciation,
                months,
            } => calculate_real_estate_fund(&FundInputs {
                initial_amount: *amount,
                monthly_contribution: *monthly_contribution,
                monthly_dividend_yield_pct: *dividend_yield,
                annual_appreciation_pct: *annual_appreciation,
                months: *months,
            }),
        };

        Ok(result)
    }
}
