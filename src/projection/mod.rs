//! Financial projection engine
//!
//! Stateless projectors taking primitive numeric inputs and returning a
//! [`CalculationResult`]. No I/O, no logging; input validation belongs to the
//! caller (see [`crate::calculator`]).

mod state;
mod result;
mod compound;
mod loan;
mod comparison;
mod fund;
mod retirement;
pub mod rates;

pub use state::CompoundingState;
pub use result::{
    AmortizationEntry, BankComparisonEntry, CalculationResult, OpportunityCost, SeriesPoint,
    SustainableIncome,
};
pub use compound::calculate_compound_interest;
pub use loan::{amortization_schedule, calculate_loan, LoanTotals};
pub use comparison::{calculate_bank_comparison, cheapest, opportunity_cost, BankOffer};
pub use fund::{calculate_real_estate_fund, FundInputs};
pub use retirement::{calculate_retirement, RetirementInputs, SAFE_WITHDRAWAL_RATE};
