//! Finance Calculators - Projection engine for personal-finance calculators
//!
//! This library provides:
//! - Compound-interest and savings projections
//! - Amortized loan / financing schedules (Price system)
//! - Multi-bank loan comparison with opportunity cost
//! - Real-estate fund (dividend + appreciation) projections
//! - Retirement accumulation with a safe-withdrawal estimate
//! - Currency conversion through BRL with caller-supplied bids
//! - Request validation, configuration and batch evaluation

pub mod error;
pub mod format;
pub mod projection;
pub mod calculator;
pub mod scenario;
pub mod export;
pub mod converter;

// Re-export commonly used types
pub use error::CalcError;
pub use format::{format_currency, CurrencyFormat};
pub use projection::{BankOffer, CalculationResult};
pub use calculator::{CalculationRequest, Calculator, CalculatorConfig, CalculatorKind};
pub use scenario::ScenarioRunner;
pub use converter::RateTable;
