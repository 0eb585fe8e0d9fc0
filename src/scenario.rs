//! Scenario runner for batches of calculations
//!
//! Holds one configured [`Calculator`] and evaluates many requests against
//! it. Projectors are pure, so batches run in parallel.

use log::info;
use rayon::prelude::*;

use crate::calculator::{CalculationRequest, Calculator, CalculatorConfig};
use crate::error::Result;
use crate::projection::CalculationResult;

/// Batch front end over a shared calculator
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
///
/// for rate in [9.0, 10.5, 12.0] {
///     let request = CalculationRequest::Loan { amount: 10_000.0, annual_rate: rate, months: 24 };
///     let result = runner.run(&request)?;
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    calculator: Calculator,
}

impl ScenarioRunner {
    /// Runner with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner with a specific configuration
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            calculator: Calculator::new(config),
        }
    }

    /// Run a single request
    pub fn run(&self, request: &CalculationRequest) -> Result<CalculationResult> {
        self.calculator.run(request)
    }

    /// Run many requests in parallel; results keep the input order
    pub fn run_batch(&self, requests: &[CalculationRequest]) -> Vec<Result<CalculationResult>> {
        info!("Running batch of {} calculations", requests.len());
        requests
            .par_iter()
            .map(|request| self.calculator.run(request))
            .collect()
    }

    /// Rerun one request across several values of its main rate
    pub fn rate_sensitivity(
        &self,
        request: &CalculationRequest,
        rates: &[f64],
    ) -> Vec<(f64, Result<CalculationResult>)> {
        rates
            .par_iter()
            .map(|&rate| (rate, self.calculator.run(&request.with_rate(rate))))
            .collect()
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }
}
