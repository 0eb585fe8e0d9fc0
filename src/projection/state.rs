//! Running balance for the iterative-compounding projectors

/// Balance of a savings-style projection at a point in time
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundingState {
    /// Current step (0 = starting state, no interest applied)
    pub step: u32,

    /// Current balance
    pub balance: f64,

    /// Interest accrued since step 0
    pub total_interest: f64,

    /// Contributions added since step 0
    pub total_contributions: f64,
}

impl CompoundingState {
    /// Initialize state at step 0
    pub fn new(starting_balance: f64) -> Self {
        Self {
            step: 0,
            balance: starting_balance,
            total_interest: 0.0,
            total_contributions: 0.0,
        }
    }

    /// Advance one period: interest accrues on the prior balance, then the
    /// contribution is added.
    ///
    /// Returns the interest earned this period.
    pub fn advance(&mut self, periodic_rate: f64, contribution: f64) -> f64 {
        let interest_earned = self.balance * periodic_rate;

        self.step += 1;
        self.total_interest += interest_earned;
        self.total_contributions += contribution;
        self.balance += interest_earned + contribution;

        interest_earned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interest_before_contribution() {
        let mut state = CompoundingState::new(1000.0);
        let earned = state.advance(0.01, 100.0);

        assert!((earned - 10.0).abs() < 1e-12);
        assert!((state.balance - 1110.0).abs() < 1e-12);
        assert_eq!(state.step, 1);

        // Second month earns on the contribution too
        let earned = state.advance(0.01, 100.0);
        assert!((earned - 11.1).abs() < 1e-12);
        assert!((state.total_interest - 21.1).abs() < 1e-12);
        assert!((state.total_contributions - 200.0).abs() < 1e-12);
    }
}
