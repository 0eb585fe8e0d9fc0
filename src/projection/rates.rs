//! Rate conversions and the amortized-payment formula
//!
//! All public rate arguments are percentages (12.0 = 12%); returned periodic
//! rates are decimals (0.01 = 1%).

/// Monthly rate equivalent to an annual effective rate, compounded monthly:
/// `(1 + annual/100)^(1/12) - 1`
pub fn monthly_from_annual_compound(annual_rate_pct: f64) -> f64 {
    (1.0 + annual_rate_pct / 100.0).powf(1.0 / 12.0) - 1.0
}

/// Monthly rate from a nominal annual rate: `annual / 100 / 12`
pub fn monthly_from_annual_nominal(annual_rate_pct: f64) -> f64 {
    annual_rate_pct / 100.0 / 12.0
}

/// Periodic rates below this magnitude amortize flat
pub const ZERO_RATE_EPSILON: f64 = 1e-10;

/// Fixed periodic installment under the Price (French) system
///
/// `P * i * (1+i)^n / ((1+i)^n - 1)`
///
/// A (near-)zero periodic rate degenerates to flat amortization `P / n`;
/// zero periods yields no installment at all.
pub fn price_installment(principal: f64, periodic_rate: f64, periods: u32) -> f64 {
    if periods == 0 {
        return 0.0;
    }

    let growth = compound_factor(periodic_rate, periods);
    if periodic_rate.abs() < ZERO_RATE_EPSILON || growth == 1.0 {
        return principal / periods as f64;
    }

    principal * periodic_rate * growth / (growth - 1.0)
}

/// Value of a lump sum compounded for `periods` at `periodic_rate`
pub fn future_value(present: f64, periodic_rate: f64, periods: u32) -> f64 {
    present * compound_factor(periodic_rate, periods)
}

/// `(1 + rate)^periods` for any period count
pub fn compound_factor(periodic_rate: f64, periods: u32) -> f64 {
    let base = 1.0 + periodic_rate;
    match i32::try_from(periods) {
        Ok(n) => base.powi(n),
        Err(_) => base.powf(periods as f64),
    }
}

/// Round half toward positive infinity (1.5 -> 2, -1.5 -> -1)
///
/// Used for the time-series samples, which are display values.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// `part / base * 100`
pub fn percentage_of(part: f64, base: f64) -> f64 {
    part / base * 100.0
}
