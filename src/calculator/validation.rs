//! Caller-side input checks run before any projector
//!
//! The engine tolerates any numeric input; these checks enforce the contract
//! of the input layer (finite values, bounded terms, sane offer lists).

use crate::error::{CalcError, Result};
use crate::projection::BankOffer;

/// Finite and non-negative (amounts, contributions)
pub fn check_amount(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CalcError::validation(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(CalcError::validation(field, format!("must not be negative, got {}", value)));
    }
    Ok(())
}

/// Finite and strictly positive (loan principal)
pub fn check_positive(field: &'static str, value: f64) -> Result<()> {
    check_amount(field, value)?;
    if value == 0.0 {
        return Err(CalcError::validation(field, "must be greater than zero"));
    }
    Ok(())
}

/// Finite; negative rates are allowed
pub fn check_rate(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CalcError::validation(field, "must be a finite number"));
    }
    Ok(())
}

/// Term within `min..=max` months
pub fn check_term(months: u32, min: u32, max: u32) -> Result<()> {
    if months < min || months > max {
        return Err(CalcError::TermOutOfRange { months, min, max });
    }
    Ok(())
}

/// Target age after current age, with the span within `max_months`
pub fn check_ages(current_age: u32, target_age: u32, max_months: u32) -> Result<()> {
    if target_age <= current_age {
        return Err(CalcError::validation(
            "target age",
            format!("must be greater than current age {}", current_age),
        ));
    }
    check_term((target_age - current_age).saturating_mul(12), 12, max_months)
}

/// Offer count within `min..=max`, named, with finite non-negative rates
pub fn check_banks(banks: &[BankOffer], min: usize, max: usize) -> Result<()> {
    if banks.is_empty() {
        return Err(CalcError::NoOffers);
    }
    if banks.len() < min || banks.len() > max {
        return Err(CalcError::BankCount {
            count: banks.len(),
            min,
            max,
        });
    }
    for bank in banks {
        if bank.name.trim().is_empty() {
            return Err(CalcError::validation("bank name", "must not be empty"));
        }
        check_amount("bank rate", bank.rate)?;
    }
    Ok(())
}
