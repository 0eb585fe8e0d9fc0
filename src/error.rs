//! Error types for the input, configuration and loader layers
//!
//! The projection engine itself never fails; these errors come from checking
//! caller input against the calculator contract and from reading files.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalcError {
    #[error("Invalid {field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error("Term of {months} months is outside {min}..={max}")]
    TermOutOfRange { months: u32, min: u32, max: u32 },

    #[error("Expected between {min} and {max} bank offers, got {count}")]
    BankCount { count: usize, min: usize, max: usize },

    #[error("No bank offers to compare")]
    NoOffers,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CalcError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        CalcError::Validation {
            field,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
