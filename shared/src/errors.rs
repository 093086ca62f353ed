//! Error types for the Final Tap domain

use thiserror::Error;

/// Errors raised by the longevity scorer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    /// A biometric or numeric habit that would make the score meaningless
    /// (zero height, negative sleep, NaN, ...)
    #[error("Invalid {field}: {value}")]
    InvalidBiometric { field: &'static str, value: f64 },
}

impl ScoringError {
    /// Name of the offending profile field (wire name)
    pub fn field(&self) -> &'static str {
        match self {
            ScoringError::InvalidBiometric { field, .. } => field,
        }
    }
}

/// Errors raised while turning remaining years into a calendar end date
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    #[error("End date is outside the supported calendar range")]
    OutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_error_message_names_field() {
        let err = ScoringError::InvalidBiometric {
            field: "height",
            value: 0.0,
        };
        assert_eq!(err.field(), "height");
        assert_eq!(err.to_string(), "Invalid height: 0");
    }
}
