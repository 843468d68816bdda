//! Core error types for the goal tracker.
//!
//! Every rejected operation leaves state untouched and reports why as one of
//! these values. Callers that only care about the no-op can drop the error.

use std::num::ParseFloatError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for goal tracking.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Goal not found: {0}")]
    GoalNotFound(String),

    #[error("Goal id '{0}' is already in use")]
    DuplicateId(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Failed to parse number: {0}")]
    NumberParse(#[from] ParseFloatError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}

impl From<ParseFloatError> for Error {
    fn from(err: ParseFloatError) -> Self {
        Error::Validation(ValidationError::NumberParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_converts_to_validation() {
        let err: Error = "abc".parse::<f64>().unwrap_err().into();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::NumberParse(_))
        ));
    }

    #[test]
    fn test_error_into_string() {
        let message: String = Error::GoalNotFound("goal-7".to_string()).into();
        assert_eq!(message, "Goal not found: goal-7");
    }

    #[test]
    fn test_validation_message_is_wrapped() {
        let err = Error::Validation(ValidationError::MissingField("name".to_string()));
        assert_eq!(
            err.to_string(),
            "Input validation failed: Required field 'name' is missing"
        );
    }
}
