//! Error types for the payroll calculation engine.
//!
//! Calculators fail with a single [`EngineError::InvalidArgument`] kind; the
//! remaining variants belong to policy configuration loading.

use thiserror::Error;

/// The main error type for the payroll calculation engine.
///
/// # Example
///
/// ```
/// use nomina_engine::error::EngineError;
///
/// let error = EngineError::InvalidArgument {
///     field: "hourly_rate".to_string(),
///     message: "must be non-negative, got -1".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid argument 'hourly_rate': must be non-negative, got -1"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A required numeric input was out of its documented domain.
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument {
        /// The input field that was rejected.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Builds an [`EngineError::InvalidArgument`] for `field`.
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Builds an [`EngineError::InvalidArgument`] for a value whose
    /// arithmetic left the representable decimal range.
    pub fn out_of_range(field: impl Into<String>) -> Self {
        Self::invalid_argument(field, "amount out of range")
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
