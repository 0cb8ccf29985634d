/*!
 * Error Handling for the GF(2) Cyclic Coding Library
 *
 * Provides structured error types with numeric error codes, user-friendly
 * messages, and suggested remediation strategies.
 */

use std::collections::HashMap;
use thiserror::Error;

/// Error type for all coding and analysis operations
#[derive(Debug, Error)]
pub enum CodingError {
    #[error("Invalid divisor in {operation}: the zero polynomial cannot divide")]
    InvalidDivisor { operation: String, error_code: u32 },

    #[error("Invariant violated: {check} - {details}")]
    InvariantViolation {
        check: String,
        details: String,
        error_code: u32,
    },

    #[error("Arithmetic overflow in {operation}: {limit}")]
    Overflow {
        operation: String,
        limit: String,
        error_code: u32,
    },

    #[error("Invalid parameter: {parameter} - {expected} - got {actual}")]
    InvalidParameter {
        parameter: String,
        expected: String,
        actual: String,
        error_code: u32,
    },

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Error code constants for different error categories
pub mod error_codes {
    // Division errors: 1000-1999
    pub const DIVISOR_IS_ZERO: u32 = 1001;
    pub const PRODUCT_TOO_WIDE: u32 = 1002;

    // Bit-vector and encoder errors: 2000-2999
    pub const INVALID_BIT_STRING: u32 = 2001;
    pub const BIT_VECTOR_TOO_WIDE: u32 = 2002;
    pub const VALUE_EXCEEDS_WIDTH: u32 = 2003;
    pub const INVALID_GENERATOR: u32 = 2004;
    pub const INVALID_MESSAGE: u32 = 2005;

    // Analyzer errors: 3000-3999
    pub const CODEWORD_NOT_DIVISIBLE: u32 = 3001;
    pub const CODEWORD_EXCEEDS_LENGTH: u32 = 3002;
    pub const ANALYSIS_LENGTH_EXCEEDED: u32 = 3003;
    pub const MALFORMED_TABLE: u32 = 3004;

    // Combinatorics errors: 4000-4999
    pub const BINOMIAL_OUT_OF_RANGE: u32 = 4001;
    pub const BINOMIAL_OVERFLOW: u32 = 4002;

    // Configuration errors: 5000-5999
    pub const INVALID_CONFIGURATION: u32 = 5001;
}

impl CodingError {
    /// Get the numeric error code for this error
    pub fn error_code(&self) -> u32 {
        match self {
            CodingError::InvalidDivisor { error_code, .. } => *error_code,
            CodingError::InvariantViolation { error_code, .. } => *error_code,
            CodingError::Overflow { error_code, .. } => *error_code,
            CodingError::InvalidParameter { error_code, .. } => *error_code,
            CodingError::SerializationError(_) => 9001,
            CodingError::IoError(_) => 9002,
        }
    }

    /// Get a user-friendly error message
    pub fn user_friendly_message(&self) -> String {
        match self {
            CodingError::InvalidDivisor { operation, .. } => {
                format!(
                    "Operation '{}' was given a zero divisor. A generator polynomial must be nonzero.",
                    operation
                )
            }
            CodingError::InvariantViolation { check, .. } => {
                format!(
                    "Consistency check '{}' failed. The codeword and generator do not belong together.",
                    check
                )
            }
            CodingError::Overflow { operation, .. } => {
                format!(
                    "Operation '{}' exceeded the supported integer width.",
                    operation
                )
            }
            CodingError::InvalidParameter {
                parameter,
                expected,
                ..
            } => {
                format!(
                    "Invalid parameter '{}'. Expected {}.",
                    parameter, expected
                )
            }
            CodingError::SerializationError(_) => {
                "Data serialization failed. Data format may be corrupted.".to_string()
            }
            CodingError::IoError(_) => {
                "Input/output operation failed. Check file permissions and paths.".to_string()
            }
        }
    }

    /// Get technical details for debugging
    pub fn technical_details(&self) -> HashMap<String, String> {
        let mut details = HashMap::new();

        details.insert("error_code".to_string(), self.error_code().to_string());
        details.insert("error_type".to_string(), self.error_type().to_string());
        details.insert("timestamp".to_string(), chrono::Utc::now().to_rfc3339());

        match self {
            CodingError::InvalidDivisor { operation, .. } => {
                details.insert("operation".to_string(), operation.clone());
            }
            CodingError::InvariantViolation {
                check,
                details: check_details,
                ..
            } => {
                details.insert("check".to_string(), check.clone());
                details.insert("check_details".to_string(), check_details.clone());
            }
            CodingError::Overflow {
                operation, limit, ..
            } => {
                details.insert("operation".to_string(), operation.clone());
                details.insert("limit".to_string(), limit.clone());
            }
            CodingError::InvalidParameter {
                parameter,
                expected,
                actual,
                ..
            } => {
                details.insert("parameter".to_string(), parameter.clone());
                details.insert("expected".to_string(), expected.clone());
                details.insert("actual".to_string(), actual.clone());
            }
            _ => {
                details.insert("details".to_string(), format!("{:?}", self));
            }
        }

        details
    }

    /// Get suggested remediation steps
    pub fn suggested_remediation(&self) -> Option<String> {
        match self {
            CodingError::InvalidDivisor { .. } => {
                Some("Use a generator polynomial of degree at least 1.".to_string())
            }
            CodingError::InvariantViolation { error_code, .. } => match *error_code {
                error_codes::CODEWORD_NOT_DIVISIBLE => Some(
                    "Encode the message with the same generator before running the analysis."
                        .to_string(),
                ),
                _ => None,
            },
            CodingError::Overflow { error_code, .. } => match *error_code {
                error_codes::BINOMIAL_OVERFLOW => {
                    Some("Reduce the codeword length n.".to_string())
                }
                _ => Some("Keep operands within 64 bits.".to_string()),
            },
            CodingError::InvalidParameter { error_code, .. } => match *error_code {
                error_codes::ANALYSIS_LENGTH_EXCEEDED => Some(
                    "Exhaustive analysis is exponential in n. Use a shorter code or raise max_length."
                        .to_string(),
                ),
                error_codes::MALFORMED_TABLE => Some(
                    "Regenerate the report with analyze instead of editing it by hand.".to_string(),
                ),
                error_codes::INVALID_GENERATOR => Some(
                    "Write the generator most significant coefficient first, starting with '1'."
                        .to_string(),
                ),
                _ => None,
            },
            _ => None,
        }
    }

    /// Get the error category/type as a string
    pub fn error_type(&self) -> &'static str {
        match self {
            CodingError::InvalidDivisor { .. } => "InvalidDivisor",
            CodingError::InvariantViolation { .. } => "InvariantViolation",
            CodingError::Overflow { .. } => "Overflow",
            CodingError::InvalidParameter { .. } => "InvalidParameter",
            CodingError::SerializationError { .. } => "SerializationError",
            CodingError::IoError { .. } => "IoError",
        }
    }
}

/// Convenience constructors for common error types
impl CodingError {
    pub fn invalid_divisor(operation: &str) -> Self {
        CodingError::InvalidDivisor {
            operation: operation.to_string(),
            error_code: error_codes::DIVISOR_IS_ZERO,
        }
    }

    pub fn invariant_violation(check: &str, details: &str, error_code: u32) -> Self {
        CodingError::InvariantViolation {
            check: check.to_string(),
            details: details.to_string(),
            error_code,
        }
    }

    pub fn overflow(operation: &str, limit: &str, error_code: u32) -> Self {
        CodingError::Overflow {
            operation: operation.to_string(),
            limit: limit.to_string(),
            error_code,
        }
    }

    pub fn invalid_parameter(
        parameter: &str,
        expected: &str,
        actual: &str,
        error_code: u32,
    ) -> Self {
        CodingError::InvalidParameter {
            parameter: parameter.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
            error_code,
        }
    }
}

impl From<std::io::Error> for CodingError {
    fn from(err: std::io::Error) -> Self {
        CodingError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for CodingError {
    fn from(err: serde_json::Error) -> Self {
        CodingError::SerializationError(err.to_string())
    }
}

/// Result type for coding operations
pub type CodingResult<T> = Result<T, CodingError>;
