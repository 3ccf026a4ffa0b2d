//! Error types for FLAGQEC
//!
//! Gantree: L0_Foundation → Errors
//!
//! The decoding core itself cannot fail: every syndrome/flag combination is
//! handled. These errors cover validation of inputs and configuration, and
//! I/O around trial runs. A logical error is a simulation outcome, never a
//! `QecError`.

// Error variant fields are self-documenting via error messages
#![allow(missing_docs)]

use thiserror::Error;

/// Main error type for FLAGQEC
/// Gantree: QecError // enum
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QecError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// Channel error rate out of range or not finite
    /// Gantree: InvalidErrorRate{{channel,rate}} // 확률 범위
    #[error("Invalid {channel} error rate {rate}: must be finite and in [0, 1]")]
    InvalidErrorRate { channel: &'static str, rate: f64 },

    /// Physical error rate for a sweep point
    #[error("Invalid physical error rate {0}: must be in (0, 1]")]
    InvalidGamma(f64),

    /// Qubit index outside the 9-qubit register
    /// Gantree: QubitOutOfRange{{q,max}} // 큐비트 범위
    #[error("Qubit {qubit} out of range: max is {max}")]
    QubitOutOfRange { qubit: usize, max: usize },

    /// Syndrome entry other than 0 or 1
    #[error("Invalid syndrome bit {value} at position {position}")]
    InvalidSyndromeBit { position: usize, value: u8 },

    // ========================================================================
    // Trial Errors
    // ========================================================================
    /// Zero trials requested
    #[error("Trial count must be > 0")]
    NoTrials,

    /// Empty sweep
    #[error("Sweep contains no physical error rates")]
    EmptySweep,

    /// Trial configuration error
    #[error("Trial configuration error: {0}")]
    ConfigError(String),

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(String),

    /// File I/O error
    #[error("File error: {0}")]
    FileError(String),
}

/// Result type alias for FLAGQEC operations
/// Gantree: QecResult<T> // type alias
pub type QecResult<T> = Result<T, QecError>;

// ============================================================================
// Error Conversion Helpers
// ============================================================================

impl From<serde_json::Error> for QecError {
    fn from(err: serde_json::Error) -> Self {
        QecError::JsonError(err.to_string())
    }
}

impl From<std::io::Error> for QecError {
    fn from(err: std::io::Error) -> Self {
        QecError::FileError(err.to_string())
    }
}

// ============================================================================
// Error Helpers
// ============================================================================

impl QecError {
    /// Check if error is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            QecError::InvalidErrorRate { .. }
                | QecError::InvalidGamma(_)
                | QecError::QubitOutOfRange { .. }
                | QecError::InvalidSyndromeBit { .. }
        )
    }

    /// Check if error comes from a trial configuration
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            QecError::NoTrials | QecError::EmptySweep | QecError::ConfigError(_)
        )
    }

    /// Check if error comes from reading or writing files
    pub fn is_io_error(&self) -> bool {
        matches!(self, QecError::JsonError(_) | QecError::FileError(_))
    }
}

// ============================================================================
// Tests
// ============================================================================
