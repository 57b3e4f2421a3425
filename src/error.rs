//! Error types for the sequence engine.
//!
//! This module provides a unified error type [`SeqError`] that covers
//! sequence construction, algebra, transforms, filtering and numeric
//! evaluation.

use thiserror::Error;

/// Result type alias using [`SeqError`].
pub type Result<T> = std::result::Result<T, SeqError>;

/// Unified error type for all sequence operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeqError {
    // ============ Construction Errors ============
    /// Both explicit indices and an origin were supplied
    #[error("Cannot specify both indices and origin")]
    ConflictingArguments,

    /// Values and indices have different lengths
    #[error("Length mismatch: {values} values but {indices} indices")]
    LengthMismatch { values: usize, indices: usize },

    /// Indices are not strictly increasing
    #[error("Indices must be strictly increasing (violated at position {position})")]
    NonIncreasingIndices { position: usize },

    /// Unknown domain token
    #[error("Unknown domain '{token}' (expected n, k or z)")]
    UnknownDomain { token: String },

    // ============ Algebra Errors ============
    /// Delay is not a whole number of samples
    #[error("Non-integer delay {delay}")]
    NonIntegerDelay { delay: f64 },

    /// Shifting or placing indices left the i64 range
    #[error("Index overflow: {index} shifted by {offset}")]
    IndexOverflow { index: i64, offset: i64 },

    /// Unknown convolution mode
    #[error("Unknown mode '{mode}' (expected full or same)")]
    UnknownMode { mode: String },

    // ============ Scalar Errors ============
    /// Division by a zero scalar
    #[error("Division by zero")]
    DivisionByZero,

    /// Division by a scalar the backend cannot invert
    #[error("Cannot divide by '{value}'")]
    NotInvertible { value: String },

    /// Value does not reduce to a number
    #[error("Value '{value}' cannot be evaluated numerically")]
    NotNumeric { value: String },

    /// Scalar backend cannot represent the operation
    #[error("Operation '{operation}' needs a symbolic scalar backend")]
    SymbolicUnsupported { operation: &'static str },

    // ============ WASM Errors ============
    /// WASM-specific error
    #[cfg(feature = "wasm")]
    #[error("WASM error: {message}")]
    WasmError { message: String },
}

impl SeqError {
    /// Create a length mismatch error
    pub fn length_mismatch(values: usize, indices: usize) -> Self {
        Self::LengthMismatch { values, indices }
    }

    /// Create a not-invertible error
    pub fn not_invertible(value: impl Into<String>) -> Self {
        Self::NotInvertible {
            value: value.into(),
        }
    }

    /// Create a not-numeric error
    pub fn not_numeric(value: impl Into<String>) -> Self {
        Self::NotNumeric {
            value: value.into(),
        }
    }

    /// Create an unknown mode error
    pub fn unknown_mode(mode: impl Into<String>) -> Self {
        Self::UnknownMode { mode: mode.into() }
    }
}
