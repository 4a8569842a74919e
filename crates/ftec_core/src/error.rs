//! Error types for FTEC
//!
//! Gantree: L0_Foundation → Errors
//!
//! Single error enum shared by every FTEC crate.

// Error variant fields are self-documenting via error messages
#![allow(missing_docs)]

use thiserror::Error;

/// Main error type for FTEC
/// Gantree: FtecError // enum
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FtecError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// Probability value out of range [0, 1]
    /// Gantree: InvalidProbability(f64) // 확률 범위
    #[error("Invalid probability {0}: must be in range [0, 1]")]
    InvalidProbability(f64),

    /// Qubit index out of range
    #[error("Qubit {qubit} out of range: max is {max}")]
    QubitOutOfRange { qubit: usize, max: usize },

    /// Invalid bitstring format
    #[error("Invalid bitstring '{0}': must contain only '0' and '1'")]
    InvalidBitstring(String),

    /// Invalid angle
    #[error("Invalid angle {0}: must be finite")]
    InvalidAngle(f64),

    // ========================================================================
    // Logical Gate Errors
    // ========================================================================
    /// Unknown logical gate name
    /// Gantree: InvalidGate(String) // 게이트 이름
    #[error("Invalid gate '{0}': must be one of X, Z, H, CZ")]
    InvalidGate(String),

    /// Logical bit index not in {0, 1}
    /// Gantree: InvalidLogicalBit(usize) // 논리 비트
    #[error("Invalid logical bit {0}: must be 0 or 1")]
    InvalidLogicalBit(usize),

    /// Readout vector of the wrong width handed to the decoder
    #[error("Measurement vector has {actual} bits, expected {expected}")]
    InvalidMeasurementLength { expected: usize, actual: usize },

    // ========================================================================
    // Circuit Errors
    // ========================================================================
    /// Empty circuit
    #[error("Circuit is empty")]
    EmptyCircuit,

    /// Gate on non-existent qubit
    #[error("Gate references qubit {qubit} but circuit has only {num_qubits} qubits")]
    GateQubitMismatch { qubit: usize, num_qubits: usize },

    /// Measurement into an undeclared classical bit
    #[error("Classical bit {clbit} out of range: readout has {num_clbits} bits")]
    ClbitOutOfRange { clbit: usize, num_clbits: usize },

    /// Invalid gate parameter
    #[error("Invalid gate parameter: {0}")]
    InvalidGateParameter(String),

    // ========================================================================
    // Backend Errors
    // ========================================================================
    /// Backend execution error
    /// Gantree: BackendError(String) // 백엔드
    #[error("Backend error: {0}")]
    BackendError(String),

    /// Shots out of range
    #[error("Shots {0} out of range [{1}, {2}]")]
    ShotsOutOfRange(u64, u64, u64),

    /// Session used after close
    #[error("Session on backend '{0}' is closed")]
    SessionClosed(String),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid noise model
    #[error("Invalid noise model: {0}")]
    InvalidNoiseModel(String),

    /// Experiment configuration error
    #[error("Configuration error: {0}")]
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

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Result type alias for FTEC operations
/// Gantree: FtecResult<T> // type alias
pub type FtecResult<T> = Result<T, FtecError>;

// ============================================================================
// Error Conversion Helpers
// ============================================================================

impl From<serde_json::Error> for FtecError {
    fn from(err: serde_json::Error) -> Self {
        FtecError::JsonError(err.to_string())
    }
}

impl From<std::io::Error> for FtecError {
    fn from(err: std::io::Error) -> Self {
        FtecError::FileError(err.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
