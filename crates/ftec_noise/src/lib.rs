//! # FTEC Noise
//!
//! Noise model artifact for the simulator backend.
//!
//! ## Gantree Architecture
//!
//! ```text
//! ftec_noise // L2: Noise Model (완료)
//!     NoiseModel // 파울리 노이즈 (완료)
//!         gate_error_1q, gate_error_2q, readout_error, idle_error
//!         new(), ideal(), from_depol(), readout_only()
//!         from_json(), from_file(), to_file()
//!         validate(), is_ideal()
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use ftec_noise::prelude::*;
//!
//! let model = NoiseModel::from_json(r#"{
//!     "name": "lab",
//!     "gate_error_1q": 0.001,
//!     "gate_error_2q": 0.01,
//!     "readout_error": 0.02
//! }"#).unwrap();
//!
//! assert_eq!(model.name(), Some("lab"));
//! assert!(!model.is_ideal());
//! ```

#![warn(missing_docs)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Stochastic Pauli noise model (Gantree: L2_Noise → NoiseModel)
pub mod noise_model;

// ============================================================================
// Re-exports
// ============================================================================

pub use noise_model::NoiseModel;

// ============================================================================
// Prelude
// ============================================================================

/// Convenient imports for common use cases
pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! ```rust
    //! use ftec_noise::prelude::*;
    //! ```

    pub use crate::noise_model::NoiseModel;
}

// ============================================================================
// Integration Tests
// ============================================================================
