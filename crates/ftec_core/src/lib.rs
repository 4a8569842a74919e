//! # FTEC Core
//!
//! Core types, gates, and circuits for the Fault-Tolerance Encoding Check.
//!
//! ## Gantree Architecture
//!
//! ```text
//! ftec_core // L0+L1: Foundation + Circuit (완료)
//!     L0_Foundation // 기반 타입/상수/에러 (완료)
//!         CoreTypes // 핵심 타입 (완료)
//!         Constants // 코드/백엔드/실험 상수 (완료)
//!         Errors // 에러 타입 (완료)
//!     L1_Circuit // 회로 구조 (완료)
//!         Gate // 게이트 enum (완료)
//!         Circuit // 회로 구조체 + 판독 영역 (완료)
//!         CircuitBuilder // 빌더 패턴 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use ftec_core::prelude::*;
//!
//! // Bell pair with a 2-bit readout
//! let circuit = CircuitBuilder::new(2)
//!     .h(0)
//!     .cnot(0, 1)
//!     .measure_all()
//!     .build();
//!
//! assert_eq!(circuit.num_clbits(), 2);
//! println!("{}", circuit);
//! ```
//!
//! ## Fresh Qubit Allocation
//!
//! ```rust
//! use ftec_core::prelude::*;
//!
//! let mut circuit = Circuit::new(0);
//! let register = circuit.allocate_qubits(5);
//! circuit.add_gate(Gate::H(register[1])).unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Core types (Gantree: L0_Foundation → CoreTypes)
pub mod types;

/// Constants (Gantree: L0_Foundation → Constants)
pub mod constants;

/// Error types (Gantree: L0_Foundation → Errors)
pub mod error;

/// Quantum gates (Gantree: L1_Circuit → Gate)
pub mod gate;

/// Circuit structure (Gantree: L1_Circuit → Circuit)
pub mod circuit;

/// Circuit builder (Gantree: L1_Circuit → CircuitBuilder)
pub mod builder;

// ============================================================================
// Re-exports
// ============================================================================

pub use builder::CircuitBuilder;
pub use circuit::Circuit;
pub use constants::{backend, code, experiment};
pub use error::{FtecError, FtecResult};
pub use gate::Gate;
pub use types::{Angle, Bitstring, ClbitId, Probability, QubitId};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use ftec_core::prelude::*;
    //! ```

    pub use crate::builder::CircuitBuilder;
    pub use crate::circuit::Circuit;
    pub use crate::constants::{backend, code, experiment};
    pub use crate::error::{FtecError, FtecResult};
    pub use crate::gate::Gate;
    pub use crate::types::{Angle, Bitstring, ClbitId, Probability, QubitId};
}

// ============================================================================
// Version Information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_five_qubit_block_with_readout() {
        let mut circuit = Circuit::new(0);
        let reg = circuit.allocate_qubits(code::CODE_QUBITS);
        circuit.add_gate(Gate::H(reg[1])).unwrap();
        circuit.add_gate(Gate::Cnot(reg[1], reg[2])).unwrap();

        let ro = circuit.declare_readout(code::CODE_QUBITS);
        for (q, c) in reg.iter().zip(ro) {
            circuit.add_gate(Gate::Measure(*q, c)).unwrap();
        }

        assert_eq!(circuit.num_qubits(), 5);
        assert_eq!(circuit.num_clbits(), 5);
        assert_eq!(circuit.count_measurements(), 5);
        assert_eq!(circuit.count_2q(), 1);
    }

    #[test]
    fn test_phase_gate_angle() {
        let circuit = CircuitBuilder::new(1).phase(0, FRAC_PI_2).build();
        let angle = circuit.gates()[0].angle().unwrap();
        assert_abs_diff_eq!(angle, FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_circuit_serde_roundtrip() {
        let circuit = CircuitBuilder::with_name(2, "reference")
            .h(0)
            .h(1)
            .swap(0, 1)
            .measure_all()
            .build();

        let json = serde_json::to_string(&circuit).unwrap();
        let parsed: Circuit = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, circuit);
    }

    #[test]
    fn test_display_lists_gates() {
        let circuit = CircuitBuilder::new(2).cz(0, 1).build();
        let text = circuit.to_string();
        assert!(text.contains("1 gates"));
        assert!(text.contains("cz q0, q1"));
    }
}
