//! Quantum gate definitions for FTEC
//!
//! Gantree: L1_Circuit → Gate
//!
//! Physical gate set used by the code circuits and the unencoded reference.

use crate::types::{Angle, ClbitId, QubitId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical gate enumeration
/// Gantree: Gate // 게이트 enum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    // ========================================================================
    // Single-Qubit Gates (Non-Parameterized)
    // ========================================================================
    /// Hadamard gate
    /// Gantree: H(QubitId) // 하다마드
    H(QubitId),

    /// Pauli-X gate (NOT)
    /// Gantree: X(QubitId) // 파울리 X
    X(QubitId),

    /// Pauli-Y gate
    Y(QubitId),

    /// Pauli-Z gate
    /// Gantree: Z(QubitId) // 파울리 Z
    Z(QubitId),

    /// Identity gate (noise slot)
    Id(QubitId),

    // ========================================================================
    // Single-Qubit Parameterized Gates
    // ========================================================================
    /// Phase gate P(λ) = diag(1, e^{iλ})
    /// Gantree: Phase(QubitId, Angle) // 위상
    Phase(QubitId, Angle),

    // ========================================================================
    // Two-Qubit Gates
    // ========================================================================
    /// Controlled-NOT (CX)
    /// Gantree: CNOT(QubitId, QubitId) // ctrl, tgt
    Cnot(QubitId, QubitId),

    /// Controlled-Z
    Cz(QubitId, QubitId),

    /// SWAP gate
    Swap(QubitId, QubitId),

    // ========================================================================
    // Measurement and Control
    // ========================================================================
    /// Measure a qubit into a classical readout bit
    /// Gantree: Measure(QubitId, ClbitId) // 측정
    Measure(QubitId, ClbitId),
}

impl Gate {
    // ========================================================================
    // Gate Properties
    // ========================================================================

    /// Get qubits involved in this gate
    /// Gantree: qubits(&self) -> Vec<QubitId> // 관련 큐비트
    pub fn qubits(&self) -> Vec<QubitId> {
        match self {
            Gate::H(q)
            | Gate::X(q)
            | Gate::Y(q)
            | Gate::Z(q)
            | Gate::Id(q)
            | Gate::Phase(q, _)
            | Gate::Measure(q, _) => vec![*q],

            Gate::Cnot(a, b) | Gate::Cz(a, b) | Gate::Swap(a, b) => vec![*a, *b],
        }
    }

    /// Classical bit written by this gate, if any
    pub fn clbit(&self) -> Option<ClbitId> {
        match self {
            Gate::Measure(_, c) => Some(*c),
            _ => None,
        }
    }

    /// Check if gate is a single-qubit unitary
    pub fn is_single_qubit(&self) -> bool {
        matches!(
            self,
            Gate::H(_)
                | Gate::X(_)
                | Gate::Y(_)
                | Gate::Z(_)
                | Gate::Id(_)
                | Gate::Phase(_, _)
        )
    }

    /// Check if gate is two-qubit
    pub fn is_two_qubit(&self) -> bool {
        matches!(self, Gate::Cnot(_, _) | Gate::Cz(_, _) | Gate::Swap(_, _))
    }

    /// Check if gate is measurement
    pub fn is_measurement(&self) -> bool {
        matches!(self, Gate::Measure(_, _))
    }

    /// Gate angle, if parameterized
    pub fn angle(&self) -> Option<Angle> {
        match self {
            Gate::Phase(_, a) => Some(*a),
            _ => None,
        }
    }

    /// Get gate name
    pub fn name(&self) -> &'static str {
        match self {
            Gate::H(_) => "h",
            Gate::X(_) => "x",
            Gate::Y(_) => "y",
            Gate::Z(_) => "z",
            Gate::Id(_) => "id",
            Gate::Phase(_, _) => "p",
            Gate::Cnot(_, _) => "cx",
            Gate::Cz(_, _) => "cz",
            Gate::Swap(_, _) => "swap",
            Gate::Measure(_, _) => "measure",
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::Phase(q, a) => write!(f, "{}({:.4}) q{}", self.name(), a, q),
            Gate::Cnot(a, b) | Gate::Cz(a, b) | Gate::Swap(a, b) => {
                write!(f, "{} q{}, q{}", self.name(), a, b)
            }
            Gate::Measure(q, c) => write!(f, "measure q{} -> ro[{}]", q, c),
            _ => write!(f, "{} q{}", self.name(), self.qubits()[0]),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_gate_qubits() {
        assert_eq!(Gate::H(3).qubits(), vec![3]);
        assert_eq!(Gate::Cnot(1, 2).qubits(), vec![1, 2]);
        assert_eq!(Gate::Measure(4, 0).qubits(), vec![4]);
    }

    #[test]
    fn test_gate_classification() {
        assert!(Gate::Phase(0, FRAC_PI_2).is_single_qubit());
        assert_eq!(Gate::Phase(0, FRAC_PI_2).angle(), Some(FRAC_PI_2));
        assert_eq!(Gate::Id(0).angle(), None);
        assert!(Gate::Swap(0, 1).is_two_qubit());
        assert!(Gate::Measure(0, 0).is_measurement());
        assert!(!Gate::Measure(0, 0).is_single_qubit());
        assert!(Gate::Id(3).is_single_qubit());
    }

    #[test]
    fn test_clbit() {
        assert_eq!(Gate::Measure(2, 7).clbit(), Some(7));
        assert_eq!(Gate::X(2).clbit(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Gate::Cz(0, 1).to_string(), "cz q0, q1");
        assert_eq!(Gate::Z(2).to_string(), "z q2");
    }
}
