//! Circuit builder for FTEC
//!
//! Gantree: L1_Circuit → CircuitBuilder
//!
//! Fluent builder for small fixed circuits (tests, reference circuits).
//! Invalid gates are dropped silently; use `Circuit::add_gate` when the
//! error matters.

use crate::circuit::Circuit;
use crate::error::{FtecError, FtecResult};
use crate::gate::Gate;
use crate::types::{Angle, ClbitId, QubitId};

/// Fluent circuit builder (consuming self pattern)
/// Gantree: CircuitBuilder // 빌더 패턴
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    // ========================================================================
    // Constructor
    // ========================================================================

    /// Create a new circuit builder
    /// Gantree: new(n) -> Self // 생성자
    pub fn new(num_qubits: usize) -> Self {
        Self {
            circuit: Circuit::new(num_qubits),
        }
    }

    /// Create with circuit name
    pub fn with_name(num_qubits: usize, name: impl Into<String>) -> Self {
        Self {
            circuit: Circuit::with_name(num_qubits, name),
        }
    }

    /// Continue building on an existing circuit
    pub fn from_circuit(circuit: Circuit) -> Self {
        Self { circuit }
    }

    fn push(mut self, gate: Gate) -> Self {
        let _ = self.circuit.add_gate(gate);
        self
    }

    // ========================================================================
    // Single-Qubit Gates
    // ========================================================================

    /// Add Hadamard gate
    /// Gantree: h(self, q) -> Self // H 추가
    pub fn h(self, qubit: QubitId) -> Self {
        self.push(Gate::H(qubit))
    }

    /// Add Pauli-X gate
    pub fn x(self, qubit: QubitId) -> Self {
        self.push(Gate::X(qubit))
    }

    /// Add Pauli-Z gate
    pub fn z(self, qubit: QubitId) -> Self {
        self.push(Gate::Z(qubit))
    }

    /// Add identity gate (idle noise slot)
    pub fn id(self, qubit: QubitId) -> Self {
        self.push(Gate::Id(qubit))
    }

    /// Add phase gate
    /// Gantree: phase(self, q, a) -> Self // 위상 추가
    pub fn phase(self, qubit: QubitId, angle: Angle) -> Self {
        self.push(Gate::Phase(qubit, angle))
    }

    // ========================================================================
    // Two-Qubit Gates
    // ========================================================================

    /// Add CNOT gate
    /// Gantree: cnot(self, c, t) -> Self // CNOT 추가
    pub fn cnot(self, control: QubitId, target: QubitId) -> Self {
        self.push(Gate::Cnot(control, target))
    }

    /// Add CZ gate
    pub fn cz(self, control: QubitId, target: QubitId) -> Self {
        self.push(Gate::Cz(control, target))
    }

    /// Add SWAP gate
    pub fn swap(self, qubit1: QubitId, qubit2: QubitId) -> Self {
        self.push(Gate::Swap(qubit1, qubit2))
    }

    // ========================================================================
    // Measurement
    // ========================================================================

    /// Declare `size` readout bits
    pub fn readout(mut self, size: usize) -> Self {
        self.circuit.declare_readout(size);
        self
    }

    /// Measure a qubit into a readout bit
    pub fn measure(self, qubit: QubitId, clbit: ClbitId) -> Self {
        self.push(Gate::Measure(qubit, clbit))
    }

    /// Declare a readout bit per qubit and measure q[i] -> ro[i]
    /// Gantree: measure_all(self) -> Self // 전체 측정
    pub fn measure_all(mut self) -> Self {
        let bits = self.circuit.declare_readout(self.circuit.num_qubits());
        for (q, c) in bits.enumerate() {
            let _ = self.circuit.add_gate(Gate::Measure(q, c));
        }
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build and return the circuit
    /// Gantree: build(self) -> Circuit // 빌드
    pub fn build(self) -> Circuit {
        self.circuit
    }

    /// Build with validation
    pub fn build_validated(self) -> FtecResult<Circuit> {
        if self.circuit.is_empty() {
            return Err(FtecError::EmptyCircuit);
        }
        Ok(self.circuit)
    }

    /// Get reference to current circuit state
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Get number of qubits
    pub fn num_qubits(&self) -> usize {
        self.circuit.num_qubits()
    }
}

// ============================================================================
// Tests
// ============================================================================
