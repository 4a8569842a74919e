//! Quantum circuit structure for FTEC
//!
//! Gantree: L1_Circuit → Circuit
//!
//! Declarative, append-only circuit: a qubit count, a classical readout
//! region and an ordered gate list. Qubits are allocated on demand so code
//! blocks can ask for fresh identifiers instead of hard-coding them.

use crate::error::{FtecError, FtecResult};
use crate::gate::Gate;
use crate::types::{ClbitId, QubitId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::ops::Range;

/// Quantum circuit
/// Gantree: Circuit // 회로 구조체
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Circuit {
    /// Number of qubits
    num_qubits: usize,

    /// Number of declared classical readout bits
    /// Gantree: num_clbits: usize // 판독 비트 수
    num_clbits: usize,

    /// Gate sequence
    gates: Vec<Gate>,

    /// Optional circuit name
    name: Option<String>,
}

impl Circuit {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a new empty circuit
    /// Gantree: new(n) -> Self // 생성자
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            ..Default::default()
        }
    }

    /// Create a circuit with a name
    pub fn with_name(num_qubits: usize, name: impl Into<String>) -> Self {
        Self {
            num_qubits,
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Create from a vector of gates
    pub fn from_gates(num_qubits: usize, num_clbits: usize, gates: Vec<Gate>) -> FtecResult<Self> {
        let mut circuit = Self::new(num_qubits);
        circuit.num_clbits = num_clbits;
        circuit.add_gates(gates)?;
        Ok(circuit)
    }

    // ========================================================================
    // Allocation
    // ========================================================================

    /// Allocate `n` fresh qubits and return their identifiers
    /// Gantree: allocate_qubits(&mut, n) -> Vec<QubitId> // 큐비트 할당
    pub fn allocate_qubits(&mut self, n: usize) -> Vec<QubitId> {
        let start = self.num_qubits;
        self.num_qubits += n;
        (start..self.num_qubits).collect()
    }

    /// Declare `size` more classical readout bits and return their range
    /// Gantree: declare_readout(&mut, size) -> Range<ClbitId> // 판독 영역
    pub fn declare_readout(&mut self, size: usize) -> Range<ClbitId> {
        let start = self.num_clbits;
        self.num_clbits += size;
        start..self.num_clbits
    }

    // ========================================================================
    // Basic Operations
    // ========================================================================

    /// Add a gate to the circuit
    /// Gantree: add_gate(&mut, Gate) -> Result // 게이트 추가
    pub fn add_gate(&mut self, gate: Gate) -> FtecResult<()> {
        self.check_gate(&gate)?;
        self.gates.push(gate);
        Ok(())
    }

    /// Add multiple gates
    pub fn add_gates(&mut self, gates: impl IntoIterator<Item = Gate>) -> FtecResult<()> {
        for gate in gates {
            self.add_gate(gate)?;
        }
        Ok(())
    }

    /// Get number of qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get number of classical readout bits
    pub fn num_clbits(&self) -> usize {
        self.num_clbits
    }

    /// Get gates
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Get circuit name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set circuit name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Check if circuit is empty
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    // ========================================================================
    // Circuit Analysis
    // ========================================================================

    /// Calculate circuit depth (longest path)
    /// Gantree: depth(&self) -> usize // 깊이 계산
    pub fn depth(&self) -> usize {
        let mut qubit_depths = vec![0usize; self.num_qubits];

        for gate in &self.gates {
            let qubits = gate.qubits();
            let max_depth = qubits
                .iter()
                .filter_map(|&q| qubit_depths.get(q))
                .max()
                .copied()
                .unwrap_or(0);

            for &q in &qubits {
                if let Some(d) = qubit_depths.get_mut(q) {
                    *d = max_depth + 1;
                }
            }
        }

        qubit_depths.into_iter().max().unwrap_or(0)
    }

    /// Get total gate count
    /// Gantree: gate_count(&self) -> usize // 게이트 수
    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    /// Count single-qubit gates
    pub fn count_1q(&self) -> usize {
        self.gates.iter().filter(|g| g.is_single_qubit()).count()
    }

    /// Count two-qubit gates
    pub fn count_2q(&self) -> usize {
        self.gates.iter().filter(|g| g.is_two_qubit()).count()
    }

    /// Count measurement operations
    pub fn count_measurements(&self) -> usize {
        self.gates.iter().filter(|g| g.is_measurement()).count()
    }

    /// Get qubits used in the circuit
    pub fn used_qubits(&self) -> HashSet<QubitId> {
        self.gates.iter().flat_map(|g| g.qubits()).collect()
    }

    // ========================================================================
    // Validation
    // ========================================================================

    fn check_gate(&self, gate: &Gate) -> FtecResult<()> {
        for qubit in gate.qubits() {
            if qubit >= self.num_qubits {
                return Err(FtecError::GateQubitMismatch {
                    qubit,
                    num_qubits: self.num_qubits,
                });
            }
        }
        if let Some(clbit) = gate.clbit() {
            if clbit >= self.num_clbits {
                return Err(FtecError::ClbitOutOfRange {
                    clbit,
                    num_clbits: self.num_clbits,
                });
            }
        }
        if let Some(angle) = gate.angle() {
            if !angle.is_finite() {
                return Err(FtecError::InvalidAngle(angle));
            }
        }
        if let Gate::Cnot(a, b) | Gate::Cz(a, b) | Gate::Swap(a, b) = gate {
            if a == b {
                return Err(FtecError::InvalidGateParameter(format!(
                    "{} needs two distinct qubits, got q{} twice",
                    gate.name(),
                    a
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Circuit{} ({} qubits, {} clbits, {} gates, depth {})",
            self.name
                .as_deref()
                .map(|n| format!(" '{}'", n))
                .unwrap_or_default(),
            self.num_qubits,
            self.num_clbits,
            self.gates.len(),
            self.depth()
        )?;
        for gate in &self.gates {
            writeln!(f, "  {}", gate)?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
