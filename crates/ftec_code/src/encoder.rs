//! Encoding circuit for the five-qubit error-detecting code
//!
//! Gantree: L3_Code → Encoder
//!
//! Four data qubits carry the [[4,2,2]] code, a fifth ancilla records the
//! parity `q2 ⊕ q3` at encoding time. Logical gates are transversal on the
//! data block and never touch the ancilla.
//!
//! | gate   | physical                    |
//! |--------|-----------------------------|
//! | `X(0)` | X on q0, q2                 |
//! | `X(1)` | X on q0, q1                 |
//! | `Z(0)` | Z on q0, q1                 |
//! | `Z(1)` | Z on q0, q2                 |
//! | `H`    | H on q0..q3 (H⊗H then SWAP) |
//! | `CZ`   | PHASE(π/2) on q0..q3        |
//!
//! The idle variant of the circuit puts an identity on all five qubits after
//! every logical gate, giving the backend's idle error somewhere to act.

use crate::logical::{LogicalBit, LogicalGate};
use ftec_core::{code, Circuit, CircuitBuilder, FtecError, FtecResult, Gate, QubitId};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// Qubits of one encoded block
/// Gantree: CodeRegister // (q0,q1,q2,q3,a)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeRegister {
    data: [QubitId; code::DATA_QUBITS],
    ancilla: QubitId,
}

impl CodeRegister {
    /// Allocate five fresh qubits in `circuit`
    pub fn allocate(circuit: &mut Circuit) -> Self {
        let qubits = circuit.allocate_qubits(code::CODE_QUBITS);
        Self {
            data: [qubits[0], qubits[1], qubits[2], qubits[3]],
            ancilla: qubits[code::ANCILLA_INDEX],
        }
    }

    /// Data qubits q0..q3
    pub fn data(&self) -> &[QubitId; code::DATA_QUBITS] {
        &self.data
    }

    /// Parity ancilla
    pub fn ancilla(&self) -> QubitId {
        self.ancilla
    }

    /// All five qubits in readout order
    pub fn qubits(&self) -> [QubitId; code::CODE_QUBITS] {
        let [q0, q1, q2, q3] = self.data;
        [q0, q1, q2, q3, self.ancilla]
    }

    /// Every qubit of the block exists in `circuit`
    fn check_fits(&self, circuit: &Circuit) -> FtecResult<()> {
        match self.qubits().into_iter().find(|&q| q >= circuit.num_qubits()) {
            Some(qubit) => Err(FtecError::GateQubitMismatch {
                qubit,
                num_qubits: circuit.num_qubits(),
            }),
            None => Ok(()),
        }
    }
}

// ============================================================================
// Circuit Construction
// ============================================================================

/// Fresh circuit holding the encoded `|00>_L` block
///
/// Data block ends in `(|0000> + |1111>)/√2`, ancilla in `|0>`.
/// Gantree: encode() -> (Circuit, CodeRegister) // 인코딩 템플릿
pub fn encode() -> (Circuit, CodeRegister) {
    let mut circuit = Circuit::with_name(0, "encoded");
    let register = CodeRegister::allocate(&mut circuit);
    let [q0, q1, q2, q3, a] = register.qubits();

    let circuit = CircuitBuilder::from_circuit(circuit)
        .h(q1)
        .cnot(q1, q2)
        .cnot(q1, q0)
        .cnot(q2, q3)
        .cnot(q3, a)
        .cnot(q2, a)
        .build();

    (circuit, register)
}

/// Physical gates implementing `gate` on `register`
pub fn physical_gates(register: &CodeRegister, gate: LogicalGate) -> Vec<Gate> {
    let [q0, q1, q2, q3] = *register.data();
    match gate {
        LogicalGate::X(bit) if bit == LogicalBit::ZERO => vec![Gate::X(q0), Gate::X(q2)],
        LogicalGate::X(_) => vec![Gate::X(q0), Gate::X(q1)],
        LogicalGate::Z(bit) if bit == LogicalBit::ZERO => vec![Gate::Z(q0), Gate::Z(q1)],
        LogicalGate::Z(_) => vec![Gate::Z(q0), Gate::Z(q2)],
        LogicalGate::H => register.data().iter().map(|&q| Gate::H(q)).collect(),
        LogicalGate::Cz => register
            .data()
            .iter()
            .map(|&q| Gate::Phase(q, FRAC_PI_2))
            .collect(),
    }
}

/// Append one logical gate
///
/// Fails only when `register` does not belong to `circuit`; the circuit is
/// left untouched in that case.
/// Gantree: apply_logical_gate(circuit, reg, gate) -> Result<&mut Circuit>
pub fn apply_logical_gate<'c>(
    circuit: &'c mut Circuit,
    register: &CodeRegister,
    gate: LogicalGate,
) -> FtecResult<&'c mut Circuit> {
    register.check_fits(circuit)?;
    circuit.add_gates(physical_gates(register, gate))?;
    Ok(circuit)
}

/// Append a logical gate given by name, e.g. `("X", 1)` or `("H", 0)`
/// Gantree: apply_named_gate(circuit, reg, name, bit) -> Result // 문자열 디스패치
pub fn apply_named_gate<'c>(
    circuit: &'c mut Circuit,
    register: &CodeRegister,
    name: &str,
    bit: usize,
) -> FtecResult<&'c mut Circuit> {
    let gate = LogicalGate::parse(name, bit)?;
    apply_logical_gate(circuit, register, gate)
}

/// Declare a five-bit readout and measure `q0,q1,q2,q3,a` into it in order
/// Gantree: append_measurement(circuit, reg) -> Result<&mut Circuit> // 측정
pub fn append_measurement<'c>(
    circuit: &'c mut Circuit,
    register: &CodeRegister,
) -> FtecResult<&'c mut Circuit> {
    register.check_fits(circuit)?;
    let readout = circuit.declare_readout(code::CODE_QUBITS);
    let measurements = register
        .qubits()
        .into_iter()
        .zip(readout)
        .map(|(q, c)| Gate::Measure(q, c));
    circuit.add_gates(measurements)?;
    Ok(circuit)
}

/// Idle slot on every qubit of the block, ancilla included
pub fn idle_gates(register: &CodeRegister) -> Vec<Gate> {
    register.qubits().into_iter().map(Gate::Id).collect()
}

/// Append one idle slot per qubit of the block
///
/// The slots are identities; a backend with a nonzero idle error turns
/// each into a Pauli fault site.
/// Gantree: append_idle(circuit, reg) -> Result<&mut Circuit> // 유휴 노이즈
pub fn append_idle<'c>(
    circuit: &'c mut Circuit,
    register: &CodeRegister,
) -> FtecResult<&'c mut Circuit> {
    register.check_fits(circuit)?;
    circuit.add_gates(idle_gates(register))?;
    Ok(circuit)
}

/// Encode, apply `gates` in order, then measure
/// Gantree: encoded_circuit(gates) -> Result<Circuit> // 전체 인코딩 회로
pub fn encoded_circuit(gates: &[LogicalGate]) -> FtecResult<Circuit> {
    build_encoded(gates, false)
}

/// Like [`encoded_circuit`], with idle slots after every logical gate
pub fn encoded_circuit_with_idle(gates: &[LogicalGate]) -> FtecResult<Circuit> {
    build_encoded(gates, true)
}

fn build_encoded(gates: &[LogicalGate], idle: bool) -> FtecResult<Circuit> {
    let (mut circuit, register) = encode();
    for &gate in gates {
        apply_logical_gate(&mut circuit, &register, gate)?;
        if idle {
            append_idle(&mut circuit, &register)?;
        }
    }
    append_measurement(&mut circuit, &register)?;
    Ok(circuit)
}

// ============================================================================
// Tests
// ============================================================================
