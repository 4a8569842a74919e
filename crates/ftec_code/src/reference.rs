//! Unencoded two-qubit reference circuit
//!
//! Gantree: L3_Code → Reference
//!
//! Runs the same logical sequence directly on two physical qubits, q0 for
//! logical bit 0 and q1 for logical bit 1. Its wavefunction is the ideal
//! distribution; its sampled readout is the unprotected baseline.

use crate::logical::LogicalGate;
use ftec_core::{code, Circuit, CircuitBuilder};

/// Build the reference circuit for `gates`
///
/// With `measure` set, a two-bit readout maps q0 to bit 0 and q1 to bit 1.
/// Gantree: reference_circuit(gates, measure) -> Circuit // 비인코딩 회로
pub fn reference_circuit(gates: &[LogicalGate], measure: bool) -> Circuit {
    build_reference(gates, measure, false)
}

/// Like [`reference_circuit`], with an idle slot on both qubits after every
/// logical gate
pub fn reference_circuit_with_idle(gates: &[LogicalGate], measure: bool) -> Circuit {
    build_reference(gates, measure, true)
}

fn build_reference(gates: &[LogicalGate], measure: bool, idle: bool) -> Circuit {
    let builder = gates.iter().fold(
        CircuitBuilder::with_name(code::LOGICAL_BITS, "reference"),
        |builder, gate| {
            let builder = match gate {
                LogicalGate::X(bit) => builder.x(bit.index()),
                LogicalGate::Z(bit) => builder.z(bit.index()),
                LogicalGate::H => builder.h(0).h(1).swap(0, 1),
                LogicalGate::Cz => builder.cz(0, 1).z(0).z(1),
            };
            if idle {
                builder.id(0).id(1)
            } else {
                builder
            }
        },
    );

    if measure {
        builder.measure_all().build()
    } else {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logical::LogicalBit;
    use ftec_core::Gate;

    #[test]
    fn test_gate_expansion() {
        let circuit = reference_circuit(
            &[LogicalGate::X(LogicalBit::ONE), LogicalGate::H, LogicalGate::Cz],
            false,
        );

        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.num_clbits(), 0);
        assert_eq!(
            circuit.gates(),
            &[
                Gate::X(1),
                Gate::H(0),
                Gate::H(1),
                Gate::Swap(0, 1),
                Gate::Cz(0, 1),
                Gate::Z(0),
                Gate::Z(1),
            ]
        );
    }

    #[test]
    fn test_measured_readout() {
        let circuit = reference_circuit(&[LogicalGate::Z(LogicalBit::ZERO)], true);

        assert_eq!(circuit.num_clbits(), 2);
        assert_eq!(circuit.count_measurements(), 2);
        assert_eq!(circuit.gates()[1], Gate::Measure(0, 0));
        assert_eq!(circuit.gates()[2], Gate::Measure(1, 1));
    }

    #[test]
    fn test_idle_slots() {
        let gates = [LogicalGate::X(LogicalBit::ZERO), LogicalGate::Cz];
        let circuit = reference_circuit_with_idle(&gates, true);

        assert_eq!(
            &circuit.gates()[..3],
            &[Gate::X(0), Gate::Id(0), Gate::Id(1)]
        );
        assert_eq!(
            circuit.gate_count(),
            reference_circuit(&gates, true).gate_count() + 4
        );
        assert!(reference_circuit_with_idle(&[], false).is_empty());
    }

    #[test]
    fn test_empty_sequence() {
        assert!(reference_circuit(&[], false).is_empty());
    }
}
