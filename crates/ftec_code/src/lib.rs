//! # FTEC Code
//!
//! Two logical bits in the five-qubit error-detecting code: encoding,
//! transversal logical gates, readout, and decoding.
//!
//! ## Gantree Architecture
//!
//! ```text
//! ftec_code // L3+L4: Code + Decode (완료)
//!     L3_Code // 회로 구성 (완료)
//!         Logical // LogicalBit/LogicalGate/LogicalState (완료)
//!         Encoder // encode, 논리 게이트, 유휴 슬롯, 측정 (완료)
//!         Reference // 비인코딩 2큐비트 회로 (완료)
//!     L4_Decode // 디코딩 (완료)
//!         Decoder // 안실라/패리티/신드롬 표 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use ftec_code::prelude::*;
//!
//! let gates = [LogicalGate::H, LogicalGate::Z(LogicalBit::ONE), LogicalGate::H];
//! let circuit = encoded_circuit(&gates).unwrap();
//! assert_eq!(circuit.num_clbits(), 5);
//!
//! // q0 q1 q2 q3 a
//! let readout = MeasurementVector::new([true, false, true, false, false]);
//! assert_eq!(
//!     decode(&readout, ParityCheck::Legacy),
//!     DecodeOutcome::Accepted(LogicalState::new(true, false))
//! );
//! ```

#![warn(missing_docs)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Logical bits, gates and states (Gantree: L3_Code → Logical)
pub mod logical;

/// Encoding circuit and logical gates (Gantree: L3_Code → Encoder)
pub mod encoder;

/// Unencoded reference circuit (Gantree: L3_Code → Reference)
pub mod reference;

/// Readout decoding (Gantree: L4_Decode → Decoder)
pub mod decoder;

// ============================================================================
// Re-exports
// ============================================================================

pub use decoder::{
    decode, decode_all, DecodeOutcome, DecodeReport, MeasurementVector, ParityCheck,
    SYNDROME_TABLE,
};
pub use encoder::{
    append_idle, append_measurement, apply_logical_gate, apply_named_gate, encode,
    encoded_circuit, encoded_circuit_with_idle, idle_gates, CodeRegister,
};
pub use logical::{parse_sequence, LogicalBit, LogicalGate, LogicalState};
pub use reference::{reference_circuit, reference_circuit_with_idle};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use ftec_code::prelude::*;
    //! ```

    pub use crate::decoder::{
        decode, decode_all, DecodeOutcome, DecodeReport, MeasurementVector, ParityCheck,
    };
    pub use crate::encoder::{
        append_idle, append_measurement, apply_logical_gate, apply_named_gate, encode,
        encoded_circuit, encoded_circuit_with_idle, CodeRegister,
    };
    pub use crate::logical::{LogicalBit, LogicalGate, LogicalState};
    pub use crate::reference::{reference_circuit, reference_circuit_with_idle};
}

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use approx::assert_abs_diff_eq;
    use ftec_backend::prelude::*;

    const RUNS: u64 = 200;

    /// Run the encoded sequence on an ideal simulator and decode
    fn run_ideal(gates: &[LogicalGate]) -> DecodeReport {
        let backend = SimulatorBackend::ideal(5).with_seed(1337);
        let circuit = encoded_circuit(gates).unwrap();
        let result = backend.execute(&circuit, RUNS).unwrap();
        DecodeReport::from_readouts(&result.readouts, ParityCheck::Legacy).unwrap()
    }

    fn assert_always(gates: &[LogicalGate], expected: LogicalState) {
        let report = run_ideal(gates);
        assert_eq!(report.discarded(), 0, "{:?}: {}", gates, report);
        assert!(
            report.accepted.iter().all(|s| *s == expected),
            "{:?}: expected {} every run",
            gates,
            expected
        );
    }

    #[test]
    fn test_no_gates_decodes_zero() {
        assert_always(&[], LogicalState::new(false, false));
    }

    #[test]
    fn test_x0_decodes_one_zero() {
        assert_always(&[LogicalGate::X(LogicalBit::ZERO)], LogicalState::new(true, false));
    }

    #[test]
    fn test_x1_decodes_zero_one() {
        assert_always(&[LogicalGate::X(LogicalBit::ONE)], LogicalState::new(false, true));
    }

    #[test]
    fn test_z_on_both_bits_is_invisible() {
        assert_always(
            &[LogicalGate::Z(LogicalBit::ZERO), LogicalGate::Z(LogicalBit::ONE)],
            LogicalState::new(false, false),
        );
    }

    #[test]
    fn test_h_twice_is_identity() {
        assert_always(&[LogicalGate::H, LogicalGate::H], LogicalState::new(false, false));
    }

    #[test]
    fn test_h_z1_h_flips_bit_zero() {
        assert_always(
            &[LogicalGate::H, LogicalGate::Z(LogicalBit::ONE), LogicalGate::H],
            LogicalState::new(true, false),
        );
    }

    #[test]
    fn test_h_spreads_over_all_states() {
        let report = run_ideal(&[LogicalGate::H]);
        assert_eq!(report.discarded(), 0);
        for state in LogicalState::ALL {
            assert!(report.accepted.contains(&state), "{} never seen", state);
        }
    }

    #[test]
    fn test_encoded_matches_reference_wavefunction() {
        let gates = [
            LogicalGate::H,
            LogicalGate::Cz,
            LogicalGate::X(LogicalBit::ONE),
            LogicalGate::H,
        ];
        let backend = SimulatorBackend::ideal(5);
        let ideal = backend
            .wavefunction(&reference_circuit(&gates, false))
            .unwrap()
            .probabilities();

        let report = run_ideal(&gates);
        let mut observed = [0.0; 4];
        for state in &report.accepted {
            observed[state.index()] += 1.0 / report.accepted.len() as f64;
        }

        let distance: f64 = ideal
            .iter()
            .zip(observed)
            .map(|(p, q)| (p - q).abs())
            .sum::<f64>()
            / 2.0;
        assert!(distance < 0.15, "ideal {:?} vs observed {:?}", ideal, observed);
        assert_abs_diff_eq!(ideal.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_reference_matches_logical_action() {
        let backend = SimulatorBackend::ideal(2);
        let gates = [LogicalGate::H, LogicalGate::Z(LogicalBit::ONE), LogicalGate::H];
        let probs = backend
            .wavefunction(&reference_circuit(&gates, false))
            .unwrap()
            .probabilities();

        let expected = LogicalState::new(true, false).index();
        assert_abs_diff_eq!(probs[expected], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_readout_noise_is_caught() {
        let noise = ftec_noise::NoiseModel::readout_only(0.2).unwrap();
        let backend = SimulatorBackend::new(5, noise).with_seed(4);
        let circuit = encoded_circuit(&[]).unwrap();
        let result = backend.execute(&circuit, 500).unwrap();

        let report = DecodeReport::from_readouts(&result.readouts, ParityCheck::Legacy).unwrap();
        assert!(report.discarded_ancilla > 0);
        assert!(report.discarded_gate_error > 0);
        assert!(report.accept_ratio() < 1.0);
    }
}
