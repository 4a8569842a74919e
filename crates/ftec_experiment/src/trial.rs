//! One encoded-versus-unencoded comparison
//!
//! Gantree: L5_Experiment → Trial
//!
//! For a gate sequence the trial computes the exact distribution `p` of the
//! reference circuit, samples the reference circuit for `q`, samples and
//! decodes the encoded circuit for `r`, and reports `d(p,q)` and `d(p,r)`.
//! With idle noise on, both sampled circuits carry an identity on every
//! qubit after each logical gate; the exact circuit never does.

use crate::distribution::{aggregate, aggregate_readouts, total_variation_distance, Distribution};
use ftec_backend::Session;
use ftec_code::{
    encoded_circuit, encoded_circuit_with_idle, reference_circuit, reference_circuit_with_idle,
    DecodeReport, LogicalGate, ParityCheck,
};
use ftec_core::FtecResult;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one trial
/// Gantree: TrialResult // p, q, r, dpq, dpr
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialResult {
    /// Logical gate sequence
    pub gates: Vec<LogicalGate>,

    /// Exact distribution of the reference circuit
    pub ideal: Distribution,

    /// Sampled distribution of the reference circuit
    pub unencoded: Distribution,

    /// Decoded distribution of the encoded circuit
    pub encoded: Distribution,

    /// `d(p, q)`
    pub dpq: f64,

    /// `d(p, r)`
    pub dpr: f64,

    /// Fraction of encoded runs that decoded to a state
    pub accept_ratio: f64,

    /// Encoded runs dropped because the ancilla fired
    pub discarded_ancilla: usize,

    /// Encoded runs dropped as gate errors
    pub discarded_gate_error: usize,
}

impl TrialResult {
    /// Encoded output at least as close to ideal as the unencoded one
    pub fn is_fault_tolerant(&self) -> bool {
        self.dpr <= self.dpq
    }
}

impl fmt::Display for TrialResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Trial({} gates: dpq={:.4}, dpr={:.4}, accept={:.3})",
            self.gates.len(),
            self.dpq,
            self.dpr,
            self.accept_ratio
        )
    }
}

/// Exact outcome distribution of the unmeasured reference circuit
/// Gantree: ideal_distribution(session, gates) -> Result<Distribution> // 이상 분포
pub fn ideal_distribution(
    session: &mut Session<'_>,
    gates: &[LogicalGate],
) -> FtecResult<Distribution> {
    let circuit = reference_circuit(gates, false);
    let state = session.wavefunction(&circuit)?;
    Distribution::from_probabilities(&state.probabilities())
}

/// Sampling settings for one trial
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialOptions {
    /// Backend runs per circuit
    pub trials: u64,

    /// Whole-readout parity rule
    pub parity: ParityCheck,

    /// Idle slot on every qubit after each logical gate
    pub idle_noise: bool,
}

impl TrialOptions {
    /// Options without idle slots
    pub fn new(trials: u64, parity: ParityCheck) -> Self {
        Self {
            trials,
            parity,
            idle_noise: false,
        }
    }

    /// Toggle idle slots
    pub fn with_idle_noise(mut self, idle_noise: bool) -> Self {
        self.idle_noise = idle_noise;
        self
    }
}

/// Run one trial of `trials` runs per circuit
/// Gantree: run_trial(session, gates, trials, parity) -> Result<TrialResult> // test()
pub fn run_trial(
    session: &mut Session<'_>,
    gates: &[LogicalGate],
    trials: u64,
    parity: ParityCheck,
) -> FtecResult<TrialResult> {
    run_trial_with(session, gates, TrialOptions::new(trials, parity))
}

/// Run one trial under `options`
/// Gantree: run_trial_with(session, gates, options) -> Result<TrialResult> // 유휴 노이즈 포함
pub fn run_trial_with(
    session: &mut Session<'_>,
    gates: &[LogicalGate],
    options: TrialOptions,
) -> FtecResult<TrialResult> {
    let ideal = ideal_distribution(session, gates)?;

    let (reference_job, encoded_job) = if options.idle_noise {
        (reference_circuit_with_idle(gates, true), encoded_circuit_with_idle(gates)?)
    } else {
        (reference_circuit(gates, true), encoded_circuit(gates)?)
    };

    let reference = session.run(&reference_job, options.trials)?;
    let unencoded = aggregate_readouts(&reference.readouts)?;

    let encoded_run = session.run(&encoded_job, options.trials)?;
    let report = DecodeReport::from_readouts(&encoded_run.readouts, options.parity)?;
    let encoded = aggregate(&report.accepted);

    let result = TrialResult {
        gates: gates.to_vec(),
        dpq: total_variation_distance(&ideal, &unencoded),
        dpr: total_variation_distance(&ideal, &encoded),
        accept_ratio: report.accept_ratio(),
        discarded_ancilla: report.discarded_ancilla,
        discarded_gate_error: report.discarded_gate_error,
        ideal,
        unencoded,
        encoded,
    };

    debug!("p {}", result.ideal);
    debug!("q {}", result.unencoded);
    debug!("r {}", result.encoded);
    debug!("{}", result);
    Ok(result)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ftec_backend::SimulatorBackend;
    use ftec_code::{LogicalBit, LogicalState};
    use ftec_noise::NoiseModel;

    #[test]
    fn test_ideal_distribution_point_mass() {
        let backend = SimulatorBackend::ideal(5);
        let mut session = Session::open(&backend);

        let p = ideal_distribution(&mut session, &[LogicalGate::X(LogicalBit::ONE)]).unwrap();
        assert_abs_diff_eq!(p.probability(LogicalState::new(false, true)), 1.0, epsilon = 1e-12);

        let empty = ideal_distribution(&mut session, &[]).unwrap();
        assert_abs_diff_eq!(empty[0], 1.0, epsilon = 1e-12);
        session.close().unwrap();
    }

    #[test]
    fn test_ideal_distribution_uniform_after_h() {
        let backend = SimulatorBackend::ideal(5);
        let mut session = Session::open(&backend);

        let p = ideal_distribution(&mut session, &[LogicalGate::H]).unwrap();
        for bin in p.bins() {
            assert_abs_diff_eq!(*bin, 0.25, epsilon = 1e-12);
        }
        session.close().unwrap();
    }

    #[test]
    fn test_ideal_trial_is_exact_for_deterministic_sequence() {
        let backend = SimulatorBackend::ideal(5).with_seed(1);
        let mut session = Session::open(&backend);
        let gates = [LogicalGate::H, LogicalGate::Z(LogicalBit::ONE), LogicalGate::H];

        let result = run_trial(&mut session, &gates, 100, ParityCheck::Legacy).unwrap();

        assert_abs_diff_eq!(result.dpq, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.dpr, 0.0, epsilon = 1e-9);
        assert_eq!(result.accept_ratio, 1.0);
        assert!(result.is_fault_tolerant());

        let summary = session.close().unwrap();
        assert_eq!(summary.jobs, 2);
        assert_eq!(summary.wavefunctions, 1);
        assert_eq!(summary.total_shots, 200);
    }

    #[test]
    fn test_ideal_trial_sampling_error_only() {
        let backend = SimulatorBackend::ideal(5).with_seed(2);
        let mut session = Session::open(&backend);
        let gates = [LogicalGate::H, LogicalGate::Cz, LogicalGate::X(LogicalBit::ZERO)];

        let result = run_trial(&mut session, &gates, 2000, ParityCheck::Even).unwrap();

        assert!(result.dpq < 0.05, "dpq = {}", result.dpq);
        assert!(result.dpr < 0.05, "dpr = {}", result.dpr);
        assert_eq!(result.discarded_ancilla + result.discarded_gate_error, 0);
        session.close().unwrap();
    }

    #[test]
    fn test_readout_noise_hurts_reference_more() {
        // readout flips on data bits are mostly caught by the decoder
        let noise = NoiseModel::readout_only(0.1).unwrap();
        let backend = SimulatorBackend::new(5, noise).with_seed(3);
        let mut session = Session::open(&backend);

        let gates = [LogicalGate::X(LogicalBit::ZERO)];
        let result = run_trial(&mut session, &gates, 3000, ParityCheck::Legacy).unwrap();

        assert!(result.dpq > 0.1, "dpq = {}", result.dpq);
        assert!(result.dpr < result.dpq, "{}", result);
        assert!(result.accept_ratio < 1.0);
        session.close().unwrap();
    }

    #[test]
    fn test_idle_noise_moves_distances() {
        let noise = NoiseModel::ideal().with_idle_error(0.5);
        let backend = SimulatorBackend::new(5, noise).with_seed(11);
        let mut session = Session::open(&backend);
        let gates = [
            LogicalGate::X(LogicalBit::ZERO),
            LogicalGate::Z(LogicalBit::ONE),
            LogicalGate::X(LogicalBit::ONE),
        ];

        // no idle slots: nothing for the idle error to act on
        let quiet = run_trial(&mut session, &gates, 2000, ParityCheck::Legacy).unwrap();
        assert_abs_diff_eq!(quiet.dpq, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(quiet.dpr, 0.0, epsilon = 1e-9);

        let options = TrialOptions::new(2000, ParityCheck::Legacy).with_idle_noise(true);
        let noisy = run_trial_with(&mut session, &gates, options).unwrap();
        assert!(noisy.dpq > 0.1, "dpq = {}", noisy.dpq);
        assert!(noisy.dpr > 0.0, "dpr = {}", noisy.dpr);
        assert!(noisy.accept_ratio < 1.0);

        // the exact distribution is untouched
        assert_eq!(noisy.ideal, quiet.ideal);
        session.close().unwrap();
    }

    #[test]
    fn test_idle_slots_are_free_without_idle_error() {
        let backend = SimulatorBackend::ideal(5).with_seed(12);
        let mut session = Session::open(&backend);
        let gates = [LogicalGate::Cz, LogicalGate::X(LogicalBit::ONE)];

        let options = TrialOptions::new(500, ParityCheck::Even).with_idle_noise(true);
        let result = run_trial_with(&mut session, &gates, options).unwrap();

        assert_abs_diff_eq!(result.dpq, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.dpr, 0.0, epsilon = 1e-9);
        assert_eq!(result.accept_ratio, 1.0);
        session.close().unwrap();
    }
}
