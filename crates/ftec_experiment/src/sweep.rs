//! Sequence-length sweep
//!
//! Gantree: L7_Integration → Sweep
//!
//! For each length `t` in `1..max_length` the sweep runs `repeats` trials on
//! fresh random sequences and averages the two distances. Trials where the
//! encoded distance exceeds the unencoded one are counted as violations.

use crate::config::ExperimentConfig;
use crate::sequence::SequenceGenerator;
use crate::trial::{run_trial_with, TrialResult};
use ftec_backend::{Backend, Session, SessionSummary};
use ftec_core::FtecResult;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

/// Averages for one sequence length
/// Gantree: SweepPoint // 길이별 평균
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Sweep coordinate `t`
    pub length: usize,

    /// Gates per sequence at this point
    pub sequence_length: usize,

    /// Trials averaged
    pub repeats: usize,

    /// Mean `d(p, q)`
    pub mean_dpq: f64,

    /// Mean `d(p, r)`
    pub mean_dpr: f64,

    /// Mean fraction of encoded runs accepted
    pub mean_accept_ratio: f64,

    /// Trials with `dpr > dpq`
    pub violations: usize,
}

impl SweepPoint {
    /// Average a batch of trials
    pub fn from_trials(length: usize, sequence_length: usize, trials: &[TrialResult]) -> Self {
        let n = trials.len().max(1) as f64;
        Self {
            length,
            sequence_length,
            repeats: trials.len(),
            mean_dpq: trials.iter().map(|t| t.dpq).sum::<f64>() / n,
            mean_dpr: trials.iter().map(|t| t.dpr).sum::<f64>() / n,
            mean_accept_ratio: trials.iter().map(|t| t.accept_ratio).sum::<f64>() / n,
            violations: trials.iter().filter(|t| !t.is_fault_tolerant()).count(),
        }
    }

    /// No trial at this point violated fault tolerance
    pub fn is_fault_tolerant(&self) -> bool {
        self.violations == 0
    }
}

/// Full sweep output
/// Gantree: SweepResult // 전체 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepResult {
    /// Configuration that produced the sweep
    pub config: ExperimentConfig,

    /// One entry per length, in increasing order
    pub points: Vec<SweepPoint>,

    /// Backend work done
    pub session: SessionSummary,

    /// Wall time in milliseconds
    pub elapsed_ms: u64,
}

impl SweepResult {
    /// Total trials with `dpr > dpq`
    pub fn total_violations(&self) -> usize {
        self.points.iter().map(|p| p.violations).sum()
    }

    /// Total trials run
    pub fn total_trials(&self) -> usize {
        self.points.iter().map(|p| p.repeats).sum()
    }
}

impl fmt::Display for SweepResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SweepResult({} lengths, {} trials, {} violations, {} ms)",
            self.points.len(),
            self.total_trials(),
            self.total_violations(),
            self.elapsed_ms
        )
    }
}

/// Sweep runner
/// Gantree: Sweep // __main__ 루프
pub struct Sweep {
    config: ExperimentConfig,
}

impl Sweep {
    /// Create a sweep from a validated configuration
    pub fn new(config: ExperimentConfig) -> FtecResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use
    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Run on the backend the configuration describes
    pub fn run(&self) -> FtecResult<SweepResult> {
        let backend = self.config.to_backend();
        self.run_on(&backend)
    }

    /// Run on an explicit backend
    /// Gantree: run_on(backend) -> Result<SweepResult> // 스윕 실행
    pub fn run_on(&self, backend: &dyn Backend) -> FtecResult<SweepResult> {
        let start = Instant::now();
        let mut generator = SequenceGenerator::new(self.config.seed);
        let mut session = Session::open(backend);
        let mut points = Vec::new();

        info!("sweep started: {}", self.config);

        let options = self.config.trial_options();
        for length in self.config.lengths() {
            let sequence_length = self.config.sequence_length_for(length);
            let mut trials = Vec::with_capacity(self.config.repeats);

            for _ in 0..self.config.repeats {
                let gates = generator.next_sequence(sequence_length);
                let trial = run_trial_with(&mut session, &gates, options)?;
                if !trial.is_fault_tolerant() {
                    warn!(
                        "dpr > dpq, not fault tolerant, t={} ({:.4} > {:.4})",
                        length, trial.dpr, trial.dpq
                    );
                }
                trials.push(trial);
            }

            let point = SweepPoint::from_trials(length, sequence_length, &trials);
            info!(
                "t={}: dpq={:.4} dpr={:.4} accept={:.3} violations={}/{}",
                point.length,
                point.mean_dpq,
                point.mean_dpr,
                point.mean_accept_ratio,
                point.violations,
                point.repeats
            );
            points.push(point);
        }

        let session = session.close()?;
        let result = SweepResult {
            config: self.config.clone(),
            points,
            session,
            elapsed_ms: start.elapsed().as_millis() as u64,
        };
        info!("sweep finished: {}", result);
        Ok(result)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::Distribution;
    use ftec_backend::SimulatorBackend;

    fn trial(dpq: f64, dpr: f64) -> TrialResult {
        TrialResult {
            gates: Vec::new(),
            ideal: Distribution::EMPTY,
            unencoded: Distribution::EMPTY,
            encoded: Distribution::EMPTY,
            dpq,
            dpr,
            accept_ratio: 0.5,
            discarded_ancilla: 0,
            discarded_gate_error: 0,
        }
    }

    #[test]
    fn test_point_averages() {
        let point = SweepPoint::from_trials(3, 5, &[trial(0.2, 0.1), trial(0.1, 0.3)]);

        assert_eq!(point.length, 3);
        assert_eq!(point.sequence_length, 5);
        assert!((point.mean_dpq - 0.15).abs() < 1e-12);
        assert!((point.mean_dpr - 0.2).abs() < 1e-12);
        assert_eq!(point.violations, 1);
        assert!(!point.is_fault_tolerant());
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(Sweep::new(ExperimentConfig::quick().with_repeats(0)).is_err());
    }

    #[test]
    fn test_ideal_sweep_shape() {
        let config = ExperimentConfig::ideal()
            .with_trials(50)
            .with_repeats(2)
            .with_max_length(4)
            .with_seed(11);
        let sweep = Sweep::new(config).unwrap();
        let backend = SimulatorBackend::ideal(5).with_seed(11);

        let result = sweep.run_on(&backend).unwrap();

        let lengths: Vec<_> = result.points.iter().map(|p| p.length).collect();
        assert_eq!(lengths, vec![1, 2, 3]);
        assert_eq!(result.total_trials(), 6);
        assert_eq!(result.session.jobs, 12);
        assert_eq!(result.session.total_shots, 600);
        assert!(result.points.iter().all(|p| p.mean_accept_ratio == 1.0));
    }

    #[test]
    fn test_fixed_length_sweep() {
        let config = ExperimentConfig::ideal()
            .with_trials(20)
            .with_repeats(1)
            .with_max_length(3)
            .with_sequence_length(5);

        let result = Sweep::new(config).unwrap().run().unwrap();
        assert!(result.points.iter().all(|p| p.sequence_length == 5));
    }
}
