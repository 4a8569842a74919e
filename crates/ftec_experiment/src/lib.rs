//! # FTEC Experiment
//!
//! Statistics and the fault-tolerance sweep: random logical sequences are run
//! unencoded and encoded, and their outcome distributions are compared with
//! the exact one by total variation distance.
//!
//! ## Gantree Architecture
//!
//! ```text
//! ftec_experiment // L5+L7+L8: Experiment + Integration + Report (완료)
//!     L5_Experiment // 단일 시행 (완료)
//!         Distribution // 2비트 분포, TVD (완료)
//!         Sequence // 무작위 게이트 열 (완료)
//!         Trial // p, q, r 비교 (완료)
//!     L7_Integration // 스윕 (완료)
//!         ExperimentConfig // 설정 (완료)
//!         Sweep // 길이별 반복 평균 (완료)
//!     L8_Report // 결과 저장 (완료)
//!         Reporter // Ts/dpq/dpr/ratios, JSON, CSV, Markdown (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use ftec_experiment::prelude::*;
//!
//! let config = ExperimentConfig::ideal()
//!     .with_trials(50)
//!     .with_repeats(1)
//!     .with_max_length(3);
//!
//! let result = Sweep::new(config).unwrap().run().unwrap();
//! assert_eq!(result.points.len(), 2);
//! println!("{}", Reporter::to_text(&result));
//! ```
//!
//! ## Single Trial
//!
//! ```rust
//! use ftec_backend::prelude::*;
//! use ftec_code::{parse_sequence, ParityCheck};
//! use ftec_experiment::run_trial;
//!
//! let backend = SimulatorBackend::ideal(5).with_seed(3);
//! let mut session = Session::open(&backend);
//!
//! let gates = parse_sequence("H, Z1, H").unwrap();
//! let trial = run_trial(&mut session, &gates, 100, ParityCheck::Legacy).unwrap();
//! assert!(trial.is_fault_tolerant());
//!
//! session.close().unwrap();
//! ```

#![warn(missing_docs)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Outcome distributions (Gantree: L5_Experiment → Distribution)
pub mod distribution;

/// Random gate sequences (Gantree: L5_Experiment → Sequence)
pub mod sequence;

/// One trial (Gantree: L5_Experiment → Trial)
pub mod trial;

/// Configuration (Gantree: L7_Integration → ExperimentConfig)
pub mod config;

/// Length sweep (Gantree: L7_Integration → Sweep)
pub mod sweep;

/// Result files and reports (Gantree: L8_Report → Reporter)
pub mod reporter;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ExperimentConfig;
pub use distribution::{aggregate, aggregate_readouts, total_variation_distance, Distribution};
pub use reporter::{ReportFormat, Reporter, SeriesRow};
pub use sequence::{random_gate, random_sequence, SequenceGenerator};
pub use sweep::{Sweep, SweepPoint, SweepResult};
pub use trial::{ideal_distribution, run_trial, run_trial_with, TrialOptions, TrialResult};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use ftec_experiment::prelude::*;
    //! ```

    pub use crate::config::ExperimentConfig;
    pub use crate::distribution::{total_variation_distance, Distribution};
    pub use crate::reporter::{ReportFormat, Reporter, SeriesRow};
    pub use crate::sequence::SequenceGenerator;
    pub use crate::sweep::{Sweep, SweepPoint, SweepResult};
    pub use crate::trial::{run_trial, run_trial_with, TrialOptions, TrialResult};
}

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use ftec_backend::prelude::*;
    use ftec_code::ParityCheck;
    use ftec_noise::NoiseModel;

    #[test]
    fn test_seeded_sweep_is_reproducible() {
        let config = ExperimentConfig::quick().with_trials(100).with_seed(21);
        let a = Sweep::new(config.clone()).unwrap().run().unwrap();
        let b = Sweep::new(config).unwrap().run().unwrap();

        assert_eq!(a.points, b.points);
    }

    #[test]
    fn test_noisy_sweep_discards_some_runs() {
        let noise = NoiseModel::from_depol(0.02).unwrap();
        let config = ExperimentConfig::quick()
            .with_trials(400)
            .with_repeats(2)
            .with_noise(noise)
            .with_parity_check(ParityCheck::Even);

        let result = Sweep::new(config).unwrap().run().unwrap();

        assert_eq!(result.points.len(), 3);
        assert!(result.points.iter().all(|p| p.mean_accept_ratio < 1.0));
        assert!(result.points.iter().all(|p| p.mean_dpq > 0.0));
    }

    #[test]
    fn test_sweep_on_explicit_backend() {
        let config = ExperimentConfig::ideal()
            .with_trials(30)
            .with_repeats(1)
            .with_max_length(2);
        let backend = SimulatorBackend::ideal(5).with_name("custom");

        let result = Sweep::new(config).unwrap().run_on(&backend).unwrap();
        assert_eq!(result.session.backend, "custom");
        assert_eq!(result.points[0].length, 1);
    }

    #[test]
    fn test_trial_distributions_are_normalized_when_accepted() {
        let backend = SimulatorBackend::ideal(5).with_seed(8);
        let mut session = Session::open(&backend);
        let gates = SequenceGenerator::new(8).next_sequence(6);

        let trial = run_trial(&mut session, &gates, 300, ParityCheck::Legacy).unwrap();
        session.close().unwrap();

        for dist in [&trial.ideal, &trial.unencoded, &trial.encoded] {
            assert!((dist.total() - 1.0).abs() < 1e-9, "{}", dist);
        }
        assert!(total_variation_distance(&trial.ideal, &trial.ideal) < 1e-12);
    }
}
