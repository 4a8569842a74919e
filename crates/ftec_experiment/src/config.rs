//! Experiment configuration for FTEC
//!
//! Gantree: L7_Integration → ExperimentConfig
//!
//! One JSON-serializable struct drives a sweep: run counts, sequence
//! lengths, seeding, decode policy and the noise attached to the backend.

use crate::trial::TrialOptions;
use ftec_backend::SimulatorBackend;
use ftec_code::ParityCheck;
use ftec_core::{backend, code, experiment, FtecError, FtecResult};
use ftec_noise::NoiseModel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Sweep configuration
/// Gantree: ExperimentConfig // 실험 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExperimentConfig {
    // ========================================================================
    // Sampling
    // ========================================================================
    /// Backend runs per circuit
    pub trials: u64,

    /// Trials averaged per sequence length
    pub repeats: usize,

    /// Sweep covers lengths `1..max_length`
    pub max_length: usize,

    /// Fixed gate count for every sweep point; `None` uses the point's length
    pub sequence_length: Option<usize>,

    /// Seed for gate sequences and the simulator
    pub seed: u64,

    // ========================================================================
    // Decoding and Noise
    // ========================================================================
    /// Whole-readout parity rule
    pub parity_check: ParityCheck,

    /// Noise attached to the sampling backend; `None` samples noiselessly
    pub noise: Option<NoiseModel>,

    /// Idle slot on every qubit after each logical gate, so the model's
    /// idle error applies
    pub idle_noise: bool,

    // ========================================================================
    // Output
    // ========================================================================
    /// Directory receiving result files
    pub output_dir: PathBuf,
}

impl ExperimentConfig {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Small sweep for smoke runs and tests
    pub fn quick() -> Self {
        Self {
            trials: 500,
            repeats: 3,
            max_length: 4,
            ..Self::default()
        }
    }

    /// Noiseless sampling
    pub fn ideal() -> Self {
        Self {
            noise: None,
            ..Self::default()
        }
    }

    /// Every sweep point runs sequences of the default fixed length
    pub fn fixed_length() -> Self {
        Self {
            sequence_length: Some(experiment::DEFAULT_SEQUENCE_LENGTH),
            ..Self::default()
        }
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Set runs per circuit
    pub fn with_trials(mut self, trials: u64) -> Self {
        self.trials = trials;
        self
    }

    /// Set repeats per length
    pub fn with_repeats(mut self, repeats: usize) -> Self {
        self.repeats = repeats;
        self
    }

    /// Set sweep bound
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Fix the gate count of every sequence
    pub fn with_sequence_length(mut self, length: usize) -> Self {
        self.sequence_length = Some(length);
        self
    }

    /// Set seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set parity rule
    pub fn with_parity_check(mut self, parity_check: ParityCheck) -> Self {
        self.parity_check = parity_check;
        self
    }

    /// Attach a noise model
    pub fn with_noise(mut self, noise: NoiseModel) -> Self {
        self.noise = Some(noise);
        self
    }

    /// Toggle idle slots in the sampled circuits
    pub fn with_idle_noise(mut self, idle_noise: bool) -> Self {
        self.idle_noise = idle_noise;
        self
    }

    /// Set output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    // ========================================================================
    // Derived Values
    // ========================================================================

    /// Sequence lengths visited by the sweep
    pub fn lengths(&self) -> Vec<usize> {
        (1..self.max_length).collect()
    }

    /// Gate count used at sweep point `length`
    pub fn sequence_length_for(&self, length: usize) -> usize {
        self.sequence_length.unwrap_or(length)
    }

    /// Noise model in effect (ideal when none is attached)
    pub fn noise_model(&self) -> NoiseModel {
        self.noise.clone().unwrap_or_default()
    }

    /// Per-trial sampling settings
    pub fn trial_options(&self) -> TrialOptions {
        TrialOptions::new(self.trials, self.parity_check).with_idle_noise(self.idle_noise)
    }

    /// Seeded simulator carrying the configured noise
    pub fn to_backend(&self) -> SimulatorBackend {
        SimulatorBackend::new(code::CODE_QUBITS, self.noise_model()).with_seed(self.seed)
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Validate configuration
    pub fn validate(&self) -> FtecResult<()> {
        if !(backend::MIN_SHOTS..=backend::MAX_SHOTS).contains(&self.trials) {
            return Err(FtecError::ConfigError(format!(
                "trials must be in [{}, {}], got {}",
                backend::MIN_SHOTS,
                backend::MAX_SHOTS,
                self.trials
            )));
        }

        if self.repeats == 0 {
            return Err(FtecError::ConfigError("repeats must be > 0".to_string()));
        }

        if self.max_length < 2 {
            return Err(FtecError::ConfigError(format!(
                "max_length must be >= 2 to visit any length, got {}",
                self.max_length
            )));
        }

        if let Some(noise) = &self.noise {
            noise.validate()?;
        }

        Ok(())
    }

    // ========================================================================
    // File I/O
    // ========================================================================

    /// Load and validate a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> FtecResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| FtecError::FileError(format!("{}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration as pretty JSON
    pub fn to_file(&self, path: impl AsRef<Path>) -> FtecResult<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            trials: experiment::DEFAULT_TRIALS,
            repeats: experiment::DEFAULT_REPEATS,
            max_length: experiment::DEFAULT_MAX_LENGTH,
            sequence_length: None,
            seed: experiment::DEFAULT_SEED,
            parity_check: ParityCheck::default(),
            noise: Some(
                NoiseModel::ideal()
                    .with_name("default")
                    .with_gate_error_1q(0.005)
                    .with_gate_error_2q(0.02)
                    .with_readout_error(0.01),
            ),
            idle_noise: true,
            output_dir: PathBuf::from("."),
        }
    }
}

impl fmt::Display for ExperimentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ExperimentConfig(trials={}, repeats={}, lengths=1..{}, seed={}, parity={}, idle={}, noise={})",
            self.trials,
            self.repeats,
            self.max_length,
            self.seed,
            self.parity_check,
            self.idle_noise,
            self.noise
                .as_ref()
                .map(|n| n.to_string())
                .unwrap_or_else(|| "none".to_string())
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ftec_backend::Backend;

    #[test]
    fn test_default_config() {
        let config = ExperimentConfig::default();
        assert_eq!(config.trials, 10_000);
        assert_eq!(config.repeats, 10);
        assert_eq!(config.lengths(), (1..10).collect::<Vec<_>>());
        assert_eq!(config.parity_check, ParityCheck::Legacy);
        assert!(config.idle_noise);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_quick_and_ideal() {
        let quick = ExperimentConfig::quick();
        assert_eq!(quick.lengths(), vec![1, 2, 3]);
        assert!(quick.validate().is_ok());

        let ideal = ExperimentConfig::ideal();
        assert!(ideal.noise.is_none());
        assert!(ideal.noise_model().is_ideal());
    }

    #[test]
    fn test_sequence_length() {
        let config = ExperimentConfig::default();
        assert_eq!(config.sequence_length_for(3), 3);

        let fixed = ExperimentConfig::fixed_length();
        assert_eq!(fixed.sequence_length_for(3), 5);
        assert_eq!(fixed.sequence_length_for(8), 5);
    }

    #[test]
    fn test_validation() {
        assert!(ExperimentConfig::default().with_trials(0).validate().is_err());
        assert!(ExperimentConfig::default().with_repeats(0).validate().is_err());
        assert!(ExperimentConfig::default().with_max_length(1).validate().is_err());

        let bad_noise = NoiseModel::ideal().with_readout_error(1.5);
        let err = ExperimentConfig::default()
            .with_noise(bad_noise)
            .validate()
            .unwrap_err();
        assert!(matches!(err, FtecError::InvalidNoiseModel(_)));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ExperimentConfig =
            serde_json::from_str(r#"{ "trials": 42, "parity_check": "even" }"#).unwrap();
        assert_eq!(config.trials, 42);
        assert_eq!(config.parity_check, ParityCheck::Even);
        assert_eq!(config.repeats, 10);

        assert!(serde_json::from_str::<ExperimentConfig>(r#"{ "shots": 1 }"#).is_err());
    }

    #[test]
    fn test_file_roundtrip() {
        let path = std::env::temp_dir().join(format!("ftec_config_{}.json", std::process::id()));
        let config = ExperimentConfig::quick()
            .with_seed(7)
            .with_parity_check(ParityCheck::Even);
        config.to_file(&path).unwrap();

        let loaded = ExperimentConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_trial_options() {
        let config = ExperimentConfig::quick()
            .with_trials(77)
            .with_parity_check(ParityCheck::Even);
        let options = config.trial_options();
        assert_eq!(options.trials, 77);
        assert_eq!(options.parity, ParityCheck::Even);
        assert!(options.idle_noise);

        assert!(!config.with_idle_noise(false).trial_options().idle_noise);

        let parsed: ExperimentConfig =
            serde_json::from_str(r#"{ "idle_noise": false }"#).unwrap();
        assert!(!parsed.idle_noise);
    }

    #[test]
    fn test_to_backend() {
        let backend = ExperimentConfig::ideal().with_seed(3).to_backend();
        assert_eq!(backend.num_qubits(), 5);
        assert!(backend.noise_model().is_ideal());
    }
}
