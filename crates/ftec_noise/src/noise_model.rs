//! Noise model for FTEC
//!
//! Gantree: L2_Noise → NoiseModel
//!
//! Stochastic Pauli noise description consumed by the simulator backend.
//! The model is an external artifact: it is loaded from a JSON file and
//! attached to the backend that samples the noisy circuits, without the
//! experiment code looking inside it.

use ftec_core::{FtecError, FtecResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Stochastic Pauli noise model
/// Gantree: NoiseModel // 통합 노이즈
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoiseModel {
    /// Optional label shown in logs and reports
    #[serde(default)]
    name: Option<String>,

    /// Pauli error probability per qubit after a single-qubit gate
    /// Gantree: gate_error_1q: f64 // 1Q 에러
    #[serde(default)]
    gate_error_1q: f64,

    /// Pauli error probability per qubit after a two-qubit gate
    /// Gantree: gate_error_2q: f64 // 2Q 에러
    #[serde(default)]
    gate_error_2q: f64,

    /// Probability a readout bit is flipped
    /// Gantree: readout_error: f64 // 측정 에러
    #[serde(default)]
    readout_error: f64,

    /// Pauli error probability for identity (idle) slots
    #[serde(default)]
    idle_error: f64,
}

impl NoiseModel {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a new noise model with validation
    /// Gantree: new(e1,e2,ro) -> Result<Self> // 생성+검증
    pub fn new(gate_error_1q: f64, gate_error_2q: f64, readout_error: f64) -> FtecResult<Self> {
        let model = Self {
            name: None,
            gate_error_1q,
            gate_error_2q,
            readout_error,
            idle_error: 0.0,
        };
        model.validate()?;
        Ok(model)
    }

    /// Create ideal (noiseless) model
    /// Gantree: ideal() -> Self // 이상적
    pub fn ideal() -> Self {
        Self {
            name: Some("ideal".to_string()),
            gate_error_1q: 0.0,
            gate_error_2q: 0.0,
            readout_error: 0.0,
            idle_error: 0.0,
        }
    }

    /// Create from an effective depolarizing rate
    ///
    /// Two-qubit gates get ten times the rate, readout a quarter of it.
    pub fn from_depol(p_depol: f64) -> FtecResult<Self> {
        if !(0.0..=0.1).contains(&p_depol) {
            return Err(FtecError::InvalidNoiseModel(format!(
                "depolarizing rate {} outside [0, 0.1]",
                p_depol
            )));
        }

        Ok(Self {
            name: Some(format!("depol({})", p_depol)),
            gate_error_1q: p_depol,
            gate_error_2q: p_depol * 10.0,
            readout_error: p_depol / 4.0,
            idle_error: p_depol,
        })
    }

    /// Readout-only noise
    pub fn readout_only(readout_error: f64) -> FtecResult<Self> {
        Self::new(0.0, 0.0, readout_error)
    }

    // ========================================================================
    // Artifact I/O
    // ========================================================================

    /// Parse a JSON noise description
    pub fn from_json(json: &str) -> FtecResult<Self> {
        let model: Self = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    /// Load a noise model artifact from disk
    /// Gantree: from_file(path) -> Result<Self> // 파일 로드
    pub fn from_file(path: impl AsRef<Path>) -> FtecResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| FtecError::FileError(format!("{}: {}", path.display(), e)))?;
        let mut model = Self::from_json(&text)?;
        if model.name.is_none() {
            model.name = path.file_stem().map(|s| s.to_string_lossy().into_owned());
        }
        Ok(model)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> FtecResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the model to disk
    pub fn to_file(&self, path: impl AsRef<Path>) -> FtecResult<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Set label
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set single-qubit gate error
    pub fn with_gate_error_1q(mut self, error: f64) -> Self {
        self.gate_error_1q = error;
        self
    }

    /// Set two-qubit gate error
    pub fn with_gate_error_2q(mut self, error: f64) -> Self {
        self.gate_error_2q = error;
        self
    }

    /// Set readout error
    pub fn with_readout_error(mut self, error: f64) -> Self {
        self.readout_error = error;
        self
    }

    /// Set idle error
    pub fn with_idle_error(mut self, error: f64) -> Self {
        self.idle_error = error;
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Label, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get single-qubit gate error rate
    pub fn gate_error_1q(&self) -> f64 {
        self.gate_error_1q
    }

    /// Get two-qubit gate error rate
    pub fn gate_error_2q(&self) -> f64 {
        self.gate_error_2q
    }

    /// Get readout error rate
    pub fn readout_error(&self) -> f64 {
        self.readout_error
    }

    /// Get idle error rate
    pub fn idle_error(&self) -> f64 {
        self.idle_error
    }

    /// True when every rate is zero
    pub fn is_ideal(&self) -> bool {
        self.gate_error_1q == 0.0
            && self.gate_error_2q == 0.0
            && self.readout_error == 0.0
            && self.idle_error == 0.0
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Validate that every rate is a probability
    /// Gantree: validate(&self) -> Result // 범위 검증
    pub fn validate(&self) -> FtecResult<()> {
        let rates = [
            ("gate_error_1q", self.gate_error_1q),
            ("gate_error_2q", self.gate_error_2q),
            ("readout_error", self.readout_error),
            ("idle_error", self.idle_error),
        ];
        for (field, value) in rates {
            if !(0.0..=1.0).contains(&value) {
                return Err(FtecError::InvalidNoiseModel(format!(
                    "{} must be in [0,1]: {}",
                    field, value
                )));
            }
        }
        Ok(())
    }
}

impl Default for NoiseModel {
    fn default() -> Self {
        Self::ideal()
    }
}

impl fmt::Display for NoiseModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NoiseModel({}1Q={:.4}, 2Q={:.4}, RO={:.4}, idle={:.4})",
            self.name
                .as_deref()
                .map(|n| format!("{}: ", n))
                .unwrap_or_default(),
            self.gate_error_1q,
            self.gate_error_2q,
            self.readout_error,
            self.idle_error
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
