//! Backend execution types and traits
//!
//! Gantree: L6_Backend → BackendTrait
//!
//! Defines the execution boundary: a circuit and a run count go in, one
//! readout vector per run comes out.

use crate::statevector::StateVector;
use ftec_core::{Bitstring, Circuit, FtecError, FtecResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Result of circuit execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Readout of every run, in run order
    /// Gantree: readouts: Vec<Bitstring> // 실행별 판독
    pub readouts: Vec<Bitstring>,

    /// Number of shots executed
    pub shots: u64,

    /// Execution metadata
    pub metadata: ExecutionMetadata,
}

/// Execution metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutionMetadata {
    /// Backend name
    pub backend: String,

    /// Execution time in milliseconds
    pub execution_time_ms: Option<u64>,

    /// Whether simulation was used
    pub simulated: bool,

    /// Seed used (if any)
    pub seed: Option<u64>,

    /// Additional info
    pub extra: HashMap<String, String>,
}

impl ExecutionResult {
    /// Create new execution result
    pub fn new(readouts: Vec<Bitstring>, backend: &str) -> Self {
        Self {
            shots: readouts.len() as u64,
            readouts,
            metadata: ExecutionMetadata {
                backend: backend.to_string(),
                simulated: true,
                ..Default::default()
            },
        }
    }

    /// Get probability of a specific bitstring
    pub fn probability(&self, bitstring: &str) -> f64 {
        if self.shots == 0 {
            return 0.0;
        }
        let count = self
            .readouts
            .iter()
            .filter(|r| r.to_string() == bitstring)
            .count();
        count as f64 / self.shots as f64
    }

    /// Width of the readouts (0 when no runs)
    pub fn readout_width(&self) -> usize {
        self.readouts.first().map(Bitstring::len).unwrap_or(0)
    }
}

impl fmt::Display for ExecutionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ExecutionResult(backend={}, shots={}, width={})",
            self.metadata.backend,
            self.shots,
            self.readout_width()
        )
    }
}

/// Quantum backend trait
/// Gantree: BackendTrait // 백엔드 인터페이스
pub trait Backend: Send + Sync {
    /// Get backend name
    fn name(&self) -> &str;

    /// Get number of qubits
    fn num_qubits(&self) -> usize;

    /// Run `circuit` `shots` times and return one readout per run
    /// Gantree: execute(circuit, shots) -> Result<ExecutionResult>
    fn execute(&self, circuit: &Circuit, shots: u64) -> FtecResult<ExecutionResult>;

    /// Exact noiseless amplitudes of `circuit`, ignoring measurements
    fn wavefunction(&self, _circuit: &Circuit) -> FtecResult<StateVector> {
        Err(FtecError::BackendError(format!(
            "backend '{}' does not expose wavefunctions",
            self.name()
        )))
    }

    /// Get maximum shots per execution
    fn max_shots(&self) -> u64 {
        ftec_core::backend::MAX_SHOTS
    }
}

// ============================================================================
// Tests
// ============================================================================
