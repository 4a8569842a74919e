//! Constants for FTEC
//!
//! Gantree: L0_Foundation → Constants
//!
//! Code layout, backend limits, and experiment defaults.

// ============================================================================
// Code Layout Constants
// Gantree: code // 코드 상수
// ============================================================================

pub mod code {
    //! Layout of the five-qubit error-detecting code

    /// Physical qubits per code block (4 data + 1 ancilla)
    /// Gantree: CODE_QUBITS: usize = 5
    pub const CODE_QUBITS: usize = 5;

    /// Data qubits carrying the [[4,2,2]] codeword
    pub const DATA_QUBITS: usize = 4;

    /// Position of the ancilla in the code register and readout
    pub const ANCILLA_INDEX: usize = 4;

    /// Logical bits protected by the code
    /// Gantree: LOGICAL_BITS: usize = 2
    pub const LOGICAL_BITS: usize = 2;

    /// Size of the 2-bit outcome space
    pub const OUTCOMES: usize = 4;
}

// ============================================================================
// Backend Constants
// Gantree: backend // 백엔드 상수
// ============================================================================

pub mod backend {
    //! Limits of the execution boundary

    /// Minimum shots per execution
    pub const MIN_SHOTS: u64 = 1;

    /// Maximum shots per execution
    pub const MAX_SHOTS: u64 = 1_000_000;

    /// Widest circuit the statevector simulator accepts
    pub const MAX_SIMULATED_QUBITS: usize = 20;

    /// Default simulator name
    pub const SIMULATOR_NAME: &str = "ftec_statevector";
}

// ============================================================================
// Experiment Constants
// Gantree: experiment // 실험 기본값
// ============================================================================

pub mod experiment {
    //! Defaults of the fault-tolerance sweep

    /// Runs per circuit
    /// Gantree: DEFAULT_TRIALS: u64 = 10000
    pub const DEFAULT_TRIALS: u64 = 10_000;

    /// Repeats averaged per sweep point
    pub const DEFAULT_REPEATS: usize = 10;

    /// Exclusive upper bound of the swept sequence lengths
    pub const DEFAULT_MAX_LENGTH: usize = 10;

    /// Fixed gate-sequence length used by the reference harness
    pub const DEFAULT_SEQUENCE_LENGTH: usize = 5;

    /// Default RNG seed
    pub const DEFAULT_SEED: u64 = 1337;

    /// Output file names
    pub const LENGTHS_FILE: &str = "Ts.txt";
    /// Unencoded distance file
    pub const DPQ_FILE: &str = "dpq.txt";
    /// Encoded distance file
    pub const DPR_FILE: &str = "dpr.txt";
    /// Mean accept ratio file
    pub const RATIOS_FILE: &str = "ratios.txt";
    /// Summary file
    pub const SUMMARY_FILE: &str = "summary.json";
}
