//! Decoder for five-bit code readouts
//!
//! Gantree: L4_Decode → Decoder
//!
//! A readout is discarded when the ancilla fired, optionally when its
//! weight is odd, and when the data bits match no codeword. Otherwise the
//! syndrome table names the logical state.

use crate::logical::LogicalState;
use ftec_core::{code, Bitstring, FtecError, FtecResult};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// MeasurementVector
// ============================================================================

/// Raw readout of one encoded run: four data bits then the ancilla
/// Gantree: MeasurementVector // [r0,r1,r2,r3,a]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeasurementVector([bool; code::CODE_QUBITS]);

impl MeasurementVector {
    /// Create from the five bits
    pub fn new(bits: [bool; code::CODE_QUBITS]) -> Self {
        Self(bits)
    }

    /// Data bits `r0..r3`
    pub fn data(&self) -> [bool; code::DATA_QUBITS] {
        let [r0, r1, r2, r3, _] = self.0;
        [r0, r1, r2, r3]
    }

    /// Ancilla bit
    pub fn ancilla(&self) -> bool {
        self.0[code::ANCILLA_INDEX]
    }

    /// Number of ones across all five bits
    pub fn weight(&self) -> usize {
        self.0.iter().filter(|&&b| b).count()
    }

    /// All five bits
    pub fn bits(&self) -> &[bool; code::CODE_QUBITS] {
        &self.0
    }
}

impl TryFrom<&[bool]> for MeasurementVector {
    type Error = FtecError;

    fn try_from(bits: &[bool]) -> Result<Self, Self::Error> {
        let array: [bool; code::CODE_QUBITS] =
            bits.try_into()
                .map_err(|_| FtecError::InvalidMeasurementLength {
                    expected: code::CODE_QUBITS,
                    actual: bits.len(),
                })?;
        Ok(Self::new(array))
    }
}

impl TryFrom<&Bitstring> for MeasurementVector {
    type Error = FtecError;

    fn try_from(readout: &Bitstring) -> Result<Self, Self::Error> {
        Self::try_from(readout.bits())
    }
}

impl fmt::Display for MeasurementVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as u8)?;
        }
        Ok(())
    }
}

// ============================================================================
// Decode Policy
// ============================================================================

/// Whole-vector parity rule applied after the ancilla check
/// Gantree: ParityCheck // Legacy(%1) | Even(%2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParityCheck {
    /// `weight % 1 == 1`, which never holds, so nothing is discarded here
    #[default]
    Legacy,
    /// Odd-weight readouts are discarded as gate errors
    Even,
}

impl ParityCheck {
    /// Whether a readout of `weight` ones is discarded
    pub fn rejects(self, weight: usize) -> bool {
        match self {
            ParityCheck::Legacy => false,
            ParityCheck::Even => weight % 2 == 1,
        }
    }
}

impl fmt::Display for ParityCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParityCheck::Legacy => write!(f, "legacy"),
            ParityCheck::Even => write!(f, "even"),
        }
    }
}

impl FromStr for ParityCheck {
    type Err = FtecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" => Ok(ParityCheck::Legacy),
            "even" => Ok(ParityCheck::Even),
            other => Err(FtecError::ConfigError(format!(
                "unknown parity check '{}': expected legacy or even",
                other
            ))),
        }
    }
}

/// Result of decoding one readout
/// Gantree: DecodeOutcome // Accepted | DiscardedAncilla | DiscardedGateError
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecodeOutcome {
    /// Readout matched a codeword
    Accepted(LogicalState),
    /// Ancilla read 1
    DiscardedAncilla,
    /// Parity rule fired or data bits match no codeword
    DiscardedGateError,
}

impl DecodeOutcome {
    /// Decoded state, if accepted
    pub fn state(&self) -> Option<LogicalState> {
        match self {
            DecodeOutcome::Accepted(state) => Some(*state),
            _ => None,
        }
    }

    /// True for `Accepted`
    pub fn is_accepted(&self) -> bool {
        matches!(self, DecodeOutcome::Accepted(_))
    }
}

// ============================================================================
// Syndrome Table
// ============================================================================

/// Data patterns relative to `r0`: `(r1 ⊕ r0, r2 ⊕ r0, r3 ⊕ r0)`.
///
/// Row order matches the decode priority; a pattern matches at most one row.
pub const SYNDROME_TABLE: [([bool; 3], LogicalState); code::OUTCOMES] = [
    ([false, false, false], LogicalState::new(false, false)),
    ([false, true, true], LogicalState::new(false, true)),
    ([true, false, true], LogicalState::new(true, false)),
    ([true, true, false], LogicalState::new(true, true)),
];

/// Look up the data bits in the syndrome table
pub fn lookup(data: [bool; code::DATA_QUBITS]) -> Option<LogicalState> {
    let [r0, r1, r2, r3] = data;
    let pattern = [r1 ^ r0, r2 ^ r0, r3 ^ r0];
    SYNDROME_TABLE
        .iter()
        .find(|(row, _)| *row == pattern)
        .map(|(_, state)| *state)
}

// ============================================================================
// Decoding
// ============================================================================

/// Decode one readout
/// Gantree: decode(vector, parity) -> DecodeOutcome // 순수 함수
pub fn decode(vector: &MeasurementVector, parity: ParityCheck) -> DecodeOutcome {
    if vector.ancilla() {
        return DecodeOutcome::DiscardedAncilla;
    }
    if parity.rejects(vector.weight()) {
        return DecodeOutcome::DiscardedGateError;
    }
    match lookup(vector.data()) {
        Some(state) => DecodeOutcome::Accepted(state),
        None => DecodeOutcome::DiscardedGateError,
    }
}

/// Accepted states plus discard accounting for a batch of readouts
/// Gantree: DecodeReport // 수락+폐기 집계
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecodeReport {
    /// Accepted logical states, in readout order
    pub accepted: Vec<LogicalState>,

    /// Readouts dropped because the ancilla fired
    pub discarded_ancilla: usize,

    /// Readouts dropped by the parity rule or the syndrome table
    pub discarded_gate_error: usize,
}

impl DecodeReport {
    /// Decode raw backend readouts
    ///
    /// Fails on the first readout that is not five bits wide.
    pub fn from_readouts(readouts: &[Bitstring], parity: ParityCheck) -> FtecResult<Self> {
        let vectors = readouts
            .iter()
            .map(MeasurementVector::try_from)
            .collect::<FtecResult<Vec<_>>>()?;
        Ok(decode_all(&vectors, parity))
    }

    /// Record one outcome
    pub fn record(&mut self, outcome: DecodeOutcome) {
        match outcome {
            DecodeOutcome::Accepted(state) => self.accepted.push(state),
            DecodeOutcome::DiscardedAncilla => self.discarded_ancilla += 1,
            DecodeOutcome::DiscardedGateError => self.discarded_gate_error += 1,
        }
    }

    /// Readouts seen
    pub fn total(&self) -> usize {
        self.accepted.len() + self.discarded()
    }

    /// Readouts dropped for any reason
    pub fn discarded(&self) -> usize {
        self.discarded_ancilla + self.discarded_gate_error
    }

    /// Fraction of readouts accepted (0 when nothing was decoded)
    pub fn accept_ratio(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.accepted.len() as f64 / total as f64,
        }
    }
}

impl fmt::Display for DecodeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DecodeReport(accepted={}/{}, ancilla={}, gate_error={})",
            self.accepted.len(),
            self.total(),
            self.discarded_ancilla,
            self.discarded_gate_error
        )
    }
}

/// Decode a batch of readouts
/// Gantree: decode_all(vectors, parity) -> DecodeReport // 일괄 디코딩
pub fn decode_all(vectors: &[MeasurementVector], parity: ParityCheck) -> DecodeReport {
    let mut report = DecodeReport::default();
    for vector in vectors {
        report.record(decode(vector, parity));
    }
    debug!("{} ({} parity)", report, parity);
    report
}

// ============================================================================
// Tests
// ============================================================================
