//! Outcome distributions over two logical bits
//!
//! Gantree: L4_Decode → Statistics
//!
//! Bins are indexed `bit0 + 2 * bit1`, the same order the reference
//! circuit's amplitudes use.

use ftec_code::LogicalState;
use ftec_core::{code, Bitstring, FtecError, FtecResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// Probability vector over `{00, 10, 01, 11}` (bit0 first)
/// Gantree: Distribution // [f64; 4]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Distribution([f64; code::OUTCOMES]);

impl Distribution {
    /// All bins zero (nothing accepted)
    pub const EMPTY: Self = Self([0.0; code::OUTCOMES]);

    /// Wrap raw bin values
    pub fn new(bins: [f64; code::OUTCOMES]) -> Self {
        Self(bins)
    }

    /// Build from a probability slice of length 4
    pub fn from_probabilities(probs: &[f64]) -> FtecResult<Self> {
        let bins: [f64; code::OUTCOMES] = probs.try_into().map_err(|_| {
            FtecError::InternalError(format!(
                "distribution needs {} bins, got {}",
                code::OUTCOMES,
                probs.len()
            ))
        })?;
        Ok(Self(bins))
    }

    /// Distribution with all mass on one state
    pub fn point(state: LogicalState) -> Self {
        let mut bins = [0.0; code::OUTCOMES];
        bins[state.index()] = 1.0;
        Self(bins)
    }

    /// Bin values
    pub fn bins(&self) -> &[f64; code::OUTCOMES] {
        &self.0
    }

    /// Sum of all bins
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// True when every bin is zero
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&p| p == 0.0)
    }

    /// Probability of one state
    pub fn probability(&self, state: LogicalState) -> f64 {
        self.0[state.index()]
    }
}

impl Index<usize> for Distribution {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [p00, p10, p01, p11] = self.0;
        write!(
            f,
            "[00: {:.4}, 10: {:.4}, 01: {:.4}, 11: {:.4}]",
            p00, p10, p01, p11
        )
    }
}

// ============================================================================
// Aggregation
// ============================================================================

/// Normalized histogram of decoded states
///
/// An empty slice yields `Distribution::EMPTY`.
/// Gantree: aggregate(outcomes) -> Distribution // 정규화 히스토그램
pub fn aggregate(outcomes: &[LogicalState]) -> Distribution {
    if outcomes.is_empty() {
        return Distribution::EMPTY;
    }
    let mut bins = [0.0; code::OUTCOMES];
    for state in outcomes {
        bins[state.index()] += 1.0;
    }
    let n = outcomes.len() as f64;
    Distribution(bins.map(|count| count / n))
}

/// Histogram of two-bit readouts from the reference circuit
pub fn aggregate_readouts(readouts: &[Bitstring]) -> FtecResult<Distribution> {
    let states = readouts
        .iter()
        .map(|r| match r.bits() {
            [bit0, bit1] => Ok(LogicalState::new(*bit0, *bit1)),
            bits => Err(FtecError::InvalidMeasurementLength {
                expected: code::LOGICAL_BITS,
                actual: bits.len(),
            }),
        })
        .collect::<FtecResult<Vec<_>>>()?;
    Ok(aggregate(&states))
}

/// Total variation distance `0.5 * Σ|p_i - q_i|`
/// Gantree: total_variation_distance(p, q) -> f64 // TVD
pub fn total_variation_distance(p: &Distribution, q: &Distribution) -> f64 {
    p.0.iter()
        .zip(q.0.iter())
        .map(|(a, b)| (a - b).abs())
        .sum::<f64>()
        / 2.0
}

// ============================================================================
// Tests
// ============================================================================
