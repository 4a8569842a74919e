//! Logical-level types for the two-bit code
//!
//! Gantree: L3_Code → Logical
//!
//! `LogicalBit` and `LogicalGate` describe what a gate sequence does to the
//! two encoded bits. Gate names only appear at the parsing edge; everything
//! downstream matches on the closed enum.

use ftec_core::{code, FtecError, FtecResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// LogicalBit
// ============================================================================

/// Index of a logical bit, always 0 or 1
/// Gantree: LogicalBit // 논리 비트 (0|1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct LogicalBit(u8);

impl LogicalBit {
    /// Logical bit 0
    pub const ZERO: Self = Self(0);

    /// Logical bit 1
    pub const ONE: Self = Self(1);

    /// Validate a bit index
    /// Gantree: new(index) -> Result<Self> // 0|1 검증
    pub fn new(index: usize) -> FtecResult<Self> {
        match index {
            0 => Ok(Self::ZERO),
            1 => Ok(Self::ONE),
            other => Err(FtecError::InvalidLogicalBit(other)),
        }
    }

    /// Index as usize
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<usize> for LogicalBit {
    type Error = FtecError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<LogicalBit> for usize {
    fn from(bit: LogicalBit) -> Self {
        bit.index()
    }
}

impl fmt::Display for LogicalBit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// LogicalGate
// ============================================================================

/// Gate acting on the two logical bits
/// Gantree: LogicalGate // enum {X,Z,H,CZ}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalGate {
    /// Bit flip on one logical bit
    X(LogicalBit),
    /// Phase flip on one logical bit
    Z(LogicalBit),
    /// Hadamard on both bits followed by a swap
    H,
    /// Controlled-Z followed by Z on both bits
    Cz,
}

impl LogicalGate {
    /// Build a gate from its name and bit argument
    ///
    /// Names are case-insensitive. The bit is checked for `X` and `Z` and
    /// ignored for `H` and `CZ`.
    /// Gantree: parse(name, bit) -> Result<Self> // 이름 디스패치
    pub fn parse(name: &str, bit: usize) -> FtecResult<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "X" => Ok(Self::X(LogicalBit::new(bit)?)),
            "Z" => Ok(Self::Z(LogicalBit::new(bit)?)),
            "H" => Ok(Self::H),
            "CZ" => Ok(Self::Cz),
            _ => Err(FtecError::InvalidGate(name.to_string())),
        }
    }

    /// Gate name without the bit
    pub fn name(&self) -> &'static str {
        match self {
            Self::X(_) => "X",
            Self::Z(_) => "Z",
            Self::H => "H",
            Self::Cz => "CZ",
        }
    }

    /// Target bit for single-bit gates
    pub fn bit(&self) -> Option<LogicalBit> {
        match self {
            Self::X(b) | Self::Z(b) => Some(*b),
            Self::H | Self::Cz => None,
        }
    }
}

impl fmt::Display for LogicalGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bit() {
            Some(bit) => write!(f, "{}{}", self.name(), bit),
            None => write!(f, "{}", self.name()),
        }
    }
}

impl FromStr for LogicalGate {
    type Err = FtecError;

    /// Accepts `X0`, `x(1)`, `Z1`, `H`, `CZ`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '(' && *c != ')')
            .collect();
        let split = cleaned
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(cleaned.len());
        let (name, digits) = cleaned.split_at(split);

        let upper = name.to_ascii_uppercase();
        if (upper == "X" || upper == "Z") && digits.is_empty() {
            return Err(FtecError::InvalidGate(s.to_string()));
        }
        let bit = if digits.is_empty() {
            0
        } else {
            digits
                .parse::<usize>()
                .map_err(|_| FtecError::InvalidGate(s.to_string()))?
        };
        Self::parse(name, bit).map_err(|e| match e {
            FtecError::InvalidGate(_) => FtecError::InvalidGate(s.to_string()),
            other => other,
        })
    }
}

/// Parse a comma-separated sequence such as `"H, Z1, H"`
pub fn parse_sequence(text: &str) -> FtecResult<Vec<LogicalGate>> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect()
}

// ============================================================================
// LogicalState
// ============================================================================

/// Decoded value of the two logical bits
/// Gantree: LogicalState // (bit0, bit1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LogicalState {
    /// Logical bit 0
    pub bit0: bool,
    /// Logical bit 1
    pub bit1: bool,
}

impl LogicalState {
    /// All four states in index order
    pub const ALL: [Self; code::OUTCOMES] = [
        Self::new(false, false),
        Self::new(true, false),
        Self::new(false, true),
        Self::new(true, true),
    ];

    /// Create from the two bits
    pub const fn new(bit0: bool, bit1: bool) -> Self {
        Self { bit0, bit1 }
    }

    /// Distribution bin: `bit0 + 2 * bit1`
    /// Gantree: index(&self) -> usize // 분포 인덱스
    pub fn index(&self) -> usize {
        self.bit0 as usize + 2 * self.bit1 as usize
    }

    /// Inverse of `index`
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Value of one logical bit
    pub fn get(&self, bit: LogicalBit) -> bool {
        match bit.index() {
            0 => self.bit0,
            _ => self.bit1,
        }
    }
}

impl fmt::Display for LogicalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.bit0 as u8, self.bit1 as u8)
    }
}

// ============================================================================
// Tests
// ============================================================================
