//! Random logical gate sequences
//!
//! Gantree: L5_Experiment → Sequence

use ftec_code::{LogicalBit, LogicalGate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Draw one gate uniformly from `{X, Z, H, CZ}`, with a uniform bit for X/Z
pub fn random_gate<R: Rng>(rng: &mut R) -> LogicalGate {
    let kind = rng.gen_range(0..4);
    let bit = if rng.gen_bool(0.5) {
        LogicalBit::ONE
    } else {
        LogicalBit::ZERO
    };
    match kind {
        0 => LogicalGate::X(bit),
        1 => LogicalGate::Z(bit),
        2 => LogicalGate::H,
        _ => LogicalGate::Cz,
    }
}

/// `length` independent random gates
/// Gantree: random_sequence(rng, t) -> Vec<LogicalGate> // rand_pq
pub fn random_sequence<R: Rng>(rng: &mut R, length: usize) -> Vec<LogicalGate> {
    (0..length).map(|_| random_gate(rng)).collect()
}

/// Seeded source of gate sequences
/// Gantree: SequenceGenerator // 시드 고정 생성기
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    rng: ChaCha8Rng,
}

impl SequenceGenerator {
    /// Create from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Next sequence of `length` gates
    pub fn next_sequence(&mut self, length: usize) -> Vec<LogicalGate> {
        random_sequence(&mut self.rng, length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length() {
        let mut generator = SequenceGenerator::new(1);
        assert_eq!(generator.next_sequence(0).len(), 0);
        assert_eq!(generator.next_sequence(7).len(), 7);
    }

    #[test]
    fn test_seeded_reproducible() {
        let a = SequenceGenerator::new(42).next_sequence(20);
        let b = SequenceGenerator::new(42).next_sequence(20);
        let c = SequenceGenerator::new(43).next_sequence(20);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_all_kinds_drawn() {
        let gates = SequenceGenerator::new(5).next_sequence(400);
        for name in ["X", "Z", "H", "CZ"] {
            let count = gates.iter().filter(|g| g.name() == name).count();
            assert!(count > 50, "{} drawn {} times", name, count);
        }
        assert!(gates.contains(&LogicalGate::X(LogicalBit::ONE)));
        assert!(gates.contains(&LogicalGate::Z(LogicalBit::ZERO)));
    }
}
