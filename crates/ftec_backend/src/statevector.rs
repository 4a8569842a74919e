//! Dense statevector for FTEC
//!
//! Gantree: L6_Backend → StateVector
//!
//! Amplitude index bit `q` holds qubit `q`, so for a two-qubit register
//! `probabilities()[bit0 + 2 * bit1]` is the probability of that outcome.

use ftec_core::{backend, Circuit, FtecError, FtecResult, Gate, QubitId};
use num_complex::Complex64;
use rand::Rng;
use std::f64::consts::FRAC_1_SQRT_2;

/// Dense complex amplitude vector
/// Gantree: StateVector // 상태 벡터
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// |0...0> on `num_qubits` qubits
    /// Gantree: new(n) -> Self // 초기 상태
    pub fn new(num_qubits: usize) -> Self {
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1 << num_qubits];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            num_qubits,
            amplitudes,
        }
    }

    /// Exact noiseless evolution of `circuit`; measurements are skipped
    /// Gantree: from_circuit(circuit) -> Result<Self> // 파동함수
    pub fn from_circuit(circuit: &Circuit) -> FtecResult<Self> {
        if circuit.num_qubits() > backend::MAX_SIMULATED_QUBITS {
            return Err(FtecError::QubitOutOfRange {
                qubit: circuit.num_qubits(),
                max: backend::MAX_SIMULATED_QUBITS,
            });
        }
        let mut state = Self::new(circuit.num_qubits());
        for gate in circuit.gates() {
            state.apply_gate(gate);
        }
        Ok(state)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Raw amplitudes
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// `|amplitude|^2` per basis state
    /// Gantree: probabilities(&self) -> Vec<f64> // 확률
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Total probability (1 for a normalized state)
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Probability that `qubit` reads 1
    pub fn probability_one(&self, qubit: QubitId) -> f64 {
        let mask = 1 << qubit;
        self.amplitudes
            .iter()
            .enumerate()
            .filter(|(i, _)| i & mask != 0)
            .map(|(_, a)| a.norm_sqr())
            .sum()
    }

    // ========================================================================
    // Unitary Evolution
    // ========================================================================

    /// Apply one gate; measurement leaves the state unchanged
    pub fn apply_gate(&mut self, gate: &Gate) {
        let i = Complex64::i();
        match *gate {
            Gate::H(q) => self.apply_single(q, |a, b| {
                ((a + b) * FRAC_1_SQRT_2, (a - b) * FRAC_1_SQRT_2)
            }),
            Gate::X(q) => self.apply_single(q, |a, b| (b, a)),
            Gate::Y(q) => self.apply_single(q, |a, b| (-i * b, i * a)),
            Gate::Z(q) => self.apply_single(q, |a, b| (a, -b)),
            Gate::Id(_) => {}
            Gate::Phase(q, lambda) => {
                let phase = Complex64::from_polar(1.0, lambda);
                self.apply_single(q, |a, b| (a, b * phase))
            }
            Gate::Cnot(c, t) => self.apply_cnot(c, t),
            Gate::Cz(a, b) => self.apply_cz(a, b),
            Gate::Swap(a, b) => self.apply_swap(a, b),
            Gate::Measure(_, _) => {}
        }
    }

    fn apply_single<F>(&mut self, q: QubitId, f: F)
    where
        F: Fn(Complex64, Complex64) -> (Complex64, Complex64),
    {
        let mask = 1 << q;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let (new_i, new_j) = f(self.amplitudes[i], self.amplitudes[j]);
                self.amplitudes[i] = new_i;
                self.amplitudes[j] = new_j;
            }
        }
    }

    fn apply_cnot(&mut self, control: QubitId, target: QubitId) {
        let control_mask = 1 << control;
        let target_mask = 1 << target;
        for i in 0..self.amplitudes.len() {
            if i & control_mask != 0 && i & target_mask == 0 {
                self.amplitudes.swap(i, i | target_mask);
            }
        }
    }

    fn apply_cz(&mut self, q1: QubitId, q2: QubitId) {
        let mask = (1 << q1) | (1 << q2);
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & mask == mask {
                *amp = -*amp;
            }
        }
    }

    fn apply_swap(&mut self, q1: QubitId, q2: QubitId) {
        let mask1 = 1 << q1;
        let mask2 = 1 << q2;
        for i in 0..self.amplitudes.len() {
            if i & mask1 != 0 && i & mask2 == 0 {
                self.amplitudes.swap(i, i ^ mask1 ^ mask2);
            }
        }
    }

    // ========================================================================
    // Noise and Measurement
    // ========================================================================

    /// Apply a uniformly random non-identity Pauli to `qubit`
    pub fn apply_random_pauli<R: Rng>(&mut self, qubit: QubitId, rng: &mut R) {
        let pauli = match rng.gen_range(0..3) {
            0 => Gate::X(qubit),
            1 => Gate::Y(qubit),
            _ => Gate::Z(qubit),
        };
        self.apply_gate(&pauli);
    }

    /// Projective Z measurement of `qubit`; the state collapses
    /// Gantree: measure(&mut, q, rng) -> bool // 측정+붕괴
    pub fn measure<R: Rng>(&mut self, qubit: QubitId, rng: &mut R) -> bool {
        let p_one = self.probability_one(qubit).clamp(0.0, 1.0);
        let outcome = rng.gen::<f64>() < p_one;

        let kept = if outcome { p_one } else { 1.0 - p_one };
        let scale = if kept > 0.0 { 1.0 / kept.sqrt() } else { 0.0 };
        let mask = 1 << qubit;
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if (i & mask != 0) == outcome {
                *amp *= scale;
            } else {
                *amp = Complex64::new(0.0, 0.0);
            }
        }
        outcome
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ftec_core::CircuitBuilder;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_initial_state() {
        let state = StateVector::new(3);
        assert_eq!(state.amplitudes().len(), 8);
        assert_eq!(state.probabilities()[0], 1.0);
    }

    #[test]
    fn test_bell_state() {
        let circuit = CircuitBuilder::new(2).h(0).cnot(0, 1).build();
        let probs = StateVector::from_circuit(&circuit).unwrap().probabilities();

        assert_abs_diff_eq!(probs[0b00], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(probs[0b11], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(probs[0b01] + probs[0b10], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_index_is_little_endian() {
        // X on qubit 0 only -> index 1
        let circuit = CircuitBuilder::new(2).x(0).build();
        let probs = StateVector::from_circuit(&circuit).unwrap().probabilities();
        assert_abs_diff_eq!(probs[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_swap_moves_excitation() {
        let circuit = CircuitBuilder::new(2).x(0).swap(0, 1).build();
        let probs = StateVector::from_circuit(&circuit).unwrap().probabilities();
        assert_abs_diff_eq!(probs[2], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_phase_pi_over_two() {
        let circuit = CircuitBuilder::new(1).h(0).phase(0, FRAC_PI_2).build();
        let state = StateVector::from_circuit(&circuit).unwrap();

        let expected = [
            Complex64::new(FRAC_1_SQRT_2, 0.0),
            Complex64::new(0.0, FRAC_1_SQRT_2),
        ];
        for (x, y) in state.amplitudes().iter().zip(expected) {
            assert_abs_diff_eq!((x - y).norm(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_identity_leaves_state() {
        let circuit = CircuitBuilder::new(2).h(0).id(0).id(1).build();
        let plain = CircuitBuilder::new(2).h(0).build();
        assert_eq!(
            StateVector::from_circuit(&circuit).unwrap(),
            StateVector::from_circuit(&plain).unwrap()
        );
    }

    #[test]
    fn test_hzh_is_x() {
        let circuit = CircuitBuilder::new(1).h(0).z(0).h(0).build();
        let state = StateVector::from_circuit(&circuit).unwrap();
        assert_abs_diff_eq!(state.probability_one(0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cz_phase_kickback() {
        // control set, so CZ turns the target |+> into |->
        let circuit = CircuitBuilder::new(2).x(0).h(1).cz(0, 1).h(1).build();
        let state = StateVector::from_circuit(&circuit).unwrap();
        assert_abs_diff_eq!(state.probability_one(1), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(state.norm_sqr(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_measure_collapses() {
        let mut rng = StdRng::seed_from_u64(7);
        let circuit = CircuitBuilder::new(2).h(0).cnot(0, 1).build();
        let mut state = StateVector::from_circuit(&circuit).unwrap();

        let first = state.measure(0, &mut rng);
        let second = state.measure(1, &mut rng);

        assert_eq!(first, second);
        assert_abs_diff_eq!(state.norm_sqr(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_random_pauli_keeps_norm() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut state = StateVector::new(2);
        for _ in 0..20 {
            state.apply_random_pauli(1, &mut rng);
        }
        assert_abs_diff_eq!(state.norm_sqr(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_too_wide_circuit() {
        let circuit = ftec_core::Circuit::new(backend::MAX_SIMULATED_QUBITS + 1);
        assert!(StateVector::from_circuit(&circuit).is_err());
    }
}
