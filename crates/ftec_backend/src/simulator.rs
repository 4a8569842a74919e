//! Simulator backend for FTEC
//!
//! Gantree: L6_Backend → SimulatorBackend
//!
//! Shot-by-shot statevector simulator with stochastic Pauli noise and
//! readout flips. The RNG lives inside the backend, so successive
//! executions keep drawing fresh samples from one seeded stream.

use crate::execution::{Backend, ExecutionMetadata, ExecutionResult};
use crate::statevector::StateVector;
use ftec_core::{backend, Bitstring, Circuit, FtecError, FtecResult, Gate};
use ftec_noise::NoiseModel;
use log::debug;
use rand::prelude::*;
use rand::rngs::StdRng;
use std::sync::Mutex;
use std::time::Instant;

/// Simulator backend with noise model
/// Gantree: SimulatorBackend // 시뮬레이터 구현
pub struct SimulatorBackend {
    /// Backend name
    name: String,

    /// Number of qubits
    num_qubits: usize,

    /// Noise model
    noise_model: NoiseModel,

    /// Random seed
    seed: Option<u64>,

    /// Sampling stream
    rng: Mutex<StdRng>,
}

impl SimulatorBackend {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create new simulator backend
    pub fn new(num_qubits: usize, noise_model: NoiseModel) -> Self {
        Self {
            name: backend::SIMULATOR_NAME.to_string(),
            num_qubits,
            noise_model,
            seed: None,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create ideal (noiseless) simulator
    pub fn ideal(num_qubits: usize) -> Self {
        Self::new(num_qubits, NoiseModel::ideal())
    }

    /// Create from depolarizing error rate
    pub fn from_depol(num_qubits: usize, p_depol: f64) -> FtecResult<Self> {
        Ok(Self::new(num_qubits, NoiseModel::from_depol(p_depol)?))
    }

    /// Set seed for reproducibility (restarts the sampling stream)
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    /// Replace the noise model
    pub fn with_noise(mut self, noise_model: NoiseModel) -> Self {
        self.noise_model = noise_model;
        self
    }

    /// Set backend name
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Noise model in use
    pub fn noise_model(&self) -> &NoiseModel {
        &self.noise_model
    }

    // ========================================================================
    // Simulation
    // ========================================================================

    /// Simulate a single shot
    ///
    /// Circuits without a declared readout are measured on every qubit at
    /// the end, `ro[q] = q`.
    fn simulate_single_shot(&self, circuit: &Circuit, rng: &mut StdRng) -> Bitstring {
        let mut state = StateVector::new(circuit.num_qubits());

        if circuit.num_clbits() == 0 {
            for gate in circuit.gates() {
                self.apply_noisy_gate(&mut state, gate, rng);
            }
            let bits = (0..circuit.num_qubits())
                .map(|q| self.read(state.measure(q, rng), rng))
                .collect();
            return Bitstring::new(bits);
        }

        let mut readout = Bitstring::zeros(circuit.num_clbits());
        for gate in circuit.gates() {
            match gate {
                Gate::Measure(q, c) => {
                    let bit = state.measure(*q, rng);
                    readout.set(*c, self.read(bit, rng));
                }
                _ => self.apply_noisy_gate(&mut state, gate, rng),
            }
        }
        readout
    }

    /// Apply a gate followed by its Pauli channel
    fn apply_noisy_gate(&self, state: &mut StateVector, gate: &Gate, rng: &mut StdRng) {
        state.apply_gate(gate);

        let error_rate = match gate {
            Gate::Id(_) => self.noise_model.idle_error(),
            g if g.is_two_qubit() => self.noise_model.gate_error_2q(),
            g if g.is_single_qubit() => self.noise_model.gate_error_1q(),
            _ => 0.0,
        };

        if error_rate > 0.0 {
            for q in gate.qubits() {
                if rng.gen::<f64>() < error_rate {
                    state.apply_random_pauli(q, rng);
                }
            }
        }
    }

    /// Classical readout with bit-flip error
    fn read(&self, bit: bool, rng: &mut StdRng) -> bool {
        let p = self.noise_model.readout_error();
        if p > 0.0 && rng.gen::<f64>() < p {
            !bit
        } else {
            bit
        }
    }

    /// Circuit fits both this backend and the dense simulator
    fn check_width(&self, circuit: &Circuit) -> FtecResult<()> {
        let max = self.num_qubits.min(backend::MAX_SIMULATED_QUBITS);
        if circuit.num_qubits() > max {
            return Err(FtecError::QubitOutOfRange {
                qubit: circuit.num_qubits(),
                max,
            });
        }
        Ok(())
    }
}

impl Backend for SimulatorBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    fn execute(&self, circuit: &Circuit, shots: u64) -> FtecResult<ExecutionResult> {
        self.check_width(circuit)?;
        if !(backend::MIN_SHOTS..=self.max_shots()).contains(&shots) {
            return Err(FtecError::ShotsOutOfRange(
                shots,
                backend::MIN_SHOTS,
                self.max_shots(),
            ));
        }

        let start = Instant::now();
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| FtecError::BackendError("simulator RNG lock poisoned".into()))?;

        let readouts: Vec<Bitstring> = (0..shots)
            .map(|_| self.simulate_single_shot(circuit, &mut rng))
            .collect();
        let elapsed = start.elapsed().as_millis() as u64;

        debug!(
            "{}: {} shots on {} qubits in {} ms",
            self.name,
            shots,
            circuit.num_qubits(),
            elapsed
        );

        Ok(ExecutionResult {
            readouts,
            shots,
            metadata: ExecutionMetadata {
                backend: self.name.clone(),
                execution_time_ms: Some(elapsed),
                simulated: true,
                seed: self.seed,
                ..Default::default()
            },
        })
    }

    fn wavefunction(&self, circuit: &Circuit) -> FtecResult<StateVector> {
        self.check_width(circuit)?;
        StateVector::from_circuit(circuit)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ftec_core::CircuitBuilder;

    #[test]
    fn test_simulator_ideal_bell() {
        let backend = SimulatorBackend::ideal(3).with_seed(42);
        let circuit = CircuitBuilder::new(2).h(0).cnot(0, 1).measure_all().build();

        let result = backend.execute(&circuit, 1000).unwrap();

        let p00 = result.probability("00");
        let p11 = result.probability("11");
        assert!(p00 > 0.4 && p00 < 0.6, "P(00) = {}", p00);
        assert!((p00 + p11 - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_readout_order_follows_clbits() {
        let backend = SimulatorBackend::ideal(2).with_seed(1);
        // q1 -> ro[0], q0 -> ro[1]
        let circuit = CircuitBuilder::new(2)
            .x(1)
            .readout(2)
            .measure(1, 0)
            .measure(0, 1)
            .build();

        let result = backend.execute(&circuit, 10).unwrap();
        assert_eq!(result.probability("10"), 1.0);
    }

    #[test]
    fn test_no_readout_measures_every_qubit() {
        let backend = SimulatorBackend::ideal(3).with_seed(3);
        let circuit = CircuitBuilder::new(3).x(2).build();

        let result = backend.execute(&circuit, 5).unwrap();
        assert_eq!(result.readout_width(), 3);
        assert_eq!(result.probability("001"), 1.0);
    }

    #[test]
    fn test_readout_noise_flips_bits() {
        let noise = NoiseModel::readout_only(1.0).unwrap();
        let backend = SimulatorBackend::new(1, noise).with_seed(5);
        let circuit = CircuitBuilder::new(1).measure_all().build();

        let result = backend.execute(&circuit, 20).unwrap();
        assert_eq!(result.probability("1"), 1.0);
    }

    #[test]
    fn test_gate_noise_degrades_ghz() {
        let circuit = CircuitBuilder::new(4)
            .h(0)
            .cnot(0, 1)
            .cnot(1, 2)
            .cnot(2, 3)
            .measure_all()
            .build();

        let noisy = SimulatorBackend::new(4, NoiseModel::new(0.05, 0.2, 0.0).unwrap()).with_seed(9);
        let result = noisy.execute(&circuit, 2000).unwrap();

        let good = result.probability("0000") + result.probability("1111");
        assert!(good < 0.95, "noise had no effect: {}", good);
    }

    #[test]
    fn test_qubit_limit() {
        let backend = SimulatorBackend::ideal(3);
        let circuit = CircuitBuilder::new(5).measure_all().build();
        assert!(matches!(
            backend.execute(&circuit, 100),
            Err(FtecError::QubitOutOfRange { qubit: 5, max: 3 })
        ));
        assert!(backend.wavefunction(&circuit).is_err());
    }

    #[test]
    fn test_wide_backend_capped_at_simulator_limit() {
        let wide = SimulatorBackend::ideal(64);
        let circuit = CircuitBuilder::new(64).x(0).measure_all().build();

        assert!(matches!(
            wide.execute(&circuit, 1),
            Err(FtecError::QubitOutOfRange { qubit: 64, max }) if max == backend::MAX_SIMULATED_QUBITS
        ));
        assert!(wide.wavefunction(&circuit).is_err());

        let fits = CircuitBuilder::new(3).x(0).measure_all().build();
        assert_eq!(wide.execute(&fits, 2).unwrap().probability("100"), 1.0);
    }

    #[test]
    fn test_zero_shots_rejected() {
        let backend = SimulatorBackend::ideal(1);
        let circuit = CircuitBuilder::new(1).measure_all().build();
        assert!(matches!(
            backend.execute(&circuit, 0),
            Err(FtecError::ShotsOutOfRange(0, _, _))
        ));
    }

    #[test]
    fn test_seed_reproducibility() {
        let circuit = CircuitBuilder::new(3)
            .h(0)
            .cnot(0, 1)
            .cnot(1, 2)
            .measure_all()
            .build();

        let backend1 = SimulatorBackend::from_depol(3, 0.02).unwrap().with_seed(42);
        let backend2 = SimulatorBackend::from_depol(3, 0.02).unwrap().with_seed(42);

        let result1 = backend1.execute(&circuit, 100).unwrap();
        let result2 = backend2.execute(&circuit, 100).unwrap();
        assert_eq!(result1.readouts, result2.readouts);
    }

    #[test]
    fn test_stream_advances_between_calls() {
        let backend = SimulatorBackend::ideal(3).with_seed(42);
        let circuit = CircuitBuilder::new(3).h(0).h(1).h(2).measure_all().build();

        let first = backend.execute(&circuit, 64).unwrap();
        let second = backend.execute(&circuit, 64).unwrap();
        assert_ne!(first.readouts, second.readouts);
    }

    #[test]
    fn test_wavefunction_ignores_noise() {
        let backend = SimulatorBackend::from_depol(1, 0.1).unwrap();
        let circuit = CircuitBuilder::new(1).x(0).measure_all().build();

        let state = backend.wavefunction(&circuit).unwrap();
        assert!((state.probabilities()[1] - 1.0).abs() < 1e-12);
    }
}
