//! # FTEC Backend
//!
//! Execution boundary for FTEC: circuits go in, per-run readouts come out.
//!
//! ## Gantree Architecture
//!
//! ```text
//! ftec_backend // L6: Execution Adapter (완료)
//!     BackendTrait // 실행 경계 (완료)
//!     StateVector // 상태 벡터 + 측정 붕괴 (완료)
//!     SimulatorBackend // 노이즈 시뮬레이터 (완료)
//!     Session // open/run/close 수명주기 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use ftec_backend::prelude::*;
//! use ftec_core::CircuitBuilder;
//!
//! // Create ideal simulator
//! let backend = SimulatorBackend::ideal(5).with_seed(42);
//!
//! let circuit = CircuitBuilder::new(2)
//!     .h(0)
//!     .cnot(0, 1)
//!     .measure_all()
//!     .build();
//!
//! let mut session = Session::open(&backend);
//! let result = session.run(&circuit, 1000).unwrap();
//! let summary = session.close().unwrap();
//!
//! assert_eq!(result.readouts.len(), 1000);
//! assert_eq!(summary.total_shots, 1000);
//! ```
//!
//! ## Noisy Simulation
//!
//! ```rust
//! use ftec_backend::prelude::*;
//! use ftec_core::CircuitBuilder;
//!
//! // Create noisy simulator (p = 0.02)
//! let backend = SimulatorBackend::from_depol(5, 0.02)
//!     .unwrap()
//!     .with_seed(42);
//!
//! let circuit = CircuitBuilder::new(3)
//!     .h(0)
//!     .cnot(0, 1)
//!     .measure_all()
//!     .build();
//!
//! let result = backend.execute(&circuit, 1000).unwrap();
//! println!("P(000) = {:.3}", result.probability("000"));
//! ```

#![warn(missing_docs)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Execution types and backend trait (Gantree: L6_Backend)
pub mod execution;

/// Dense statevector (Gantree: L6_Backend → StateVector)
pub mod statevector;

/// Simulator backend (Gantree: L6_Backend → SimulatorBackend)
pub mod simulator;

/// Backend session (Gantree: L6_Backend → Session)
pub mod session;

// ============================================================================
// Re-exports
// ============================================================================

pub use execution::{Backend, ExecutionMetadata, ExecutionResult};
pub use session::{Session, SessionSummary};
pub use simulator::SimulatorBackend;
pub use statevector::StateVector;

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! ```rust
    //! use ftec_backend::prelude::*;
    //! ```

    pub use crate::execution::{Backend, ExecutionMetadata, ExecutionResult};
    pub use crate::session::{Session, SessionSummary};
    pub use crate::simulator::SimulatorBackend;
    pub use crate::statevector::StateVector;
}

// ============================================================================
// Integration Tests
// ============================================================================
