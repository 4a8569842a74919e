//! Backend session lifecycle
//!
//! Gantree: L6_Backend → Session
//!
//! A session is the explicit handle through which an experiment talks to a
//! backend: opened once, used for any number of jobs, then closed. Closing
//! yields a summary of the work done.

use crate::execution::{Backend, ExecutionResult};
use crate::statevector::StateVector;
use ftec_core::{Circuit, FtecError, FtecResult};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

/// Work accounted for by a closed session
/// Gantree: SessionSummary // 세션 요약
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Backend name
    pub backend: String,

    /// Sampling jobs submitted
    pub jobs: usize,

    /// Wavefunction requests
    pub wavefunctions: usize,

    /// Total runs across all sampling jobs
    pub total_shots: u64,

    /// Wall time the session was open, in milliseconds
    pub elapsed_ms: u64,
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Session({}: {} jobs, {} shots, {} wavefunctions, {} ms)",
            self.backend, self.jobs, self.total_shots, self.wavefunctions, self.elapsed_ms
        )
    }
}

/// Open connection to a backend
/// Gantree: Session // 백엔드 세션
pub struct Session<'a> {
    backend: &'a dyn Backend,
    opened: Instant,
    jobs: usize,
    wavefunctions: usize,
    total_shots: u64,
    closed: bool,
}

impl<'a> Session<'a> {
    /// Open a session on `backend`
    /// Gantree: open(backend) -> Session // 세션 시작
    pub fn open(backend: &'a dyn Backend) -> Self {
        info!(
            "opened session on '{}' ({} qubits)",
            backend.name(),
            backend.num_qubits()
        );
        Self {
            backend,
            opened: Instant::now(),
            jobs: 0,
            wavefunctions: 0,
            total_shots: 0,
            closed: false,
        }
    }

    /// Backend behind this session
    pub fn backend(&self) -> &dyn Backend {
        self.backend
    }

    /// Whether `close` has been called
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Run `circuit` `trials` times
    /// Gantree: run(circuit, trials) -> Result<ExecutionResult> // 샘플링
    pub fn run(&mut self, circuit: &Circuit, trials: u64) -> FtecResult<ExecutionResult> {
        self.ensure_open()?;
        let result = self.backend.execute(circuit, trials)?;
        self.jobs += 1;
        self.total_shots += result.shots;
        debug!(
            "job {} on '{}': {} runs of {}",
            self.jobs,
            self.backend.name(),
            trials,
            circuit.name().unwrap_or("<unnamed>")
        );
        Ok(result)
    }

    /// Exact noiseless amplitudes of `circuit`
    pub fn wavefunction(&mut self, circuit: &Circuit) -> FtecResult<StateVector> {
        self.ensure_open()?;
        let state = self.backend.wavefunction(circuit)?;
        self.wavefunctions += 1;
        Ok(state)
    }

    /// Work done so far
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            backend: self.backend.name().to_string(),
            jobs: self.jobs,
            wavefunctions: self.wavefunctions,
            total_shots: self.total_shots,
            elapsed_ms: self.opened.elapsed().as_millis() as u64,
        }
    }

    /// Close the session
    /// Gantree: close(self) -> Result<SessionSummary> // 세션 종료
    pub fn close(mut self) -> FtecResult<SessionSummary> {
        self.ensure_open()?;
        self.closed = true;
        let summary = self.summary();
        info!("closed {}", summary);
        Ok(summary)
    }

    fn ensure_open(&self) -> FtecResult<()> {
        if self.closed {
            return Err(FtecError::SessionClosed(self.backend.name().to_string()));
        }
        Ok(())
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        if !self.closed {
            warn!(
                "session on '{}' dropped without close after {} jobs",
                self.backend.name(),
                self.jobs
            );
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
