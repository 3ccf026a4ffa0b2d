//! Noiseless backend
//!
//! Gantree: L6_Backend → IdealBackend
//!
//! Applies only the ideal propagation rules and ignores the channel
//! parameters entirely. Deterministic, so it needs no random source.

use crate::execution::{ideal_outcome, propagate_cnot, Backend, BackendStats};
use flagqec_core::{Basis, PauliFrame, QubitId};
use flagqec_noise::ChannelParameters;

/// Deterministic fault-free backend
#[derive(Debug, Clone, Default)]
pub struct IdealBackend {
    stats: BackendStats,
}

impl IdealBackend {
    /// Create ideal backend
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for IdealBackend {
    fn name(&self) -> &str {
        "flagqec_ideal"
    }

    fn prepare(
        &mut self,
        _basis: Basis,
        qubit: QubitId,
        frame: &mut PauliFrame,
        _params: &ChannelParameters,
    ) {
        self.stats.preparations += 1;
        frame.clear(qubit);
    }

    fn cnot(
        &mut self,
        control: QubitId,
        target: QubitId,
        frame: &mut PauliFrame,
        _params: &ChannelParameters,
    ) {
        self.stats.cnots += 1;
        propagate_cnot(frame, control, target);
    }

    fn measure(
        &mut self,
        basis: Basis,
        qubit: QubitId,
        frame: &mut PauliFrame,
        _params: &ChannelParameters,
    ) -> bool {
        self.stats.measurements += 1;
        ideal_outcome(frame, basis, qubit)
    }

    fn stats(&self) -> &BackendStats {
        &self.stats
    }

    fn is_noisy(&self) -> bool {
        false
    }
}
