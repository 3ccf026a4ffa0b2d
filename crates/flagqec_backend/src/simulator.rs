//! Simulator backend for FLAGQEC
//!
//! Gantree: L6_Backend → SimulatorBackend
//!
//! Random Pauli-frame noise: each primitive applies its ideal propagation
//! rule, then draws a fault with the probability given by the channel
//! parameters. No amplitudes are tracked.

use crate::execution::{
    ideal_outcome, preparation_fault, propagate_cnot, two_qubit_pauli, Backend, BackendStats,
};
use flagqec_core::{noise, Basis, PauliFrame, QubitId};
use flagqec_noise::ChannelParameters;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Simulator backend with seeded randomness
/// Gantree: SimulatorBackend // 시뮬레이터 구현
pub struct SimulatorBackend {
    /// Backend name
    name: String,

    /// Random seed
    seed: Option<u64>,

    /// Random source shared by all primitives
    rng: StdRng,

    /// Counters
    stats: BackendStats,
}

impl SimulatorBackend {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create simulator seeded from entropy
    pub fn new() -> Self {
        Self {
            name: "flagqec_simulator".to_string(),
            seed: None,
            rng: StdRng::from_entropy(),
            stats: BackendStats::default(),
        }
    }

    /// Set seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Set backend name
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Seed in use, if any
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Restart the random stream from the configured seed
    pub fn reseed(&mut self) {
        self.rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.stats.clear();
    }

    // ========================================================================
    // Sampling
    // ========================================================================

    /// Bernoulli draw; skips the RNG when the rate is zero
    #[inline]
    fn occurs(&mut self, rate: f64) -> bool {
        rate > 0.0 && self.rng.gen::<f64>() < rate
    }
}

impl Default for SimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for SimulatorBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn prepare(
        &mut self,
        basis: Basis,
        qubit: QubitId,
        frame: &mut PauliFrame,
        params: &ChannelParameters,
    ) {
        self.stats.preparations += 1;
        frame.clear(qubit);
        if self.occurs(params.prep_error()) {
            self.stats.faults += 1;
            frame.apply(qubit, preparation_fault(basis));
            log::trace!("preparation fault on qubit {} ({} basis)", qubit, basis);
        }
    }

    fn cnot(
        &mut self,
        control: QubitId,
        target: QubitId,
        frame: &mut PauliFrame,
        params: &ChannelParameters,
    ) {
        self.stats.cnots += 1;
        propagate_cnot(frame, control, target);
        if self.occurs(params.gate_error()) {
            self.stats.faults += 1;
            let index = self.rng.gen_range(1..=noise::TWO_QUBIT_PAULIS);
            let (on_control, on_target) = two_qubit_pauli(index);
            frame.apply(control, on_control);
            frame.apply(target, on_target);
            log::trace!(
                "gate fault {}{} on cnot({}, {})",
                on_control,
                on_target,
                control,
                target
            );
        }
    }

    fn measure(
        &mut self,
        basis: Basis,
        qubit: QubitId,
        frame: &mut PauliFrame,
        params: &ChannelParameters,
    ) -> bool {
        self.stats.measurements += 1;
        let outcome = ideal_outcome(frame, basis, qubit);
        if self.occurs(params.meas_error()) {
            self.stats.faults += 1;
            log::trace!("measurement fault on qubit {} ({} basis)", qubit, basis);
            return !outcome;
        }
        outcome
    }

    fn stats(&self) -> &BackendStats {
        &self.stats
    }
}

// ============================================================================
// Tests
// ============================================================================
