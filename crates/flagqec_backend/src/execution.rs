//! Backend trait and Pauli-frame propagation rules
//!
//! Gantree: L6_Backend → BackendTrait
//!
//! The decoder sees the noisy hardware only through [`Backend`]: prepare,
//! controlled-not and measure, each mutating a shared [`PauliFrame`]. All
//! implementations share the ideal propagation rules defined here and differ
//! only in how they inject faults.

use flagqec_core::{Basis, Pauli, PauliFrame, QubitId};
use flagqec_noise::ChannelParameters;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Noisy-primitive capability used by the decoder
/// Gantree: Backend // 백엔드 트레이트
pub trait Backend {
    /// Backend name
    fn name(&self) -> &str;

    /// Reset `qubit` to the +1 eigenstate of `basis`, possibly faulty
    fn prepare(
        &mut self,
        basis: Basis,
        qubit: QubitId,
        frame: &mut PauliFrame,
        params: &ChannelParameters,
    );

    /// Controlled-not from `control` onto `target`, possibly followed by a
    /// two-qubit Pauli fault
    fn cnot(
        &mut self,
        control: QubitId,
        target: QubitId,
        frame: &mut PauliFrame,
        params: &ChannelParameters,
    );

    /// Measure `qubit` in `basis`; `true` is the -1 outcome
    fn measure(
        &mut self,
        basis: Basis,
        qubit: QubitId,
        frame: &mut PauliFrame,
        params: &ChannelParameters,
    ) -> bool;

    /// Operation and fault counters
    fn stats(&self) -> &BackendStats;

    /// Whether this backend can inject faults at all
    fn is_noisy(&self) -> bool {
        true
    }
}

// ============================================================================
// Statistics
// ============================================================================

/// Operation and fault counters of a backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendStats {
    /// Preparations executed
    pub preparations: u64,

    /// CNOTs executed
    pub cnots: u64,

    /// Measurements executed
    pub measurements: u64,

    /// Faults injected, all kinds
    pub faults: u64,
}

impl BackendStats {
    /// Noisy locations executed
    pub fn locations(&self) -> u64 {
        self.preparations + self.cnots + self.measurements
    }

    /// Reset all counters
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for BackendStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BackendStats(prep={}, cnot={}, meas={}, faults={})",
            self.preparations, self.cnots, self.measurements, self.faults
        )
    }
}

// ============================================================================
// Propagation Rules
// ============================================================================

/// Ideal CNOT conjugation: X spreads control → target, Z spreads target → control
#[inline]
pub fn propagate_cnot(frame: &mut PauliFrame, control: QubitId, target: QubitId) {
    if frame.has_x(control) {
        frame.flip_x(target);
    }
    if frame.has_z(target) {
        frame.flip_z(control);
    }
}

/// Outcome of an ideal measurement: the error component that anticommutes
/// with `basis`
#[inline]
pub fn ideal_outcome(frame: &PauliFrame, basis: Basis, qubit: QubitId) -> bool {
    match basis {
        Basis::X => frame.has_z(qubit),
        Basis::Z => frame.has_x(qubit),
    }
}

/// The error that corrupts a preparation in `basis`
#[inline]
pub fn preparation_fault(basis: Basis) -> Pauli {
    match basis {
        Basis::X => Pauli::Z,
        Basis::Z => Pauli::X,
    }
}

/// Non-identity two-qubit Pauli `index` in 1..=15, as (control, target).
///
/// Bits 0-1 encode the control Pauli, bits 2-3 the target Pauli, each as
/// x + 2z.
#[inline]
pub fn two_qubit_pauli(index: u8) -> (Pauli, Pauli) {
    let decode = |bits: u8| Pauli::from_components(bits & 1 == 1, bits & 2 == 2);
    (decode(index & 3), decode((index >> 2) & 3))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_cnot_spreads_x_forward() {
        let mut frame = PauliFrame::zero();
        frame.flip_x(7);
        propagate_cnot(&mut frame, 7, 3);
        assert!(frame.has_x(3) && frame.has_x(7));
    }

    #[test]
    fn test_cnot_spreads_z_backward() {
        let mut frame = PauliFrame::zero();
        frame.flip_z(3);
        propagate_cnot(&mut frame, 7, 3);
        assert!(frame.has_z(3) && frame.has_z(7));

        // Z on control stays put
        let mut frame = PauliFrame::zero();
        frame.flip_z(7);
        propagate_cnot(&mut frame, 7, 3);
        assert_eq!(frame, PauliFrame::new(0, 1 << 7));
    }

    #[test]
    fn test_ideal_outcome() {
        let frame = PauliFrame::new(1 << 7, 1 << 8);
        assert!(ideal_outcome(&frame, Basis::Z, 7));
        assert!(!ideal_outcome(&frame, Basis::X, 7));
        assert!(ideal_outcome(&frame, Basis::X, 8));
    }

    #[test]
    fn test_preparation_fault_flips_outcome() {
        for basis in [Basis::X, Basis::Z] {
            let mut frame = PauliFrame::zero();
            frame.apply(7, preparation_fault(basis));
            assert!(ideal_outcome(&frame, basis, 7));
        }
    }

    #[test]
    fn test_two_qubit_paulis_distinct() {
        let all: HashSet<(Pauli, Pauli)> = (1..=15).map(two_qubit_pauli).collect();
        assert_eq!(all.len(), 15);
        assert!(!all.contains(&(Pauli::I, Pauli::I)));
    }

    #[test]
    fn test_stats_locations() {
        let stats = BackendStats {
            preparations: 2,
            cnots: 6,
            measurements: 2,
            faults: 1,
        };
        assert_eq!(stats.locations(), 10);
    }
}
