//! # FLAGQEC Backend
//!
//! Noisy preparation, CNOT and measurement primitives acting on a Pauli
//! frame. The decoder is generic over [`Backend`], so the same circuit runs
//! under random noise, without noise, or with one hand-placed fault.
//!
//! ## Gantree Architecture
//!
//! ```text
//! flagqec_backend // L6: Backend (완료)
//!     Backend // 트레이트: prepare, cnot, measure (완료)
//!     SimulatorBackend // 랜덤 Pauli 노이즈 (완료)
//!     IdealBackend // 노이즈 없음 (완료)
//!     FaultInjector // 단일 결함 주입 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use flagqec_backend::prelude::*;
//! use flagqec_core::{Basis, PauliFrame};
//! use flagqec_noise::ChannelParameters;
//!
//! let mut backend = SimulatorBackend::new().with_seed(42);
//! let params = ChannelParameters::ideal();
//!
//! // An X error on qubit 3 is seen by a Z-basis ancilla
//! let mut frame = PauliFrame::new(1 << 3, 0);
//! backend.prepare(Basis::Z, 7, &mut frame, &params);
//! backend.cnot(3, 7, &mut frame, &params);
//! assert!(backend.measure(Basis::Z, 7, &mut frame, &params));
//! ```

#![warn(missing_docs)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Backend trait and propagation rules (Gantree: L6_Backend)
pub mod execution;

/// Random-noise simulator (Gantree: L6_Backend → SimulatorBackend)
pub mod simulator;

/// Noiseless backend (Gantree: L6_Backend → IdealBackend)
pub mod ideal;

/// Single-fault injection (Gantree: L6_Backend → FaultInjector)
pub mod fault;

// ============================================================================
// Re-exports
// ============================================================================

pub use execution::{Backend, BackendStats};
pub use fault::{Fault, FaultInjector, FaultKind, Location};
pub use ideal::IdealBackend;
pub use simulator::SimulatorBackend;

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! ```rust
    //! use flagqec_backend::prelude::*;
    //! ```

    pub use crate::execution::{Backend, BackendStats};
    pub use crate::fault::{Fault, FaultInjector, FaultKind, Location};
    pub use crate::ideal::IdealBackend;
    pub use crate::simulator::SimulatorBackend;
}

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use flagqec_core::{Basis, PauliFrame};
    use flagqec_noise::ChannelParameters;

    /// One X-type weight-4 parity check on the given support
    fn x_check<B: Backend>(backend: &mut B, frame: &mut PauliFrame, support: [usize; 4]) -> bool {
        let params = ChannelParameters::ideal();
        backend.prepare(Basis::X, 7, frame, &params);
        for q in support {
            backend.cnot(7, q, frame, &params);
        }
        backend.measure(Basis::X, 7, frame, &params)
    }

    #[test]
    fn test_backends_agree_without_noise() {
        let mut sim = SimulatorBackend::new().with_seed(42);
        let mut ideal = IdealBackend::new();
        let mut recorder = FaultInjector::recording();

        for z in 0..(1u16 << 7) {
            let start = PauliFrame::new(0, z);
            let (mut a, mut b, mut c) = (start, start, start);
            let ra = x_check(&mut sim, &mut a, [3, 4, 5, 6]);
            let rb = x_check(&mut ideal, &mut b, [3, 4, 5, 6]);
            let rc = x_check(&mut recorder, &mut c, [3, 4, 5, 6]);
            assert_eq!(ra, rb);
            assert_eq!(rb, rc);
            assert_eq!(ra, (z & 0b111_1000).count_ones() % 2 == 1);
            assert_eq!(a.data(), start);
            assert_eq!(b, c);
        }
    }

    #[test]
    fn test_ancilla_x_fault_spreads_to_data() {
        // X on the ancilla after its first CNOT reaches the remaining data qubits
        let fault = Fault {
            location: 1,
            kind: FaultKind::Gate(flagqec_core::Pauli::X, flagqec_core::Pauli::I),
        };
        let mut backend = FaultInjector::new(fault);
        let mut frame = PauliFrame::zero();
        x_check(&mut backend, &mut frame, [3, 4, 5, 6]);
        assert_eq!(frame.data(), PauliFrame::new(0b111_0000, 0));
        assert_eq!(frame.weight(), 3);
    }
}
