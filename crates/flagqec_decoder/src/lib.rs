//! # FLAGQEC Decoder
//!
//! Fault-tolerant decoding of the [[7,1,3]] Steane code with two ancilla
//! qubits: a six-check flagged extraction state machine and a
//! minimum-weight reducer that classifies residual errors.
//!
//! ## Gantree Architecture
//!
//! ```text
//! flagqec_decoder // L5: Decoder (완료)
//!     Stabilizer // 생성원 + 신드롬 (완료)
//!     SyndromeReadout // 단일 앤실라 판독 (완료)
//!     Lookup // 가중치 1 보정 (완료)
//!     FlaggedExtraction // 6단계 상태 기계 (완료)
//!     Reducer // 최소 가중치 대표 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use flagqec_decoder::prelude::*;
//! use flagqec_backend::IdealBackend;
//! use flagqec_core::PauliFrame;
//! use flagqec_noise::ChannelParameters;
//!
//! let mut backend = IdealBackend::new();
//! let mut frame = PauliFrame::new(1 << 3, 0);
//!
//! let outcome = correct_errors(&mut backend, &mut frame, &ChannelParameters::ideal());
//! assert_eq!(outcome, DecodeOutcome::Syndrome { branch: 3 });
//! assert!(!is_logical_error(&frame));
//! ```

#![warn(missing_docs)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Generators and syndromes (Gantree: L5_Decoder → Stabilizer)
pub mod stabilizer;

/// Unflagged readout (Gantree: L5_Decoder → SyndromeReadout)
pub mod readout;

/// Weight-1 lookup (Gantree: L5_Decoder → Lookup)
pub mod lookup;

/// Flagged state machine (Gantree: L5_Decoder → FlaggedExtraction)
pub mod flagged;

/// Minimum-weight reduction (Gantree: L5_Decoder → Reducer)
pub mod reduce;

// ============================================================================
// Re-exports
// ============================================================================

pub use flagged::{correct_errors, DecodeOutcome, FlagCheck, HookCorrection, FLAG_CHECKS};
pub use lookup::correct_errors_using_syndromes;
pub use readout::{extract_syndromes, extract_x_syndromes, extract_z_syndromes};
pub use reduce::{is_logical_error, reduce_error, weight};
pub use stabilizer::{StabilizerGenerator, Syndrome, GENERATORS};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! ```rust
    //! use flagqec_decoder::prelude::*;
    //! ```

    pub use crate::flagged::{correct_errors, DecodeOutcome, FLAG_CHECKS};
    pub use crate::lookup::correct_errors_using_syndromes;
    pub use crate::readout::{extract_syndromes, extract_x_syndromes, extract_z_syndromes};
    pub use crate::reduce::{is_logical_error, reduce_error, weight};
    pub use crate::stabilizer::{StabilizerGenerator, Syndrome, GENERATORS};
}

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use flagqec_backend::{Backend, IdealBackend, SimulatorBackend};
    use flagqec_core::{steane, Pauli, PauliFrame};
    use flagqec_noise::ChannelParameters;

    fn decode_ideally(frame: &mut PauliFrame) -> DecodeOutcome {
        let mut backend = IdealBackend::new();
        correct_errors(&mut backend, frame, &ChannelParameters::ideal())
    }

    #[test]
    fn test_noiseless_zero_record() {
        let mut frame = PauliFrame::zero();
        assert!(decode_ideally(&mut frame).is_clean());
        assert_eq!(weight(&reduce_error(&frame)), 0);
    }

    #[test]
    fn test_x_error_on_qubit_three() {
        let mut frame = PauliFrame::new(1 << 3, 0);
        let outcome = decode_ideally(&mut frame);
        assert_eq!(outcome, DecodeOutcome::Syndrome { branch: 3 });
        assert_eq!(frame.z & steane::DATA_MASK, 0);
        assert_eq!(weight(&reduce_error(&frame)), 0);
    }

    #[test]
    fn test_every_single_qubit_pauli_corrected() {
        for q in 0..steane::NUM_DATA_QUBITS {
            for pauli in [Pauli::X, Pauli::Y, Pauli::Z] {
                let mut frame = PauliFrame::single(q, pauli).unwrap();
                let outcome = decode_ideally(&mut frame);
                assert!(!outcome.is_clean());
                assert!(!outcome.is_flagged());
                assert!(frame.is_trivial(), "{} on qubit {} left {}", pauli, q, frame);
            }
        }
    }

    #[test]
    fn test_stabilizer_errors_pass_clean() {
        for g in GENERATORS.iter() {
            let mut frame = g.frame();
            assert!(decode_ideally(&mut frame).is_clean());
            assert_eq!(frame, g.frame());
            assert!(!is_logical_error(&frame));
        }
    }

    #[test]
    fn test_weight_two_errors_can_be_logical() {
        // Distance 3: some weight-2 errors are miscorrected into a logical
        let mut frame = PauliFrame::new(0b000_0011, 0);
        decode_ideally(&mut frame);
        assert!(is_logical_error(&frame));
    }

    #[test]
    fn test_second_ideal_pass_is_clean_after_correction() {
        let mut frame = PauliFrame::single(5, Pauli::Y).unwrap();
        decode_ideally(&mut frame);
        let mut copy = frame;
        assert!(decode_ideally(&mut copy).is_clean());
    }

    #[test]
    fn test_trait_object_backend() {
        let mut backend: Box<dyn Backend> = Box::new(SimulatorBackend::new().with_seed(42));
        let mut frame = PauliFrame::new(0, 1 << 2);
        correct_errors(backend.as_mut(), &mut frame, &ChannelParameters::ideal());
        assert!(frame.is_trivial());
        assert_eq!(backend.stats().faults, 0);
    }

    #[test]
    fn test_ideal_pass_returns_to_code_space() {
        let params = ChannelParameters::from_gamma(0.05).unwrap();
        let mut backend = SimulatorBackend::new().with_seed(9);
        let mut frame = PauliFrame::zero();
        for _ in 0..500 {
            correct_errors(&mut backend, &mut frame, &params);
            let mut copy = frame;
            decode_ideally(&mut copy);
            assert!(Syndrome::of(&copy).is_trivial(), "left {}", copy);
        }
        assert!(backend.stats().faults > 0);
    }
}
