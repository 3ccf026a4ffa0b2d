//! Flagged syndrome extraction state machine
//!
//! Gantree: L5_Decoder → FlaggedExtraction
//!
//! Six checks, one per generator, each measured with a primary ancilla (7)
//! and a flag ancilla (8). The flag couples to the primary ancilla after
//! the first and after the third data CNOT, which is exactly where a single
//! ancilla fault would otherwise leave an undetectable weight-2 data error.
//!
//! ```text
//! X-type check, support [a, b, c, d]      Z-type check
//!   prepX(7) prepZ(8)                       prepZ(7) prepX(8)
//!   cnot(7,a) cnot(7,8) cnot(7,b)           cnot(a,7) cnot(8,7) cnot(b,7)
//!   cnot(7,c) cnot(7,8) cnot(7,d)           cnot(c,7) cnot(8,7) cnot(d,7)
//!   measX(7) measZ(8)                       measZ(7) measX(8)
//! ```
//!
//! Checks run in order and the machine halts on the first one that fires.
//! A flag triggers a hook-error correction on the opposite error type
//! followed by a same-type readout and lookup. A bare syndrome triggers a
//! full readout and lookup.

use crate::lookup::correct_errors_using_syndromes;
use crate::readout::{extract_syndromes, extract_syndromes_of};
use crate::stabilizer::{StabilizerGenerator, Syndrome, GENERATORS};
use flagqec_backend::Backend;
use flagqec_core::{steane, Basis, PauliFrame, QubitId};
use flagqec_noise::ChannelParameters;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Check Table
// ============================================================================

/// A known hook syndrome and the data qubits it points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookCorrection {
    /// Opposite-type readout that identifies the hook
    pub pattern: Syndrome,

    /// Data qubits to flip in the opposite-type mask
    pub flips: &'static [QubitId],
}

impl HookCorrection {
    /// Flip `flips` in the mask of `error` type
    pub fn apply(&self, error: Basis, frame: &mut PauliFrame) {
        for &q in self.flips {
            frame.flip(error, q);
        }
    }
}

/// One flagged check: the generator it measures and its hook table
/// Gantree: FlagCheck // 플래그 검사
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagCheck {
    /// Generator measured by the primary ancilla
    pub generator: StabilizerGenerator,

    /// Hook patterns, tried in order
    pub hooks: [HookCorrection; 3],
}

const fn hook(pattern: [u8; steane::SYNDROME_LEN], flips: &'static [QubitId]) -> HookCorrection {
    HookCorrection {
        pattern: Syndrome::new(pattern),
        flips,
    }
}

/// The six flagged checks in execution order
pub const FLAG_CHECKS: [FlagCheck; steane::NUM_GENERATORS] = [
    FlagCheck {
        generator: GENERATORS[0],
        hooks: [
            hook([0, 0, 0, 1, 1, 1], &[6]),
            hook([0, 0, 0, 0, 0, 1], &[6, 5]),
            hook([0, 0, 0, 1, 0, 0], &[3]),
        ],
    },
    FlagCheck {
        generator: GENERATORS[1],
        hooks: [
            hook([0, 0, 0, 1, 1, 1], &[6]),
            hook([0, 0, 0, 0, 0, 1], &[6, 5]),
            hook([0, 0, 0, 0, 1, 0], &[1]),
        ],
    },
    FlagCheck {
        generator: GENERATORS[2],
        hooks: [
            hook([0, 0, 0, 1, 1, 1], &[6]),
            hook([0, 0, 0, 0, 1, 0], &[6, 4]),
            hook([0, 0, 0, 0, 0, 1], &[0]),
        ],
    },
    FlagCheck {
        generator: GENERATORS[3],
        hooks: [
            hook([1, 1, 1, 0, 0, 0], &[6]),
            hook([0, 0, 1, 0, 0, 0], &[6, 5]),
            hook([1, 0, 0, 0, 0, 0], &[3]),
        ],
    },
    FlagCheck {
        generator: GENERATORS[4],
        hooks: [
            hook([1, 1, 1, 0, 0, 0], &[6]),
            hook([0, 0, 1, 0, 0, 0], &[6, 5]),
            hook([0, 1, 0, 0, 0, 0], &[1]),
        ],
    },
    FlagCheck {
        generator: GENERATORS[5],
        hooks: [
            hook([1, 1, 1, 0, 0, 0], &[6]),
            hook([0, 1, 0, 0, 0, 0], &[6, 4]),
            hook([0, 0, 1, 0, 0, 0], &[0]),
        ],
    },
];

impl FlagCheck {
    /// Error type a flag warns about, and the mask hook corrections flip.
    ///
    /// A hook on an X-type check is an X error spread from the ancilla,
    /// which only the Z-type generators see.
    #[inline]
    pub fn hook_error(&self) -> Basis {
        self.generator.basis
    }

    /// Generator type read out to locate a hook
    #[inline]
    pub fn opposite(&self) -> Basis {
        self.generator.basis.dual()
    }

    /// Run the flagged circuit; returns `(syndrome, flag)`
    pub fn measure<B: Backend + ?Sized>(
        &self,
        backend: &mut B,
        frame: &mut PauliFrame,
        params: &ChannelParameters,
    ) -> (bool, bool) {
        let primary = steane::PRIMARY_ANCILLA;
        let flag = steane::FLAG_ANCILLA;
        let basis = self.generator.basis;
        let [a, b, c, d] = self.generator.support;

        backend.prepare(basis, primary, frame, params);
        backend.prepare(basis.dual(), flag, frame, params);

        // Data qubit or flag, coupled in schedule order
        for q in [a, flag, b, c, flag, d] {
            match basis {
                Basis::X => backend.cnot(primary, q, frame, params),
                Basis::Z => backend.cnot(q, primary, frame, params),
            }
        }

        let syndrome = backend.measure(basis, primary, frame, params);
        let flagged = backend.measure(basis.dual(), flag, frame, params);
        (syndrome, flagged)
    }

    /// Index of the first hook pattern equal to `readout`
    pub fn match_hook(&self, readout: &Syndrome) -> Option<usize> {
        self.hooks.iter().position(|h| h.pattern == *readout)
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// Which check halted a decode pass
/// Gantree: DecodeOutcome // 디코딩 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecodeOutcome {
    /// All six checks trivial and unflagged; nothing applied
    Clean,

    /// Check `branch` reported a syndrome without a flag
    Syndrome {
        /// Index of the check, 0..6
        branch: usize,
    },

    /// Check `branch` raised its flag
    Flagged {
        /// Index of the check, 0..6
        branch: usize,
        /// Matched hook pattern, if any
        hook: Option<usize>,
    },
}

impl DecodeOutcome {
    /// No check fired
    pub fn is_clean(&self) -> bool {
        matches!(self, DecodeOutcome::Clean)
    }

    /// A flag fired
    pub fn is_flagged(&self) -> bool {
        matches!(self, DecodeOutcome::Flagged { .. })
    }

    /// Check that halted the pass
    pub fn branch(&self) -> Option<usize> {
        match self {
            DecodeOutcome::Clean => None,
            DecodeOutcome::Syndrome { branch } | DecodeOutcome::Flagged { branch, .. } => {
                Some(*branch)
            }
        }
    }
}

impl fmt::Display for DecodeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeOutcome::Clean => write!(f, "clean"),
            DecodeOutcome::Syndrome { branch } => write!(f, "syndrome{}", branch),
            DecodeOutcome::Flagged {
                branch,
                hook: Some(h),
            } => write!(f, "flag{} (hook {})", branch, h),
            DecodeOutcome::Flagged { branch, hook: None } => write!(f, "flag{}", branch),
        }
    }
}

// ============================================================================
// Decode Pass
// ============================================================================

/// One fault-tolerant decode pass over `frame`
/// Gantree: correct_errors(backend, frame, params) -> DecodeOutcome // 플래그 디코딩
pub fn correct_errors<B: Backend + ?Sized>(
    backend: &mut B,
    frame: &mut PauliFrame,
    params: &ChannelParameters,
) -> DecodeOutcome {
    for (branch, check) in FLAG_CHECKS.iter().enumerate() {
        log::trace!("starting syndrome{}", branch);
        let (syndrome, flagged) = check.measure(backend, frame, params);

        if flagged {
            let opposite = extract_syndromes_of(backend, check.opposite(), frame, params);
            let hook = check.match_hook(&opposite);
            if let Some(i) = hook {
                check.hooks[i].apply(check.hook_error(), frame);
            }
            log::debug!("flag{}: readout {} hook {:?}", branch, opposite, hook);

            let matching = extract_syndromes_of(backend, check.generator.basis, frame, params);
            correct_errors_using_syndromes(frame, &matching);
            return DecodeOutcome::Flagged { branch, hook };
        }

        if syndrome {
            let full = extract_syndromes(backend, frame, params);
            log::debug!("syndrome{}: readout {}", branch, full);
            correct_errors_using_syndromes(frame, &full);
            return DecodeOutcome::Syndrome { branch };
        }
    }
    DecodeOutcome::Clean
}

// ============================================================================
// Tests
// ============================================================================
