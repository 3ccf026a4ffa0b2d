//! Minimum-weight reduction modulo the stabilizer group
//!
//! Gantree: L5_Decoder → Reducer
//!
//! Two errors differing by a stabilizer act identically on the code space,
//! so the logical content of a residual is its lightest representative.
//! The group has only 64 elements; search it exhaustively.

use crate::stabilizer::GENERATORS;
use flagqec_core::{steane, PauliFrame};

/// Data qubits carrying any error
#[inline]
pub fn weight(frame: &PauliFrame) -> u32 {
    frame.weight()
}

/// Product of the generators selected by the bits of `k`
pub fn stabilizer_element(k: usize) -> PauliFrame {
    GENERATORS
        .iter()
        .enumerate()
        .filter(|(i, _)| (k >> i) & 1 == 1)
        .fold(PauliFrame::zero(), |acc, (_, g)| acc ^ g.frame())
}

/// Lowest-weight representative of `frame`'s stabilizer coset.
///
/// Subsets are tried in ascending order and only a strictly lighter
/// candidate replaces the current best, so ties go to the lowest subset.
/// Ancilla bits pass through unchanged.
/// Gantree: reduce_error(frame) -> PauliFrame // 최소 가중치 대표
pub fn reduce_error(frame: &PauliFrame) -> PauliFrame {
    let mut best = *frame;
    let mut best_weight = weight(&best);
    for k in 1..steane::STABILIZER_GROUP_ORDER {
        if best_weight == 0 {
            break;
        }
        let candidate = *frame ^ stabilizer_element(k);
        let w = weight(&candidate);
        if w < best_weight {
            best = candidate;
            best_weight = w;
        }
    }
    best
}

/// Whether `frame` is a logical error: non-trivial on the data even after
/// reduction
pub fn is_logical_error(frame: &PauliFrame) -> bool {
    !reduce_error(frame).is_trivial()
}
