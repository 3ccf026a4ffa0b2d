//! Weight-1 correction lookup
//!
//! Gantree: L5_Decoder → Lookup
//!
//! The three bits of each syndrome half spell `q + 1` for a single error on
//! data qubit `q` (Hamming(7,4) structure). X-type bits locate Z errors and
//! Z-type bits locate X errors.

use crate::stabilizer::Syndrome;
use flagqec_core::{steane, PauliFrame, QubitId};

/// Data qubit named by a 3-bit syndrome index; `None` for index 0 and for
/// anything past the last data qubit
#[inline]
pub fn locate(index: u8) -> Option<QubitId> {
    match index as QubitId {
        i @ 1..=steane::NUM_DATA_QUBITS => Some(i - 1),
        _ => None,
    }
}

/// Apply the weight-1 correction implied by `syndrome` to `frame`
/// Gantree: correct_errors_using_syndromes(frame, syndrome) // 룩업 보정
pub fn correct_errors_using_syndromes(frame: &mut PauliFrame, syndrome: &Syndrome) {
    if let Some(q) = locate(syndrome.x_index()) {
        frame.flip_z(q);
    }
    if let Some(q) = locate(syndrome.z_index()) {
        frame.flip_x(q);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn half(index: u8) -> [u8; 3] {
        [(index >> 2) & 1, (index >> 1) & 1, index & 1]
    }

    #[test]
    fn test_zero_syndrome_flips_nothing() {
        let mut frame = PauliFrame::new(0b1010, 0b0101);
        correct_errors_using_syndromes(&mut frame, &Syndrome::zero());
        assert_eq!(frame, PauliFrame::new(0b1010, 0b0101));
    }

    #[test]
    fn test_x_half_flips_one_z_bit() {
        for index in 1..8u8 {
            let [a, b, c] = half(index);
            let mut frame = PauliFrame::zero();
            correct_errors_using_syndromes(&mut frame, &Syndrome::new([a, b, c, 0, 0, 0]));
            assert_eq!(frame, PauliFrame::new(0, 1 << (index - 1)));
        }
    }

    #[test]
    fn test_z_half_flips_one_x_bit() {
        for index in 1..8u8 {
            let [a, b, c] = half(index);
            let mut frame = PauliFrame::zero();
            correct_errors_using_syndromes(&mut frame, &Syndrome::new([0, 0, 0, a, b, c]));
            assert_eq!(frame, PauliFrame::new(1 << (index - 1), 0));
        }
    }

    #[test]
    fn test_both_halves() {
        let mut frame = PauliFrame::zero();
        correct_errors_using_syndromes(&mut frame, &Syndrome::new([1, 1, 1, 0, 0, 1]));
        assert_eq!(frame, PauliFrame::new(1 << 0, 1 << 6));
    }

    #[test]
    fn test_undoes_any_single_qubit_pauli() {
        for q in 0..7 {
            for mut frame in [
                PauliFrame::new(1 << q, 0),
                PauliFrame::new(0, 1 << q),
                PauliFrame::new(1 << q, 1 << q),
            ] {
                let syndrome = Syndrome::of(&frame);
                correct_errors_using_syndromes(&mut frame, &syndrome);
                assert!(frame.is_trivial(), "qubit {}", q);
            }
        }
    }

    #[test]
    fn test_locate() {
        assert_eq!(locate(0), None);
        assert_eq!(locate(1), Some(0));
        assert_eq!(locate(7), Some(6));
        assert_eq!(locate(8), None);
        assert_eq!(locate(13), None);
    }

    #[test]
    fn test_overfull_syndrome_stays_on_data() {
        let syndrome =
            Syndrome::new([1, 0, 1, 0, 0, 0]).combine(&Syndrome::new([1, 1, 0, 1, 1, 1]));
        let mut frame = PauliFrame::zero();
        correct_errors_using_syndromes(&mut frame, &syndrome);
        assert_eq!(frame.data(), frame);
        assert_eq!(frame, PauliFrame::new(1 << 6, 1 << 6));
    }
}
