//! Constants for FLAGQEC
//!
//! Gantree: L0_Foundation → Constants
//!
//! Register layout and stabilizer supports of the [[7,1,3]] code, the noise
//! ratios used by the trial driver, and the default sweep.

use crate::types::QubitId;

// ============================================================================
// Steane Code Constants
// Gantree: steane // 코드 상수
// ============================================================================

pub mod steane {
    //! Register layout and stabilizer structure of the [[7,1,3]] code

    use super::QubitId;

    /// Number of data qubits
    pub const NUM_DATA_QUBITS: usize = 7;

    /// Primary ancilla: carries the syndrome bit of a check
    pub const PRIMARY_ANCILLA: QubitId = 7;

    /// Flag ancilla: detects hook faults during a flagged check
    pub const FLAG_ANCILLA: QubitId = 8;

    /// Data qubits plus both ancillas
    pub const REGISTER_WIDTH: usize = 9;

    /// Low 7 bits: the data qubits
    pub const DATA_MASK: u16 = (1 << NUM_DATA_QUBITS) - 1;

    /// Mask of the whole register
    pub const REGISTER_MASK: u16 = (1 << REGISTER_WIDTH) - 1;

    /// Number of stabilizer generators (3 X-type + 3 Z-type)
    pub const NUM_GENERATORS: usize = 6;

    /// Syndrome length, one bit per generator
    pub const SYNDROME_LEN: usize = NUM_GENERATORS;

    /// Supports of the three generators of each type, ascending.
    ///
    /// Qubit `q` lies in support `i` iff bit `2 - i` of `q + 1` is set, which
    /// is what makes the 3-bit syndrome read as `q + 1`.
    pub const GENERATOR_SUPPORTS: [[QubitId; 4]; 3] = [[3, 4, 5, 6], [1, 2, 5, 6], [0, 2, 4, 6]];

    /// Bitmask of a support
    pub const fn support_mask(support: &[QubitId; 4]) -> u16 {
        (1 << support[0]) | (1 << support[1]) | (1 << support[2]) | (1 << support[3])
    }

    /// Number of distinct stabilizer products (2^6)
    pub const STABILIZER_GROUP_ORDER: usize = 1 << NUM_GENERATORS;
}

// ============================================================================
// Noise Constants
// Gantree: noise // 노이즈 상수
// ============================================================================

pub mod noise {
    //! Ratios tying preparation and measurement noise to the gate error rate

    /// Preparation error rate as a fraction of gamma
    pub const PREP_RATIO: f64 = 4.0 / 15.0;

    /// Measurement error rate as a fraction of gamma
    pub const MEAS_RATIO: f64 = 4.0 / 15.0;

    /// Number of non-identity two-qubit Paulis
    pub const TWO_QUBIT_PAULIS: u8 = 15;
}

// ============================================================================
// Sweep Constants
// Gantree: sweep // 스윕 상수
// ============================================================================

pub mod sweep {
    //! Default logical-vs-physical error rate sweep

    /// Number of sweep points: gamma = 10^(i/10 - 4), i = 0..=20
    pub const DEFAULT_POINTS: usize = 21;

    /// Trials for gamma below 10^-3
    pub const TRIALS_LOW_GAMMA: u64 = 10_000_000;

    /// Trials for gamma at or above 10^-3
    pub const TRIALS_HIGH_GAMMA: u64 = 1_000_000;

    /// Index of the first sweep point that uses `TRIALS_HIGH_GAMMA`
    pub const HIGH_GAMMA_START: usize = 10;

    /// Default seed
    pub const DEFAULT_SEED: u64 = 42;

    /// Sweep point `i`: 10^(i/10 - 4)
    #[inline]
    pub fn gamma_at(i: usize) -> f64 {
        10f64.powf(i as f64 / 10.0 - 4.0)
    }

    /// Trials recommended for sweep point `i`
    #[inline]
    pub fn trials_at(i: usize) -> u64 {
        if i < HIGH_GAMMA_START {
            TRIALS_LOW_GAMMA
        } else {
            TRIALS_HIGH_GAMMA
        }
    }

    /// The full default sweep
    pub fn default_gammas() -> Vec<f64> {
        (0..DEFAULT_POINTS).map(gamma_at).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_register_layout() {
        assert_eq!(steane::DATA_MASK, 0x7f);
        assert_eq!(steane::REGISTER_MASK, 0x1ff);
        assert!(steane::PRIMARY_ANCILLA < steane::REGISTER_WIDTH);
        assert!(steane::FLAG_ANCILLA < steane::REGISTER_WIDTH);
    }

    #[test]
    fn test_supports_locate_qubits() {
        // Syndrome bits of qubit q spell out q + 1 in binary
        for q in 0..steane::NUM_DATA_QUBITS {
            let mut index = 0;
            for (i, support) in steane::GENERATOR_SUPPORTS.iter().enumerate() {
                if support.contains(&q) {
                    index |= 1 << (2 - i);
                }
            }
            assert_eq!(index, q + 1);
        }
    }

    #[test]
    fn test_support_mask() {
        let mask = steane::support_mask(&steane::GENERATOR_SUPPORTS[0]);
        assert_eq!(mask, 0b111_1000);
        let mask = steane::support_mask(&steane::GENERATOR_SUPPORTS[2]);
        assert_eq!(mask, 0b101_0101);
    }

    #[test]
    fn test_default_sweep() {
        let gammas = sweep::default_gammas();
        assert_eq!(gammas.len(), 21);
        assert_relative_eq!(gammas[0], 1e-4, max_relative = 1e-12);
        assert_relative_eq!(gammas[20], 1e-2, max_relative = 1e-12);
        assert_eq!(sweep::trials_at(0), sweep::TRIALS_LOW_GAMMA);
        assert_eq!(sweep::trials_at(10), sweep::TRIALS_HIGH_GAMMA);
    }

    #[test]
    fn test_noise_ratios() {
        assert_relative_eq!(noise::PREP_RATIO, 4.0 / 15.0);
        assert_eq!(noise::TWO_QUBIT_PAULIS, 15);
    }
}
