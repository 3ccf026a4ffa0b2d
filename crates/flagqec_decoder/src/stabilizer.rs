//! Stabilizer generators and syndromes of the Steane code
//!
//! Gantree: L5_Decoder → Stabilizer
//!
//! The six generators are fixed: three X-type and three Z-type on the
//! supports {3,4,5,6}, {1,2,5,6} and {0,2,4,6}. A [`Syndrome`] holds one bit
//! per generator, X-type bits first.

use flagqec_core::{steane, Basis, PauliFrame, QecError, QecResult, QubitId};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Generators
// ============================================================================

/// One stabilizer generator: a product of `basis` Paulis on `support`
/// Gantree: StabilizerGenerator // 안정자 생성원
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StabilizerGenerator {
    /// Pauli type of the generator
    pub basis: Basis,

    /// Data qubits, ascending
    pub support: [QubitId; 4],
}

impl StabilizerGenerator {
    /// Support as a data-qubit bitmask
    #[inline]
    pub const fn mask(&self) -> u16 {
        steane::support_mask(&self.support)
    }

    /// The generator written as a Pauli frame
    pub const fn frame(&self) -> PauliFrame {
        match self.basis {
            Basis::X => PauliFrame::new(self.mask(), 0),
            Basis::Z => PauliFrame::new(0, self.mask()),
        }
    }

    /// Multiply the generator onto `frame`
    #[inline]
    pub fn apply(&self, frame: &mut PauliFrame) {
        *frame ^= self.frame();
    }

    /// Whether an error anticommutes with this generator.
    ///
    /// X-type generators see Z errors and Z-type generators see X errors.
    pub fn detects(&self, frame: &PauliFrame) -> bool {
        let component = match self.basis {
            Basis::X => frame.z,
            Basis::Z => frame.x,
        };
        (component & self.mask()).count_ones() % 2 == 1
    }
}

impl fmt::Display for StabilizerGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.support;
        write!(f, "{}{{{},{},{},{}}}", self.basis, a, b, c, d)
    }
}

/// The six generators in syndrome order: X{3456}, X{1256}, X{0246},
/// Z{3456}, Z{1256}, Z{0246}
pub const GENERATORS: [StabilizerGenerator; steane::NUM_GENERATORS] = [
    StabilizerGenerator {
        basis: Basis::X,
        support: steane::GENERATOR_SUPPORTS[0],
    },
    StabilizerGenerator {
        basis: Basis::X,
        support: steane::GENERATOR_SUPPORTS[1],
    },
    StabilizerGenerator {
        basis: Basis::X,
        support: steane::GENERATOR_SUPPORTS[2],
    },
    StabilizerGenerator {
        basis: Basis::Z,
        support: steane::GENERATOR_SUPPORTS[0],
    },
    StabilizerGenerator {
        basis: Basis::Z,
        support: steane::GENERATOR_SUPPORTS[1],
    },
    StabilizerGenerator {
        basis: Basis::Z,
        support: steane::GENERATOR_SUPPORTS[2],
    },
];

// ============================================================================
// Syndrome
// ============================================================================

/// Ordered syndrome bits, X-type half then Z-type half
/// Gantree: Syndrome // 신드롬
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Syndrome([u8; steane::SYNDROME_LEN]);

impl Syndrome {
    /// Offset of the Z-type half
    pub const Z_OFFSET: usize = 3;

    // ========================================================================
    // Constructors
    // ========================================================================

    /// Build from raw bits without validation
    pub const fn new(bits: [u8; steane::SYNDROME_LEN]) -> Self {
        Self(bits)
    }

    /// All-zero syndrome
    pub const fn zero() -> Self {
        Self([0; steane::SYNDROME_LEN])
    }

    /// Build from raw bits, rejecting anything but 0 and 1
    pub fn checked(bits: [u8; steane::SYNDROME_LEN]) -> QecResult<Self> {
        if let Some((position, &value)) = bits.iter().enumerate().find(|(_, &b)| b > 1) {
            return Err(QecError::InvalidSyndromeBit { position, value });
        }
        Ok(Self(bits))
    }

    /// Syndrome an ideal readout would report for `frame`
    pub fn of(frame: &PauliFrame) -> Self {
        let mut syndrome = Self::zero();
        for (i, generator) in GENERATORS.iter().enumerate() {
            syndrome.set(i, generator.detects(frame));
        }
        syndrome
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Raw bits
    pub fn bits(&self) -> &[u8; steane::SYNDROME_LEN] {
        &self.0
    }

    /// Bit at `position`
    #[inline]
    pub fn get(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Write bit at `position`
    #[inline]
    pub fn set(&mut self, position: usize, value: bool) {
        self.0[position] = u8::from(value);
    }

    /// `4·s0 + 2·s1 + s2`; 0 means no Z error located
    pub fn x_index(&self) -> u8 {
        Self::index(&self.0[..Self::Z_OFFSET])
    }

    /// `4·s3 + 2·s4 + s5`; 0 means no X error located
    pub fn z_index(&self) -> u8 {
        Self::index(&self.0[Self::Z_OFFSET..])
    }

    fn index(half: &[u8]) -> u8 {
        half.iter().fold(0, |acc, &bit| (acc << 1) | (bit & 1))
    }

    /// Index of the half belonging to generators of `basis`
    pub fn half_index(&self, basis: Basis) -> u8 {
        match basis {
            Basis::X => self.x_index(),
            Basis::Z => self.z_index(),
        }
    }

    /// Position-wise union of two readouts; every entry stays a bit.
    ///
    /// Single-type readouts leave the other half zero, so combining an X
    /// readout with a Z readout is concatenation.
    pub fn combine(&self, other: &Syndrome) -> Syndrome {
        let mut bits = self.0;
        for (bit, &o) in bits.iter_mut().zip(other.0.iter()) {
            *bit = (*bit | o) & 1;
        }
        Syndrome(bits)
    }

    /// No generator violated
    pub fn is_trivial(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }
}

impl fmt::Display for Syndrome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, bit) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", bit)?;
        }
        write!(f, "]")
    }
}

// ============================================================================
// Tests
// ============================================================================
