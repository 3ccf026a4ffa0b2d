//! Core types for FLAGQEC
//!
//! Gantree: L0_Foundation → CoreTypes
//!
//! Provides the Pauli-frame error record and the small value types shared by
//! the backend, decoder and benchmark crates.

use crate::constants::steane;
use crate::error::{QecError, QecResult};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// Qubit identifier (0-indexed, data qubits 0..=6, ancillas 7 and 8)
/// Gantree: QubitId // pub type QubitId = usize
pub type QubitId = usize;

// ============================================================================
// Basis
// ============================================================================

/// Pauli basis of a preparation or measurement.
///
/// Also names the type of a stabilizer generator: an X-type check prepares
/// and measures its ancilla in the X basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Basis {
    /// Conjugate basis (|+>, |->)
    X,
    /// Computational basis (|0>, |1>)
    Z,
}

impl Basis {
    /// The other basis
    #[inline]
    pub fn dual(self) -> Self {
        match self {
            Basis::X => Basis::Z,
            Basis::Z => Basis::X,
        }
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Basis::X => write!(f, "X"),
            Basis::Z => write!(f, "Z"),
        }
    }
}

// ============================================================================
// Pauli
// ============================================================================

/// Single-qubit Pauli operator, up to phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pauli {
    /// Identity
    I,
    /// Bit flip
    X,
    /// Bit and phase flip
    Y,
    /// Phase flip
    Z,
}

impl Pauli {
    /// All four Paulis, identity first
    pub const ALL: [Pauli; 4] = [Pauli::I, Pauli::X, Pauli::Y, Pauli::Z];

    /// Build from (x, z) components
    #[inline]
    pub fn from_components(x: bool, z: bool) -> Self {
        match (x, z) {
            (false, false) => Pauli::I,
            (true, false) => Pauli::X,
            (true, true) => Pauli::Y,
            (false, true) => Pauli::Z,
        }
    }

    /// Has an X component (X or Y)
    #[inline]
    pub fn has_x(self) -> bool {
        matches!(self, Pauli::X | Pauli::Y)
    }

    /// Has a Z component (Z or Y)
    #[inline]
    pub fn has_z(self) -> bool {
        matches!(self, Pauli::Z | Pauli::Y)
    }

    /// True for the identity
    #[inline]
    pub fn is_identity(self) -> bool {
        self == Pauli::I
    }
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Pauli::I => 'I',
            Pauli::X => 'X',
            Pauli::Y => 'Y',
            Pauli::Z => 'Z',
        };
        write!(f, "{}", c)
    }
}

// ============================================================================
// PauliFrame (ErrorRecord)
// ============================================================================

/// Running Pauli-error record over the 9-qubit register.
/// Gantree: PauliFrame // 에러 기록
///
/// Bit `i` of `x` (resp. `z`) marks an X (resp. Z) error on qubit `i`. Bits 7
/// and 8 belong to the ancillas; they are scratch and are masked out by
/// [`PauliFrame::data`] before any weight or failure computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PauliFrame {
    /// X-error mask
    pub x: u16,
    /// Z-error mask
    pub z: u16,
}

impl PauliFrame {
    /// Create from raw masks
    #[inline]
    pub const fn new(x: u16, z: u16) -> Self {
        Self { x, z }
    }

    /// Error-free frame
    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0, z: 0 }
    }

    /// Frame with a single Pauli on `qubit`, validated against the register
    pub fn single(qubit: QubitId, pauli: Pauli) -> QecResult<Self> {
        Self::check_qubit(qubit)?;
        let mut frame = Self::zero();
        frame.apply(qubit, pauli);
        Ok(frame)
    }

    /// Check that a qubit lies inside the register
    pub fn check_qubit(qubit: QubitId) -> QecResult<()> {
        if qubit >= steane::REGISTER_WIDTH {
            return Err(QecError::QubitOutOfRange {
                qubit,
                max: steane::REGISTER_WIDTH - 1,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Bit Access
    // ========================================================================

    /// X error on `qubit`
    #[inline]
    pub fn has_x(&self, qubit: QubitId) -> bool {
        (self.x >> qubit) & 1 == 1
    }

    /// Z error on `qubit`
    #[inline]
    pub fn has_z(&self, qubit: QubitId) -> bool {
        (self.z >> qubit) & 1 == 1
    }

    /// Pauli acting on `qubit`
    #[inline]
    pub fn pauli(&self, qubit: QubitId) -> Pauli {
        Pauli::from_components(self.has_x(qubit), self.has_z(qubit))
    }

    /// Toggle the X error on `qubit`
    #[inline]
    pub fn flip_x(&mut self, qubit: QubitId) {
        self.x ^= 1 << qubit;
    }

    /// Toggle the Z error on `qubit`
    #[inline]
    pub fn flip_z(&mut self, qubit: QubitId) {
        self.z ^= 1 << qubit;
    }

    /// Multiply a Pauli onto `qubit`
    #[inline]
    pub fn apply(&mut self, qubit: QubitId, pauli: Pauli) {
        if pauli.has_x() {
            self.flip_x(qubit);
        }
        if pauli.has_z() {
            self.flip_z(qubit);
        }
    }

    /// Toggle the error of `basis` type on `qubit`
    #[inline]
    pub fn flip(&mut self, basis: Basis, qubit: QubitId) {
        match basis {
            Basis::X => self.flip_x(qubit),
            Basis::Z => self.flip_z(qubit),
        }
    }

    /// Clear both components on `qubit` (fresh preparation)
    #[inline]
    pub fn clear(&mut self, qubit: QubitId) {
        let keep = !(1u16 << qubit);
        self.x &= keep;
        self.z &= keep;
    }

    /// Reset the whole record to error-free
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::zero();
    }

    // ========================================================================
    // Data-Qubit View
    // ========================================================================

    /// Copy restricted to the data qubits
    #[inline]
    pub fn data(&self) -> Self {
        Self {
            x: self.x & steane::DATA_MASK,
            z: self.z & steane::DATA_MASK,
        }
    }

    /// Number of data qubits carrying any error
    #[inline]
    pub fn weight(&self) -> u32 {
        ((self.x | self.z) & steane::DATA_MASK).count_ones()
    }

    /// No error on any data qubit
    #[inline]
    pub fn is_trivial(&self) -> bool {
        self.weight() == 0
    }
}

impl std::ops::BitXor for PauliFrame {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self {
            x: self.x ^ rhs.x,
            z: self.z ^ rhs.z,
        }
    }
}

impl std::ops::BitXorAssign for PauliFrame {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.x ^= rhs.x;
        self.z ^= rhs.z;
    }
}

impl fmt::Display for PauliFrame {
    /// Data qubits as a Pauli string, qubit 0 first
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for q in 0..steane::NUM_DATA_QUBITS {
            write!(f, "{}", self.pauli(q))?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
