//! # FLAGQEC Core
//!
//! Pauli frames, code constants and error types for flag-qubit decoding of
//! the [[7,1,3]] Steane code.
//!
//! ## Gantree Architecture
//!
//! ```text
//! flagqec_core // L0: Foundation (완료)
//!     CoreTypes // 핵심 타입 (완료)
//!         PauliFrame, Pauli, Basis
//!     Constants // 코드/노이즈/스윕 상수 (완료)
//!     Errors // 에러 타입 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use flagqec_core::prelude::*;
//!
//! // X error on data qubit 3, plus junk on the primary ancilla
//! let mut frame = PauliFrame::single(3, Pauli::X).unwrap();
//! frame.flip_z(steane::PRIMARY_ANCILLA);
//!
//! // Ancilla bits never count
//! assert_eq!(frame.weight(), 1);
//! assert_eq!(frame.to_string(), "IIIXIII");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Core types (Gantree: L0_Foundation → CoreTypes)
pub mod types;

/// Constants (Gantree: L0_Foundation → Constants)
pub mod constants;

/// Error types (Gantree: L0_Foundation → Errors)
pub mod error;

// ============================================================================
// Re-exports
// ============================================================================

pub use constants::{noise, steane, sweep};
pub use error::{QecError, QecResult};
pub use types::{Basis, Pauli, PauliFrame, QubitId};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use flagqec_core::prelude::*;
    //! ```

    pub use crate::constants::{noise, steane, sweep};
    pub use crate::error::{QecError, QecResult};
    pub use crate::types::{Basis, Pauli, PauliFrame, QubitId};
}

// ============================================================================
// Version Information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Integration Tests
// ============================================================================
