//! # FLAGQEC Noise
//!
//! Channel parameters for the noisy preparation, CNOT and measurement
//! primitives.
//!
//! ## Gantree Architecture
//!
//! ```text
//! flagqec_noise // L2: Noise Model (완료)
//!     ChannelParameters // 채널 파라미터 (완료)
//!         prep_error, gate_error, meas_error
//!         new(), ideal(), from_gamma()
//!         validate(), fault_free_probability()
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use flagqec_noise::prelude::*;
//!
//! // Trial noise at physical error rate 1e-3
//! let params = ChannelParameters::from_gamma(1e-3).unwrap();
//! assert_eq!(params.gate_error(), 1e-3);
//!
//! // Perfect re-decode pass
//! assert!(ChannelParameters::ideal().is_ideal());
//! ```

#![warn(missing_docs)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Channel parameters (Gantree: L2_Noise → ChannelParameters)
pub mod channel;

// ============================================================================
// Re-exports
// ============================================================================

pub use channel::ChannelParameters;

// ============================================================================
// Prelude
// ============================================================================

/// Convenient imports for common use cases
pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! ```rust
    //! use flagqec_noise::prelude::*;
    //! ```

    pub use crate::channel::ChannelParameters;
}

// ============================================================================
// Integration Tests
// ============================================================================
