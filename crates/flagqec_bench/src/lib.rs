//! # FLAGQEC Bench
//!
//! Monte Carlo logical error rates for the flagged Steane decoder,
//! exhaustive single-fault verification, and sweep reporting.
//!
//! ## Gantree Architecture
//!
//! ```text
//! flagqec_bench // L8: Benchmark (완료)
//!     TrialConfig // 스윕 설정 (완료)
//!     TrialDriver // 몬테카를로 시행 (완료)
//!     SweepSuite // 스윕 + 통계 (완료)
//!     Verification // 단일 결함 검증 (완료)
//!     Reporter // 결과 리포팅 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use flagqec_bench::prelude::*;
//!
//! let config = TrialConfig::quick()
//!     .with_gammas(&[0.01, 0.03], 500)
//!     .with_seed(42);
//!
//! let mut suite = SweepSuite::new(config).unwrap();
//! let results = suite.run().unwrap();
//! assert_eq!(results.len(), 2);
//!
//! let report = Reporter::to_markdown(&results);
//! println!("{}", report);
//! ```
//!
//! ## Single-Fault Verification
//!
//! ```rust
//! use flagqec_bench::prelude::*;
//!
//! let report = verify_single_faults();
//! assert!(report.is_fault_tolerant());
//! println!("{}", Reporter::verification_report(&report));
//! ```

#![warn(missing_docs)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Sweep configuration (Gantree: L8_Benchmark → TrialConfig)
pub mod config;

/// Monte Carlo driver (Gantree: L8_Benchmark → TrialDriver)
pub mod driver;

/// Sweep suite (Gantree: L8_Benchmark → SweepSuite)
pub mod suite;

/// Single-fault verification (Gantree: L8_Benchmark → Verification)
pub mod verification;

/// Reporting (Gantree: L8_Benchmark → Reporter)
pub mod reporter;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{SweepPoint, TrialConfig};
pub use driver::{TrialDriver, TrialResult};
pub use reporter::{ReportFormat, Reporter};
pub use suite::{SweepStatistics, SweepSuite};
pub use verification::{inject, verify_single_faults, FaultOutcome, VerificationReport};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! ```rust
    //! use flagqec_bench::prelude::*;
    //! ```

    pub use crate::config::{SweepPoint, TrialConfig};
    pub use crate::driver::{TrialDriver, TrialResult};
    pub use crate::reporter::{ReportFormat, Reporter};
    pub use crate::suite::{SweepStatistics, SweepSuite};
    pub use crate::verification::{verify_single_faults, VerificationReport};
}

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_full_workflow() {
        // Configure
        let config = TrialConfig::quick()
            .with_gammas(&[0.001, 0.03], 2000)
            .with_seed(42);
        assert!(config.validate().is_ok());

        // Run
        let mut suite = SweepSuite::new(config).unwrap();
        let results = suite.run().unwrap();
        assert_eq!(results.len(), 2);
        assert!(results[0].logical_error_rate < results[1].logical_error_rate);
        assert!(!results[1].is_below_physical());

        // Summarise
        let stats = suite.statistics();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.total_trials, 4000);

        // Report
        let md = Reporter::report(&results, ReportFormat::Markdown);
        assert!(md.contains("# FLAGQEC"));
        let csv = Reporter::report(&results, ReportFormat::Csv);
        assert_eq!(csv.lines().count(), 3);
    }

    #[test]
    fn test_config_through_json() {
        let config = TrialConfig::single(0.02, 500).with_seed(8);
        let restored = TrialConfig::from_json(&config.to_json().unwrap()).unwrap();

        let a = TrialDriver::new(config).unwrap().run_sweep().unwrap();
        let b = TrialDriver::new(restored).unwrap().run_sweep().unwrap();
        assert_eq!(a[0].failures, b[0].failures);
    }

    #[test]
    fn test_verification_workflow() {
        let report = verify_single_faults();
        assert!(report.is_fault_tolerant());

        let md = Reporter::verification_report(&report);
        assert!(md.contains("| Locations | 60 |"));
        assert!(md.contains("**Fault tolerant**: yes"));
    }

    #[test]
    fn test_logical_rate_is_superlinear() {
        // Roughly quadratic, flattened a little by saturation
        let config = TrialConfig::quick()
            .with_gammas(&[0.01, 0.02], 20_000)
            .with_seed(42);
        let mut suite = SweepSuite::new(config).unwrap();
        suite.run().unwrap();

        let slope = suite.statistics().slope.unwrap();
        assert!(slope > 1.4 && slope < 2.6, "slope {}", slope);
    }

    #[test]
    fn test_high_gamma_crosses_diagonal() {
        let mut suite = SweepSuite::with_seed(42).unwrap();
        suite.run_gammas(&[0.001, 0.1], 20_000).unwrap();

        let stats = suite.statistics();
        let threshold = stats.pseudo_threshold.unwrap();
        assert!(threshold > 0.001 && threshold < 0.1);
    }
}
