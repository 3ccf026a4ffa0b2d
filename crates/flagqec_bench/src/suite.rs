//! Sweep suite and statistics
//!
//! Gantree: L8_Benchmark → SweepSuite
//!
//! Runs sweeps of physical error rates through a [`TrialDriver`], keeps the
//! results, and summarises them: totals, the pseudo-threshold where the
//! logical rate catches up with gamma, and the log-log slope of the curve.

use crate::config::TrialConfig;
use crate::driver::{TrialDriver, TrialResult};
use flagqec_core::QecResult;
use serde::{Deserialize, Serialize};

/// Sweep suite
/// Gantree: SweepSuite // 스윕 스위트
pub struct SweepSuite {
    driver: TrialDriver,
    results: Vec<TrialResult>,
}

impl SweepSuite {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create suite over `config`
    pub fn new(config: TrialConfig) -> QecResult<Self> {
        Ok(Self {
            driver: TrialDriver::new(config)?,
            results: Vec::new(),
        })
    }

    /// Create with the quick preset and a seed
    pub fn with_seed(seed: u64) -> QecResult<Self> {
        Self::new(TrialConfig::quick().with_seed(seed))
    }

    // ========================================================================
    // Sweeps
    // ========================================================================

    /// Run the configured sweep
    pub fn run(&mut self) -> QecResult<Vec<TrialResult>> {
        let results = self.driver.run_sweep()?;
        self.results.extend(results.iter().cloned());
        Ok(results)
    }

    /// Run `gammas` with a fixed trial count, outside the configured sweep
    pub fn run_gammas(&mut self, gammas: &[f64], trials: u64) -> QecResult<Vec<TrialResult>> {
        let mut results = Vec::with_capacity(gammas.len());
        for &gamma in gammas {
            results.push(self.driver.simulate_error_correction(gamma, trials)?);
        }
        self.results.extend(results.iter().cloned());
        Ok(results)
    }

    // ========================================================================
    // Results
    // ========================================================================

    /// Get all results
    pub fn results(&self) -> &[TrialResult] {
        &self.results
    }

    /// Clear results
    pub fn clear(&mut self) {
        self.results.clear();
    }

    /// Get statistics
    pub fn statistics(&self) -> SweepStatistics {
        SweepStatistics::from_results(&self.results)
    }
}

/// Sweep statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepStatistics {
    /// Number of points
    pub count: usize,

    /// Trials over all points
    pub total_trials: u64,

    /// Failures over all points
    pub total_failures: u64,

    /// Total execution time (ms)
    pub total_time_ms: u64,

    /// Gamma at which the logical rate reaches gamma, if bracketed
    pub pseudo_threshold: Option<f64>,

    /// Least-squares slope of log(rate) against log(gamma)
    pub slope: Option<f64>,
}

impl SweepStatistics {
    /// Compute statistics from results
    pub fn from_results(results: &[TrialResult]) -> Self {
        let mut sorted: Vec<&TrialResult> = results.iter().collect();
        sorted.sort_by(|a, b| a.gamma.total_cmp(&b.gamma));

        Self {
            count: results.len(),
            total_trials: results.iter().map(|r| r.trials).sum(),
            total_failures: results.iter().map(|r| r.failures).sum(),
            total_time_ms: results.iter().map(|r| r.time_ms).sum(),
            pseudo_threshold: pseudo_threshold(&sorted),
            slope: log_log_slope(&sorted),
        }
    }
}

/// First crossing of `rate = gamma`, interpolated in log-log space between
/// the last point below and the first point at or above the diagonal.
fn pseudo_threshold(sorted: &[&TrialResult]) -> Option<f64> {
    let above = sorted
        .iter()
        .position(|r| r.logical_error_rate >= r.gamma)?;
    if above == 0 {
        return None;
    }
    let (lo, hi) = (sorted[above - 1], sorted[above]);
    if lo.logical_error_rate <= 0.0 {
        return Some(hi.gamma);
    }

    let gap = |r: &TrialResult| r.logical_error_rate.ln() - r.gamma.ln();
    let (d_lo, d_hi) = (gap(lo), gap(hi));
    let t = -d_lo / (d_hi - d_lo);
    Some((lo.gamma.ln() + t * (hi.gamma.ln() - lo.gamma.ln())).exp())
}

/// Least-squares slope over points with at least one failure
fn log_log_slope(sorted: &[&TrialResult]) -> Option<f64> {
    let points: Vec<(f64, f64)> = sorted
        .iter()
        .filter(|r| r.failures > 0)
        .map(|r| (r.gamma.ln(), r.logical_error_rate.ln()))
        .collect();
    if points.len() < 2 {
        return None;
    }

    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.1).sum::<f64>() / n;
    let sxx: f64 = points.iter().map(|p| (p.0 - mean_x).powi(2)).sum();
    if sxx == 0.0 {
        return None;
    }
    let sxy: f64 = points
        .iter()
        .map(|p| (p.0 - mean_x) * (p.1 - mean_y))
        .sum();
    Some(sxy / sxx)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn point(gamma: f64, rate: f64) -> TrialResult {
        let trials = 1_000_000;
        TrialResult {
            gamma,
            trials,
            failures: (rate * trials as f64).round() as u64,
            logical_error_rate: rate,
            flag_events: 0,
            syndrome_events: 0,
            time_ms: 10,
        }
    }

    #[test]
    fn test_quadratic_curve() {
        // rate = 100 γ² crosses γ at 0.01
        let results: Vec<TrialResult> = [0.001, 0.003, 0.03, 0.1]
            .iter()
            .map(|&g| point(g, 100.0 * g * g))
            .collect();
        let stats = SweepStatistics::from_results(&results);

        assert_eq!(stats.count, 4);
        assert_eq!(stats.total_trials, 4_000_000);
        assert_eq!(stats.total_time_ms, 40);
        assert_relative_eq!(stats.slope.unwrap(), 2.0, epsilon = 1e-3);
        assert_relative_eq!(stats.pseudo_threshold.unwrap(), 0.01, max_relative = 1e-3);
    }

    #[test]
    fn test_unsorted_input() {
        let results = vec![point(0.1, 1.0), point(0.001, 1e-4)];
        let stats = SweepStatistics::from_results(&results);
        assert!(stats.pseudo_threshold.is_some());
    }

    #[test]
    fn test_threshold_not_bracketed() {
        let below = vec![point(0.001, 1e-4), point(0.002, 4e-4)];
        assert_eq!(SweepStatistics::from_results(&below).pseudo_threshold, None);

        let above = vec![point(0.1, 0.2), point(0.2, 0.5)];
        assert_eq!(SweepStatistics::from_results(&above).pseudo_threshold, None);
    }

    #[test]
    fn test_zero_failure_points() {
        let results = vec![point(0.0001, 0.0), point(0.01, 0.02)];
        let stats = SweepStatistics::from_results(&results);
        assert_eq!(stats.slope, None);
        assert_eq!(stats.pseudo_threshold, Some(0.01));
    }

    #[test]
    fn test_empty() {
        let stats = SweepStatistics::from_results(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.slope, None);
        assert_eq!(stats.pseudo_threshold, None);
    }

    #[test]
    fn test_suite_collects_results() {
        let mut suite = SweepSuite::new(
            TrialConfig::quick()
                .with_gammas(&[0.01, 0.03], 300)
                .with_seed(1),
        )
        .unwrap();
        suite.run().unwrap();
        suite.run_gammas(&[0.05], 300).unwrap();

        assert_eq!(suite.results().len(), 3);
        assert_eq!(suite.statistics().total_trials, 900);

        suite.clear();
        assert!(suite.results().is_empty());
    }
}
