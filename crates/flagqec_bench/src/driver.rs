//! Monte Carlo trial driver
//!
//! Gantree: L8_Benchmark → TrialDriver
//!
//! Each trial is one noisy decode pass on a persistent record, followed by
//! a noiseless pass on a copy. If the copy still carries a logical error
//! after reduction, the trial fails and the record starts over from zero.
//! The logical error rate is failures over trials.

use crate::config::TrialConfig;
use flagqec_backend::{Backend, IdealBackend, SimulatorBackend};
use flagqec_core::{steane, PauliFrame, QecError, QecResult};
use flagqec_decoder::{correct_errors, is_logical_error, DecodeOutcome};
use flagqec_noise::ChannelParameters;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

/// Locations on the fault-free path of one decode pass
const CLEAN_PASS_PREPS: usize = 2 * steane::NUM_GENERATORS;
const CLEAN_PASS_CNOTS: usize = 6 * steane::NUM_GENERATORS;
const CLEAN_PASS_MEASUREMENTS: usize = 2 * steane::NUM_GENERATORS;

/// Outcome of one sweep point
/// Gantree: TrialResult // 시행 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialResult {
    /// Physical error rate
    pub gamma: f64,

    /// Decode passes run
    pub trials: u64,

    /// Trials ending in a logical error
    pub failures: u64,

    /// failures / trials
    pub logical_error_rate: f64,

    /// Noisy passes halted by a flag
    pub flag_events: u64,

    /// Noisy passes halted by an unflagged syndrome
    pub syndrome_events: u64,

    /// Wall time (milliseconds)
    pub time_ms: u64,
}

impl TrialResult {
    /// Binomial standard error of the logical rate
    pub fn standard_error(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        let p = self.logical_error_rate;
        (p * (1.0 - p) / self.trials as f64).sqrt()
    }

    /// Logical rate below the physical rate
    pub fn is_below_physical(&self) -> bool {
        self.logical_error_rate < self.gamma
    }

    /// Fraction of noisy passes that fired a flag
    pub fn flag_rate(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.flag_events as f64 / self.trials as f64
    }
}

impl fmt::Display for TrialResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "γ={:.3e}: {}/{} failed, logical={:.3e} ± {:.1e}",
            self.gamma,
            self.failures,
            self.trials,
            self.logical_error_rate,
            self.standard_error()
        )
    }
}

/// Monte Carlo driver over a seeded simulator
/// Gantree: TrialDriver // 몬테카를로 드라이버
pub struct TrialDriver {
    config: TrialConfig,
    backend: SimulatorBackend,
    perfect: IdealBackend,
}

impl TrialDriver {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create driver; rejects invalid configurations
    pub fn new(config: TrialConfig) -> QecResult<Self> {
        config.validate()?;
        let backend = match config.seed {
            Some(seed) => SimulatorBackend::new().with_seed(seed),
            None => SimulatorBackend::new(),
        };
        Ok(Self {
            config,
            backend,
            perfect: IdealBackend::new(),
        })
    }

    /// Configuration in use
    pub fn config(&self) -> &TrialConfig {
        &self.config
    }

    /// Noisy backend, for its counters
    pub fn backend(&self) -> &SimulatorBackend {
        &self.backend
    }

    // ========================================================================
    // Trials
    // ========================================================================

    /// Run `trials` decode passes at physical error rate `gamma`
    /// Gantree: simulate_error_correction(gamma, trials) -> TrialResult // 논리 오류율
    pub fn simulate_error_correction(&mut self, gamma: f64, trials: u64) -> QecResult<TrialResult> {
        if trials == 0 {
            return Err(QecError::NoTrials);
        }
        let params = self.config.channel_for(gamma)?;
        let ideal = ChannelParameters::ideal();
        log::debug!(
            "γ={:.3e}: fault-free pass probability {:.4}",
            gamma,
            params.fault_free_probability(
                CLEAN_PASS_PREPS,
                CLEAN_PASS_CNOTS,
                CLEAN_PASS_MEASUREMENTS
            )
        );

        let start = Instant::now();
        let mut frame = PauliFrame::zero();
        let mut failures = 0u64;
        let mut flag_events = 0u64;
        let mut syndrome_events = 0u64;

        for trial in 0..trials {
            match correct_errors(&mut self.backend, &mut frame, &params) {
                DecodeOutcome::Flagged { .. } => flag_events += 1,
                DecodeOutcome::Syndrome { .. } => syndrome_events += 1,
                DecodeOutcome::Clean => {}
            }

            let mut copy = frame;
            correct_errors(&mut self.perfect, &mut copy, &ideal);
            if is_logical_error(&copy) {
                log::debug!("trial {}: logical error, residual {}", trial, copy);
                failures += 1;
                frame.reset();
            }
        }

        let result = TrialResult {
            gamma,
            trials,
            failures,
            logical_error_rate: failures as f64 / trials as f64,
            flag_events,
            syndrome_events,
            time_ms: start.elapsed().as_millis() as u64,
        };
        log::info!("{}", result);
        Ok(result)
    }

    /// Run every point of the configuration, in order
    pub fn run_sweep(&mut self) -> QecResult<Vec<TrialResult>> {
        self.backend.reseed();
        let points = self.config.points.clone();
        let mut results = Vec::with_capacity(points.len());

        for (i, point) in points.iter().enumerate() {
            if self.config.verbose {
                println!(
                    "[{}/{}] γ={:.3e}, trials={}",
                    i + 1,
                    points.len(),
                    point.gamma,
                    point.trials
                );
            }
            let result = self.simulate_error_correction(point.gamma, point.trials)?;
            if self.config.verbose {
                println!("  {}", result);
            }
            results.push(result);
        }

        log::info!(
            "sweep done: {} points, {} noisy locations, {} faults",
            results.len(),
            self.backend.stats().locations(),
            self.backend.stats().faults
        );
        Ok(results)
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
    fn test_rejects_invalid_config() {
        let err = TrialDriver::new(TrialConfig::single(0.01, 0)).err();
        assert_eq!(err, Some(QecError::NoTrials));
    }

    #[test]
    fn test_rejects_bad_point() {
        let mut driver = TrialDriver::new(TrialConfig::quick()).unwrap();
        assert_eq!(
            driver.simulate_error_correction(0.01, 0),
            Err(QecError::NoTrials)
        );
        assert!(driver
            .simulate_error_correction(-0.1, 10)
            .unwrap_err()
            .is_validation_error());
    }

    #[test]
    fn test_result_bookkeeping() {
        let mut driver = TrialDriver::new(TrialConfig::quick().with_seed(5)).unwrap();
        let result = driver.simulate_error_correction(0.05, 2000).unwrap();
        assert_eq!(result.trials, 2000);
        assert!(result.failures > 0);
        assert!(result.flag_events > 0);
        assert!(result.syndrome_events > 0);
        assert!(result.flag_events + result.syndrome_events <= result.trials);
        assert_relative_eq!(
            result.logical_error_rate,
            result.failures as f64 / 2000.0
        );
    }

    #[test]
    fn test_seeded_runs_reproduce() {
        let config = TrialConfig::single(0.02, 1000).with_seed(99);
        let a = TrialDriver::new(config.clone()).unwrap().run_sweep().unwrap();
        let b = TrialDriver::new(config).unwrap().run_sweep().unwrap();
        assert_eq!(a[0].failures, b[0].failures);
        assert_eq!(a[0].flag_events, b[0].flag_events);
        assert_eq!(a[0].syndrome_events, b[0].syndrome_events);
    }

    #[test]
    fn test_low_gamma_beats_physical_rate() {
        // Logical rate scales as ~350 γ², far below γ at 10^-4
        let mut driver = TrialDriver::new(TrialConfig::quick().with_seed(42)).unwrap();
        let result = driver.simulate_error_correction(1e-4, 100_000).unwrap();
        assert!(result.failures < 10, "{}", result);
        assert!(result.is_below_physical());
    }

    #[test]
    fn test_rate_grows_with_gamma() {
        let config = TrialConfig::quick()
            .with_gammas(&[0.003, 0.01, 0.05], 3000)
            .with_seed(42);
        let results = TrialDriver::new(config).unwrap().run_sweep().unwrap();
        assert!(results[0].logical_error_rate < results[1].logical_error_rate);
        assert!(results[1].logical_error_rate < results[2].logical_error_rate);
    }

    #[test]
    fn test_display_and_helpers() {
        let result = TrialResult {
            gamma: 0.01,
            trials: 100,
            failures: 4,
            logical_error_rate: 0.04,
            flag_events: 10,
            syndrome_events: 20,
            time_ms: 1,
        };
        assert!(result.to_string().contains("4/100"));
        assert!(!result.is_below_physical());
        assert_relative_eq!(result.flag_rate(), 0.1);
        assert_relative_eq!(result.standard_error(), (0.04f64 * 0.96 / 100.0).sqrt());
    }
}
