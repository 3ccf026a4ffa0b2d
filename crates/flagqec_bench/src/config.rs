//! Trial configuration
//!
//! Gantree: L8_Benchmark → TrialConfig
//!
//! Which physical error rates to sweep, how many trials each, and how the
//! single rate gamma splits into preparation, gate and measurement rates.

use flagqec_core::{noise, sweep, QecError, QecResult};
use flagqec_noise::ChannelParameters;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// One sweep point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Physical error rate
    pub gamma: f64,

    /// Decode passes at this rate
    pub trials: u64,
}

impl SweepPoint {
    /// Create sweep point
    pub fn new(gamma: f64, trials: u64) -> Self {
        Self { gamma, trials }
    }
}

/// Trial configuration
/// Gantree: TrialConfig // 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialConfig {
    /// Sweep points, run in order
    /// Gantree: points: Vec<SweepPoint> // 스윕 지점
    pub points: Vec<SweepPoint>,

    /// Random seed; entropy when absent
    /// Gantree: seed: Option<u64> // 시드
    pub seed: Option<u64>,

    /// Preparation rate as a fraction of gamma
    /// Gantree: prep_ratio: f64 // 4/15
    pub prep_ratio: f64,

    /// Measurement rate as a fraction of gamma
    /// Gantree: meas_ratio: f64 // 4/15
    pub meas_ratio: f64,

    /// Print progress to stdout
    pub verbose: bool,
}

impl TrialConfig {
    // ========================================================================
    // Presets
    // ========================================================================

    /// Full sweep: gamma = 10^(i/10 - 4) for i = 0..=20, 10^7 trials below
    /// 10^-3 and 10^6 from there on
    pub fn default_sweep() -> Self {
        let points = (0..sweep::DEFAULT_POINTS)
            .map(|i| SweepPoint::new(sweep::gamma_at(i), sweep::trials_at(i)))
            .collect();
        Self {
            points,
            seed: Some(sweep::DEFAULT_SEED),
            prep_ratio: noise::PREP_RATIO,
            meas_ratio: noise::MEAS_RATIO,
            verbose: false,
        }
    }

    /// Short sweep for smoke runs
    pub fn quick() -> Self {
        Self {
            points: [1e-3, 3e-3, 1e-2, 3e-2]
                .iter()
                .map(|&g| SweepPoint::new(g, 10_000))
                .collect(),
            ..Self::default_sweep()
        }
    }

    /// One gamma, one trial count
    pub fn single(gamma: f64, trials: u64) -> Self {
        Self {
            points: vec![SweepPoint::new(gamma, trials)],
            ..Self::default_sweep()
        }
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Replace the sweep
    pub fn with_points(mut self, points: Vec<SweepPoint>) -> Self {
        self.points = points;
        self
    }

    /// Replace the sweep with `gammas`, each run `trials` times
    pub fn with_gammas(mut self, gammas: &[f64], trials: u64) -> Self {
        self.points = gammas.iter().map(|&g| SweepPoint::new(g, trials)).collect();
        self
    }

    /// Set the trial count of every point
    pub fn with_trials(mut self, trials: u64) -> Self {
        for p in &mut self.points {
            p.trials = trials;
        }
        self
    }

    /// Set seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Seed from entropy
    pub fn without_seed(mut self) -> Self {
        self.seed = None;
        self
    }

    /// Set preparation and measurement ratios
    pub fn with_ratios(mut self, prep_ratio: f64, meas_ratio: f64) -> Self {
        self.prep_ratio = prep_ratio;
        self.meas_ratio = meas_ratio;
        self
    }

    /// Enable verbose output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    // ========================================================================
    // Derived Values
    // ========================================================================

    /// Gammas of the sweep, in order
    pub fn gammas(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.gamma).collect()
    }

    /// Trials over the whole sweep
    pub fn total_trials(&self) -> u64 {
        self.points.iter().map(|p| p.trials).sum()
    }

    /// Channel parameters for `gamma` under this configuration's ratios
    pub fn channel_for(&self, gamma: f64) -> QecResult<ChannelParameters> {
        ChannelParameters::from_gamma_with_ratios(gamma, self.prep_ratio, self.meas_ratio)
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Validate configuration
    pub fn validate(&self) -> QecResult<()> {
        if self.points.is_empty() {
            return Err(QecError::EmptySweep);
        }
        for ratio in [self.prep_ratio, self.meas_ratio] {
            if !ratio.is_finite() || ratio < 0.0 {
                return Err(QecError::ConfigError(format!(
                    "rate ratio {} must be finite and non-negative",
                    ratio
                )));
            }
        }
        for p in &self.points {
            if p.trials == 0 {
                return Err(QecError::NoTrials);
            }
            self.channel_for(p.gamma)?;
        }
        Ok(())
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> QecResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate JSON
    pub fn from_json(json: &str) -> QecResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> QecResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Save as a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> QecResult<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self::default_sweep()
    }
}

impl fmt::Display for TrialConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TrialConfig(points={}, trials={}, seed={:?}, prep={:.4}γ, meas={:.4}γ)",
            self.points.len(),
            self.total_trials(),
            self.seed,
            self.prep_ratio,
            self.meas_ratio
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
