//! Channel parameters for FLAGQEC
//!
//! Gantree: L2_Noise → ChannelParameters
//!
//! Error probabilities of the three noisy primitives: preparation, two-qubit
//! gate, and measurement. The record is opaque to the decoder; only the
//! backend reads it.

use flagqec_core::error::{QecError, QecResult};
use flagqec_core::noise;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-operation error probabilities
/// Gantree: ChannelParameters // 채널 파라미터
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelParameters {
    /// Probability that a preparation yields the orthogonal state
    /// Gantree: prep_error: f64 // 준비 에러
    prep_error: f64,

    /// Probability of a uniformly random non-identity two-qubit Pauli after a CNOT
    /// Gantree: gate_error: f64 // 2Q 에러
    gate_error: f64,

    /// Probability that a measurement outcome is flipped
    /// Gantree: meas_error: f64 // 측정 에러
    meas_error: f64,
}

impl ChannelParameters {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create with validation
    /// Gantree: new(prep,gate,meas) -> Result<Self> // 생성+검증
    pub fn new(prep_error: f64, gate_error: f64, meas_error: f64) -> QecResult<Self> {
        let params = Self {
            prep_error,
            gate_error,
            meas_error,
        };
        params.validate()?;
        Ok(params)
    }

    /// Noiseless channel, used for the perfect re-decode pass
    /// Gantree: ideal() -> Self // 이상적
    pub const fn ideal() -> Self {
        Self {
            prep_error: 0.0,
            gate_error: 0.0,
            meas_error: 0.0,
        }
    }

    /// Trial noise model for physical error rate `gamma`:
    /// gate = gamma, prep = meas = (4/15) * gamma
    pub fn from_gamma(gamma: f64) -> QecResult<Self> {
        Self::from_gamma_with_ratios(gamma, noise::PREP_RATIO, noise::MEAS_RATIO)
    }

    /// Like [`ChannelParameters::from_gamma`] with explicit prep/meas ratios
    pub fn from_gamma_with_ratios(gamma: f64, prep_ratio: f64, meas_ratio: f64) -> QecResult<Self> {
        if !gamma.is_finite() || gamma <= 0.0 || gamma > 1.0 {
            return Err(QecError::InvalidGamma(gamma));
        }
        Self::new(prep_ratio * gamma, gamma, meas_ratio * gamma)
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Set preparation error
    pub fn with_prep_error(mut self, error: f64) -> Self {
        self.prep_error = error;
        self
    }

    /// Set two-qubit gate error
    pub fn with_gate_error(mut self, error: f64) -> Self {
        self.gate_error = error;
        self
    }

    /// Set measurement error
    pub fn with_meas_error(mut self, error: f64) -> Self {
        self.meas_error = error;
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Preparation error rate
    #[inline]
    pub fn prep_error(&self) -> f64 {
        self.prep_error
    }

    /// Two-qubit gate error rate
    #[inline]
    pub fn gate_error(&self) -> f64 {
        self.gate_error
    }

    /// Measurement error rate
    #[inline]
    pub fn meas_error(&self) -> f64 {
        self.meas_error
    }

    /// True when no primitive can inject a fault
    pub fn is_ideal(&self) -> bool {
        self.prep_error == 0.0 && self.gate_error == 0.0 && self.meas_error == 0.0
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Validate every rate is finite and in [0, 1]
    /// Gantree: validate(&self) -> Result // 범위 검증
    pub fn validate(&self) -> QecResult<()> {
        for (channel, rate) in [
            ("preparation", self.prep_error),
            ("gate", self.gate_error),
            ("measurement", self.meas_error),
        ] {
            if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
                return Err(QecError::InvalidErrorRate { channel, rate });
            }
        }
        Ok(())
    }

    // ========================================================================
    // Derived Quantities
    // ========================================================================

    /// Probability that a flagged check of `cnots` gates, `preps`
    /// preparations and `measurements` measurements runs fault-free
    pub fn fault_free_probability(&self, preps: usize, cnots: usize, measurements: usize) -> f64 {
        (1.0 - self.prep_error).powi(preps as i32)
            * (1.0 - self.gate_error).powi(cnots as i32)
            * (1.0 - self.meas_error).powi(measurements as i32)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> QecResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON and validate
    pub fn from_json(json: &str) -> QecResult<Self> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }
}

impl Default for ChannelParameters {
    fn default() -> Self {
        Self::ideal()
    }
}

impl fmt::Display for ChannelParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Channel(prep={:.3e}, gate={:.3e}, meas={:.3e})",
            self.prep_error, self.gate_error, self.meas_error
        )
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
    fn test_new() {
        let params = ChannelParameters::new(0.001, 0.01, 0.002).unwrap();
        assert_eq!(params.prep_error(), 0.001);
        assert_eq!(params.gate_error(), 0.01);
        assert_eq!(params.meas_error(), 0.002);
    }

    #[test]
    fn test_ideal() {
        let params = ChannelParameters::ideal();
        assert!(params.is_ideal());
        assert_eq!(params, ChannelParameters::default());
    }

    #[test]
    fn test_from_gamma() {
        let params = ChannelParameters::from_gamma(0.015).unwrap();
        assert_relative_eq!(params.gate_error(), 0.015);
        assert_relative_eq!(params.prep_error(), 0.004, max_relative = 1e-12);
        assert_relative_eq!(params.meas_error(), 0.004, max_relative = 1e-12);
        assert!(!params.is_ideal());
    }

    #[test]
    fn test_from_gamma_rejects() {
        assert!(matches!(
            ChannelParameters::from_gamma(0.0),
            Err(QecError::InvalidGamma(_))
        ));
        assert!(ChannelParameters::from_gamma(1.5).is_err());
        assert!(ChannelParameters::from_gamma(f64::NAN).is_err());
    }

    #[test]
    fn test_validation() {
        assert!(ChannelParameters::new(-0.1, 0.0, 0.0).is_err());
        assert!(ChannelParameters::new(0.0, 1.1, 0.0).is_err());

        let err = ChannelParameters::new(0.0, 0.0, f64::INFINITY).unwrap_err();
        assert!(matches!(
            err,
            QecError::InvalidErrorRate {
                channel: "measurement",
                ..
            }
        ));
    }

    #[test]
    fn test_out_of_range_rates_name_their_channel() {
        let cases = [
            (ChannelParameters::ideal().with_prep_error(1.5), "preparation"),
            (ChannelParameters::ideal().with_gate_error(-0.2), "gate"),
            (ChannelParameters::ideal().with_meas_error(f64::NAN), "measurement"),
        ];
        for (params, expected) in cases {
            let err = params.validate().unwrap_err();
            assert!(err.is_validation_error());
            match err {
                QecError::InvalidErrorRate { channel, .. } => assert_eq!(channel, expected),
                other => panic!("unexpected error {:?}", other),
            }
        }
    }

    #[test]
    fn test_builders_bypass_until_validate() {
        let params = ChannelParameters::ideal().with_gate_error(2.0);
        assert!(params.validate().is_err());

        let params = ChannelParameters::ideal()
            .with_prep_error(0.1)
            .with_meas_error(0.2);
        assert!(params.validate().is_ok());
        assert_eq!(params.gate_error(), 0.0);
    }

    #[test]
    fn test_fault_free_probability() {
        let params = ChannelParameters::new(0.1, 0.1, 0.1).unwrap();
        assert_relative_eq!(params.fault_free_probability(1, 1, 0), 0.81, max_relative = 1e-12);
        assert_relative_eq!(ChannelParameters::ideal().fault_free_probability(2, 6, 2), 1.0);
    }

    #[test]
    fn test_json_roundtrip_validates() {
        let params = ChannelParameters::from_gamma(0.01).unwrap();
        let json = params.to_json().unwrap();
        assert_eq!(ChannelParameters::from_json(&json).unwrap(), params);

        let bad = r#"{"prep_error":0.0,"gate_error":3.0,"meas_error":0.0}"#;
        assert!(ChannelParameters::from_json(bad).is_err());
    }
}
