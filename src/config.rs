//! Scoring configuration
//!
//! Every constant the success engine and date window depend on lives here so
//! that the dashboard can tune weights or tier cut-offs without touching the
//! scoring code. [`ScoringConfig::default`] carries the production values.
//!
//! ```rust
//! use outreach_metrics::config::ScoringConfig;
//!
//! let config = ScoringConfig::from_json_str(r#"{ "value_per_meeting": 5000.0 }"#)?;
//! assert!((config.value_per_meeting - 5000.0).abs() < f64::EPSILON);
//! assert_eq!(config.countdown_window_days, 5);
//! # Ok::<(), outreach_metrics::Error>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Currency units attributed to a single booked meeting.
pub const VALUE_PER_MEETING: f64 = 7200.0;

/// Days before the end date during which a countdown is shown.
pub const COUNTDOWN_WINDOW_DAYS: i64 = 5;

/// Weights for blending the three success categories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Weight of primary-goal attainment.
    pub primary_goal: f64,
    /// Weight of secondary-goal attainment.
    pub secondary_goals: f64,
    /// Weight of schedule efficiency.
    pub efficiency: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            primary_goal: 0.5,
            secondary_goals: 0.3,
            efficiency: 0.2,
        }
    }
}

/// Lower bounds (inclusive) of each success tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    /// Minimum score for `excellent`.
    pub excellent: f64,
    /// Minimum score for `good`.
    pub good: f64,
    /// Minimum score for `fair`.
    pub fair: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            excellent: 85.0,
            good: 65.0,
            fair: 40.0,
        }
    }
}

/// Tunable constants for success scoring and date windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Category blend weights.
    pub weights: ScoreWeights,
    /// Tier cut-offs.
    pub thresholds: TierThresholds,
    /// Value of one booked meeting, used for ROI.
    pub value_per_meeting: f64,
    /// Upper clamp for the primary-goal percentage shown in the breakdown.
    pub primary_overperformance_cap: f64,
    /// Floor for the elapsed/time-frame ratio in pace scoring.
    pub pace_epsilon: f64,
    /// Countdown visibility window, in days.
    pub countdown_window_days: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            thresholds: TierThresholds::default(),
            value_per_meeting: VALUE_PER_MEETING,
            primary_overperformance_cap: 150.0,
            pace_epsilon: 1e-6,
            countdown_window_days: COUNTDOWN_WINDOW_DAYS,
        }
    }
}

impl ScoringConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] on malformed JSON and [`Error::InvalidConfig`]
    /// if the parsed values fail [`ScoringConfig::validate`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check internal consistency of the config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] when weights are negative or do not
    /// sum to 1, thresholds are not strictly descending within 0..=100, or
    /// any scalar constant is out of range.
    pub fn validate(&self) -> Result<()> {
        let w = &self.weights;
        if [w.primary_goal, w.secondary_goals, w.efficiency]
            .iter()
            .any(|weight| !weight.is_finite() || *weight < 0.0)
        {
            return Err(Error::InvalidConfig(
                "weights must be finite and non-negative".to_string(),
            ));
        }
        let sum = w.primary_goal + w.secondary_goals + w.efficiency;
        if (sum - 1.0).abs() > 1e-9 {
            return Err(Error::InvalidConfig(format!(
                "weights must sum to 1.0, got {sum}"
            )));
        }

        let t = &self.thresholds;
        let in_range = |v: f64| (0.0..=100.0).contains(&v);
        if !(in_range(t.excellent) && in_range(t.good) && in_range(t.fair))
            || !(t.excellent > t.good && t.good > t.fair)
        {
            return Err(Error::InvalidConfig(format!(
                "thresholds must be strictly descending within 0..=100, got {}/{}/{}",
                t.excellent, t.good, t.fair
            )));
        }

        if !(self.value_per_meeting.is_finite() && self.value_per_meeting > 0.0) {
            return Err(Error::InvalidConfig(
                "value_per_meeting must be positive".to_string(),
            ));
        }
        if !(self.primary_overperformance_cap >= 100.0) {
            return Err(Error::InvalidConfig(
                "primary_overperformance_cap must be at least 100".to_string(),
            ));
        }
        if !(self.pace_epsilon > 0.0) {
            return Err(Error::InvalidConfig(
                "pace_epsilon must be positive".to_string(),
            ));
        }
        if self.countdown_window_days < 0 {
            return Err(Error::InvalidConfig(
                "countdown_window_days must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(ScoringConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            ScoringConfig::from_json_str(r#"{ "thresholds": { "excellent": 90.0 } }"#).unwrap();
        assert!((config.thresholds.excellent - 90.0).abs() < f64::EPSILON);
        assert!((config.thresholds.good - 65.0).abs() < f64::EPSILON);
        assert!((config.value_per_meeting - VALUE_PER_MEETING).abs() < f64::EPSILON);
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let err = ScoringConfig::from_json_str(
            r#"{ "weights": { "primary_goal": 0.6, "secondary_goals": 0.3, "efficiency": 0.2 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_thresholds_must_descend() {
        let mut config = ScoringConfig::default();
        config.thresholds.good = 90.0;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_malformed_json() {
        let err = ScoringConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
