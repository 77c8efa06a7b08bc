use serde::Deserialize;

use crate::error::ConfigError;

/// Maximum relative deviation, in percent, for an area to count as a match.
/// The bound is inclusive.
pub const MATCH_THRESHOLD_PERCENT: f64 = 1.0;

/// Minimum number of points a store keeps when removing points.
pub const DEFAULT_MIN_POINTS: usize = 3;

/// Tunable policy shared by the point store and the reconciliation reporter.
///
/// ```toml
/// match_threshold_percent = 0.5
/// min_points = 3
/// reject_non_finite = true
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Policy {
    /// Inclusive percentage bound for a
    /// [`Reconciliation::Match`](crate::operations::Reconciliation::Match).
    pub match_threshold_percent: f64,
    /// Removal is refused when it would leave fewer points. `0` disables the guard.
    pub min_points: usize,
    /// Reject NaN or infinite coordinates when points enter a store.
    pub reject_non_finite: bool,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            match_threshold_percent: MATCH_THRESHOLD_PERCENT,
            min_points: DEFAULT_MIN_POINTS,
            reject_non_finite: false,
        }
    }
}

impl Policy {
    /// Parses a policy from TOML. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML or unknown keys, and
    /// `ConfigError::Invalid` if the threshold is negative or not finite.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let policy: Self = toml::from_str(text)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Checks that the policy values are usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if the threshold is negative or not finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = self.match_threshold_percent;
        if !t.is_finite() || t < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "match_threshold_percent must be a finite, non-negative number, got {t}"
            )));
        }
        Ok(())
    }
}
