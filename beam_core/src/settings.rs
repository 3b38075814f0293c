//! # Analysis Settings
//!
//! Knobs that change how diagrams are sampled and scaled. Every field has a
//! serde default so a document may omit the whole block or any part of it.
//!
//! ## JSON Example
//!
//! ```json
//! { "scale_policy": "PowerOfTwo", "sample_divisions": 200 }
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::single_load::DEFLECTION_NOISE_FLOOR;
use crate::errors::{BeamError, BeamResult};
use crate::scale::ScalePolicy;

/// Evenly spaced intervals per diagram (101 sample positions)
pub const DEFAULT_SAMPLE_DIVISIONS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// How diagram scales are chosen
    #[serde(default)]
    pub scale_policy: ScalePolicy,

    /// Number of equal intervals the beam is split into for sampling
    #[serde(default = "default_sample_divisions")]
    pub sample_divisions: usize,

    /// Deflections below this magnitude are reported as zero
    #[serde(default = "default_noise_floor")]
    pub deflection_noise_floor: f64,
}

fn default_sample_divisions() -> usize {
    DEFAULT_SAMPLE_DIVISIONS
}

fn default_noise_floor() -> f64 {
    DEFLECTION_NOISE_FLOOR
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            scale_policy: ScalePolicy::default(),
            sample_divisions: DEFAULT_SAMPLE_DIVISIONS,
            deflection_noise_floor: DEFLECTION_NOISE_FLOOR,
        }
    }
}

impl AnalysisSettings {
    /// Set scale policy and return self (builder pattern)
    pub fn with_scale_policy(mut self, policy: ScalePolicy) -> Self {
        self.scale_policy = policy;
        self
    }

    pub fn validate(&self) -> BeamResult<()> {
        if self.sample_divisions == 0 {
            return Err(BeamError::invalid_input(
                "sample_divisions",
                "0",
                "At least one sampling interval is required",
            ));
        }
        if !self.deflection_noise_floor.is_finite() || self.deflection_noise_floor < 0.0 {
            return Err(BeamError::invalid_input(
                "deflection_noise_floor",
                self.deflection_noise_floor.to_string(),
                "Must be a finite number of at least 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AnalysisSettings::default();
        assert_eq!(settings.scale_policy, ScalePolicy::Margin);
        assert_eq!(settings.sample_divisions, 100);
        assert_eq!(settings.deflection_noise_floor, 1e-18);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: AnalysisSettings = serde_json::from_str(r#"{"scale_policy":"PowerOfTwo"}"#).unwrap();
        assert_eq!(settings.scale_policy, ScalePolicy::PowerOfTwo);
        assert_eq!(settings.sample_divisions, DEFAULT_SAMPLE_DIVISIONS);

        let empty: AnalysisSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, AnalysisSettings::default());
    }

    #[test]
    fn test_validation() {
        let settings = AnalysisSettings {
            sample_divisions: 0,
            ..AnalysisSettings::default()
        };
        assert!(settings.validate().is_err());

        let settings = AnalysisSettings {
            deflection_noise_floor: -1.0,
            ..AnalysisSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
