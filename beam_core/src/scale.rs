//! # Diagram Scale Selection
//!
//! Picks the y-axis half-range for a sampled diagram so the curve stays
//! inside the visible area. The axis spans `[-scale, scale]`.

use serde::{Deserialize, Serialize};

use crate::calculations::Sample;

/// Headroom applied by [`ScalePolicy::Margin`]
pub const MARGIN_FACTOR: f64 = 1.5;

/// How a scale is derived from the largest magnitude `m` in a diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScalePolicy {
    /// `1.5 * m`
    #[default]
    Margin,
    /// Smallest power of two that is `>= m`
    PowerOfTwo,
}

impl ScalePolicy {
    pub fn display_name(&self) -> &'static str {
        match self {
            ScalePolicy::Margin => "1.5x margin",
            ScalePolicy::PowerOfTwo => "Power of two",
        }
    }

    /// Apply the policy to a positive peak magnitude
    fn apply(&self, peak: f64) -> f64 {
        match self {
            ScalePolicy::Margin => peak * MARGIN_FACTOR,
            ScalePolicy::PowerOfTwo => {
                let mut scale = peak.log2().ceil().exp2();
                if scale < peak {
                    scale *= 2.0;
                }
                scale
            }
        }
    }
}

/// Largest `|y|` in the samples (0 when empty)
pub fn peak_magnitude(samples: &[Sample]) -> f64 {
    samples.iter().fold(0.0, |peak, sample| peak.max(sample.y.abs()))
}

/// Scale with the default policy
///
/// ```rust
/// use beam_core::calculations::Sample;
/// use beam_core::scale::scale;
///
/// assert_eq!(scale(&[]), 1.0);
/// assert_eq!(scale(&[Sample::new(0.0, -2.0), Sample::new(1.0, 1.0)]), 3.0);
/// ```
pub fn scale(samples: &[Sample]) -> f64 {
    scale_with(samples, ScalePolicy::default())
}

/// Scale with an explicit policy. An all-zero or empty diagram gets scale 1.
pub fn scale_with(samples: &[Sample], policy: ScalePolicy) -> f64 {
    let peak = peak_magnitude(samples);
    if peak == 0.0 {
        return 1.0;
    }
    policy.apply(peak)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(values: &[f64]) -> Vec<Sample> {
        values
            .iter()
            .enumerate()
            .map(|(i, y)| Sample::new(i as f64, *y))
            .collect()
    }

    #[test]
    fn test_empty_and_zero() {
        assert_eq!(scale(&[]), 1.0);
        assert_eq!(scale(&samples(&[0.0, 0.0, -0.0])), 1.0);
        assert_eq!(scale_with(&samples(&[0.0]), ScalePolicy::PowerOfTwo), 1.0);
    }

    #[test]
    fn test_margin_policy() {
        assert_eq!(scale(&samples(&[1.0, -490.0, 20.0])), 735.0);
    }

    #[test]
    fn test_power_of_two_policy() {
        let policy = ScalePolicy::PowerOfTwo;
        assert_eq!(scale_with(&samples(&[3.0]), policy), 4.0);
        assert_eq!(scale_with(&samples(&[-8.0]), policy), 8.0);
        assert_eq!(scale_with(&samples(&[0.3]), policy), 0.5);
        assert_eq!(scale_with(&samples(&[2450.0]), policy), 4096.0);
    }

    #[test]
    fn test_power_of_two_subnormal_peak() {
        let s = samples(&[1e-310]);
        let scale = scale_with(&s, ScalePolicy::PowerOfTwo);
        assert!(scale > 0.0);
        assert!(scale >= 1e-310);
        assert!(scale < 2e-310);
    }

    #[test]
    fn test_scale_covers_peak() {
        for values in [vec![1e-12, -3e-12], vec![98.0, -49.0], vec![7.5e9]] {
            let s = samples(&values);
            let peak = peak_magnitude(&s);
            assert!(scale_with(&s, ScalePolicy::Margin) >= peak);
            assert!(scale_with(&s, ScalePolicy::PowerOfTwo) >= peak);
        }
    }
}
