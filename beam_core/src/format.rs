//! # Number Formatting
//!
//! Renders values for axis ticks and labels. The notation is picked from the
//! diagram scale so every label on one axis uses the same style:
//!
//! - scale ≥ 1e5 or 0 < scale ≤ 1e-4: scientific (`1.23457e+5`)
//! - otherwise: fixed decimal (`3.14159`)
//!
//! Values are rounded to 6 significant digits first so floating point trails
//! never reach the screen. Zero always renders as `"0"`.
//!
//! ```rust
//! use beam_core::format::format;
//!
//! assert_eq!(format(10.0)(3.14159265), "3.14159");
//! assert_eq!(format(2e5)(123456.789), "1.23457e+5");
//! assert_eq!(format(0.0)(0.0), "0");
//! ```

use serde::{Deserialize, Serialize};

/// Significant digits kept in rendered values
pub const SIGNIFICANT_DIGITS: usize = 6;

const SCIENTIFIC_ABOVE: f64 = 1e5;
const SCIENTIFIC_BELOW: f64 = 1e-4;

/// Round to `digits` significant digits.
pub fn round_significant(value: f64, digits: usize) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    format!("{:.*e}", digits.saturating_sub(1), value)
        .parse()
        .unwrap_or(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notation {
    Fixed,
    Scientific,
}

/// Formatter bound to the notation chosen for one scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormatter {
    notation: Notation,
}

impl NumberFormatter {
    pub fn for_scale(scale: f64) -> Self {
        let notation = if scale >= SCIENTIFIC_ABOVE || (scale <= SCIENTIFIC_BELOW && scale != 0.0) {
            Notation::Scientific
        } else {
            Notation::Fixed
        };
        NumberFormatter { notation }
    }

    pub fn notation(&self) -> Notation {
        self.notation
    }

    pub fn format(&self, value: f64) -> String {
        let rounded = round_significant(value, SIGNIFICANT_DIGITS);
        if rounded == 0.0 {
            return "0".to_string();
        }
        match self.notation {
            Notation::Fixed => rounded.to_string(),
            Notation::Scientific => scientific(rounded),
        }
    }
}

/// Returns a rendering function for values plotted at `scale`
pub fn format(scale: f64) -> impl Fn(f64) -> String {
    let formatter = NumberFormatter::for_scale(scale);
    move |value| formatter.format(value)
}

/// `1.5e5` becomes `1.5e+5`; negative exponents are left alone
fn scientific(value: f64) -> String {
    let text = format!("{:e}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_never_empty() {
        assert_eq!(format(0.0)(0.0), "0");
        assert_eq!(format(1e6)(0.0), "0");
        assert_eq!(format(1e-6)(-0.0), "0");
    }

    #[test]
    fn test_fixed_notation() {
        assert_eq!(format(10.0)(3.14159265), "3.14159");
        assert_eq!(format(10.0)(0.1 + 0.2), "0.3");
        assert_eq!(format(10.0)(-490.0), "-490");
        assert_eq!(format(99_999.0)(12345678.9), "12345700");
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(format(2e5)(123456.789), "1.23457e+5");
        assert_eq!(format(1e5)(100000.0), "1e+5");
        assert_eq!(format(1e-5)(0.0000123456789), "1.23457e-5");
        assert_eq!(format(1e-4)(-0.00015), "-1.5e-4");
    }

    #[test]
    fn test_notation_thresholds() {
        assert_eq!(NumberFormatter::for_scale(0.0).notation(), Notation::Fixed);
        assert_eq!(NumberFormatter::for_scale(1e-4).notation(), Notation::Scientific);
        assert_eq!(NumberFormatter::for_scale(1.1e-4).notation(), Notation::Fixed);
        assert_eq!(NumberFormatter::for_scale(99_999.9).notation(), Notation::Fixed);
        assert_eq!(NumberFormatter::for_scale(1e5).notation(), Notation::Scientific);
    }

    #[test]
    fn test_round_significant() {
        assert_eq!(round_significant(123456.789, 6), 123457.0);
        assert_eq!(round_significant(0.30000000000000004, 6), 0.3);
        assert_eq!(round_significant(0.0, 6), 0.0);
        assert!(round_significant(f64::NAN, 6).is_nan());
    }
}
