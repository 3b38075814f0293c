//! # Beam Definition
//!
//! Geometry, stiffness and support configuration of the beam being analyzed.
//!
//! Units are whatever the caller uses consistently (e.g. in, ksi, in^4). Only
//! `length`, the flexural rigidity `EI` and `gravity` enter the formulas; the
//! remaining material fields are carried for the front end and are unused here.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "length": 100.0,
//!   "elasticity": 1.0,
//!   "inertia": 1.0,
//!   "ei": 210000000000.0,
//!   "density": 1.0,
//!   "area": 1.0,
//!   "damping_ratio": 0.02,
//!   "r_a": 85000.0,
//!   "gravity": 9.8,
//!   "support": { "type": "SimplySupported", "pinned_position": 0.0, "roller_position": 100.0 }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{BeamError, BeamResult};

/// Pinned and roller positions closer than this are considered equal
const SUPPORT_SEPARATION_TOLERANCE: f64 = 1e-10;

/// How the beam is held.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Support {
    /// Pinned support plus roller support.
    ///
    /// The positions are carried for display and validation. The formulas
    /// treat the supports as sitting at the beam ends (x = 0 and x = length).
    SimplySupported {
        pinned_position: f64,
        roller_position: f64,
    },

    /// Fixed at x = 0, free at x = length
    Cantilever,
}

impl Support {
    /// Simply supported with the pinned end at 0 and the roller at `length`
    pub fn simply_supported(length: f64) -> Self {
        Support::SimplySupported {
            pinned_position: 0.0,
            roller_position: length,
        }
    }

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Support::SimplySupported { .. } => "Simply Supported",
            Support::Cantilever => "Cantilever",
        }
    }

    /// Whether a right-hand reaction (R2) exists
    pub fn has_right_reaction(&self) -> bool {
        matches!(self, Support::SimplySupported { .. })
    }
}

impl Default for Support {
    fn default() -> Self {
        Support::simply_supported(100.0)
    }
}

impl std::fmt::Display for Support {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Beam geometry, material and support configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    /// Length of beam (> 0)
    pub length: f64,

    /// Modulus of elasticity (E)
    pub elasticity: f64,

    /// Moment of inertia (I)
    pub inertia: f64,

    /// Flexural rigidity given directly. Takes precedence over
    /// `elasticity * inertia` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ei: Option<f64>,

    #[serde(default = "default_unit")]
    pub density: f64,

    #[serde(default = "default_unit")]
    pub area: f64,

    #[serde(default = "default_damping_ratio")]
    pub damping_ratio: f64,

    #[serde(default = "default_r_a")]
    pub r_a: f64,

    /// Converts load mass into force
    #[serde(default = "default_gravity")]
    pub gravity: f64,

    pub support: Support,
}

fn default_unit() -> f64 {
    1.0
}

fn default_damping_ratio() -> f64 {
    0.02
}

fn default_r_a() -> f64 {
    85_000.0
}

fn default_gravity() -> f64 {
    9.8
}

impl Default for Beam {
    fn default() -> Self {
        Beam {
            length: 100.0,
            elasticity: 1.0,
            inertia: 1.0,
            ei: Some(210_000_000_000.0),
            density: default_unit(),
            area: default_unit(),
            damping_ratio: default_damping_ratio(),
            r_a: default_r_a(),
            gravity: default_gravity(),
            support: Support::simply_supported(100.0),
        }
    }
}

impl Beam {
    /// Simply supported beam with supports at both ends.
    ///
    /// # Example
    ///
    /// ```rust
    /// use beam_core::beam::Beam;
    ///
    /// let beam = Beam::simply_supported(100.0, 2.1e11);
    /// assert_eq!(beam.flexural_rigidity(), 2.1e11);
    /// assert!(beam.support.has_right_reaction());
    /// ```
    pub fn simply_supported(length: f64, ei: f64) -> Self {
        Beam {
            length,
            ei: Some(ei),
            support: Support::simply_supported(length),
            ..Beam::default()
        }
    }

    /// Cantilever fixed at x = 0
    pub fn cantilever(length: f64, ei: f64) -> Self {
        Beam {
            length,
            ei: Some(ei),
            support: Support::Cantilever,
            ..Beam::default()
        }
    }

    /// Set gravity and return self (builder pattern)
    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Use `elasticity * inertia` as flexural rigidity (clears any direct EI)
    pub fn with_section(mut self, elasticity: f64, inertia: f64) -> Self {
        self.elasticity = elasticity;
        self.inertia = inertia;
        self.ei = None;
        self
    }

    /// Set support and return self (builder pattern)
    pub fn with_support(mut self, support: Support) -> Self {
        self.support = support;
        self
    }

    /// Flexural rigidity EI
    pub fn flexural_rigidity(&self) -> f64 {
        self.ei.unwrap_or(self.elasticity * self.inertia)
    }

    /// Force produced by a mass (or mass per length) under this beam's gravity
    pub fn force(&self, mass: f64) -> f64 {
        mass * self.gravity
    }

    pub fn is_cantilever(&self) -> bool {
        matches!(self.support, Support::Cantilever)
    }

    /// Default location for a newly created load: mid-span, or 0 when the
    /// length is not usable yet.
    pub fn safe_position(&self) -> f64 {
        if self.length.is_finite() && self.length > 0.0 {
            self.length / 2.0
        } else {
            0.0
        }
    }

    /// Distance a load moves per keyboard nudge (1% of the span)
    pub fn nudge_step(&self) -> f64 {
        self.length / 100.0
    }

    /// Validate beam properties.
    ///
    /// All numeric fields must be finite and non-negative; length and EI must
    /// be positive; simply supported positions must lie on the beam and differ.
    pub fn validate(&self) -> BeamResult<()> {
        let fields = [
            ("length", self.length),
            ("elasticity", self.elasticity),
            ("inertia", self.inertia),
            ("density", self.density),
            ("area", self.area),
            ("damping_ratio", self.damping_ratio),
            ("r_a", self.r_a),
            ("gravity", self.gravity),
        ];
        for (field, value) in fields {
            check_non_negative(field, value)?;
        }

        if self.length == 0.0 {
            return Err(BeamError::invalid_input("length", "0", "Length of beam cannot be 0"));
        }

        match self.ei {
            Some(ei) => {
                check_non_negative("ei", ei)?;
                if ei == 0.0 {
                    return Err(BeamError::invalid_input("ei", "0", "EI cannot be 0"));
                }
            }
            None => {
                if self.elasticity == 0.0 {
                    return Err(BeamError::invalid_input("elasticity", "0", "Elasticity cannot be 0"));
                }
                if self.inertia == 0.0 {
                    return Err(BeamError::invalid_input("inertia", "0", "Inertia cannot be 0"));
                }
            }
        }

        if let Support::SimplySupported {
            pinned_position,
            roller_position,
        } = self.support
        {
            check_non_negative("pinned_position", pinned_position)?;
            check_non_negative("roller_position", roller_position)?;
            if pinned_position > self.length {
                return Err(BeamError::invalid_input(
                    "pinned_position",
                    pinned_position.to_string(),
                    "Pinned support position must be less than or equal to length of beam",
                ));
            }
            if roller_position > self.length {
                return Err(BeamError::invalid_input(
                    "roller_position",
                    roller_position.to_string(),
                    "Roller support position must be less than or equal to length of beam",
                ));
            }
            if (pinned_position - roller_position).abs() < SUPPORT_SEPARATION_TOLERANCE {
                return Err(BeamError::invalid_input(
                    "roller_position",
                    roller_position.to_string(),
                    "Pinned and roller support positions must not be equal",
                ));
            }
        }

        Ok(())
    }
}

/// Reject NaN, infinities and negative values
pub(crate) fn check_non_negative(field: &str, value: f64) -> BeamResult<()> {
    if !value.is_finite() {
        return Err(BeamError::invalid_input(field, value.to_string(), "Must be a finite number"));
    }
    if value < 0.0 {
        return Err(BeamError::invalid_input(field, value.to_string(), "Must be at least 0"));
    }
    Ok(())
}
