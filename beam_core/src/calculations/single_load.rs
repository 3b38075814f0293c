//! Single-Load Response
//!
//! Shear, moment and deflection produced by one load at one position. Every
//! result is an exact closed-form polynomial; totals for a load collection
//! come from adding these up (see [`super::sampling`]).
//!
//! ## Notation
//!
//! - `F` = `mass * gravity` (per unit length for extended loads)
//! - `X` = load location (left end)
//! - `L` = load extent (0 for point loads)
//! - `Lb` = beam length
//!
//! ## Boundary conditions
//!
//! - Cantilever: fixed at x = 0, so deflection and slope vanish there and the
//!   fixed end carries the whole load.
//! - Simply supported: the cantilever solution is corrected so that moment is
//!   zero at x = Lb and deflection is zero at both ends.
//!
//! Downward force is positive. Deflection is negative downward.
//!
//! Triangular loads use the distributed-load formulas; the taller end only
//! changes how the load is drawn.
//!
//! These functions do not validate. A zero length or zero EI yields
//! `inf`/`NaN`; use [`super::BeamAnalysis`] for checked evaluation.

use serde::{Deserialize, Serialize};

use crate::beam::{Beam, Support};
use crate::loads::{Load, LoadShape};

/// Deflections smaller than this are reported as exactly zero
pub const DEFLECTION_NOISE_FLOOR: f64 = 1e-18;

/// Value of a quantity at one position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Response {
    /// Continuous at this position
    Value(f64),
    /// Jump discontinuity: `before` holds left of x, `after` right of x
    Jump { before: f64, after: f64 },
}

impl Response {
    /// Value approaching from the left
    pub fn before(&self) -> f64 {
        match *self {
            Response::Value(y) => y,
            Response::Jump { before, .. } => before,
        }
    }

    /// Value approaching from the right
    pub fn after(&self) -> f64 {
        match *self {
            Response::Value(y) => y,
            Response::Jump { after, .. } => after,
        }
    }

    pub fn is_jump(&self) -> bool {
        matches!(self, Response::Jump { .. })
    }

    /// Shift both sides by `offset`
    fn offset(self, offset: f64) -> Self {
        match self {
            Response::Value(y) => Response::Value(y + offset),
            Response::Jump { before, after } => Response::Jump {
                before: before + offset,
                after: after + offset,
            },
        }
    }
}

impl From<f64> for Response {
    fn from(y: f64) -> Self {
        Response::Value(y)
    }
}

/// Shear force at `x`.
///
/// Exactly at a point load this is a [`Response::Jump`] of size `F`.
///
/// # Formulas
/// - Point, cantilever: `F` for x < X, `0` for x > X
/// - Extended, cantilever: `F·L` before, `F·(X + L − x)` inside, `0` after
/// - Simply supported: the cantilever value shifted by `−R2`
pub fn shear(x: f64, load: &Load, beam: &Beam) -> Response {
    let force = beam.force(load.mass);
    let start = load.location;
    let span = beam.length;

    match load.shape {
        LoadShape::Point => {
            let cantilever = if x < start {
                Response::Value(force)
            } else if x == start {
                Response::Jump {
                    before: force,
                    after: 0.0,
                }
            } else {
                Response::Value(0.0)
            };
            match beam.support {
                Support::Cantilever => cantilever,
                Support::SimplySupported { .. } => cantilever.offset(-force * start / span),
            }
        }
        LoadShape::Distributed { extent } | LoadShape::Triangular { extent, .. } => {
            let cantilever = if x < start {
                force * extent
            } else if x < start + extent {
                force * (start + extent - x)
            } else {
                0.0
            };
            match beam.support {
                Support::Cantilever => Response::Value(cantilever),
                Support::SimplySupported { .. } => {
                    Response::Value(cantilever - force * extent * (2.0 * start + extent) / 2.0 / span)
                }
            }
        }
    }
}

/// Bending moment at `x`. Zero at x = Lb for both support types.
///
/// # Formulas
/// - Point, cantilever: `F·(x − X)` for x < X, else `0`
/// - Extended, cantilever: `F·L·(x − X − L/2)` before,
///   `F·(L·x − X·L + X·x − (L² + X² + x²)/2)` inside, `0` after
/// - Simply supported: the cantilever value minus `R2·(x − Lb)`
pub fn moment(x: f64, load: &Load, beam: &Beam) -> f64 {
    let force = beam.force(load.mass);
    let start = load.location;
    let span = beam.length;

    match load.shape {
        LoadShape::Point => {
            let cantilever = if x < start { force * (x - start) } else { 0.0 };
            match beam.support {
                Support::Cantilever => cantilever,
                Support::SimplySupported { .. } => cantilever - force * start / span * (x - span),
            }
        }
        LoadShape::Distributed { extent } | LoadShape::Triangular { extent, .. } => {
            let l = extent;
            let cantilever = if x < start {
                force * l * (x - start - l / 2.0)
            } else if x < start + l {
                force * (l * x - start * l + start * x - (l * l + start * start + x * x) / 2.0)
            } else {
                0.0
            };
            match beam.support {
                Support::Cantilever => cantilever,
                Support::SimplySupported { .. } => {
                    cantilever - force * l * (2.0 * start + l) / 2.0 / span * (x - span)
                }
            }
        }
    }
}

/// Deflection at `x`, clamped to zero below [`DEFLECTION_NOISE_FLOOR`].
pub fn deflection(x: f64, load: &Load, beam: &Beam) -> f64 {
    deflection_with_floor(x, load, beam, DEFLECTION_NOISE_FLOOR)
}

/// Deflection at `x` with an explicit noise floor.
///
/// Double integral of the moment divided by EI. The floor suppresses the
/// floating point residue left when a load sits on a zero-deflection point.
pub fn deflection_with_floor(x: f64, load: &Load, beam: &Beam, noise_floor: f64) -> f64 {
    let force = beam.force(load.mass);
    let ei = beam.flexural_rigidity();
    let simply_supported = !beam.is_cantilever();

    let shape = match load.shape {
        LoadShape::Point => point_deflection_shape(x, load.location, beam.length, simply_supported),
        LoadShape::Distributed { extent } | LoadShape::Triangular { extent, .. } => {
            extended_deflection_shape(x, load.location, extent, beam.length, simply_supported)
        }
    };

    let y = shape * force / ei;
    if y.abs() < noise_floor {
        0.0
    } else {
        y
    }
}

/// Point load deflection times EI/F
fn point_deflection_shape(x: f64, a: f64, span: f64, simply_supported: bool) -> f64 {
    let mut y = if x < a {
        (x.powi(3) - 3.0 * x * x * a) / 6.0
    } else {
        (a.powi(3) - 3.0 * a * a * x) / 6.0
    };

    if simply_supported {
        y += (-2.0 * span * span * a * x + 3.0 * span * a * x * x + 3.0 * span * x * a * a
            - a * x.powi(3)
            - x * a.powi(3))
            / 6.0
            / span;
    }
    y
}

/// Extended load deflection times EI/F
fn extended_deflection_shape(x: f64, a: f64, l: f64, span: f64, simply_supported: bool) -> f64 {
    let mut y = if x < a {
        (-3.0 * l * l * x * x - 6.0 * l * a * x * x + 2.0 * l * x.powi(3)) / 12.0
    } else if x < a + l {
        (-(a - x).powi(4) - 6.0 * l * l * x * x - 12.0 * l * a * x * x + 4.0 * l * x.powi(3)) / 24.0
    } else {
        ((l + a).powi(4) - a.powi(4) - 4.0 * l.powi(3) * x - 12.0 * l * l * a * x - 12.0 * l * a * a * x)
            / 24.0
    };

    if simply_supported {
        y += (x * a.powi(4) - x * (l + a).powi(4) - 2.0 * l * l * x.powi(3) - 4.0 * l * x.powi(3) * a
            - 4.0 * l * l * span * span * x
            + 4.0 * l.powi(3) * span * x
            + 6.0 * l * l * span * x * x
            - 8.0 * l * span * span * x * a
            + 12.0 * l * l * span * x * a
            + 12.0 * l * span * x * a * a
            + 12.0 * l * span * a * x * x)
            / 24.0
            / span;
    }
    y
}
