//! Diagram Sampling
//!
//! A diagram is the sum of every load's response, evaluated on a grid that
//! contains evenly spaced points plus both ends of every load. Sampling the
//! load ends exactly is what lets point-load jumps and the kinks at the edges
//! of extended loads show up without smoothing.
//!
//! Every grid position yields two samples, `(x, before)` then `(x, after)`.
//! They are equal wherever the diagram is continuous, so a line plot draws a
//! vertical step only at real discontinuities.

use serde::{Deserialize, Serialize};

use super::single_load::Response;
use crate::beam::Beam;
use crate::loads::Load;

/// One plotted point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64) -> Self {
        Sample { x, y }
    }
}

/// Sorted x-positions for one diagram.
///
/// `divisions + 1` evenly spaced points over `[0, length]`, then the start and
/// end of every load. Duplicates are kept; they evaluate to identical pairs.
pub fn sample_positions(beam: &Beam, loads: &[Load], divisions: usize) -> Vec<f64> {
    let mut positions: Vec<f64> = (0..=divisions)
        .map(|i| i as f64 / divisions as f64 * beam.length)
        .collect();

    for load in loads {
        positions.push(load.location);
        positions.push(load.end());
    }

    positions.sort_by(f64::total_cmp);
    positions
}

/// Sum `evaluate` over all loads at every position.
///
/// Jumps add their `before` and `after` halves to separate running totals;
/// plain values add to both.
pub fn superpose<F>(positions: &[f64], loads: &[Load], evaluate: F) -> Vec<Sample>
where
    F: Fn(f64, &Load) -> Response,
{
    let mut samples = Vec::with_capacity(positions.len() * 2);

    for &x in positions {
        let (before, after) = loads.iter().fold((0.0, 0.0), |(before, after), load| {
            let response = evaluate(x, load);
            (before + response.before(), after + response.after())
        });
        samples.push(Sample::new(x, before));
        samples.push(Sample::new(x, after));
    }

    samples
}
