//! Support Reactions
//!
//! R1 is the left (pinned or fixed) reaction, R2 the right (roller) reaction.
//! A cantilever has no R2. Reactions are positive upward and add up over a
//! load collection by superposition.
//!
//! ## Formulas
//! - Cantilever: `R1 = F` (point) or `F·L` (extended)
//! - Simply supported, point: `R1 = F/Lb·(Lb − X)`
//! - Simply supported, extended: `R1 = F·L/Lb·(Lb − X − L/2)`
//! - Simply supported: `R2 = total force − R1`

use serde::{Deserialize, Serialize};

use crate::beam::{Beam, Support};
use crate::loads::{Load, LoadShape};

/// Support reactions for a whole load collection
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Reactions {
    /// Left (pinned or fixed) reaction
    pub r1: f64,
    /// Right (roller) reaction, absent for a cantilever
    pub r2: Option<f64>,
}

impl Reactions {
    /// Sum of all vertical reactions
    pub fn total(&self) -> f64 {
        self.r1 + self.r2.unwrap_or(0.0)
    }
}

/// Left reaction contributed by one load
pub fn reaction_left(load: &Load, beam: &Beam) -> f64 {
    let force = beam.force(load.mass);
    let start = load.location;
    let span = beam.length;

    match (beam.support, load.shape) {
        (Support::Cantilever, _) => load.total_force(beam),
        (Support::SimplySupported { .. }, LoadShape::Point) => force / span * (span - start),
        (
            Support::SimplySupported { .. },
            LoadShape::Distributed { extent } | LoadShape::Triangular { extent, .. },
        ) => force * extent / span * (span - start - extent / 2.0),
    }
}

/// Right reaction contributed by one load (`None` for a cantilever)
pub fn reaction_right(load: &Load, beam: &Beam) -> Option<f64> {
    match beam.support {
        Support::Cantilever => None,
        Support::SimplySupported { .. } => Some(load.total_force(beam) - reaction_left(load, beam)),
    }
}

/// Total reactions for a load collection (superposition)
///
/// ```rust
/// use beam_core::beam::Beam;
/// use beam_core::calculations::reactions::total_reactions;
/// use beam_core::loads::Load;
///
/// let beam = Beam::simply_supported(100.0, 2.1e11);
/// let reactions = total_reactions(&[Load::point("Load 1", 50.0, 10.0)], &beam);
/// assert!((reactions.r1 - 49.0).abs() < 1e-9);
/// assert!((reactions.r2.unwrap() - 49.0).abs() < 1e-9);
/// ```
pub fn total_reactions(loads: &[Load], beam: &Beam) -> Reactions {
    let r1 = loads.iter().map(|load| reaction_left(load, beam)).sum();
    let r2 = beam
        .support
        .has_right_reaction()
        .then(|| loads.iter().filter_map(|load| reaction_right(load, beam)).sum());
    Reactions { r1, r2 }
}
