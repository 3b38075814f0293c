//! # Overlay Layout
//!
//! Positions for text drawn on top of the diagrams: reaction values under the
//! supports and arrow markers under each load. Coordinates are in diagram
//! space (beam x, plotted y), so any renderer can place them.

use serde::{Deserialize, Serialize};

use crate::beam::Beam;
use crate::calculations::Reactions;
use crate::format::format;
use crate::loads::Load;

/// R1 label sits at 2.5% of the span
pub const LEFT_LABEL_FRACTION: f64 = 0.025;
/// R2 label sits at 97.5% of the span
pub const RIGHT_LABEL_FRACTION: f64 = 0.975;
/// Value text height as a fraction of the diagram scale
pub const VALUE_HEIGHT_FRACTION: f64 = -0.40;
/// Arrow glyph height as a fraction of the diagram scale
pub const ARROW_HEIGHT_FRACTION: f64 = -0.35;

/// Markers per unit of `extent / length` on an extended load
const MARKERS_PER_SPAN: f64 = 20.0;

const UP_ARROW: &str = "\u{2191}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelRole {
    Value,
    Arrow,
}

/// A piece of text anchored at a diagram coordinate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub role: LabelRole,
}

/// Value and arrow labels for the support reactions.
///
/// R2 labels are produced only when the beam has a right reaction.
pub fn reaction_labels(reactions: &Reactions, beam: &Beam, scale: f64) -> Vec<OverlayLabel> {
    let mut labels = support_labels(reactions.r1, LEFT_LABEL_FRACTION * beam.length, scale);
    if let Some(r2) = reactions.r2 {
        labels.extend(support_labels(r2, RIGHT_LABEL_FRACTION * beam.length, scale));
    }
    labels
}

fn support_labels(reaction: f64, x: f64, scale: f64) -> Vec<OverlayLabel> {
    vec![
        OverlayLabel {
            x,
            y: VALUE_HEIGHT_FRACTION * scale,
            text: format(reaction)(reaction),
            role: LabelRole::Value,
        },
        OverlayLabel {
            x,
            y: ARROW_HEIGHT_FRACTION * scale,
            text: UP_ARROW.to_string(),
            role: LabelRole::Arrow,
        },
    ]
}

/// X-positions of the arrow markers drawn under a load.
///
/// A point load gets one marker. An extended load gets markers at both ends
/// and at least one per 5% of the beam in between, evenly spaced.
pub fn load_markers(load: &Load, beam: &Beam) -> Vec<f64> {
    if load.shape.is_point() {
        return vec![load.display_location()];
    }
    let extent = load.extent();
    let intervals = (extent / beam.length * MARKERS_PER_SPAN).floor() as usize + 1;
    (0..=intervals)
        .map(|i| load.location + i as f64 / intervals as f64 * extent)
        .collect()
}
