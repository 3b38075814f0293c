//! # Beam Calculations
//!
//! - [`single_load`] - Shear, moment and deflection of one load at one position
//! - [`reactions`] - Support reactions by superposition
//! - [`sampling`] - Sampling grid and superposition of all loads
//! - [`analysis`] - Checked façade producing every diagram at once
//!
//! Each diagram kind reads the same immutable beam and load snapshot, so the
//! three diagrams can be computed independently of each other.

pub mod analysis;
pub mod reactions;
pub mod sampling;
pub mod single_load;

use serde::{Deserialize, Serialize};

use crate::beam::Beam;
use crate::loads::Load;
use crate::settings::AnalysisSettings;

// Re-export commonly used types
pub use analysis::{AnalysisResults, BeamAnalysis, Diagram};
pub use reactions::{total_reactions, Reactions};
pub use sampling::{sample_positions, superpose, Sample};
pub use single_load::Response;

/// Quantity plotted by a diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagramKind {
    Shear,
    Moment,
    Deflection,
}

impl DiagramKind {
    /// All diagram kinds in display order
    pub const ALL: [DiagramKind; 3] = [DiagramKind::Deflection, DiagramKind::Moment, DiagramKind::Shear];

    pub fn display_name(&self) -> &'static str {
        match self {
            DiagramKind::Shear => "Shear Force",
            DiagramKind::Moment => "Bending Moment",
            DiagramKind::Deflection => "Deflection",
        }
    }

    /// Response of one load at `x`
    pub fn evaluate(&self, x: f64, load: &Load, beam: &Beam, settings: &AnalysisSettings) -> Response {
        match self {
            DiagramKind::Shear => single_load::shear(x, load, beam),
            DiagramKind::Moment => single_load::moment(x, load, beam).into(),
            DiagramKind::Deflection => {
                single_load::deflection_with_floor(x, load, beam, settings.deflection_noise_floor).into()
            }
        }
    }
}

impl std::fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Sample one diagram without precondition checks.
///
/// Prefer [`BeamAnalysis`] unless the inputs are already known to be valid.
pub fn sample_diagram(
    kind: DiagramKind,
    beam: &Beam,
    loads: &[Load],
    settings: &AnalysisSettings,
) -> Vec<Sample> {
    let positions = sample_positions(beam, loads, settings.sample_divisions);
    superpose(&positions, loads, |x, load| kind.evaluate(x, load, beam, settings))
}
