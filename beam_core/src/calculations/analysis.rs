//! Beam Analysis
//!
//! Checks the inputs once, then produces all three diagrams with their
//! scales, the support reactions and the reaction labels.
//!
//! ## Example
//! ```rust
//! use beam_core::beam::Beam;
//! use beam_core::calculations::{BeamAnalysis, DiagramKind};
//! use beam_core::loads::Load;
//! use beam_core::settings::AnalysisSettings;
//!
//! let beam = Beam::simply_supported(100.0, 2.1e11);
//! let loads = vec![Load::point("Load 1", 50.0, 10.0)];
//!
//! let analysis = BeamAnalysis::new(&beam, &loads, AnalysisSettings::default()).unwrap();
//! let results = analysis.analyze();
//!
//! let peak = results.diagram(DiagramKind::Moment).max().unwrap();
//! assert!((peak.y - 2450.0).abs() < 1e-9);
//! assert!((results.reactions.r1 - 49.0).abs() < 1e-9);
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::reactions::{total_reactions, Reactions};
use super::sampling::Sample;
use super::{sample_diagram, DiagramKind};
use crate::beam::Beam;
use crate::errors::{BeamError, BeamResult};
use crate::format::NumberFormatter;
use crate::loads::Load;
use crate::overlay::{reaction_labels, OverlayLabel};
use crate::scale::scale_with;
use crate::settings::AnalysisSettings;

/// One sampled diagram and the scale chosen for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    pub kind: DiagramKind,
    /// `(x, before)`, `(x, after)` pairs in ascending x
    pub samples: Vec<Sample>,
    /// Half-range of the y axis
    pub scale: f64,
}

impl Diagram {
    /// Sample with the largest y
    pub fn max(&self) -> Option<Sample> {
        self.samples.iter().copied().max_by(|a, b| a.y.total_cmp(&b.y))
    }

    /// Sample with the smallest y
    pub fn min(&self) -> Option<Sample> {
        self.samples.iter().copied().min_by(|a, b| a.y.total_cmp(&b.y))
    }

    /// Formatter for tick labels on this diagram's axis
    pub fn formatter(&self) -> NumberFormatter {
        NumberFormatter::for_scale(self.scale)
    }
}

/// Everything a renderer needs for one beam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub reactions: Reactions,
    /// Reaction labels placed against the deflection diagram's scale
    pub reaction_labels: Vec<OverlayLabel>,
    pub deflection: Diagram,
    pub moment: Diagram,
    pub shear: Diagram,
}

impl AnalysisResults {
    pub fn diagram(&self, kind: DiagramKind) -> &Diagram {
        match kind {
            DiagramKind::Deflection => &self.deflection,
            DiagramKind::Moment => &self.moment,
            DiagramKind::Shear => &self.shear,
        }
    }
}

/// Checked analysis over an immutable beam and load snapshot
#[derive(Debug, Clone)]
pub struct BeamAnalysis<'a> {
    beam: &'a Beam,
    loads: &'a [Load],
    settings: AnalysisSettings,
}

impl<'a> BeamAnalysis<'a> {
    /// Create an analysis after checking every precondition.
    ///
    /// Returns [`BeamError::PreconditionViolation`] when the beam, a load, the
    /// load names or the settings are invalid.
    pub fn new(beam: &'a Beam, loads: &'a [Load], settings: AnalysisSettings) -> BeamResult<Self> {
        check_preconditions(beam, loads, &settings).map_err(|err| {
            log::warn!("analysis rejected: {}", err);
            BeamError::precondition(err.to_string())
        })?;
        Ok(BeamAnalysis { beam, loads, settings })
    }

    pub fn beam(&self) -> &Beam {
        self.beam
    }

    pub fn loads(&self) -> &[Load] {
        self.loads
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// Total support reactions
    pub fn reactions(&self) -> Reactions {
        total_reactions(self.loads, self.beam)
    }

    /// Sample one diagram and pick its scale
    pub fn diagram(&self, kind: DiagramKind) -> Diagram {
        let samples = sample_diagram(kind, self.beam, self.loads, &self.settings);
        let scale = scale_with(&samples, self.settings.scale_policy);
        log::debug!("{} diagram: {} samples, scale {}", kind, samples.len(), scale);
        Diagram { kind, samples, scale }
    }

    /// Reaction labels for a diagram plotted at `scale`
    pub fn reaction_labels(&self, scale: f64) -> Vec<OverlayLabel> {
        reaction_labels(&self.reactions(), self.beam, scale)
    }

    /// Run every diagram and collect the results
    pub fn analyze(&self) -> AnalysisResults {
        log::debug!(
            "analyzing {} beam of length {} with {} loads",
            self.beam.support,
            self.beam.length,
            self.loads.len()
        );
        let reactions = self.reactions();
        let deflection = self.diagram(DiagramKind::Deflection);
        let moment = self.diagram(DiagramKind::Moment);
        let shear = self.diagram(DiagramKind::Shear);

        AnalysisResults {
            reaction_labels: reaction_labels(&reactions, self.beam, deflection.scale),
            reactions,
            deflection,
            moment,
            shear,
        }
    }
}

fn check_preconditions(beam: &Beam, loads: &[Load], settings: &AnalysisSettings) -> BeamResult<()> {
    settings.validate()?;
    beam.validate()?;

    let mut names = HashSet::with_capacity(loads.len());
    for load in loads {
        if !names.insert(load.name.as_str()) {
            return Err(BeamError::duplicate_name(&load.name));
        }
        load.validate(beam)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::TallerEnd;
    use crate::scale::ScalePolicy;
    use approx::assert_abs_diff_eq;

    fn loads() -> Vec<Load> {
        vec![
            Load::point("Load 1", 25.0, 10.0),
            Load::distributed("Load 2", 40.0, 20.0, 1.0),
            Load::triangular("Load 3", 70.0, 30.0, 0.5, TallerEnd::Right),
        ]
    }

    #[test]
    fn test_rejects_invalid_beam() {
        let beam = Beam::simply_supported(0.0, 2.1e11);
        let err = BeamAnalysis::new(&beam, &[], AnalysisSettings::default()).unwrap_err();
        assert_eq!(err.error_code(), "PRECONDITION_VIOLATION");
    }

    #[test]
    fn test_rejects_out_of_bounds_load() {
        let beam = Beam::simply_supported(10.0, 1.0);
        let loads = [Load::distributed("D", 8.0, 5.0, 1.0)];
        assert!(BeamAnalysis::new(&beam, &loads, AnalysisSettings::default()).is_err());
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let beam = Beam::default();
        let loads = [Load::point("Same", 1.0, 1.0), Load::point("Same", 2.0, 1.0)];
        let err = BeamAnalysis::new(&beam, &loads, AnalysisSettings::default()).unwrap_err();
        match err {
            BeamError::PreconditionViolation { reason } => assert!(reason.contains("Same")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_analyze_shapes() {
        let beam = Beam::default();
        let loads = loads();
        let analysis = BeamAnalysis::new(&beam, &loads, AnalysisSettings::default()).unwrap();
        let results = analysis.analyze();

        for kind in DiagramKind::ALL {
            let diagram = results.diagram(kind);
            assert_eq!(diagram.kind, kind);
            assert_eq!(diagram.samples.len(), 2 * (101 + 6));
            assert!(diagram.scale >= diagram.max().unwrap().y.abs());
            assert!(diagram.scale >= diagram.min().unwrap().y.abs());
        }
        assert_eq!(results.reaction_labels.len(), 4);
    }

    #[test]
    fn test_moment_ends_at_zero() {
        let loads = loads();
        for beam in [Beam::default(), Beam::cantilever(100.0, 2.1e11)] {
            let analysis = BeamAnalysis::new(&beam, &loads, AnalysisSettings::default()).unwrap();
            let moment = analysis.diagram(DiagramKind::Moment);
            let last = moment.samples.last().unwrap();
            assert_eq!(last.x, 100.0);
            assert_abs_diff_eq!(last.y, 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_empty_load_set_is_flat() {
        let beam = Beam::default();
        let analysis = BeamAnalysis::new(&beam, &[], AnalysisSettings::default()).unwrap();
        let results = analysis.analyze();
        assert_eq!(results.shear.scale, 1.0);
        assert!(results.deflection.samples.iter().all(|s| s.y == 0.0));
        assert_eq!(results.reaction_labels[0].text, "0");
    }

    #[test]
    fn test_noise_floor_from_settings() {
        let beam = Beam::default();
        let loads = [Load::point("Feather", 50.0, 1e-12)];

        let clamped = BeamAnalysis::new(&beam, &loads, AnalysisSettings::default()).unwrap();
        let deflection = clamped.diagram(DiagramKind::Deflection);
        assert!(deflection.samples.iter().all(|s| s.y == 0.0));
        assert_eq!(deflection.scale, 1.0);

        let settings = AnalysisSettings {
            deflection_noise_floor: 0.0,
            ..AnalysisSettings::default()
        };
        let unclamped = BeamAnalysis::new(&beam, &loads, settings).unwrap();
        let deflection = unclamped.diagram(DiagramKind::Deflection);
        let midspan = deflection.samples.iter().find(|s| s.x == 50.0).unwrap();
        assert!(midspan.y < 0.0);
    }

    #[test]
    fn test_power_of_two_policy_applied() {
        let beam = Beam::default();
        let loads = [Load::point("Load 1", 50.0, 10.0)];
        let settings = AnalysisSettings::default().with_scale_policy(ScalePolicy::PowerOfTwo);
        let analysis = BeamAnalysis::new(&beam, &loads, settings).unwrap();
        // Peak moment 2450 rounds up to 4096
        assert_eq!(analysis.diagram(DiagramKind::Moment).scale, 4096.0);
    }

    #[test]
    fn test_results_serialize() {
        let beam = Beam::cantilever(10.0, 1000.0);
        let loads = [Load::point("Tip", 10.0, 5.0)];
        let results = BeamAnalysis::new(&beam, &loads, AnalysisSettings::default())
            .unwrap()
            .analyze();
        let json = serde_json::to_string(&results).unwrap();
        let parsed: AnalysisResults = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.reactions, results.reactions);
        assert_eq!(parsed.shear.samples.len(), results.shear.samples.len());
    }

    #[test]
    fn test_analysis_is_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BeamAnalysis<'static>>();
        assert_send_sync::<AnalysisResults>();
    }
}
