//! Load shape definitions
//!
//! A load is either concentrated at a point or spread over an interval. The
//! shape carries only the fields that make sense for it, so a point load has
//! no extent and only a triangular load has a taller end.

use serde::{Deserialize, Serialize};

/// Which end of a triangular load is taller.
///
/// Only affects how the load is drawn; the magnitude formulas treat a
/// triangular load exactly like a distributed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TallerEnd {
    #[default]
    Left,
    Right,
}

impl TallerEnd {
    pub fn display_name(&self) -> &'static str {
        match self {
            TallerEnd::Left => "Left",
            TallerEnd::Right => "Right",
        }
    }
}

impl std::fmt::Display for TallerEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// How a load is distributed along the beam
///
/// # Example
/// ```
/// use beam_core::loads::{LoadShape, TallerEnd};
///
/// let shape = LoadShape::Triangular { extent: 4.0, taller_end: TallerEnd::Right };
/// assert_eq!(shape.extent(), 4.0);
/// assert_eq!(shape.type_name(), "Triangular");
/// assert!(!shape.is_point());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LoadShape {
    /// Concentrated force at the load location
    Point,

    /// Uniform intensity over `[location, location + extent]`
    Distributed { extent: f64 },

    /// Linearly varying intensity over `[location, location + extent]`
    Triangular { extent: f64, taller_end: TallerEnd },
}

impl Default for LoadShape {
    fn default() -> Self {
        LoadShape::Point
    }
}

impl LoadShape {
    /// Length covered by the load (0 for point loads)
    pub fn extent(&self) -> f64 {
        match self {
            LoadShape::Point => 0.0,
            LoadShape::Distributed { extent } | LoadShape::Triangular { extent, .. } => *extent,
        }
    }

    pub fn is_point(&self) -> bool {
        matches!(self, LoadShape::Point)
    }

    pub fn taller_end(&self) -> Option<TallerEnd> {
        match self {
            LoadShape::Triangular { taller_end, .. } => Some(*taller_end),
            _ => None,
        }
    }

    /// Get type name for UI
    pub fn type_name(&self) -> &'static str {
        match self {
            LoadShape::Point => "Point",
            LoadShape::Distributed { .. } => "Distributed",
            LoadShape::Triangular { .. } => "Triangular",
        }
    }
}

impl std::fmt::Display for LoadShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent() {
        assert_eq!(LoadShape::Point.extent(), 0.0);
        assert_eq!(LoadShape::Distributed { extent: 3.0 }.extent(), 3.0);
        assert_eq!(
            LoadShape::Triangular { extent: 2.5, taller_end: TallerEnd::Left }.extent(),
            2.5
        );
    }

    #[test]
    fn test_taller_end_only_on_triangular() {
        assert_eq!(LoadShape::Point.taller_end(), None);
        assert_eq!(LoadShape::Distributed { extent: 1.0 }.taller_end(), None);
        assert_eq!(
            LoadShape::Triangular { extent: 1.0, taller_end: TallerEnd::Right }.taller_end(),
            Some(TallerEnd::Right)
        );
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&LoadShape::Distributed { extent: 5.0 }).unwrap();
        assert_eq!(json, r#"{"type":"Distributed","extent":5.0}"#);

        let parsed: LoadShape =
            serde_json::from_str(r#"{"type":"Triangular","extent":2.0,"taller_end":"Right"}"#).unwrap();
        assert_eq!(parsed, LoadShape::Triangular { extent: 2.0, taller_end: TallerEnd::Right });

        let point: LoadShape = serde_json::from_str(r#"{"type":"Point"}"#).unwrap();
        assert!(point.is_point());
    }
}
