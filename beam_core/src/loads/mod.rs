//! Loads applied to the beam
//!
//! # Overview
//!
//! - [`Load`] - A named load with location, mass and shape
//! - [`LoadShape`] - Point, distributed or triangular
//! - [`LoadSet`] - Ordered collection with unique names and stable ids
//!
//! Locations are stored in internal coordinates: `location` is the left end
//! of the load. Front ends show the midpoint instead; see
//! [`Load::display_location`] and [`Load::from_display_location`].
//!
//! # Example
//!
//! ```
//! use beam_core::beam::Beam;
//! use beam_core::loads::{Load, LoadSet};
//!
//! let beam = Beam::simply_supported(100.0, 2.1e11);
//! let mut loads = LoadSet::new();
//! loads.add(Load::point("Load 1", 50.0, 10.0)).unwrap();
//! loads.add(Load::distributed("Load 2", 20.0, 10.0, 1.5)).unwrap();
//!
//! assert!(loads.validate(&beam).is_ok());
//! assert_eq!(loads.free_name(), "Load 3");
//! ```

pub mod load_set;
pub mod load_types;

pub use load_set::{LoadId, LoadSet};
pub use load_types::{LoadShape, TallerEnd};

use serde::{Deserialize, Serialize};

use crate::beam::{check_non_negative, Beam};
use crate::errors::{BeamError, BeamResult};

/// Slack allowed when checking that a load ends on the beam
const BOUNDS_TOLERANCE: f64 = 1e-10;

/// A single load on the beam
///
/// # JSON Format
/// ```json
/// {
///   "name": "Load 1",
///   "location": 40.0,
///   "mass": 10.0,
///   "shape": { "type": "Distributed", "extent": 20.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Load {
    /// Unique name within a collection
    pub name: String,

    /// Left end of the load (internal coordinates)
    pub location: f64,

    /// Mass, or mass per unit length for extended loads
    pub mass: f64,

    pub shape: LoadShape,

    /// Display color, not used by any computation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Load {
    /// Create a point load at `location`
    pub fn point(name: impl Into<String>, location: f64, mass: f64) -> Self {
        Load {
            name: name.into(),
            location,
            mass,
            shape: LoadShape::Point,
            color: None,
        }
    }

    /// Create a uniform load starting at `location`
    pub fn distributed(name: impl Into<String>, location: f64, extent: f64, mass: f64) -> Self {
        Load {
            name: name.into(),
            location,
            mass,
            shape: LoadShape::Distributed { extent },
            color: None,
        }
    }

    /// Create a triangular load starting at `location`
    pub fn triangular(
        name: impl Into<String>,
        location: f64,
        extent: f64,
        mass: f64,
        taller_end: TallerEnd,
    ) -> Self {
        Load {
            name: name.into(),
            location,
            mass,
            shape: LoadShape::Triangular { extent, taller_end },
            color: None,
        }
    }

    /// Create a load from the user-facing midpoint location
    ///
    /// ```
    /// use beam_core::loads::{Load, LoadShape};
    ///
    /// let load = Load::from_display_location("Load 1", 50.0, 10.0, LoadShape::Distributed { extent: 20.0 });
    /// assert_eq!(load.location, 40.0);
    /// assert_eq!(load.display_location(), 50.0);
    /// ```
    pub fn from_display_location(name: impl Into<String>, display: f64, mass: f64, shape: LoadShape) -> Self {
        Load {
            name: name.into(),
            location: display - shape.extent() / 2.0,
            mass,
            shape,
            color: None,
        }
    }

    /// Set color and return self (builder pattern)
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Length covered by the load (0 for point loads)
    pub fn extent(&self) -> f64 {
        self.shape.extent()
    }

    /// Right end of the load
    pub fn end(&self) -> f64 {
        self.location + self.extent()
    }

    /// Midpoint of the load, the location shown to users
    pub fn display_location(&self) -> f64 {
        self.location + self.extent() / 2.0
    }

    /// Total downward force: `F` for point loads, `F * extent` otherwise
    pub fn total_force(&self, beam: &Beam) -> f64 {
        let force = beam.force(self.mass);
        match self.shape {
            LoadShape::Point => force,
            _ => force * self.extent(),
        }
    }

    /// Validate this load against a beam
    pub fn validate(&self, beam: &Beam) -> BeamResult<()> {
        let field = |name: &str| format!("{}.{}", self.name, name);

        if self.name.trim().is_empty() {
            return Err(BeamError::invalid_input("name", "", "Load name cannot be empty"));
        }
        check_non_negative(&field("location"), self.location)?;
        check_non_negative(&field("mass"), self.mass)?;

        if !self.shape.is_point() {
            let extent = self.extent();
            check_non_negative(&field("extent"), extent)?;
            if extent == 0.0 {
                return Err(BeamError::invalid_input(
                    field("extent"),
                    "0",
                    format!("A {} load must have a nonzero length", self.shape.type_name()),
                ));
            }
        }

        if self.end() > beam.length + BOUNDS_TOLERANCE {
            let reason = if self.shape.is_point() {
                format!("{} must be located at or before the end of the beam", self.name)
            } else {
                format!("Right endpoint of {} is past the end of the beam", self.name)
            };
            return Err(BeamError::invalid_input(field("location"), self.end().to_string(), reason));
        }

        Ok(())
    }

    /// One-line summary for load lists
    ///
    /// ```
    /// use beam_core::loads::Load;
    ///
    /// let load = Load::point("Load 1", 50.0, 10.0);
    /// assert_eq!(load.describe(), "Name = Load 1, Type = Point: Location = 50, Mass = 10");
    /// ```
    pub fn describe(&self) -> String {
        let mut text = format!(
            "Name = {}, Type = {}: Location = {}, Mass = {}",
            self.name,
            self.shape.type_name(),
            self.display_location(),
            self.mass
        );
        if !self.shape.is_point() {
            text.push_str(&format!(", Length = {}", self.extent()));
        }
        if let Some(taller_end) = self.shape.taller_end() {
            text.push_str(&format!(", Taller End = {}", taller_end));
        }
        text
    }
}
