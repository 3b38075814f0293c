//! # beam_core - Beam Mechanics Engine
//!
//! `beam_core` computes shear force, bending moment and deflection diagrams for
//! a single Euler-Bernoulli beam carrying point, distributed and triangular
//! loads. Each load's closed-form response is evaluated on a sampling grid and
//! the responses are summed. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: The engine reads an immutable beam and load snapshot
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Exact Jumps**: Point loads produce before/after sample pairs
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::{Beam, BeamAnalysis, DiagramKind, Load, AnalysisSettings};
//!
//! let beam = Beam::simply_supported(100.0, 2.1e11);
//! let loads = vec![Load::point("Load 1", 50.0, 10.0)];
//!
//! let results = BeamAnalysis::new(&beam, &loads, AnalysisSettings::default())
//!     .unwrap()
//!     .analyze();
//!
//! assert!((results.reactions.r1 - 49.0).abs() < 1e-9);
//! let moment = results.diagram(DiagramKind::Moment);
//! println!("peak moment {}", moment.formatter().format(moment.max().unwrap().y));
//! ```
//!
//! ## Modules
//!
//! - [`beam`] - Beam properties and support conditions
//! - [`loads`] - Load shapes and the ordered load collection
//! - [`calculations`] - Single-load formulas, reactions, sampling and analysis
//! - [`scale`] - Diagram scale selection
//! - [`format`] - Axis number formatting
//! - [`overlay`] - Label and marker positions drawn over the diagrams
//! - [`settings`] - Analysis settings
//! - [`document`] - Versioned JSON documents
//! - [`errors`] - Structured error types

pub mod beam;
pub mod calculations;
pub mod document;
pub mod errors;
pub mod format;
pub mod loads;
pub mod overlay;
pub mod scale;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use beam::{Beam, Support};
pub use calculations::{AnalysisResults, BeamAnalysis, Diagram, DiagramKind, Reactions, Sample};
pub use document::BeamDocument;
pub use errors::{BeamError, BeamResult};
pub use format::format;
pub use loads::{Load, LoadId, LoadSet, LoadShape, TallerEnd};
pub use scale::{scale, ScalePolicy};
pub use settings::AnalysisSettings;
