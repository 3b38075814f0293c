//! # Beam Documents
//!
//! A `BeamDocument` is the saved form of one beam: its properties, its loads
//! and the analysis settings, plus a small metadata header. Documents are
//! human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! BeamDocument
//! ├── schema_version
//! ├── meta: DocumentMetadata (title, timestamps)
//! ├── beam: Beam
//! ├── loads: LoadSet (serialized as an ordered array)
//! └── settings: AnalysisSettings
//! ```
//!
//! ## Example
//!
//! ```rust
//! use beam_core::beam::Beam;
//! use beam_core::document::BeamDocument;
//! use beam_core::loads::Load;
//!
//! let mut doc = BeamDocument::new("Footbridge", Beam::default());
//! doc.add_load(Load::point("Load 1", 50.0, 10.0)).unwrap();
//!
//! let json = doc.to_json().unwrap();
//! let loaded = BeamDocument::from_json(&json).unwrap();
//! assert_eq!(loaded.loads.len(), 1);
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::beam::Beam;
use crate::calculations::{AnalysisResults, BeamAnalysis};
use crate::errors::{BeamError, BeamResult};
use crate::loads::{Load, LoadId, LoadSet};
use crate::settings::AnalysisSettings;

/// Current schema version for beam documents
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root document container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamDocument {
    /// Schema version (for migration compatibility)
    pub schema_version: String,

    pub meta: DocumentMetadata,

    pub beam: Beam,

    /// Loads in insertion order
    #[serde(default)]
    pub loads: LoadSet,

    #[serde(default)]
    pub settings: AnalysisSettings,
}

/// Header stored with every document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: String,

    /// When the document was created
    pub created: DateTime<Utc>,

    /// When the document was last modified
    pub modified: DateTime<Utc>,
}

#[derive(Deserialize)]
struct VersionProbe {
    schema_version: String,
}

impl BeamDocument {
    /// Create a document with no loads and default settings
    pub fn new(title: impl Into<String>, beam: Beam) -> Self {
        let now = Utc::now();
        BeamDocument {
            schema_version: SCHEMA_VERSION.to_string(),
            meta: DocumentMetadata {
                title: title.into(),
                created: now,
                modified: now,
            },
            beam,
            loads: LoadSet::new(),
            settings: AnalysisSettings::default(),
        }
    }

    /// Add a load at the end of the load list.
    ///
    /// Returns the id assigned to the load.
    pub fn add_load(&mut self, load: Load) -> BeamResult<LoadId> {
        let id = self.loads.add(load)?;
        self.touch();
        Ok(id)
    }

    /// Replace a load in place
    pub fn replace_load(&mut self, id: LoadId, load: Load) -> BeamResult<()> {
        self.loads.replace(id, load)?;
        self.touch();
        Ok(())
    }

    /// Remove a load by id.
    ///
    /// Returns the removed load.
    pub fn remove_load(&mut self, id: LoadId) -> BeamResult<Load> {
        let load = self.loads.remove(id)?;
        self.touch();
        Ok(load)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Check the beam, every load and the settings
    pub fn validate(&self) -> BeamResult<()> {
        self.settings.validate()?;
        self.beam.validate()?;
        self.loads.validate(&self.beam)
    }

    /// Checked analysis of the current beam and loads
    pub fn analysis(&self) -> BeamResult<BeamAnalysis<'_>> {
        BeamAnalysis::new(&self.beam, self.loads.loads(), self.settings)
    }

    /// Shorthand for `analysis()?.analyze()`
    pub fn analyze(&self) -> BeamResult<AnalysisResults> {
        Ok(self.analysis()?.analyze())
    }

    pub fn to_json(&self) -> BeamResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a document, rejecting an incompatible schema version.
    ///
    /// Duplicate load names surface as a [`BeamError::SerializationError`].
    pub fn from_json(json: &str) -> BeamResult<Self> {
        let probe: VersionProbe = serde_json::from_str(json)?;
        validate_version(&probe.schema_version)?;

        let document: BeamDocument = serde_json::from_str(json)?;
        log::debug!(
            "loaded document '{}' with {} loads",
            document.meta.title,
            document.loads.len()
        );
        Ok(document)
    }

    /// Save to `path` through a temporary file and a rename.
    pub fn save(&self, path: &Path) -> BeamResult<()> {
        let json = self.to_json()?;
        let tmp_path = path.with_extension("json.tmp");

        let result = write_synced(&tmp_path, json.as_bytes()).and_then(|()| {
            fs::rename(&tmp_path, path)
                .map_err(|e| BeamError::file_error("rename to final", path.display().to_string(), e.to_string()))
        });
        if result.is_err() {
            let _ = fs::remove_file(&tmp_path);
        }
        result?;

        log::info!("saved document to {}", path.display());
        Ok(())
    }

    /// Read and parse a document file
    pub fn load(path: &Path) -> BeamResult<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| BeamError::file_error("read", path.display().to_string(), e.to_string()))?;
        Self::from_json(&contents).map_err(|err| match err {
            BeamError::SerializationError { reason } => {
                BeamError::serialization(format!("Invalid document {}: {}", path.display(), reason))
            }
            other => other,
        })
    }
}

impl Default for BeamDocument {
    fn default() -> Self {
        BeamDocument::new("Untitled", Beam::default())
    }
}

/// Create `path`, write `bytes` and sync to disk
fn write_synced(path: &Path, bytes: &[u8]) -> BeamResult<()> {
    let display = || path.display().to_string();
    let mut file =
        File::create(path).map_err(|e| BeamError::file_error("create temp file", display(), e.to_string()))?;
    file.write_all(bytes)
        .map_err(|e| BeamError::file_error("write temp file", display(), e.to_string()))?;
    file.sync_all()
        .map_err(|e| BeamError::file_error("sync temp file", display(), e.to_string()))
}

/// Major versions must match; a differing minor version only warns.
fn validate_version(file_version: &str) -> BeamResult<()> {
    let mismatch = || BeamError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .map(str::parse::<u32>)
        .collect::<Result<_, _>>()
        .map_err(|_| mismatch())?;
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|part| part.parse().ok())
        .collect();

    match (file_parts.first(), current_parts.first()) {
        (Some(file_major), Some(current_major)) if file_major == current_major => {}
        _ => return Err(mismatch()),
    }

    if file_parts.get(1) != current_parts.get(1) {
        log::warn!(
            "document schema {} differs from {} in minor version",
            file_version,
            SCHEMA_VERSION
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beam::Support;
    use crate::loads::TallerEnd;
    use crate::scale::ScalePolicy;

    fn sample_document() -> BeamDocument {
        let mut doc = BeamDocument::new("Test Beam", Beam::cantilever(10.0, 1000.0));
        doc.add_load(Load::point("Tip", 10.0, 5.0)).unwrap();
        doc.add_load(Load::triangular("Wedge", 2.0, 4.0, 1.5, TallerEnd::Right).with_color("#ff0000"))
            .unwrap();
        doc.settings = doc.settings.with_scale_policy(ScalePolicy::PowerOfTwo);
        doc
    }

    #[test]
    fn test_document_creation() {
        let doc = BeamDocument::new("Untitled", Beam::default());
        assert_eq!(doc.schema_version, SCHEMA_VERSION);
        assert_eq!(doc.meta.created, doc.meta.modified);
        assert!(doc.loads.is_empty());
    }

    #[test]
    fn test_document_serialization() {
        let doc = sample_document();
        let json = doc.to_json().unwrap();

        assert!(json.contains("\"schema_version\": \"0.1.0\""));
        assert!(json.contains("Wedge"));
        assert!(json.contains("PowerOfTwo"));

        let roundtrip = BeamDocument::from_json(&json).unwrap();
        assert_eq!(roundtrip.meta.title, "Test Beam");
        assert_eq!(roundtrip.beam, doc.beam);
        assert_eq!(roundtrip.loads.loads(), doc.loads.loads());
        assert_eq!(roundtrip.settings, doc.settings);
        assert_eq!(roundtrip.beam.support, Support::Cantilever);
    }

    #[test]
    fn test_minimal_document_uses_defaults() {
        let json = r#"{
            "schema_version": "0.1.0",
            "meta": {
                "title": "Bare",
                "created": "2024-01-01T00:00:00Z",
                "modified": "2024-01-01T00:00:00Z"
            },
            "beam": {
                "length": 20.0,
                "elasticity": 1.0,
                "inertia": 1.0,
                "ei": 500.0,
                "support": { "type": "Cantilever" }
            }
        }"#;
        let doc = BeamDocument::from_json(json).unwrap();
        assert!(doc.loads.is_empty());
        assert_eq!(doc.settings, AnalysisSettings::default());
        assert_eq!(doc.beam.gravity, 9.8);
    }

    #[test]
    fn test_major_version_mismatch() {
        let json = sample_document().to_json().unwrap().replace("\"0.1.0\"", "\"1.0.0\"");
        match BeamDocument::from_json(&json) {
            Err(BeamError::VersionMismatch { file_version, .. }) => assert_eq!(file_version, "1.0.0"),
            other => panic!("expected version mismatch, got {:?}", other.map(|d| d.meta.title)),
        }
    }

    #[test]
    fn test_minor_version_accepted() {
        let json = sample_document().to_json().unwrap().replace("\"0.1.0\"", "\"0.2.0\"");
        assert!(BeamDocument::from_json(&json).is_ok());
    }

    #[test]
    fn test_garbage_version_rejected() {
        assert!(validate_version("abc").is_err());
        assert!(validate_version("").is_err());
        assert!(validate_version("0.1").is_ok());
    }

    #[test]
    fn test_duplicate_names_rejected_on_load() {
        let json = sample_document().to_json().unwrap().replace("\"Wedge\"", "\"Tip\"");
        let err = BeamDocument::from_json(&json).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_edits_touch_modified() {
        let mut doc = sample_document();
        let before = doc.meta.modified;
        let id = doc.loads.id_by_name("Tip").unwrap();
        doc.replace_load(id, Load::point("Tip", 9.0, 5.0)).unwrap();
        assert!(doc.meta.modified >= before);
        assert_eq!(doc.loads.position(id), Some(0));

        let removed = doc.remove_load(id).unwrap();
        assert_eq!(removed.location, 9.0);
        assert_eq!(doc.loads.len(), 1);
        assert!(doc.remove_load(id).is_err());
    }

    #[test]
    fn test_document_analysis() {
        let doc = sample_document();
        assert!(doc.validate().is_ok());
        let results = doc.analyze().unwrap();
        assert!(results.reactions.r2.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("beam_core_doc_{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("beam.json");

        let doc = sample_document();
        doc.save(&path).unwrap();
        let loaded = BeamDocument::load(&path).unwrap();
        assert_eq!(loaded.loads.loads(), doc.loads.loads());
        assert!(!path.with_extension("json.tmp").exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_failed_save_leaves_no_temp_file() {
        let dir = std::env::temp_dir().join(format!("beam_core_doc_{}", uuid::Uuid::new_v4()));
        // A directory in the way makes the final rename fail
        let target = dir.join("occupied");
        fs::create_dir_all(&target).unwrap();

        let err = sample_document().save(&target).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
        assert!(!target.with_extension("json.tmp").exists());
        assert!(target.is_dir());

        let missing_parent = dir.join("absent").join("beam.json");
        assert!(sample_document().save(&missing_parent).is_err());
        assert!(!missing_parent.with_extension("json.tmp").exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let err = BeamDocument::load(Path::new("/nonexistent/beam.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
