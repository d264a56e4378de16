//! Manifest document consumed by the image build
//!
//! The manifest is a YAML mapping of unknown shape. Only keys derived from
//! resolved labels are written; every other key keeps its value and type.
//!
//! # Modules
//!
//! - [`merge`]: Label sanitization and merging of a `VersionMap`
//! - [`error`]: Load and persist errors

pub mod error;
pub mod merge;

use std::path::Path;

use serde_yaml::{Mapping, Value};
use tracing::debug;

pub use error::ManifestError;
pub use merge::sanitize_key;

/// A loaded manifest document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
    root: Mapping,
}

impl Manifest {
    /// Parse a manifest; an empty document is an empty mapping
    pub fn from_yaml(content: &str) -> Result<Self, ManifestError> {
        match serde_yaml::from_str::<Value>(content)? {
            Value::Null => Ok(Self::default()),
            Value::Mapping(root) => Ok(Self { root }),
            _ => Err(ManifestError::NotAMapping),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        debug!("Loading manifest from {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    pub fn to_yaml(&self) -> Result<String, ManifestError> {
        Ok(serde_yaml::to_string(&self.root)?)
    }

    /// Rewrites `path` with the full document. Not atomic.
    pub fn save(&self, path: &Path) -> Result<(), ManifestError> {
        let content = self.to_yaml()?;
        std::fs::write(path, content).map_err(|source| ManifestError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Wrote manifest to {:?}", path);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn from_yaml_treats_empty_document_as_empty_mapping() {
        assert!(Manifest::from_yaml("").unwrap().is_empty());
    }

    #[test]
    fn from_yaml_rejects_non_mapping_document() {
        assert!(matches!(
            Manifest::from_yaml("- a\n- b\n"),
            Err(ManifestError::NotAMapping)
        ));
    }

    #[test]
    fn from_yaml_rejects_malformed_document() {
        assert!(matches!(
            Manifest::from_yaml("key: [unterminated\n"),
            Err(ManifestError::Parse(_))
        ));
    }

    #[test]
    fn save_then_load_preserves_value_types() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("manifest.yml");
        let original = Manifest::from_yaml(
            "retries: 3\nenabled: true\nratio: 0.5\nname: cimg\ntags:\n  - base\n  - lts\nnested:\n  key: value\n",
        )
        .unwrap();

        original.save(&path).unwrap();
        let reloaded = Manifest::load(&path).unwrap();

        assert_eq!(reloaded, original);
        assert_eq!(reloaded.get("retries"), Some(&Value::from(3)));
        assert_eq!(reloaded.get("enabled"), Some(&Value::Bool(true)));
    }

    #[test]
    fn load_reports_missing_file() {
        assert!(matches!(
            Manifest::load(Path::new("/nonexistent/manifest.yml")),
            Err(ManifestError::Read { .. })
        ));
    }
}
