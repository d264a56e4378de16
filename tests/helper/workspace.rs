//! Temporary config and manifest files

use std::path::PathBuf;

use tempfile::TempDir;

use image_bot::app::RunOptions;

pub struct Workspace {
    _temp_dir: TempDir,
    pub config_path: PathBuf,
    pub manifest_path: PathBuf,
}

impl Workspace {
    pub fn new(config: &str, manifest: &str) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yml");
        let manifest_path = temp_dir.path().join("manifest.yml");
        std::fs::write(&config_path, config).unwrap();
        std::fs::write(&manifest_path, manifest).unwrap();

        Self {
            _temp_dir: temp_dir,
            config_path,
            manifest_path,
        }
    }

    pub fn options(&self) -> RunOptions {
        RunOptions {
            config_path: self.config_path.clone(),
            manifest_path: self.manifest_path.clone(),
        }
    }

    pub fn manifest(&self) -> String {
        std::fs::read_to_string(&self.manifest_path).unwrap()
    }
}
