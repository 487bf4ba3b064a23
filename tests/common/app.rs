//! Pipeline harness for integration tests.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use beadsheet::assets::AssetLoader;
use beadsheet::models::AppConfig;
use beadsheet::services::ConversionPipeline;
use tempfile::TempDir;

/// A conversion pipeline plus a scratch directory for inputs and outputs
pub struct TestPipeline {
    pub pipeline: ConversionPipeline,
    dir: TempDir,
}

impl TestPipeline {
    /// Embedded assets, default layout, PNG optimization off for speed
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.sheet.optimize = false;
        Self::with_config(config)
    }

    pub fn with_config(config: AppConfig) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let loader = Arc::new(AssetLoader::new(None, None, None));
        let pipeline = ConversionPipeline::new(Arc::new(config), loader);
        Self { pipeline, dir }
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
