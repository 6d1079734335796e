use std::fs;
use std::path::PathBuf;

use crate::core::resources::manifest::{Manifest, ManifestError, ManifestResource};

/// The Manifest resource implementation that reads the deployment
/// manifest from a JSON file on the local file system.
pub struct LocalManifest {
    path: PathBuf,
}

impl LocalManifest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        LocalManifest { path: path.into() }
    }
}

impl ManifestResource for LocalManifest {
    fn get_manifest(&self) -> Result<Manifest, ManifestError> {
        log::debug!("Reading manifest from {}", self.path.display());
        let contents = fs::read_to_string(&self.path)?;
        let manifest: Manifest = serde_json::from_str(&contents)?;
        Ok(manifest)
    }
}
