use serde_json::{Map, Value};
use std::fs;
use std::path::PathBuf;

use crate::core::resources::artifacts::{ArtifactError, ArtifactsResource};

/// The Artifacts resource implementation that reads build artifacts
/// from a directory of `<ContractName>.json` files, as written by truffle.
pub struct LocalArtifactStore {
    path: PathBuf,
}

impl LocalArtifactStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        LocalArtifactStore { path: path.into() }
    }
}

impl ArtifactsResource for LocalArtifactStore {
    fn get_abi(&self, contract_name: &str) -> Result<Value, ArtifactError> {
        let file_path = self.path.join(format!("{}.json", contract_name));
        log::debug!("Reading artifact from {}", file_path.display());
        let contents = fs::read_to_string(file_path)?;
        let mut artifact: Map<String, Value> = serde_json::from_str(&contents)?;
        artifact
            .remove("abi")
            .ok_or_else(|| ArtifactError::MissingAbi {
                name: contract_name.to_owned(),
            })
    }
}
