use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Represents a deployment manifest
///
/// The manifest lists every contract known to the deployment, keyed by
/// contract name, along with its deployment data (e.g. network addresses).
/// Its key set decides which artifacts get published.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// The deployment data of each contract, in document order
    pub contracts: Map<String, Value>,
}

#[derive(Error, Debug)]
pub enum ManifestError {
    /// The manifest could not be read
    #[error("IoError: {0}")]
    Io(#[from] std::io::Error),
    /// The manifest is not a JSON object with a `contracts` object
    #[error("ParseError: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Defines the interface for loading the deployment manifest.
///
/// The manifest is loaded once per run and is read-only afterwards.
pub trait ManifestResource {
    fn get_manifest(&self) -> Result<Manifest, ManifestError>;
}
