use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtifactError {
    /// The build file could not be read
    #[error("IoError: {0}")]
    Io(#[from] std::io::Error),
    /// The build file is not a JSON object
    #[error("ParseError: {0}")]
    Parse(#[from] serde_json::Error),
    /// The build file has no `abi` field
    #[error("Artifact {name} has no abi field")]
    MissingAbi { name: String },
}

/// Fetches contract data from a store of build artifacts.
pub trait ArtifactsResource {
    /// Get the ABI of a given contract
    fn get_abi(&self, contract_name: &str) -> Result<Value, ArtifactError>;
}
