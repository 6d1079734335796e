use std::path::PathBuf;

use clap::Args;
use reqwest::Url;

use crate::core::config::{PublishConfig, DEFAULT_ENDPOINT};
use crate::resources::manifest::LocalManifest;

/// Options shared by every publish command
#[derive(Args, Debug)]
pub struct Target {
    /// Base URL of the store to publish to
    #[arg(long, env = "PUBLISH_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: Url,

    /// The deployment manifest listing the contracts to publish.
    ///
    /// A relative path resolves against the current working directory.
    #[arg(long, env = "PUBLISH_MANIFEST", default_value = "build/deployment.json")]
    pub manifest: PathBuf,

    /// Only publish the given contract. Can be repeated.
    ///
    /// Every name must be listed in the manifest.
    #[arg(long = "contract", value_name = "NAME")]
    pub contracts: Vec<String>,
}

impl Target {
    /// The publish config; the store is built from it.
    pub fn config(&self) -> PublishConfig {
        PublishConfig::new(self.endpoint.clone())
    }

    pub fn manifest_resource(&self) -> LocalManifest {
        LocalManifest::new(&self.manifest)
    }
}
