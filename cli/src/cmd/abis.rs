use std::io;
use std::path::PathBuf;

use clap::Args;

use super::target::Target;
pub use crate::core::actions::publish::PublishError;
use crate::core::actions::{publish::AbiPayload, Publish};
use crate::resources::{artifacts::LocalArtifactStore, http::HttpStore};

#[derive(Args, Debug)]
pub struct Abis {
    #[command(flatten)]
    pub target: Target,

    /// The directory holding the `<ContractName>.json` build artifacts.
    ///
    /// A relative path resolves against the current working directory.
    #[arg(long, env = "PUBLISH_BUILD_DIR", default_value = "build/contracts")]
    pub build_dir: PathBuf,
}

/// Publishes the ABI of every contract in the manifest.
///
/// Same as [`super::Addresses`], but the body of each request is the
/// `abi` field of the contract's build artifact.
impl Abis {
    pub async fn run(&self) -> Result<(), PublishError> {
        // Build the resources
        let config = self.target.config();
        let artifacts_resource = LocalArtifactStore::new(&self.build_dir);
        let store_resource = HttpStore::new(&config);

        // Build the action
        let publish = Publish::new(
            config,
            self.target.manifest_resource(),
            &self.target.contracts,
            AbiPayload::new(artifacts_resource),
            store_resource,
        )?;

        // Run the action
        publish.run(&mut io::stdout()).await?;

        Ok(())
    }
}
