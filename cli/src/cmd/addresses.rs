use std::io;

use clap::Args;

use super::target::Target;
pub use crate::core::actions::publish::PublishError;
use crate::core::actions::{publish::AddressPayload, Publish};
use crate::resources::http::HttpStore;

#[derive(Args, Debug)]
pub struct Addresses {
    #[command(flatten)]
    pub target: Target,
}

/// Publishes the deployment addresses of every contract in the manifest.
///
/// The command uses the [`crate::core::actions::Publish`] action
/// under the hood, using the local manifest file and the HTTP store.
impl Addresses {
    pub async fn run(&self) -> Result<(), PublishError> {
        // Build the resources
        let config = self.target.config();
        let store_resource = HttpStore::new(&config);

        // Build the action
        let publish = Publish::new(
            config,
            self.target.manifest_resource(),
            &self.target.contracts,
            AddressPayload,
            store_resource,
        )?;

        // Run the action
        publish.run(&mut io::stdout()).await?;

        Ok(())
    }
}
