use serde_json::{Map, Value};
use std::io::Write;
use std::time::Instant;
use thiserror::Error;

use crate::core::{
    config::PublishConfig,
    resources::{
        artifacts::{ArtifactError, ArtifactsResource},
        manifest::{ManifestError, ManifestResource},
        store::{StoreConnection, StoreError, StoreResource},
    },
};

#[allow(clippy::enum_variant_names)]
#[derive(Error, Debug)]
pub enum PublishError {
    /// Error related to the deployment manifest
    #[error("ManifestError: {0}")]
    ManifestError(#[from] ManifestError),
    /// Error related to the artifacts store
    #[error("ArtifactError: {0}")]
    ArtifactError(#[from] ArtifactError),
    /// Error related to the remote store
    #[error("StoreError: {0}")]
    StoreError(#[from] StoreError),
    /// A selected contract is not listed in the manifest
    #[error("ContractError: {0} is not listed in the manifest")]
    ContractError(String),
    /// The report could not be written
    #[error("OutputError: {0}")]
    OutputError(#[from] std::io::Error),
}

/// Selects what gets published for each contract in the manifest,
/// and under which category.
pub trait Payload {
    /// The path category this payload is published under
    fn category<'a>(&self, config: &'a PublishConfig) -> &'a str;

    /// Build the request body for a contract from its manifest entry
    fn payload(&self, contract_name: &str, deployment: &Value) -> Result<Value, PublishError>;
}

/// Publishes the deployment data of each contract as listed in the manifest.
pub struct AddressPayload;

impl Payload for AddressPayload {
    fn category<'a>(&self, config: &'a PublishConfig) -> &'a str {
        &config.addresses_category
    }

    fn payload(&self, _contract_name: &str, deployment: &Value) -> Result<Value, PublishError> {
        Ok(deployment.clone())
    }
}

/// Publishes the ABI of each contract, read from its build artifact.
pub struct AbiPayload<A: ArtifactsResource> {
    artifacts_resource: A,
}

impl<A: ArtifactsResource> AbiPayload<A> {
    pub fn new(artifacts_resource: A) -> Self {
        AbiPayload { artifacts_resource }
    }
}

impl<A: ArtifactsResource> Payload for AbiPayload<A> {
    fn category<'a>(&self, config: &'a PublishConfig) -> &'a str {
        &config.abi_category
    }

    fn payload(&self, contract_name: &str, _deployment: &Value) -> Result<Value, PublishError> {
        Ok(self.artifacts_resource.get_abi(contract_name)?)
    }
}

/// Publishes build artifacts to a remote store, one PUT per contract
/// in the manifest. Used by the `addresses` and `abis` commands.
///
/// Any failure aborts the run; contracts after the failing one are
/// not attempted.
pub struct Publish<P: Payload, S: StoreResource> {
    /// Where to publish to
    config: PublishConfig,

    /// The contracts to publish, in manifest order
    contracts: Map<String, Value>,

    /// What to publish for each contract
    payload: P,

    /// The Store resource
    store_resource: S,
}

impl<P: Payload, S: StoreResource> Publish<P, S> {
    /// Loads the manifest and selects the contracts to publish.
    ///
    /// An empty `only` selects every contract in the manifest.
    pub fn new<M: ManifestResource>(
        config: PublishConfig,
        manifest_resource: M,
        only: &[String],
        payload: P,
        store_resource: S,
    ) -> Result<Self, PublishError> {
        let manifest = manifest_resource.get_manifest()?;
        let contracts = select_contracts(manifest.contracts, only)?;
        log::debug!("Selected {} contract(s) to publish", contracts.len());

        Ok(Self {
            config,
            contracts,
            payload,
            store_resource,
        })
    }

    /// Publishes every selected contract, writing a report to `out`.
    ///
    /// Returns the number of requests issued.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<usize, PublishError> {
        let category = self.payload.category(&self.config);

        // Released when it goes out of scope, on success and on error alike
        let connection = self.store_resource.connect()?;

        let mut published = 0;
        for (contract_name, deployment) in &self.contracts {
            writeln!(out, "{}", contract_name)?;

            let body = self.payload.payload(contract_name, deployment)?;

            let started = Instant::now();
            let response = connection.put(category, contract_name, &body).await?;
            log::debug!(
                "PUT {}/{} -> {} in {:?}",
                category,
                contract_name,
                response.status,
                started.elapsed()
            );

            writeln!(out, "{}", response.status)?;
            writeln!(out, "{}", response.reason)?;
            writeln!(out, "{}", response.body)?;
            published += 1;
        }
        writeln!(out)?;

        log::info!("Published {} {} payload(s)", published, category);
        Ok(published)
    }
}

// Restrict the manifest to the selected contracts, keeping manifest order
fn select_contracts(
    contracts: Map<String, Value>,
    only: &[String],
) -> Result<Map<String, Value>, PublishError> {
    if only.is_empty() {
        return Ok(contracts);
    }
    if let Some(unknown) = only.iter().find(|name| !contracts.contains_key(*name)) {
        return Err(PublishError::ContractError(unknown.to_owned()));
    }
    Ok(contracts
        .into_iter()
        .filter(|(name, _)| only.contains(name))
        .collect())
}
