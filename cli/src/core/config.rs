use reqwest::Url;

/// The test database the contract ABIs are published to by default
pub const DEFAULT_ENDPOINT: &str = "http://88.198.129.43:8080";

/// Where and under which categories artifacts get published.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublishConfig {
    /// Base URL of the remote store
    pub endpoint: Url,
    /// Path category for deployment addresses
    pub addresses_category: String,
    /// Path category for contract ABIs
    pub abi_category: String,
}

impl PublishConfig {
    /// Builds a config for `endpoint` with the default categories.
    pub fn new(endpoint: Url) -> Self {
        PublishConfig {
            endpoint,
            addresses_category: "addresses".to_owned(),
            abi_category: "abi".to_owned(),
        }
    }
}
