use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Represents the response of the remote store to a single request
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoreResponse {
    /// The numeric HTTP status code
    pub status: u16,
    /// The reason phrase of the status, empty if unknown
    pub reason: String,
    /// The decoded response body
    pub body: String,
}

#[derive(Error, Debug)]
pub enum StoreError {
    /// The configured endpoint can't address the given key
    #[error("InvalidEndpoint: {0}")]
    InvalidEndpoint(String),
    /// The request failed before a response was received
    #[error("TransportError: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Defines the interface for interacting with a remote key-value store.
///
/// A store hands out connections. A connection is opened once per run and
/// reused for every request in it; it is released when dropped.
pub trait StoreResource {
    type Connection: StoreConnection;

    /// Open a connection to the store
    fn connect(&self) -> Result<Self::Connection, StoreError>;
}

/// An open connection to the remote store.
#[async_trait]
pub trait StoreConnection {
    /// Store `body` under `key` in `category`, e.g. `abi` and `Whitelist`.
    ///
    /// Each of `category` and `key` addresses exactly one path segment.
    async fn put(
        &self,
        category: &str,
        key: &str,
        body: &Value,
    ) -> Result<StoreResponse, StoreError>;
}
