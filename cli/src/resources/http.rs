use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;

use crate::core::config::PublishConfig;
use crate::core::resources::store::{StoreConnection, StoreError, StoreResource, StoreResponse};

/// The Store resource implementation that talks to a remote
/// key-value store over plain HTTP.
///
/// Each [`HttpStore::connect`] builds a client that keeps at most one idle
/// connection to the endpoint, so every request of a run goes over the
/// same connection. Dropping the [`HttpConnection`] closes it.
pub struct HttpStore {
    endpoint: Url,
}

impl HttpStore {
    /// Builds a store talking to the endpoint of `config`.
    pub fn new(config: &PublishConfig) -> Self {
        HttpStore {
            endpoint: config.endpoint.clone(),
        }
    }
}

impl StoreResource for HttpStore {
    type Connection = HttpConnection;

    fn connect(&self) -> Result<HttpConnection, StoreError> {
        let client = Client::builder().pool_max_idle_per_host(1).build()?;
        log::debug!("Opened connection to {}", self.endpoint);
        Ok(HttpConnection {
            client,
            endpoint: self.endpoint.clone(),
        })
    }
}

pub struct HttpConnection {
    client: Client,
    endpoint: Url,
}

#[async_trait]
impl StoreConnection for HttpConnection {
    async fn put(
        &self,
        category: &str,
        key: &str,
        body: &Value,
    ) -> Result<StoreResponse, StoreError> {
        let url = request_url(&self.endpoint, category, key)?;
        let response = self.client.put(url).json(body).send().await?;
        let status = response.status();
        Ok(StoreResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_owned(),
            body: response.text().await?,
        })
    }
}

impl Drop for HttpConnection {
    fn drop(&mut self) {
        log::debug!("Releasing connection to {}", self.endpoint);
    }
}

/// Appends `category` and `key` to the endpoint path as one segment each.
///
/// Segments are percent-encoded, so a key containing `/`, `?` or `#` stays
/// a single segment. Any path prefix or query of the endpoint is kept.
fn request_url(endpoint: &Url, category: &str, key: &str) -> Result<Url, StoreError> {
    let mut url = endpoint.clone();
    url.path_segments_mut()
        .map_err(|_| StoreError::InvalidEndpoint(format!("{} can't carry a path", endpoint)))?
        .pop_if_empty()
        .push(category)
        .push(key);
    Ok(url)
}
