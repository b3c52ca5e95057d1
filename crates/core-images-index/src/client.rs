//! HTTP fetch and JSON decode of the published index files

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Error, Result};

/// Production location of the published index files
pub const DEFAULT_INDEX_BASE_URL: &str =
    "https://raw.githubusercontent.com/calyptia/core-images-index/main";

/// Client for fetching image index files
///
/// One instance can be shared freely across tasks: every fetch is an
/// independent request and no state is mutated between calls. Dropping a
/// fetch future aborts the in-flight request, so callers cancel by
/// cancelling the surrounding task (or wrapping the call in
/// `tokio::time::timeout`).
#[derive(Debug, Clone)]
pub struct IndexClient {
    client: reqwest::Client,
    base_url: String,
}

impl IndexClient {
    /// Create a client against the production index location
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("core-images-index/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base_url: DEFAULT_INDEX_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different index location (e.g. a mirror, or a
    /// local mock server in tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Fetch one index file and decode it as a catalog of `T`
    ///
    /// Performs a single GET with no retries. Transport failures and
    /// non-success statuses surface as [`Error::Fetch`]; an undecodable
    /// body surfaces as [`Error::Decode`].
    pub async fn fetch_index<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        let url = format!("{}/{}", self.base_url, file);

        debug!("fetching image index from: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| Error::fetch(&url, source))?
            .error_for_status()
            .map_err(|source| Error::fetch(&url, source))?;

        let catalog: Vec<T> = response
            .json()
            .await
            .map_err(|source| Error::decode(&url, source))?;

        debug!("index {} lists {} images", file, catalog.len());

        Ok(catalog)
    }
}

impl Default for IndexClient {
    fn default() -> Self {
        Self::new()
    }
}
