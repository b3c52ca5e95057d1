//! Container image index
//!
//! The container index is a plain JSON array of published image tags, e.g.
//! `["v0.2.6", "v0.2.4", ...]`. The tag is both the identifier returned to
//! callers and the release it names.

use crate::client::IndexClient;
use crate::error::Result;
use crate::resolver;
use crate::types::FilterOpts;

/// Index file listing the published container image tags
pub const CONTAINER_INDEX_FILE: &str = "container.index.json";

/// One container image: its published tag, e.g. `"v0.2.6"`
pub type ContainerImage = String;

/// Lookup over the container image index
#[derive(Debug, Clone)]
pub struct ContainerIndex {
    client: IndexClient,
}

impl ContainerIndex {
    /// Index over the production endpoint
    pub fn new() -> Self {
        Self {
            client: IndexClient::new(),
        }
    }

    /// Index using a preconfigured client
    pub fn with_client(client: IndexClient) -> Self {
        Self { client }
    }

    /// Fetch the raw catalog of published tags
    pub async fn images(&self) -> Result<Vec<ContainerImage>> {
        self.client.fetch_index(CONTAINER_INDEX_FILE).await
    }

    /// Every published release tag, sorted ascending by semantic version
    pub async fn all(&self) -> Result<Vec<String>> {
        Ok(resolver::all_versions(&self.images().await?))
    }

    /// The highest published release tag
    pub async fn latest(&self) -> Result<String> {
        resolver::latest(&self.images().await?)
    }

    /// The tag naming exactly the release in `opts.version`
    pub async fn matching(&self, opts: &FilterOpts) -> Result<String> {
        let wanted = resolver::requested_release(opts)?;
        resolver::find_match(&self.images().await?, &wanted, opts.region.as_deref())
    }
}

impl Default for ContainerIndex {
    fn default() -> Self {
        Self::new()
    }
}
