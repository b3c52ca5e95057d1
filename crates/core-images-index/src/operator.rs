//! Operator bundle index
//!
//! Same shape as the container index: a JSON array of published bundle
//! tags.

use crate::client::IndexClient;
use crate::error::Result;
use crate::resolver;
use crate::types::FilterOpts;

/// Index file listing the published operator bundle tags
pub const OPERATOR_INDEX_FILE: &str = "operator.index.json";

/// One operator bundle: its published tag, e.g. `"v0.2.6"`
pub type OperatorImage = String;

/// Lookup over the operator bundle index
#[derive(Debug, Clone)]
pub struct OperatorIndex {
    client: IndexClient,
}

impl OperatorIndex {
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
    pub async fn images(&self) -> Result<Vec<OperatorImage>> {
        self.client.fetch_index(OPERATOR_INDEX_FILE).await
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

impl Default for OperatorIndex {
    fn default() -> Self {
        Self::new()
    }
}
