//! GCP machine image index
//!
//! GCP label values cannot contain the `.` character, so the release is
//! published dash-separated (`"0-2-6"`) under the
//! `calyptia-core-release` label and normalized back to dotted form here.
//! The region of an image is the first of its storage locations.

use serde::Deserialize;

use crate::client::IndexClient;
use crate::error::Result;
use crate::resolver::{self, IndexEntry};
use crate::types::FilterOpts;

/// Index file listing the published GCP images
pub const GCP_INDEX_FILE: &str = "gcp.index.json";

/// Test variant of the GCP index, selected via [`FilterOpts::with_test_index`]
pub const GCP_TEST_INDEX_FILE: &str = "gcp.test.index.json";

/// Labels attached to a published GCP image
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GcpImageLabels {
    /// Release the image was built from, dash-separated, e.g. "0-2-6"
    #[serde(rename = "calyptia-core-release", default)]
    pub calyptia_core_release: Option<String>,

    /// Base image the build started from
    #[serde(rename = "source-image", default)]
    pub source_image: Option<String>,
}

/// One published GCP image
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GcpImage {
    /// When the image was created, RFC 3339
    pub creation_timestamp: String,

    #[serde(default)]
    pub labels: GcpImageLabels,

    /// Image name, e.g. "core-0-2-6"
    pub name: String,

    /// Multi-regional locations the image is stored in; the first entry is
    /// the one matched against [`FilterOpts::region`]
    #[serde(default)]
    pub storage_locations: Vec<String>,
}

impl IndexEntry for GcpImage {
    fn identifier(&self) -> &str {
        &self.name
    }

    fn release(&self) -> Option<String> {
        self.labels
            .calyptia_core_release
            .as_ref()
            .map(|release| release.replace('-', "."))
    }

    fn region(&self) -> Option<&str> {
        self.storage_locations.first().map(String::as_str)
    }
}

/// Lookup over the GCP machine image index
#[derive(Debug, Clone)]
pub struct GcpIndex {
    client: IndexClient,
}

impl GcpIndex {
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

    /// Fetch the raw catalog of published images, from the test index when
    /// `opts.test_index` is set
    pub async fn images(&self, opts: &FilterOpts) -> Result<Vec<GcpImage>> {
        let file = if opts.test_index {
            GCP_TEST_INDEX_FILE
        } else {
            GCP_INDEX_FILE
        };
        self.client.fetch_index(file).await
    }

    /// Every published release, in dotted form, sorted ascending by
    /// semantic version
    pub async fn all(&self) -> Result<Vec<String>> {
        Ok(resolver::all_versions(
            &self.images(&FilterOpts::default()).await?,
        ))
    }

    /// The highest published release, in dotted form
    pub async fn latest(&self) -> Result<String> {
        resolver::latest(&self.images(&FilterOpts::default()).await?)
    }

    /// Name of the image matching `opts.version`, scoped to `opts.region`
    /// when one is given
    pub async fn matching(&self, opts: &FilterOpts) -> Result<String> {
        let wanted = resolver::requested_release(opts)?;
        resolver::find_match(&self.images(opts).await?, &wanted, opts.region.as_deref())
    }
}

impl Default for GcpIndex {
    fn default() -> Self {
        Self::new()
    }
}
