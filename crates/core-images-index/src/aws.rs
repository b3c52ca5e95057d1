//! AWS machine image index
//!
//! The AWS index lists one entry per published AMI. An AMI is published
//! per region, so the same release shows up once for every region it was
//! copied to; matching is therefore usually scoped with
//! [`FilterOpts::with_region`].

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::client::IndexClient;
use crate::error::Result;
use crate::resolver::{self, IndexEntry};
use crate::types::FilterOpts;

/// Index file listing the published AMIs
pub const AWS_INDEX_FILE: &str = "aws.index.json";

/// One published AMI
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AwsImage {
    /// When the AMI was registered
    pub creation_date: DateTime<Utc>,

    /// AMI ID, e.g. "ami-0ff8a91507f77f867"
    pub image_id: String,

    /// Human-readable image name
    pub name: String,

    /// Region the AMI is published in, e.g. "us-east-1"
    pub region: String,

    /// Release the AMI was built from, e.g. "0.2.6"
    pub release: String,
}

impl IndexEntry for AwsImage {
    fn identifier(&self) -> &str {
        &self.image_id
    }

    fn release(&self) -> Option<String> {
        Some(self.release.clone())
    }

    fn region(&self) -> Option<&str> {
        Some(&self.region)
    }
}

/// Lookup over the AWS machine image index
#[derive(Debug, Clone)]
pub struct AwsIndex {
    client: IndexClient,
}

impl AwsIndex {
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

    /// Fetch the raw catalog of published AMIs
    pub async fn images(&self) -> Result<Vec<AwsImage>> {
        self.client.fetch_index(AWS_INDEX_FILE).await
    }

    /// Every published release, sorted ascending by semantic version. A
    /// release published to several regions appears once per region.
    pub async fn all(&self) -> Result<Vec<String>> {
        Ok(resolver::all_versions(&self.images().await?))
    }

    /// The highest published release
    pub async fn latest(&self) -> Result<String> {
        resolver::latest(&self.images().await?)
    }

    /// AMI ID of the image matching `opts.version`, scoped to
    /// `opts.region` when one is given
    pub async fn matching(&self, opts: &FilterOpts) -> Result<String> {
        let wanted = resolver::requested_release(opts)?;
        resolver::find_match(&self.images().await?, &wanted, opts.region.as_deref())
    }
}

impl Default for AwsIndex {
    fn default() -> Self {
        Self::new()
    }
}
