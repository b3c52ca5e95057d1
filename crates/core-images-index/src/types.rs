//! Filter options shared by all platform indexes

/// Options used to filter images from an index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOpts {
    /// Release to match, e.g. "v0.2.9" or "0.2.9"
    pub version: String,

    /// Region scope, e.g. "us-east-1" (AWS) or "us" (GCP storage location)
    pub region: Option<String>,

    /// Fetch the test index instead of the production one, where the
    /// platform publishes a test index. Default false.
    pub test_index: bool,
}

impl FilterOpts {
    /// Options matching a single release version
    pub fn for_version(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Self::default()
        }
    }

    /// Scope matching to one region
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Use the test index where the platform publishes one
    pub fn with_test_index(mut self) -> Self {
        self.test_index = true;
        self
    }
}
