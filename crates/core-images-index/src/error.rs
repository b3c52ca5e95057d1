//! Error types for the core images index client

use thiserror::Error;

/// Result type alias using this crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by index fetches and version resolution
#[derive(Error, Debug)]
pub enum Error {
    /// Requested or catalog-embedded version is not a valid semantic version
    #[error("invalid version format: {version}")]
    InvalidVersion {
        version: String,
        #[source]
        source: semver::Error,
    },

    /// Transport failure or non-success status while fetching an index
    #[error("could not fetch index {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Index response body could not be decoded as a catalog
    #[error("could not decode index response from {url}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Catalog fetched fine, but no image satisfied the requested filters
    #[error("no image matching the requested filters was found in the index")]
    NoMatchingImage,

    /// Catalog fetched fine, but it lists no semver-tagged images
    #[error("index lists no semver-tagged images")]
    EmptyIndex,
}

impl Error {
    /// Create an invalid version error
    pub fn invalid_version(version: impl Into<String>, source: semver::Error) -> Self {
        Self::InvalidVersion {
            version: version.into(),
            source,
        }
    }

    /// Create a fetch error
    pub(crate) fn fetch(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Fetch {
            url: url.into(),
            source,
        }
    }

    /// Create a decode error
    pub(crate) fn decode(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Decode {
            url: url.into(),
            source,
        }
    }
}
