//! Client for the published core images index
//!
//! This crate answers "which image corresponds to this release?" across
//! the four places core images are published:
//! - Container image tags
//! - Operator bundle tags
//! - AWS machine images (AMIs)
//! - GCP machine images
//!
//! Each source exposes the same three queries over its remote JSON index:
//! every published release (`all`), the highest release (`latest`), and
//! the image matching one release exactly (`matching`), optionally scoped
//! to a region where the platform has one. Indexes are fetched fresh on
//! every query; nothing is cached between calls.
//!
//! # Example
//!
//! ```no_run
//! use core_images_index::{AwsIndex, ContainerIndex, FilterOpts};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let latest = ContainerIndex::new().latest().await?;
//!
//!     let ami = AwsIndex::new()
//!         .matching(&FilterOpts::for_version(&latest).with_region("us-east-1"))
//!         .await?;
//!
//!     println!("launch {} for release {}", ami, latest);
//!
//!     Ok(())
//! }
//! ```

pub mod aws;
pub mod client;
pub mod container;
pub mod error;
pub mod gcp;
pub mod operator;
pub mod resolver;
pub mod types;

// Re-export main types for convenience
pub use aws::{AwsImage, AwsIndex};
pub use client::IndexClient;
pub use container::ContainerIndex;
pub use error::{Error, Result};
pub use gcp::{GcpImage, GcpImageLabels, GcpIndex};
pub use operator::OperatorIndex;
pub use resolver::IndexEntry;
pub use types::FilterOpts;

/// Version of the core-images-index crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
