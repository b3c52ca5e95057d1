//! Generic version resolution over a fetched catalog
//!
//! All four platform indexes share the same control flow: fetch the
//! catalog, read an embedded release out of each descriptor, then select
//! by semantic version. The selection logic lives here once; platforms
//! implement [`IndexEntry`] to describe how a release and a region are
//! read from their descriptor type.

use semver::Version;
use tracing::trace;

use crate::error::{Error, Result};
use crate::types::FilterOpts;

/// One catalog entry, as seen by the selection logic
pub trait IndexEntry {
    /// Identifier handed back to the caller on a match (image tag, AMI ID,
    /// or image name depending on the platform)
    fn identifier(&self) -> &str;

    /// Release string embedded in the entry, in dotted form. `None` when
    /// the entry carries no release at all.
    fn release(&self) -> Option<String>;

    /// Region/location the image lives in, where the platform exposes one
    fn region(&self) -> Option<&str> {
        None
    }
}

/// A bare tag string is its own identifier and release
impl IndexEntry for String {
    fn identifier(&self) -> &str {
        self
    }

    fn release(&self) -> Option<String> {
        Some(self.clone())
    }
}

/// Parse a release string leniently: a leading `v`/`V` is cosmetic
pub(crate) fn parse_release(release: &str) -> std::result::Result<Version, semver::Error> {
    let release = release.strip_prefix(['v', 'V']).unwrap_or(release);
    Version::parse(release)
}

/// Parse the release a caller asked for
///
/// Matching callers validate the request with this before fetching, so a
/// malformed version fails without a network round trip.
pub(crate) fn requested_release(opts: &FilterOpts) -> Result<Version> {
    parse_release(&opts.version).map_err(|source| Error::invalid_version(&opts.version, source))
}

/// Every parseable release in the catalog, sorted ascending by semantic
/// version. Entries without a parseable release are skipped.
pub(crate) fn all_versions<E: IndexEntry>(entries: &[E]) -> Vec<String> {
    let mut releases: Vec<(Version, String)> = entries
        .iter()
        .filter_map(|entry| {
            let release = entry.release()?;
            match parse_release(&release) {
                Ok(version) => Some((version, release)),
                Err(_) => {
                    trace!("skipping non-semver release: {}", release);
                    None
                }
            }
        })
        .collect();

    // stable sort keeps duplicate releases in catalog order
    releases.sort_by(|(a, _), (b, _)| a.cmp(b));

    releases.into_iter().map(|(_, release)| release).collect()
}

/// Highest release in the catalog
pub(crate) fn latest<E: IndexEntry>(entries: &[E]) -> Result<String> {
    let mut versions = all_versions(entries);
    versions.pop().ok_or(Error::EmptyIndex)
}

/// First entry whose embedded release equals `wanted`, scoped to `region`
/// when one is requested
///
/// Equality is value-based: `"v0.2.6"` and `"0.2.6"` name the same
/// release. An entry embedding a malformed release fails the whole match
/// with [`Error::InvalidVersion`] rather than being skipped.
pub(crate) fn find_match<E: IndexEntry>(
    entries: &[E],
    wanted: &Version,
    region: Option<&str>,
) -> Result<String> {
    for entry in entries {
        if let Some(region) = region {
            if entry.region() != Some(region) {
                continue;
            }
        }

        let Some(release) = entry.release() else {
            continue;
        };

        let parsed =
            parse_release(&release).map_err(|source| Error::invalid_version(&release, source))?;

        if parsed == *wanted {
            trace!("matched {} to image {}", wanted, entry.identifier());
            return Ok(entry.identifier().to_string());
        }
    }

    Err(Error::NoMatchingImage)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Entry {
        id: &'static str,
        release: Option<&'static str>,
        region: Option<&'static str>,
    }

    impl IndexEntry for Entry {
        fn identifier(&self) -> &str {
            self.id
        }

        fn release(&self) -> Option<String> {
            self.release.map(String::from)
        }

        fn region(&self) -> Option<&str> {
            self.region
        }
    }

    fn tag(release: &'static str) -> Entry {
        Entry {
            id: release,
            release: Some(release),
            region: None,
        }
    }

    fn regional(id: &'static str, release: &'static str, region: &'static str) -> Entry {
        Entry {
            id,
            release: Some(release),
            region: Some(region),
        }
    }

    fn select(entries: &[Entry], opts: &FilterOpts) -> Result<String> {
        let wanted = requested_release(opts)?;
        find_match(entries, &wanted, opts.region.as_deref())
    }

    #[test]
    fn all_versions_sorts_ascending() {
        let entries = vec![tag("v0.2.6"), tag("v0.1.1"), tag("v0.2.4")];

        assert_eq!(all_versions(&entries), vec!["v0.1.1", "v0.2.4", "v0.2.6"]);
    }

    #[test]
    fn all_versions_skips_unparseable_releases() {
        let entries = vec![tag("latest"), tag("v0.2.6"), tag("edge")];

        assert_eq!(all_versions(&entries), vec!["v0.2.6"]);
    }

    #[test]
    fn all_versions_keeps_duplicates_in_catalog_order() {
        let entries = vec![
            regional("first", "0.2.6", "us-east-1"),
            regional("second", "0.2.6", "us-west-2"),
        ];

        assert_eq!(all_versions(&entries), vec!["0.2.6", "0.2.6"]);
    }

    #[test]
    fn latest_is_the_highest_release() {
        let entries = vec![tag("v0.2.4"), tag("v0.2.6"), tag("v0.1.1")];

        assert_eq!(latest(&entries).unwrap(), "v0.2.6");
    }

    #[test]
    fn latest_fails_explicitly_on_empty_catalog() {
        let entries: Vec<Entry> = Vec::new();

        assert!(matches!(latest(&entries), Err(Error::EmptyIndex)));
    }

    #[test]
    fn latest_fails_when_nothing_parses() {
        let entries = vec![tag("latest"), tag("edge")];

        assert!(matches!(latest(&entries), Err(Error::EmptyIndex)));
    }

    #[test]
    fn match_equality_ignores_the_v_prefix() {
        let entries = vec![tag("0.2.6")];

        let found = select(&entries, &FilterOpts::for_version("v0.2.6")).unwrap();
        assert_eq!(found, "0.2.6");
    }

    #[test]
    fn match_misses_are_distinguishable() {
        let entries = vec![tag("v0.2.6")];

        let result = select(&entries, &FilterOpts::for_version("v0.2.5"));
        assert!(matches!(result, Err(Error::NoMatchingImage)));
    }

    #[test]
    fn malformed_requested_version_is_rejected() {
        let result = requested_release(&FilterOpts::for_version("not-a-version"));
        assert!(matches!(result, Err(Error::InvalidVersion { .. })));
    }

    #[test]
    fn malformed_catalog_release_fails_the_match() {
        let entries = vec![tag("garbage"), tag("v0.2.6")];

        let result = select(&entries, &FilterOpts::for_version("v0.2.6"));
        assert!(matches!(result, Err(Error::InvalidVersion { .. })));
    }

    #[test]
    fn first_matching_entry_wins() {
        let entries = vec![
            regional("first", "0.2.6", "us-east-1"),
            regional("second", "0.2.6", "us-east-1"),
        ];

        let found = select(&entries, &FilterOpts::for_version("0.2.6")).unwrap();
        assert_eq!(found, "first");
    }

    #[test]
    fn region_scope_requires_both_version_and_region() {
        let entries = vec![
            regional("right-region-wrong-release", "0.2.5", "us-east-1"),
            regional("wrong-region-right-release", "0.2.6", "us-west-2"),
            regional("both", "0.2.6", "us-east-1"),
        ];

        let opts = FilterOpts::for_version("v0.2.6").with_region("us-east-1");
        assert_eq!(select(&entries, &opts).unwrap(), "both");
    }

    #[test]
    fn region_mismatch_is_not_matched() {
        let entries = vec![regional("ami", "0.2.6", "us-west-2")];

        let opts = FilterOpts::for_version("v0.2.6").with_region("us-east-1");
        assert!(matches!(
            select(&entries, &opts),
            Err(Error::NoMatchingImage)
        ));
    }

    #[test]
    fn without_region_scope_any_region_matches() {
        let entries = vec![regional("ami", "0.2.6", "us-west-2")];

        let found = select(&entries, &FilterOpts::for_version("v0.2.6")).unwrap();
        assert_eq!(found, "ami");
    }

    #[test]
    fn regionless_entries_never_match_a_region_scope() {
        let entries = vec![tag("v0.2.6")];

        let opts = FilterOpts::for_version("v0.2.6").with_region("us-east-1");
        assert!(matches!(
            select(&entries, &opts),
            Err(Error::NoMatchingImage)
        ));
    }
}
