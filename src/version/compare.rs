//! Version string parsing and ordering
//!
//! Release tags are plain `vX.Y.Z` strings, so ordering is purely numeric
//! over the (major, minor, patch) triple. This is deliberately not semver:
//! there is no pre-release precedence, and anything unparseable collapses
//! to 0 instead of failing.

use std::cmp::Ordering;

/// A parsed (major, minor, patch) triple
pub type ParsedVersion = (u64, u64, u64);

/// Parses a version string like "v0.2.9" or "0.2.9" into a triple.
///
/// A single leading `v` is stripped. Missing components and components that
/// fail numeric parsing become 0. Total; never fails.
///
/// Examples:
/// - "v1.2.3" -> (1, 2, 3)
/// - "1.2" -> (1, 2, 0)
/// - "vX.2.3" -> (0, 2, 3)
/// - "" -> (0, 0, 0)
pub fn parse_version(version: &str) -> ParsedVersion {
    let cleaned = version.strip_prefix('v').unwrap_or(version);
    let mut parts = cleaned.split('.').map(|p| p.parse::<u64>().unwrap_or(0));

    (
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
    )
}

/// Compares two version strings numerically, major first, then minor,
/// then patch. Total; unparseable input compares as 0.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    parse_version(a).cmp(&parse_version(b))
}
