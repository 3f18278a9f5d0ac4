//! Compiled-in repository coordinates and current-version resolution

// =============================================================================
// Repository coordinates
// =============================================================================

/// Owner of the repository whose tags are checked
pub const REPO_OWNER: &str = "iBenzene";

/// Name of the repository whose tags are checked
pub const REPO_NAME: &str = "AIStudioToAPI";

/// Default base URL for the GitHub API
pub const GITHUB_API_BASE_URL: &str = "https://api.github.com";

/// Base URL for release pages on github.com
pub const GITHUB_HTML_BASE_URL: &str = "https://github.com";

/// User agent sent with every tag request
pub const USER_AGENT: &str = "AIStudioToAPI-VersionChecker";

/// Timeout for the tag fetch in milliseconds (10 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 10_000;

/// Version string reported when no version source is available
pub const UNKNOWN_VERSION: &str = "unknown";

/// Builds the release page URL for a tag name.
pub fn release_url(tag_name: &str) -> String {
    format!("{GITHUB_HTML_BASE_URL}/{REPO_OWNER}/{REPO_NAME}/releases/tag/{tag_name}")
}

/// Source of the running instance's version string.
///
/// An injected value (e.g. set during a Docker build) takes precedence over
/// the version packaged with the binary. Tests supply fixed values instead of
/// touching process state.
pub trait VersionSource: Send + Sync {
    /// Version injected from the environment, if any
    fn injected(&self) -> Option<String>;

    /// Version recorded in the package metadata, if any
    fn packaged(&self) -> Option<String>;
}

/// Resolves the current version: injected first, then packaged,
/// then [`UNKNOWN_VERSION`]. Never fails.
pub fn resolve_current_version(source: &dyn VersionSource) -> String {
    source
        .injected()
        .or_else(|| source.packaged())
        .unwrap_or_else(|| UNKNOWN_VERSION.to_string())
}

/// Default version source: the `VERSION` environment variable,
/// falling back to the crate's own package version.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvVersionSource;

impl VersionSource for EnvVersionSource {
    fn injected(&self) -> Option<String> {
        std::env::var("VERSION").ok().filter(|v| !v.is_empty())
    }

    fn packaged(&self) -> Option<String> {
        Some(env!("CARGO_PKG_VERSION").to_string())
    }
}
