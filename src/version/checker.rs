//! Top-level update check
//!
//! Resolves the version the running instance reports, fetches the repository
//! tag list, and reports whether a newer release exists. Every failure is
//! absorbed into the [`UpdateCheck`] value; none of the operations here
//! return an error to the caller.

use std::cmp::Ordering;

use serde::Serialize;

use crate::config::{EnvVersionSource, VersionSource, release_url, resolve_current_version};
use crate::logging::{NoopLogger, UpdateLogger};
use crate::version::compare::compare_versions;
use crate::version::registry::{Tag, TagRegistry};

/// Error reported on the result when the tag fetch came up empty
const FETCH_FAILED_MESSAGE: &str = "Unable to fetch latest version";

/// The highest qualifying release tag and its release page URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestTag {
    pub name: String,
    pub url: String,
}

/// Result of a single update check, in the shape the status page consumes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCheck {
    /// Version the running instance reports
    pub current: String,
    /// Whether a strictly newer release exists
    pub has_update: bool,
    /// Name of the highest qualifying release tag, if the fetch succeeded
    pub latest: Option<String>,
    /// Release page URL for the latest tag, if the fetch succeeded
    pub release_url: Option<String>,
    /// Set when the tag fetch failed or produced no qualifying tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Checks the repository tag list for releases newer than the running build
pub struct VersionChecker {
    registry: Box<dyn TagRegistry>,
    source: Box<dyn VersionSource>,
    logger: Box<dyn UpdateLogger>,
}

impl VersionChecker {
    /// Creates a checker over the given registry, reading the current version
    /// from the environment and logging nowhere.
    pub fn new(registry: Box<dyn TagRegistry>) -> Self {
        Self {
            registry,
            source: Box::new(EnvVersionSource),
            logger: Box::new(NoopLogger),
        }
    }

    /// Replaces the current-version source
    pub fn with_source(mut self, source: Box<dyn VersionSource>) -> Self {
        self.source = source;
        self
    }

    /// Replaces the logger
    pub fn with_logger(mut self, logger: Box<dyn UpdateLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Returns the version the running instance reports. Never fails;
    /// falls back to "unknown" when no version source is available.
    pub fn current_version(&self) -> String {
        resolve_current_version(self.source.as_ref())
    }

    /// Fetches the tag list and returns the highest qualifying tag.
    ///
    /// Qualifying means the name starts with `v` and does not contain
    /// `preview`. Returns `None` when the fetch fails or no tag qualifies;
    /// fetch failures are logged as warnings and never propagate.
    pub async fn fetch_latest_tag(&self) -> Option<LatestTag> {
        let tags = match self.registry.fetch_tags().await {
            Ok(tags) => tags,
            Err(e) => {
                self.logger.warn(&format!("Failed to fetch tags: {e}"));
                return None;
            }
        };

        let mut candidates: Vec<Tag> = tags
            .into_iter()
            .filter(|tag| tag.name.starts_with('v') && !tag.name.contains("preview"))
            .collect();

        if candidates.is_empty() {
            return None;
        }

        candidates.sort_by(|a, b| compare_versions(&b.name, &a.name));

        let latest = &candidates[0];
        Some(LatestTag {
            name: latest.name.clone(),
            url: release_url(&latest.name),
        })
    }

    /// Runs one full update check. Never fails; fetch problems surface as
    /// the `error` field on the result.
    pub async fn check_for_updates(&self) -> UpdateCheck {
        let current = self.current_version();

        let Some(latest) = self.fetch_latest_tag().await else {
            return UpdateCheck {
                current,
                has_update: false,
                latest: None,
                release_url: None,
                error: Some(FETCH_FAILED_MESSAGE.to_string()),
            };
        };

        let has_update = compare_versions(&latest.name, &current) == Ordering::Greater;

        if has_update {
            self.logger.info(&format!(
                "New version available: {} (current: {})",
                latest.name, current
            ));
        }

        UpdateCheck {
            current,
            has_update,
            latest: Some(latest.name),
            release_url: Some(latest.url),
            error: None,
        }
    }
}

impl Default for VersionChecker {
    fn default() -> Self {
        Self::new(Box::new(
            crate::version::registries::GitHubTagRegistry::default(),
        ))
    }
}
