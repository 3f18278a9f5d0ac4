//! Registry trait for fetching release tags from a remote source

#[cfg(test)]
use mockall::automock;

use serde::Deserialize;

use crate::version::error::RegistryError;

/// A release tag as returned by the tag-listing endpoint.
///
/// Only the name is used; everything else in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tag {
    pub name: String,
}

/// Trait for fetching the tag list of the project repository
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait TagRegistry: Send + Sync {
    /// Fetches all tags, in the order the registry returns them.
    ///
    /// # Returns
    /// * `Ok(Vec<Tag>)` - The raw, unfiltered tag list
    /// * `Err(RegistryError)` - If the fetch fails
    async fn fetch_tags(&self) -> Result<Vec<Tag>, RegistryError>;
}
