//! GitHub tags API registry implementation

use std::time::Duration;

use tracing::warn;

use crate::config::{FETCH_TIMEOUT_MS, GITHUB_API_BASE_URL, REPO_NAME, REPO_OWNER, USER_AGENT};
use crate::version::error::RegistryError;
use crate::version::registry::{Tag, TagRegistry};

/// Registry implementation backed by the GitHub tags API
pub struct GitHubTagRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl GitHubTagRegistry {
    /// Creates a new GitHubTagRegistry with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .timeout(Duration::from_millis(FETCH_TIMEOUT_MS))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
        }
    }
}

impl Default for GitHubTagRegistry {
    fn default() -> Self {
        Self::new(GITHUB_API_BASE_URL)
    }
}

#[async_trait::async_trait]
impl TagRegistry for GitHubTagRegistry {
    async fn fetch_tags(&self) -> Result<Vec<Tag>, RegistryError> {
        let url = format!("{}/repos/{}/{}/tags", self.base_url, REPO_OWNER, REPO_NAME);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let tags: Vec<Tag> = response.json().await.map_err(|e| {
            warn!("Failed to parse GitHub tags response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        Ok(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn fetch_tags_returns_tags_in_registry_order() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/iBenzene/AIStudioToAPI/tags")
            .match_header("accept", "application/vnd.github.v3+json")
            .match_header("user-agent", USER_AGENT)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {"name": "v0.2.9", "commit": {"sha": "abc123"}},
                    {"name": "v0.2.8", "commit": {"sha": "def456"}},
                    {"name": "v0.3.0-preview", "commit": {"sha": "0a1b2c"}}
                ]"#,
            )
            .create_async()
            .await;

        let registry = GitHubTagRegistry::new(&server.url());
        let tags = registry.fetch_tags().await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            tags,
            vec![
                Tag {
                    name: "v0.2.9".to_string()
                },
                Tag {
                    name: "v0.2.8".to_string()
                },
                Tag {
                    name: "v0.3.0-preview".to_string()
                },
            ]
        );
    }

    #[tokio::test]
    async fn fetch_tags_returns_empty_list_for_repo_without_tags() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/iBenzene/AIStudioToAPI/tags")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let registry = GitHubTagRegistry::new(&server.url());
        let tags = registry.fetch_tags().await.unwrap();

        mock.assert_async().await;
        assert!(tags.is_empty());
    }

    #[tokio::test]
    async fn fetch_tags_returns_invalid_response_for_server_error() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/iBenzene/AIStudioToAPI/tags")
            .with_status(500)
            .with_body("Internal Server Error")
            .create_async()
            .await;

        let registry = GitHubTagRegistry::new(&server.url());
        let result = registry.fetch_tags().await;

        mock.assert_async().await;
        assert!(matches!(result, Err(RegistryError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn fetch_tags_returns_invalid_response_for_malformed_body() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/iBenzene/AIStudioToAPI/tags")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": "not a tag list"}"#)
            .create_async()
            .await;

        let registry = GitHubTagRegistry::new(&server.url());
        let result = registry.fetch_tags().await;

        mock.assert_async().await;
        assert!(matches!(result, Err(RegistryError::InvalidResponse(_))));
    }
}
