// Open Library HTTP client — unauthenticated JSON GETs with fixed timeouts.
//
// Every call is a single attempt: a non-success status or a timeout is
// returned as a CatalogError and aborts the run. There is no retry.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::CatalogError;
use super::models::{AuthorRecord, AuthorSearchResponse, WorksPage};
use super::source::CatalogSource;

/// Default Open Library endpoint.
pub const DEFAULT_OPENLIBRARY_URL: &str = "https://openlibrary.org";

/// Default User-Agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = "AuthorSubjectAnalysis/1.0 (academic use)";

/// Timeout for author search and author-by-key lookups.
pub const IDENTITY_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for works page fetches.
pub const PAGE_TIMEOUT: Duration = Duration::from_secs(60);

/// Thin reqwest wrapper around the Open Library REST API.
pub struct OpenLibraryClient {
    client: reqwest::Client,
    base_url: String,
}

impl OpenLibraryClient {
    /// Create a client pointing at `base_url` (trailing slashes are ignored).
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET `path` with query `params` and deserialize the JSON body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
        timeout: Duration,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);

        debug!(path = path, "Catalog GET request");

        let response = self
            .client
            .get(&url)
            .query(params)
            .timeout(timeout)
            .send()
            .await
            .map_err(|source| CatalogError::Transport {
                path: path.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Status {
                path: path.to_string(),
                status,
                body,
            }
            .into());
        }

        response
            .json::<T>()
            .await
            .map_err(|source| CatalogError::Transport {
                path: path.to_string(),
                source,
            })
            .with_context(|| format!("Failed to deserialize {path} response"))
    }
}

#[async_trait]
impl CatalogSource for OpenLibraryClient {
    async fn fetch_author(&self, key: &str) -> Result<AuthorRecord> {
        self.get_json(&format!("/authors/{key}.json"), &[], IDENTITY_TIMEOUT)
            .await
            .with_context(|| format!("Failed to fetch author {key}"))
    }

    async fn search_authors(&self, query: &str) -> Result<AuthorSearchResponse> {
        self.get_json("/search/authors.json", &[("q", query)], IDENTITY_TIMEOUT)
            .await
            .with_context(|| format!("Failed to search authors for \"{query}\""))
    }

    async fn fetch_works_page(&self, key: &str, limit: u32, offset: u32) -> Result<WorksPage> {
        let limit = limit.to_string();
        let offset = offset.to_string();
        self.get_json(
            &format!("/authors/{key}/works.json"),
            &[("limit", limit.as_str()), ("offset", offset.as_str())],
            PAGE_TIMEOUT,
        )
        .await
        .with_context(|| format!("Failed to fetch works for {key} at offset {offset}"))
    }
}
