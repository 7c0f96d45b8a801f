// Catalog source trait — the swap-ready seam between the collector and HTTP.
//
// The resolver and paginator only depend on this trait. The production
// implementation is OpenLibraryClient; tests provide scripted sources.

use anyhow::Result;
use async_trait::async_trait;

use super::models::{AuthorRecord, AuthorSearchResponse, WorksPage};

/// Read-only access to the three catalog endpoints the collector needs.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch an author record directly by bare key (e.g. `OL34184A`).
    async fn fetch_author(&self, key: &str) -> Result<AuthorRecord>;

    /// Run a free-text author search.
    async fn search_authors(&self, query: &str) -> Result<AuthorSearchResponse>;

    /// Fetch one page of an author's works.
    async fn fetch_works_page(&self, key: &str, limit: u32, offset: u32) -> Result<WorksPage>;
}
