// Collector pipeline: resolve the author, page through their works, and
// package everything as a CollectionDocument.

use anyhow::Result;
use tracing::info;

use crate::catalog::author::resolve_author;
use crate::catalog::source::CatalogSource;
use crate::catalog::works::{fetch_works, PageOptions};
use crate::documents::CollectionDocument;

/// Run a full collection for `query` (an author name or key).
pub async fn run(
    source: &dyn CatalogSource,
    query: &str,
    options: &PageOptions,
) -> Result<CollectionDocument> {
    let author = resolve_author(source, query).await?;
    let works = fetch_works(source, &author.key, options).await?;

    info!(
        author_key = %author.key,
        total_works = works.len(),
        "Collection complete"
    );

    Ok(CollectionDocument::new(author, works))
}
