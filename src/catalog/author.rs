// Author resolution — turn a CLI query into a catalog identity.
//
// A key-shaped query (`OL34184A`) is looked up directly. Anything else is
// treated as a name: we search, then pick the candidate the catalog credits
// with the most works.

use std::sync::OnceLock;

use anyhow::Result;
use regex_lite::Regex;
use tracing::{debug, info};

use super::error::CatalogError;
use super::models::{AuthorHit, AuthorIdentity};
use super::source::CatalogSource;

fn author_key_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^OL\d+A$").expect("author key pattern is valid"))
}

/// Whether `query` has the shape of an Open Library author key.
pub fn is_author_key(query: &str) -> bool {
    author_key_re().is_match(query.trim())
}

/// Strip any path prefix from a catalog key: `/authors/OL1A` (or
/// `/authors/OL1A/`) becomes `OL1A`.
pub fn normalize_author_key(raw: &str) -> &str {
    let trimmed = raw.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// Pick the hit with the highest declared work count.
///
/// Missing counts count as zero. On ties the earliest hit wins, so result
/// order from the catalog is respected.
pub fn pick_best_author(hits: &[AuthorHit]) -> Option<&AuthorHit> {
    let mut best: Option<&AuthorHit> = None;
    for hit in hits {
        let count = hit.work_count.unwrap_or(0);
        match best {
            Some(current) if current.work_count.unwrap_or(0) >= count => {}
            _ => best = Some(hit),
        }
    }
    best
}

/// Resolve a name or key into an AuthorIdentity.
///
/// Makes exactly one catalog call. Fails with `CatalogError::NoAuthorFound`
/// when a name search comes back empty.
pub async fn resolve_author(source: &dyn CatalogSource, query: &str) -> Result<AuthorIdentity> {
    let trimmed = query.trim();

    if is_author_key(trimmed) {
        debug!(key = trimmed, "Query is an author key, fetching directly");
        let record = source.fetch_author(trimmed).await?;
        let name = non_empty(record.name).unwrap_or_else(|| query.to_string());
        info!(key = trimmed, name = %name, "Resolved author by key");
        return Ok(AuthorIdentity {
            key: trimmed.to_string(),
            name,
        });
    }

    let response = source.search_authors(query).await?;
    debug!(candidates = response.docs.len(), "Author search complete");

    let best = pick_best_author(&response.docs).ok_or_else(|| CatalogError::NoAuthorFound {
        query: query.to_string(),
    })?;

    let raw_key = best
        .key
        .as_deref()
        .or(best.id.as_deref())
        .unwrap_or_default();
    let key = normalize_author_key(raw_key).to_string();
    let name = non_empty(best.name.clone()).unwrap_or_else(|| query.to_string());

    info!(
        key = %key,
        name = %name,
        work_count = best.work_count.unwrap_or(0),
        "Resolved author by name search"
    );

    Ok(AuthorIdentity { key, name })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
