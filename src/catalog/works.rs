// Work pagination — walk an author's works list page by page.
//
// Offsets advance by the page size until the catalog returns an empty page
// or the page cap is hit. A short politeness delay separates requests.

use std::collections::BTreeSet;
use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use tracing::{debug, info};

use super::models::{WorkEntry, WorkRecord};
use super::source::CatalogSource;

/// Pagination knobs for `fetch_works`.
#[derive(Debug, Clone)]
pub struct PageOptions {
    /// Entries requested per page
    pub page_size: u32,
    /// Hard cap on pages fetched, guards against runaway pagination
    pub max_pages: u32,
    /// Pause after each non-empty page
    pub delay: Duration,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            page_size: 100,
            max_pages: 200,
            delay: Duration::from_millis(200),
        }
    }
}

/// Merge every label-bearing field of a work entry into one sorted set.
///
/// Non-string values are skipped; labels are trimmed and empty ones dropped.
pub fn extract_subjects(entry: &WorkEntry) -> Vec<String> {
    let mut subjects = BTreeSet::new();
    for field in entry.subject_fields() {
        if let Value::Array(values) = field {
            for value in values {
                if let Some(label) = value.as_str() {
                    let label = label.trim();
                    if !label.is_empty() {
                        subjects.insert(label.to_string());
                    }
                }
            }
        }
    }
    subjects.into_iter().collect()
}

/// Convert a raw entry into the record the collector emits.
pub fn to_work_record(entry: &WorkEntry) -> WorkRecord {
    WorkRecord {
        key: entry.key(),
        title: entry.title(),
        subjects: extract_subjects(entry),
        first_publish_year: entry.first_publish_year(),
    }
}

/// Fetch every work for `author_key`, in page order then entry order.
///
/// Any failed request aborts the whole collection; nothing is salvaged.
pub async fn fetch_works(
    source: &dyn CatalogSource,
    author_key: &str,
    options: &PageOptions,
) -> Result<Vec<WorkRecord>> {
    let mut works = Vec::new();
    let mut offset: u32 = 0;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner} Works {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );

    for page_number in 0..options.max_pages {
        let page = source
            .fetch_works_page(author_key, options.page_size, offset)
            .await?;

        if page.entries.is_empty() {
            debug!(page = page_number, offset = offset, "Empty page, stopping");
            break;
        }

        works.extend(page.entries.iter().map(to_work_record));

        debug!(
            page = page_number,
            page_entries = page.entries.len(),
            total_collected = works.len(),
            "Fetched page of works for {}",
            author_key
        );
        pb.set_message(format!("{} collected", works.len()));
        pb.tick();

        offset = offset.saturating_add(options.page_size);
        if !options.delay.is_zero() {
            tokio::time::sleep(options.delay).await;
        }
    }

    pb.finish_and_clear();

    info!(
        count = works.len(),
        author_key = author_key,
        "Collected works"
    );

    Ok(works)
}
