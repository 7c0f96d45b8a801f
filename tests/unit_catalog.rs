// Unit tests for author resolution and work pagination.
//
// A scripted CatalogSource stands in for Open Library and records every
// call, so we can check both the results and how many requests were made.

use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::json;

use authorlens::catalog::author::resolve_author;
use authorlens::catalog::error::CatalogError;
use authorlens::catalog::models::{AuthorRecord, AuthorSearchResponse, WorksPage};
use authorlens::catalog::source::CatalogSource;
use authorlens::catalog::works::{fetch_works, PageOptions};

#[derive(Default)]
struct ScriptedSource {
    author: AuthorRecord,
    search: AuthorSearchResponse,
    pages: Vec<WorksPage>,
    fail_page: Option<usize>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedSource {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogSource for ScriptedSource {
    async fn fetch_author(&self, key: &str) -> Result<AuthorRecord> {
        self.calls.lock().unwrap().push(format!("author:{key}"));
        Ok(self.author.clone())
    }

    async fn search_authors(&self, query: &str) -> Result<AuthorSearchResponse> {
        self.calls.lock().unwrap().push(format!("search:{query}"));
        Ok(self.search.clone())
    }

    async fn fetch_works_page(&self, key: &str, limit: u32, offset: u32) -> Result<WorksPage> {
        let index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(format!("works:{key}:{limit}:{offset}"));
            calls.iter().filter(|c| c.starts_with("works:")).count() - 1
        };
        if self.fail_page == Some(index) {
            return Err(CatalogError::Status {
                path: format!("/authors/{key}/works.json"),
                status: 503,
                body: "unavailable".to_string(),
            }
            .into());
        }
        Ok(self.pages.get(index).cloned().unwrap_or_default())
    }
}

fn page(keys: &[&str]) -> WorksPage {
    let entries: Vec<_> = keys
        .iter()
        .map(|k| json!({"key": k, "title": format!("Title {k}"), "subjects": ["Fiction"]}))
        .collect();
    serde_json::from_value(json!({ "entries": entries })).unwrap()
}

fn search(docs: serde_json::Value) -> AuthorSearchResponse {
    serde_json::from_value(json!({ "docs": docs })).unwrap()
}

fn fast_options(page_size: u32, max_pages: u32) -> PageOptions {
    PageOptions {
        page_size,
        max_pages,
        delay: Duration::ZERO,
    }
}

// ============================================================
// Author resolution
// ============================================================

#[tokio::test]
async fn key_query_fetches_directly() {
    let source = ScriptedSource {
        author: AuthorRecord {
            name: Some("Agatha Christie".to_string()),
        },
        ..Default::default()
    };
    let author = resolve_author(&source, "OL34184A").await.unwrap();
    assert_eq!(author.key, "OL34184A");
    assert_eq!(author.name, "Agatha Christie");
    assert_eq!(source.calls(), vec!["author:OL34184A"]);
}

#[tokio::test]
async fn key_query_without_name_falls_back_to_query() {
    let source = ScriptedSource::default();
    let author = resolve_author(&source, "OL1A").await.unwrap();
    assert_eq!(author.name, "OL1A");
}

#[tokio::test]
async fn name_query_picks_max_work_count() {
    let source = ScriptedSource {
        search: search(json!([
            {"key": "/authors/OL1A", "name": "Agatha Christie Fan Club", "work_count": 3},
            {"key": "/authors/OL34184A", "name": "Agatha Christie", "work_count": 2400},
            {"key": "/authors/OL9A", "name": "Agatha Christie (dup)", "work_count": 2400}
        ])),
        ..Default::default()
    };
    let author = resolve_author(&source, "Agatha Christie").await.unwrap();
    assert_eq!(author.key, "OL34184A");
    assert_eq!(author.name, "Agatha Christie");
    assert_eq!(source.calls(), vec!["search:Agatha Christie"]);
}

#[tokio::test]
async fn name_query_uses_id_and_query_fallbacks() {
    let source = ScriptedSource {
        search: search(json!([{"id": "OL77A", "work_count": 1}])),
        ..Default::default()
    };
    let author = resolve_author(&source, "Anonymous").await.unwrap();
    assert_eq!(author.key, "OL77A");
    assert_eq!(author.name, "Anonymous");
}

#[tokio::test]
async fn empty_search_is_resolution_failure() {
    let source = ScriptedSource::default();
    let err = resolve_author(&source, "Nobody At All").await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CatalogError>(),
        Some(CatalogError::NoAuthorFound { .. })
    ));
}

// ============================================================
// Work pagination
// ============================================================

#[tokio::test]
async fn stops_on_empty_page() {
    let source = ScriptedSource {
        pages: vec![page(&["/works/OL1W", "/works/OL2W"]), page(&["/works/OL3W", "/works/OL4W"])],
        ..Default::default()
    };
    let works = fetch_works(&source, "OL1A", &fast_options(2, 200)).await.unwrap();

    let keys: Vec<_> = works.iter().filter_map(|w| w.key.as_deref()).collect();
    assert_eq!(keys, vec!["/works/OL1W", "/works/OL2W", "/works/OL3W", "/works/OL4W"]);
    assert_eq!(
        source.calls(),
        vec!["works:OL1A:2:0", "works:OL1A:2:2", "works:OL1A:2:4"]
    );
}

#[tokio::test]
async fn respects_max_pages() {
    let source = ScriptedSource {
        pages: vec![page(&["/works/OL1W"]), page(&["/works/OL2W"]), page(&["/works/OL3W"])],
        ..Default::default()
    };
    let works = fetch_works(&source, "OL1A", &fast_options(1, 2)).await.unwrap();
    assert_eq!(works.len(), 2);
    assert_eq!(source.calls().len(), 2);
}

#[tokio::test]
async fn failed_page_aborts_without_partial_results() {
    let source = ScriptedSource {
        pages: vec![page(&["/works/OL1W"]), page(&["/works/OL2W"])],
        fail_page: Some(1),
        ..Default::default()
    };
    let err = fetch_works(&source, "OL1A", &fast_options(1, 10))
        .await
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CatalogError>(),
        Some(CatalogError::Status { status: 503, .. })
    ));
}

#[test]
fn default_page_options() {
    let options = PageOptions::default();
    assert_eq!(options.page_size, 100);
    assert_eq!(options.max_pages, 200);
    assert_eq!(options.delay, Duration::from_millis(200));
}
