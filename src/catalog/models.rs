// Catalog data types — raw API response schemas and the cleaned-up records
// the collector emits.
//
// Open Library responses are loosely typed: fields go missing, arrays can be
// null, and subject lists occasionally contain non-string values. The raw
// schemas below accept all of that with serde defaults, and the coercion into
// WorkRecord happens once, in `works::to_work_record`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The resolved author for a collection run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorIdentity {
    /// Bare catalog key, e.g. `OL34184A`
    pub key: String,
    /// Display name
    pub name: String,
}

/// One work by the author, with its subject labels merged and cleaned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkRecord {
    pub key: Option<String>,
    pub title: Option<String>,
    /// Deduplicated, trimmed, lexicographically sorted subject labels
    #[serde(default)]
    pub subjects: Vec<String>,
    pub first_publish_year: Option<i64>,
}

// -- Serde types for /authors/{key}.json --

/// Author record fetched directly by key.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorRecord {
    #[serde(default)]
    pub name: Option<String>,
}

// -- Serde types for /search/authors.json --

/// Response from the author search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorSearchResponse {
    #[serde(default)]
    pub docs: Vec<AuthorHit>,
}

/// A single author search candidate.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorHit {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Number of works the catalog attributes to this author
    #[serde(default)]
    pub work_count: Option<u64>,
}

// -- Serde types for /authors/{key}/works.json --

/// One page of an author's works.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorksPage {
    #[serde(default)]
    pub entries: Vec<WorkEntry>,
}

/// A raw work entry. Every field is kept untyped until extraction, so one
/// oddly shaped entry cannot reject the whole page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkEntry {
    #[serde(default)]
    pub key: Value,
    #[serde(default)]
    pub title: Value,
    #[serde(default)]
    pub subjects: Value,
    #[serde(default)]
    pub subject_places: Value,
    #[serde(default)]
    pub subject_times: Value,
    #[serde(default)]
    pub subject_people: Value,
    #[serde(default)]
    pub first_publish_year: Value,
}

impl WorkEntry {
    /// All label-bearing fields, in a fixed order.
    pub fn subject_fields(&self) -> [&Value; 4] {
        [
            &self.subjects,
            &self.subject_places,
            &self.subject_times,
            &self.subject_people,
        ]
    }

    /// Work key, when it is a string.
    pub fn key(&self) -> Option<String> {
        self.key.as_str().map(str::to_string)
    }

    /// Title, when it is a string.
    pub fn title(&self) -> Option<String> {
        self.title.as_str().map(str::to_string)
    }

    /// First publication year. Integers pass through, whole floats and
    /// numeric strings are coerced, anything else reads as missing.
    pub fn first_publish_year(&self) -> Option<i64> {
        match &self.first_publish_year {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| f as i64)
            }),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}
