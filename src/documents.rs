// JSON documents exchanged between the subcommands.
//
//   collect  -> CollectionDocument (author + works)
//   themes   -> ThemeDocument      (author + per-subject counts)
//   compare  <- two ThemeDocuments
//
// Theme documents may come from other tools, so loading is permissive:
// missing fields default to empty/zero and only unparsable JSON is an error.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::catalog::models::{AuthorIdentity, WorkRecord};
use crate::subjects::counts::{aggregate_works, SubjectCounts};

/// Output of `authorlens collect`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionDocument {
    pub author_key: String,
    pub author_name: String,
    pub total_works: usize,
    pub works: Vec<WorkRecord>,
}

impl CollectionDocument {
    pub fn new(author: AuthorIdentity, works: Vec<WorkRecord>) -> Self {
        Self {
            author_key: author.key,
            author_name: author.name,
            total_works: works.len(),
            works,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse collection document {}", path.display()))
    }
}

/// One `{subject, count}` row of a theme document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeEntry {
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub count: Value,
}

impl ThemeEntry {
    /// Count coerced to a non-negative integer. Numbers are truncated,
    /// numeric strings are parsed, anything else reads as zero.
    pub fn count_value(&self) -> u64 {
        match &self.count {
            Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| *f > 0.0).map(|f| f as u64))
                .unwrap_or(0),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<u64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().filter(|f| *f > 0.0).map(|f| f as u64))
                    .unwrap_or(0)
            }
            _ => 0,
        }
    }
}

/// Per-author subject counts, the comparator's input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeDocument {
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub author_key: Option<String>,
    #[serde(default)]
    pub themes: Vec<ThemeEntry>,
}

impl ThemeDocument {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let doc: Self = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse theme document {}", path.display()))?;
        debug!(path = %path.display(), themes = doc.themes.len(), "Loaded theme document");
        Ok(doc)
    }

    /// Aggregate a collection into themes, most frequent subject first
    /// (ties alphabetical).
    pub fn from_collection(collection: &CollectionDocument) -> Self {
        let counts = aggregate_works(&collection.works);
        let mut themes: Vec<(String, u64)> = counts.into_iter().collect();
        themes.sort_by(|a, b| b.1.cmp(&a.1));

        Self {
            author_name: Some(collection.author_name.clone()),
            author_key: Some(collection.author_key.clone()),
            themes: themes
                .into_iter()
                .map(|(subject, count)| ThemeEntry {
                    subject: Some(subject),
                    count: Value::from(count),
                })
                .collect(),
        }
    }

    /// Subject -> count map. Rows without a usable subject are skipped; a
    /// repeated subject keeps its last count.
    pub fn subject_counts(&self) -> SubjectCounts {
        let mut counts = SubjectCounts::new();
        for entry in &self.themes {
            let Some(subject) = entry.subject.as_deref().map(str::trim) else {
                continue;
            };
            if subject.is_empty() {
                continue;
            }
            counts.insert(subject.to_string(), entry.count_value());
        }
        counts
    }

    /// Author identity for console display, with empty strings for missing
    /// fields. The JSON report keeps them as `null` instead.
    pub fn identity(&self) -> AuthorIdentity {
        AuthorIdentity {
            key: self.author_key.clone().unwrap_or_default(),
            name: self.author_name.clone().unwrap_or_default(),
        }
    }
}

/// Write `value` as pretty JSON, keeping non-ASCII characters as-is.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}
