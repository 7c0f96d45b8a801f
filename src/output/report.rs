// Machine-readable comparison summary (compare_report.json).

use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::documents::{write_json, ThemeDocument};
use crate::subjects::ranking::{Side, SubjectComparison};

/// Author identity as given in the theme document; missing fields are
/// written as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportAuthor {
    pub name: Option<String>,
    pub key: Option<String>,
}

impl From<&ThemeDocument> for ReportAuthor {
    fn from(doc: &ThemeDocument) -> Self {
        Self {
            name: doc.author_name.clone(),
            key: doc.author_key.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportCounts {
    pub a1_subjects: usize,
    pub a2_subjects: usize,
    pub shared: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareReport {
    pub author1: ReportAuthor,
    pub author2: ReportAuthor,
    pub jaccard: f64,
    pub cosine: f64,
    pub counts: ReportCounts,
    pub artifacts: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl CompareReport {
    pub fn new(
        author1: ReportAuthor,
        author2: ReportAuthor,
        comparison: &SubjectComparison,
        artifacts: Vec<String>,
    ) -> Self {
        Self {
            author1,
            author2,
            jaccard: comparison.scores.jaccard,
            cosine: comparison.scores.cosine,
            counts: ReportCounts {
                a1_subjects: comparison.subject_count(Side::First),
                a2_subjects: comparison.subject_count(Side::Second),
                shared: comparison.shared.len(),
            },
            artifacts,
            generated_at: Utc::now(),
        }
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        write_json(path, self)
    }
}
