// Output formatting — CSV tables, terminal summary, and the JSON report.

pub mod report;
pub mod tables;
pub mod terminal;

use std::path::{Path, PathBuf};

/// Default artifact names, written into the output directory.
pub const SHARED_CSV: &str = "shared.csv";
pub const DISTINCTIVE_AUTHOR1_CSV: &str = "distinctive_author1.csv";
pub const DISTINCTIVE_AUTHOR2_CSV: &str = "distinctive_author2.csv";
pub const COMPARE_REPORT_JSON: &str = "compare_report.json";

/// Where the comparator writes its artifacts. Existing files are overwritten.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPaths {
    pub shared: PathBuf,
    pub distinctive1: PathBuf,
    pub distinctive2: PathBuf,
    pub report: PathBuf,
}

impl ReportPaths {
    /// The standard artifact names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            shared: dir.join(SHARED_CSV),
            distinctive1: dir.join(DISTINCTIVE_AUTHOR1_CSV),
            distinctive2: dir.join(DISTINCTIVE_AUTHOR2_CSV),
            report: dir.join(COMPARE_REPORT_JSON),
        }
    }

    /// Names of the CSV tables, as listed in the report.
    pub fn artifact_names(&self) -> Vec<String> {
        [&self.shared, &self.distinctive1, &self.distinctive2]
            .iter()
            .map(|p| {
                p.file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| p.display().to_string())
            })
            .collect()
    }
}

impl Default for ReportPaths {
    fn default() -> Self {
        Self::in_dir(Path::new("."))
    }
}

/// Frequency formatting used in the CSV tables.
pub fn format_freq(value: f64) -> String {
    format!("{value:.4}")
}
