// Comparator pipeline: two theme documents in, console summary plus CSV
// tables and a JSON report out.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::documents::ThemeDocument;
use crate::output::report::{CompareReport, ReportAuthor};
use crate::output::tables::{write_distinctive_csv, write_shared_csv};
use crate::output::{terminal, ReportPaths};
use crate::subjects::ranking::{Side, SubjectComparison};

/// Load both theme documents from disk and compare them.
pub fn run(path1: &Path, path2: &Path, top: usize, paths: &ReportPaths) -> Result<CompareReport> {
    let doc1 = ThemeDocument::load(path1)?;
    let doc2 = ThemeDocument::load(path2)?;
    compare_documents(&doc1, &doc2, top, paths)
}

/// Compare two already-loaded theme documents and write every artifact.
pub fn compare_documents(
    doc1: &ThemeDocument,
    doc2: &ThemeDocument,
    top: usize,
    paths: &ReportPaths,
) -> Result<CompareReport> {
    let author1 = doc1.identity();
    let author2 = doc2.identity();
    let comparison = SubjectComparison::new(doc1.subject_counts(), doc2.subject_counts());

    terminal::display_comparison(&author1, &author2, &comparison, top)?;

    write_shared_csv(&paths.shared, &comparison)?;
    write_distinctive_csv(&paths.distinctive1, &comparison, Side::First, top)?;
    write_distinctive_csv(&paths.distinctive2, &comparison, Side::Second, top)?;

    let report = CompareReport::new(
        ReportAuthor::from(doc1),
        ReportAuthor::from(doc2),
        &comparison,
        paths.artifact_names(),
    );
    report.write(&paths.report)?;

    info!(
        jaccard = report.jaccard,
        cosine = report.cosine,
        shared = report.counts.shared,
        report = %paths.report.display(),
        "Comparison written"
    );

    Ok(report)
}
