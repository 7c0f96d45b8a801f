// CSV tables for a subject comparison.

use std::path::Path;

use anyhow::{Context, Result};

use super::format_freq;
use crate::subjects::ranking::{Side, SubjectComparison};

/// Distinctive tables never hold fewer than this many rows (when available).
pub const MIN_DISTINCTIVE_ROWS: usize = 100;

/// Write every shared subject with both authors' counts and frequencies.
pub fn write_shared_csv(path: &Path, comparison: &SubjectComparison) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writer.write_record([
        "subject", "a1_count", "a2_count", "a1_freq", "a2_freq", "min_freq", "avg_freq",
    ])?;
    for subject in &comparison.shared {
        let s = comparison.stats(subject, Side::First);
        writer.write_record([
            s.subject.clone(),
            s.own_count.to_string(),
            s.other_count.to_string(),
            format_freq(s.own_freq),
            format_freq(s.other_freq),
            format_freq(s.min_freq()),
            format_freq(s.avg_freq()),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the distinctive list for `side`, capped at `max(top, 100)` rows.
pub fn write_distinctive_csv(
    path: &Path,
    comparison: &SubjectComparison,
    side: Side,
    top: usize,
) -> Result<()> {
    let (own, other) = match side {
        Side::First => ("a1", "a2"),
        Side::Second => ("a2", "a1"),
    };

    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writer.write_record([
        "subject".to_string(),
        format!("{own}_count"),
        format!("{own}_freq"),
        format!("{other}_count"),
        format!("{other}_freq"),
        "freq_gap".to_string(),
    ])?;
    let limit = top.max(MIN_DISTINCTIVE_ROWS);
    for subject in comparison.distinctive(side).iter().take(limit) {
        let s = comparison.stats(subject, side);
        writer.write_record([
            s.subject.clone(),
            s.own_count.to_string(),
            format_freq(s.own_freq),
            s.other_count.to_string(),
            format_freq(s.other_freq),
            format_freq(s.gap()),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
