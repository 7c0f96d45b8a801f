// Colored terminal summary for a subject comparison.
//
// Rendering goes through any `io::Write` so the summary can be captured;
// `display_comparison` is the stdout entry point.

use std::io::{self, Write};

use colored::Colorize;

use crate::catalog::models::AuthorIdentity;
use crate::subjects::ranking::{Side, SubjectComparison};

/// Print identities, scores, and the top-`top` rows of each ranking.
pub fn display_comparison(
    author1: &AuthorIdentity,
    author2: &AuthorIdentity,
    comparison: &SubjectComparison,
    top: usize,
) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_comparison(&mut stdout, author1, author2, comparison, top)
}

/// Render the summary into `out`.
pub fn write_comparison<W: Write>(
    out: &mut W,
    author1: &AuthorIdentity,
    author2: &AuthorIdentity,
    comparison: &SubjectComparison,
    top: usize,
) -> io::Result<()> {
    writeln!(
        out,
        "Author 1: {} ({}) subjects={}",
        author1.name.bold(),
        author1.key,
        comparison.subject_count(Side::First)
    )?;
    writeln!(
        out,
        "Author 2: {} ({}) subjects={}",
        author2.name.bold(),
        author2.key,
        comparison.subject_count(Side::Second)
    )?;
    writeln!(
        out,
        "Jaccard (set overlap): {}",
        format!("{:.3}", comparison.scores.jaccard).cyan()
    )?;
    writeln!(
        out,
        "Cosine similarity (normalized counts): {}",
        format!("{:.3}", comparison.scores.cosine).cyan()
    )?;
    writeln!(out)?;

    writeln!(out, "{}", "Top shared themes:".bold())?;
    for subject in comparison.shared.iter().take(top) {
        let s = comparison.stats(subject, Side::First);
        writeln!(
            out,
            "  - {} | a1={} ({:.3}), a2={} ({:.3})",
            s.subject, s.own_count, s.own_freq, s.other_count, s.other_freq
        )?;
    }

    write_distinctive(out, "Distinctive for Author 1:", comparison, Side::First, top)?;
    write_distinctive(out, "Distinctive for Author 2:", comparison, Side::Second, top)
}

fn write_distinctive<W: Write>(
    out: &mut W,
    title: &str,
    comparison: &SubjectComparison,
    side: Side,
    top: usize,
) -> io::Result<()> {
    writeln!(out, "\n{}", title.bold())?;
    for subject in comparison.distinctive(side).iter().take(top) {
        let gap = comparison.stats(subject, side).gap();
        let gap_str = format!("{gap:.3}");
        let colored_gap = if gap > 0.0 {
            gap_str.green()
        } else if gap < 0.0 {
            gap_str.red()
        } else {
            gap_str.dimmed()
        };
        writeln!(out, "  - {subject} | gap={colored_gap}")?;
    }
    Ok(())
}
