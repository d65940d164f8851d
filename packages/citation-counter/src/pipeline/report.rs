//! Report rendering - rank aggregate entries and format them as markdown.

use crate::types::{
    record::CandidateRecord,
    report::{ReportMeta, ReportStats, ReportStyle},
    table::AggregateEntry,
};

/// Statistics over the full entry set (not just the listed ones).
///
/// An empty set yields all zeros rather than failing on `max`.
pub fn compute_stats(entries: &[AggregateEntry]) -> ReportStats {
    ReportStats {
        total_unique: entries.len(),
        total_instances: entries.iter().map(|e| e.count).sum(),
        max_count: entries.iter().map(|e| e.count).max().unwrap_or(0),
        multiple_count: entries.iter().filter(|e| e.is_repeated()).count(),
        skipped_lines: 0,
    }
}

/// Entries ordered by count, highest first.
///
/// The sort is stable: equal counts keep their input order.
pub fn rank(entries: &[AggregateEntry]) -> Vec<&AggregateEntry> {
    let mut ranked: Vec<&AggregateEntry> = entries.iter().collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// Bold display text of a record; citations add their title in italics.
pub fn display_text(record: &CandidateRecord) -> String {
    match record {
        CandidateRecord::Bullet { text } => format!("**{}**", text),
        CandidateRecord::Citation { title, .. } => {
            format!("**{}**: *{}*", record.key(), title)
        }
    }
}

/// Render the markdown report.
///
/// Pure: the same entries, meta and style always produce the same text.
pub fn render(entries: &[AggregateEntry], meta: &ReportMeta, style: &ReportStyle) -> String {
    let stats = ReportStats {
        skipped_lines: meta.skipped_lines,
        ..compute_stats(entries)
    };
    let labels = &style.labels;

    let mut report = String::new();
    report.push_str(&format!("# {}\n", meta.title));
    report.push_str(&format!("Generated: {}\n", meta.generation_date));
    report.push_str(&format!("Source: {}\n\n", meta.source_description));
    report.push_str(&format!("## {}\n\n", labels.list_heading));

    if entries.is_empty() {
        report.push_str(&format!("{}\n\n", labels.empty_list));
    }

    for (i, entry) in rank(entries).into_iter().take(style.max_listed).enumerate() {
        report.push_str(&format!(
            "{}. {} ({}{})\n",
            i + 1,
            display_text(&entry.record),
            entry.count,
            style.count_suffix
        ));
        report.push_str(&format!("   - Sources: {}\n\n", entry.sources.join(", ")));
    }

    report.push_str("## Statistics\n");
    report.push_str(&format!("- {}: {}\n", labels.total_unique, stats.total_unique));
    report.push_str(&format!("- {}: {}\n", labels.total_instances, stats.total_instances));
    report.push_str(&format!("- {}: {} times\n", labels.max_count, stats.max_count));
    report.push_str(&format!("- {}: {}\n", labels.multiple_count, stats.multiple_count));
    if stats.skipped_lines > 0 {
        report.push_str(&format!("- Skipped unparsable lines: {}\n", stats.skipped_lines));
    }

    report
}
