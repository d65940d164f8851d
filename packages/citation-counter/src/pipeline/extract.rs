//! Extraction - pull bullet and citation records out of a single document.
//!
//! Three modes share the same two building blocks:
//! - the bullet-line rule (`- ` marker, non-empty content)
//! - section slicing (`## <heading>` up to the next `#` line)

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::types::{config::ExtractionMode, document::Document, record::CandidateRecord};

/// Two-character bullet marker.
pub const BULLET_MARKER: &str = "- ";

/// Separator between citation fields.
pub const FIELD_SEPARATOR: &str = ", ";

/// `YYYY, title`: what follows the author field.
static YEAR_AND_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4}), (.+)$").unwrap());

/// Records found in one document plus what was dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractOutcome {
    /// Records in order of appearance
    pub records: Vec<CandidateRecord>,

    /// Bullet lines that did not parse as citations (citation mode only)
    pub skipped_lines: usize,
}

impl ExtractOutcome {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Extract records from `document` according to `mode`.
pub fn extract(document: &Document, mode: &ExtractionMode) -> Vec<CandidateRecord> {
    extract_with_diagnostics(document, mode).records
}

/// Like [`extract`], but also reports how many citation lines were skipped.
pub fn extract_with_diagnostics(document: &Document, mode: &ExtractionMode) -> ExtractOutcome {
    let content = document.content.as_str();

    let outcome = match mode {
        ExtractionMode::AllBullets => bullets_in(content),
        ExtractionMode::SectionBullets(heading) => section_slice(content, heading)
            .map(bullets_in)
            .unwrap_or_default(),
        ExtractionMode::SectionCitations(heading) => section_slice(content, heading)
            .map(citations_in)
            .unwrap_or_default(),
    };

    debug!(
        document = %document.identifier,
        content_len = content.len(),
        records = outcome.records.len(),
        skipped = outcome.skipped_lines,
        "extracted records"
    );

    outcome
}

/// Content of a bullet line, or `None` if the line is not a bullet.
///
/// The line is trimmed, must start with `"- "` and be longer than the
/// marker; the remainder is trimmed again.
pub fn bullet_text(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.len() <= BULLET_MARKER.len() {
        return None;
    }
    trimmed.strip_prefix(BULLET_MARKER).map(str::trim)
}

/// Parse a citation bullet line into a record.
///
/// Authors run up to the first `", "`; the next field must be a four-digit
/// year and the title takes the rest of the line. So `Smith, J., 2020, T`
/// has year field `J.` and does not parse.
pub fn parse_citation(line: &str) -> Option<CandidateRecord> {
    let text = bullet_text(line)?;
    let (authors, rest) = text.split_once(FIELD_SEPARATOR)?;
    let authors = authors.trim();
    if authors.is_empty() {
        return None;
    }
    let caps = YEAR_AND_TITLE.captures(rest)?;

    Some(CandidateRecord::citation(authors, &caps[1], caps[2].trim()))
}

/// Text between the first `## <heading>` line and the next `#` line.
///
/// Heading comparison is case-insensitive. Returns `None` when no such
/// heading exists; the slice runs to end of document when no later
/// heading follows.
pub fn section_slice<'a>(content: &'a str, heading: &str) -> Option<&'a str> {
    let wanted = heading.trim().to_lowercase();
    let mut start: Option<usize> = None;
    let mut offset = 0;

    for line in content.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        match start {
            None if is_heading_for(line, &wanted) => start = Some(offset),
            None => {}
            Some(body_start) if line.starts_with('#') => {
                return Some(&content[body_start..line_start]);
            }
            Some(_) => {}
        }
    }

    start.map(|body_start| &content[body_start..])
}

fn is_heading_for(line: &str, wanted_lower: &str) -> bool {
    line.trim_end()
        .strip_prefix("## ")
        .is_some_and(|title| title.trim().to_lowercase() == wanted_lower)
}

fn bullets_in(text: &str) -> ExtractOutcome {
    ExtractOutcome {
        records: text
            .lines()
            .filter_map(bullet_text)
            .map(CandidateRecord::bullet)
            .collect(),
        skipped_lines: 0,
    }
}

fn citations_in(text: &str) -> ExtractOutcome {
    let mut outcome = ExtractOutcome::default();

    for line in text.lines().filter(|line| bullet_text(line).is_some()) {
        match parse_citation(line) {
            Some(record) => outcome.records.push(record),
            None => outcome.skipped_lines += 1,
        }
    }

    outcome
}
