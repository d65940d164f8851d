//! Report metadata, statistics and display labels.

use serde::{Deserialize, Serialize};

use crate::types::config::{ExtractionMode, ReportConfig, DEFAULT_COUNT_SUFFIX, DEFAULT_MAX_LISTED};

/// Header lines of a rendered report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMeta {
    pub title: String,
    pub source_description: String,

    /// Pre-formatted date (`YYYY-MM-DD`)
    pub generation_date: String,

    /// Citation lines dropped because they did not parse
    #[serde(default)]
    pub skipped_lines: usize,
}

impl ReportMeta {
    pub fn new(
        title: impl Into<String>,
        source_description: impl Into<String>,
        generation_date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            source_description: source_description.into(),
            generation_date: generation_date.into(),
            skipped_lines: 0,
        }
    }

    /// Attach the skipped-line diagnostic.
    pub fn with_skipped_lines(mut self, skipped: usize) -> Self {
        self.skipped_lines = skipped;
        self
    }
}

/// Summary numbers over the full (unsorted) entry set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportStats {
    pub total_unique: usize,
    pub total_instances: usize,

    /// 0 for an empty set
    pub max_count: usize,

    /// Entries with count > 1
    pub multiple_count: usize,

    pub skipped_lines: usize,
}

impl ReportStats {
    pub fn is_empty(&self) -> bool {
        self.total_unique == 0
    }
}

/// Wording used by the report, which differs between bullets and citations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLabels {
    pub list_heading: String,
    pub total_unique: String,
    pub total_instances: String,
    pub max_count: String,
    pub multiple_count: String,

    /// Shown under the list heading when nothing was found
    pub empty_list: String,
}

impl ReportLabels {
    pub fn bullets() -> Self {
        Self {
            list_heading: "Most Common Items".to_string(),
            total_unique: "Total unique items".to_string(),
            total_instances: "Total item instances".to_string(),
            max_count: "Most frequent".to_string(),
            multiple_count: "Items appearing multiple times".to_string(),
            empty_list: "No bullet items found.".to_string(),
        }
    }

    pub fn citations() -> Self {
        Self {
            list_heading: "Most Cited Papers".to_string(),
            total_unique: "Total unique citations".to_string(),
            total_instances: "Total citation instances".to_string(),
            max_count: "Most cited".to_string(),
            multiple_count: "Papers with multiple citations".to_string(),
            empty_list: "No citations found.".to_string(),
        }
    }

    pub fn for_mode(mode: &ExtractionMode) -> Self {
        if mode.yields_citations() {
            Self::citations()
        } else {
            Self::bullets()
        }
    }
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self::bullets()
    }
}

/// Formatting knobs for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportStyle {
    pub labels: ReportLabels,

    /// Appended to every rendered count
    pub count_suffix: String,

    /// Ranked entries listed before the statistics block
    pub max_listed: usize,
}

impl ReportStyle {
    /// Style for `mode` with the formatting options in `config`.
    pub fn for_mode(mode: &ExtractionMode, config: &ReportConfig) -> Self {
        Self {
            labels: ReportLabels::for_mode(mode),
            count_suffix: config.count_suffix.clone(),
            max_listed: config.max_listed,
        }
    }

    /// Set the count suffix.
    pub fn with_count_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.count_suffix = suffix.into();
        self
    }

    /// Set how many ranked entries are listed.
    pub fn with_max_listed(mut self, max: usize) -> Self {
        self.max_listed = max;
        self
    }
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            labels: ReportLabels::default(),
            count_suffix: DEFAULT_COUNT_SUFFIX.to_string(),
            max_listed: DEFAULT_MAX_LISTED,
        }
    }
}
