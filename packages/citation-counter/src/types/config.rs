//! Configuration types for extraction, reporting and runs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CounterError, Result};

/// Default document root, relative to the store.
pub const DEFAULT_ROOT_PREFIX: &str = "Papers/";

/// Default counter suffix appended to occurrence counts ("N회").
pub const DEFAULT_COUNT_SUFFIX: &str = "회";

/// Default number of ranked entries listed in a report.
pub const DEFAULT_MAX_LISTED: usize = 20;

/// Which records to pull out of each document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "section", rename_all = "kebab-case")]
pub enum ExtractionMode {
    /// Every bullet line in the document
    AllBullets,

    /// Bullet lines under `## <heading>`
    SectionBullets(String),

    /// `- authors, year, title` lines under `## <heading>`
    SectionCitations(String),
}

impl ExtractionMode {
    pub const ALL_BULLETS: &'static str = "all-bullets";
    pub const SECTION_BULLETS: &'static str = "section-bullets";
    pub const SECTION_CITATIONS: &'static str = "section-citations";

    /// Build a mode from its CLI name and an optional section heading.
    ///
    /// Section modes require a non-blank heading. `all-bullets` ignores it.
    pub fn from_parts(mode: &str, section: Option<&str>) -> Result<Self> {
        Self::with_section(mode.parse()?, section)
    }

    /// Build a mode from an already parsed name.
    pub fn with_section(name: ModeName, section: Option<&str>) -> Result<Self> {
        let section = section.map(str::trim).filter(|s| !s.is_empty());
        let require_section = || {
            section
                .map(str::to_string)
                .ok_or_else(|| CounterError::MissingSectionHeading {
                    mode: name.to_string(),
                })
        };

        match name {
            ModeName::AllBullets => Ok(Self::AllBullets),
            ModeName::SectionBullets => Ok(Self::SectionBullets(require_section()?)),
            ModeName::SectionCitations => Ok(Self::SectionCitations(require_section()?)),
        }
    }

    /// CLI name of this mode.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AllBullets => Self::ALL_BULLETS,
            Self::SectionBullets(_) => Self::SECTION_BULLETS,
            Self::SectionCitations(_) => Self::SECTION_CITATIONS,
        }
    }

    /// Heading the mode is scoped to, if any.
    pub fn section_heading(&self) -> Option<&str> {
        match self {
            Self::AllBullets => None,
            Self::SectionBullets(h) | Self::SectionCitations(h) => Some(h),
        }
    }

    pub fn yields_citations(&self) -> bool {
        matches!(self, Self::SectionCitations(_))
    }
}

/// Mode name without its section heading, as given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModeName {
    #[default]
    AllBullets,
    SectionBullets,
    SectionCitations,
}

impl ModeName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllBullets => ExtractionMode::ALL_BULLETS,
            Self::SectionBullets => ExtractionMode::SECTION_BULLETS,
            Self::SectionCitations => ExtractionMode::SECTION_CITATIONS,
        }
    }
}

impl FromStr for ModeName {
    type Err = CounterError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            ExtractionMode::ALL_BULLETS => Ok(Self::AllBullets),
            ExtractionMode::SECTION_BULLETS => Ok(Self::SectionBullets),
            ExtractionMode::SECTION_CITATIONS => Ok(Self::SectionCitations),
            _ => Err(CounterError::InvalidMode {
                mode: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ModeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for ExtractionMode {
    fn default() -> Self {
        Self::AllBullets
    }
}

impl fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.section_heading() {
            Some(heading) => write!(f, "{} ({})", self.name(), heading),
            None => f.write_str(self.name()),
        }
    }
}

/// How the report is titled and formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Report title; defaults by mode ("Bullet Item Analysis" / "Citation Analysis")
    pub title: Option<String>,

    /// Source line; defaults to "<root folder> folder"
    pub source_description: Option<String>,

    /// Suffix appended to rendered counts, e.g. "회" renders `3회`.
    ///
    /// Default: "회".
    pub count_suffix: String,

    /// Maximum ranked entries listed. Default: 20.
    pub max_listed: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: None,
            source_description: None,
            count_suffix: DEFAULT_COUNT_SUFFIX.to_string(),
            max_listed: DEFAULT_MAX_LISTED,
        }
    }
}

impl ReportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the report title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the source description line.
    pub fn with_source_description(mut self, description: impl Into<String>) -> Self {
        self.source_description = Some(description.into());
        self
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

    /// Title to use for `mode`.
    pub fn title_for(&self, mode: &ExtractionMode) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None if mode.yields_citations() => "Citation Analysis".to_string(),
            None => "Bullet Item Analysis".to_string(),
        }
    }

    /// Source line to use for documents under `root_prefix`.
    pub fn source_for(&self, root_prefix: &str) -> String {
        self.source_description
            .clone()
            .unwrap_or_else(|| format!("{} folder", crate::error::folder_name(root_prefix)))
    }
}

/// Everything one run needs besides its collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Only documents whose path starts with this prefix are counted.
    ///
    /// Default: "Papers/".
    pub root_prefix: String,

    /// Extraction mode
    pub mode: ExtractionMode,

    /// Report formatting
    pub report: ReportConfig,

    /// Date stamped on the report and its file name; `None` uses today (UTC)
    pub run_date: Option<NaiveDate>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            root_prefix: DEFAULT_ROOT_PREFIX.to_string(),
            mode: ExtractionMode::default(),
            report: ReportConfig::default(),
            run_date: None,
        }
    }
}

impl RunConfig {
    /// Create a config for `mode` with default root and report settings.
    pub fn new(mode: ExtractionMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set the document root prefix.
    pub fn with_root_prefix(mut self, root_prefix: impl Into<String>) -> Self {
        self.root_prefix = root_prefix.into();
        self
    }

    /// Set report options.
    pub fn with_report(mut self, report: ReportConfig) -> Self {
        self.report = report;
        self
    }

    /// Pin the run date (reports are otherwise stamped with today's UTC date).
    pub fn with_run_date(mut self, date: NaiveDate) -> Self {
        self.run_date = Some(date);
        self
    }
}
