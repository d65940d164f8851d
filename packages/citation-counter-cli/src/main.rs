//! citecount - tally bullet items and citations across a vault folder
//!
//! Reads every markdown note under the document root, counts bullet items
//! (or `authors, year, title` citations) and writes a dated markdown report
//! into the vault.

mod config;
mod notifier;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use citation_counter::{
    run_and_notify, ExtractionMode, FsStore, ModeName, Notifier, ReportConfig, RunConfig, Severity,
    TracingNotifier, DEFAULT_MAX_LISTED,
};

use crate::config::EnvConfig;
use crate::notifier::ConsoleNotifier;

#[derive(Parser, Debug)]
#[command(name = "citecount")]
#[command(about = "Count bullet items and citations across markdown notes")]
struct Cli {
    /// Extraction mode: all-bullets, section-bullets or section-citations
    #[arg(short, long, default_value = ExtractionMode::ALL_BULLETS)]
    mode: ModeName,

    /// Section heading for section modes, e.g. "Related work"
    #[arg(short, long)]
    section: Option<String>,

    /// Document root inside the vault [env: CITECOUNT_ROOT, default: Papers/]
    #[arg(long)]
    root: Option<String>,

    /// Vault directory [env: CITECOUNT_VAULT, default: current directory]
    #[arg(long)]
    vault: Option<PathBuf>,

    /// Directory (relative to the vault) the report is written to
    #[arg(long)]
    report_dir: Option<PathBuf>,

    /// Report title (default depends on the mode)
    #[arg(long)]
    title: Option<String>,

    /// Source line shown under the title
    #[arg(long)]
    source: Option<String>,

    /// Suffix appended to counts [env: CITECOUNT_COUNT_SUFFIX, default: 회]
    #[arg(long)]
    count_suffix: Option<String>,

    /// Number of ranked entries to list
    #[arg(long, default_value_t = DEFAULT_MAX_LISTED)]
    limit: usize,

    /// Report date (YYYY-MM-DD); defaults to today in UTC
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Print the run outcome as JSON instead of notices
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn run_config(&self, env: &EnvConfig, mode: ExtractionMode) -> RunConfig {
        let mut report = ReportConfig::new()
            .with_count_suffix(
                self.count_suffix
                    .clone()
                    .unwrap_or_else(|| env.count_suffix.clone()),
            )
            .with_max_listed(self.limit);
        if let Some(title) = &self.title {
            report = report.with_title(title);
        }
        if let Some(source) = &self.source {
            report = report.with_source_description(source);
        }

        let mut config = RunConfig::new(mode)
            .with_root_prefix(self.root.clone().unwrap_or_else(|| env.root_prefix.clone()))
            .with_report(report);
        if let Some(date) = self.date {
            config = config.with_run_date(date);
        }
        config
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,citation_counter=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    // Loads .env, so RUST_LOG from the file reaches the filter
    let env = EnvConfig::from_env()?;
    init_tracing();

    let notifier: Box<dyn Notifier> = if cli.json {
        Box::new(TracingNotifier)
    } else {
        Box::new(ConsoleNotifier)
    };

    let mode = match ExtractionMode::with_section(cli.mode, cli.section.as_deref()) {
        Ok(mode) => mode,
        Err(e) => {
            notifier.notify(Severity::Error, &format!("Error: {}", e));
            std::process::exit(2);
        }
    };

    let config = cli.run_config(&env, mode);
    let vault = cli.vault.clone().unwrap_or_else(|| env.vault.clone());
    let mut store = FsStore::new(&vault);
    if let Some(dir) = &cli.report_dir {
        store = store.with_report_dir(dir);
    }

    tracing::info!("Analyzing {} in {}", config.root_prefix, vault.display());

    match run_and_notify(&store, notifier.as_ref(), &config).await {
        Ok(outcome) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("Report written to {}", outcome.file_name);
            }
            Ok(())
        }
        Err(_) => std::process::exit(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> EnvConfig {
        EnvConfig {
            vault: PathBuf::from("/vault"),
            root_prefix: "Papers/".to_string(),
            count_suffix: "회".to_string(),
        }
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["citecount"]);
        let mode = ExtractionMode::with_section(cli.mode, cli.section.as_deref()).unwrap();
        let config = cli.run_config(&env(), mode);

        assert_eq!(config.mode, ExtractionMode::AllBullets);
        assert_eq!(config.root_prefix, "Papers/");
        assert_eq!(config.report.count_suffix, "회");
        assert_eq!(config.report.max_listed, 20);
        assert_eq!(config.run_date, None);
    }

    #[test]
    fn test_cli_flags_override_env() {
        let cli = Cli::parse_from([
            "citecount",
            "--mode",
            "section-citations",
            "--section",
            "Related work",
            "--root",
            "Library/",
            "--count-suffix",
            " times",
            "--title",
            "Reading Stats",
            "--limit",
            "5",
            "--date",
            "2024-03-01",
        ]);
        let mode = ExtractionMode::with_section(cli.mode, cli.section.as_deref()).unwrap();
        let config = cli.run_config(&env(), mode);

        assert_eq!(
            config.mode,
            ExtractionMode::SectionCitations("Related work".to_string())
        );
        assert_eq!(config.root_prefix, "Library/");
        assert_eq!(config.report.count_suffix, " times");
        assert_eq!(config.report.title.as_deref(), Some("Reading Stats"));
        assert_eq!(config.report.max_listed, 5);
        assert_eq!(config.run_date, NaiveDate::from_ymd_opt(2024, 3, 1));
    }

    #[test]
    fn test_cli_parses_mode_name() {
        let cli = Cli::parse_from(["citecount", "--mode", "Section-Bullets"]);
        assert_eq!(cli.mode, ModeName::SectionBullets);

        assert!(Cli::try_parse_from(["citecount", "--mode", "everything"]).is_err());
    }
}
