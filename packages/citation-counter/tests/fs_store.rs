//! Runs against a vault directory on disk.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use citation_counter::{
    run, CounterError, DocumentSource, ExtractionMode, FsStore, ReportSink, RunConfig,
};

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn run_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

#[tokio::test]
async fn test_lists_markdown_recursively_and_skips_hidden() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "Papers/a.md", "- x");
    write(dir.path(), "Papers/2021/b.md", "- y");
    write(dir.path(), "Papers/notes.txt", "- z");
    write(dir.path(), "Papers/.trash/c.md", "- w");
    write(dir.path(), "Other/d.md", "- v");

    let store = FsStore::new(dir.path());
    let mut docs = store.list_documents("Papers/").await.unwrap();
    docs.sort_by(|a, b| a.path.cmp(&b.path));

    let paths: Vec<_> = docs.iter().map(|d| d.path.as_str()).collect();
    assert_eq!(paths, vec!["Papers/2021/b.md", "Papers/a.md"]);
    assert_eq!(docs[0].identifier, "b");

    let content = store.read_document("Papers/2021/b.md").await.unwrap();
    assert_eq!(content, "- y");
}

#[tokio::test]
async fn test_missing_root_directory() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "Papers", "not a directory");

    let store = FsStore::new(dir.path());
    let err = store.list_documents("Papers/").await.unwrap_err();
    assert!(matches!(err, CounterError::RootNotFound { .. }));

    let err = store.list_documents("Missing/").await.unwrap_err();
    assert_eq!(err.to_string(), "Missing folder not found!");
}

#[tokio::test]
async fn test_write_report_creates_then_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsStore::new(dir.path()).with_report_dir("Reports");

    store.write_report("r.md", "first version").await.unwrap();
    store.write_report("r.md", "second").await.unwrap();

    let written = fs::read_to_string(dir.path().join("Reports").join("r.md")).unwrap();
    assert_eq!(written, "second");
}

#[tokio::test]
async fn test_full_run_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "Papers/transformers.md",
        "# Transformers\n\n## Related work\n\
         - Vaswani, 2017, Attention Is All You Need\n\
         - Bahdanau, 2014, Neural Machine Translation\n",
    );
    write(
        dir.path(),
        "Papers/bert.md",
        "## Related Work\n- Vaswani, 2017, Attention Is All You Need\n\n\
         ## Results\n- Bahdanau, 2014, ignored\n",
    );

    let store = FsStore::new(dir.path());
    let config = RunConfig::new(ExtractionMode::SectionCitations("related work".to_string()))
        .with_run_date(run_date());

    let outcome = run(&store, &config).await.unwrap();

    assert_eq!(outcome.file_name, "Citation Analysis 2024-03-01.md");
    let written = fs::read_to_string(dir.path().join("Citation Analysis 2024-03-01.md")).unwrap();
    assert_eq!(written, outcome.analysis.report);
    assert!(written.contains(
        "1. **Vaswani, 2017**: *Attention Is All You Need* (2회)\n   - Sources: bert, transformers\n"
    ));
    assert!(written.contains("2. **Bahdanau, 2014**: *Neural Machine Translation* (1회)\n"));
}
