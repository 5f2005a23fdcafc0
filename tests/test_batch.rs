//! Batch driver tests against layout fixtures on disk.

use pdf_outliner::batch::{self, BatchSummary};
use pdf_outliner::layout::HeadingLevel;
use pdf_outliner::{Error, Heading, OutlineExtractor, OutlineResult};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn read_result(path: &Path) -> OutlineResult {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_process_file_writes_outline() {
    let out = TempDir::new().unwrap();
    let written = batch::process_file(&OutlineExtractor::new(), &fixture("field_guide.json"), out.path()).unwrap();

    assert_eq!(written, out.path().join("field_guide.json"));

    let result = read_result(&written);
    assert_eq!(result.title, "A Field Guide to Shorebirds");
    assert_eq!(
        result.outline,
        vec![
            Heading::new(HeadingLevel::H1, "Chapter 1 Identification", 1),
            Heading::new(HeadingLevel::H2, "1.1 Bill Shape", 1),
            Heading::new(HeadingLevel::H3, "1.1.1 Curved Bills", 2),
            Heading::new(HeadingLevel::H1, "第2章 分布", 2),
        ]
    );
}

#[test]
fn test_output_is_pretty_and_keeps_unicode() {
    let out = TempDir::new().unwrap();
    let written = batch::process_file(&OutlineExtractor::new(), &fixture("field_guide.json"), out.path()).unwrap();
    let text = fs::read_to_string(written).unwrap();

    assert!(text.contains("\n  \"outline\": ["));
    assert!(text.contains("第2章 分布"));
    assert!(!text.contains("\\u"));
}

#[test]
fn test_process_file_malformed_input() {
    let out = TempDir::new().unwrap();
    let err = batch::process_file(&OutlineExtractor::new(), &fixture("broken.json"), out.path()).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    assert!(!out.path().join("broken.json").exists());
}

#[test]
fn test_process_dir_continues_past_failures() {
    let input = TempDir::new().unwrap();
    let output = input.path().join("nested").join("out");

    fs::copy(fixture("field_guide.json"), input.path().join("guide.JSON")).unwrap();
    fs::copy(fixture("broken.json"), input.path().join("broken.json")).unwrap();
    fs::write(input.path().join("notes.txt"), "not an input").unwrap();

    let summary = batch::process_dir(&OutlineExtractor::new(), input.path(), &output).unwrap();

    assert_eq!(summary, BatchSummary { processed: 1, failed: 1 });
    assert!(output.join("guide.json").exists());
    assert!(!output.join("notes.json").exists());
}

#[test]
fn test_collect_inputs_sorted_and_filtered() {
    let dir = TempDir::new().unwrap();
    for name in ["b.json", "a.json", "readme.md"] {
        fs::write(dir.path().join(name), "{}").unwrap();
    }
    fs::create_dir(dir.path().join("sub.json")).unwrap();

    let inputs = batch::collect_inputs(dir.path()).unwrap();
    assert_eq!(inputs, vec![dir.path().join("a.json"), dir.path().join("b.json")]);
}

#[test]
fn test_empty_directory() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let summary = batch::process_dir(&OutlineExtractor::new(), input.path(), output.path()).unwrap();
    assert_eq!(summary, BatchSummary::default());
}
