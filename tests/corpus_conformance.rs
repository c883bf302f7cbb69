//! Corpus-based conformance tests.
//!
//! These tests run every vector from `tests/vectors/corpus.json` and check
//! the produced tree shapes, diagnostics and abort behavior.
//!
//! # Requirements
//!
//! - Load corpus.json
//! - Run all test vectors
//! - Report failures with details

use embedded_json::conformance::{CorpusRunner, TestResult};
use std::path::Path;

/// Path to the corpus file relative to the project root.
const CORPUS_PATH: &str = "tests/vectors/corpus.json";

fn load_runner() -> CorpusRunner {
    let corpus_path = Path::new(env!("CARGO_MANIFEST_DIR")).join(CORPUS_PATH);
    CorpusRunner::load(&corpus_path).expect("Failed to load corpus")
}

/// Load and run the full corpus.
#[test]
fn test_full_corpus() {
    let runner = load_runner();

    println!("Loaded corpus with {} vectors", runner.vector_count());

    let results = runner.run_all();

    println!("\n=== Corpus Conformance Results ===");
    println!("{}", results.summary());

    for (id, result) in results.failures() {
        match result {
            TestResult::Fail { expected, actual } => {
                println!("  {} - expected: {}, actual: {}", id, expected, actual);
            }
            TestResult::Error { message } => println!("  {} - {}", id, message),
            TestResult::Pass => {}
        }
    }

    assert!(
        results.all_passed(),
        "Corpus conformance failed: {}",
        results.summary()
    );
    assert_eq!(results.total(), runner.vector_count());
}

/// Test that we can load the corpus manifest.
#[test]
fn test_corpus_manifest() {
    let runner = load_runner();
    let manifest = runner.manifest();

    assert_eq!(manifest.format_version, "1");
    assert!(!manifest.version.is_empty());
    assert!(runner.vector_count() > 0);
}

/// Missing files surface as an I/O error, not a panic.
#[test]
fn test_missing_corpus_file() {
    let result = CorpusRunner::load("tests/vectors/does-not-exist.json");
    assert!(matches!(
        result.err(),
        Some(embedded_json::conformance::ConformanceError::Io(_))
    ));
}
