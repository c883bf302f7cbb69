//! Corpus-based conformance testing.
//!
//! A corpus file looks like:
//!
//! ```json
//! {
//!   "manifest": { "format_version": "1", "version": "...", "description": "..." },
//!   "vectors": [
//!     { "id": "array-trailing-comma-strict", "input": "[1,2,]", "mode": "strict",
//!       "expected": { "tree": "Array[...]",
//!                     "diagnostics": [{ "message": "Trailing comma not allowed",
//!                                       "span": { "start": 4, "length": 1 } }] } },
//!     { "id": "deep", "input": "[[[[", "mode": "loose", "max_depth": 3,
//!       "expected": { "abort": true } }
//!   ]
//! }
//! ```
//!
//! `tree` is the space separated shape of the top-level values, or `null` to
//! skip the shape check. Vectors with `"escaped": true` hold a host literal
//! body that is decoded before parsing.

use std::fs;
use std::path::Path;

use serde::de::{self, Deserializer};
use serde::Deserialize;

use super::ConformanceResult;
use crate::json::{try_parse, JsonMode, JsonTree, Limits, TextSpan, VirtualCharSequence};

/// Corpus manifest with metadata.
#[derive(Debug, Deserialize)]
pub struct CorpusManifest {
    /// Format version of the corpus file.
    pub format_version: String,
    /// Corpus version.
    pub version: String,
    /// What the corpus covers.
    #[serde(default)]
    pub description: String,
}

/// A corpus containing test vectors.
#[derive(Debug, Deserialize)]
pub struct Corpus {
    /// Corpus metadata.
    pub manifest: CorpusManifest,
    /// List of test vectors.
    pub vectors: Vec<TestVector>,
}

/// A single test vector.
#[derive(Debug, Deserialize)]
pub struct TestVector {
    /// Unique identifier for the test.
    pub id: String,
    /// Embedded JSON text, or an escaped host literal body.
    pub input: String,
    /// Conformance mode to parse with.
    pub mode: JsonMode,
    /// Decode `input` as an escaped host literal first.
    #[serde(default)]
    pub escaped: bool,
    /// Nesting limit override.
    #[serde(default)]
    pub max_depth: Option<usize>,
    /// Expected outcome.
    pub expected: Expected,
}

/// Expected outcome of a vector.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Expected {
    /// The parse is abandoned and no tree exists.
    Abort {
        /// Only `true` loads; `"abort": false` is rejected.
        #[serde(deserialize_with = "only_true")]
        abort: bool,
    },
    /// A tree is produced.
    Tree {
        /// Shape of the top-level values; `None` skips the check.
        tree: Option<String>,
        /// Exact diagnostics, in order.
        diagnostics: Vec<ExpectedDiagnostic>,
    },
}

fn only_true<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    if bool::deserialize(deserializer)? {
        Ok(true)
    } else {
        Err(de::Error::custom("`abort` must be true"))
    }
}

/// A diagnostic as written in the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExpectedDiagnostic {
    /// Rendered message.
    pub message: String,
    /// Source span.
    pub span: TextSpan,
}

/// Result of running a single test vector.
#[derive(Debug)]
pub enum TestResult {
    /// Test passed.
    Pass,
    /// Test failed with mismatch.
    Fail {
        /// Expected result from the corpus.
        expected: String,
        /// Actual result.
        actual: String,
    },
    /// The produced tree broke the coverage invariant.
    Error {
        /// Error message.
        message: String,
    },
}

impl TestResult {
    /// Returns true if this is a passing result.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Returns true if this is a failing result.
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail { .. })
    }
}

/// Results from running the corpus.
#[derive(Debug, Default)]
pub struct CorpusResults {
    /// Number of tests that passed.
    pub passed: usize,
    /// Number of tests that failed.
    pub failed: usize,
    /// Number of tests that errored.
    pub errors: usize,
    /// Detailed results for each test.
    pub details: Vec<(String, TestResult)>,
}

impl CorpusResults {
    /// Create a new empty results container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a test result.
    pub fn record(&mut self, id: &str, result: TestResult) {
        match &result {
            TestResult::Pass => self.passed += 1,
            TestResult::Fail { .. } => self.failed += 1,
            TestResult::Error { .. } => self.errors += 1,
        }
        self.details.push((id.to_string(), result));
    }

    /// Get total number of tests run.
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.errors
    }

    /// Returns true if all tests passed (no failures or errors).
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }

    /// Get a summary string of the results.
    pub fn summary(&self) -> String {
        format!(
            "{} passed, {} failed, {} errors (total: {})",
            self.passed,
            self.failed,
            self.errors,
            self.total()
        )
    }

    /// Get failures and errors.
    pub fn failures(&self) -> Vec<&(String, TestResult)> {
        self.details.iter().filter(|(_, r)| !r.is_pass()).collect()
    }
}

/// Corpus runner that executes test vectors.
pub struct CorpusRunner {
    corpus: Corpus,
}

impl CorpusRunner {
    /// Load corpus from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> ConformanceResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Load corpus from JSON text.
    pub fn from_json(content: &str) -> ConformanceResult<Self> {
        let corpus: Corpus = serde_json::from_str(content)?;
        Ok(Self { corpus })
    }

    /// Get the corpus manifest.
    pub fn manifest(&self) -> &CorpusManifest {
        &self.corpus.manifest
    }

    /// Get the number of test vectors.
    pub fn vector_count(&self) -> usize {
        self.corpus.vectors.len()
    }

    /// Run all test vectors and return results.
    pub fn run_all(&self) -> CorpusResults {
        let mut results = CorpusResults::new();

        for vector in &self.corpus.vectors {
            let result = run_vector(vector);
            if !result.is_pass() {
                tracing::debug!(id = %vector.id, ?result, "conformance vector did not pass");
            }
            results.record(&vector.id, result);
        }

        results
    }
}

/// Run a single test vector.
pub fn run_vector(vector: &TestVector) -> TestResult {
    let limits = vector
        .max_depth
        .map_or_else(Limits::default, Limits::with_max_nesting_depth);

    let outcome = if vector.escaped {
        VirtualCharSequence::from_escaped_literal(&vector.input, 0)
    } else {
        Ok(VirtualCharSequence::from_text(&vector.input))
    }
    .and_then(|chars| try_parse(&chars, vector.mode, limits));

    match (&vector.expected, outcome) {
        (Expected::Abort { .. }, Err(_)) => TestResult::Pass,
        (Expected::Abort { .. }, Ok(tree)) => TestResult::Fail {
            expected: "abort".to_string(),
            actual: render_shape(&tree),
        },
        (Expected::Tree { .. }, Err(e)) => TestResult::Fail {
            expected: "tree".to_string(),
            actual: format!("abort: {}", e),
        },
        (Expected::Tree { tree: shape, diagnostics }, Ok(tree)) => {
            check_tree(&tree, shape.as_deref(), diagnostics)
        }
    }
}

fn check_tree(tree: &JsonTree, shape: Option<&str>, diagnostics: &[ExpectedDiagnostic]) -> TestResult {
    if let Err(e) = tree.verify_coverage() {
        return TestResult::Error {
            message: e.to_string(),
        };
    }

    if let Some(expected) = shape {
        let actual = render_shape(tree);
        if actual != expected {
            return TestResult::Fail {
                expected: expected.to_string(),
                actual,
            };
        }
    }

    let actual: Vec<ExpectedDiagnostic> = tree
        .diagnostics()
        .iter()
        .map(|d| ExpectedDiagnostic {
            message: d.message.clone(),
            span: d.span,
        })
        .collect();
    if actual != diagnostics {
        return TestResult::Fail {
            expected: render_diagnostics(diagnostics),
            actual: render_diagnostics(&actual),
        };
    }

    TestResult::Pass
}

/// Shapes of the top-level values, space separated.
fn render_shape(tree: &JsonTree) -> String {
    tree.values()
        .map(|v| v.as_node().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_diagnostics(diagnostics: &[ExpectedDiagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| format!("{} {}", d.message, d.span))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conformance::ConformanceError;

    fn vector(input: &str, mode: JsonMode, expected: Expected) -> TestVector {
        TestVector {
            id: "t".to_string(),
            input: input.to_string(),
            mode,
            escaped: false,
            max_depth: None,
            expected,
        }
    }

    #[test]
    fn test_corpus_results() {
        let mut results = CorpusResults::new();
        results.record("test1", TestResult::Pass);
        results.record("test2", TestResult::Pass);
        results.record(
            "test3",
            TestResult::Fail {
                expected: "a".to_string(),
                actual: "b".to_string(),
            },
        );

        assert_eq!(results.passed, 2);
        assert_eq!(results.failed, 1);
        assert_eq!(results.total(), 3);
        assert!(!results.all_passed());
        assert_eq!(results.failures().len(), 1);
        assert_eq!(results.summary(), "2 passed, 1 failed, 0 errors (total: 3)");
    }

    #[test]
    fn test_run_vector_checks_diagnostics() {
        let expected = Expected::Tree {
            tree: Some("Array['[', Sequence[Number(1), ','], ']']".to_string()),
            diagnostics: vec![ExpectedDiagnostic {
                message: "Trailing comma not allowed".to_string(),
                span: TextSpan::new(2, 1),
            }],
        };
        assert!(run_vector(&vector("[1,]", JsonMode::Strict, expected)).is_pass());

        let expected = Expected::Tree {
            tree: None,
            diagnostics: Vec::new(),
        };
        assert!(run_vector(&vector("[1,]", JsonMode::Strict, expected)).is_fail());
    }

    #[test]
    fn test_run_vector_abort() {
        let mut v = vector("[[[[]]]]", JsonMode::Loose, Expected::Abort { abort: true });
        v.max_depth = Some(3);
        assert!(run_vector(&v).is_pass());

        v.max_depth = None;
        assert!(run_vector(&v).is_fail());
    }

    #[test]
    fn test_expected_deserializes_both_forms() {
        let abort: Expected = serde_json::from_str(r#"{"abort": true}"#).unwrap();
        assert!(matches!(abort, Expected::Abort { abort: true }));

        let tree: Expected =
            serde_json::from_str(r#"{"tree": null, "diagnostics": []}"#).unwrap();
        assert!(matches!(tree, Expected::Tree { tree: None, .. }));
    }

    #[test]
    fn test_abort_false_is_rejected() {
        assert!(serde_json::from_str::<Expected>(r#"{"abort": false}"#).is_err());

        let corpus = r#"{
            "manifest": { "format_version": "1", "version": "0.1.0" },
            "vectors": [
                { "id": "inverted", "input": "[", "mode": "loose", "expected": { "abort": false } }
            ]
        }"#;
        let err = CorpusRunner::from_json(corpus).err().unwrap();
        assert!(matches!(err, ConformanceError::Json(_)));
    }

    #[test]
    fn test_load_reports_bad_json() {
        let err = CorpusRunner::from_json("{").err().unwrap();
        assert!(matches!(err, ConformanceError::Json(_)));
    }
}
