//! Data-driven conformance testing.
//!
//! Vectors pair an input and a mode with the expected outcome: either an
//! abandoned parse, or a tree shape plus the exact diagnostics. Every tree a
//! vector produces is also checked for lossless coverage.
//!
//! # Requirements
//!
//! - Load and deserialize a corpus file
//! - Run every vector and record pass, fail or error
//! - Report a summary and the failing vectors

pub mod corpus;

use thiserror::Error;

pub use corpus::{
    Corpus, CorpusManifest, CorpusResults, CorpusRunner, Expected, ExpectedDiagnostic,
    TestResult, TestVector,
};

/// Result type for conformance operations.
pub type ConformanceResult<T> = Result<T, ConformanceError>;

/// Errors that can occur while loading a corpus.
#[derive(Debug, Error)]
pub enum ConformanceError {
    /// The corpus file could not be read.
    #[error("failed to read corpus file: {0}")]
    Io(#[from] std::io::Error),

    /// The corpus file is not valid corpus JSON.
    #[error("failed to parse corpus JSON: {0}")]
    Json(#[from] serde_json::Error),
}
