//! Embedded JSON - lossless parsing of JSON found inside host-language string literals.
//!
//! The crate turns a sequence of decoded "virtual characters" (each carrying the
//! source span it was decoded from) into an immutable syntax tree that reproduces
//! its input character-for-character, together with the diagnostics found along
//! the way.
//!
//! # Architecture
//!
//! - [`json`] - character contract, scanner, parser, diagnostics and tree model
//! - [`error`] - hard-failure and verification errors
//! - [`conformance`] - data-driven conformance corpus runner
//!
//! # Modes
//!
//! Two conformance profiles share one grammar. [`JsonMode::Strict`] diagnoses
//! everything outside standard JSON; [`JsonMode::Loose`] silently accepts the
//! common superset (comments, trailing commas, unquoted names, `new X(...)`).
//! The tree shape never depends on the mode.
//!
//! # Example
//!
//! ```
//! use embedded_json::{parse, JsonMode, VirtualCharSequence};
//!
//! let chars = VirtualCharSequence::from_text("[1,2,]");
//! let tree = parse(&chars, JsonMode::Strict).unwrap();
//! assert_eq!(tree.diagnostics().len(), 1);
//! assert_eq!(tree.to_text(), "[1,2,]");
//! ```

// Parsing runs on interactively edited text, so library code must never panic.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod conformance;
pub mod error;
pub mod json;

// Re-export commonly used types
pub use error::{CoverageError, ParseError, ParseResult};
pub use json::{
    parse, parse_with_limits, try_parse, DiagnosticKind, EmbeddedDiagnostic, JsonMode, JsonNode,
    JsonToken, JsonTree, JsonValue, Limits, NodeKind, NodeOrToken, TextSpan, TokenKind,
    VirtualChar, VirtualCharSequence,
};
