//! Embedded JSON scanning, parsing and tree model.
//!
//! # Architecture
//!
//! The subsystem is organized into focused modules, leaves first:
//!
//! - [`chars`] - virtual characters and their source spans
//! - [`kind`] - token, trivia and node kind tags
//! - [`limits`] - conformance mode and nesting limits
//! - [`diagnostics`] - append-only diagnostic collector
//! - [`tree`] - lossless tree, traversal and coverage check
//! - [`lexer`] - scanner producing tokens with trivia
//! - [`parser`] - recursive descent with error recovery
//!
//! # Requirements
//!
//! - Leaves reproduce the input exactly, in both modes.
//! - Mode changes diagnostics, never the tree shape.
//! - Nesting depth is bounded by [`Limits::max_nesting_depth`].
//!
//! # Example
//!
//! ```
//! use embedded_json::json::{parse, JsonMode, NodeKind, VirtualCharSequence};
//!
//! let chars = VirtualCharSequence::from_text("{a: 1} // note");
//! let tree = parse(&chars, JsonMode::Loose).unwrap();
//! assert!(tree.diagnostics().is_empty());
//!
//! let kinds: Vec<NodeKind> = tree.values().map(|v| v.kind()).collect();
//! assert_eq!(kinds, vec![NodeKind::Object]);
//! ```

pub mod chars;
pub mod diagnostics;
pub mod kind;
pub mod lexer;
pub mod limits;
pub mod parser;
pub mod tree;

// Re-export commonly used items
pub use chars::{TextSpan, VirtualChar, VirtualCharSequence};
pub use diagnostics::{DiagnosticKind, EmbeddedDiagnostic};
pub use kind::{NodeKind, TokenKind, TriviaKind};
pub use limits::{JsonMode, Limits};
pub use parser::{parse, parse_with_limits, try_parse};
pub use tree::{
    ArrayNode, CompilationUnit, ConstructorNode, JsonNode, JsonSequence, JsonToken, JsonTree,
    JsonTrivia, JsonValue, LiteralNode, NodeOrToken, ObjectNode, PropertyNode, SequenceItem,
    TextNode,
};
