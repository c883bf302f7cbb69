//! Diagnostics reported while scanning and parsing.
//!
//! The collector is append-only: diagnostics keep emission order, which for a
//! left-to-right scanner and recursive descent is source order. Duplicates are
//! kept.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::chars::TextSpan;

/// Every diagnostic the scanner and parser can emit. `Display` is the message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// A token that does not fit where it was found
    #[error("'{0}' unexpected")]
    Unexpected(char),
    /// A required punctuation token is absent
    #[error("'{0}' expected")]
    Expected(char),
    /// Comma directly before a closer (Strict)
    #[error("Trailing comma not allowed")]
    TrailingComma,
    /// Comment trivia (Strict)
    #[error("Comments not allowed")]
    CommentsNotAllowed,
    /// `/*` without `*/`
    #[error("Unterminated comment")]
    UnterminatedComment,
    /// `/` that starts neither `//` nor `/*`
    #[error("Error parsing comment")]
    ErrorParsingComment,
    /// Missing closing quote
    #[error("Unterminated string")]
    UnterminatedString,
    /// Backslash escape JSON does not define
    #[error("Invalid escape sequence")]
    InvalidEscape,
    /// Control character inside a string (Strict)
    #[error("Illegal string character")]
    IllegalStringCharacter,
    /// Whitespace other than space, tab, CR, LF (Strict)
    #[error("Illegal whitespace character")]
    IllegalWhitespace,
    /// Single-quoted string (Strict)
    #[error("Strings must start with \" not '")]
    SingleQuotedString,
    /// Number token that does not follow the number grammar
    #[error("Invalid number")]
    InvalidNumber,
    /// `NaN`, `Infinity`, `-Infinity`, `undefined` (Strict)
    #[error("'{0}' literal not allowed")]
    LiteralNotAllowed(String),
    /// Unquoted property name (Strict)
    #[error("Property name must be a string")]
    PropertyNameMustBeString,
    /// Property name that is no identifier or integer
    #[error("Invalid property name")]
    InvalidPropertyName,
    /// Property name without `:`
    #[error("Property name must be followed by a ':'")]
    MissingColon,
    /// Non-property member inside an object
    #[error("Only properties allowed in an object")]
    OnlyPropertiesAllowed,
    /// `name: value` as an array element
    #[error("Properties not allowed in an array")]
    PropertiesNotAllowedInArray,
    /// `name: value` as the value of another property
    #[error("Nested properties not allowed")]
    NestedPropertiesNotAllowed,
    /// Property with nothing after `:` (Strict)
    #[error("Value required")]
    ValueRequired,
    /// `new X(...)` (Strict)
    #[error("Constructors not allowed")]
    ConstructorsNotAllowed,
    /// `new` without a name
    #[error("Name expected")]
    NameExpected,
    /// `new` followed by something that is no identifier
    #[error("Invalid constructor name")]
    InvalidConstructorName,
    /// No top-level value at all (Strict)
    #[error("Syntax error")]
    SyntaxError,
    /// Second and later top-level values (Strict)
    #[error("Multiple top-level values not allowed")]
    MultipleTopLevelValues,
}

/// A message attached to a span of the host source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmbeddedDiagnostic {
    /// What went wrong.
    pub kind: DiagnosticKind,
    /// Rendered message.
    pub message: String,
    /// Source span the message refers to.
    pub span: TextSpan,
}

impl EmbeddedDiagnostic {
    /// Create a diagnostic; the message is rendered from `kind`.
    pub fn new(kind: DiagnosticKind, span: TextSpan) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            span,
        }
    }
}

/// Append-only diagnostic list shared by the scanner and parser of one parse.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<EmbeddedDiagnostic>,
}

impl DiagnosticCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a diagnostic.
    pub fn report(&mut self, kind: DiagnosticKind, span: TextSpan) {
        tracing::trace!(%kind, %span, "diagnostic");
        self.diagnostics.push(EmbeddedDiagnostic::new(kind, span));
    }

    /// Number of diagnostics so far.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns true if nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Freeze into the final list.
    pub fn into_vec(self) -> Vec<EmbeddedDiagnostic> {
        self.diagnostics
    }
}
