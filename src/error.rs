//! Error types for embedded JSON parsing.
//!
//! Malformed JSON is never an error here: it produces a tree plus diagnostics.
//! The types below cover the two hard-failure paths (the nesting guard and a
//! host literal that cannot be decoded) and the coverage verification walk.

use thiserror::Error;

use crate::json::{TextSpan, VirtualChar};

/// Hard failures. When one of these is returned no tree exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ParseError {
    /// Object/array/constructor nesting went past [`crate::Limits::max_nesting_depth`].
    #[error("nesting depth {depth} exceeds limit {limit}")]
    NestingTooDeep {
        /// Depth at which the parser stopped.
        depth: usize,
        /// Configured maximum.
        limit: usize,
    },

    /// The host literal contained an escape sequence that could not be decoded.
    #[error("invalid escape sequence in host literal at offset {offset}")]
    InvalidHostEscape {
        /// Source offset of the backslash.
        offset: usize,
    },
}

/// Result type for operations that may hit a hard failure.
pub type ParseResult<T> = Result<T, ParseError>;

/// A violation of the lossless-coverage invariant found by
/// [`crate::JsonTree::verify_coverage`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoverageError {
    /// A leaf character differs from the input character at the same position.
    #[error("leaf character {actual:?} at index {index} does not match input {expected:?}")]
    Mismatch {
        /// Position in the input sequence.
        index: usize,
        /// Character from the input.
        expected: VirtualChar,
        /// Character found in the tree.
        actual: VirtualChar,
    },

    /// The tree holds more characters than the input.
    #[error("tree has extra character at index {index} (input length {input_len})")]
    Overrun {
        /// Position of the first extra character.
        index: usize,
        /// Input length.
        input_len: usize,
    },

    /// The tree stopped before the end of the input.
    #[error("tree covers {covered} of {input_len} input characters")]
    Underrun {
        /// Number of characters the leaves covered.
        covered: usize,
        /// Input length.
        input_len: usize,
    },

    /// A diagnostic points outside the input.
    #[error("diagnostic span {span:?} lies outside the input (end {input_end})")]
    DiagnosticOutOfRange {
        /// Offending span.
        span: TextSpan,
        /// End position of the input.
        input_end: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ParseError::NestingTooDeep {
            depth: 65,
            limit: 64,
        };
        assert_eq!(err.to_string(), "nesting depth 65 exceeds limit 64");

        let err = ParseError::InvalidHostEscape { offset: 3 };
        assert_eq!(
            err.to_string(),
            "invalid escape sequence in host literal at offset 3"
        );
    }

    #[test]
    fn test_underrun_message() {
        let err = CoverageError::Underrun {
            covered: 2,
            input_len: 5,
        };
        assert_eq!(err.to_string(), "tree covers 2 of 5 input characters");
    }
}
