//! Virtual characters: decoded characters that remember where they came from.
//!
//! The host tokenizer hands the parser a [`VirtualCharSequence`] instead of raw
//! text, so raw and escaped host literals look identical to the scanner. An
//! escape such as `\u0041` becomes one `'A'` whose span covers six source
//! characters.

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, ParseResult};

/// A `(start, length)` range in host source coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextSpan {
    /// First source position.
    pub start: usize,
    /// Number of source positions covered.
    pub length: usize,
}

impl TextSpan {
    /// Create a span.
    pub const fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// Zero-length span at `position`.
    pub const fn empty(position: usize) -> Self {
        Self {
            start: position,
            length: 0,
        }
    }

    /// One past the last covered position.
    pub const fn end(&self) -> usize {
        self.start + self.length
    }

    /// Returns true if the span covers nothing.
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Smallest span covering both `self` and `other`.
    pub fn cover(&self, other: TextSpan) -> TextSpan {
        let start = self.start.min(other.start);
        let end = self.end().max(other.end());
        TextSpan::new(start, end - start)
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{})", self.start, self.end())
    }
}

/// A decoded character together with the source span it was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VirtualChar {
    /// Decoded character.
    pub value: char,
    /// Source span; longer than one for escape sequences.
    pub span: TextSpan,
}

impl VirtualChar {
    /// Create a virtual character.
    pub const fn new(value: char, span: TextSpan) -> Self {
        Self { value, span }
    }
}

/// An immutable, cheaply sliceable run of [`VirtualChar`]s.
///
/// Slices share the backing storage, so tokens and trivia in a tree hold
/// windows into the one sequence the parse started from.
#[derive(Clone)]
pub struct VirtualCharSequence {
    chars: Arc<[VirtualChar]>,
    range: Range<usize>,
}

impl VirtualCharSequence {
    /// Wrap an already decoded character list.
    pub fn new(chars: Vec<VirtualChar>) -> Self {
        let len = chars.len();
        Self {
            chars: chars.into(),
            range: 0..len,
        }
    }

    /// An empty sequence.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// One virtual char per `char` of `text`, positions starting at zero.
    pub fn from_text(text: &str) -> Self {
        Self::from_text_at(text, 0)
    }

    /// One virtual char per `char` of `text`, positions starting at `offset`.
    pub fn from_text_at(text: &str, offset: usize) -> Self {
        let chars = text
            .chars()
            .enumerate()
            .map(|(i, c)| VirtualChar::new(c, TextSpan::new(offset + i, 1)))
            .collect();
        Self::new(chars)
    }

    /// Decode the body of a C-family escaped string literal.
    ///
    /// Supported escapes: `\\ \" \' \0 \a \b \f \n \r \t \v \uXXXX`. Positions
    /// count `char`s of `text`, starting at `offset`.
    pub fn from_escaped_literal(text: &str, offset: usize) -> ParseResult<Self> {
        let source: Vec<char> = text.chars().collect();
        let mut chars = Vec::with_capacity(source.len());
        let mut pos = 0;

        while pos < source.len() {
            let start = pos;
            let c = source[pos];
            pos += 1;

            if c != '\\' {
                chars.push(VirtualChar::new(c, TextSpan::new(offset + start, 1)));
                continue;
            }

            let invalid = ParseError::InvalidHostEscape {
                offset: offset + start,
            };
            let escaped = *source.get(pos).ok_or(invalid.clone())?;
            pos += 1;

            let value = match escaped {
                '\\' => '\\',
                '"' => '"',
                '\'' => '\'',
                '0' => '\0',
                'a' => '\x07',
                'b' => '\x08',
                'f' => '\x0C',
                'n' => '\n',
                'r' => '\r',
                't' => '\t',
                'v' => '\x0B',
                'u' => {
                    let digits = source.get(pos..pos + 4).ok_or(invalid.clone())?;
                    let mut code = 0u32;
                    for d in digits {
                        code = (code << 4) | d.to_digit(16).ok_or(invalid.clone())?;
                    }
                    pos += 4;
                    char::from_u32(code).ok_or(invalid)?
                }
                _ => return Err(invalid),
            };

            chars.push(VirtualChar::new(
                value,
                TextSpan::new(offset + start, pos - start),
            ));
        }

        Ok(Self::new(chars))
    }

    /// Number of virtual characters.
    pub fn len(&self) -> usize {
        self.range.len()
    }

    /// Returns true if the sequence has no characters.
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Character at `index`, relative to this sequence.
    pub fn get(&self, index: usize) -> Option<VirtualChar> {
        if index < self.len() {
            self.chars.get(self.range.start + index).copied()
        } else {
            None
        }
    }

    /// Contiguous sub-sequence; out-of-range bounds are clamped.
    pub fn slice(&self, range: Range<usize>) -> Self {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        Self {
            chars: Arc::clone(&self.chars),
            range: self.range.start + start..self.range.start + end,
        }
    }

    /// The characters as a slice.
    pub fn as_slice(&self) -> &[VirtualChar] {
        self.chars.get(self.range.clone()).unwrap_or(&[])
    }

    /// Iterate over the characters.
    pub fn iter(&self) -> impl Iterator<Item = VirtualChar> + '_ {
        self.as_slice().iter().copied()
    }

    /// Decoded text of the sequence.
    pub fn text(&self) -> String {
        self.iter().map(|vc| vc.value).collect()
    }

    /// Source span from the first character's start to the last character's end.
    pub fn span(&self) -> Option<TextSpan> {
        let slice = self.as_slice();
        match (slice.first(), slice.last()) {
            (Some(first), Some(last)) => Some(first.span.cover(last.span)),
            _ => None,
        }
    }
}

impl Default for VirtualCharSequence {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for VirtualCharSequence {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for VirtualCharSequence {}

impl fmt::Debug for VirtualCharSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VirtualCharSequence({:?}", self.text())?;
        if let Some(span) = self.span() {
            write!(f, " @ {}", span)?;
        }
        write!(f, ")")
    }
}
