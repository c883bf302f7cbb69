//! Scanner for embedded JSON.
//!
//! Turns a [`VirtualCharSequence`] into tokens with attached trivia. The
//! scanner is greedy and never backtracks. It never fails: malformed input
//! produces a token plus diagnostics.
//!
//! # Requirements
//!
//! - Every input character ends up in exactly one token or trivia run.
//! - Trivia before a token is its leading trivia; trivia at end of input is
//!   the trailing trivia of the end-of-file token.
//! - Strings, numbers and comments are diagnosed per [`JsonMode`]; the token
//!   stream itself is the same in both modes.

use super::chars::{TextSpan, VirtualChar, VirtualCharSequence};
use super::diagnostics::{DiagnosticCollector, DiagnosticKind};
use super::kind::{TokenKind, TriviaKind};
use super::limits::JsonMode;
use super::tree::{JsonToken, JsonTrivia};

/// Literal words Strict mode names in its diagnostic.
const NON_JSON_LITERALS: [&str; 3] = ["NaN", "Infinity", "undefined"];

/// Embedded JSON scanner.
pub struct Lexer<'a> {
    input: &'a VirtualCharSequence,
    pos: usize,
    mode: JsonMode,
}

impl<'a> Lexer<'a> {
    /// Create a scanner positioned at the start of `input`.
    pub fn new(input: &'a VirtualCharSequence, mode: JsonMode) -> Self {
        Self {
            input,
            pos: 0,
            mode,
        }
    }

    /// Source position just past the input, or zero when it is empty.
    pub fn end_position(&self) -> usize {
        self.input.span().map_or(0, |span| span.end())
    }

    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input.get(self.pos + offset).map(|vc| vc.value)
    }

    fn advance(&mut self) -> Option<VirtualChar> {
        let vc = self.input.get(self.pos);
        if vc.is_some() {
            self.pos += 1;
        }
        vc
    }

    fn chars_from(&self, start: usize) -> VirtualCharSequence {
        self.input.slice(start..self.pos)
    }

    /// Source span of the characters in `start..end`.
    fn span_of(&self, start: usize, end: usize) -> TextSpan {
        self.input
            .slice(start..end)
            .span()
            .unwrap_or_else(|| TextSpan::empty(self.end_position()))
    }

    /// Read the next token, reporting scan diagnostics into `diagnostics`.
    pub fn next_token(&mut self, diagnostics: &mut DiagnosticCollector) -> JsonToken {
        let leading = self.scan_trivia(diagnostics);
        let start = self.pos;

        let Some(c) = self.peek() else {
            return JsonToken::new(
                TokenKind::EndOfFile,
                Vec::new(),
                self.chars_from(start),
                None,
            )
            .with_trailing_trivia(leading);
        };

        let punctuation = match c {
            '{' => Some(TokenKind::OpenBrace),
            '}' => Some(TokenKind::CloseBrace),
            '[' => Some(TokenKind::OpenBracket),
            ']' => Some(TokenKind::CloseBracket),
            '(' => Some(TokenKind::OpenParen),
            ')' => Some(TokenKind::CloseParen),
            ':' => Some(TokenKind::Colon),
            ',' => Some(TokenKind::Comma),
            _ => None,
        };

        if let Some(kind) = punctuation {
            self.advance();
            return JsonToken::new(kind, leading, self.chars_from(start), None);
        }

        match c {
            '"' | '\'' => self.scan_string(leading, c, diagnostics),
            _ => self.scan_word(leading, diagnostics),
        }
    }

    /// Collect trivia up to the next token or end of input.
    fn scan_trivia(&mut self, diagnostics: &mut DiagnosticCollector) -> Vec<JsonTrivia> {
        let mut trivia = Vec::new();

        while let Some(c) = self.peek() {
            let start = self.pos;
            let kind = match c {
                '\r' => {
                    self.advance();
                    if self.peek() == Some('\n') {
                        self.advance();
                    }
                    TriviaKind::EndOfLine
                }
                '\n' => {
                    self.advance();
                    TriviaKind::EndOfLine
                }
                '/' if self.peek_at(1) == Some('/') => {
                    while !matches!(self.peek(), None | Some('\r') | Some('\n')) {
                        self.advance();
                    }
                    TriviaKind::SingleLineComment
                }
                '/' if self.peek_at(1) == Some('*') => {
                    self.scan_block_comment(diagnostics);
                    TriviaKind::MultiLineComment
                }
                '/' => {
                    // A lone slash is a malformed comment in either mode.
                    self.advance();
                    diagnostics.report(
                        DiagnosticKind::ErrorParsingComment,
                        self.span_of(start, self.pos),
                    );
                    trivia.push(JsonTrivia::new(
                        TriviaKind::SingleLineComment,
                        self.chars_from(start),
                    ));
                    continue;
                }
                c if c.is_whitespace() => {
                    self.scan_whitespace(diagnostics);
                    TriviaKind::Whitespace
                }
                _ => break,
            };

            if kind.is_comment() && self.mode.is_strict() {
                diagnostics.report(
                    DiagnosticKind::CommentsNotAllowed,
                    self.span_of(start, self.pos),
                );
            }
            trivia.push(JsonTrivia::new(kind, self.chars_from(start)));
        }

        trivia
    }

    fn scan_whitespace(&mut self, diagnostics: &mut DiagnosticCollector) {
        let mut reported = false;
        while let Some(c) = self.peek() {
            if !c.is_whitespace() || c == '\r' || c == '\n' {
                break;
            }
            let index = self.pos;
            self.advance();
            if !reported && self.mode.is_strict() && c != ' ' && c != '\t' {
                diagnostics.report(
                    DiagnosticKind::IllegalWhitespace,
                    self.span_of(index, index + 1),
                );
                reported = true;
            }
        }
    }

    fn scan_block_comment(&mut self, diagnostics: &mut DiagnosticCollector) {
        let start = self.pos;
        self.advance();
        self.advance();

        loop {
            match self.peek() {
                None => {
                    diagnostics.report(
                        DiagnosticKind::UnterminatedComment,
                        self.span_of(start, self.pos),
                    );
                    return;
                }
                Some('*') if self.peek_at(1) == Some('/') => {
                    self.advance();
                    self.advance();
                    return;
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }

    /// Scan a quoted string. `quote` is the opening character.
    fn scan_string(
        &mut self,
        leading: Vec<JsonTrivia>,
        quote: char,
        diagnostics: &mut DiagnosticCollector,
    ) -> JsonToken {
        let start = self.pos;
        self.advance();

        if quote == '\'' && self.mode.is_strict() {
            diagnostics.report(DiagnosticKind::SingleQuotedString, self.span_of(start, start + 1));
        }

        let mut value = String::new();
        loop {
            let Some(c) = self.peek() else {
                diagnostics.report(
                    DiagnosticKind::UnterminatedString,
                    self.span_of(start, self.pos),
                );
                break;
            };

            if c == quote {
                self.advance();
                break;
            }

            if c == '\\' {
                self.scan_escape(quote, &mut value, diagnostics);
                continue;
            }

            let index = self.pos;
            self.advance();
            if c < ' ' && self.mode.is_strict() {
                diagnostics.report(
                    DiagnosticKind::IllegalStringCharacter,
                    self.span_of(index, index + 1),
                );
            }
            value.push(c);
        }

        JsonToken::new(TokenKind::String, leading, self.chars_from(start), Some(value))
    }

    /// Decode one backslash escape into `value`.
    fn scan_escape(
        &mut self,
        quote: char,
        value: &mut String,
        diagnostics: &mut DiagnosticCollector,
    ) {
        let start = self.pos;
        self.advance();

        let decoded = match self.peek() {
            Some('"') => Some('"'),
            Some('\\') => Some('\\'),
            Some('/') => Some('/'),
            Some('b') => Some('\x08'),
            Some('f') => Some('\x0C'),
            Some('n') => Some('\n'),
            Some('r') => Some('\r'),
            Some('t') => Some('\t'),
            Some('\'') if quote == '\'' => Some('\''),
            Some('u') => {
                self.advance();
                let mut code = 0u32;
                let mut digits = 0;
                while digits < 4 {
                    match self.peek().and_then(|c| c.to_digit(16)) {
                        Some(d) => {
                            code = (code << 4) | d;
                            digits += 1;
                            self.advance();
                        }
                        None => break,
                    }
                }
                if digits == 4 {
                    value.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
                } else {
                    diagnostics.report(
                        DiagnosticKind::InvalidEscape,
                        self.span_of(start, self.pos),
                    );
                }
                return;
            }
            _ => None,
        };

        match decoded {
            Some(c) => {
                self.advance();
                value.push(c);
            }
            None => {
                // The unknown escape is kept as its bare character.
                if let Some(c) = self.peek() {
                    self.advance();
                    value.push(c);
                }
                diagnostics.report(DiagnosticKind::InvalidEscape, self.span_of(start, self.pos));
            }
        }
    }

    /// Scan a run of non-delimiter characters and classify it.
    fn scan_word(
        &mut self,
        leading: Vec<JsonTrivia>,
        diagnostics: &mut DiagnosticCollector,
    ) -> JsonToken {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if is_delimiter(c) {
                break;
            }
            self.advance();
        }

        let chars = self.chars_from(start);
        let text = chars.text();

        let kind = match text.as_str() {
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "null" => TokenKind::Null,
            "new" => TokenKind::NewKeyword,
            _ if text.starts_with(|c: char| c.is_ascii_digit() || matches!(c, '-' | '+' | '.')) => {
                TokenKind::Number
            }
            _ => TokenKind::Text,
        };

        if kind == TokenKind::Number {
            let span = self.span_of(start, self.pos);
            match classify_number(&text) {
                NumberForm::Json => {}
                NumberForm::Hex if !self.mode.is_strict() => {}
                NumberForm::NegativeInfinity if self.mode.is_strict() => {
                    diagnostics.report(DiagnosticKind::LiteralNotAllowed(text.clone()), span);
                }
                NumberForm::NegativeInfinity => {}
                NumberForm::Hex | NumberForm::Invalid => {
                    diagnostics.report(DiagnosticKind::InvalidNumber, span);
                }
            }
            return JsonToken::new(kind, leading, chars, Some(text));
        }

        JsonToken::new(kind, leading, chars, None)
    }
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace()
        || matches!(c, '{' | '}' | '[' | ']' | '(' | ')' | ':' | ',' | '"' | '\'' | '/')
}

/// Returns true for JavaScript-style identifiers: a letter, `_` or `$`
/// followed by letters, digits, `_` or `$`.
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

/// Returns true for a non-empty run of ASCII digits.
pub fn is_unsigned_integer(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true for the words Strict mode reports as disallowed literals.
pub fn is_non_json_literal(text: &str) -> bool {
    NON_JSON_LITERALS.contains(&text)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberForm {
    Json,
    Hex,
    NegativeInfinity,
    Invalid,
}

fn classify_number(text: &str) -> NumberForm {
    if is_json_number(text) {
        return NumberForm::Json;
    }
    if text == "-Infinity" {
        return NumberForm::NegativeInfinity;
    }

    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let hex_digits = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"));
    match hex_digits {
        Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit()) => {
            NumberForm::Hex
        }
        _ => NumberForm::Invalid,
    }
}

/// `-? (0 | [1-9][0-9]*) (\.[0-9]+)? ([eE][+-]?[0-9]+)?`
fn is_json_number(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;

    let digits = |i: &mut usize| {
        let start = *i;
        while bytes.get(*i).is_some_and(u8::is_ascii_digit) {
            *i += 1;
        }
        *i - start
    };

    if bytes.get(i) == Some(&b'-') {
        i += 1;
    }

    match bytes.get(i) {
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => {
            digits(&mut i);
        }
        _ => return false,
    }

    if bytes.get(i) == Some(&b'.') {
        i += 1;
        if digits(&mut i) == 0 {
            return false;
        }
    }

    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+') | Some(b'-')) {
            i += 1;
        }
        if digits(&mut i) == 0 {
            return false;
        }
    }

    i == bytes.len()
}
