//! Recursive descent parser for embedded JSON.
//!
//! One grammar serves both modes; the mode only decides which diagnostics are
//! reported, so a given input produces the same tree shape in Strict and
//! Loose. Malformed input is recovered from by inserting zero-width missing
//! tokens or wrapping misplaced tokens in Text nodes.
//!
//! # Requirements
//!
//! - The tree covers every input character exactly once.
//! - Nesting of objects, arrays and constructors past
//!   [`Limits::max_nesting_depth`] abandons the parse.
//! - A closer that belongs to an enclosing construct ends the inner list.

use super::chars::{TextSpan, VirtualCharSequence};
use super::diagnostics::{DiagnosticCollector, DiagnosticKind};
use super::kind::TokenKind;
use super::lexer::{is_identifier, is_non_json_literal, is_unsigned_integer, Lexer};
use super::limits::{JsonMode, Limits};
use super::tree::{
    ArrayNode, CompilationUnit, ConstructorNode, JsonSequence, JsonToken, JsonTree, JsonValue,
    LiteralNode, ObjectNode, PropertyNode, SequenceItem, TextNode,
};
use crate::error::{ParseError, ParseResult};

/// Where a value is being parsed. A name followed by `:` only becomes a
/// property where one can be recovered with a single diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    TopLevel,
    Member,
    Element,
    Argument,
    PropertyValue,
}

impl Position {
    fn misplaced_property(self) -> Option<DiagnosticKind> {
        match self {
            Self::Element => Some(DiagnosticKind::PropertiesNotAllowedInArray),
            Self::PropertyValue => Some(DiagnosticKind::NestedPropertiesNotAllowed),
            Self::TopLevel | Self::Member | Self::Argument => None,
        }
    }
}

/// Embedded JSON parser.
pub struct Parser<'a> {
    input: &'a VirtualCharSequence,
    lexer: Lexer<'a>,
    current: JsonToken,
    mode: JsonMode,
    limits: Limits,
    depth: usize,
    closers: Vec<TokenKind>,
    diagnostics: DiagnosticCollector,
}

impl<'a> Parser<'a> {
    /// Create a parser and read the first token.
    pub fn new(input: &'a VirtualCharSequence, mode: JsonMode, limits: Limits) -> Self {
        let mut diagnostics = DiagnosticCollector::new();
        let mut lexer = Lexer::new(input, mode);
        let current = lexer.next_token(&mut diagnostics);
        Self {
            input,
            lexer,
            current,
            mode,
            limits,
            depth: 0,
            closers: Vec::new(),
            diagnostics,
        }
    }

    /// Parse the whole input into a tree.
    pub fn parse(mut self) -> ParseResult<JsonTree> {
        let mut items = Vec::new();
        let mut values = 0usize;

        while self.current.kind() != TokenKind::EndOfFile {
            let value = if is_value_start(self.current.kind()) {
                self.parse_value(Position::TopLevel)?
            } else {
                self.skip_unexpected()
            };

            if !matches!(value, JsonValue::Text(_)) {
                values += 1;
                if values > 1 && self.mode.is_strict() {
                    if let Some(span) = value.as_node().tokens().find_map(JsonToken::span) {
                        self.report(DiagnosticKind::MultipleTopLevelValues, span);
                    }
                }
            }
            items.push(SequenceItem::Value(value));
        }

        if values == 0 && self.mode.is_strict() {
            let span = self.input.span().unwrap_or_default();
            self.report(DiagnosticKind::SyntaxError, span);
        }

        let Parser {
            input,
            current,
            mode,
            diagnostics,
            ..
        } = self;

        Ok(JsonTree {
            text: input.clone(),
            mode,
            root: CompilationUnit {
                sequence: JsonSequence::new(items),
                end_of_file: current,
            },
            diagnostics: diagnostics.into_vec(),
        })
    }

    /// Advance to the next token, returning the one just consumed.
    fn advance(&mut self) -> JsonToken {
        let next = self.lexer.next_token(&mut self.diagnostics);
        std::mem::replace(&mut self.current, next)
    }

    fn report(&mut self, kind: DiagnosticKind, span: TextSpan) {
        self.diagnostics.report(kind, span);
    }

    /// Span of a token; zero width at end of input for the end-of-file token.
    fn span_of(&self, token: &JsonToken) -> TextSpan {
        token
            .span()
            .unwrap_or_else(|| TextSpan::empty(self.lexer.end_position()))
    }

    fn current_span(&self) -> TextSpan {
        self.span_of(&self.current)
    }

    fn enter(&mut self) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > self.limits.max_nesting_depth {
            return Err(ParseError::NestingTooDeep {
                depth: self.depth,
                limit: self.limits.max_nesting_depth,
            });
        }
        Ok(())
    }

    fn exit(&mut self) {
        self.depth -= 1;
    }

    /// Consume `kind` if it is the current token, otherwise synthesize a
    /// missing one and report it as expected.
    fn expect(&mut self, kind: TokenKind) -> JsonToken {
        if self.current.kind() == kind {
            return self.advance();
        }
        if let Some(c) = kind.punctuation() {
            self.report(DiagnosticKind::Expected(c), self.current_span());
        }
        JsonToken::missing(kind)
    }

    /// Parse a value. The current token must satisfy [`is_value_start`].
    fn parse_value(&mut self, position: Position) -> ParseResult<JsonValue> {
        let kind = self.current.kind();
        match kind {
            TokenKind::OpenBrace => return self.parse_object(),
            TokenKind::OpenBracket => return self.parse_array(),
            TokenKind::NewKeyword => return self.parse_constructor(),
            TokenKind::String
            | TokenKind::Number
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Null
            | TokenKind::Text => {}
            _ => return Ok(self.skip_unexpected()),
        }

        let token = self.advance();
        let is_name = kind == TokenKind::String || kind.is_word();
        if is_name && self.current.kind() == TokenKind::Colon {
            if let Some(diagnostic) = position.misplaced_property() {
                return self.parse_misplaced_property(token, diagnostic);
            }
        }

        if kind == TokenKind::Text {
            return Ok(self.parse_bare_word(token));
        }
        Ok(JsonValue::Literal(LiteralNode { token }))
    }

    /// Wrap the current token in a Text node and report it.
    fn skip_unexpected(&mut self) -> JsonValue {
        let token = self.advance();
        if let Some(first) = token.chars().get(0) {
            self.report(DiagnosticKind::Unexpected(first.value), self.span_of(&token));
        }
        JsonValue::Text(TextNode { token })
    }

    fn parse_bare_word(&mut self, token: JsonToken) -> JsonValue {
        let text = token.text();
        let span = self.span_of(&token);
        let first = text.chars().next().unwrap_or(' ');

        if !is_identifier(&text) {
            self.report(DiagnosticKind::Unexpected(first), span);
            return JsonValue::Text(TextNode { token });
        }

        if self.mode.is_strict() {
            let kind = if is_non_json_literal(&text) {
                DiagnosticKind::LiteralNotAllowed(text)
            } else {
                DiagnosticKind::Unexpected(first)
            };
            self.report(kind, span);
        }
        JsonValue::Literal(LiteralNode { token })
    }

    fn parse_array(&mut self) -> ParseResult<JsonValue> {
        self.enter()?;
        let open_bracket = self.advance();
        let sequence = self.parse_list(TokenKind::CloseBracket, Position::Element)?;
        let close_bracket = self.expect(TokenKind::CloseBracket);
        self.exit();

        Ok(JsonValue::Array(ArrayNode {
            open_bracket,
            sequence,
            close_bracket,
        }))
    }

    fn parse_object(&mut self) -> ParseResult<JsonValue> {
        self.enter()?;
        let open_brace = self.advance();
        let sequence = self.parse_list(TokenKind::CloseBrace, Position::Member)?;
        let close_brace = self.expect(TokenKind::CloseBrace);
        self.exit();

        Ok(JsonValue::Object(ObjectNode {
            open_brace,
            sequence,
            close_brace,
        }))
    }

    fn parse_constructor(&mut self) -> ParseResult<JsonValue> {
        self.enter()?;
        let new_keyword = self.advance();
        if self.mode.is_strict() {
            let span = self.span_of(&new_keyword);
            self.report(DiagnosticKind::ConstructorsNotAllowed, span);
        }

        let name = if self.current.kind().is_word() {
            let name = self.advance();
            if !is_identifier(&name.text()) {
                let span = self.span_of(&name);
                self.report(DiagnosticKind::InvalidConstructorName, span);
            }
            name
        } else {
            self.report(DiagnosticKind::NameExpected, self.current_span());
            JsonToken::missing(TokenKind::Text)
        };

        let (open_paren, sequence, close_paren) = if self.current.kind() == TokenKind::OpenParen {
            let open_paren = self.advance();
            let sequence = self.parse_list(TokenKind::CloseParen, Position::Argument)?;
            let close_paren = self.expect(TokenKind::CloseParen);
            (open_paren, sequence, close_paren)
        } else {
            let open_paren = self.expect(TokenKind::OpenParen);
            (
                open_paren,
                JsonSequence::default(),
                JsonToken::missing(TokenKind::CloseParen),
            )
        };
        self.exit();

        Ok(JsonValue::Constructor(ConstructorNode {
            new_keyword,
            name,
            open_paren,
            sequence,
            close_paren,
        }))
    }

    /// Parse a comma separated list up to `closer`, an enclosing closer, or
    /// end of input. The closer itself is left for the caller.
    fn parse_list(&mut self, closer: TokenKind, position: Position) -> ParseResult<JsonSequence> {
        let in_object = position == Position::Member;
        self.closers.push(closer);
        let mut items = Vec::new();
        let mut expect_value = true;
        let mut trailing_comma = None;

        loop {
            let kind = self.current.kind();
            if kind == TokenKind::EndOfFile || self.closers.contains(&kind) {
                break;
            }

            if kind == TokenKind::Comma {
                let comma = self.advance();
                let span = self.span_of(&comma);
                trailing_comma = None;
                if !expect_value {
                    trailing_comma = Some(span);
                } else if in_object {
                    self.report(DiagnosticKind::OnlyPropertiesAllowed, span);
                } else if self.mode.is_strict() {
                    self.report(DiagnosticKind::Unexpected(','), span);
                }
                items.push(SequenceItem::Separator(comma));
                expect_value = true;
                continue;
            }

            if !expect_value {
                self.report(DiagnosticKind::Expected(','), self.current_span());
                items.push(SequenceItem::Separator(JsonToken::missing(TokenKind::Comma)));
            }

            let value = if in_object {
                self.parse_member()?
            } else if is_value_start(kind) {
                self.parse_value(position)?
            } else {
                self.skip_unexpected()
            };
            items.push(SequenceItem::Value(value));
            expect_value = false;
            trailing_comma = None;
        }

        if let Some(span) = trailing_comma {
            if self.mode.is_strict() && self.current.kind() == closer {
                self.report(DiagnosticKind::TrailingComma, span);
            }
        }

        self.closers.pop();
        Ok(JsonSequence::new(items))
    }

    /// Parse one object member: a property, or a recovered non-property.
    fn parse_member(&mut self) -> ParseResult<JsonValue> {
        let kind = self.current.kind();

        if kind == TokenKind::String || kind.is_word() {
            return self.parse_property();
        }

        if is_value_start(kind) {
            self.report(DiagnosticKind::OnlyPropertiesAllowed, self.current_span());
            return self.parse_value(Position::Member);
        }

        Ok(self.skip_unexpected())
    }

    fn parse_property(&mut self) -> ParseResult<JsonValue> {
        let name = self.advance();
        self.finish_property(name, None)
    }

    /// A name and `:` where no property belongs. The property is kept and the
    /// colon reported; it counts toward the nesting depth since its value can
    /// itself be another misplaced property.
    fn parse_misplaced_property(
        &mut self,
        name: JsonToken,
        diagnostic: DiagnosticKind,
    ) -> ParseResult<JsonValue> {
        self.enter()?;
        let property = self.finish_property(name, Some(diagnostic))?;
        self.exit();
        Ok(property)
    }

    fn finish_property(
        &mut self,
        name: JsonToken,
        misplaced: Option<DiagnosticKind>,
    ) -> ParseResult<JsonValue> {
        let span = self.span_of(&name);

        if name.kind() != TokenKind::String {
            if self.mode.is_strict() {
                self.report(DiagnosticKind::PropertyNameMustBeString, span);
            } else {
                let text = name.text();
                if !is_identifier(&text) && !is_unsigned_integer(&text) {
                    self.report(DiagnosticKind::InvalidPropertyName, span);
                }
            }
        }

        let colon = if self.current.kind() == TokenKind::Colon {
            let colon = self.advance();
            if let Some(diagnostic) = misplaced {
                let span = self.span_of(&colon);
                self.report(diagnostic, span);
            }
            colon
        } else {
            self.report(DiagnosticKind::MissingColon, self.current_span());
            JsonToken::missing(TokenKind::Colon)
        };

        let value = if is_value_start(self.current.kind()) {
            self.parse_value(Position::PropertyValue)?
        } else {
            if self.mode.is_strict() {
                let position = self.current_span().start;
                self.report(DiagnosticKind::ValueRequired, TextSpan::empty(position));
            }
            JsonValue::Text(TextNode {
                token: JsonToken::missing(TokenKind::Text),
            })
        };

        Ok(JsonValue::Property(PropertyNode {
            name,
            colon,
            value: Box::new(value),
        }))
    }
}

/// Tokens that can begin a value.
fn is_value_start(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::OpenBrace
            | TokenKind::OpenBracket
            | TokenKind::NewKeyword
            | TokenKind::String
            | TokenKind::Number
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Null
            | TokenKind::Text
    )
}

/// Parse `input`, returning the hard failure if there is one.
pub fn try_parse(
    input: &VirtualCharSequence,
    mode: JsonMode,
    limits: Limits,
) -> ParseResult<JsonTree> {
    tracing::trace!(len = input.len(), %mode, "parsing embedded json");

    let result = Parser::new(input, mode, limits).parse();
    match &result {
        Ok(tree) => {
            tracing::trace!(diagnostics = tree.diagnostics().len(), "parsed embedded json");
        }
        Err(err) => {
            tracing::debug!(%err, %mode, "embedded json parse abandoned");
        }
    }
    result
}

/// Parse `input` with default limits. `None` when the parse was abandoned.
pub fn parse(input: &VirtualCharSequence, mode: JsonMode) -> Option<JsonTree> {
    parse_with_limits(input, mode, Limits::default())
}

/// Parse `input` with custom limits. `None` when the parse was abandoned.
pub fn parse_with_limits(
    input: &VirtualCharSequence,
    mode: JsonMode,
    limits: Limits,
) -> Option<JsonTree> {
    try_parse(input, mode, limits).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(input: &str, mode: JsonMode) -> JsonTree {
        parse(&VirtualCharSequence::from_text(input), mode).unwrap()
    }

    fn messages(tree: &JsonTree) -> Vec<String> {
        tree.diagnostics().iter().map(|d| d.message.clone()).collect()
    }

    fn shape(tree: &JsonTree) -> String {
        tree.root()
            .sequence()
            .values()
            .map(|v| v.as_node().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_parse_literals() {
        let tree = parse_str("[\"a\", 1, true, false, null]", JsonMode::Strict);
        assert_eq!(
            shape(&tree),
            "Array['[', Sequence[String(\"a\"), ',', Number(1), ',', True(true), ',', \
             False(false), ',', Null(null)], ']']"
        );
        assert!(tree.diagnostics().is_empty());
    }

    #[test]
    fn test_parse_object() {
        let tree = parse_str(r#"{"a": [1], "b": {}}"#, JsonMode::Strict);
        assert!(tree.diagnostics().is_empty());
        let names: Vec<String> = match tree.values().next() {
            Some(JsonValue::Object(object)) => {
                object.properties().map(PropertyNode::name_text).collect()
            }
            _ => Vec::new(),
        };
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_missing_closer() {
        let tree = parse_str("[1", JsonMode::Loose);
        assert_eq!(messages(&tree), vec!["']' expected"]);
        assert_eq!(tree.diagnostics()[0].span, TextSpan::empty(2));
        assert_eq!(shape(&tree), "Array['[', Sequence[Number(1)], <missing>]");
    }

    #[test]
    fn test_enclosing_closer_ends_inner_list() {
        let tree = parse_str("[{]", JsonMode::Loose);
        assert_eq!(messages(&tree), vec!["'}' expected"]);
        assert_eq!(tree.diagnostics()[0].span, TextSpan::new(2, 1));
        assert_eq!(
            shape(&tree),
            "Array['[', Sequence[Object['{', Sequence[], <missing>]], ']']"
        );
    }

    #[test]
    fn test_missing_comma() {
        let tree = parse_str("[1 2]", JsonMode::Loose);
        assert_eq!(messages(&tree), vec!["',' expected"]);
        assert_eq!(tree.diagnostics()[0].span, TextSpan::new(3, 1));
        assert_eq!(
            shape(&tree),
            "Array['[', Sequence[Number(1), <missing>, Number(2)], ']']"
        );
    }

    #[test]
    fn test_elided_elements() {
        let loose = parse_str("[1,,2]", JsonMode::Loose);
        assert!(loose.diagnostics().is_empty());
        let strict = parse_str("[1,,2]", JsonMode::Strict);
        assert_eq!(messages(&strict), vec!["',' unexpected"]);
        assert_eq!(strict.diagnostics()[0].span, TextSpan::new(3, 1));
        assert_eq!(shape(&loose), shape(&strict));
    }

    #[test]
    fn test_elided_object_member() {
        for mode in JsonMode::ALL {
            let tree = parse_str("{,}", mode);
            assert_eq!(messages(&tree), vec!["Only properties allowed in an object"]);
        }
    }

    #[test]
    fn test_non_property_member() {
        let tree = parse_str("{[1]}", JsonMode::Loose);
        assert_eq!(messages(&tree), vec!["Only properties allowed in an object"]);
        assert_eq!(
            shape(&tree),
            "Object['{', Sequence[Array['[', Sequence[Number(1)], ']']], '}']"
        );
    }

    #[test]
    fn test_property_names_by_mode() {
        let loose = parse_str("{a:1, 2:3, 1.5:4}", JsonMode::Loose);
        assert_eq!(messages(&loose), vec!["Invalid property name"]);
        assert_eq!(loose.diagnostics()[0].span, TextSpan::new(11, 3));

        let strict = parse_str("{a:1, 2:3}", JsonMode::Strict);
        assert_eq!(
            messages(&strict),
            vec!["Property name must be a string", "Property name must be a string"]
        );
    }

    #[test]
    fn test_missing_colon_and_value() {
        let tree = parse_str(r#"{"a"}"#, JsonMode::Strict);
        assert_eq!(
            messages(&tree),
            vec!["Property name must be followed by a ':'", "Value required"]
        );
        assert_eq!(
            shape(&tree),
            "Object['{', Sequence[Property['\"a\"', <missing>, Text(<missing>)]], '}']"
        );

        let loose = parse_str(r#"{"a":}"#, JsonMode::Loose);
        assert!(loose.diagnostics().is_empty());
        let strict = parse_str(r#"{"a":}"#, JsonMode::Strict);
        assert_eq!(messages(&strict), vec!["Value required"]);
        assert_eq!(strict.diagnostics()[0].span, TextSpan::empty(5));
    }

    #[test]
    fn test_misplaced_property_names_follow_name_rules() {
        let strict = parse_str(r#"{"a": b: 1}"#, JsonMode::Strict);
        assert_eq!(
            messages(&strict),
            vec!["Property name must be a string", "Nested properties not allowed"]
        );
        let loose = parse_str(r#"{"a": b: 1}"#, JsonMode::Loose);
        assert_eq!(messages(&loose), vec!["Nested properties not allowed"]);
        assert_eq!(shape(&strict), shape(&loose));

        let loose = parse_str("[1: 2]", JsonMode::Loose);
        assert_eq!(
            shape(&loose),
            "Array['[', Sequence[Property['1', ':', Number(2)]], ']']"
        );
    }

    #[test]
    fn test_colon_stays_stray_in_constructor_arguments() {
        let tree = parse_str(r#"new X("a": 1)"#, JsonMode::Loose);
        assert_eq!(
            messages(&tree),
            vec!["',' expected", "':' unexpected", "',' expected"]
        );
    }

    #[test]
    fn test_bare_words() {
        let loose = parse_str("[abc, NaN]", JsonMode::Loose);
        assert!(loose.diagnostics().is_empty());
        assert_eq!(
            shape(&loose),
            "Array['[', Sequence[BareWord(abc), ',', BareWord(NaN)], ']']"
        );

        let strict = parse_str("[abc, NaN]", JsonMode::Strict);
        assert_eq!(
            messages(&strict),
            vec!["'a' unexpected", "'NaN' literal not allowed"]
        );
    }

    #[test]
    fn test_garbage_word_is_text() {
        for mode in JsonMode::ALL {
            let tree = parse_str("[a-b]", mode);
            assert_eq!(messages(&tree), vec!["'a' unexpected"]);
            assert_eq!(shape(&tree), "Array['[', Sequence[Text(a-b)], ']']");
        }
    }

    #[test]
    fn test_constructor() {
        let loose = parse_str("new Date(1, 2)", JsonMode::Loose);
        assert!(loose.diagnostics().is_empty());
        assert_eq!(
            shape(&loose),
            "Constructor['new', 'Date', '(', Sequence[Number(1), ',', Number(2)], ')']"
        );

        let strict = parse_str("new Date(1, 2)", JsonMode::Strict);
        assert_eq!(messages(&strict), vec!["Constructors not allowed"]);
        assert_eq!(strict.diagnostics()[0].span, TextSpan::new(0, 3));
    }

    #[test]
    fn test_constructor_recovery() {
        let tree = parse_str("[new]", JsonMode::Loose);
        assert_eq!(messages(&tree), vec!["Name expected", "'(' expected"]);
        assert_eq!(
            shape(&tree),
            "Array['[', Sequence[Constructor['new', <missing>, <missing>, Sequence[], \
             <missing>]], ']']"
        );

        let tree = parse_str("new 5()", JsonMode::Loose);
        assert_eq!(messages(&tree), vec!["Invalid constructor name"]);
    }

    #[test]
    fn test_top_level_rules() {
        let strict = parse_str("1 2 3", JsonMode::Strict);
        assert_eq!(
            messages(&strict),
            vec![
                "Multiple top-level values not allowed",
                "Multiple top-level values not allowed"
            ]
        );
        assert_eq!(strict.diagnostics()[1].span, TextSpan::new(4, 1));
        assert!(parse_str("1 2 3", JsonMode::Loose).diagnostics().is_empty());

        let empty = parse_str("   ", JsonMode::Strict);
        assert_eq!(messages(&empty), vec!["Syntax error"]);
        assert_eq!(empty.diagnostics()[0].span, TextSpan::new(0, 3));

        let nothing = parse_str("", JsonMode::Strict);
        assert_eq!(nothing.diagnostics()[0].span, TextSpan::empty(0));
        assert!(parse_str("", JsonMode::Loose).diagnostics().is_empty());
    }

    #[test]
    fn test_stray_top_level_tokens() {
        let tree = parse_str("1]", JsonMode::Loose);
        assert_eq!(messages(&tree), vec!["']' unexpected"]);
        assert_eq!(shape(&tree), "Number(1) Text(])");
    }

    #[test]
    fn test_depth_limit() {
        let limits = Limits::with_max_nesting_depth(3);
        let chars = VirtualCharSequence::from_text("[[[1]]]");
        assert!(parse_with_limits(&chars, JsonMode::Strict, limits).is_some());

        let chars = VirtualCharSequence::from_text("[[[[1]]]]");
        assert_eq!(
            try_parse(&chars, JsonMode::Loose, limits).err(),
            Some(ParseError::NestingTooDeep { depth: 4, limit: 3 })
        );
    }

    #[test]
    fn test_depth_counts_every_container_kind() {
        let limits = Limits::with_max_nesting_depth(2);
        let chars = VirtualCharSequence::from_text("{\"a\": new X([1])}");
        assert!(parse_with_limits(&chars, JsonMode::Loose, limits).is_none());
    }

    #[test]
    fn test_tree_covers_input() {
        for input in ["", "[1,", "{\"a\" 1 ,, }]", "/* x */ new (", "'abc"] {
            for mode in JsonMode::ALL {
                let tree = parse_str(input, mode);
                assert_eq!(tree.to_text(), input);
                tree.verify_coverage().unwrap();
            }
        }
    }
}
