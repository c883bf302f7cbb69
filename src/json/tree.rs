//! Lossless syntax tree.
//!
//! Owned node structs hold tokens; tokens hold their trivia and a window into
//! the input [`VirtualCharSequence`]. Walking the leaves in order and
//! concatenating every trivia and token run yields the input again.
//!
//! Consumers walk the tree through [`JsonNode`], a borrowed sum type over all
//! node kinds, so every match over node kinds is exhaustive.

use std::fmt;

use super::chars::{TextSpan, VirtualChar, VirtualCharSequence};
use super::diagnostics::EmbeddedDiagnostic;
use super::kind::{NodeKind, TokenKind, TriviaKind};
use super::limits::JsonMode;
use crate::error::CoverageError;

/// Whitespace or a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonTrivia {
    kind: TriviaKind,
    chars: VirtualCharSequence,
}

impl JsonTrivia {
    pub(crate) fn new(kind: TriviaKind, chars: VirtualCharSequence) -> Self {
        Self { kind, chars }
    }

    /// Trivia kind.
    pub fn kind(&self) -> TriviaKind {
        self.kind
    }

    /// Characters of the trivia.
    pub fn chars(&self) -> &VirtualCharSequence {
        &self.chars
    }

    /// Source span.
    pub fn span(&self) -> Option<TextSpan> {
        self.chars.span()
    }
}

/// A token with its trivia.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonToken {
    kind: TokenKind,
    leading_trivia: Vec<JsonTrivia>,
    chars: VirtualCharSequence,
    trailing_trivia: Vec<JsonTrivia>,
    value: Option<String>,
}

impl JsonToken {
    pub(crate) fn new(
        kind: TokenKind,
        leading_trivia: Vec<JsonTrivia>,
        chars: VirtualCharSequence,
        value: Option<String>,
    ) -> Self {
        Self {
            kind,
            leading_trivia,
            chars,
            trailing_trivia: Vec::new(),
            value,
        }
    }

    /// A zero-width token synthesized where the grammar requires one.
    pub(crate) fn missing(kind: TokenKind) -> Self {
        Self::new(kind, Vec::new(), VirtualCharSequence::empty(), None)
    }

    pub(crate) fn with_trailing_trivia(mut self, trailing_trivia: Vec<JsonTrivia>) -> Self {
        self.trailing_trivia = trailing_trivia;
        self
    }

    /// Token kind.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Trivia before the token.
    pub fn leading_trivia(&self) -> &[JsonTrivia] {
        &self.leading_trivia
    }

    /// Trivia after the token. Only the end-of-file token carries any.
    pub fn trailing_trivia(&self) -> &[JsonTrivia] {
        &self.trailing_trivia
    }

    /// Characters of the token itself, trivia excluded.
    pub fn chars(&self) -> &VirtualCharSequence {
        &self.chars
    }

    /// Decoded value: string contents for strings, the literal text for numbers.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Token text, trivia excluded.
    pub fn text(&self) -> String {
        self.chars.text()
    }

    /// Returns true for a zero-width token inserted during error recovery.
    pub fn is_missing(&self) -> bool {
        self.chars.is_empty() && self.kind != TokenKind::EndOfFile
    }

    /// Source span of the token, trivia excluded. `None` when zero width.
    pub fn span(&self) -> Option<TextSpan> {
        self.chars.span()
    }

    /// Every character the token owns, trivia included, in source order.
    pub fn full_chars(&self) -> impl Iterator<Item = VirtualChar> + '_ {
        self.leading_trivia
            .iter()
            .flat_map(|t| t.chars.iter())
            .chain(self.chars.iter())
            .chain(self.trailing_trivia.iter().flat_map(|t| t.chars.iter()))
    }
}

impl fmt::Display for JsonToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == TokenKind::EndOfFile {
            f.write_str("EndOfFile")
        } else if self.is_missing() {
            f.write_str("<missing>")
        } else {
            write!(f, "'{}'", self.text())
        }
    }
}

/// One entry of a [`JsonSequence`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceItem {
    /// A value (or property, inside objects).
    Value(JsonValue),
    /// A comma, possibly missing.
    Separator(JsonToken),
}

/// Values interleaved with their comma separators, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonSequence {
    items: Vec<SequenceItem>,
}

impl JsonSequence {
    pub(crate) fn new(items: Vec<SequenceItem>) -> Self {
        Self { items }
    }

    /// All items, separators included.
    pub fn items(&self) -> &[SequenceItem] {
        &self.items
    }

    /// The values only.
    pub fn values(&self) -> impl Iterator<Item = &JsonValue> {
        self.items.iter().filter_map(|item| match item {
            SequenceItem::Value(v) => Some(v),
            SequenceItem::Separator(_) => None,
        })
    }

    /// Number of items, separators included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the sequence has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Root of every tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationUnit {
    pub(crate) sequence: JsonSequence,
    pub(crate) end_of_file: JsonToken,
}

impl CompilationUnit {
    /// Top-level values. Never contains separators.
    pub fn sequence(&self) -> &JsonSequence {
        &self.sequence
    }

    /// End-of-file token, carrying trivia found at the end of input.
    pub fn end_of_file(&self) -> &JsonToken {
        &self.end_of_file
    }
}

/// `[ ... ]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayNode {
    pub(crate) open_bracket: JsonToken,
    pub(crate) sequence: JsonSequence,
    pub(crate) close_bracket: JsonToken,
}

impl ArrayNode {
    /// `[`
    pub fn open_bracket(&self) -> &JsonToken {
        &self.open_bracket
    }

    /// Elements and commas.
    pub fn sequence(&self) -> &JsonSequence {
        &self.sequence
    }

    /// `]`, possibly missing.
    pub fn close_bracket(&self) -> &JsonToken {
        &self.close_bracket
    }
}

/// `{ ... }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectNode {
    pub(crate) open_brace: JsonToken,
    pub(crate) sequence: JsonSequence,
    pub(crate) close_brace: JsonToken,
}

impl ObjectNode {
    /// `{`
    pub fn open_brace(&self) -> &JsonToken {
        &self.open_brace
    }

    /// Members and commas. Non-property members are recovery results.
    pub fn sequence(&self) -> &JsonSequence {
        &self.sequence
    }

    /// `}`, possibly missing.
    pub fn close_brace(&self) -> &JsonToken {
        &self.close_brace
    }

    /// The well-formed members.
    pub fn properties(&self) -> impl Iterator<Item = &PropertyNode> {
        self.sequence.values().filter_map(|v| match v {
            JsonValue::Property(p) => Some(p),
            _ => None,
        })
    }
}

/// `name : value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyNode {
    pub(crate) name: JsonToken,
    pub(crate) colon: JsonToken,
    pub(crate) value: Box<JsonValue>,
}

impl PropertyNode {
    /// Name token: a string, or a word in Loose mode.
    pub fn name(&self) -> &JsonToken {
        &self.name
    }

    /// `:`, possibly missing.
    pub fn colon(&self) -> &JsonToken {
        &self.colon
    }

    /// The value. A missing value is a [`TextNode`] over a missing token.
    pub fn value(&self) -> &JsonValue {
        &self.value
    }

    /// Decoded name: string contents, or the word itself.
    pub fn name_text(&self) -> String {
        match self.name.value() {
            Some(value) if self.name.kind() == TokenKind::String => value.to_string(),
            _ => self.name.text(),
        }
    }
}

/// `new Name( ... )`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorNode {
    pub(crate) new_keyword: JsonToken,
    pub(crate) name: JsonToken,
    pub(crate) open_paren: JsonToken,
    pub(crate) sequence: JsonSequence,
    pub(crate) close_paren: JsonToken,
}

impl ConstructorNode {
    /// `new`
    pub fn new_keyword(&self) -> &JsonToken {
        &self.new_keyword
    }

    /// Constructor name, possibly missing.
    pub fn name(&self) -> &JsonToken {
        &self.name
    }

    /// `(`, possibly missing.
    pub fn open_paren(&self) -> &JsonToken {
        &self.open_paren
    }

    /// Arguments and commas.
    pub fn sequence(&self) -> &JsonSequence {
        &self.sequence
    }

    /// `)`, possibly missing.
    pub fn close_paren(&self) -> &JsonToken {
        &self.close_paren
    }
}

/// A literal value: string, number, `true`, `false`, `null` or a bare word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralNode {
    pub(crate) token: JsonToken,
}

impl LiteralNode {
    /// The literal token.
    pub fn token(&self) -> &JsonToken {
        &self.token
    }

    /// Literal kind, derived from the token.
    pub fn kind(&self) -> NodeKind {
        match self.token.kind() {
            TokenKind::String => NodeKind::StringLiteral,
            TokenKind::Number => NodeKind::NumberLiteral,
            TokenKind::True => NodeKind::TrueLiteral,
            TokenKind::False => NodeKind::FalseLiteral,
            TokenKind::Null => NodeKind::NullLiteral,
            _ => NodeKind::BareWord,
        }
    }
}

/// Content the grammar could not place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    pub(crate) token: JsonToken,
}

impl TextNode {
    /// The skipped (or missing) token.
    pub fn token(&self) -> &JsonToken {
        &self.token
    }
}

/// Anything that can appear in a [`JsonSequence`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonValue {
    /// `[ ... ]`
    Array(ArrayNode),
    /// `{ ... }`
    Object(ObjectNode),
    /// `name : value`; only valid as an object member.
    Property(PropertyNode),
    /// `new Name( ... )`
    Constructor(ConstructorNode),
    /// Literal value.
    Literal(LiteralNode),
    /// Skipped or missing content.
    Text(TextNode),
}

impl JsonValue {
    /// Borrow as a generic node.
    pub fn as_node(&self) -> JsonNode<'_> {
        match self {
            JsonValue::Array(n) => JsonNode::Array(n),
            JsonValue::Object(n) => JsonNode::Object(n),
            JsonValue::Property(n) => JsonNode::Property(n),
            JsonValue::Constructor(n) => JsonNode::Constructor(n),
            JsonValue::Literal(n) => JsonNode::Literal(n),
            JsonValue::Text(n) => JsonNode::Text(n),
        }
    }

    /// Node kind.
    pub fn kind(&self) -> NodeKind {
        self.as_node().kind()
    }
}

/// Borrowed view of any node.
#[derive(Debug, Clone, Copy)]
pub enum JsonNode<'a> {
    /// Root
    CompilationUnit(&'a CompilationUnit),
    /// Separated value list
    Sequence(&'a JsonSequence),
    /// Array
    Array(&'a ArrayNode),
    /// Object
    Object(&'a ObjectNode),
    /// Property
    Property(&'a PropertyNode),
    /// Constructor
    Constructor(&'a ConstructorNode),
    /// Literal
    Literal(&'a LiteralNode),
    /// Text
    Text(&'a TextNode),
}

/// A child: node or token.
#[derive(Debug, Clone, Copy)]
pub enum NodeOrToken<'a> {
    /// Inner node
    Node(JsonNode<'a>),
    /// Leaf token
    Token(&'a JsonToken),
}

impl<'a> JsonNode<'a> {
    /// Node kind.
    pub fn kind(&self) -> NodeKind {
        match self {
            JsonNode::CompilationUnit(_) => NodeKind::CompilationUnit,
            JsonNode::Sequence(_) => NodeKind::Sequence,
            JsonNode::Array(_) => NodeKind::Array,
            JsonNode::Object(_) => NodeKind::Object,
            JsonNode::Property(_) => NodeKind::Property,
            JsonNode::Constructor(_) => NodeKind::Constructor,
            JsonNode::Literal(n) => n.kind(),
            JsonNode::Text(_) => NodeKind::Text,
        }
    }

    /// Direct children in source order.
    pub fn children(&self) -> Vec<NodeOrToken<'a>> {
        use NodeOrToken::{Node, Token};

        match *self {
            JsonNode::CompilationUnit(n) => vec![
                Node(JsonNode::Sequence(&n.sequence)),
                Token(&n.end_of_file),
            ],
            JsonNode::Sequence(n) => n
                .items
                .iter()
                .map(|item| match item {
                    SequenceItem::Value(v) => Node(v.as_node()),
                    SequenceItem::Separator(t) => Token(t),
                })
                .collect(),
            JsonNode::Array(n) => vec![
                Token(&n.open_bracket),
                Node(JsonNode::Sequence(&n.sequence)),
                Token(&n.close_bracket),
            ],
            JsonNode::Object(n) => vec![
                Token(&n.open_brace),
                Node(JsonNode::Sequence(&n.sequence)),
                Token(&n.close_brace),
            ],
            JsonNode::Property(n) => vec![
                Token(&n.name),
                Token(&n.colon),
                Node(n.value.as_node()),
            ],
            JsonNode::Constructor(n) => vec![
                Token(&n.new_keyword),
                Token(&n.name),
                Token(&n.open_paren),
                Node(JsonNode::Sequence(&n.sequence)),
                Token(&n.close_paren),
            ],
            JsonNode::Literal(n) => vec![Token(&n.token)],
            JsonNode::Text(n) => vec![Token(&n.token)],
        }
    }

    /// Pre-order walk over this node and everything below it.
    pub fn descendants(&self) -> Descendants<'a> {
        Descendants {
            stack: vec![NodeOrToken::Node(*self)],
        }
    }

    /// Leaf tokens in source order.
    pub fn tokens(&self) -> impl Iterator<Item = &'a JsonToken> {
        self.descendants().filter_map(|item| match item {
            NodeOrToken::Token(t) => Some(t),
            NodeOrToken::Node(_) => None,
        })
    }

    /// Span from the first to the last non-missing token, trivia excluded.
    pub fn span(&self) -> Option<TextSpan> {
        self.tokens()
            .filter_map(JsonToken::span)
            .reduce(|acc, span| acc.cover(span))
    }
}

/// Pre-order iterator returned by [`JsonNode::descendants`].
pub struct Descendants<'a> {
    stack: Vec<NodeOrToken<'a>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = NodeOrToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.stack.pop()?;
        if let NodeOrToken::Node(node) = item {
            self.stack.extend(node.children().into_iter().rev());
        }
        Some(item)
    }
}

impl fmt::Display for JsonNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonNode::Literal(n) => write!(f, "{}({})", n.kind(), n.token.text()),
            JsonNode::Text(n) if n.token.is_missing() => write!(f, "Text(<missing>)"),
            JsonNode::Text(n) => write!(f, "Text({})", n.token.text()),
            _ => {
                write!(f, "{}[", self.kind())?;
                for (i, child) in self.children().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    match child {
                        NodeOrToken::Node(n) => write!(f, "{}", n)?,
                        NodeOrToken::Token(t) => write!(f, "{}", t)?,
                    }
                }
                f.write_str("]")
            }
        }
    }
}

/// Result of a successful parse.
#[derive(Debug, Clone)]
pub struct JsonTree {
    pub(crate) text: VirtualCharSequence,
    pub(crate) mode: JsonMode,
    pub(crate) root: CompilationUnit,
    pub(crate) diagnostics: Vec<EmbeddedDiagnostic>,
}

impl JsonTree {
    /// The input the tree was built from.
    pub fn text(&self) -> &VirtualCharSequence {
        &self.text
    }

    /// Mode the tree was parsed with.
    pub fn mode(&self) -> JsonMode {
        self.mode
    }

    /// Root node.
    pub fn root(&self) -> &CompilationUnit {
        &self.root
    }

    /// Root as a generic node.
    pub fn root_node(&self) -> JsonNode<'_> {
        JsonNode::CompilationUnit(&self.root)
    }

    /// Diagnostics in emission order.
    pub fn diagnostics(&self) -> &[EmbeddedDiagnostic] {
        &self.diagnostics
    }

    /// Top-level values.
    pub fn values(&self) -> impl Iterator<Item = &JsonValue> {
        self.root.sequence.values()
    }

    /// All leaf characters in traversal order.
    pub fn leaf_chars(&self) -> Vec<VirtualChar> {
        self.root_node()
            .tokens()
            .flat_map(JsonToken::full_chars)
            .collect()
    }

    /// Decoded text rebuilt from the leaves.
    pub fn to_text(&self) -> String {
        self.leaf_chars().into_iter().map(|vc| vc.value).collect()
    }

    /// Check that the leaves reproduce the input exactly and that every
    /// diagnostic lies inside it.
    pub fn verify_coverage(&self) -> Result<(), CoverageError> {
        let input = self.text.as_slice();
        let mut covered = 0;

        for (index, actual) in self.leaf_chars().into_iter().enumerate() {
            let expected = *input.get(index).ok_or(CoverageError::Overrun {
                index,
                input_len: input.len(),
            })?;
            if expected != actual {
                return Err(CoverageError::Mismatch {
                    index,
                    expected,
                    actual,
                });
            }
            covered += 1;
        }

        if covered != input.len() {
            return Err(CoverageError::Underrun {
                covered,
                input_len: input.len(),
            });
        }

        let (input_start, input_end) = match self.text.span() {
            Some(span) => (span.start, span.end()),
            None => (0, 0),
        };
        for diag in &self.diagnostics {
            if diag.span.start < input_start || diag.span.end() > input_end {
                return Err(CoverageError::DiagnosticOutOfRange {
                    span: diag.span,
                    input_end,
                });
            }
        }

        Ok(())
    }
}

impl fmt::Display for JsonTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root_node())
    }
}
