//! Kind tags for tokens, trivia and nodes.

use std::fmt;

/// Lexical token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input. Always zero width.
    EndOfFile,
    /// Left brace `{`
    OpenBrace,
    /// Right brace `}`
    CloseBrace,
    /// Left bracket `[`
    OpenBracket,
    /// Right bracket `]`
    CloseBracket,
    /// Left parenthesis `(`
    OpenParen,
    /// Right parenthesis `)`
    CloseParen,
    /// Colon `:`
    Colon,
    /// Comma `,`
    Comma,
    /// Quoted string, single or double quotes
    String,
    /// Anything starting like a number, validated separately
    Number,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// `new`
    NewKeyword,
    /// Any other run of non-delimiter characters
    Text,
}

impl TokenKind {
    /// The single character of a punctuation token.
    pub const fn punctuation(self) -> Option<char> {
        match self {
            TokenKind::OpenBrace => Some('{'),
            TokenKind::CloseBrace => Some('}'),
            TokenKind::OpenBracket => Some('['),
            TokenKind::CloseBracket => Some(']'),
            TokenKind::OpenParen => Some('('),
            TokenKind::CloseParen => Some(')'),
            TokenKind::Colon => Some(':'),
            TokenKind::Comma => Some(','),
            _ => None,
        }
    }

    /// Tokens that may spell a property name or a constructor name.
    pub const fn is_word(self) -> bool {
        matches!(
            self,
            TokenKind::Text
                | TokenKind::Number
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
                | TokenKind::NewKeyword
        )
    }
}

/// Trivia kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriviaKind {
    /// Run of non-newline whitespace
    Whitespace,
    /// `\r\n`, `\r` or `\n`
    EndOfLine,
    /// `// ...` up to, not including, the line break
    SingleLineComment,
    /// `/* ... */`, possibly unterminated
    MultiLineComment,
}

impl TriviaKind {
    /// Returns true for both comment kinds.
    pub const fn is_comment(self) -> bool {
        matches!(
            self,
            TriviaKind::SingleLineComment | TriviaKind::MultiLineComment
        )
    }
}

/// Node kinds. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Root: top-level sequence plus end of file.
    CompilationUnit,
    /// Values interleaved with comma separators.
    Sequence,
    /// `[ ... ]`
    Array,
    /// `{ ... }`
    Object,
    /// `name : value`
    Property,
    /// `new Name( ... )`
    Constructor,
    /// String literal
    StringLiteral,
    /// Number literal
    NumberLiteral,
    /// `true`
    TrueLiteral,
    /// `false`
    FalseLiteral,
    /// `null`
    NullLiteral,
    /// Unquoted identifier used as a value
    BareWord,
    /// Content that could not be placed in the grammar
    Text,
}

impl NodeKind {
    /// Short display name.
    pub const fn name(self) -> &'static str {
        match self {
            NodeKind::CompilationUnit => "CompilationUnit",
            NodeKind::Sequence => "Sequence",
            NodeKind::Array => "Array",
            NodeKind::Object => "Object",
            NodeKind::Property => "Property",
            NodeKind::Constructor => "Constructor",
            NodeKind::StringLiteral => "String",
            NodeKind::NumberLiteral => "Number",
            NodeKind::TrueLiteral => "True",
            NodeKind::FalseLiteral => "False",
            NodeKind::NullLiteral => "Null",
            NodeKind::BareWord => "BareWord",
            NodeKind::Text => "Text",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
