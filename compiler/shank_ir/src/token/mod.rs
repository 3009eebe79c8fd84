//! Token types produced by the Shank lexer.

use std::fmt;

/// A lexeme with its kind, the source text where that text matters, and the
/// 1-based line it came from.
///
/// Only identifiers, numbers, and string/character literals carry `text`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Option<String>,
    pub line: u32,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, line: u32) -> Self {
        Token {
            kind,
            text: None,
            line,
        }
    }

    #[inline]
    pub fn with_text(kind: TokenKind, text: impl Into<String>, line: u32) -> Self {
        Token {
            kind,
            text: Some(text.into()),
            line,
        }
    }

    /// The token's text, or the empty string for tokens that carry none.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.text {
            Some(text) => write!(f, "{}({text})", self.kind.name()),
            None => write!(f, "{}", self.kind.name()),
        }
    }
}

/// The closed set of Shank token kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    Identifier,
    Number,
    StringLiteral,
    CharLiteral,

    // Keywords
    Define,
    Variables,
    Constants,
    If,
    Then,
    Elsif,
    Else,
    For,
    From,
    To,
    While,
    Repeat,
    Until,
    Mod,
    Var,
    True,
    False,
    Array,
    Of,

    Semicolon,    // ;
    Colon,        // :
    Comma,        // ,
    LParen,       // (
    RParen,       // )
    LBracket,     // [
    RBracket,     // ]
    Assign,       // :=
    Equal,        // =
    NotEqual,     // <>
    Less,         // <
    Greater,      // >
    LessEqual,    // <=
    GreaterEqual, // >=
    Plus,         // +
    Minus,        // -
    Times,        // *
    Divide,       // /

    EndOfLine,
    Indent,
    Dedent,
}

impl TokenKind {
    /// Upper-case name used when tokens are echoed or quoted in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::StringLiteral => "STRINGLITERAL",
            TokenKind::CharLiteral => "CHARACTERLITERAL",
            TokenKind::Define => "DEFINE",
            TokenKind::Variables => "VARIABLES",
            TokenKind::Constants => "CONSTANTS",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Elsif => "ELSIF",
            TokenKind::Else => "ELSE",
            TokenKind::For => "FOR",
            TokenKind::From => "FROM",
            TokenKind::To => "TO",
            TokenKind::While => "WHILE",
            TokenKind::Repeat => "REPEAT",
            TokenKind::Until => "UNTIL",
            TokenKind::Mod => "MOD",
            TokenKind::Var => "VAR",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Array => "ARRAY",
            TokenKind::Of => "OF",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::LParen => "LEFTPAREN",
            TokenKind::RParen => "RIGHTPAREN",
            TokenKind::LBracket => "LEFTBRACKET",
            TokenKind::RBracket => "RIGHTBRACKET",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Equal => "EQUALS",
            TokenKind::NotEqual => "NOTEQUAL",
            TokenKind::Less => "LESSTHAN",
            TokenKind::Greater => "GREATERTHAN",
            TokenKind::LessEqual => "LESSTHANEQUAL",
            TokenKind::GreaterEqual => "GREATERTHANEQUAL",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Times => "TIMES",
            TokenKind::Divide => "DIVIDE",
            TokenKind::EndOfLine => "ENDOFLINE",
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
