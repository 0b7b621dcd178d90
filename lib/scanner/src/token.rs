use std::fmt::Display;

use cursor::Line;
use strum_macros::EnumDiscriminants;

/// A classified unit of lexical input. `lexeme` is the exact source
/// substring the token was scanned from; `line` is the line it began on.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub data: TokenData<'a>,
    pub lexeme: &'a str,
    pub line: Line,
}

impl<'a> Token<'a> {
    /// The payload-free category, for expected-token checks.
    pub fn kind(&self) -> TokenKind {
        TokenKind::from(&self.data)
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}

/// The closed set of lexical categories. Decoded literal values live inside
/// the `Str`/`Number` variants. `TokenKind` is the derived discriminant-only
/// copy of this enum.
#[derive(Debug, Clone, PartialEq, EnumDiscriminants)]
#[strum_discriminants(name(TokenKind))]
pub enum TokenData<'a> {
    // Single-character tokens.
    LeftParen,
    RightParen,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens.
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals.
    Identifier,
    Str(&'a str),
    Number(f64),

    // Keywords.
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}
