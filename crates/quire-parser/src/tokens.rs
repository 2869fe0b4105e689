//! Tokens produced by the lexer.

use std::ops::Range;

/// A bracket pair tracked by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// `(` and `)`
    Paren,
    /// `[` and `]`
    Bracket,
    /// `{` and `}`
    Brace,
}

impl Delimiter {
    /// The opening character.
    pub fn open(self) -> char {
        match self {
            Delimiter::Paren => '(',
            Delimiter::Bracket => '[',
            Delimiter::Brace => '{',
        }
    }

    /// The closing character.
    pub fn close(self) -> char {
        match self {
            Delimiter::Paren => ')',
            Delimiter::Bracket => ']',
            Delimiter::Brace => '}',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    Open(Delimiter),
    Close(Delimiter),
    StringLiteral { terminated: bool },
    LineComment(&'a str),
    /// Anything the scanner does not care about, newlines included.
    Text(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PositionedToken<'a> {
    pub token: Token<'a>,
    pub span: Range<usize>,
}

impl<'a> PositionedToken<'a> {
    pub fn new(token: Token<'a>, span: Range<usize>) -> Self {
        Self { token, span }
    }
}
