//! Lexical analyzer for the scanner.
//!
//! The lexer splits source text into the few [`Token`]s the scanner cares
//! about: brackets, string literals, line comments, and everything else as
//! plain text. Every non-empty input produces a token, so lexing itself never
//! stops a scan; problems are reported by the scanner from the tokens.

use winnow::{
    Parser as _,
    combinator::{alt, opt, preceded, repeat},
    error::{ContextError, ErrMode, ModalResult},
    stream::{LocatingSlice, Location},
    token::{any, literal, take_while},
};

use crate::{
    config::ScanConfig,
    tokens::{Delimiter, PositionedToken, Token},
};

pub(crate) type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O>;

const DELIMITER_CHARS: [char; 6] = ['(', ')', '[', ']', '{', '}'];

/// Parse an opening or closing bracket.
fn delimiter<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    alt((
        '('.value(Token::Open(Delimiter::Paren)),
        ')'.value(Token::Close(Delimiter::Paren)),
        '['.value(Token::Open(Delimiter::Bracket)),
        ']'.value(Token::Close(Delimiter::Bracket)),
        '{'.value(Token::Open(Delimiter::Brace)),
        '}'.value(Token::Close(Delimiter::Brace)),
    ))
    .parse_next(input)
}

/// Parse a string literal, terminated or not.
///
/// A backslash escapes the following character, including a quote or a
/// newline. An unescaped newline or the end of input ends the literal without
/// consuming the newline, and the literal is marked unterminated.
fn string_literal<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    let escape = preceded('\\', any).void();
    let plain = take_while(1.., |c: char| !matches!(c, '"' | '\\' | '\n')).void();

    preceded(
        '"',
        (repeat::<_, _, (), _, _>(0.., alt((escape, plain))), opt('"')),
    )
    .map(|((), close)| Token::StringLiteral {
        terminated: close.is_some(),
    })
    .parse_next(input)
}

/// Parse a comment from `prefix` up to, not including, the newline.
fn line_comment<'a>(input: &mut Input<'a>, prefix: &str) -> IResult<Token<'a>> {
    preceded(literal(prefix), take_while(0.., |c: char| c != '\n'))
        .map(Token::LineComment)
        .parse_next(input)
}

/// Parse a run of characters that cannot start any other token.
fn text<'a>(input: &mut Input<'a>, stops: &[char]) -> IResult<Token<'a>> {
    take_while(1.., |c: char| !stops.contains(&c))
        .map(Token::Text)
        .parse_next(input)
}

/// Token parsers configured for one scan.
pub(crate) struct Lexer<'c> {
    strings: bool,
    comment: Option<&'c str>,
    /// Characters that end a text run
    stops: Vec<char>,
}

impl<'c> Lexer<'c> {
    pub fn new(config: &'c ScanConfig) -> Self {
        let comment = config.comment_prefix();

        let mut stops = DELIMITER_CHARS.to_vec();
        if config.strings {
            stops.push('"');
        }
        if let Some(first) = comment.and_then(|prefix| prefix.chars().next()) {
            stops.push(first);
        }

        Self {
            strings: config.strings,
            comment,
            stops,
        }
    }

    /// Parse a single token with position tracking.
    pub fn positioned_token<'a>(&self, input: &mut Input<'a>) -> IResult<PositionedToken<'a>> {
        let start_pos = input.current_token_start();

        let token = alt((
            |i: &mut Input<'a>| self.comment_token(i), // Must come before text
            |i: &mut Input<'a>| self.string_token(i), // Must come before text
            delimiter,
            |i: &mut Input<'a>| text(i, &self.stops),
            // A stop character that did not start a token, e.g. a lone `/`
            any.take().map(Token::Text),
        ))
        .parse_next(input)?;

        let end_pos = input.current_token_start();

        Ok(PositionedToken::new(token, start_pos..end_pos))
    }

    fn comment_token<'a>(&self, input: &mut Input<'a>) -> IResult<Token<'a>> {
        match self.comment {
            Some(prefix) => line_comment(input, prefix),
            None => Err(ErrMode::Backtrack(ContextError::new())),
        }
    }

    fn string_token<'a>(&self, input: &mut Input<'a>) -> IResult<Token<'a>> {
        if self.strings {
            string_literal(input)
        } else {
            Err(ErrMode::Backtrack(ContextError::new()))
        }
    }
}
