//! Error-recovering bracket and string scanner.
//!
//! The scanner walks the token stream once, keeping a stack of open brackets.
//! Each problem becomes a point diagnostic in the caller's
//! [`DiagnosticList`] and scanning continues, so one pass reports everything.

use log::{debug, trace};
use winnow::stream::LocatingSlice;

use quire_diag::{DiagnosticList, Result};

use crate::{
    config::ScanConfig,
    lexer::{Input, Lexer},
    tokens::{Delimiter, PositionedToken, Token},
};

/// Convert a byte offset to a diagnostic position, saturating at `u32::MAX`.
fn position(offset: usize) -> u32 {
    u32::try_from(offset).unwrap_or(u32::MAX)
}

/// Scanner state for a single pass over one source.
pub(crate) struct Scanner<'c, 'd> {
    lexer: Lexer<'c>,
    /// Open brackets with the offset of their opening character
    open: Vec<(Delimiter, u32)>,
    diagnostics: &'d mut DiagnosticList,
    tokens_len: usize,
}

impl<'c, 'd> Scanner<'c, 'd> {
    pub fn new(config: &'c ScanConfig, diagnostics: &'d mut DiagnosticList) -> Self {
        Self {
            lexer: Lexer::new(config),
            open: Vec::new(),
            diagnostics,
            tokens_len: 0,
        }
    }

    /// Scan the whole source, recording every problem found.
    pub fn scan(mut self, source: &str) -> Result<()> {
        let mut input: Input<'_> = LocatingSlice::new(source);
        let recorded_before = self.diagnostics.len();

        // The lexer accepts any character, so it only stops at end of input
        while let Ok(token) = self.lexer.positioned_token(&mut input) {
            self.token(&token)?;
        }
        debug_assert!(input.is_empty());

        self.finish()?;

        debug!(
            tokens_len = self.tokens_len,
            diagnostics_len = self.diagnostics.len() - recorded_before;
            "Scan finished"
        );
        Ok(())
    }

    fn token(&mut self, token: &PositionedToken<'_>) -> Result<()> {
        self.tokens_len += 1;
        let pos = position(token.span.start);

        match token.token {
            Token::Open(delimiter) => {
                self.open.push((delimiter, pos));
            }
            Token::Close(delimiter) => match self.open.pop() {
                None => {
                    self.diagnostics.append(
                        format!("unexpected closing `{}`", delimiter.close()),
                        pos,
                    )?;
                }
                Some((opened, _)) if opened == delimiter => {}
                Some((opened, opened_at)) => {
                    trace!(opened_at, pos; "Mismatched bracket pair");
                    self.diagnostics.append(
                        format!(
                            "mismatched closing `{}`, expected `{}`",
                            delimiter.close(),
                            opened.close()
                        ),
                        pos,
                    )?;
                }
            },
            Token::StringLiteral { terminated: false } => {
                self.diagnostics.append("unterminated string literal", pos)?;
            }
            Token::StringLiteral { terminated: true }
            | Token::LineComment(_)
            | Token::Text(_) => {}
        }
        Ok(())
    }

    /// Report brackets still open at the end of input, in source order.
    fn finish(&mut self) -> Result<()> {
        for (delimiter, pos) in self.open.drain(..) {
            self.diagnostics
                .append(format!("unclosed `{}`", delimiter.open()), pos)?;
        }
        Ok(())
    }
}
