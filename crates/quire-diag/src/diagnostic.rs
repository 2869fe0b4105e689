//! The diagnostic record.
//!
//! A [`Diagnostic`] pairs a byte-offset range in the source with an owned
//! copy of the message bytes. Records are only created by
//! [`DiagnosticList`](crate::DiagnosticList) and never change afterwards.

use std::{borrow::Cow, ops::Range};

use crate::error::{DiagnosticError, Result};

/// A single recorded problem.
///
/// Every record produced by the list today is a point: `start == end`. The
/// two offsets are kept apart so ranges can be carried later without
/// changing the shape of the type.
#[derive(Debug, PartialEq, Eq)]
pub struct Diagnostic {
    start: u32,
    end: u32,
    message: Box<[u8]>,
}

impl Diagnostic {
    /// Create a point diagnostic, copying `message` into owned storage.
    ///
    /// The copy is reserved fallibly so exhaustion surfaces as
    /// [`DiagnosticError::OutOfMemory`] rather than an abort.
    pub(crate) fn point(message: &[u8], position: u32) -> Result<Self> {
        let mut owned = Vec::new();
        owned
            .try_reserve_exact(message.len())
            .map_err(|err| DiagnosticError::out_of_memory(position, err))?;
        owned.extend_from_slice(message);

        Ok(Self {
            start: position,
            end: position,
            message: owned.into_boxed_slice(),
        })
    }

    /// Get the start offset in bytes.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Get the end offset in bytes.
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Get the offsets as a half-open range.
    pub fn range(&self) -> Range<u32> {
        self.start..self.end
    }

    /// Get the raw message bytes.
    pub fn message(&self) -> &[u8] {
        &self.message
    }

    /// Get the message as text, replacing invalid UTF-8 sequences.
    pub fn message_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.message)
    }
}
