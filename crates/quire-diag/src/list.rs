//! The ordered, owning collection of diagnostics.
//!
//! A [`DiagnosticList`] is threaded through parser state by `&mut` while a
//! pass runs. Records come back out in the order they were appended, which
//! for a single-pass parser is source order.

use std::{iter::FusedIterator, slice, vec};

use log::trace;

use crate::{
    diagnostic::Diagnostic,
    error::{DiagnosticError, Result},
};

/// An append-only list that owns every [`Diagnostic`] it holds.
///
/// # Example
///
/// ```
/// # use quire_diag::DiagnosticList;
///
/// let mut list = DiagnosticList::new();
/// list.append("a", 0).unwrap();
/// list.append("b", 5).unwrap();
///
/// let records: Vec<_> = list
///     .iter()
///     .map(|d| (d.message_lossy().into_owned(), d.start(), d.end()))
///     .collect();
/// assert_eq!(
///     records,
///     [("a".to_string(), 0, 0), ("b".to_string(), 5, 5)]
/// );
///
/// list.destroy();
/// ```
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DiagnosticList {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticList {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a point diagnostic at `position`.
    ///
    /// Every byte of `message` is copied, embedded NUL bytes included. On
    /// failure the list is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`DiagnosticError::OutOfMemory`] if storage for the record or
    /// its message cannot be reserved.
    pub fn append(&mut self, message: impl AsRef<[u8]>, position: u32) -> Result<()> {
        let message = message.as_ref();

        self.diagnostics
            .try_reserve(1)
            .map_err(|err| DiagnosticError::out_of_memory(position, err))?;
        let diagnostic = Diagnostic::point(message, position)?;
        self.diagnostics.push(diagnostic);

        trace!(position, message_len = message.len(); "Recorded diagnostic");
        Ok(())
    }

    /// Record a point diagnostic from a NUL-terminated buffer.
    ///
    /// Only the bytes before the first NUL are stored; a buffer without a NUL
    /// is stored whole.
    ///
    /// # Errors
    ///
    /// Returns [`DiagnosticError::OutOfMemory`] if storage for the record or
    /// its message cannot be reserved.
    pub fn append_terminated(&mut self, message: &[u8], position: u32) -> Result<()> {
        let len = message
            .iter()
            .position(|&byte| byte == 0)
            .unwrap_or(message.len());
        self.append(&message[..len], position)
    }

    /// Iterate over the diagnostics in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.diagnostics.iter(),
        }
    }

    /// Get the diagnostic at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Diagnostic> {
        self.diagnostics.get(index)
    }

    /// Get the first recorded diagnostic, if any.
    pub fn first(&self) -> Option<&Diagnostic> {
        self.diagnostics.first()
    }

    /// Number of recorded diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Release every record and leave the list empty and reusable.
    pub fn clear(&mut self) {
        trace!(count = self.diagnostics.len(); "Clearing diagnostics");
        self.diagnostics.clear();
    }

    /// Release every record and the list itself.
    ///
    /// Equivalent to dropping the list.
    pub fn destroy(self) {
        trace!(count = self.diagnostics.len(); "Releasing diagnostics");
    }
}

impl<'a> IntoIterator for &'a DiagnosticList {
    type Item = &'a Diagnostic;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for DiagnosticList {
    type Item = Diagnostic;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.diagnostics.into_iter(),
        }
    }
}

/// Borrowing iterator over a [`DiagnosticList`], in insertion order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, Diagnostic>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Diagnostic;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Owning iterator over a [`DiagnosticList`], in insertion order.
#[derive(Debug)]
pub struct IntoIter {
    inner: vec::IntoIter<Diagnostic>,
}

impl Iterator for IntoIter {
    type Item = Diagnostic;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}
