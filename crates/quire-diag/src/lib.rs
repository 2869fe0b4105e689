//! # Quire Diagnostics
//!
//! Diagnostic records and the ordered list that owns them. A parser appends a
//! [`Diagnostic`] to a [`DiagnosticList`] whenever it meets a problem it can
//! step over, keeps going, and hands the whole list back at the end of the
//! pass.
//!
//! ## Usage
//!
//! ```
//! # use quire_diag::{DiagnosticList, DiagnosticError};
//!
//! fn main() -> Result<(), DiagnosticError> {
//!     let mut diagnostics = DiagnosticList::new();
//!
//!     diagnostics.append("unexpected token", 10)?;
//!     diagnostics.append("unclosed `(`", 24)?;
//!
//!     for diag in &diagnostics {
//!         assert_eq!(diag.start(), diag.end());
//!     }
//!     assert_eq!(diagnostics.len(), 2);
//!
//!     diagnostics.destroy();
//!     Ok(())
//! }
//! ```

mod diagnostic;
mod error;
mod line_index;
mod list;

pub use diagnostic::Diagnostic;
pub use error::{DiagnosticError, Result};
pub use line_index::{LineIndex, Location};
pub use list::{DiagnosticList, IntoIter, Iter};
