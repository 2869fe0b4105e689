//! # Quire Parser
//!
//! An error-recovering scanner that records problems in source text as
//! [`quire_diag::Diagnostic`]s instead of stopping at the first one. It checks
//! bracket balance and string termination, which is enough to exercise the
//! diagnostic list the way a full parser would.
//!
//! ## Usage
//!
//! ```
//! # use quire_parser::{check, ScanConfig};
//!
//! let source = "call(a, [b);\nlet s = \"open\n";
//!
//! let err = check(source, &ScanConfig::default()).unwrap_err();
//! let diagnostics = err.diagnostics().expect("scan ran to completion");
//!
//! let found: Vec<_> = diagnostics
//!     .iter()
//!     .map(|d| (d.start(), d.message_lossy().into_owned()))
//!     .collect();
//! assert_eq!(
//!     found,
//!     [
//!         (10, "mismatched closing `)`, expected `]`".to_string()),
//!         (21, "unterminated string literal".to_string()),
//!         (4, "unclosed `(`".to_string()),
//!     ]
//! );
//! ```

mod config;
mod error;
mod lexer;
mod scanner;
mod tokens;

pub use config::ScanConfig;
pub use error::ParseError;
pub use tokens::Delimiter;

use log::info;

use quire_diag::{DiagnosticError, DiagnosticList};

use scanner::Scanner;

/// Scan `source`, appending a diagnostic to `diagnostics` for every problem.
///
/// Records already in the list are kept; new ones follow them in the order
/// they were found.
///
/// # Errors
///
/// Returns [`DiagnosticError`] if a diagnostic could not be recorded. The
/// scan stops there; the list keeps what was recorded before the failure.
pub fn scan(
    source: &str,
    config: &ScanConfig,
    diagnostics: &mut DiagnosticList,
) -> Result<(), DiagnosticError> {
    Scanner::new(config, diagnostics).scan(source)
}

/// Scan `source` into a fresh list.
///
/// # Returns
///
/// - `Ok(())` - Nothing was found
/// - `Err(ParseError::Rejected)` - One or more problems; contains all diagnostics
/// - `Err(ParseError::Diagnostic)` - A diagnostic could not be recorded
pub fn check(source: &str, config: &ScanConfig) -> Result<(), ParseError> {
    let mut diagnostics = DiagnosticList::new();
    scan(source, config, &mut diagnostics)?;

    if diagnostics.is_empty() {
        diagnostics.destroy();
        return Ok(());
    }

    info!(diagnostics_len = diagnostics.len(); "Source rejected");
    Err(ParseError::Rejected(diagnostics))
}
