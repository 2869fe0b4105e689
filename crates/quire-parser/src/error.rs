//! The ParseError type returned when a scan finds problems.

use thiserror::Error;

use quire_diag::{DiagnosticError, DiagnosticList};

/// Error type for a complete check of one source.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The source was scanned to the end and problems were recorded.
    #[error("{}", summary(.0))]
    Rejected(DiagnosticList),

    /// A diagnostic could not be recorded; the scan was abandoned.
    #[error(transparent)]
    Diagnostic(#[from] DiagnosticError),
}

impl ParseError {
    /// Get the recorded diagnostics, if the scan ran to completion.
    pub fn diagnostics(&self) -> Option<&DiagnosticList> {
        match self {
            ParseError::Rejected(diagnostics) => Some(diagnostics),
            ParseError::Diagnostic(_) => None,
        }
    }
}

impl From<DiagnosticList> for ParseError {
    fn from(diagnostics: DiagnosticList) -> Self {
        Self::Rejected(diagnostics)
    }
}

/// Format as the first message, plus how many follow it.
fn summary(diagnostics: &DiagnosticList) -> String {
    let Some(first) = diagnostics.first() else {
        return "no diagnostics recorded".to_string();
    };

    let mut summary = first.message_lossy().into_owned();
    if diagnostics.len() > 1 {
        summary.push_str(&format!(" (+{} more)", diagnostics.len() - 1));
    }
    summary
}
