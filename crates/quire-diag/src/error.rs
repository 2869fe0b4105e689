use std::collections::TryReserveError;

use thiserror::Error;

/// Failure to record a diagnostic.
///
/// Diagnostics are the channel parsers use to report the problems they
/// recover from, so a failure here cannot itself become a diagnostic. Callers
/// propagate it and abandon the current parse.
#[derive(Debug, Error)]
pub enum DiagnosticError {
    /// Storage for the record or its message could not be reserved.
    #[error("out of memory while recording diagnostic at offset {position}")]
    OutOfMemory {
        /// Offset of the diagnostic that was dropped
        position: u32,

        #[source]
        source: TryReserveError,
    },
}

impl DiagnosticError {
    pub(crate) fn out_of_memory(position: u32, source: TryReserveError) -> Self {
        Self::OutOfMemory { position, source }
    }

    /// Offset of the diagnostic that could not be recorded.
    pub fn position(&self) -> u32 {
        match self {
            Self::OutOfMemory { position, .. } => *position,
        }
    }
}

/// A type alias for `Result<T, DiagnosticError>`
pub type Result<T> = std::result::Result<T, DiagnosticError>;
