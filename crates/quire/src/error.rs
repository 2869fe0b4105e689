//! Error types for Quire operations.
//!
//! This module provides the main error type [`QuireError`] which wraps
//! the error conditions that can occur while checking a source.

use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use quire_parser::ParseError;

/// The main error type for Quire operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source text alongside the recorded
/// diagnostics so reporters can show snippets without reading the input
/// again.
#[derive(Debug, Error)]
pub enum QuireError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{err}")]
    Parse { err: ParseError, src: String },
}

/// Failure to load a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration in {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Missing configuration file: {}", .0.display())]
    MissingFile(PathBuf),
}

impl ConfigError {
    /// The configuration file this error is about.
    pub fn path(&self) -> &Path {
        match self {
            Self::Parse { path, .. } | Self::MissingFile(path) => path,
        }
    }
}

impl QuireError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
