//! Quire - collect every problem in a source file in a single pass.
//!
//! The scanner keeps going past each problem it finds and records it in a
//! [`DiagnosticList`](quire_diag::DiagnosticList), so a single run reports
//! everything at once.

pub mod config;

mod error;

pub use quire_diag::{Diagnostic, DiagnosticList, LineIndex, Location};

pub use error::{ConfigError, QuireError};

use log::{debug, info};

use config::AppConfig;

/// Builder for checking sources against a configuration.
///
/// # Examples
///
/// ```rust
/// use quire::{Checker, config::AppConfig};
///
/// let checker = Checker::new(AppConfig::default());
///
/// assert!(checker.check("call(a, [b]);").is_ok());
/// assert!(checker.check("call(a, [b);").is_err());
/// ```
#[derive(Debug, Default)]
pub struct Checker {
    config: AppConfig,
}

impl Checker {
    /// Create a new checker with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Check a source, collecting every problem in one pass.
    ///
    /// # Errors
    ///
    /// Returns [`QuireError::Parse`] carrying all diagnostics and the source
    /// text when anything was found, or when a diagnostic could not be
    /// recorded.
    pub fn check(&self, source: &str) -> Result<(), QuireError> {
        info!(source_len = source.len(); "Checking source");

        let scan_config = self.config.scan().to_scan_config();
        quire_parser::check(source, &scan_config)
            .map_err(|err| QuireError::new_parse_error(err, source))?;

        debug!("Source checked successfully");
        Ok(())
    }
}
