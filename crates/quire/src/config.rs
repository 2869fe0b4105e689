//! Configuration types for Quire checks.
//!
//! This module provides configuration structures that control what the
//! scanner reports and how diagnostics are presented. All types implement
//! [`serde::Deserialize`] for loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining scan and report settings.
//! - [`ScanSection`] - Controls string and comment handling in the scanner.
//! - [`ReportSection`] - Controls rendering style and how many diagnostics are shown.
//!
//! # Example
//!
//! ```
//! # use quire::config::{AppConfig, ReportStyle};
//! let config = AppConfig::default();
//! assert_eq!(config.report().style(), ReportStyle::Fancy);
//! assert_eq!(config.report().limit(), None);
//! ```

use serde::Deserialize;

use quire_parser::ScanConfig;

/// Top-level configuration combining scan and report settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Scan configuration section.
    #[serde(default)]
    scan: ScanSection,

    /// Report configuration section.
    #[serde(default)]
    report: ReportSection,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified sections.
    pub fn new(scan: ScanSection, report: ReportSection) -> Self {
        Self { scan, report }
    }

    /// Returns the scan configuration.
    pub fn scan(&self) -> &ScanSection {
        &self.scan
    }

    /// Returns the report configuration.
    pub fn report(&self) -> &ReportSection {
        &self.report
    }
}

/// Scanner settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScanSection {
    /// Report unterminated `"` string literals.
    strings: bool,

    /// Prefix starting a comment that runs to the end of the line.
    line_comment: Option<String>,
}

impl ScanSection {
    /// Creates a new [`ScanSection`].
    pub fn new(strings: bool, line_comment: Option<String>) -> Self {
        Self {
            strings,
            line_comment,
        }
    }

    /// Returns whether string literals are checked.
    pub fn strings(&self) -> bool {
        self.strings
    }

    /// Returns the line comment prefix, if any.
    pub fn line_comment(&self) -> Option<&str> {
        self.line_comment.as_deref()
    }

    /// Build the scanner configuration for this section.
    pub fn to_scan_config(&self) -> ScanConfig {
        ScanConfig::new(self.strings, self.line_comment.clone())
    }
}

impl Default for ScanSection {
    fn default() -> Self {
        let defaults = ScanConfig::default();
        Self::new(defaults.strings, defaults.line_comment)
    }
}

/// How diagnostics are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStyle {
    /// Source snippets with a pointer at each diagnostic.
    #[default]
    Fancy,

    /// One `path:line:column: message` line per diagnostic.
    Short,
}

/// Report settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportSection {
    /// Rendering style.
    #[serde(default)]
    style: ReportStyle,

    /// Maximum number of diagnostics rendered. `None` renders all.
    #[serde(default)]
    limit: Option<usize>,
}

impl ReportSection {
    /// Creates a new [`ReportSection`].
    pub fn new(style: ReportStyle, limit: Option<usize>) -> Self {
        Self { style, limit }
    }

    /// Returns the rendering style.
    pub fn style(&self) -> ReportStyle {
        self.style
    }

    /// Returns the rendering limit.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scan_section() {
        let scan = ScanSection::default();

        assert!(scan.strings());
        assert_eq!(scan.line_comment(), Some("//"));
    }

    #[test]
    fn test_to_scan_config() {
        let scan = ScanSection::new(false, Some("#".to_string()));

        assert_eq!(
            scan.to_scan_config(),
            ScanConfig::new(false, Some("#".to_string()))
        );
    }

    #[test]
    fn test_report_section_accessors() {
        let report = ReportSection::new(ReportStyle::Short, Some(3));

        assert_eq!(report.style(), ReportStyle::Short);
        assert_eq!(report.limit(), Some(3));
    }
}
