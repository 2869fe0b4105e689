//! Rendering of failed checks for the terminal.
//!
//! [`Reporter`] turns a [`QuireError`] into one rendered block per
//! reportable, honoring the configured [`ReportStyle`] and limit.

use miette::{GraphicalReportHandler, GraphicalTheme};

use quire::{
    LineIndex, QuireError,
    config::{ReportSection, ReportStyle},
};

use crate::error_adapter::{Reportable, to_reportables};

/// Renders errors according to the `[report]` configuration.
pub struct Reporter<'a> {
    handler: GraphicalReportHandler,
    style: ReportStyle,
    limit: Option<usize>,
    path: &'a str,
}

impl<'a> Reporter<'a> {
    /// Create a reporter for diagnostics found in `path`.
    pub fn new(report: &ReportSection, path: &'a str) -> Self {
        Self {
            handler: GraphicalReportHandler::new(),
            style: report.style(),
            limit: report.limit(),
            path,
        }
    }

    /// Use a specific theme for fancy output.
    pub fn with_theme(mut self, theme: GraphicalTheme) -> Self {
        self.handler = GraphicalReportHandler::new_themed(theme);
        self
    }

    /// Render every reportable in `err`, up to the configured limit.
    ///
    /// When the limit hides some diagnostics, a final line says how many.
    pub fn render(&self, err: &QuireError) -> Vec<String> {
        let index = match err {
            QuireError::Parse { src, .. } => Some(LineIndex::new(src)),
            _ => None,
        };

        let reportables = to_reportables(err);
        let total = reportables.len();
        let shown = self.limit.map_or(total, |limit| limit.min(total));

        let mut rendered: Vec<String> = reportables
            .iter()
            .take(shown)
            .map(|reportable| match self.style {
                ReportStyle::Fancy => self.render_fancy(reportable),
                ReportStyle::Short => self.render_short(reportable, index.as_ref()),
            })
            .collect();

        if shown < total {
            rendered.push(format!("{} more diagnostics not shown", total - shown));
        }

        rendered
    }

    fn render_fancy(&self, reportable: &Reportable<'_>) -> String {
        let mut writer = String::new();
        if self.handler.render_report(&mut writer, reportable).is_err() {
            // Fall back to the bare message if the snippet cannot be drawn
            return format!("{}: {reportable}", self.path);
        }
        writer
    }

    fn render_short(&self, reportable: &Reportable<'_>, index: Option<&LineIndex>) -> String {
        match (reportable, index) {
            (Reportable::Diagnostic(diag), Some(index)) => {
                format!("{}:{}: {diag}", self.path, diag.location(index))
            }
            _ => format!("{}: {reportable}", self.path),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use quire::{ConfigError, DiagnosticList};
    use quire_parser::ParseError;

    use super::*;

    fn rejected(source: &str, entries: &[(&str, u32)]) -> QuireError {
        let mut diagnostics = DiagnosticList::new();
        for (message, position) in entries {
            diagnostics.append(message, *position).unwrap();
        }
        QuireError::new_parse_error(ParseError::from(diagnostics), source)
    }

    #[test]
    fn test_short_style() {
        let err = rejected(
            "a)\nb(]\n",
            &[
                ("unexpected closing `)`", 1),
                ("mismatched closing `]`, expected `)`", 5),
            ],
        );
        let report = ReportSection::new(ReportStyle::Short, None);

        let rendered = Reporter::new(&report, "input.txt").render(&err);

        assert_eq!(
            rendered,
            [
                "input.txt:1:2: unexpected closing `)`",
                "input.txt:2:3: mismatched closing `]`, expected `)`",
            ]
        );
    }

    #[test]
    fn test_limit_adds_note() {
        let err = rejected(")))", &[("one", 0), ("two", 1), ("three", 2)]);
        let report = ReportSection::new(ReportStyle::Short, Some(1));

        let rendered = Reporter::new(&report, "f").render(&err);

        assert_eq!(rendered, ["f:1:1: one", "2 more diagnostics not shown"]);
    }

    #[test]
    fn test_limit_larger_than_total() {
        let err = rejected(")", &[("one", 0)]);
        let report = ReportSection::new(ReportStyle::Short, Some(10));

        let rendered = Reporter::new(&report, "f").render(&err);

        assert_eq!(rendered, ["f:1:1: one"]);
    }

    #[test]
    fn test_short_style_non_parse_error() {
        let err = QuireError::from(ConfigError::MissingFile(PathBuf::from("quire.toml")));
        let report = ReportSection::new(ReportStyle::Short, None);

        let rendered = Reporter::new(&report, "f").render(&err);

        assert_eq!(
            rendered,
            ["f: Configuration error: Missing configuration file: quire.toml"]
        );
    }

    #[test]
    fn test_fancy_style() {
        let err = rejected("call(a\n", &[("unclosed `(`", 4)]);
        let report = ReportSection::default();

        let rendered = Reporter::new(&report, "f")
            .with_theme(GraphicalTheme::unicode_nocolor())
            .render(&err);

        assert_eq!(rendered.len(), 1);
        assert!(rendered[0].contains("unclosed `(`"));
        assert!(rendered[0].contains("call(a"));
    }
}
