/// Options controlling what the scanner reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Treat `"` as the start of a string literal and report unterminated ones
    pub strings: bool,
    /// Prefix that starts a comment running to the end of the line
    pub line_comment: Option<String>,
}

impl ScanConfig {
    /// Create a new ScanConfig
    pub fn new(strings: bool, line_comment: Option<String>) -> Self {
        Self {
            strings,
            line_comment,
        }
    }

    /// The comment prefix, if one is configured and non-empty.
    pub(crate) fn comment_prefix(&self) -> Option<&str> {
        self.line_comment.as_deref().filter(|prefix| !prefix.is_empty())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new(true, Some("//".to_string()))
    }
}
