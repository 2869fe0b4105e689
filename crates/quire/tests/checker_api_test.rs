//! Integration tests for the Checker API
//!
//! These tests verify that the public API works and is usable.

use quire::{
    Checker, QuireError,
    config::{AppConfig, ReportStyle, ScanSection},
};

#[test]
fn test_checker_api_exists() {
    let _checker = Checker::default();
}

#[test]
fn test_check_clean_source() {
    let source = r#"
        fn main() {
            let items = [1, 2, 3];
            println!("{items:?}");
        }
    "#;

    let checker = Checker::default();
    let result = checker.check(source);
    assert!(
        result.is_ok(),
        "Should accept balanced source: {:?}",
        result.err()
    );
}

#[test]
fn test_check_collects_all_diagnostics() {
    let source = "f(x]\ng(\"y\n";

    let checker = Checker::default();
    let err = checker.check(source).expect_err("Expected rejection");

    match err {
        QuireError::Parse { err, src } => {
            assert_eq!(src, source);
            let diagnostics = err.diagnostics().expect("scan ran to completion");
            let messages: Vec<_> = diagnostics.iter().map(|d| d.message_lossy()).collect();
            assert_eq!(
                messages,
                [
                    "mismatched closing `]`, expected `)`",
                    "unterminated string literal",
                    "unclosed `(`",
                ]
            );
        }
        other => panic!("Expected Parse error, got {other:?}"),
    }
}

#[test]
fn test_checker_with_scan_config() {
    let config = AppConfig::new(
        ScanSection::new(false, Some("#".to_string())),
        Default::default(),
    );
    let checker = Checker::new(config);

    // Quotes are plain text and `#` starts a comment
    assert!(checker.check("say \"hi # ( \n").is_ok());
    assert!(checker.check("say \"(hi\"").is_err());
}

#[test]
fn test_config_from_toml() {
    let config: AppConfig = toml::from_str(
        r#"
        [scan]
        strings = false

        [report]
        style = "short"
        limit = 5
        "#,
    )
    .expect("Failed to parse config");

    assert!(!config.scan().strings());
    assert_eq!(config.scan().line_comment(), Some("//"));
    assert_eq!(config.report().style(), ReportStyle::Short);
    assert_eq!(config.report().limit(), Some(5));
}

#[test]
fn test_config_from_empty_toml() {
    let config: AppConfig = toml::from_str("").expect("Failed to parse config");

    assert!(config.scan().strings());
    assert_eq!(config.report().style(), ReportStyle::Fancy);
    assert_eq!(config.report().limit(), None);
}

#[test]
fn test_config_rejects_unknown_style() {
    let result: Result<AppConfig, _> = toml::from_str("[report]\nstyle = \"loud\"\n");

    assert!(result.is_err());
}
