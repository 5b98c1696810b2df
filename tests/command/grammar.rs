//! Grammar validation tests
//!
//! Accepted shapes: `/article`, `/article <tag>`, `/article <tag> <freshness>`
//! and `/article <tag> <freshness> <limit>`, single-space separated.

use article_digest::{check_command, validate_command, DigestError, TagCharset, ValidationConfig};

fn strict(input: &str) -> bool {
    validate_command(input, &ValidationConfig::strict())
}

#[test]
fn test_documented_accepted_commands() {
    assert!(strict("/article"));
    assert!(strict("/article go"));
    assert!(strict("/article go 10"));
    assert!(strict("/article go 10 5"));
}

#[test]
fn test_documented_rejected_commands() {
    assert!(!strict("/article 123"));
    assert!(!strict("/article go 0"));
    assert!(!strict("/article go 10 5 extra"));
}

#[test]
fn test_mixed_case_tags() {
    assert!(strict("/article JavaScript"));
    assert!(strict("/article RUST 1 1"));
}

#[test]
fn test_non_ascii_tag_rejected() {
    assert!(!strict("/article café"));
    assert!(!strict("/article ру"));
}

#[test]
fn test_large_numbers_accepted_by_grammar() {
    assert!(strict("/article go 365 100"));
    assert!(strict("/article go 99999999999999999999999"));
}

#[test]
fn test_freshness_without_tag_rejected() {
    assert!(!strict("/article 10"));
    assert!(!strict("/article 10 5"));
}

#[test]
fn test_other_commands_rejected() {
    assert!(!strict("/start"));
    assert!(!strict("/Article go"));
    assert!(!strict("article go"));
}

#[test]
fn test_legacy_charset_boundaries() {
    let legacy = ValidationConfig::legacy();
    assert_eq!(legacy.tag_charset, TagCharset::LegacyRange);

    // '@' sits just before 'A', '{' just after 'z'
    assert!(!validate_command("/article @go", &legacy));
    assert!(!validate_command("/article go{", &legacy));
    assert!(validate_command("/article snake_case", &legacy));
    assert!(!strict("/article snake_case"));
}

#[test]
fn test_check_command_reports_input() {
    let err = check_command("/article go 10 5 extra", &ValidationConfig::default()).unwrap_err();
    assert!(matches!(err, DigestError::InvalidCommand(_)));
    assert_eq!(err.to_string(), "Invalid command: \"/article go 10 5 extra\"");
}
