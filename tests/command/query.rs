//! Tokenizer and query builder tests

use std::error::Error;
use std::num::NonZeroUsize;

use article_digest::{
    build_query, tokenize, validate_command, CommandParams, DigestError, QueryBuilder,
    QueryDefaults, QueryOption, ValidationConfig,
};

fn parse(input: &str) -> article_digest::Result<article_digest::Query> {
    let defaults = QueryDefaults::default();
    QueryBuilder::from_params(&defaults, &tokenize(input)).build()
}

#[test]
fn test_command_only_uses_all_defaults() {
    let query = parse("/article").unwrap();
    assert_eq!(query.tag(), "");
    assert_eq!(query.freshness(), "10");
    assert_eq!(query.limit(), 10);
}

#[test]
fn test_all_parameters_override_defaults() {
    let query = parse("/article rust 5 3").unwrap();
    assert_eq!(query.tag(), "rust");
    assert_eq!(query.freshness(), "5");
    assert_eq!(query.limit(), 3);
}

#[test]
fn test_partial_parameters() {
    let query = parse("/article go 30").unwrap();
    assert_eq!(query.tag(), "go");
    assert_eq!(query.freshness(), "30");
    assert_eq!(query.limit(), 10);
}

#[test]
fn test_every_accepted_command_builds_positive_limit() {
    let config = ValidationConfig::strict();
    for input in [
        "/article",
        "/article go",
        "/article go 1",
        "/article go 1 1",
        "/article Rust 365 42",
    ] {
        assert!(validate_command(input, &config), "{input}");
        let query = parse(input).unwrap();
        assert!(query.limit() > 0);
        assert!(!query.freshness().is_empty());
    }
}

#[test]
fn test_tokenize_fixed_arity() {
    assert_eq!(
        tokenize("/article go"),
        CommandParams {
            tag: "go",
            freshness: "",
            limit: "",
        }
    );
}

#[test]
fn test_overflowing_limit_is_parse_error() {
    let err = parse("/article go 10 99999999999999999999999").unwrap_err();
    match &err {
        DigestError::InvalidLimit { value, .. } => {
            assert_eq!(value, "99999999999999999999999");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.source().is_some());
    assert!(err.to_string().starts_with("Invalid limit"));
}

#[test]
fn test_direct_builder_rejects_zero_limit() {
    let defaults = QueryDefaults::default();
    let result = QueryBuilder::new(&defaults).limit("0").build();
    assert!(matches!(result, Err(DigestError::InvalidLimit { .. })));
}

#[test]
fn test_custom_defaults() {
    let defaults = QueryDefaults::new("rust", "7", NonZeroUsize::new(5).unwrap());
    let query = build_query(
        &defaults,
        &[
            QueryOption::Tag(""),
            QueryOption::Freshness(""),
            QueryOption::Limit(""),
        ],
    )
    .unwrap();
    assert_eq!(query.api_params(), [("tag", "rust"), ("top", "7")]);
    assert_eq!(query.limit(), 5);
}
