#![doc = include_str!("../README.md")]

/// Article records and digest rendering
pub mod article;
mod config;
mod digest;
mod error;
/// Query construction from command parameters
pub mod query;
mod tokenizer;
/// Command grammar validation
pub mod validation;

pub use article::{format_articles, Article, Articles};
pub use config::{DigestConfig, QueryDefaults, DEFAULT_FRESHNESS, DEFAULT_LIMIT, DEFAULT_TAG};
pub use digest::{ArticleSource, Digest};
pub use error::{DigestError, Result};
pub use query::{build_query, Query, QueryBuilder, QueryDraft, QueryOption};
pub use tokenizer::{tokenize, CommandParams};
pub use validation::{check_command, validate_command, TagCharset, ValidationConfig};
