//! Command-to-digest pipeline
//!
//! [`Digest`] runs the whole flow for one chat command:
//!
//! 1. Validate the raw command against the configured grammar
//! 2. Tokenize it into tag, freshness and limit
//! 3. Build a [`Query`], substituting defaults
//! 4. Fetch articles through an [`ArticleSource`]
//! 5. Render at most `limit` of them
//!
//! The crate never talks HTTP itself. Callers plug their client in by
//! implementing [`ArticleSource`].
//!
//! # Example
//!
//! ```
//! use article_digest::{Article, ArticleSource, Articles, Digest, Result};
//!
//! struct Fixed(Articles);
//!
//! impl ArticleSource for Fixed {
//!     async fn fetch(&self, _tag: &str, _freshness: &str) -> Result<Articles> {
//!         Ok(self.0.clone())
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<()> {
//! let source = Fixed(vec![Article::new("Hello", "https://dev.to/hello", 5)]);
//! let digest = Digest::default();
//!
//! let text = digest.run("/article rust 7 1", &source).await?;
//! assert!(text.contains("[Hello](https://dev.to/hello)"));
//!
//! assert!(digest.run("/article 42", &source).await.is_err());
//! # Ok(())
//! # }
//! ```

use std::future::Future;

use tracing::debug;

use crate::article::{render, Articles};
use crate::config::DigestConfig;
use crate::query::{Query, QueryBuilder};
use crate::tokenizer::tokenize;
use crate::validation::{check_command, validate_command};
use crate::Result;

/// Supplier of articles for a tag and freshness window
///
/// Implemented by the caller's HTTP client, cache or test fixture. Failures
/// should be reported as [`DigestError::Fetch`](crate::DigestError::Fetch) or
/// [`DigestError::Decode`](crate::DigestError::Decode).
pub trait ArticleSource {
    /// Fetch articles, most relevant first
    fn fetch(&self, tag: &str, freshness: &str) -> impl Future<Output = Result<Articles>> + Send;
}

/// Turns chat commands into rendered digests
#[derive(Debug, Clone, Default)]
pub struct Digest {
    config: DigestConfig,
}

impl Digest {
    /// Create a pipeline with the given configuration
    pub fn new(config: DigestConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &DigestConfig {
        &self.config
    }

    /// Returns true if `input` is a well-formed command
    pub fn accepts(&self, input: &str) -> bool {
        validate_command(input, &self.config.validation)
    }

    /// Validate, tokenize and build the query for `input`
    ///
    /// Input that fails validation never reaches the builder.
    pub fn parse(&self, input: &str) -> Result<Query> {
        check_command(input, &self.config.validation)?;
        let params = tokenize(input);
        let query = QueryBuilder::from_params(&self.config.defaults, &params).build()?;
        debug!(
            "Parsed command: tag={:?} freshness={:?} limit={}",
            query.tag(),
            query.freshness(),
            query.limit()
        );
        Ok(query)
    }

    /// Parse `input`, fetch from `source` and render the digest
    pub async fn run<S>(&self, input: &str, source: &S) -> Result<String>
    where
        S: ArticleSource,
    {
        let query = self.parse(input)?;
        let articles = source.fetch(query.tag(), query.freshness()).await?;
        debug!(
            "Fetched {} articles, rendering up to {}",
            articles.len(),
            query.limit()
        );
        Ok(render(articles.iter().take(query.limit())))
    }
}
