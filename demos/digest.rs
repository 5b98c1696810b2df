//! Command-to-digest example
//!
//! Run with: cargo run --example digest -- "/article rust 7 2"
//!
//! Uses an in-memory article source; swap in an HTTP client to query a live API.

use article_digest::{Article, ArticleSource, Articles, Digest, DigestError, Result};
use tracing_subscriber::EnvFilter;

/// Serves a fixed feed, filtered by tag the way a content API would
struct FixtureSource {
    feed: Vec<(&'static str, Article)>,
}

impl FixtureSource {
    fn new() -> Self {
        Self {
            feed: vec![
                (
                    "rust",
                    Article::new("Understanding Pin", "https://dev.to/pin", 214),
                ),
                (
                    "go",
                    Article::new("Goroutines vs threads", "https://dev.to/goroutines", 187),
                ),
                (
                    "rust",
                    Article::new("Error handling with thiserror", "https://dev.to/errors", 143),
                ),
                (
                    "python",
                    Article::new("Typing in practice", "https://dev.to/typing", 98),
                ),
                (
                    "rust",
                    Article::new("Tracing for humans", "https://dev.to/tracing", 77),
                ),
            ],
        }
    }
}

impl ArticleSource for FixtureSource {
    async fn fetch(&self, tag: &str, freshness: &str) -> Result<Articles> {
        let days: u32 = freshness
            .parse()
            .map_err(|e| DigestError::Fetch(format!("bad freshness {freshness:?}: {e}")))?;
        tracing::info!("Fixture fetch: tag={:?} top={}", tag, days);

        Ok(self
            .feed
            .iter()
            .filter(|(t, _)| tag.is_empty() || t.eq_ignore_ascii_case(tag))
            .map(|(_, article)| article.clone())
            .collect())
    }
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("article_digest=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/article rust 7 2".to_string());

    let digest = Digest::default();
    let source = FixtureSource::new();

    match digest.run(&input, &source).await {
        Ok(text) if text.is_empty() => println!("No articles found."),
        Ok(text) => print!("{}", text),
        Err(DigestError::InvalidCommand(_)) => {
            println!("Usage: /article [tag [freshness [limit]]]");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
