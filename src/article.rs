//! Article records and digest rendering

use std::fmt::Write;

/// Bullet glyph opening every rendered entry (U+2689)
pub const BULLET: char = '\u{2689}';

/// A single article as returned by the content API
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Article {
    /// Headline, used as the link label
    pub title: String,
    /// Canonical article URL
    pub url: String,
    /// Positive reaction count
    #[cfg_attr(feature = "serde", serde(rename = "positive_reactions_count"))]
    pub score: i64,
}

impl Article {
    /// Create an article record
    pub fn new(title: impl Into<String>, url: impl Into<String>, score: i64) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            score,
        }
    }
}

/// Articles in the order the content API returned them
pub type Articles = Vec<Article>;

/// Render at most `limit` articles, in input order
///
/// Each entry is a bullet, a Markdown link, and the score in a code span,
/// followed by a blank line. A `limit` of zero or less renders nothing.
///
/// # Example
///
/// ```
/// use article_digest::{format_articles, Article};
///
/// let articles = vec![
///     Article::new("Ownership", "https://dev.to/a", 42),
///     Article::new("Lifetimes", "https://dev.to/b", 7),
/// ];
///
/// let digest = format_articles(&articles, 1);
/// assert_eq!(digest, "\u{2689} [Ownership](https://dev.to/a)\n`  Score: 42`\n\n");
/// assert_eq!(format_articles(&articles, 0), "");
/// ```
pub fn format_articles(articles: &[Article], limit: i64) -> String {
    let count = if limit <= 0 {
        0
    } else {
        usize::try_from(limit).unwrap_or(usize::MAX)
    };
    render(articles.iter().take(count))
}

pub(crate) fn render<'a>(articles: impl Iterator<Item = &'a Article>) -> String {
    let mut out = String::new();
    for article in articles {
        // Writing into a String cannot fail
        let _ = write!(
            out,
            "{} [{}]({})\n`  Score: {}`\n\n",
            BULLET, article.title, article.url, article.score
        );
    }
    out
}
