//! Query construction
//!
//! A [`Query`] is assembled by applying an ordered list of [`QueryOption`]
//! steps to a [`QueryDraft`]. Each step owns one field: it substitutes the
//! configured default when its override is empty, otherwise it takes the
//! override (parsing it where needed). The first failing step aborts the build.
//!
//! # Example
//!
//! ```
//! use article_digest::{QueryBuilder, QueryDefaults};
//!
//! let defaults = QueryDefaults::default();
//! let query = QueryBuilder::new(&defaults)
//!     .tag("rust")
//!     .freshness("")
//!     .limit("3")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(query.tag(), "rust");
//! assert_eq!(query.freshness(), "10");
//! assert_eq!(query.limit(), 3);
//! ```

use std::num::NonZeroUsize;

use tracing::trace;

use crate::config::QueryDefaults;
use crate::tokenizer::CommandParams;
use crate::{DigestError, Result};

/// A fully resolved article query
///
/// Built only through [`QueryBuilder`] or [`build_query`]; read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    tag: String,
    freshness: String,
    limit: NonZeroUsize,
}

impl Query {
    /// Topic filter (empty means unfiltered)
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Recency window token forwarded to the content API
    pub fn freshness(&self) -> &str {
        &self.freshness
    }

    /// Maximum number of entries to render
    pub fn limit(&self) -> usize {
        self.limit.get()
    }

    /// Request parameters for the content API: `tag` and `top`
    ///
    /// # Example
    ///
    /// ```
    /// use article_digest::{QueryBuilder, QueryDefaults};
    ///
    /// let defaults = QueryDefaults::default();
    /// let query = QueryBuilder::new(&defaults).tag("go").build().unwrap();
    /// assert_eq!(query.api_params(), [("tag", "go"), ("top", "10")]);
    /// ```
    pub fn api_params(&self) -> [(&'static str, &str); 2] {
        [("tag", &self.tag), ("top", &self.freshness)]
    }
}

/// Mutable accumulator the query steps write into
///
/// Starts zero-valued; fields not touched by any step fall back to the
/// defaults when the draft is finished.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryDraft {
    /// Resolved tag, if a step has set it
    pub tag: Option<String>,
    /// Resolved freshness, if a step has set it
    pub freshness: Option<String>,
    /// Resolved limit, if a step has set it
    pub limit: Option<NonZeroUsize>,
}

impl QueryDraft {
    /// Freeze the draft into a [`Query`], filling unset fields from `defaults`
    pub fn finish(self, defaults: &QueryDefaults) -> Query {
        Query {
            tag: self.tag.unwrap_or_else(|| defaults.tag.clone()),
            freshness: self.freshness.unwrap_or_else(|| defaults.freshness.clone()),
            limit: self.limit.unwrap_or(defaults.limit),
        }
    }
}

/// One configuration step, carrying the user's override (empty = use default)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOption<'a> {
    /// Set the tag filter
    Tag(&'a str),
    /// Set the freshness token
    Freshness(&'a str),
    /// Set the result limit; must parse as a positive integer
    Limit(&'a str),
}

impl QueryOption<'_> {
    /// Apply this step to `draft`
    ///
    /// Only [`QueryOption::Limit`] can fail, with [`DigestError::InvalidLimit`].
    pub fn apply(&self, draft: &mut QueryDraft, defaults: &QueryDefaults) -> Result<()> {
        match *self {
            QueryOption::Tag(value) => {
                draft.tag = Some(or_default(value, &defaults.tag).to_string());
            }
            QueryOption::Freshness(value) => {
                draft.freshness = Some(or_default(value, &defaults.freshness).to_string());
            }
            QueryOption::Limit(value) => {
                let limit = if value.is_empty() {
                    defaults.limit
                } else {
                    parse_limit(value)?
                };
                draft.limit = Some(limit);
            }
        }
        Ok(())
    }
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() { default } else { value }
}

/// Parse a limit token as a positive base-10 integer
pub fn parse_limit(value: &str) -> Result<NonZeroUsize> {
    value
        .parse::<NonZeroUsize>()
        .map_err(|source| DigestError::InvalidLimit {
            value: value.to_string(),
            source,
        })
}

/// Apply `options` in order to a fresh draft, stopping at the first failure
pub fn build_query(defaults: &QueryDefaults, options: &[QueryOption<'_>]) -> Result<Query> {
    let mut draft = QueryDraft::default();
    for option in options {
        option.apply(&mut draft, defaults)?;
    }

    let query = draft.finish(defaults);
    trace!(
        "Built query tag={:?} freshness={:?} limit={}",
        query.tag, query.freshness, query.limit
    );
    Ok(query)
}

/// Builder collecting query steps before applying them
#[must_use]
#[derive(Debug, Clone)]
pub struct QueryBuilder<'a> {
    defaults: &'a QueryDefaults,
    options: Vec<QueryOption<'a>>,
}

impl<'a> QueryBuilder<'a> {
    /// Create an empty builder resolving against `defaults`
    pub fn new(defaults: &'a QueryDefaults) -> Self {
        Self {
            defaults,
            options: Vec::new(),
        }
    }

    /// Create a builder with the tag, freshness and limit steps for `params`
    pub fn from_params(defaults: &'a QueryDefaults, params: &CommandParams<'a>) -> Self {
        Self::new(defaults)
            .tag(params.tag)
            .freshness(params.freshness)
            .limit(params.limit)
    }

    /// Append an arbitrary step
    pub fn option(mut self, option: QueryOption<'a>) -> Self {
        self.options.push(option);
        self
    }

    /// Append a tag step
    pub fn tag(self, tag: &'a str) -> Self {
        self.option(QueryOption::Tag(tag))
    }

    /// Append a freshness step
    pub fn freshness(self, freshness: &'a str) -> Self {
        self.option(QueryOption::Freshness(freshness))
    }

    /// Append a limit step
    pub fn limit(self, limit: &'a str) -> Self {
        self.option(QueryOption::Limit(limit))
    }

    /// Apply the collected steps in order
    pub fn build(self) -> Result<Query> {
        build_query(self.defaults, &self.options)
    }
}
