//! Digest configuration
//!
//! Default values substituted for omitted command parameters, and the
//! combined configuration consumed by [`Digest`](crate::Digest).

use std::num::NonZeroUsize;

use crate::validation::ValidationConfig;

/// Tag used when the command names none (unfiltered)
pub const DEFAULT_TAG: &str = "";

/// Freshness window used when the command names none
pub const DEFAULT_FRESHNESS: &str = "10";

/// Number of entries rendered when the command names no limit
pub const DEFAULT_LIMIT: NonZeroUsize = NonZeroUsize::new(10).unwrap();

/// Values substituted for parameters the user left out
///
/// # Example
///
/// ```
/// use std::num::NonZeroUsize;
/// use article_digest::QueryDefaults;
///
/// let defaults = QueryDefaults::default();
/// assert_eq!(defaults.tag, "");
/// assert_eq!(defaults.freshness, "10");
/// assert_eq!(defaults.limit.get(), 10);
///
/// // Shorter digests, scoped to a tag
/// let defaults = QueryDefaults::new("rust", "7", NonZeroUsize::new(3).unwrap());
/// assert_eq!(defaults.tag, "rust");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QueryDefaults {
    /// Tag filter applied when none is given
    pub tag: String,

    /// Freshness token forwarded when none is given
    pub freshness: String,

    /// Entry count rendered when none is given
    pub limit: NonZeroUsize,
}

impl QueryDefaults {
    /// Create a set of defaults
    pub fn new(tag: impl Into<String>, freshness: impl Into<String>, limit: NonZeroUsize) -> Self {
        Self {
            tag: tag.into(),
            freshness: freshness.into(),
            limit,
        }
    }
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self::new(DEFAULT_TAG, DEFAULT_FRESHNESS, DEFAULT_LIMIT)
    }
}

/// Complete configuration for turning commands into digests
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DigestConfig {
    /// Grammar accepted for incoming commands
    pub validation: ValidationConfig,

    /// Values substituted for omitted parameters
    pub defaults: QueryDefaults,
}

impl DigestConfig {
    /// Create a configuration from its parts
    pub fn new(validation: ValidationConfig, defaults: QueryDefaults) -> Self {
        Self {
            validation,
            defaults,
        }
    }
}
