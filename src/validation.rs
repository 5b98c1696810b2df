//! Command grammar validation
//!
//! Gatekeeper for raw chat commands. A command is accepted only when it has one
//! of four shapes, with tokens separated by exactly one space:
//!
//! ```text
//! /article
//! /article <tag>
//! /article <tag> <freshness>
//! /article <tag> <freshness> <limit>
//! ```
//!
//! `<freshness>` and `<limit>` must match `[1-9][0-9]*`. The characters allowed
//! in `<tag>` are selected by [`TagCharset`]. Legacy configurations also accept
//! `/article ` (command word, one space, empty tag).

use tracing::debug;

use crate::{DigestError, Result};

/// Command word recognised by the default configuration
pub const DEFAULT_COMMAND: &str = "/article";

/// Maximum number of parameters after the command word
pub const MAX_PARAMS: usize = 3;

/// Character class accepted in the `<tag>` position
///
/// # Examples
///
/// ```
/// use article_digest::validation::TagCharset;
///
/// assert!(TagCharset::AsciiLetters.accepts("Rust"));
/// assert!(!TagCharset::AsciiLetters.accepts("go_lang"));
///
/// // The legacy range runs from 'A' to 'z' and picks up the six
/// // punctuation characters that sit between the two letter blocks.
/// assert!(TagCharset::LegacyRange.accepts("go_lang"));
/// assert!(!TagCharset::LegacyRange.accepts("c++"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TagCharset {
    /// The 52 ASCII letters `a-z` and `A-Z`
    #[default]
    AsciiLetters,
    /// Every character in `'A'..='z'`: the ASCII letters plus `[ \ ] ^ _` and backtick
    LegacyRange,
}

impl TagCharset {
    /// Check that `tag` is non-empty and made only of characters from this class
    pub fn accepts(self, tag: &str) -> bool {
        !tag.is_empty() && tag.chars().all(|ch| self.contains(ch))
    }

    fn contains(self, ch: char) -> bool {
        match self {
            TagCharset::AsciiLetters => ch.is_ascii_alphabetic(),
            TagCharset::LegacyRange => ('A'..='z').contains(&ch),
        }
    }
}

/// Configuration options for command validation
///
/// # Examples
///
/// ```
/// use article_digest::validation::{TagCharset, ValidationConfig};
///
/// // Letters-only tags (default)
/// let strict = ValidationConfig::strict();
/// assert_eq!(strict.tag_charset, TagCharset::AsciiLetters);
///
/// // Bug-compatible tag range, plus `/article ` with an empty tag
/// let legacy = ValidationConfig::legacy();
/// assert_eq!(legacy.tag_charset, TagCharset::LegacyRange);
/// assert!(legacy.allow_empty_tag);
///
/// // A bot that exposes the grammar under a different command word
/// let custom = ValidationConfig {
///     command: "/news".to_string(),
///     ..ValidationConfig::strict()
/// };
/// assert_eq!(custom.command, "/news");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValidationConfig {
    /// Leading command word, matched exactly (e.g. "/article")
    ///
    /// Must be non-empty and free of whitespace; otherwise no input validates.
    pub command: String,

    /// Characters allowed in the tag parameter
    pub tag_charset: TagCharset,

    /// Accept the command word followed by a single space and nothing else
    ///
    /// The empty tag then resolves to the default tag.
    pub allow_empty_tag: bool,
}

impl ValidationConfig {
    /// Letters-only tags under the default command word
    pub fn strict() -> Self {
        Self {
            command: DEFAULT_COMMAND.to_string(),
            tag_charset: TagCharset::AsciiLetters,
            allow_empty_tag: false,
        }
    }

    /// Grammar of older deployments under the default command word
    ///
    /// Tags are drawn from the contiguous `'A'..='z'` range and `/article `
    /// (trailing space, empty tag) is accepted. Separators are still single
    /// spaces.
    pub fn legacy() -> Self {
        Self {
            command: DEFAULT_COMMAND.to_string(),
            tag_charset: TagCharset::LegacyRange,
            allow_empty_tag: true,
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::strict()
    }
}

/// Returns true if `input` has one of the accepted command shapes
///
/// # Examples
///
/// ```
/// use article_digest::validation::{validate_command, ValidationConfig};
///
/// let config = ValidationConfig::strict();
/// assert!(validate_command("/article", &config));
/// assert!(validate_command("/article go 10 5", &config));
/// assert!(!validate_command("/article 123", &config));      // Numeric tag
/// assert!(!validate_command("/article go 0", &config));     // Not positive
/// assert!(!validate_command("/article  go", &config));      // Double space
/// ```
pub fn validate_command(input: &str, config: &ValidationConfig) -> bool {
    if !is_command_word(&config.command) {
        return false;
    }

    let mut tokens = input.split(' ');

    if tokens.next() != Some(config.command.as_str()) {
        return false;
    }

    let params: Vec<&str> = tokens.collect();
    if params.len() > MAX_PARAMS {
        return false;
    }

    match params.split_first() {
        None => true,
        Some((&"", [])) => config.allow_empty_tag,
        Some((tag, numbers)) => {
            config.tag_charset.accepts(tag) && numbers.iter().all(|n| is_positive_integer(n))
        }
    }
}

/// Like [`validate_command`], but reports rejection as [`DigestError::InvalidCommand`]
pub fn check_command(input: &str, config: &ValidationConfig) -> Result<()> {
    if validate_command(input, config) {
        Ok(())
    } else {
        debug!("Rejected command {:?}", input);
        Err(DigestError::InvalidCommand(input.to_string()))
    }
}

fn is_command_word(command: &str) -> bool {
    !command.is_empty() && !command.chars().any(char::is_whitespace)
}

/// Returns true if `token` matches `[1-9][0-9]*`
pub fn is_positive_integer(token: &str) -> bool {
    match token.as_bytes().split_first() {
        Some((first, rest)) => {
            (b'1'..=b'9').contains(first) && rest.iter().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}
