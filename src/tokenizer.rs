//! Command tokenizer
//!
//! Splits a validated command into its three positional parameters.

/// Positional parameters of a command, empty when absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommandParams<'a> {
    /// Topic tag
    pub tag: &'a str,
    /// Freshness window token
    pub freshness: &'a str,
    /// Result count token
    pub limit: &'a str,
}

/// Split `input` on single spaces into (tag, freshness, limit)
///
/// The leading command word is discarded and missing trailing parameters are
/// left empty. Meant for input that already passed
/// [`validate_command`](crate::validation::validate_command); tokens past the
/// third parameter are ignored.
///
/// # Examples
///
/// ```
/// use article_digest::tokenize;
///
/// let params = tokenize("/article rust 5");
/// assert_eq!(params.tag, "rust");
/// assert_eq!(params.freshness, "5");
/// assert_eq!(params.limit, "");
/// ```
pub fn tokenize(input: &str) -> CommandParams<'_> {
    let mut tokens = input.split(' ').skip(1);
    let mut next = || tokens.next().unwrap_or_default();

    CommandParams {
        tag: next(),
        freshness: next(),
        limit: next(),
    }
}
