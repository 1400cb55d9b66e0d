//! Token classification and option normalization.
//!
//! Every token is classified exactly once: tokens starting with `-` are
//! options, everything else is a positional argument. Options go through two
//! steps:
//!
//! 1. [`normalize_option`] reduces the token to `key` or `key=value`. Long
//!    (`--`) tokens lose exactly two dashes and are otherwise untouched. Short
//!    (`-`) tokens lose all leading dashes and have their key looked up in the
//!    [`AliasTable`] ([`resolve_alias`]).
//! 2. [`split_option`] splits the normalized string on its first `=`. A string
//!    without `=` becomes a flag.
//!
//! Parsing is total: every input yields a [`Configuration`].

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::{AliasTable, Configuration, OptionValue};

/// Returns `true` if `token` is an option (starts with `-`).
pub fn is_option(token: &str) -> bool {
    token.starts_with('-')
}

/// Parses `tokens` without any aliases.
///
/// # Examples
///
/// ```
/// use command_options_core::{OptionValue, parse};
///
/// let config = parse(["test", "-test", "--newtest=test", "--doubledash"]);
/// assert_eq!(config.arguments(), ["test"]);
/// assert_eq!(config.get("test"), Some(&OptionValue::Flag));
/// assert_eq!(config.value("newtest"), Some("test"));
/// assert!(config.is_flag_set("doubledash"));
/// ```
pub fn parse<I, S>(tokens: I) -> Configuration
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_with_aliases(tokens, &AliasTable::new())
}

/// Parses `tokens`, resolving single-dash keys through `aliases`.
///
/// # Examples
///
/// ```
/// use command_options_core::{AliasTable, parse_with_aliases};
///
/// let aliases = AliasTable::new().with_alias("t", "trythisone");
///
/// let config = parse_with_aliases(["-t=test"], &aliases);
/// assert_eq!(config.value("trythisone"), Some("test"));
///
/// let config = parse_with_aliases(["-t"], &aliases);
/// assert!(config.is_flag_set("trythisone"));
///
/// // Long tokens never go through the alias table.
/// let config = parse_with_aliases(["--t"], &aliases);
/// assert!(config.is_flag_set("t"));
/// ```
pub fn parse_with_aliases<I, S>(tokens: I, aliases: &AliasTable) -> Configuration
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut arguments = Vec::new();
    let mut options = BTreeMap::new();

    for token in tokens {
        let token = token.as_ref();
        if !is_option(token) {
            arguments.push(token.to_string());
            continue;
        }

        let normalized = normalize_option(token, aliases);
        trace!(token, normalized = %normalized, "Normalized option");
        let (key, value) = split_option(&normalized);
        options.insert(key, value);
    }

    debug!(
        arguments = arguments.len(),
        options = options.len(),
        "Parsed command-line tokens"
    );
    Configuration::from_parts(arguments, options)
}

/// Parses the current process arguments, excluding the program name.
///
/// Arguments that are not valid UTF-8 are converted lossily.
pub fn parse_env(aliases: &AliasTable) -> Configuration {
    parse_with_aliases(
        std::env::args_os()
            .skip(1)
            .map(|arg| arg.to_string_lossy().into_owned()),
        aliases,
    )
}

/// Reduces an option token to `key` or `key=value`.
///
/// # Examples
///
/// ```
/// use command_options_core::{AliasTable, normalize_option};
///
/// let aliases = AliasTable::new().with_alias("t", "trythisone");
/// assert_eq!(normalize_option("--name=value", &aliases), "name=value");
/// assert_eq!(normalize_option("---name", &aliases), "-name");
/// assert_eq!(normalize_option("-t=x", &aliases), "trythisone=x");
/// ```
pub fn normalize_option(token: &str, aliases: &AliasTable) -> String {
    match token.strip_prefix("--") {
        Some(long) => long.to_string(),
        None => resolve_alias(token, aliases),
    }
}

/// Normalizes an abbreviated (single-dash) token.
///
/// All leading dashes are stripped and the key before the first `=` is
/// replaced by its canonical name when `aliases` has one. A value is kept
/// only when it is non-empty; `-t=` normalizes to the bare key.
///
/// # Examples
///
/// ```
/// use command_options_core::{AliasTable, resolve_alias};
///
/// let aliases = AliasTable::new().with_alias("t", "trythisone");
/// assert_eq!(resolve_alias("-t", &aliases), "trythisone");
/// assert_eq!(resolve_alias("-t=a=b", &aliases), "trythisone=a=b");
/// assert_eq!(resolve_alias("-t=", &aliases), "trythisone");
/// assert_eq!(resolve_alias("-x=1", &aliases), "x=1");
/// ```
pub fn resolve_alias(token: &str, aliases: &AliasTable) -> String {
    let stripped = token.trim_start_matches('-');
    let (raw_key, raw_value) = match stripped.split_once('=') {
        Some((key, value)) => (key, Some(value)),
        None => (stripped, None),
    };

    let key = aliases.resolve(raw_key);
    match raw_value {
        Some(value) if !value.is_empty() => format!("{key}={value}"),
        _ => key.to_string(),
    }
}

/// Splits a normalized option on its first `=`.
///
/// Anything after the first `=` is the value, further `=` included. Without
/// `=`, the option is a flag.
///
/// # Examples
///
/// ```
/// use command_options_core::{OptionValue, split_option};
///
/// assert_eq!(split_option("k=a=b"), ("k".to_string(), OptionValue::from("a=b")));
/// assert_eq!(split_option("flag"), ("flag".to_string(), OptionValue::Flag));
/// ```
pub fn split_option(normalized: &str) -> (String, OptionValue) {
    match normalized.split_once('=') {
        Some((key, value)) => (key.to_string(), OptionValue::from(value)),
        None => (normalized.to_string(), OptionValue::Flag),
    }
}
