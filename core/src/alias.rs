//! Abbreviation tables mapping short option names to canonical names.
//!
//! An [`AliasTable`] is supplied per parse call and consulted only for
//! single-dash tokens. Tables can be built in code, read from a YAML/JSON
//! file, or assembled from `short=long` definitions given on a command line.
//!
//! # Example YAML
//!
//! ```yaml
//! t: trythisone
//! v: verbose
//! o: output
//! ```

use std::collections::HashMap;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{AliasError, Result};

/// Mapping from abbreviated option name to canonical option name.
///
/// # Examples
///
/// ```
/// use command_options_core::AliasTable;
///
/// let aliases = AliasTable::new()
///     .with_alias("t", "trythisone")
///     .with_alias("v", "verbose");
///
/// assert_eq!(aliases.resolve("t"), "trythisone");
/// assert_eq!(aliases.resolve("x"), "x");
/// assert_eq!(aliases.canonical("v"), Some("verbose"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasTable {
    entries: HashMap<String, String>,
}

impl AliasTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an alias, returning the table for chaining.
    pub fn with_alias(mut self, short: impl Into<String>, long: impl Into<String>) -> Self {
        self.insert(short, long);
        self
    }

    /// Adds an alias, returning the canonical name it replaced, if any.
    pub fn insert(&mut self, short: impl Into<String>, long: impl Into<String>) -> Option<String> {
        self.entries.insert(short.into(), long.into())
    }

    /// Returns the canonical name registered for `short`.
    pub fn canonical(&self, short: &str) -> Option<&str> {
        self.entries.get(short).map(String::as_str)
    }

    /// Returns the canonical name for `name`, or `name` itself when no alias
    /// is registered.
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.canonical(name).unwrap_or(name)
    }

    /// Number of registered aliases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no aliases are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(short, long)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Loads a table from a YAML file whose top level is a `short: long` map.
    ///
    /// JSON objects are accepted too, since JSON is valid YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](AliasError::Io) if the file cannot be read, or
    /// [`Yaml`](AliasError::Yaml) if it is not a string-to-string map.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let table = serde_yaml::from_reader(reader)?;
        Ok(table)
    }

    /// Parses a table from YAML (or JSON) text.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_options_core::AliasTable;
    ///
    /// let aliases = AliasTable::from_yaml_str("t: trythisone\nv: verbose\n").unwrap();
    /// assert_eq!(aliases.len(), 2);
    /// assert_eq!(aliases.resolve("t"), "trythisone");
    /// ```
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Parses a single `short=long` definition.
    ///
    /// Leading dashes on either side are ignored, so `-t=--trythisone` and
    /// `t=trythisone` are equivalent.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDefinition`](AliasError::InvalidDefinition) when the
    /// definition has no `=`, either side is empty, or the canonical name
    /// contains another `=`.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_options_core::AliasTable;
    ///
    /// let (short, long) = AliasTable::parse_pair("-t=--trythisone").unwrap();
    /// assert_eq!((short.as_str(), long.as_str()), ("t", "trythisone"));
    /// assert!(AliasTable::parse_pair("t").is_err());
    /// assert!(AliasTable::parse_pair("t=a=b").is_err());
    /// ```
    pub fn parse_pair(definition: &str) -> Result<(String, String)> {
        let (short, long) = definition
            .split_once('=')
            .ok_or_else(|| AliasError::InvalidDefinition(definition.to_string()))?;
        let short = short.trim_start_matches('-');
        let long = long.trim_start_matches('-');
        if short.is_empty() || long.is_empty() || long.contains('=') {
            return Err(AliasError::InvalidDefinition(definition.to_string()));
        }
        Ok((short.to_string(), long.to_string()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AliasTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for AliasTable {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (short, long) in iter {
            self.insert(short, long);
        }
    }
}

/// Alias entries that can never take effect during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AliasValidationError {
    /// The abbreviated name is empty.
    #[error("alias name cannot be empty")]
    EmptyAlias,
    /// The canonical name is empty.
    #[error("canonical name for alias {0} cannot be empty")]
    EmptyCanonical(String),
    /// Leading dashes are stripped before lookup, so this name never matches.
    #[error("alias starts with a dash and can never match: {0}")]
    LeadingDash(String),
    /// Keys are split on `=` before lookup, so this name never matches.
    #[error("alias contains '=' and can never match: {0}")]
    ContainsEquals(String),
    /// The canonical name would be re-split on `=`, turning a flag into a
    /// value under a different key.
    #[error("canonical name for alias {0} contains '='")]
    CanonicalContainsEquals(String),
}

/// Reports entries of `table` that the parser can never use as written.
///
/// Findings are ordered by alias name. An empty result means every entry is
/// reachable.
///
/// # Examples
///
/// ```
/// use command_options_core::{AliasTable, AliasValidationError, validate_aliases};
///
/// let good = AliasTable::new().with_alias("t", "trythisone");
/// assert!(validate_aliases(&good).is_empty());
///
/// let bad = AliasTable::new().with_alias("-t", "trythisone");
/// assert_eq!(
///     validate_aliases(&bad),
///     vec![AliasValidationError::LeadingDash("-t".to_string())]
/// );
/// ```
pub fn validate_aliases(table: &AliasTable) -> Vec<AliasValidationError> {
    let mut entries: Vec<(&str, &str)> = table.iter().collect();
    entries.sort_unstable();

    let mut errors = Vec::new();
    for (short, long) in entries {
        if short.is_empty() {
            errors.push(AliasValidationError::EmptyAlias);
        } else if short.starts_with('-') {
            errors.push(AliasValidationError::LeadingDash(short.to_string()));
        } else if short.contains('=') {
            errors.push(AliasValidationError::ContainsEquals(short.to_string()));
        }

        if long.is_empty() {
            errors.push(AliasValidationError::EmptyCanonical(short.to_string()));
        } else if long.contains('=') {
            errors.push(AliasValidationError::CanonicalContainsEquals(
                short.to_string(),
            ));
        }
    }

    errors
}
