//! Parsed configuration types.
//!
//! A [`Configuration`] is the immutable result of parsing one token list:
//! positional arguments in their original order, plus a mapping from option
//! name to [`OptionValue`]. Both types serialize with [`serde`] so callers can
//! hand the result to JSON or YAML tooling directly.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// Value attached to an option key.
///
/// Options written without `=` are flags; everything else carries the raw
/// string that followed the first `=`. Values are never coerced.
///
/// Serializes as the boolean `true` for [`Flag`](OptionValue::Flag) and as a
/// plain string for [`Value`](OptionValue::Value).
///
/// # Examples
///
/// ```
/// use command_options_core::OptionValue;
///
/// let flag = OptionValue::Flag;
/// assert!(flag.is_flag());
/// assert_eq!(flag.as_str(), None);
/// assert_eq!(flag.to_string(), "true");
///
/// let value = OptionValue::from("a=b");
/// assert_eq!(value.as_str(), Some("a=b"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OptionValue {
    /// The option was present without a value.
    Flag,
    /// The option was assigned a value with `=`.
    Value(String),
}

impl OptionValue {
    /// Returns `true` for presence-only options.
    pub fn is_flag(&self) -> bool {
        matches!(self, Self::Flag)
    }

    /// Returns the assigned string, or `None` for flags.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Flag => None,
            Self::Value(value) => Some(value),
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag => f.write_str("true"),
            Self::Value(value) => f.write_str(value),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

impl Serialize for OptionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Flag => serializer.serialize_bool(true),
            Self::Value(value) => serializer.serialize_str(value),
        }
    }
}

impl<'de> Deserialize<'de> for OptionValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OptionValueVisitor;

        impl Visitor<'_> for OptionValueVisitor {
            type Value = OptionValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("`true` or a string")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<OptionValue, E> {
                if v {
                    Ok(OptionValue::Flag)
                } else {
                    Err(E::invalid_value(de::Unexpected::Bool(v), &self))
                }
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<OptionValue, E> {
                Ok(OptionValue::Value(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<OptionValue, E> {
                Ok(OptionValue::Value(v))
            }
        }

        deserializer.deserialize_any(OptionValueVisitor)
    }
}

/// Result of parsing a token list.
///
/// `arguments` holds every token that does not start with `-`, in input
/// order. `options` holds one entry per distinct normalized option key; when
/// a key repeats, the last occurrence wins.
///
/// # Examples
///
/// ```
/// use command_options_core::{OptionValue, parse};
///
/// let config = parse(["build", "--release", "--target=x86_64"]);
/// assert_eq!(config.arguments(), ["build"]);
/// assert!(config.is_flag_set("release"));
/// assert_eq!(config.value("target"), Some("x86_64"));
/// assert_eq!(config.get("missing"), None::<&OptionValue>);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    arguments: Vec<String>,
    options: BTreeMap<String, OptionValue>,
}

impl Configuration {
    pub(crate) fn from_parts(
        arguments: Vec<String>,
        options: BTreeMap<String, OptionValue>,
    ) -> Self {
        Self { arguments, options }
    }

    /// Positional arguments in input order.
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Option keys mapped to their final values.
    pub fn options(&self) -> &BTreeMap<String, OptionValue> {
        &self.options
    }

    /// Looks up an option by its normalized key.
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(key)
    }

    /// Returns the assigned string for `key`, or `None` if the key is absent
    /// or was given as a flag.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(OptionValue::as_str)
    }

    /// Returns `true` if `key` was given as a flag.
    pub fn is_flag_set(&self, key: &str) -> bool {
        self.get(key).is_some_and(OptionValue::is_flag)
    }

    /// Returns `true` if `key` was given in any form.
    pub fn contains(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    /// Returns `true` when no arguments and no options were parsed.
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty() && self.options.is_empty()
    }

    /// Consumes the configuration, returning its arguments and options.
    pub fn into_parts(self) -> (Vec<String>, BTreeMap<String, OptionValue>) {
        (self.arguments, self.options)
    }
}
