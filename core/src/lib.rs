//! Stateless parsing of raw command-line tokens.
//!
//! This crate turns an argv-style token list (program name excluded) into a
//! [`Configuration`]:
//!
//! - [`Configuration`]: positional arguments in input order plus a mapping
//!   from option name to [`OptionValue`].
//! - [`AliasTable`]: caller-supplied abbreviations (`t` → `trythisone`)
//!   applied to single-dash tokens.
//!
//! Tokens starting with `-` are options. `--name` and `--name=value` are used
//! as written; `-n` and `-n=value` have their dashes stripped and their key
//! resolved through the alias table. Options without `=` are flags. Parsing
//! never fails and values are never coerced. Validating the result against an
//! expected schema is up to the caller.
//!
//! Alias tables can be loaded from YAML/JSON ([`AliasTable::load`]) and
//! checked for entries that can never match ([`validate_aliases`]).
//!
//! # Example
//!
//! ```
//! use command_options_core::*;
//!
//! let aliases = AliasTable::new().with_alias("t", "trythisone");
//! let config = parse_with_aliases(
//!     ["run", "-t=fast", "--level=a=b", "--dry-run", "script.sh"],
//!     &aliases,
//! );
//!
//! assert_eq!(config.arguments(), ["run", "script.sh"]);
//! assert_eq!(config.value("trythisone"), Some("fast"));
//! assert_eq!(config.value("level"), Some("a=b"));
//! assert!(config.is_flag_set("dry-run"));
//! ```

mod alias;
pub mod error;
mod parser;
mod types;

pub use alias::{AliasTable, AliasValidationError, validate_aliases};
pub use error::{AliasError, Result};
pub use parser::{
    is_option, normalize_option, parse, parse_env, parse_with_aliases, resolve_alias,
    split_option,
};
pub use types::{Configuration, OptionValue};
