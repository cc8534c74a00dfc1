//! The structured error value produced by an [`ErrorMaker`](crate::ErrorMaker).
//!
//! Rendering is a pure function of the message, the arguments and the
//! delimiter. Arguments live in an unordered map; keys are sorted on every
//! render so the output never depends on hash order:
//!
//! ```text
//! <message> <delim> <key1>: <value1> <delim> <key2>: <value2>
//! ```
//!
//! Configuration problems are reported separately through [`ConfigError`].

use std::collections::HashMap;
use std::fmt;

use crate::arg::{ArgValue, ErrorArg};

/// Unordered key → value map holding an error's context.
pub type ArgMap = HashMap<String, ArgValue, ahash::RandomState>;

/// An error carrying a message plus named context values.
///
/// Instances are immutable once made; all accessors are read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredError {
    message: String,
    args: ArgMap,
    delimiter: String,
}

impl StructuredError {
    pub(crate) fn new(message: String, args: ArgMap, delimiter: String) -> Self {
        Self {
            message,
            args,
            delimiter,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&ArgValue> {
        self.args.get(key)
    }

    pub fn args(&self) -> &ArgMap {
        &self.args
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Arguments in ascending key order.
    pub fn sorted_args(&self) -> Vec<(&str, &ArgValue)> {
        let mut sorted: Vec<(&str, &ArgValue)> =
            self.args.iter().map(|(k, v)| (k.as_str(), v)).collect();
        sorted.sort_unstable_by(|a, b| a.0.cmp(b.0));
        sorted
    }

    /// Owned copies of the arguments, in ascending key order.
    pub fn to_args(&self) -> Vec<ErrorArg> {
        self.sorted_args()
            .into_iter()
            .map(|(k, v)| ErrorArg {
                key: k.to_string(),
                value: v.clone(),
            })
            .collect()
    }
}

impl fmt::Display for StructuredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        for (key, value) in self.sorted_args() {
            write!(f, " {} {key}: {value}", self.delimiter)?;
        }
        Ok(())
    }
}

impl std::error::Error for StructuredError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors raised while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A log level name that `tracing` does not recognize.
    #[error("invalid log level: {0:?}")]
    InvalidLevel(String),

    /// A logging filter that `EnvFilter` cannot parse.
    #[error("invalid log filter {0:?}: {1}")]
    InvalidFilter(String, String),

    /// The delimiter was configured as an empty string.
    #[error("delimiter must not be empty")]
    EmptyDelimiter,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make(message: &str, pairs: &[(&str, ArgValue)], delimiter: &str) -> StructuredError {
        let args = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        StructuredError::new(message.to_string(), args, delimiter.to_string())
    }

    #[test]
    fn renders_message_only() {
        let err = make("just a message", &[], "-");
        assert_eq!(err.to_string(), "just a message");
        assert!(err.is_empty());
    }

    #[test]
    fn renders_sorted_keys() {
        let err = make(
            "boom",
            &[
                ("zeta", ArgValue::from(1)),
                ("alpha", ArgValue::from("a")),
                ("Mid", ArgValue::from(false)),
            ],
            "-",
        );
        // Byte order: uppercase sorts before lowercase.
        assert_eq!(err.to_string(), "boom - Mid: false - alpha: a - zeta: 1");
    }

    #[test]
    fn render_is_repeatable() {
        let pairs: Vec<(String, ArgValue)> = (0..64).map(|i| (format!("k{i}"), ArgValue::from(i))).collect();
        let refs: Vec<(&str, ArgValue)> = pairs.iter().map(|(k, v)| (k.as_str(), v.clone())).collect();
        let err = make("many", &refs, ",");
        assert_eq!(err.to_string(), err.to_string());
        assert!(!err.to_string().ends_with(','));
    }

    #[test]
    fn implements_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(make("m", &[("k", ArgValue::from(1))], "-"));
        assert_eq!(err.to_string(), "m - k: 1");
        assert!(err.source().is_none());
    }

    #[test]
    fn to_args_is_sorted() {
        let err = make("m", &[("b", ArgValue::from(2)), ("a", ArgValue::from(1))], "-");
        let keys: Vec<String> = err.to_args().into_iter().map(|a| a.key).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(err.get("a"), Some(&ArgValue::Int(1)));
        assert_eq!(err.get("c"), None);
    }
}
