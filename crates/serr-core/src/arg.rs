//! Argument types accepted by an [`ErrorMaker`](crate::ErrorMaker).
//!
//! A maker call takes an ordered list of [`Arg`] elements. Each element is one
//! of three shapes:
//!
//! 1. [`Arg::Plain`]: a scalar that is either a key or the value for the
//!    pending key, depending on its position.
//! 2. [`Arg::Pair`]: a ready-made [`ErrorArg`].
//! 3. [`Arg::Pairs`]: an ordered collection of [`ErrorArg`]s, typically
//!    produced by an adapter such as the HTTP response parser.

use std::fmt;

// ---------------------------------------------------------------------------
// ArgValue
// ---------------------------------------------------------------------------

/// An opaque context value attached to an error.
///
/// Only the value's text form matters for rendering, but integers, floats and
/// booleans keep their native type so log sinks can inspect them.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl ArgValue {
    /// Capture any [`Display`](fmt::Display) type as its text form.
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        ArgValue::Str(value.to_string())
    }

    /// Returns the inner string if this is a `Str` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Str(s) => f.write_str(s),
            ArgValue::Int(n) => write!(f, "{n}"),
            ArgValue::UInt(n) => write!(f, "{n}"),
            ArgValue::Float(n) => write!(f, "{n}"),
            ArgValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::Str(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::Str(value.to_string())
    }
}

impl From<&String> for ArgValue {
    fn from(value: &String) -> Self {
        ArgValue::Str(value.clone())
    }
}

impl From<char> for ArgValue {
    fn from(value: char) -> Self {
        ArgValue::Str(value.to_string())
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        ArgValue::Bool(value)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for ArgValue {
            fn from(value: $t) -> Self {
                ArgValue::Int(value as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for ArgValue {
            fn from(value: $t) -> Self {
                ArgValue::UInt(value as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

/// Kept as text: widening to `f64` would change the rendered digits.
impl From<f32> for ArgValue {
    fn from(value: f32) -> Self {
        ArgValue::Str(value.to_string())
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        ArgValue::Float(value)
    }
}

// ---------------------------------------------------------------------------
// ErrorArg
// ---------------------------------------------------------------------------

/// A single key/value pair of error context.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorArg {
    pub key: String,
    pub value: ArgValue,
}

impl ErrorArg {
    pub fn new(key: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for ErrorArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}

// ---------------------------------------------------------------------------
// Arg
// ---------------------------------------------------------------------------

/// One element of a maker's argument list.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// A key or value, depending on whether a key is pending.
    Plain(ArgValue),
    /// A complete pair, stored under its own key.
    Pair(ErrorArg),
    /// A collection of pairs, stored one by one in order.
    Pairs(Vec<ErrorArg>),
}

macro_rules! impl_plain {
    ($($t:ty),*) => {
        $(impl From<$t> for Arg {
            fn from(value: $t) -> Self {
                Arg::Plain(value.into())
            }
        })*
    };
}

impl_plain!(ArgValue, String, &str, &String, char, bool);
impl_plain!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<ErrorArg> for Arg {
    fn from(value: ErrorArg) -> Self {
        Arg::Pair(value)
    }
}

impl From<&ErrorArg> for Arg {
    fn from(value: &ErrorArg) -> Self {
        Arg::Pair(value.clone())
    }
}

impl From<Vec<ErrorArg>> for Arg {
    fn from(value: Vec<ErrorArg>) -> Self {
        Arg::Pairs(value)
    }
}

impl From<&[ErrorArg]> for Arg {
    fn from(value: &[ErrorArg]) -> Self {
        Arg::Pairs(value.to_vec())
    }
}

/// `None` contributes an empty collection.
impl From<Option<ErrorArg>> for Arg {
    fn from(value: Option<ErrorArg>) -> Self {
        Arg::Pairs(value.into_iter().collect())
    }
}
