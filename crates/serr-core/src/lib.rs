//! # serr-core
//!
//! Structured errors: a message plus a set of named context values, rendered
//! into one deterministic line and optionally logged when the error is made.
//!
//! - **Arguments** (`arg`) — `ArgValue`, `ErrorArg` pairs and the `Arg` input element
//! - **Normalizer** (`normalize`) — resolves an argument list into an `ArgMap`
//! - **Structured error** (`error`) — `StructuredError` and its rendering
//! - **Maker** (`maker`) — `ErrorMaker` and its builder
//! - **Log sinks** (`sink`) — `LogSink` trait, tracing and in-memory sinks
//! - **Configuration** (`config`) — JSON config deserialization
//! - **Logging** (`logging`) — tracing-based subscriber setup
//!
//! ```
//! use serr_core::{ErrorArg, ErrorMaker, args};
//!
//! let maker = ErrorMaker::builder().delimiter("|").build();
//! let err = maker.make("lookup failed", args!["user", 42, ErrorArg::new("table", "users")]);
//! assert_eq!(err.to_string(), "lookup failed | table: users | user: 42");
//! ```

pub mod arg;
pub mod config;
pub mod error;
pub mod logging;
pub mod maker;
pub mod normalize;
pub mod sink;

pub use arg::{Arg, ArgValue, ErrorArg};
pub use error::{ArgMap, ConfigError, StructuredError};
pub use maker::{DEFAULT_DELIMITER, ErrorMaker, ErrorMakerBuilder};
pub use normalize::normalize;
pub use sink::{LogRecord, LogSink, MemorySink, TracingSink};

/// Create a maker with the default delimiter and no log sink.
pub fn new() -> ErrorMaker {
    ErrorMaker::builder().build()
}

/// Build a `Vec<Arg>` from a heterogeneous list of plain values, pairs and
/// pair collections.
///
/// ```
/// use serr_core::{ErrorArg, args};
///
/// let list = args!["age", 123, ErrorArg::new("key1", "value1")];
/// assert_eq!(list.len(), 3);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Arg>::new()
    };
    ($($item:expr),+ $(,)?) => {
        ::std::vec![$($crate::Arg::from($item)),+]
    };
}
