//! Error makers.
//!
//! An [`ErrorMaker`] holds a delimiter and an optional [`LogSink`]. Each call
//! to [`make`](ErrorMaker::make) normalizes a fresh argument map and, when a
//! sink is configured, logs the new error before returning it. Logging cannot
//! be skipped per call: every error from a maker with a sink is logged, even
//! if the caller later discards it.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use serr_core::{ErrorMaker, MemorySink, args};
//!
//! let sink = Arc::new(MemorySink::new());
//! let maker = ErrorMaker::builder()
//!     .delimiter(";;")
//!     .log_sink(sink.clone())
//!     .build();
//!
//! let err = maker.make("disk full", args!["free", 0]);
//! assert_eq!(err.to_string(), "disk full ;; free: 0");
//! assert_eq!(sink.len(), 1);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::arg::{Arg, ErrorArg};
use crate::config::MakerConfig;
use crate::error::StructuredError;
use crate::normalize::normalize;
use crate::sink::{LogSink, TracingSink};

/// Delimiter used when none is configured.
pub const DEFAULT_DELIMITER: &str = "-";

/// Builds [`StructuredError`]s sharing one delimiter and log sink.
///
/// Cloning is cheap; clones share the sink. Concurrent calls to `make` share
/// no mutable state of their own.
#[derive(Clone)]
pub struct ErrorMaker {
    delimiter: Arc<str>,
    sink: Option<Arc<dyn LogSink>>,
}

impl ErrorMaker {
    pub fn builder() -> ErrorMakerBuilder {
        ErrorMakerBuilder::new()
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn has_sink(&self) -> bool {
        self.sink.is_some()
    }

    /// Construct one error from a message and an argument list.
    pub fn make<I>(&self, message: impl Into<String>, args: I) -> StructuredError
    where
        I: IntoIterator<Item = Arg>,
    {
        let err = StructuredError::new(message.into(), normalize(args), self.delimiter.to_string());

        if let Some(sink) = &self.sink {
            let pairs: Vec<ErrorArg> = err
                .args()
                .iter()
                .map(|(k, v)| ErrorArg {
                    key: k.clone(),
                    value: v.clone(),
                })
                .collect();
            sink.emit(err.message(), &pairs);
        }

        err
    }

    /// The maker as a plain function value.
    pub fn as_fn(&self) -> impl Fn(&str, Vec<Arg>) -> StructuredError + Send + Sync + '_ {
        move |message: &str, args: Vec<Arg>| self.make(message, args)
    }
}

impl Default for ErrorMaker {
    fn default() -> Self {
        ErrorMakerBuilder::new().build()
    }
}

impl fmt::Debug for ErrorMaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorMaker")
            .field("delimiter", &self.delimiter)
            .field("sink", &self.sink.is_some())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Configures an [`ErrorMaker`]. Later calls override earlier ones.
#[derive(Clone)]
pub struct ErrorMakerBuilder {
    delimiter: String,
    sink: Option<Arc<dyn LogSink>>,
}

impl ErrorMakerBuilder {
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            sink: None,
        }
    }

    /// Apply a loaded [`MakerConfig`]. Absent fields leave the current
    /// settings untouched.
    pub fn from_config(mut self, config: &MakerConfig) -> Self {
        if let Some(delimiter) = &config.delimiter {
            self.delimiter = delimiter.clone();
        }
        match config.log_errors {
            Some(true) => self.sink = Some(Arc::new(TracingSink::with_level(config.level()))),
            Some(false) => self.sink = None,
            None => {}
        }
        self
    }

    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Log every error made by the resulting maker to `sink`.
    pub fn log_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Shorthand for logging through a default [`TracingSink`].
    pub fn tracing(self) -> Self {
        self.log_sink(Arc::new(TracingSink::new()))
    }

    pub fn build(self) -> ErrorMaker {
        ErrorMaker {
            delimiter: Arc::from(self.delimiter),
            sink: self.sink,
        }
    }
}

impl Default for ErrorMakerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
