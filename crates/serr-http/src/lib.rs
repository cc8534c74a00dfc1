//! # serr-http
//!
//! Turns HTTP responses into error context for [`serr_core`] makers.
//!
//! A [`reqwest::Response`] is first [`capture`]d into an immutable
//! [`CapturedResponse`] (draining the body once). The
//! [`HttpResponseParser`] then reads facets of that snapshot as
//! [`ErrorArg`](serr_core::ErrorArg) pairs, never failing: a body that could
//! not be read is simply left out.
//!
//! ```
//! use serr_core::args;
//! use serr_http::{CapturedResponse, HttpResponseParser};
//!
//! let resp = CapturedResponse::new(reqwest::StatusCode::NOT_FOUND, "no such user");
//! let pairs = HttpResponseParser::new().with_response_body().parse(&resp);
//!
//! let err = serr_core::new().make("lookup failed", args![pairs]);
//! assert_eq!(err.to_string(), "lookup failed - body: no such user - statusCode: 404");
//! ```

pub mod parser;
pub mod response;

pub use parser::{BODY_KEY, HttpResponseParser, STATUS_CODE_KEY, STATUS_KEY, SUMMARY_KEY, parse, summarize};
pub use response::{CapturedResponse, capture};
