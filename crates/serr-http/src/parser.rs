//! HTTP response → error argument adapter.
//!
//! Two output shapes are offered:
//!
//! | Method        | Output                | Keys                                   |
//! |---------------|-----------------------|----------------------------------------|
//! | [`parse`]     | `Vec<ErrorArg>`       | `statusCode`, `status`, `body`         |
//! | [`summarize`] | one `ErrorArg`        | `http response`                        |
//!
//! `statusCode` is always present. `status` and `body` are opt-in through
//! [`HttpResponseParser::with_status`] and
//! [`HttpResponseParser::with_response_body`].

use serr_core::ErrorArg;

use crate::response::CapturedResponse;

pub const STATUS_CODE_KEY: &str = "statusCode";
pub const STATUS_KEY: &str = "status";
pub const BODY_KEY: &str = "body";
pub const SUMMARY_KEY: &str = "http response";

/// Selects which facets of a response become error arguments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HttpResponseParser {
    pub include_status: bool,
    pub include_response_body: bool,
}

impl HttpResponseParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Include the status line (e.g. `500 Internal Server Error`).
    pub fn with_status(mut self) -> Self {
        self.include_status = true;
        self
    }

    /// Include the response body as text.
    pub fn with_response_body(mut self) -> Self {
        self.include_response_body = true;
        self
    }

    /// Emit one pair per enabled facet.
    pub fn parse(&self, resp: &CapturedResponse) -> Vec<ErrorArg> {
        let mut pairs = vec![ErrorArg::new(STATUS_CODE_KEY, resp.status().as_u16())];

        if self.include_status {
            pairs.push(ErrorArg::new(STATUS_KEY, resp.status().to_string()));
        }

        if self.include_response_body {
            if let Some(body) = resp.body_text() {
                pairs.push(ErrorArg::new(BODY_KEY, body));
            }
        }

        pairs
    }

    /// Fold all enabled facets into a single `http response` pair, e.g.
    /// `Status Code: 500, Status: 500 Internal Server Error, Body: oops`.
    pub fn summarize(&self, resp: &CapturedResponse) -> ErrorArg {
        let mut summary = format!("Status Code: {}", resp.status().as_u16());

        if self.include_status {
            summary.push_str(", Status: ");
            summary.push_str(&resp.status().to_string());
        }

        if self.include_response_body {
            if let Some(body) = resp.body_text() {
                summary.push_str(", Body: ");
                summary.push_str(&body);
            }
        }

        ErrorArg::new(SUMMARY_KEY, summary)
    }
}

/// Shorthand for [`HttpResponseParser::parse`].
pub fn parse(resp: &CapturedResponse, parser: &HttpResponseParser) -> Vec<ErrorArg> {
    parser.parse(resp)
}

/// Shorthand for [`HttpResponseParser::summarize`].
pub fn summarize(resp: &CapturedResponse, parser: &HttpResponseParser) -> ErrorArg {
    parser.summarize(resp)
}
