//! Immutable response snapshots.

use reqwest::StatusCode;
use tracing::debug;

/// Status and body of an HTTP response, read once.
///
/// `body` is `None` when the body stream failed; parsers then omit it.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedResponse {
    status: StatusCode,
    body: Option<Vec<u8>>,
}

impl CapturedResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: Some(body.into()),
        }
    }

    /// A snapshot whose body could not be read.
    pub fn without_body(status: StatusCode) -> Self {
        Self { status, body: None }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Body as text, with invalid UTF-8 replaced.
    pub fn body_text(&self) -> Option<String> {
        self.body.as_deref().map(|b| String::from_utf8_lossy(b).into_owned())
    }
}

/// Drain `resp` into a [`CapturedResponse`].
///
/// A body read failure is logged at debug level and recorded as a missing
/// body; this function never fails.
pub async fn capture(resp: reqwest::Response) -> CapturedResponse {
    let status = resp.status();
    match resp.bytes().await {
        Ok(bytes) => CapturedResponse::new(status, bytes.to_vec()),
        Err(e) => {
            debug!("[serr-http] response body unavailable (status={status}): {e}");
            CapturedResponse::without_body(status)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn capture_reads_status_and_body() {
        let resp = http::Response::builder()
            .status(500)
            .body("That didn't go well\n")
            .unwrap();
        let captured = capture(reqwest::Response::from(resp)).await;

        assert_eq!(captured.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(captured.body_text().as_deref(), Some("That didn't go well\n"));
    }

    #[tokio::test]
    async fn capture_survives_truncated_body() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        use crate::parser::{HttpResponseParser, STATUS_CODE_KEY};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Promise 100 body bytes, send 5, then hang up.
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            socket
                .write_all(b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 100\r\nConnection: close\r\n\r\nshort")
                .await
                .unwrap();
            socket.shutdown().await.unwrap();
        });

        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        let resp = client.get(format!("http://{addr}/")).send().await.unwrap();
        let captured = capture(resp).await;
        server.await.unwrap();

        assert_eq!(captured.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(captured.body().is_none());

        let pairs = HttpResponseParser::new().with_response_body().parse(&captured);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].key, STATUS_CODE_KEY);
        assert_eq!(pairs[0].value.to_string(), "500");
    }

    #[test]
    fn lossy_body_text() {
        let captured = CapturedResponse::new(StatusCode::OK, vec![b'o', b'k', 0xff]);
        assert_eq!(captured.body_text().as_deref(), Some("ok\u{fffd}"));
    }

    #[test]
    fn missing_body() {
        let captured = CapturedResponse::without_body(StatusCode::BAD_GATEWAY);
        assert!(captured.body().is_none());
        assert!(captured.body_text().is_none());
    }
}
