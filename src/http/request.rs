//! Request-head parsing using the [`httparse`] crate.
//!
//! The server dispatches on the request target alone: the target is split at
//! the first `?` into a path and an optional query string. The method token
//! is retained for logging but never drives dispatch.

use thiserror::Error;

/// Errors that can occur while parsing a request head.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The head is not yet complete — the caller should read more bytes.
    #[error("request head is incomplete — more data needed")]
    Incomplete,

    /// The bytes do not form a valid HTTP request head.
    #[error("HTTP parse error: {0}")]
    Parse(#[from] httparse::Error),

    /// The request line is missing a required token.
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },
}

/// A parsed request, reduced to what dispatch needs.
///
/// Created by [`Request::parse`] from a raw byte buffer.
///
/// # Examples
///
/// ```
/// use monoserve::http::Request;
///
/// let raw = b"GET /hello?x=1 HTTP/1.1\r\nHost: localhost\r\n\r\n";
/// let request = Request::parse(raw).unwrap();
///
/// assert_eq!(request.method(), "GET");
/// assert_eq!(request.path(), "/hello");
/// assert_eq!(request.query(), Some("x=1"));
/// ```
#[derive(Debug, Clone)]
pub struct Request {
    method: String,
    path: String,
    query: Option<String>,
}

impl Request {
    /// Maximum number of headers accepted per request head.
    const MAX_HEADERS: usize = 64;

    /// Parse a raw HTTP/1.x request head from a byte slice.
    ///
    /// # Errors
    ///
    /// - [`RequestError::Incomplete`] — more data is needed to complete the head.
    /// - [`RequestError::Parse`] — the data is malformed and cannot be parsed.
    /// - [`RequestError::MissingField`] — the request line lacks a method or path token.
    pub fn parse(buf: &[u8]) -> Result<Self, RequestError> {
        let mut headers = [httparse::EMPTY_HEADER; Self::MAX_HEADERS];
        let mut raw_req = httparse::Request::new(&mut headers);

        match raw_req.parse(buf)? {
            httparse::Status::Complete(_) => {}
            httparse::Status::Partial => return Err(RequestError::Incomplete),
        }

        let method = raw_req
            .method
            .ok_or(RequestError::MissingField { field: "method" })?
            .to_owned();

        let target = raw_req
            .path
            .ok_or(RequestError::MissingField { field: "path" })?;

        let (path, query) = match target.find('?') {
            Some(pos) => (
                target[..pos].to_owned(),
                Some(target[pos + 1..].to_owned()),
            ),
            None => (target.to_owned(), None),
        };

        Ok(Self {
            method,
            path,
            query,
        })
    }

    /// Returns the method token as received (e.g. `"GET"`).
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Returns the request path (without the query string).
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the raw query string (without the leading `?`), if any.
    ///
    /// A target of `/hello?` yields `Some("")`, distinct from `/hello`
    /// which yields `None`.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }
}
