//! HTTP request/response types used between the façade and the transport.
//!
//! # Design
//! Requests and responses are described as plain data. `PanIndexClient`
//! `build_*` methods produce `HttpRequest` values and `parse_*` methods
//! consume `HttpResponse` values without touching the network, so request
//! construction stays deterministic and testable. `Transport::execute`
//! performs the round-trip between the two.
//!
//! All fields use owned types (`String`, `Vec`) so values can be moved
//! freely between the builder, the executor, and test code.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// HTTP method for a request. The PanIndex public API only uses these two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// An HTTP request described as plain data.
///
/// Built by `PanIndexClient::build_*` methods and executed by
/// `Transport::execute` (or by the caller's own executor).
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by `Transport::execute` and consumed by
/// `PanIndexClient::parse_*` methods.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Characters escaped when embedding a file path as a single URL path
/// segment: everything except ASCII alphanumerics and `- _ . ! ~ * ' ( )`,
/// matching JavaScript's `encodeURIComponent`. Slashes inside the path are
/// escaped too, so the whole argument stays one segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode `path` as a single URL path segment.
pub fn encode_path_segment(path: &str) -> String {
    utf8_percent_encode(path, PATH_SEGMENT).to_string()
}
