//! Error types for the PanIndex API client.
//!
//! # Design
//! Transport failures and non-2xx statuses get separate variants because
//! callers frequently distinguish "the server was unreachable" from "the
//! server answered with an unexpected status." Application-level failures
//! (HTTP 200 with a failing `ApiResponse.status`) are deliberately not an
//! error: the envelope is returned as-is and interpreting its status field
//! is the caller's job.

use std::fmt;

/// Errors returned by `Transport::execute` and `PanIndexClient` methods.
#[derive(Debug)]
pub enum ApiError {
    /// The request never completed: DNS failure, connection refused,
    /// timeout, or an IO error while reading the response.
    Transport(String),

    /// The server returned a non-2xx status. When the agent uses default
    /// status validation the body is unavailable and left empty.
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request parameters could not be form-encoded.
    SerializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport error: {msg}"),
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
