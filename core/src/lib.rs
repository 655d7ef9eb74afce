//! Typed client for the PanIndex file-index public HTTP API.
//!
//! # Overview
//! One façade method per remote endpoint: program info, config, directory
//! listing, raw file content, account list, short-link creation and
//! resolution, search, and file filtering. Each call builds a plain GET or
//! form-encoded POST and returns the server's `ApiResponse<T>` envelope (or
//! the raw body for the two opaque endpoints).
//!
//! # Design
//! - `Transport` owns one configured `ureq::Agent` bound to a base URL and
//!   executes plain-data `HttpRequest` values.
//! - `PanIndexClient` holds the transport and splits every operation into
//!   `build_*` / `parse_*` plus a combined method, keeping request
//!   construction deterministic and free of I/O.
//! - No caching, retries, pagination driving, or state between calls; the
//!   application-level `ApiResponse.status` is passed through uninterpreted.

pub mod client;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::PanIndexClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::Transport;
pub use types::{
    Account, ApiResponse, Config, CreateShortLink, FileItem, FilterFiles, ListDirectory,
    ListResponse, ProgramInfo,
};
