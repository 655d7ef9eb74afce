//! Response records and POST parameter records for the PanIndex public API.
//!
//! # Design
//! Response types are constructed only by deserializing a response body and
//! are immutable afterwards; ownership sits entirely with the caller.
//! Parameter records use `skip_serializing_if` so that unset optional fields
//! are absent from the form body — the server distinguishes "absent" from
//! "empty string". Wire keys that are camelCase on the server side carry a
//! `#[serde(rename)]`.

use serde::{Deserialize, Serialize};

/// Envelope wrapping every typed PanIndex response.
///
/// `status` is the application-level status, not the HTTP status: the server
/// can answer HTTP 200 with a failing envelope. This library passes the
/// field through uninterpreted; callers must inspect it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub data: T,
    pub msg: String,
    pub status: i32,
}

/// Static server metadata from `/api/v3/public/info`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgramInfo {
    pub author: String,
    pub commit_sha: String,
    pub name: String,
    pub version: String,
}

/// Site-wide configuration from `/api/v3/public/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub account_choose: String,
    pub audio: String,
    pub css: String,
    pub doc: String,
    pub favicon_url: String,
    pub footer: String,
    pub head: String,
    pub image: String,
    pub js: String,
    pub path_prefix: String,
    pub readme: String,
    pub s_column: String,
    pub s_order: String,
    pub short_action: String,
    pub site_name: String,
    pub theme: String,
    pub video: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// One filesystem entry in a listing, search result, or filter result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileItem {
    pub file_name: String,
    pub file_size: u64,
    pub size_fmt: String,
    pub file_type: String,
    pub is_folder: bool,
    pub last_op_time: String,
    pub path: String,
    pub thumbnail: String,
    pub view_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

/// One page of a directory listing (or search result page).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListResponse {
    pub is_folder: bool,
    pub last_file: String,
    pub next_file: String,
    pub no_referrer: bool,
    pub page_no: u32,
    pub page_size: u32,
    pub pages: u32,
    pub total_count: u64,
    pub content: Vec<FileItem>,
}

/// One configured storage backend from `/api/v3/public/account/list`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub mode: String,
    pub name: String,
    pub path: String,
}

/// Parameters for `POST /api/v3/public/index`. Only `path` is required;
/// unset optionals are omitted from the form body entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListDirectory {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_no: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Parameters for `POST /api/v3/public/shortInfo`. All fields required;
/// `is_file` is sent under the wire key `isFile` as `"true"`/`"false"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShortLink {
    pub prefix: String,
    pub path: String,
    #[serde(rename = "isFile")]
    pub is_file: bool,
}

/// Parameters for `POST /api/v3/public/files`. Sort fields are optional and
/// omitted when unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterFiles {
    pub path: String,
    #[serde(rename = "viewType")]
    pub view_type: String,
    #[serde(rename = "sortColumn", skip_serializing_if = "Option::is_none")]
    pub sort_column: Option<String>,
    #[serde(rename = "sortOrder", skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
}
