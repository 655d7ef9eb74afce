//! Endpoint façade for the PanIndex public API.
//!
//! # Design
//! `PanIndexClient` holds one `Transport` and maps each remote endpoint to a
//! `build_*` method (deterministic request construction), a `parse_*` method
//! (status check plus deserialization), and a combined method that executes
//! through the transport. The build/parse split keeps request construction
//! free of I/O so it can be asserted exactly in tests; most callers only use
//! the combined methods.
//!
//! POST bodies are form-urlencoded with every defined field string-coerced;
//! `None` optionals are skipped entirely. The façade performs no input
//! validation — malformed parameters are forwarded and answered by the
//! server's envelope.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{encode_path_segment, HttpMethod, HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{
    Account, ApiResponse, Config, CreateShortLink, FileItem, FilterFiles, ListDirectory,
    ListResponse, ProgramInfo,
};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Typed client for the PanIndex public API.
///
/// Stateless between calls: no session, cursor, or pagination continuation
/// is tracked. Cloning shares the underlying agent's connection pool.
#[derive(Debug, Clone)]
pub struct PanIndexClient {
    transport: Transport,
}

impl PanIndexClient {
    /// Client over a default transport bound to `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            transport: Transport::new(base_url),
        }
    }

    /// Client over a caller-configured transport.
    pub fn with_transport(transport: Transport) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.transport.base_url(), path)
    }

    fn get_request(&self, path: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.url(path),
            headers: Vec::new(),
            body: None,
        }
    }

    fn form_request<T: Serialize + ?Sized>(
        &self,
        path: &str,
        input: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_urlencoded::to_string(input)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.url(path),
            headers: vec![("content-type".to_string(), FORM_CONTENT_TYPE.to_string())],
            body: Some(body),
        })
    }

    // --- program info ---

    pub fn build_program_info(&self) -> HttpRequest {
        self.get_request("/api/v3/public/info")
    }

    pub fn parse_program_info(
        &self,
        response: HttpResponse,
    ) -> Result<ApiResponse<ProgramInfo>, ApiError> {
        parse_envelope(response)
    }

    pub fn get_program_info(&self) -> Result<ApiResponse<ProgramInfo>, ApiError> {
        let response = self.transport.execute(self.build_program_info())?;
        self.parse_program_info(response)
    }

    // --- config ---

    pub fn build_config(&self) -> HttpRequest {
        self.get_request("/api/v3/public/config.json")
    }

    pub fn parse_config(&self, response: HttpResponse) -> Result<ApiResponse<Config>, ApiError> {
        parse_envelope(response)
    }

    pub fn get_config(&self) -> Result<ApiResponse<Config>, ApiError> {
        let response = self.transport.execute(self.build_config())?;
        self.parse_config(response)
    }

    // --- directory listing ---

    pub fn build_list_directory(&self, input: &ListDirectory) -> Result<HttpRequest, ApiError> {
        self.form_request("/api/v3/public/index", input)
    }

    pub fn parse_list_directory(
        &self,
        response: HttpResponse,
    ) -> Result<ApiResponse<ListResponse>, ApiError> {
        parse_envelope(response)
    }

    pub fn list_directory(
        &self,
        input: &ListDirectory,
    ) -> Result<ApiResponse<ListResponse>, ApiError> {
        let response = self.transport.execute(self.build_list_directory(input)?)?;
        self.parse_list_directory(response)
    }

    // --- raw file content ---

    pub fn build_file_content(&self, path: &str) -> HttpRequest {
        self.get_request(&format!(
            "/api/v3/public/raw/{}",
            encode_path_segment(path)
        ))
    }

    /// Raw-content payload is passed through opaque; only the status is
    /// checked.
    pub fn parse_file_content(&self, response: HttpResponse) -> Result<String, ApiError> {
        check_status(&response)?;
        Ok(response.body)
    }

    pub fn get_file_content(&self, path: &str) -> Result<String, ApiError> {
        let response = self.transport.execute(self.build_file_content(path))?;
        self.parse_file_content(response)
    }

    // --- account list ---

    pub fn build_account_list(&self) -> HttpRequest {
        self.get_request("/api/v3/public/account/list")
    }

    pub fn parse_account_list(
        &self,
        response: HttpResponse,
    ) -> Result<ApiResponse<Vec<Account>>, ApiError> {
        parse_envelope(response)
    }

    pub fn get_account_list(&self) -> Result<ApiResponse<Vec<Account>>, ApiError> {
        let response = self.transport.execute(self.build_account_list())?;
        self.parse_account_list(response)
    }

    // --- short links ---

    pub fn build_create_short_link(
        &self,
        input: &CreateShortLink,
    ) -> Result<HttpRequest, ApiError> {
        self.form_request("/api/v3/public/shortInfo", input)
    }

    /// The short-link payload shape is not documented by the server, so the
    /// envelope's `data` stays an untyped `serde_json::Value`.
    pub fn parse_create_short_link(
        &self,
        response: HttpResponse,
    ) -> Result<ApiResponse<serde_json::Value>, ApiError> {
        parse_envelope(response)
    }

    pub fn create_short_link(
        &self,
        input: &CreateShortLink,
    ) -> Result<ApiResponse<serde_json::Value>, ApiError> {
        let response = self
            .transport
            .execute(self.build_create_short_link(input)?)?;
        self.parse_create_short_link(response)
    }

    pub fn build_resolve_short_code(&self, short_code: &str) -> Result<HttpRequest, ApiError> {
        self.form_request("/api/v3/public/short", &[("short_code", short_code)])
    }

    /// Short-code resolution is passed through opaque, like raw content.
    pub fn parse_resolve_short_code(&self, response: HttpResponse) -> Result<String, ApiError> {
        check_status(&response)?;
        Ok(response.body)
    }

    pub fn resolve_short_code(&self, short_code: &str) -> Result<String, ApiError> {
        let response = self
            .transport
            .execute(self.build_resolve_short_code(short_code)?)?;
        self.parse_resolve_short_code(response)
    }

    // --- search ---

    pub fn build_search(&self, key: &str) -> Result<HttpRequest, ApiError> {
        self.form_request("/api/v3/public/search", &[("key", key)])
    }

    pub fn parse_search(
        &self,
        response: HttpResponse,
    ) -> Result<ApiResponse<ListResponse>, ApiError> {
        parse_envelope(response)
    }

    pub fn search(&self, key: &str) -> Result<ApiResponse<ListResponse>, ApiError> {
        let response = self.transport.execute(self.build_search(key)?)?;
        self.parse_search(response)
    }

    // --- file filtering ---

    pub fn build_filter_files(&self, input: &FilterFiles) -> Result<HttpRequest, ApiError> {
        self.form_request("/api/v3/public/files", input)
    }

    pub fn parse_filter_files(
        &self,
        response: HttpResponse,
    ) -> Result<ApiResponse<Vec<FileItem>>, ApiError> {
        parse_envelope(response)
    }

    pub fn filter_files(
        &self,
        input: &FilterFiles,
    ) -> Result<ApiResponse<Vec<FileItem>>, ApiError> {
        let response = self.transport.execute(self.build_filter_files(input)?)?;
        self.parse_filter_files(response)
    }
}

/// Expect HTTP 200; everything else becomes `HttpError` with the raw body.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.status == 200 {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

fn parse_envelope<T: DeserializeOwned>(
    response: HttpResponse,
) -> Result<ApiResponse<T>, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}
