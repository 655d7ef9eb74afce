//! HTTP transport: one configured agent bound to a base URL.
//!
//! # Design
//! `Transport` owns a single `ureq::Agent` and the base URL all requests are
//! issued against. Construction never fails; failures surface only when a
//! request is executed. With the default agent configuration non-2xx
//! statuses are reported as `ApiError::HttpError`; callers that prefer to
//! receive such responses as data can supply an agent built with
//! `http_status_as_error(false)` and rely on the façade's `parse_*` status
//! check instead.
//!
//! Agents are cheap handles over a shared connection pool, so `Transport`
//! is `Clone` and a single instance can serve concurrent callers.

use ureq::Agent;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes `HttpRequest` values against a fixed base URL.
#[derive(Debug, Clone)]
pub struct Transport {
    agent: Agent,
    base_url: String,
}

impl Transport {
    /// Transport with the agent defaults: no retries, default timeouts,
    /// non-2xx statuses treated as errors.
    pub fn new(base_url: &str) -> Self {
        let agent = Agent::config_builder().build().new_agent();
        Self::with_agent(base_url, agent)
    }

    /// Transport over a caller-configured agent.
    pub fn with_agent(base_url: &str, agent: Agent) -> Self {
        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The underlying HTTP client handle, exposed for reuse.
    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    /// The base URL this transport is bound to (trailing slash stripped).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute one request and read the full response body.
    pub fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let HttpRequest {
            method,
            path,
            headers,
            body,
        } = request;

        let result = match (method, body) {
            (HttpMethod::Get, _) => {
                let mut builder = self.agent.get(&path);
                for (name, value) in &headers {
                    builder = builder.header(name, value);
                }
                builder.call()
            }
            (HttpMethod::Post, Some(body)) => {
                let mut builder = self.agent.post(&path);
                for (name, value) in &headers {
                    builder = builder.header(name, value);
                }
                builder.send(body.as_bytes())
            }
            (HttpMethod::Post, None) => {
                let mut builder = self.agent.post(&path);
                for (name, value) in &headers {
                    builder = builder.header(name, value);
                }
                builder.send_empty()
            }
        };

        match result {
            Ok(mut response) => {
                let status = response.status().as_u16();
                let body = response
                    .body_mut()
                    .read_to_string()
                    .map_err(|e| ApiError::Transport(e.to_string()))?;
                Ok(HttpResponse {
                    status,
                    headers: Vec::new(),
                    body,
                })
            }
            // Agent-level status validation drops the body before we see it.
            Err(ureq::Error::StatusCode(code)) => Err(ApiError::HttpError {
                status: code,
                body: String::new(),
            }),
            Err(e) => Err(ApiError::Transport(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let transport = Transport::new("http://localhost:5238/");
        assert_eq!(transport.base_url(), "http://localhost:5238");
    }

    #[test]
    fn with_agent_keeps_caller_configuration() {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        let transport = Transport::with_agent("http://localhost:5238", agent);
        assert_eq!(transport.base_url(), "http://localhost:5238");
    }

    #[test]
    fn connection_refused_surfaces_as_transport_error() {
        // Port 1 on localhost is assumed closed.
        let transport = Transport::new("http://127.0.0.1:1");
        let request = HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/api/v3/public/info", transport.base_url()),
            headers: Vec::new(),
            body: None,
        };
        let err = transport.execute(request).unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
