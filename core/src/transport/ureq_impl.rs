use async_trait::async_trait;
use ureq::tls::TlsConfig;

use super::Transport;
use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Blocking transport built on `ureq`.
///
/// Each exchange runs on tokio's blocking pool, so `execute` must be awaited
/// inside a tokio runtime. Redirects are never followed.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        Self::build(false)
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::build(config.bypass_invalid_certificate)
    }

    fn build(disable_verification: bool) -> Self {
        if disable_verification {
            log::warn!("certificate validation disabled for this transport");
        }
        // Status handling belongs to the client, so 3xx/4xx/5xx come back as data.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .max_redirects(0)
            .tls_config(
                TlsConfig::builder()
                    .disable_verification(disable_verification)
                    .build(),
            )
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (key, value) in headers {
        builder = builder.header(key.as_str(), value.as_str());
    }
    builder
}

fn exchange(agent: &ureq::Agent, request: HttpRequest) -> Result<HttpResponse, TransportError> {
    let url = request.url.as_str();
    let result = match (request.method, request.body.as_deref()) {
        (HttpMethod::Get, _) => with_headers(agent.get(url), &request.headers).call(),
        (HttpMethod::Post, Some(body)) => with_headers(agent.post(url), &request.headers).send(body),
        (HttpMethod::Post, None) => with_headers(agent.post(url), &request.headers).send_empty(),
    };
    let mut response =
        result.map_err(|e| TransportError::new(format!("HTTP request failed: {e}")))?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(key, value)| {
            (
                key.as_str().to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    let body = response
        .body_mut()
        .read_to_vec()
        .map_err(|e| TransportError::new(format!("failed to read response body: {e}")))?;

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}

#[async_trait]
impl Transport for UreqTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || exchange(&agent, request))
            .await
            .map_err(|e| TransportError::new(format!("blocking HTTP task failed: {e}")))?
    }
}
