use async_trait::async_trait;

use super::Transport;
use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Async transport built on `reqwest`.
///
/// Uses reqwest's default timeouts and connection pool, but never follows
/// redirects. When the client config asks for it, certificate validation is
/// switched off for every request made through this transport.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport with default certificate validation.
    pub fn new() -> Result<Self, TransportError> {
        Self::build(false)
    }

    /// Build a transport honouring `bypass_invalid_certificate`.
    pub fn from_config(config: &ClientConfig) -> Result<Self, TransportError> {
        Self::build(config.bypass_invalid_certificate)
    }

    /// Wrap an already configured reqwest client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn build(accept_invalid_certs: bool) -> Result<Self, TransportError> {
        if accept_invalid_certs {
            log::warn!("certificate validation disabled for this transport");
        }
        // Redirects are not followed; a 3xx must reach the status check.
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()
            .map_err(|e| TransportError::new(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        };

        let mut builder = self.client.request(method, request.url);
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::new(format!("HTTP request failed: {e}")))?;

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
            .bytes()
            .await
            .map_err(|e| TransportError::new(format!("failed to read response body: {e}")))?;

        Ok(HttpResponse {
            status,
            headers,
            body: body.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_and_without_validation() {
        let strict = ClientConfig::parse("https://localhost:5001/api").unwrap();
        assert!(ReqwestTransport::from_config(&strict).is_ok());

        let relaxed = strict.with_bypass_invalid_certificate(true);
        assert!(ReqwestTransport::from_config(&relaxed).is_ok());
    }
}
