//! Request builder and error-returning executor.
//!
//! # Design
//! `ApiClient` owns its configuration, its transport and its access-token
//! provider. Every call is one independent exchange:
//! encode body (if any) -> build request -> transport -> check status ->
//! decode. Body encoding happens before the request is built, so an
//! unencodable body never reaches the network.

use std::sync::Arc;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{HttpError, TransportError};
use crate::http::{
    HttpMethod, HttpRequest, HttpResponse, ACCEPT, APPLICATION_JSON, AUTHORIZATION, CONTENT_TYPE,
};
use crate::query::Query;
use crate::status::HttpStatusCode;
use crate::token::{AccessTokenProvider, NoAccessToken};
use crate::transport::{ReqwestTransport, Transport};

/// Longest slice of a response body copied into a `ServerSide` message.
const MAX_BODY_SNIPPET: usize = 512;

/// JSON API client rooted at one base URL.
///
/// Failures are returned as `HttpError`. For the non-failing style see
/// `OutcomeClient`.
#[derive(Clone)]
pub struct ApiClient<T = ReqwestTransport> {
    config: ClientConfig,
    transport: T,
    token_provider: Arc<dyn AccessTokenProvider>,
}

impl ApiClient<ReqwestTransport> {
    /// Create a client with a `ReqwestTransport` configured from `config`.
    pub fn new(config: ClientConfig) -> Result<Self, TransportError> {
        let transport = ReqwestTransport::from_config(&config)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            token_provider: Arc::new(NoAccessToken),
        }
    }

    /// Replace the access-token provider consulted before each request.
    pub fn with_access_token_provider(
        mut self,
        provider: impl AccessTokenProvider + 'static,
    ) -> Self {
        self.token_provider = Arc::new(provider);
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Absolute URL for `path`, with `query` appended in order.
    pub fn url_for(&self, path: &str, query: Option<&Query>) -> Url {
        let mut url = join_url(&self.config.base_url, path);
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.iter() {
                pairs.append_pair(key, value);
            }
        }
        url
    }

    /// Build a request with the standard JSON headers and, when the provider
    /// yields a non-empty token, an `Authorization` header.
    pub async fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        query: Option<&Query>,
    ) -> HttpRequest {
        let mut headers = vec![
            (CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string()),
            (ACCEPT.to_string(), APPLICATION_JSON.to_string()),
        ];

        let token = self.token_provider.access_token().await;
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            let scheme = &self.config.access_token_bearer_name;
            debug!("attaching {scheme} access token");
            headers.push((AUTHORIZATION.to_string(), format!("{scheme} {token}")));
        }

        HttpRequest {
            method,
            url: self.url_for(path, query),
            headers,
            body: None,
        }
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, HttpError> {
        let request = self.build_request(HttpMethod::Get, path, None).await;
        let response = self.send(request).await?;
        decode(&response)
    }

    pub async fn get_with_query<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query,
    ) -> Result<R, HttpError> {
        let request = self.build_request(HttpMethod::Get, path, Some(query)).await;
        let response = self.send(request).await?;
        decode(&response)
    }

    /// POST `body` as JSON and ignore the response body.
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), HttpError> {
        let bytes = encode_body(body)?;
        self.post_bytes(path, bytes).await
    }

    /// POST `body` as JSON and decode the response body.
    pub async fn post_for<R: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, HttpError> {
        let bytes = encode_body(body)?;
        self.post_bytes_for(path, bytes).await
    }

    /// POST pre-encoded bytes as-is. The bytes are not validated.
    pub async fn post_bytes(&self, path: &str, body: Vec<u8>) -> Result<(), HttpError> {
        let mut request = self.build_request(HttpMethod::Post, path, None).await;
        request.body = Some(body);
        self.send(request).await?;
        Ok(())
    }

    pub async fn post_bytes_for<R: DeserializeOwned>(
        &self,
        path: &str,
        body: Vec<u8>,
    ) -> Result<R, HttpError> {
        let mut request = self.build_request(HttpMethod::Post, path, None).await;
        request.body = Some(body);
        let response = self.send(request).await?;
        decode(&response)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let method = request.method;
        let url = request.url.clone();
        debug!("{method} {url}");

        let response = self.transport.execute(request).await.map_err(|e| {
            warn!("{method} {url} failed: {e}");
            HttpError::from(e)
        })?;

        check_status(method, &url, &response)?;
        Ok(response)
    }
}

/// Append `path` to the base URL's path with exactly one separator between
/// them. The base path is kept and existing percent-escapes are not
/// re-encoded.
pub fn join_url(base: &Url, path: &str) -> Url {
    let mut url = base.clone();
    let base_path = base.path().trim_end_matches('/');
    let addon = path.trim_start_matches('/');
    if addon.is_empty() {
        url.set_path(base_path);
    } else {
        url.set_path(&format!("{base_path}/{addon}"));
    }
    url
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>, HttpError> {
    serde_json::to_vec(body).map_err(|e| {
        warn!("request body could not be encoded: {e}");
        HttpError::BodyEncoding(e.to_string())
    })
}

/// Anything other than 200 is a server-side failure.
fn check_status(method: HttpMethod, url: &Url, response: &HttpResponse) -> Result<(), HttpError> {
    let status = HttpStatusCode::from_code(response.status);
    if status.is_ok() {
        return Ok(());
    }
    let message = describe_response(method, url, response, status);
    warn!("{message}");
    Err(HttpError::ServerSide { status, message })
}

fn describe_response(
    method: HttpMethod,
    url: &Url,
    response: &HttpResponse,
    status: HttpStatusCode,
) -> String {
    let mut message = match status {
        HttpStatusCode::Invalid => format!(
            "{method} {url}: bad server response (status {})",
            response.status
        ),
        _ => format!("{method} {url} returned {status}"),
    };
    let body = response.body_text();
    let body = body.trim();
    if !body.is_empty() {
        let snippet = match body.char_indices().nth(MAX_BODY_SNIPPET) {
            Some((end, _)) => &body[..end],
            None => body,
        };
        message.push_str(": ");
        message.push_str(snippet);
    }
    message
}

fn decode<R: DeserializeOwned>(response: &HttpResponse) -> Result<R, HttpError> {
    serde_json::from_slice(&response.body).map_err(|e| {
        warn!("response body could not be decoded: {e}");
        HttpError::Decode(e.to_string())
    })
}
