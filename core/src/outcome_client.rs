//! Executor that reports every failure as `Outcome::Failure`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::outcome::Outcome;
use crate::query::Query;
use crate::token::AccessTokenProvider;
use crate::transport::{ReqwestTransport, Transport};

/// Same calls as `ApiClient`, but never fails: transport errors, non-200
/// statuses, body-encoding and decode failures all collapse into
/// `Outcome::Failure` carrying the error's description.
#[derive(Clone)]
pub struct OutcomeClient<T = ReqwestTransport> {
    inner: ApiClient<T>,
}

impl OutcomeClient<ReqwestTransport> {
    pub fn new(config: ClientConfig) -> Result<Self, TransportError> {
        Ok(Self {
            inner: ApiClient::new(config)?,
        })
    }
}

impl<T: Transport> OutcomeClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            inner: ApiClient::with_transport(config, transport),
        }
    }

    pub fn with_access_token_provider(
        self,
        provider: impl AccessTokenProvider + 'static,
    ) -> Self {
        Self {
            inner: self.inner.with_access_token_provider(provider),
        }
    }

    /// The error-returning client underneath.
    pub fn api(&self) -> &ApiClient<T> {
        &self.inner
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Outcome<R> {
        self.inner.get(path).await.into()
    }

    pub async fn get_with_query<R: DeserializeOwned>(&self, path: &str, query: &Query) -> Outcome<R> {
        self.inner.get_with_query(path, query).await.into()
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Outcome {
        self.inner.post(path, body).await.into()
    }

    pub async fn post_for<R: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Outcome<R> {
        self.inner.post_for(path, body).await.into()
    }

    pub async fn post_bytes(&self, path: &str, body: Vec<u8>) -> Outcome {
        self.inner.post_bytes(path, body).await.into()
    }

    pub async fn post_bytes_for<R: DeserializeOwned>(&self, path: &str, body: Vec<u8>) -> Outcome<R> {
        self.inner.post_bytes_for(path, body).await.into()
    }
}

impl<T> From<ApiClient<T>> for OutcomeClient<T> {
    fn from(inner: ApiClient<T>) -> Self {
        Self { inner }
    }
}
