//! Error-returning client keyed by a closed set of endpoints.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::endpoint::Endpoint;
use crate::error::{HttpError, TransportError};
use crate::query::Query;
use crate::token::AccessTokenProvider;
use crate::transport::{ReqwestTransport, Transport};

/// `ApiClient` whose calls take an endpoint identifier of type `E` instead
/// of a raw path. Each call resolves `E::path` and delegates.
pub struct EndpointClient<E, T = ReqwestTransport> {
    inner: ApiClient<T>,
    _endpoints: PhantomData<fn(E)>,
}

impl<E: Endpoint> EndpointClient<E, ReqwestTransport> {
    pub fn new(config: ClientConfig) -> Result<Self, TransportError> {
        Ok(ApiClient::new(config)?.into())
    }
}

impl<E: Endpoint, T: Transport> EndpointClient<E, T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        ApiClient::with_transport(config, transport).into()
    }

    pub fn with_access_token_provider(
        self,
        provider: impl AccessTokenProvider + 'static,
    ) -> Self {
        self.inner.with_access_token_provider(provider).into()
    }

    pub fn api(&self) -> &ApiClient<T> {
        &self.inner
    }

    pub async fn get<R: DeserializeOwned>(&self, endpoint: E) -> Result<R, HttpError> {
        self.inner.get(endpoint.path()).await
    }

    pub async fn get_with_query<R: DeserializeOwned>(
        &self,
        endpoint: E,
        query: &Query,
    ) -> Result<R, HttpError> {
        self.inner.get_with_query(endpoint.path(), query).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, endpoint: E, body: &B) -> Result<(), HttpError> {
        self.inner.post(endpoint.path(), body).await
    }

    pub async fn post_for<R: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: E,
        body: &B,
    ) -> Result<R, HttpError> {
        self.inner.post_for(endpoint.path(), body).await
    }

    pub async fn post_bytes(&self, endpoint: E, body: Vec<u8>) -> Result<(), HttpError> {
        self.inner.post_bytes(endpoint.path(), body).await
    }

    pub async fn post_bytes_for<R: DeserializeOwned>(
        &self,
        endpoint: E,
        body: Vec<u8>,
    ) -> Result<R, HttpError> {
        self.inner.post_bytes_for(endpoint.path(), body).await
    }
}

impl<E, T> From<ApiClient<T>> for EndpointClient<E, T> {
    fn from(inner: ApiClient<T>) -> Self {
        Self {
            inner,
            _endpoints: PhantomData,
        }
    }
}

impl<E, T: Clone> Clone for EndpointClient<E, T> {
    fn clone(&self) -> Self {
        self.inner.clone().into()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde::Deserialize;

    use super::*;
    use crate::status::HttpStatusCode;
    use crate::transport::recording::RecordingTransport;

    #[derive(Debug, Clone, Copy)]
    enum Api {
        Point,
        Notes,
    }

    impl Endpoint for Api {
        fn path(&self) -> &str {
            match self {
                Api::Point => "point",
                Api::Notes => "v1/notes",
            }
        }
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Point {
        x: i64,
    }

    fn client(transport: RecordingTransport) -> (EndpointClient<Api, Arc<RecordingTransport>>, Arc<RecordingTransport>) {
        let transport = Arc::new(transport);
        let config = ClientConfig::parse("http://localhost:3000/api").unwrap();
        (EndpointClient::with_transport(config, transport.clone()), transport)
    }

    #[tokio::test]
    async fn endpoint_resolves_to_its_path() {
        let (client, transport) = client(RecordingTransport::replying(200, r#"{"x":5}"#));
        let point: Point = client.get(Api::Point).await.unwrap();
        assert_eq!(point, Point { x: 5 });

        client.post(Api::Notes, &serde_json::json!({"title": "t"})).await.unwrap();

        let urls: Vec<String> = transport
            .requests()
            .iter()
            .map(|r| r.url.to_string())
            .collect();
        assert_eq!(
            urls,
            vec![
                "http://localhost:3000/api/point".to_string(),
                "http://localhost:3000/api/v1/notes".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn query_is_forwarded() {
        let (client, transport) = client(RecordingTransport::replying(200, r#"{"x":5}"#));
        let _: Point = client
            .get_with_query(Api::Point, &Query::new().with("precise", true))
            .await
            .unwrap();
        assert_eq!(
            transport.requests()[0].url.as_str(),
            "http://localhost:3000/api/point?precise=true"
        );
    }

    #[tokio::test]
    async fn server_errors_keep_status() {
        let (client, _) = client(RecordingTransport::replying(401, "login required"));
        let err = client.get::<Point>(Api::Point).await.unwrap_err();
        assert_eq!(err.status_code(), HttpStatusCode::Unauthorized);
    }

    #[tokio::test]
    async fn raw_bytes_use_endpoint_path() {
        let (client, transport) = client(RecordingTransport::replying(200, r#"{"x":9}"#));
        client.post_bytes(Api::Notes, b"[]".to_vec()).await.unwrap();
        let point: Point = client.post_bytes_for(Api::Notes, b"[]".to_vec()).await.unwrap();
        assert_eq!(point.x, 9);
        assert!(transport
            .requests()
            .iter()
            .all(|r| r.url.path() == "/api/v1/notes"));
    }
}
