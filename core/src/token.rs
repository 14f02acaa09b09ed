//! Access-token suppliers used to fill the `Authorization` header.

use async_trait::async_trait;

/// Supplies the current access token before each request.
///
/// Implementations may await, e.g. to refresh a cached token. Returning
/// `None` or an empty string sends the request without `Authorization`.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn access_token(&self) -> Option<String>;
}

/// Never supplies a token. The default for every client.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAccessToken;

#[async_trait]
impl AccessTokenProvider for NoAccessToken {
    async fn access_token(&self) -> Option<String> {
        None
    }
}

/// Always supplies the same token.
#[derive(Debug, Clone)]
pub struct StaticAccessToken(String);

impl StaticAccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

#[async_trait]
impl AccessTokenProvider for StaticAccessToken {
    async fn access_token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}
