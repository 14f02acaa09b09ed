//! Client configuration.
//!
//! # Design
//! `ClientConfig` is plain data with serde defaults so it can be embedded in
//! an application's own config document. Once handed to a client it is only
//! reachable by shared reference.

use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_BEARER_NAME: &str = "Bearer";

fn default_bearer_name() -> String {
    DEFAULT_BEARER_NAME.to_string()
}

/// Settings fixed for the lifetime of a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Root URL all request paths are appended to, e.g. `https://localhost:5001/api`.
    pub base_url: Url,

    /// Accept any server certificate. Only meant for local or self-signed
    /// development endpoints.
    #[serde(default)]
    pub bypass_invalid_certificate: bool,

    /// Scheme word placed before the token in the `Authorization` header.
    #[serde(default = "default_bearer_name")]
    pub access_token_bearer_name: String,
}

impl ClientConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            bypass_invalid_certificate: false,
            access_token_bearer_name: default_bearer_name(),
        }
    }

    pub fn parse(base_url: &str) -> Result<Self, url::ParseError> {
        Ok(Self::new(Url::parse(base_url)?))
    }

    pub fn with_bypass_invalid_certificate(mut self, bypass: bool) -> Self {
        self.bypass_invalid_certificate = bypass;
        self
    }

    pub fn with_bearer_name(mut self, name: impl Into<String>) -> Self {
        self.access_token_bearer_name = name.into();
        self
    }
}
