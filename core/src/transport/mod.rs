//! Pluggable transports that carry an `HttpRequest` over the network.
//!
//! # Design
//! The client never talks to an HTTP library directly. It hands a fully
//! built `HttpRequest` to a `Transport` and gets back either a response
//! (with any status) or a `TransportError` when no response was obtained.
//! Status classification stays in the client, so every transport must
//! return non-2xx responses as data rather than errors.

#[cfg(test)]
pub(crate) mod recording;
mod reqwest_impl;
#[cfg(feature = "ureq-transport")]
mod ureq_impl;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};

pub use reqwest_impl::ReqwestTransport;
#[cfg(feature = "ureq-transport")]
pub use ureq_impl::UreqTransport;

/// Executes one request/response exchange.
///
/// Implementations own connection reuse, TLS and timeouts. They are shared
/// across concurrent calls, hence `Send + Sync`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request).await
    }
}
