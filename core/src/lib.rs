//! JSON-over-HTTP API client.
//!
//! # Overview
//! Standardizes calls to a JSON web API rooted at one base URL: builds the
//! URL (base path + relative path + ordered query), sets the JSON headers,
//! injects an optional `Authorization` token, sends the request through a
//! pluggable `Transport`, treats exactly 200 as success and decodes the body
//! with serde.
//!
//! # Design
//! - `ApiClient` returns `Result<_, HttpError>`; `OutcomeClient` wraps it and
//!   returns `Outcome` values instead; `EndpointClient` wraps it and takes
//!   endpoint identifiers instead of raw paths.
//! - Requests and responses are plain data (`HttpRequest` / `HttpResponse`)
//!   so the transport is the only place that touches the network.
//! - Configuration is fixed at construction. Calls share no mutable state
//!   and can run concurrently.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod endpoint_client;
pub mod error;
pub mod http;
pub mod outcome;
pub mod outcome_client;
pub mod query;
pub mod status;
pub mod token;
pub mod transport;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use endpoint::Endpoint;
pub use endpoint_client::EndpointClient;
pub use error::{HttpError, HttpErrorKind, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use outcome::Outcome;
pub use outcome_client::OutcomeClient;
pub use query::Query;
pub use status::HttpStatusCode;
pub use token::{AccessTokenProvider, NoAccessToken, StaticAccessToken};
pub use transport::{ReqwestTransport, Transport};
#[cfg(feature = "ureq-transport")]
pub use transport::UreqTransport;
