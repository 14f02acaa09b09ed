//! Error types for the API client.
//!
//! # Design
//! `HttpError` is the closed set of ways a call can fail. Each variant maps
//! to one stage of a call: the body could not be encoded, the transport
//! produced no response, the server answered with something other than 200,
//! or the 200 body did not decode into the requested type. Only `ServerSide`
//! carries a meaningful status code.

use thiserror::Error;

use crate::status::HttpStatusCode;

/// Errors returned by `ApiClient` and `EndpointClient` calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    /// No valid HTTP response was obtained (connection refused, timeout,
    /// TLS failure, ...).
    #[error("transport failure: {message}")]
    Transport { message: String },

    /// A response was obtained but its status was not 200.
    #[error("server responded with {status}: {message}")]
    ServerSide {
        status: HttpStatusCode,
        message: String,
    },

    /// The request body could not be serialized to JSON. No request was sent.
    #[error("request body could not be encoded as JSON: {0}")]
    BodyEncoding(String),

    /// The response body could not be decoded into the expected type.
    #[error("response body could not be decoded: {0}")]
    Decode(String),
}

/// Stable numeric identifiers for each `HttpError` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HttpErrorKind {
    Transport = 5,
    ServerSide = 10,
    BodyEncoding = 15,
    Decode = 20,
}

impl HttpError {
    pub fn kind(&self) -> HttpErrorKind {
        match self {
            HttpError::Transport { .. } => HttpErrorKind::Transport,
            HttpError::ServerSide { .. } => HttpErrorKind::ServerSide,
            HttpError::BodyEncoding(_) => HttpErrorKind::BodyEncoding,
            HttpError::Decode(_) => HttpErrorKind::Decode,
        }
    }

    /// The server's status for `ServerSide`, `Invalid` for everything else.
    pub fn status_code(&self) -> HttpStatusCode {
        match self {
            HttpError::ServerSide { status, .. } => *status,
            _ => HttpStatusCode::Invalid,
        }
    }
}

/// Failure reported by a `Transport` when no response could be obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<TransportError> for HttpError {
    fn from(err: TransportError) -> Self {
        HttpError::Transport {
            message: err.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_keep_their_codes() {
        assert_eq!(HttpErrorKind::Transport as u8, 5);
        assert_eq!(HttpErrorKind::ServerSide as u8, 10);
        assert_eq!(HttpErrorKind::BodyEncoding as u8, 15);
        assert_eq!(HttpErrorKind::Decode as u8, 20);
    }

    #[test]
    fn status_code_only_for_server_errors() {
        let server = HttpError::ServerSide {
            status: HttpStatusCode::NotFound,
            message: "GET /x".to_string(),
        };
        assert_eq!(server.status_code(), HttpStatusCode::NotFound);
        assert_eq!(server.kind(), HttpErrorKind::ServerSide);

        let decode = HttpError::Decode("missing field `x`".to_string());
        assert_eq!(decode.status_code(), HttpStatusCode::Invalid);
    }

    #[test]
    fn transport_error_converts() {
        let err: HttpError = TransportError::new("connection refused").into();
        assert_eq!(err.kind(), HttpErrorKind::Transport);
        assert_eq!(err.to_string(), "transport failure: connection refused");
    }
}
