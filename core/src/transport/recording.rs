//! In-memory transport that records requests and replays a canned reply.

use std::sync::Mutex;

use async_trait::async_trait;

use super::Transport;
use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};

pub(crate) struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
    reply: Result<HttpResponse, TransportError>,
}

impl RecordingTransport {
    pub(crate) fn replying(status: u16, body: &str) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            reply: Ok(HttpResponse {
                status,
                headers: vec![("content-type".to_string(), "application/json".to_string())],
                body: body.as_bytes().to_vec(),
            }),
        }
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            reply: Err(TransportError::new(message)),
        }
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.reply.clone()
    }
}
