//! In-memory transport for exercising the services without a backend.

use async_trait::async_trait;
use kiosk_data::{FetchError, Response, Transport};
use std::collections::VecDeque;
use std::sync::Mutex;

/// A recorded request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Recorded {
    Get { url: String },
    Post { url: String, body: Vec<u8> },
}

impl Recorded {
    pub(crate) fn url(&self) -> &str {
        match self {
            Recorded::Get { url } | Recorded::Post { url, .. } => url,
        }
    }
}

/// Plays back queued responses and records every request.
#[derive(Debug, Default)]
pub(crate) struct FakeTransport {
    responses: Mutex<VecDeque<Result<Response, FetchError>>>,
    requests: Mutex<Vec<Recorded>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_response(&self, response: Response) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    pub(crate) fn push_error(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(FetchError::Request(message.to_string())));
    }

    pub(crate) fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn urls(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| r.url().to_string())
            .collect()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn next_response(&self) -> Result<Response, FetchError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Request("no queued response".to_string())))
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get(&self, url: &str) -> Result<Response, FetchError> {
        self.requests.lock().unwrap().push(Recorded::Get {
            url: url.to_string(),
        });
        self.next_response()
    }

    async fn post_json(&self, url: &str, body: &[u8]) -> Result<Response, FetchError> {
        self.requests.lock().unwrap().push(Recorded::Post {
            url: url.to_string(),
            body: body.to_vec(),
        });
        self.next_response()
    }
}
