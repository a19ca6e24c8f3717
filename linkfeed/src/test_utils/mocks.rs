//! Mock implementations of port traits
//!
//! In-memory provider that replays configured responses and records calls.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::domain::entities::EmbedDocument;
use crate::domain::ports::EmbedProvider;
use crate::error::EmbedError;

// ============================================================================
// Mock Embed Provider
// ============================================================================

#[derive(Debug, Clone)]
enum MockResponse {
    Document(EmbedDocument),
    Failure { status: u16, message: String },
    Panic,
}

#[derive(Default)]
pub struct MockEmbedProvider {
    responses: Arc<RwLock<HashMap<String, MockResponse>>>,
    delays: Arc<RwLock<HashMap<String, Duration>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockEmbedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `doc` for its own `url`
    pub fn with_document(self, doc: EmbedDocument) -> Self {
        let url = doc.url.clone();
        self.with_document_for(&url, doc)
    }

    /// Serve `doc` when `url` is requested
    pub fn with_document_for(self, url: &str, doc: EmbedDocument) -> Self {
        self.responses
            .write()
            .unwrap()
            .insert(url.to_string(), MockResponse::Document(doc));
        self
    }

    /// Fail with an API error when `url` is requested
    pub fn with_failure(self, url: &str, status: u16, message: &str) -> Self {
        self.responses.write().unwrap().insert(
            url.to_string(),
            MockResponse::Failure {
                status,
                message: message.to_string(),
            },
        );
        self
    }

    /// Panic inside `fetch` when `url` is requested
    pub fn with_panic(self, url: &str) -> Self {
        self.responses
            .write()
            .unwrap()
            .insert(url.to_string(), MockResponse::Panic);
        self
    }

    /// Hold the response for `url` back by `delay`
    pub fn with_delay(self, url: &str, delay: Duration) -> Self {
        self.delays.write().unwrap().insert(url.to_string(), delay);
        self
    }

    /// URLs fetched so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl EmbedProvider for MockEmbedProvider {
    async fn fetch(&self, url: &str) -> Result<EmbedDocument, EmbedError> {
        self.calls.write().unwrap().push(url.to_string());

        let delay = self.delays.read().unwrap().get(url).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let response = self.responses.read().unwrap().get(url).cloned();
        match response {
            Some(MockResponse::Document(doc)) => Ok(doc),
            Some(MockResponse::Failure { status, message }) => {
                Err(EmbedError::Api { status, message })
            }
            Some(MockResponse::Panic) => panic!("mock provider panicked on {}", url),
            None => Err(EmbedError::Api {
                status: 404,
                message: format!("no mock response for {}", url),
            }),
        }
    }
}
