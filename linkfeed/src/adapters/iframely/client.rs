//! Iframely API client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use urlencoding::encode;

use crate::config::Config;
use crate::domain::entities::EmbedDocument;
use crate::domain::ports::EmbedProvider;
use crate::error::EmbedError;

/// Implementation of the embed provider against an iframely-compatible API
pub struct IframelyClient {
    http: Client,
    api_url: String,
    api_key: String,
}

/// Error envelope the provider returns instead of a document
#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: String,
    #[serde(default)]
    status: Option<u16>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ProviderResponse {
    Error(ProviderErrorBody),
    Document(EmbedDocument),
}

impl IframelyClient {
    pub fn new(config: &Config) -> Result<Self, EmbedError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    #[cfg(test)]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn request_url(&self, target: &str) -> String {
        let sep = if self.api_url.contains('?') { '&' } else { '?' };
        format!(
            "{}{}url={}&api_key={}",
            self.api_url,
            sep,
            encode(target),
            encode(&self.api_key)
        )
    }

    #[tracing::instrument(skip_all, fields(url = %target))]
    async fn fetch_document(&self, target: &str) -> Result<EmbedDocument, EmbedError> {
        let response = self.http.get(self.request_url(target)).send().await?;
        let doc = self.handle_response(response).await?;
        tracing::debug!(
            players = doc.links.player.len(),
            images = doc.links.image.len(),
            thumbnails = doc.links.thumbnail.len(),
            "Fetched embed document"
        );
        Ok(doc)
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<EmbedDocument, EmbedError> {
        let status = response.status();

        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(EmbedError::Unauthorized);
        }
        if status.as_u16() == 429 {
            return Err(EmbedError::RateLimited);
        }

        let body = response.text().await?;

        if !status.is_success() {
            // Prefer the provider's own message when the body is an error envelope
            let message = serde_json::from_str::<ProviderErrorBody>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(EmbedError::Api {
                status: status.as_u16(),
                message,
            });
        }

        match serde_json::from_str::<ProviderResponse>(&body) {
            Ok(ProviderResponse::Document(doc)) => Ok(doc),
            Ok(ProviderResponse::Error(e)) => Err(EmbedError::Provider {
                status: e.status,
                message: e.error,
            }),
            Err(e) => Err(EmbedError::Deserialization(e.to_string())),
        }
    }
}

#[async_trait]
impl EmbedProvider for IframelyClient {
    async fn fetch(&self, url: &str) -> Result<EmbedDocument, EmbedError> {
        self.fetch_document(url).await
    }
}
