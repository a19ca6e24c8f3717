//! Embed provider port trait
//!
//! Defines the interface for fetching link previews.

use async_trait::async_trait;

use crate::domain::entities::EmbedDocument;
use crate::error::EmbedError;

/// Embed provider trait - abstracts the link-preview API
#[async_trait]
pub trait EmbedProvider: Send + Sync {
    /// Fetch the embed document for a URL
    async fn fetch(&self, url: &str) -> Result<EmbedDocument, EmbedError>;
}

