//! Test fixtures
//!
//! Factory functions for embed documents shaped like real provider output.

use crate::domain::entities::{EmbedDocument, EmbedLink, EmbedLinks, EmbedMeta};

pub fn link(href: &str) -> EmbedLink {
    EmbedLink {
        href: Some(href.to_string()),
        ..Default::default()
    }
}

/// A document with metadata and a thumbnail
pub fn test_document(url: &str) -> EmbedDocument {
    EmbedDocument {
        url: url.to_string(),
        meta: EmbedMeta {
            site: Some("Example".to_string()),
            author: Some("Jane Writer".to_string()),
            title: Some(format!("Title for {}", url)),
            description: Some("A short description".to_string()),
            canonical: Some(url.to_string()),
        },
        links: EmbedLinks {
            thumbnail: vec![link(&format!("{}/thumb.jpg", url))],
            icon: vec![link(&format!("{}/favicon.ico", url))],
            ..Default::default()
        },
        ..Default::default()
    }
}

/// A video page: player plus images plus thumbnail
pub fn video_document(url: &str) -> EmbedDocument {
    let mut doc = test_document(url);
    doc.meta.site = Some("YouTube".to_string());
    doc.links.player = vec![link("https://www.youtube.com/embed/abc123")];
    doc.links.image = vec![link("https://i.ytimg.com/vi/abc123/maxres.jpg")];
    doc
}

/// A gallery page with several images and no player
pub fn gallery_document(url: &str) -> EmbedDocument {
    let mut doc = test_document(url);
    doc.links.image = vec![
        link("https://img.example/1.jpg"),
        link("https://img.example/2.jpg"),
        link("https://img.example/3.jpg"),
    ];
    doc
}

/// No meta, no links, no url
pub fn bare_document() -> EmbedDocument {
    EmbedDocument::default()
}
