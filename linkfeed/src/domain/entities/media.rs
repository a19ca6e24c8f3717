//! Media selection
//!
//! Picks the single media region a post renders. Priority is
//! player > image grid > thumbnail > nothing, computed fresh on every render.

use super::EmbedDocument;

/// The media region chosen for a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Media<'a> {
    /// Interactive frame for the first player entry
    Player { src: &'a str },
    /// Grid of every image entry
    ImageGrid { srcs: Vec<&'a str> },
    /// Single static image from the first thumbnail
    Thumbnail { src: &'a str },
    None,
}

impl Media<'_> {
    pub fn is_none(&self) -> bool {
        matches!(self, Media::None)
    }
}

/// Select the media region to render for a document
pub fn select_media(doc: &EmbedDocument) -> Media<'_> {
    if let Some(src) = doc.first_player_href() {
        return Media::Player { src };
    }

    if !doc.links.image.is_empty() {
        return Media::ImageGrid {
            srcs: doc.image_hrefs(),
        };
    }

    match doc.first_thumbnail_href() {
        Some(src) => Media::Thumbnail { src },
        None => Media::None,
    }
}
