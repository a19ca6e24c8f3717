//! Domain entities
//!
//! Core data models for the link feed.

pub mod embed;
pub mod media;
pub mod post;

pub use embed::{EmbedDocument, EmbedLink, EmbedLinks, EmbedMeta, LinkMedia};
pub use media::{select_media, Media};
pub use post::{LikeState, Post, PostId};
