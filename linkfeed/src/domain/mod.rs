//! Domain layer
//!
//! Contains pure data and policy with no I/O.
//! - `entities`: Embed documents, posts and the media-selection policy
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
