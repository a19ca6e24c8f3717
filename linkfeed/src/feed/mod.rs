//! Feed module
//!
//! Terminal rendering of posts as cards.

pub mod renderer;

pub use renderer::{render_card, render_feed, render_media};
