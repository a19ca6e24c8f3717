//! linkfeed
//!
//! Paste a link, get a card. Fetches link previews from an iframely-compatible
//! embed API and keeps an in-memory, newest-first feed of posts that can be
//! liked and commented on. Uses ports & adapters so the controller can be
//! driven by any `EmbedProvider`.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod feed;

#[cfg(test)]
mod test_utils;
