//! Iframely adapter
//!
//! HTTP implementation of the embed provider port.

pub mod client;

pub use client::IframelyClient;
