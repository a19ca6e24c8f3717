//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod iframely;

pub use iframely::IframelyClient;
