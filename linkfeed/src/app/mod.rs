//! Application layer
//!
//! The feed controller, the command language that drives it, and the
//! interactive session loop.

pub mod command_parser;
pub mod feed_controller;
pub mod session;

pub use command_parser::{help_text, parse_command, Command};
pub use feed_controller::{FeedController, SubmitFailure, SubmitTicket};
pub use session::Session;
