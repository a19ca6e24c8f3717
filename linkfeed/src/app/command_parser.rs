//! Command parser for the terminal front end
//!
//! Parses text commands like "post https://...", "like 2", "comment 1 nice".
//! Post numbers are 1-based positions in the rendered feed.

use crate::error::ParseError;

/// Commands a user can type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the URL draft
    Url { text: String },

    /// Submit a URL, or the URL draft when none is given
    Post { url: Option<String> },

    /// Toggle like on a post
    Like { index: usize },

    /// Comment directly on a post
    Comment { index: usize, text: String },

    /// Replace the comment draft for a post
    Draft { index: usize, text: String },

    /// Submit the comment draft for a post
    Send { index: usize },

    /// Re-render the feed
    Show,

    Help,

    Quit,
}

/// Parse a command from a line of input
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ParseError::UnknownCommand("empty input".to_string()));
    }

    let (command, rest) = match input.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (input, ""),
    };

    match command.to_lowercase().as_str() {
        "url" => Ok(Command::Url {
            text: rest.to_string(),
        }),

        "post" | "p" => Ok(Command::Post {
            url: (!rest.is_empty()).then(|| rest.to_string()),
        }),

        "like" | "l" => {
            let (index, _) = parse_index("like", rest)?;
            Ok(Command::Like { index })
        }

        "comment" | "c" => {
            let (index, text) = parse_index("comment", rest)?;
            if text.is_empty() {
                return Err(ParseError::MissingArgument(
                    "comment requires: comment <N> <text>".to_string(),
                ));
            }
            Ok(Command::Comment {
                index,
                text: text.to_string(),
            })
        }

        "draft" => {
            let (index, text) = parse_index("draft", rest)?;
            Ok(Command::Draft {
                index,
                text: text.to_string(),
            })
        }

        "send" => {
            let (index, _) = parse_index("send", rest)?;
            Ok(Command::Send { index })
        }

        "show" | "feed" | "ls" => Ok(Command::Show),

        "help" | "?" => Ok(Command::Help),

        "quit" | "exit" | "q" => Ok(Command::Quit),

        _ => Err(ParseError::UnknownCommand(format!(
            "'{}'. Type 'help' for available commands",
            command
        ))),
    }
}

/// Split "<N> rest" into a 0-based index and the remaining text
fn parse_index<'a>(command: &str, rest: &'a str) -> Result<(usize, &'a str), ParseError> {
    let (raw, text) = match rest.split_once(char::is_whitespace) {
        Some((raw, text)) => (raw, text.trim()),
        None => (rest, ""),
    };

    if raw.is_empty() {
        return Err(ParseError::MissingArgument(command.to_string()));
    }

    let index: usize = raw
        .parse()
        .map_err(|_| ParseError::InvalidArgument(format!("'{}' is not a valid number", raw)))?;
    if index == 0 {
        return Err(ParseError::InvalidArgument(
            "post number must be 1 or greater".to_string(),
        ));
    }

    Ok((index - 1, text))
}

/// Help text for the terminal front end
pub fn help_text() -> String {
    r#"# Commands

- `post <url>` - Fetch a preview and add it to the top of the feed
- `url <text>` - Set the URL draft; `post` alone submits it
- `like N` - Like or unlike post N
- `comment N <text>` - Comment on post N
- `draft N <text>` - Set the comment draft for post N
- `send N` - Submit the comment draft for post N
- `show` - Show the feed
- `help` - Show this help
- `quit` - Exit
"#
    .to_string()
}
