//! Feed renderer
//!
//! Renders posts as plain-text cards for the terminal.

use crate::app::FeedController;
use crate::domain::entities::{select_media, Media, Post};

const TITLE_MAX: usize = 120;
const DESCRIPTION_MAX: usize = 200;

/// Render the whole feed, newest first
pub fn render_feed(feed: &FeedController) -> String {
    let mut buf = String::new();

    buf.push_str("# Links\n\n");

    if let Some(failure) = feed.last_failure() {
        buf.push_str(&format!(
            "[FAILED] Could not load {}: {}\n    Fix the link or run `post` again to retry.\n\n",
            failure.url, failure.message
        ));
    }

    if feed.in_flight() > 0 {
        buf.push_str(&format!("_Loading {} link(s)..._\n\n", feed.in_flight()));
    }

    if feed.is_empty() {
        buf.push_str("_No posts yet. Paste a link with `post <url>`._\n");
        return buf;
    }

    for (i, post) in feed.posts().iter().enumerate() {
        buf.push_str(&render_card(i + 1, post, feed.comment_draft(post.id)));
        buf.push('\n');
    }

    buf
}

/// Render one post. `number` is the 1-based position shown to the user.
pub fn render_card(number: usize, post: &Post, comment_draft: &str) -> String {
    let doc = &post.document;
    let mut buf = String::new();

    // Header
    buf.push_str(&format!("[{}] ({}) {}\n", number, doc.avatar_initial(), doc.site()));
    if !doc.author().is_empty() {
        buf.push_str(&format!("    {}\n", doc.author()));
    }
    if let Some(icon) = doc.icon_href() {
        buf.push_str(&format!("    icon: {}\n", icon));
    }

    // Media
    buf.push_str(&render_media(&select_media(doc)));

    // Content
    if !doc.title().is_empty() {
        buf.push_str(&format!("    **{}**\n", truncate(doc.title(), TITLE_MAX)));
    }
    if !doc.description().is_empty() {
        buf.push_str(&format!(
            "    {}\n",
            truncate(doc.description(), DESCRIPTION_MAX)
        ));
    }
    if !doc.url.is_empty() {
        buf.push_str(&format!("    {} <{}>\n", doc.hostname(), doc.url));
    }

    // Like + comment bar
    let heart = if post.liked { "♥" } else { "♡" };
    buf.push_str(&format!(
        "    {} {}   comments: {}\n",
        heart,
        post.like_count,
        post.comment_count()
    ));

    for comment in &post.comments {
        buf.push_str(&format!("      > {}\n", comment));
    }

    if !comment_draft.is_empty() {
        buf.push_str(&format!("      draft: {}\n", comment_draft));
    }

    buf
}

/// Render the media region; empty when there is nothing to show
pub fn render_media(media: &Media<'_>) -> String {
    match media {
        Media::Player { src } => {
            format!("    [video] {} (autoplay; encrypted-media; fullscreen)\n", src)
        }
        Media::ImageGrid { srcs } => {
            let mut buf = format!("    [images: {}]\n", srcs.len());
            for src in srcs {
                buf.push_str(&format!("      - {}\n", src));
            }
            buf
        }
        Media::Thumbnail { src } => format!("    [image] {}\n", src),
        Media::None => String::new(),
    }
}

/// Truncate a string with ellipsis, counting chars
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
