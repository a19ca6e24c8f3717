//! Post domain entity
//!
//! A feed entry: one embed document plus the local like/comment state.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::EmbedDocument;

/// Unique identifier for a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(pub Uuid);

impl PostId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Like state after a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeState {
    pub liked: bool,
    pub like_count: u32,
}

/// A post in the feed
#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub document: EmbedDocument,
    pub like_count: u32,
    pub liked: bool,
    pub comments: Vec<String>,
    pub created_at: DateTime<Utc>,
    /// Submission sequence, used to keep the feed newest-submitted-first
    pub(crate) seq: u64,
}

impl Post {
    pub(crate) fn new(document: EmbedDocument, seq: u64) -> Self {
        Self {
            id: PostId::new(),
            document,
            like_count: 0,
            liked: false,
            comments: Vec::new(),
            created_at: Utc::now(),
            seq,
        }
    }

    /// Flip the like flag, keeping the count in step
    pub(crate) fn toggle_like(&mut self) -> LikeState {
        if self.liked {
            self.liked = false;
            self.like_count = self.like_count.saturating_sub(1);
        } else {
            self.liked = true;
            self.like_count += 1;
        }
        self.like_state()
    }

    pub fn like_state(&self) -> LikeState {
        LikeState {
            liked: self.liked,
            like_count: self.like_count,
        }
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_post_starts_empty() {
        let post = Post::new(EmbedDocument::default(), 1);
        assert_eq!(post.like_count, 0);
        assert!(!post.liked);
        assert!(post.comments.is_empty());
    }

    #[test]
    fn toggle_like_pair_is_identity() {
        let mut post = Post::new(EmbedDocument::default(), 1);
        let before = post.like_state();

        let after_first = post.toggle_like();
        assert_eq!(
            after_first,
            LikeState {
                liked: true,
                like_count: 1
            }
        );

        let after_second = post.toggle_like();
        assert_eq!(after_second, before);
    }

    #[test]
    fn unlike_never_underflows() {
        let mut post = Post::new(EmbedDocument::default(), 1);
        post.liked = true;
        post.like_count = 0;
        let state = post.toggle_like();
        assert_eq!(state.like_count, 0);
        assert!(!state.liked);
    }

    #[test]
    fn post_ids_are_unique() {
        assert_ne!(PostId::new(), PostId::new());
    }
}
