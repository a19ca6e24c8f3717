//! Feed controller
//!
//! Owns the feed and the draft input state. Every mutation goes through a
//! `&mut self` method, so each operation sees and leaves a whole, consistent
//! snapshot of the feed.
//!
//! Submitting a URL is split in two so fetches can overlap:
//! `begin_submit` hands out a sequence-numbered ticket, the caller fetches,
//! and `complete_submit` inserts the post. Posts are kept ordered by ticket
//! sequence, newest submission first, whatever order responses arrive in.

use std::collections::HashMap;

use crate::domain::entities::{EmbedDocument, LikeState, Post, PostId};
use crate::domain::ports::EmbedProvider;
use crate::error::{EmbedError, FeedError};

/// Handle for a submitted URL whose preview is still being fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    seq: u64,
    url: String,
}

impl SubmitTicket {
    /// The trimmed URL to fetch
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// The most recent failed fetch, kept so the user can see it and resubmit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitFailure {
    pub url: String,
    pub message: String,
}

/// In-memory feed state and its operations
#[derive(Debug, Default)]
pub struct FeedController {
    /// Newest first
    posts: Vec<Post>,
    url_draft: String,
    comment_drafts: HashMap<PostId, String>,
    next_seq: u64,
    in_flight: usize,
    last_failure: Option<SubmitFailure>,
}

impl FeedController {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Reads ---

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Resolve a 0-based feed position to a post id
    pub fn post_id_at(&self, index: usize) -> Option<PostId> {
        self.posts.get(index).map(|p| p.id)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn url_draft(&self) -> &str {
        &self.url_draft
    }

    pub fn comment_draft(&self, id: PostId) -> &str {
        self.comment_drafts
            .get(&id)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn last_failure(&self) -> Option<&SubmitFailure> {
        self.last_failure.as_ref()
    }

    /// Number of fetches started but not yet completed
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    // --- Drafts ---

    pub fn update_url_draft(&mut self, text: impl Into<String>) {
        self.url_draft = text.into();
        tracing::trace!(draft = %self.url_draft, "URL draft updated");
    }

    pub fn update_comment_draft(&mut self, id: PostId, text: impl Into<String>) {
        self.comment_drafts.insert(id, text.into());
        tracing::trace!(post = %id, "Comment draft updated");
    }

    // --- Submitting URLs ---

    /// Start a submission. Returns `None` (and changes nothing) when the URL
    /// is blank.
    pub fn begin_submit(&mut self, url: &str) -> Option<SubmitTicket> {
        let url = url.trim();
        if url.is_empty() {
            tracing::debug!("Ignoring empty URL submission");
            return None;
        }

        self.next_seq += 1;
        self.in_flight += 1;

        let ticket = SubmitTicket {
            seq: self.next_seq,
            url: url.to_string(),
        };
        tracing::debug!(url = %ticket.url, seq = ticket.seq, "Submission started");
        Some(ticket)
    }

    /// Finish a submission with the fetch result.
    ///
    /// On success the post is inserted and the URL draft cleared. On failure
    /// the feed and draft are left as they were and the failure is recorded.
    pub fn complete_submit(
        &mut self,
        ticket: SubmitTicket,
        result: Result<EmbedDocument, EmbedError>,
    ) -> Result<PostId, FeedError> {
        self.in_flight = self.in_flight.saturating_sub(1);

        match result {
            Ok(document) => {
                let post = Post::new(document, ticket.seq);
                let id = post.id;

                // Ahead of every post submitted earlier
                let at = self
                    .posts
                    .iter()
                    .position(|p| p.seq < ticket.seq)
                    .unwrap_or(self.posts.len());
                self.posts.insert(at, post);

                self.url_draft.clear();
                self.last_failure = None;

                tracing::info!(post = %id, url = %ticket.url, position = at, "Post added");
                Ok(id)
            }
            Err(source) => {
                tracing::warn!(url = %ticket.url, error = %source, "Preview fetch failed");
                self.last_failure = Some(SubmitFailure {
                    url: ticket.url.clone(),
                    message: source.to_string(),
                });
                Err(FeedError::Fetch {
                    url: ticket.url,
                    source,
                })
            }
        }
    }

    /// Fetch and insert in one step.
    ///
    /// `Ok(None)` means the URL was blank and nothing happened.
    pub async fn submit_url<P>(
        &mut self,
        provider: &P,
        url: &str,
    ) -> Result<Option<PostId>, FeedError>
    where
        P: EmbedProvider + ?Sized,
    {
        let Some(ticket) = self.begin_submit(url) else {
            return Ok(None);
        };

        let result = provider.fetch(ticket.url()).await;
        self.complete_submit(ticket, result).map(Some)
    }

    /// Submit whatever is in the URL draft
    pub async fn submit_url_draft<P>(&mut self, provider: &P) -> Result<Option<PostId>, FeedError>
    where
        P: EmbedProvider + ?Sized,
    {
        let url = self.url_draft.clone();
        self.submit_url(provider, &url).await
    }

    // --- Interactions ---

    pub fn toggle_like(&mut self, id: PostId) -> Result<LikeState, FeedError> {
        let post = self.post_mut(id)?;
        let state = post.toggle_like();
        tracing::debug!(post = %id, liked = state.liked, likes = state.like_count, "Like toggled");
        Ok(state)
    }

    /// Append a comment. Returns the new comment count, or `None` when the
    /// trimmed text is empty (nothing changes in that case).
    pub fn add_comment(&mut self, id: PostId, text: &str) -> Result<Option<usize>, FeedError> {
        let post = self.post_mut(id)?;

        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        post.comments.push(text.to_string());
        let count = post.comment_count();
        self.comment_drafts.remove(&id);

        tracing::debug!(post = %id, comments = count, "Comment added");
        Ok(Some(count))
    }

    /// Submit the stored comment draft for a post
    pub fn post_comment_draft(&mut self, id: PostId) -> Result<Option<usize>, FeedError> {
        let text = self.comment_draft(id).to_string();
        self.add_comment(id, &text)
    }

    fn post_mut(&mut self, id: PostId) -> Result<&mut Post, FeedError> {
        self.posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(FeedError::PostNotFound(id))
    }
}
