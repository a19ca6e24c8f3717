//! Interactive session
//!
//! Drives a `FeedController` from lines of text input. Preview fetches run
//! in spawned tasks and report back over a channel; the session applies the
//! results on its own loop, so the controller only ever has one owner.

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;

use crate::app::{help_text, parse_command, Command, FeedController, SubmitTicket};
use crate::domain::entities::{EmbedDocument, PostId};
use crate::domain::ports::EmbedProvider;
use crate::error::EmbedError;
use crate::feed::{render_card, render_feed};

type Completion = (SubmitTicket, Result<EmbedDocument, EmbedError>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// A feed plus the provider that fills it
pub struct Session<P: EmbedProvider + ?Sized + 'static> {
    feed: FeedController,
    provider: Arc<P>,
    tx: mpsc::UnboundedSender<Completion>,
    rx: mpsc::UnboundedReceiver<Completion>,
}

impl<P: EmbedProvider + ?Sized + 'static> Session<P> {
    pub fn new(provider: Arc<P>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            feed: FeedController::new(),
            provider,
            tx,
            rx,
        }
    }

    /// Run until `quit`, or until input ends and every pending fetch has
    /// landed. Returns the final feed.
    pub async fn run<R, W>(mut self, mut input: R, mut output: W) -> std::io::Result<FeedController>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        // Survives a cancelled read, which leaves any partial line in place
        let mut buf = Vec::new();
        let mut input_open = true;

        output.write_all(render_feed(&self.feed).as_bytes()).await?;
        output.flush().await?;

        loop {
            tokio::select! {
                read = input.read_until(b'\n', &mut buf), if input_open => {
                    if read? == 0 {
                        tracing::debug!(pending = self.feed.in_flight(), "Input closed");
                        input_open = false;
                    } else {
                        // Invalid UTF-8 is replaced, not fatal
                        let line = String::from_utf8_lossy(&buf).into_owned();
                        buf.clear();
                        let line = line.trim_end_matches(['\n', '\r']);
                        if self.handle_line(line, &mut output).await? == Flow::Quit {
                            break;
                        }
                    }
                },
                Some((ticket, result)) = self.rx.recv() => {
                    self.handle_completion(ticket, result, &mut output).await?;
                }
            }

            if !input_open && self.feed.in_flight() == 0 {
                break;
            }
        }

        Ok(self.feed)
    }

    async fn handle_line<W>(&mut self, line: &str, output: &mut W) -> std::io::Result<Flow>
    where
        W: AsyncWrite + Unpin,
    {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }

        let command = match parse_command(line) {
            Ok(command) => command,
            Err(e) => {
                write_line(output, &format!("Error: {}", e)).await?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            Command::Url { text } => {
                self.feed.update_url_draft(text);
            }

            Command::Post { url } => {
                if let Some(url) = url {
                    self.feed.update_url_draft(url);
                }
                let draft = self.feed.url_draft().to_string();
                if let Some(ticket) = self.feed.begin_submit(&draft) {
                    write_line(output, &format!("Loading {}...", ticket.url())).await?;
                    self.spawn_fetch(ticket);
                }
            }

            Command::Like { index } => {
                if let Some(id) = self.resolve(index, output).await? {
                    if let Err(e) = self.feed.toggle_like(id) {
                        write_line(output, &format!("Error: {}", e)).await?;
                    } else {
                        self.write_card(index, output).await?;
                    }
                }
            }

            Command::Comment { index, text } => {
                if let Some(id) = self.resolve(index, output).await? {
                    match self.feed.add_comment(id, &text) {
                        Ok(Some(_)) => self.write_card(index, output).await?,
                        Ok(None) => {}
                        Err(e) => write_line(output, &format!("Error: {}", e)).await?,
                    }
                }
            }

            Command::Draft { index, text } => {
                if let Some(id) = self.resolve(index, output).await? {
                    self.feed.update_comment_draft(id, text);
                }
            }

            Command::Send { index } => {
                if let Some(id) = self.resolve(index, output).await? {
                    match self.feed.post_comment_draft(id) {
                        Ok(Some(_)) => self.write_card(index, output).await?,
                        Ok(None) => {}
                        Err(e) => write_line(output, &format!("Error: {}", e)).await?,
                    }
                }
            }

            Command::Show => {
                output.write_all(render_feed(&self.feed).as_bytes()).await?;
            }

            Command::Help => {
                output.write_all(help_text().as_bytes()).await?;
            }

            Command::Quit => return Ok(Flow::Quit),
        }

        output.flush().await?;
        Ok(Flow::Continue)
    }

    async fn handle_completion<W>(
        &mut self,
        ticket: SubmitTicket,
        result: Result<EmbedDocument, EmbedError>,
        output: &mut W,
    ) -> std::io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        // Failures are recorded on the feed and shown by the render
        let _ = self.feed.complete_submit(ticket, result);
        output.write_all(render_feed(&self.feed).as_bytes()).await?;
        output.flush().await
    }

    fn spawn_fetch(&self, ticket: SubmitTicket) {
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        let url = ticket.url().to_string();

        tokio::spawn(async move {
            // A panicking fetch still has to hand its ticket back
            let fetch = tokio::spawn(async move { provider.fetch(&url).await });
            let result = match fetch.await {
                Ok(result) => result,
                Err(e) => {
                    tracing::error!(url = %ticket.url(), error = %e, "Fetch task failed");
                    Err(EmbedError::Task(e.to_string()))
                }
            };
            // Receiver only goes away when the session has ended
            let _ = tx.send((ticket, result));
        });
    }

    async fn resolve<W>(&self, index: usize, output: &mut W) -> std::io::Result<Option<PostId>>
    where
        W: AsyncWrite + Unpin,
    {
        let id = self.feed.post_id_at(index);
        if id.is_none() {
            write_line(output, &format!("No post {}", index + 1)).await?;
        }
        Ok(id)
    }

    async fn write_card<W>(&self, index: usize, output: &mut W) -> std::io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        if let Some(post) = self.feed.posts().get(index) {
            let card = render_card(index + 1, post, self.feed.comment_draft(post.id));
            output.write_all(card.as_bytes()).await?;
        }
        Ok(())
    }
}

async fn write_line<W>(output: &mut W, line: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(line.as_bytes()).await?;
    output.write_all(b"\n").await
}
