//! Community question board: session-scoped posts with an AI broker reply.
//!
//! Submitting a question suspends the submitting flow until the advice call
//! resolves (or its timeout fires); the comparison selection is never touched
//! from here.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::info;

use bl_core::community::CommunityPost;
use bl_core::ports::ClockPort;

use super::ask_advice::AskInsuranceAdvice;

/// Display name the generated broker reply is attributed to.
pub const ASSISTANT_AUTHOR: &str = "BimaLink Assistant";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("community post not found: {0}")]
    PostNotFound(String),
}

pub struct CommunityBoard {
    posts: Mutex<Vec<CommunityPost>>,
    advice: Arc<AskInsuranceAdvice>,
    clock: Arc<dyn ClockPort>,
}

impl CommunityBoard {
    pub fn new(advice: Arc<AskInsuranceAdvice>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            posts: Mutex::new(Vec::new()),
            advice,
            clock,
        }
    }

    /// Posts a question and attaches the generated broker reply.
    ///
    /// The advice use case already degrades to its fallback string, so the
    /// reply is always present.
    pub async fn ask(&self, author: &str, question: &str) -> CommunityPost {
        let mut post = CommunityPost::new(author, question, self.clock.now());
        info!(post = %post.id, "community question submitted");

        let reply = self.advice.execute(question).await;
        post.add_reply(ASSISTANT_AUTHOR, reply, self.clock.now());

        let snapshot = post.clone();
        // Newest first, matching the board's rendering order.
        self.posts.lock().await.insert(0, post);
        snapshot
    }

    pub async fn like(&self, post_id: &str) -> Result<u32, BoardError> {
        let mut posts = self.posts.lock().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| BoardError::PostNotFound(post_id.to_string()))?;
        post.like();
        Ok(post.likes)
    }

    pub async fn reply(
        &self,
        post_id: &str,
        author: &str,
        content: &str,
    ) -> Result<(), BoardError> {
        let now = self.clock.now();
        let mut posts = self.posts.lock().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| BoardError::PostNotFound(post_id.to_string()))?;
        post.add_reply(author, content, now);
        Ok(())
    }

    /// Snapshot of the board, newest post first.
    pub async fn posts(&self) -> Vec<CommunityPost> {
        self.posts.lock().await.clone()
    }
}
