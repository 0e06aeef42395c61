//! Community question board domain model.
//!
//! Posts live for the UI session only; there is no durable community store.
//! Reply ordering is append-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityReply {
    pub id: String,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityPost {
    pub id: String,
    pub author: String,
    pub content: String,
    pub likes: u32,
    pub replies: Vec<CommunityReply>,
    pub created_at: DateTime<Utc>,
}

impl CommunityPost {
    pub fn new(author: impl Into<String>, content: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author: author.into(),
            content: content.into(),
            likes: 0,
            replies: Vec::new(),
            created_at: at,
        }
    }

    pub fn like(&mut self) {
        self.likes += 1;
    }

    pub fn add_reply(
        &mut self,
        author: impl Into<String>,
        content: impl Into<String>,
        at: DateTime<Utc>,
    ) -> &CommunityReply {
        self.replies.push(CommunityReply {
            id: Uuid::new_v4().to_string(),
            author: author.into(),
            content: content.into(),
            created_at: at,
        });
        self.replies.last().expect("just pushed")
    }
}
