//! Two-sentence article summarization with a truncation fallback.

use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use bl_core::advice::{fallback_summary, summary_prompt};
use bl_core::ports::AdviceGeneratorPort;

use super::ask_advice::DEFAULT_GENERATION_TIMEOUT;

pub struct SummarizeArticle {
    generator: Arc<dyn AdviceGeneratorPort>,
    timeout: Duration,
}

impl SummarizeArticle {
    pub fn new(generator: Arc<dyn AdviceGeneratorPort>) -> Self {
        Self::with_timeout(generator, DEFAULT_GENERATION_TIMEOUT)
    }

    pub fn with_timeout(generator: Arc<dyn AdviceGeneratorPort>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    /// Falls back to a truncated excerpt of the article itself, so the page
    /// always has a snippet to show.
    pub async fn execute(&self, content: &str) -> String {
        let prompt = summary_prompt(content);

        match tokio::time::timeout(self.timeout, self.generator.generate(&prompt)).await {
            Ok(Ok(text)) if !text.trim().is_empty() => text,
            Ok(Ok(_)) => fallback_summary(content),
            Ok(Err(err)) => {
                warn!(error = %err, "summarization failed, truncating instead");
                fallback_summary(content)
            }
            Err(_) => {
                warn!("summarization timed out, truncating instead");
                fallback_summary(content)
            }
        }
    }
}
