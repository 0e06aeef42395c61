use async_trait::async_trait;

/// Free-text generation boundary (broker advice, article summaries).
///
/// No structured contract beyond "returns text or fails": callers substitute
/// a fixed fallback string on failure or empty output and never retry.
#[async_trait]
pub trait AdviceGeneratorPort: Send + Sync {
    async fn generate(&self, prompt: &str) -> anyhow::Result<String>;
}
