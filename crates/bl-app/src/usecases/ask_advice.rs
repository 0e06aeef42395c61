//! Broker-advice generation with an explicit timeout and fallback.
//!
//! The generator call is the only asynchronous boundary in the system. It is
//! a single attempt: on timeout, error, or blank output the fixed fallback
//! string is substituted so the user never sees a raw failure.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use bl_core::advice::{advice_prompt, ADVICE_FALLBACK};
use bl_core::ports::AdviceGeneratorPort;

pub const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(10);

pub struct AskInsuranceAdvice {
    generator: Arc<dyn AdviceGeneratorPort>,
    timeout: Duration,
}

impl AskInsuranceAdvice {
    pub fn new(generator: Arc<dyn AdviceGeneratorPort>) -> Self {
        Self::with_timeout(generator, DEFAULT_GENERATION_TIMEOUT)
    }

    pub fn with_timeout(generator: Arc<dyn AdviceGeneratorPort>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    /// Always returns displayable text; never an error.
    pub async fn execute(&self, query: &str) -> String {
        let prompt = advice_prompt(query);

        match tokio::time::timeout(self.timeout, self.generator.generate(&prompt)).await {
            Ok(Ok(text)) if !text.trim().is_empty() => {
                info!(chars = text.len(), "advice generated");
                text
            }
            Ok(Ok(_)) => {
                warn!("advice generator returned empty text, using fallback");
                ADVICE_FALLBACK.to_string()
            }
            Ok(Err(err)) => {
                warn!(error = %err, "advice generation failed, using fallback");
                ADVICE_FALLBACK.to_string()
            }
            Err(_) => {
                warn!(timeout_ms = self.timeout.as_millis() as u64, "advice generation timed out");
                ADVICE_FALLBACK.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct CannedGenerator(&'static str);

    #[async_trait]
    impl AdviceGeneratorPort for CannedGenerator {
        async fn generate(&self, _prompt: &str) -> anyhow::Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl AdviceGeneratorPort for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> anyhow::Result<String> {
            Err(anyhow::anyhow!("api unreachable"))
        }
    }

    struct StalledGenerator;

    #[async_trait]
    impl AdviceGeneratorPort for StalledGenerator {
        async fn generate(&self, _prompt: &str) -> anyhow::Result<String> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            unreachable!()
        }
    }

    #[tokio::test]
    async fn returns_generated_text_on_success() {
        let usecase = AskInsuranceAdvice::new(Arc::new(CannedGenerator("Compare three quotes.")));
        assert_eq!(usecase.execute("motor cover?").await, "Compare three quotes.");
    }

    #[tokio::test]
    async fn generator_failure_yields_the_fallback() {
        let usecase = AskInsuranceAdvice::new(Arc::new(FailingGenerator));
        assert_eq!(usecase.execute("motor cover?").await, ADVICE_FALLBACK);
    }

    #[tokio::test]
    async fn blank_output_yields_the_fallback() {
        let usecase = AskInsuranceAdvice::new(Arc::new(CannedGenerator("   ")));
        assert_eq!(usecase.execute("motor cover?").await, ADVICE_FALLBACK);
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_yields_the_fallback_without_retrying() {
        let usecase = AskInsuranceAdvice::with_timeout(
            Arc::new(StalledGenerator),
            Duration::from_millis(100),
        );
        assert_eq!(usecase.execute("motor cover?").await, ADVICE_FALLBACK);
    }
}
