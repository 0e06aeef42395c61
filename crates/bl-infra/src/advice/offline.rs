use anyhow::bail;
use async_trait::async_trait;

use bl_core::ports::AdviceGeneratorPort;

/// Stand-in generator used when no API key is configured. Every call fails,
/// which the application layer turns into the fixed offline fallback copy.
pub struct OfflineAdviceGenerator;

#[async_trait]
impl AdviceGeneratorPort for OfflineAdviceGenerator {
    async fn generate(&self, _prompt: &str) -> anyhow::Result<String> {
        bail!("advice generator is offline: no API key configured")
    }
}
