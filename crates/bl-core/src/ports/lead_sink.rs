use async_trait::async_trait;

use crate::content::{Lead, LeadReceipt};

/// Downstream receiver for contact-form submissions (CRM boundary).
#[async_trait]
pub trait LeadSinkPort: Send + Sync {
    async fn submit(&self, lead: &Lead) -> anyhow::Result<LeadReceipt>;
}
