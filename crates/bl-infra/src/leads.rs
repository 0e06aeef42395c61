use async_trait::async_trait;
use chrono::Utc;
use log::info;
use uuid::Uuid;

use bl_core::content::{Lead, LeadReceipt};
use bl_core::ports::LeadSinkPort;

/// Log-only lead sink standing in for the CRM boundary: assigns an id,
/// records the inquiry, and acknowledges it.
pub struct LoggingLeadSink;

#[async_trait]
impl LeadSinkPort for LoggingLeadSink {
    async fn submit(&self, lead: &Lead) -> anyhow::Result<LeadReceipt> {
        let receipt = LeadReceipt {
            lead_id: Uuid::new_v4().to_string(),
            received_at: Utc::now(),
        };
        info!(
            "lead received: id={} type={} name={}",
            receipt.lead_id, lead.insurance_type, lead.name
        );
        Ok(receipt)
    }
}
