//! Contact-form submission: validate, then hand off to the CRM boundary.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use bl_core::content::{Lead, LeadReceipt};
use bl_core::ports::LeadSinkPort;

pub struct SubmitLead {
    sink: Arc<dyn LeadSinkPort>,
}

impl SubmitLead {
    pub fn new(sink: Arc<dyn LeadSinkPort>) -> Self {
        Self { sink }
    }

    pub async fn execute(&self, lead: Lead) -> Result<LeadReceipt> {
        lead.validate().context("lead failed validation")?;

        let receipt = self
            .sink
            .submit(&lead)
            .await
            .context("forward lead to sink")?;

        info!(
            lead = %receipt.lead_id,
            insurance_type = %lead.insurance_type,
            "lead accepted"
        );
        Ok(receipt)
    }
}
