//! Boundary content types: blog posts shown on the insights page and lead
//! (contact form) submissions. Neither participates in the comparison
//! engine's logic; they only cross the marketplace boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::InsuranceType;

/// Editorial article listed on the insights page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub author: String,
    pub source: String,
    pub image_url: String,
}

/// A prospective-customer inquiry from the contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub insurance_type: InsuranceType,
    pub message: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeadValidationError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("email address looks malformed: {0}")]
    MalformedEmail(String),
    #[error("phone number must not be empty")]
    EmptyPhone,
}

impl Lead {
    /// Minimal shape validation before the lead crosses the CRM boundary.
    pub fn validate(&self) -> Result<(), LeadValidationError> {
        if self.name.trim().is_empty() {
            return Err(LeadValidationError::EmptyName);
        }
        let email = self.email.trim();
        let at = email.find('@');
        let well_formed = match at {
            Some(pos) => pos > 0 && email[pos + 1..].contains('.') && !email.ends_with('.'),
            None => false,
        };
        if !well_formed {
            return Err(LeadValidationError::MalformedEmail(self.email.clone()));
        }
        if self.phone.trim().is_empty() {
            return Err(LeadValidationError::EmptyPhone);
        }
        Ok(())
    }
}

/// Acknowledgement handed back once a lead has been accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadReceipt {
    pub lead_id: String,
    pub received_at: DateTime<Utc>,
}
