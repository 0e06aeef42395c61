//! # bl-core
//!
//! Core domain models and business logic for BimaLink.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod advice;
pub mod catalog;
pub mod community;
pub mod comparison;
pub mod content;
pub mod ports;

// Re-export commonly used types at the crate root
pub use catalog::{CatalogError, InsuranceType, Product, ProductCatalog, ProductId};
pub use comparison::{ComparisonHighlights, ComparisonSelection, ToggleOutcome};
pub use community::{CommunityPost, CommunityReply};
pub use content::{BlogPost, Lead, LeadReceipt, LeadValidationError};
