//! # bl-infra
//!
//! Infrastructure adapters for BimaLink: the file-backed selection store,
//! the Gemini HTTP client behind the advice port, the seed catalog/content,
//! and configuration loading.

pub mod advice;
pub mod config;
pub mod leads;
pub mod seed;
pub mod store;
pub mod time;

pub use advice::{GeminiAdviceClient, OfflineAdviceGenerator};
pub use config::AppConfig;
pub use leads::LoggingLeadSink;
pub use store::{InMemorySelectionStore, JsonFileSelectionStore};
pub use time::SystemClock;
