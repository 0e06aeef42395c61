//! Advice-generator adapters.

mod gemini;
mod offline;

pub use gemini::GeminiAdviceClient;
pub use offline::OfflineAdviceGenerator;
