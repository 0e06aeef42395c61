//! Selection store adapters.

mod file_store;
mod memory;

pub use file_store::JsonFileSelectionStore;
pub use memory::InMemorySelectionStore;
