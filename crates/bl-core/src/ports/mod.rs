//! Ports: async traits the outer layers implement.
//!
//! Use cases depend on these abstractions only, never on concrete adapters.

mod advice_generator;
mod clock;
mod lead_sink;
mod selection_store;

pub use advice_generator::AdviceGeneratorPort;
pub use clock::ClockPort;
pub use lead_sink::LeadSinkPort;
pub use selection_store::SelectionStorePort;
