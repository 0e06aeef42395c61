//! # Application Dependencies / 应用依赖
//!
//! Dependency grouping for composition-root construction.
//! 此模块定义组合根构造时的依赖分组。
//!
//! **Note / 注意**: This is NOT a Builder pattern — just parameter grouping.
//! All dependencies are required: no defaults, no optional fields, no hidden
//! logic. The comparison engine and every use case receive their
//! collaborators explicitly; nothing is reachable through ambient lookup.

use std::sync::Arc;

use bl_core::catalog::ProductCatalog;
use bl_core::ports::{AdviceGeneratorPort, ClockPort, LeadSinkPort, SelectionStorePort};

/// Application dependency grouping (non-Builder, just parameter grouping).
pub struct AppDeps {
    /// Static, read-only product catalog loaded at startup.
    pub catalog: Arc<ProductCatalog>,

    /// Durable slot for the comparison selection id list.
    pub selection_store: Arc<dyn SelectionStorePort>,

    /// External text-generation collaborator (advice, summaries).
    pub advice_generator: Arc<dyn AdviceGeneratorPort>,

    /// CRM boundary for contact-form submissions.
    pub lead_sink: Arc<dyn LeadSinkPort>,

    /// Wall clock, abstracted for deterministic tests.
    pub clock: Arc<dyn ClockPort>,
}
