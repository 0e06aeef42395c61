//! BimaLink composition root.
//!
//! Wires the infrastructure adapters into the application layer exactly once
//! at startup and hands out explicit handles. Nothing downstream can reach
//! the comparison engine (or any port) through ambient lookup: a consumer
//! only exists because [`App::bootstrap`] constructed the engine first.

pub mod telemetry;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use bl_app::usecases::{
    AskInsuranceAdvice, BrowseProducts, CommunityBoard, GetComparisonView, SubmitLead,
    SummarizeArticle,
};
use bl_app::{AppDeps, ComparisonEngine};
use bl_core::content::BlogPost;
use bl_core::ports::AdviceGeneratorPort;
use bl_infra::{
    AppConfig, GeminiAdviceClient, JsonFileSelectionStore, LoggingLeadSink,
    OfflineAdviceGenerator, SystemClock,
};

/// The assembled application: the engine plus one handle per use case.
pub struct App {
    pub engine: Arc<ComparisonEngine>,
    pub browse_products: BrowseProducts,
    pub comparison_view: GetComparisonView,
    pub advice: Arc<AskInsuranceAdvice>,
    pub summarize_article: SummarizeArticle,
    pub community_board: CommunityBoard,
    pub submit_lead: SubmitLead,
    pub blog_posts: Vec<BlogPost>,
}

impl App {
    /// Builds every adapter and use case, then restores the persisted
    /// comparison selection (stale ids dropped, corruption tolerated).
    pub async fn bootstrap(config: AppConfig) -> Result<Self> {
        let advice_generator: Arc<dyn AdviceGeneratorPort> =
            match GeminiAdviceClient::from_config(&config.gemini)
                .context("build advice client")?
            {
                Some(client) => Arc::new(client),
                None => {
                    info!("no Gemini API key configured, advice runs in offline mode");
                    Arc::new(OfflineAdviceGenerator)
                }
            };

        let deps = AppDeps {
            catalog: Arc::new(bl_infra::seed::seed_catalog()),
            selection_store: Arc::new(JsonFileSelectionStore::in_dir(&config.data_dir)),
            advice_generator,
            lead_sink: Arc::new(LoggingLeadSink),
            clock: Arc::new(SystemClock),
        };

        let app = Self::assemble(deps, config);
        app.restore_session().await;
        Ok(app)
    }

    /// Pure wiring over an already-built dependency set. Split out so tests
    /// can substitute any port.
    pub fn assemble(deps: AppDeps, config: AppConfig) -> Self {
        let engine = Arc::new(ComparisonEngine::new(
            deps.catalog.clone(),
            deps.selection_store.clone(),
        ));
        let advice = Arc::new(AskInsuranceAdvice::with_timeout(
            deps.advice_generator.clone(),
            config.gemini.generation_timeout(),
        ));

        Self {
            browse_products: BrowseProducts::new(deps.catalog.clone()),
            comparison_view: GetComparisonView::new(engine.clone()),
            summarize_article: SummarizeArticle::with_timeout(
                deps.advice_generator.clone(),
                config.gemini.generation_timeout(),
            ),
            community_board: CommunityBoard::new(advice.clone(), deps.clock.clone()),
            submit_lead: SubmitLead::new(deps.lead_sink.clone()),
            blog_posts: bl_infra::seed::seed_blog_posts(),
            advice,
            engine,
        }
    }

    /// Read-once-at-startup restore; also exposed so tests assembling their
    /// own dependency set control when the store is first touched.
    pub async fn restore_session(&self) {
        self.engine.restore().await;
    }
}
