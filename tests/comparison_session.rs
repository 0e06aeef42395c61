//! End-to-end tests over the assembled application: a full browse → toggle →
//! persist → restart → restore session against a real temp-dir store.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use bimalink::App;
use bl_app::AppDeps;
use bl_core::advice::ADVICE_FALLBACK;
use bl_core::catalog::{BenefitSortMode, InsuranceType, ProductId, ProductSortMode, TypeFilter};
use bl_core::comparison::ToggleOutcome;
use bl_core::ports::AdviceGeneratorPort;
use bl_infra::config::{AppConfig, GeminiConfig};
use bl_infra::{JsonFileSelectionStore, LoggingLeadSink, OfflineAdviceGenerator, SystemClock};

fn test_config(data_dir: &Path) -> AppConfig {
    AppConfig {
        data_dir: data_dir.to_path_buf(),
        gemini: GeminiConfig {
            endpoint: "https://example.invalid".to_string(),
            model: "test-model".to_string(),
            api_key: None,
            timeout_secs: 1,
        },
    }
}

fn app_in(data_dir: &Path, generator: Arc<dyn AdviceGeneratorPort>) -> App {
    let deps = AppDeps {
        catalog: Arc::new(bl_infra::seed::seed_catalog()),
        selection_store: Arc::new(JsonFileSelectionStore::in_dir(data_dir)),
        advice_generator: generator,
        lead_sink: Arc::new(LoggingLeadSink),
        clock: Arc::new(SystemClock),
    };
    App::assemble(deps, test_config(data_dir))
}

fn offline_app_in(data_dir: &Path) -> App {
    app_in(data_dir, Arc::new(OfflineAdviceGenerator))
}

#[tokio::test]
async fn selection_survives_a_restart_in_insertion_order() {
    let dir = tempfile::tempdir().unwrap();

    {
        let app = offline_app_in(dir.path());
        app.restore_session().await;
        app.engine.toggle(&ProductId::from("2")).await.unwrap();
        app.engine.toggle(&ProductId::from("5")).await.unwrap();
    }

    let app = offline_app_in(dir.path());
    app.restore_session().await;

    assert_eq!(
        app.engine.selected_ids().await,
        vec![ProductId::from("2"), ProductId::from("5")]
    );
}

#[tokio::test]
async fn stale_persisted_ids_are_dropped_on_restore() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("bimalink_comparison.json"),
        r#"["3","999","1"]"#,
    )
    .unwrap();

    let app = offline_app_in(dir.path());
    app.restore_session().await;

    assert_eq!(
        app.engine.selected_ids().await,
        vec![ProductId::from("3"), ProductId::from("1")]
    );
}

#[tokio::test]
async fn corrupt_store_content_starts_an_empty_session() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("bimalink_comparison.json"), "<<not json>>").unwrap();

    let app = offline_app_in(dir.path());
    app.restore_session().await;

    assert!(app.engine.selected_ids().await.is_empty());
}

#[tokio::test]
async fn a_fourth_product_is_rejected_and_the_view_shows_three_cards() {
    let dir = tempfile::tempdir().unwrap();
    let app = offline_app_in(dir.path());
    app.restore_session().await;

    for id in ["1", "2", "3"] {
        assert_eq!(
            app.engine.toggle(&ProductId::from(id)).await.unwrap(),
            ToggleOutcome::Added
        );
    }
    assert_eq!(
        app.engine.toggle(&ProductId::from("4")).await.unwrap(),
        ToggleOutcome::RejectedAtCapacity
    );

    let view = app.comparison_view.execute(BenefitSortMode::OriginalOrder).await;
    assert_eq!(view.products.len(), 3);
    // "3" (APA Afya Nafuu) is the cheapest of the first three seed products.
    assert_eq!(view.highlights.cheapest, vec![ProductId::from("3")]);
}

#[tokio::test]
async fn browse_filters_the_seed_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let app = offline_app_in(dir.path());

    let health = app.browse_products.execute(
        TypeFilter::Only(InsuranceType::Health),
        "britam",
        ProductSortMode::Default,
    );

    assert_eq!(health.len(), 1);
    assert_eq!(health[0].name, "Britam Milele Health");
}

#[tokio::test]
async fn offline_advice_degrades_to_the_fallback_copy() {
    let dir = tempfile::tempdir().unwrap();
    let app = offline_app_in(dir.path());

    let post = app
        .community_board
        .ask("amina", "Which health cover suits a family of four?")
        .await;

    assert_eq!(post.replies.len(), 1);
    assert_eq!(post.replies[0].content, ADVICE_FALLBACK);
}

struct CannedGenerator;

#[async_trait]
impl AdviceGeneratorPort for CannedGenerator {
    async fn generate(&self, _prompt: &str) -> anyhow::Result<String> {
        Ok("Jubilee and Britam both offer solid family covers.".to_string())
    }
}

#[tokio::test]
async fn generated_advice_flows_through_the_board() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_in(dir.path(), Arc::new(CannedGenerator));

    let post = app.community_board.ask("otieno", "family cover?").await;

    assert_eq!(
        post.replies[0].content,
        "Jubilee and Britam both offer solid family covers."
    );
}
