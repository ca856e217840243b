use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use dosha_core::{CoreConfig, PredictionService, MODEL_PATH_ENV, REST_ADDR_ENV};

/// Main entry point for the dosha prediction service
///
/// Loads the classifier artifact once, then serves the REST API until the process stops. If the
/// artifact cannot be loaded the process exits before binding the listener.
///
/// # Environment Variables
/// - `DOSHA_MODEL_PATH`: Classifier artifact path (default: "model/panchakarma_dosha_model.json")
/// - `DOSHA_REST_ADDR`: REST server address (default: "0.0.0.0:8000")
/// - `RUST_LOG`: Extra tracing filter directives
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, model loading, or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dosha=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = CoreConfig::from_env_values(
        std::env::var(MODEL_PATH_ENV).ok(),
        std::env::var(REST_ADDR_ENV).ok(),
    )?;

    tracing::info!("++ Loading dosha classifier from {}", cfg.model_path().display());
    let prediction_service = PredictionService::from_config(&cfg).with_context(|| {
        format!(
            "failed to load classifier from {}",
            cfg.model_path().display()
        )
    })?;

    let unknown = prediction_service.unknown_labels();
    if !unknown.is_empty() {
        tracing::warn!(
            "classifier can predict labels with no recommendation entry: {}",
            unknown.join(", ")
        );
    }

    tracing::info!("++ Starting dosha REST API on {}", cfg.rest_addr());
    api_rest::serve(cfg.rest_addr(), AppState::new(prediction_service)).await
}
