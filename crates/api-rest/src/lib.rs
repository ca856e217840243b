//! # API REST
//!
//! REST API implementation for the dosha prediction service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, request tracing, status codes)
//!
//! Uses `api-shared` for wire types and `dosha-core` for prediction.

#![warn(rust_2018_idioms)]

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{HealthRes, HealthService, PredictReq, PredictRes, RecommendationRes};
use dosha_core::{DoshaError, Prediction, PredictionService};

/// Application state for the REST API server
///
/// Holds the read-only prediction service. Cloning shares the underlying classifier, so
/// concurrent handlers need no synchronisation.
#[derive(Clone)]
pub struct AppState {
    prediction_service: PredictionService,
}

impl AppState {
    pub fn new(prediction_service: PredictionService) -> Self {
        Self { prediction_service }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(root, predict),
    components(schemas(HealthRes, PredictReq, PredictRes, RecommendationRes))
)]
pub struct ApiDoc;

/// Builds the REST router with all routes, docs and middleware attached.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/predict", post(predict))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds `addr` and serves the REST API until the server stops.
///
/// # Errors
/// Returns an error if:
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
pub async fn serve(addr: &str, state: AppState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("-- Dosha REST API listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Liveness check response", body = HealthRes)
    )
)]
/// Liveness endpoint
///
/// Always returns the fixed greeting while the process is serving requests.
#[axum::debug_handler]
async fn root(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/predict",
    request_body = PredictReq,
    responses(
        (status = 200, description = "Predicted dosha with recommendations", body = PredictRes),
        (status = 400, description = "Malformed JSON body"),
        (status = 415, description = "Body is not JSON"),
        (status = 422, description = "Missing or mistyped symptoms field"),
        (status = 500, description = "Classifier failed or predicted an unknown dosha"),
        (status = 503, description = "Classifier model unavailable")
    )
)]
/// Predict a dosha from free-text symptoms
///
/// The symptoms are forwarded to the classifier unchanged; the predicted label is joined with
/// its static recommendation.
///
/// # Errors
/// Returns `500 Internal Server Error` if:
/// - the classifier produces no label, or
/// - the label has no recommendation entry.
#[axum::debug_handler]
async fn predict(
    State(state): State<AppState>,
    Json(req): Json<PredictReq>,
) -> Result<Json<PredictRes>, (StatusCode, &'static str)> {
    match state.prediction_service.predict(&req.symptoms) {
        Ok(prediction) => Ok(Json(to_predict_res(prediction))),
        Err(e) => {
            tracing::error!("Predict error: {:?}", e);
            Err(error_status(&e))
        }
    }
}

fn to_predict_res(prediction: Prediction) -> PredictRes {
    let rec = prediction.recommendations;
    PredictRes {
        input: prediction.input,
        predicted_dosha: prediction.predicted_dosha.to_string(),
        recommendations: RecommendationRes {
            therapy: rec.therapy.to_string(),
            herbs: rec.herbs.iter().map(|h| h.to_string()).collect(),
            lifestyle: rec.lifestyle.iter().map(|l| l.to_string()).collect(),
        },
    }
}

/// Maps a core error onto the HTTP status and body returned to the client.
fn error_status(err: &DoshaError) -> (StatusCode, &'static str) {
    match err {
        DoshaError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "Invalid input"),
        DoshaError::UnknownPredictionLabel(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Unknown prediction label",
        ),
        e if e.is_model_unavailable() => (StatusCode::SERVICE_UNAVAILABLE, "Model unavailable"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "Internal error"),
    }
}
