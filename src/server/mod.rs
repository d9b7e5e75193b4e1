pub mod handlers;
pub mod types;

use crate::{
    Result,
    assessment::AssessmentService,
    config::Config,
    llm::{ModelClient, OllamaClient},
    store::{InMemoryStore, SubmissionStore},
};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Builds the application router over the given service.
pub fn router(assessment: Arc<AssessmentService>) -> Router {
    let app_state = AppState { assessment };

    Router::new()
        .route("/", get(handlers::root))
        .route("/api/upload", post(handlers::upload))
        .route("/api/evaluate/:submission_id", post(handlers::evaluate))
        .route("/api/generate-viva/:submission_id", post(handlers::generate_viva))
        .route("/api/analyze-viva", post(handlers::analyze_viva))
        .route("/api/report/:submission_id", get(handlers::report))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

pub async fn run(config: Config) -> Result<()> {
    let store: Arc<dyn SubmissionStore> = Arc::new(InMemoryStore::new());
    let model: Arc<dyn ModelClient> = Arc::new(OllamaClient::new(config.inference.clone())?);

    info!(
        "Using model '{}' at {}",
        config.inference.model, config.inference.base_url
    );

    let app = router(Arc::new(AssessmentService::new(store, model)));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
