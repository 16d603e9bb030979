use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use symptom_referral_server::config::load_config;
use symptom_referral_server::core::error::AppError;
use symptom_referral_server::features::ollama::{ChatBackend, OllamaClient};
use symptom_referral_server::features::referral::{
    ReferralService, handle_healthcheck, handle_predict,
};
use symptom_referral_server::server::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    init_tracing();

    let config = Arc::new(load_config()?);
    tracing::info!(model = %config.model, backend = %config.ollama_base_url, "loaded configuration");

    let backend: Arc<dyn ChatBackend> = Arc::new(OllamaClient::new(config.clone())?);
    let service = Arc::new(ReferralService::new(backend));
    let app_state = AppState::new(service);

    // Wide-open CORS matches the source deployment; tighten the origin list
    // before exposing this beyond a trusted network.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/predict", post(handle_predict))
        .route("/health", get(handle_healthcheck))
        .layer(cors)
        .with_state(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(%addr, "starting server");
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|err| AppError::internal(format!("failed to bind: {err}")))?;
    axum::serve(listener, app)
        .await
        .map_err(|err| AppError::internal(format!("server error: {err}")))?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .with_target(false)
        .init();
}
