use axum::{
    Router,
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use metrics::histogram;
use std::{sync::Arc, time::Instant};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use common::config::{BackendConfig, Config};

use crate::{
    model::{CustomerProfile, GenericError},
    scorers::RiskScorer,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, default_value = "config/churn.yaml")]
    pub config: String,
}

pub fn initialize_executable() -> Result<Config, GenericError> {
    let args = Args::parse();
    println!("Loading config from: {}", args.config);
    let config = Config::load(&args.config)?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    Ok(config)
}

#[derive(Clone)]
pub struct AppState {
    scorer: Arc<dyn RiskScorer>,
}

impl AppState {
    pub fn new(scorer: Arc<dyn RiskScorer>) -> Self {
        Self { scorer }
    }
}

/// The API surface, shared between `run_backend` and the integration tests.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/predict", post(predict_churn))
        .route("/health", get(health_check))
        .with_state(state)
}

pub async fn run_backend(
    config: BackendConfig,
    scorer: Arc<dyn RiskScorer>,
) -> Result<(), GenericError> {
    let app = api_router(AppState::new(scorer))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    tracing::info!("Starting backend service at {}", config.server_address);
    let listener = tokio::net::TcpListener::bind(&config.server_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub async fn predict_churn(
    State(state): State<AppState>,
    Json(profile): Json<CustomerProfile>,
) -> Response {
    if let Err(e) = profile.validate() {
        tracing::warn!(error = %e, "Rejected customer profile failing validation");
        return (StatusCode::BAD_REQUEST, e.to_string()).into_response();
    }

    let t0 = Instant::now();
    let assessment = state.scorer.assess(&profile);
    {
        let h = histogram!("churn_backend_predict_seconds", "op" => "assess");
        h.record(t0.elapsed().as_secs_f64());
    }

    tracing::info!(
        risk_level = %assessment.risk_level,
        churn_probability = assessment.churn_probability,
        "Scored customer profile"
    );
    (StatusCode::OK, Json(assessment)).into_response()
}

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK").into_response()
}

pub async fn service_info() -> impl IntoResponse {
    Json(serde_json::json!({
        "service": "churn-predictor",
        "status": "active",
        "endpoints": {
            "predict": "/predict",
            "health": "/health",
        }
    }))
}
