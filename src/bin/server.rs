//! Stability HTTP Server

use axum::{
    extract::Json,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};

use vault_stability::config::InputDocument;
use vault_stability::prelude::*;
use vault_stability::results::ReportSummary;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

#[derive(Debug, Deserialize)]
struct AnalysisRequest {
    #[serde(flatten)]
    input: InputDocument,
    #[serde(default)]
    options: AnalysisOptions,
}

#[derive(Debug, Serialize)]
struct AnalysisResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<ReportSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<StabilityReport>,
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn analyze_handler(Json(request): Json<AnalysisRequest>) -> impl IntoResponse {
    match run_analysis(request) {
        Ok(report) => (
            StatusCode::OK,
            Json(AnalysisResponse {
                success: true,
                error: None,
                summary: Some(report.summary()),
                report: Some(report),
            }),
        ),
        Err(e) => {
            let status = if e.is_configuration() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::UNPROCESSABLE_ENTITY
            };
            log::warn!("analysis rejected: {}", e);
            (
                status,
                Json(AnalysisResponse {
                    success: false,
                    error: Some(e.to_string()),
                    summary: None,
                    report: None,
                }),
            )
        }
    }
}

fn run_analysis(request: AnalysisRequest) -> StabilityResult<StabilityReport> {
    let input = AnalysisInput::try_from(request.input)?;
    analyze(&input, &AnalyticGeometry, &request.options)
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .route("/api/v1/analyze", post(analyze_handler))
        .layer(cors);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8087);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("Stability Server listening on http://{}", addr);
    println!("  Health check: GET  /health");
    println!("  Analysis:     POST /api/v1/analyze");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            log::error!("failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    if let Err(e) = axum::serve(listener, app).await {
        log::error!("server error: {}", e);
    }
}
