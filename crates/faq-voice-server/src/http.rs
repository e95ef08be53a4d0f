//! HTTP surface: `POST /api/generate`, `GET /api/seed` and `GET /health`.
use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use faq_voice_core::seed::{seed_brand_voice, SEED_FAQ, SEED_QUESTION};

use crate::api::{
    self, FailureResponse, GenerateRequest, GenerateResponse, HealthResponse, SeedResponse,
};
use crate::error::AppError;

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/seed", get(seed))
        .route("/api/generate", post(generate_answer))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

pub async fn serve(addr: SocketAddr) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr).await?;
    info!(listen_addr = %addr, "HTTP server ready");
    axum::serve(listener, router()).await?;
    Ok(())
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn seed() -> Json<SeedResponse> {
    Json(SeedResponse {
        faq: SEED_FAQ.to_string(),
        brand_voice: seed_brand_voice(),
        question: SEED_QUESTION.to_string(),
    })
}

async fn generate_answer(payload: Result<Json<GenerateRequest>, JsonRejection>) -> Response {
    let start = Instant::now();

    let result = payload
        .map_err(AppError::from)
        .and_then(|Json(request)| request.into_parts())
        .and_then(|(faq, brand_voice, question)| api::generate(&faq, brand_voice, &question));
    let latency_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(generated) => {
            info!(sources = generated.sources.len(), latency_ms, "answer generated");
            Json(GenerateResponse {
                answer: generated.answer,
                sources: generated.sources,
                latency_ms,
            })
            .into_response()
        }
        Err(e) if e.status_code().is_client_error() => {
            warn!(error = %e, "rejected generate request");
            e.into_response()
        }
        Err(e) => {
            error!(error = ?e, latency_ms, "error generating answer");
            let body = FailureResponse {
                error: e.to_string(),
                latency_ms,
            };
            (e.status_code(), Json(body)).into_response()
        }
    }
}
