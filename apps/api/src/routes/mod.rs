pub mod health;

use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

use crate::documents::handlers::handle_upload;
use crate::interview::handlers::handle_generate_questions;
use crate::state::AppState;

/// Only the listed origins are allowed, with credentials. Methods and headers
/// are mirrored from the preflight.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin '{origin}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

pub fn build_router(state: AppState) -> Result<Router> {
    let cors = cors_layer(&state.config.cors_origins)?;
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    // Trailing-slash forms match the paths older clients were written against.
    Ok(Router::new()
        .route("/health", get(health::health_handler))
        .route("/upload", post(handle_upload))
        .route("/upload/", post(handle_upload))
        .route("/generate-questions", post(handle_generate_questions))
        .route("/generate-questions/", post(handle_generate_questions))
        .layer(body_limit)
        .layer(cors)
        .with_state(state))
}
