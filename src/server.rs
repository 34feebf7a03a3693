use axum::{
    extract::Request,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::tmdb::MovieCatalog;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<dyn MovieCatalog>,
}

impl AppState {
    pub fn new(config: Config, catalog: Arc<dyn MovieCatalog>) -> Self {
        Self {
            config: Arc::new(config),
            catalog,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/movies", get(crate::movies::list_popular_movies))
        .route("/health", get(health_handler))
        .fallback(fallback_handler)
        .layer(axum::middleware::from_fn(crate::middleware::log_request))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CACHE_CONTROL, "no-cache, no-store")],
        "Healthy",
    )
}

async fn fallback_handler(req: Request) -> impl IntoResponse {
    // CORS preflight for paths without an explicit route
    if req.method() == axum::http::Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    StatusCode::NOT_FOUND.into_response()
}
