use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, info};

use super::types::*;
use crate::server::AppState;
use crate::tmdb::TmdbError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("TMDB API key is missing")]
    MissingApiKey,
    #[error("error fetching movies: {0}")]
    Upstream(#[from] TmdbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self, "movie request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

/// GET /api/movies
pub async fn list_popular_movies(
    State(state): State<AppState>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let api_key = state.config.api_key().ok_or(ApiError::MissingApiKey)?;

    let upstream = state.catalog.popular_movies(api_key).await?;
    let movies = to_movies(upstream.results);

    info!(count = movies.len(), "relayed popular movies");
    Ok(Json(movies))
}
