use async_trait::async_trait;
use axum::http::StatusCode;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::debug;

use super::types::TmdbResponse;
use crate::config::TmdbConfig;

const POPULAR_PATH: &str = "movie/popular";

#[derive(Debug, thiserror::Error)]
pub enum TmdbError {
    #[error("invalid TMDB base URL {0}: {1}")]
    InvalidBaseUrl(String, String),
    #[error("failed to build HTTP client: {0}")]
    Build(reqwest::Error),
    #[error("failed to fetch movies: {0}")]
    Request(reqwest::Error),
    #[error("unexpected response status: {0}")]
    Status(StatusCode),
    #[error("failed to decode response: {0}")]
    Body(reqwest::Error),
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Source of the popular movie list. The handler only talks to this trait,
/// so tests can swap in an in-memory catalog.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    async fn popular_movies(&self, api_key: &str) -> Result<TmdbResponse, TmdbError>;
}

#[derive(Debug, Clone)]
pub struct TmdbClient {
    http: Client,
    popular_url: Url,
    language: String,
    page: u32,
}

impl TmdbClient {
    pub fn new(config: &TmdbConfig) -> Result<Self, TmdbError> {
        // Url::join drops the last segment unless the base ends in a slash.
        let mut base = config.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let popular_url = Url::parse(&base)
            .and_then(|u| u.join(POPULAR_PATH))
            .map_err(|e| TmdbError::InvalidBaseUrl(config.base_url.clone(), e.to_string()))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(TmdbError::Build)?;

        Ok(Self {
            http,
            popular_url,
            language: config.language.clone(),
            page: config.page,
        })
    }

    pub fn popular_url(&self) -> &Url {
        &self.popular_url
    }
}

#[async_trait]
impl MovieCatalog for TmdbClient {
    async fn popular_movies(&self, api_key: &str) -> Result<TmdbResponse, TmdbError> {
        debug!(url = %self.popular_url, language = %self.language, page = self.page, "TMDB request");

        let page = self.page.to_string();
        let response = self
            .http
            .get(self.popular_url.clone())
            .query(&[
                ("api_key", api_key),
                ("language", self.language.as_str()),
                ("page", page.as_str()),
            ])
            .send()
            .await
            .map_err(|e| TmdbError::Request(e.without_url()))?;

        // reqwest is on http 0.2, axum on http 1.
        let status = StatusCode::from_u16(response.status().as_u16())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status != StatusCode::OK {
            return Err(TmdbError::Status(status));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| TmdbError::Body(e.without_url()))?;
        let parsed: TmdbResponse = serde_json::from_slice(&body)?;

        debug!(results = parsed.results.len(), "TMDB response");
        Ok(parsed)
    }
}
