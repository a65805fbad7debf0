//! TMDB HTTP client.

use std::time::Duration;

use futures::future::join_all;
use serde::de::DeserializeOwned;
use tracing::warn;

use super::config::CatalogConfig;
use super::types::{CatalogError, ImageSize, Movie, MoviePage};

/// Asset served when a record has no poster or backdrop path.
pub const PLACEHOLDER_ASSET: &str = "/placeholder.svg";

pub struct CatalogClient {
    http: reqwest::Client,
    config: CatalogConfig,
}

impl CatalogClient {
    /// Build a client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| CatalogError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// Build a client from environment variables. See
    /// [`CatalogConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, CatalogError> {
        Self::new(CatalogConfig::from_env()?)
    }

    /// Search movies by title.
    ///
    /// A blank or whitespace query resolves to [`MoviePage::empty`]
    /// without touching the network.
    ///
    /// # Errors
    ///
    /// Surfaces transport, non-success status, and decode failures; none
    /// are retried.
    pub async fn search(&self, query: &str, page: u32) -> Result<MoviePage, CatalogError> {
        if query.trim().is_empty() {
            return Ok(MoviePage::empty());
        }
        self.get_json(
            "/search/movie",
            &[("query", query.to_owned()), ("page", page.to_string())],
        )
        .await
    }

    /// One page of the popular listing.
    ///
    /// # Errors
    ///
    /// Same failure surface as [`CatalogClient::search`].
    pub async fn popular(&self, page: u32) -> Result<MoviePage, CatalogError> {
        self.get_json("/movie/popular", &[("page", page.to_string())])
            .await
    }

    /// Full detail record for one movie.
    ///
    /// # Errors
    ///
    /// Same failure surface as [`CatalogClient::search`].
    pub async fn movie(&self, id: i64) -> Result<Movie, CatalogError> {
        self.get_json(&format!("/movie/{id}"), &[]).await
    }

    /// Detail records for a batch of IDs, fetched concurrently.
    ///
    /// Partial-failure tolerant: an ID the catalog cannot return is logged
    /// and dropped, and the successes come back in input order. A
    /// watchlist page renders what it can rather than failing wholesale
    /// because one title was delisted.
    pub async fn movies_by_ids(&self, ids: &[i64]) -> Vec<Movie> {
        if ids.is_empty() {
            return Vec::new();
        }

        let results = join_all(ids.iter().map(|&id| self.movie(id))).await;
        let mut movies = Vec::with_capacity(ids.len());
        for (&id, result) in ids.iter().zip(results) {
            match result {
                Ok(movie) => movies.push(movie),
                Err(e) => warn!(id, error = %e, "skipping movie the catalog could not return"),
            }
        }
        movies
    }

    /// Full image URL for a poster/backdrop path; a missing path maps to
    /// the placeholder asset.
    #[must_use]
    pub fn image_url(&self, path: Option<&str>, size: ImageSize) -> String {
        match path {
            Some(path) => format!("{}/{}{path}", self.config.image_base_url, size.as_str()),
            None => PLACEHOLDER_ASSET.to_owned(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.config.base_url, path);
        let response = self
            .http
            .get(url)
            .query(&[("api_key", self.config.api_key.as_str()), ("language", "en-US")])
            .query(params)
            .send()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?;
        if status != 200 {
            return Err(CatalogError::Api { status, body: text });
        }
        serde_json::from_str(&text).map_err(|e| CatalogError::Parse(e.to_string()))
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
