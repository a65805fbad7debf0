//! Catalog wire types and errors.
//!
//! Field names follow the TMDB response shapes byte for byte so the
//! structs deserialize straight off the wire.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The required API key environment variable is not set.
    #[error("TMDB API key is not configured: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to the catalog failed before a response arrived.
    #[error("catalog request failed: {0}")]
    Request(String),

    /// The catalog returned a non-success HTTP status.
    #[error("catalog API error: status {status}")]
    Api { status: u16, body: String },

    /// The catalog response body could not be deserialized.
    #[error("catalog response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// A movie record as returned by TMDB.
///
/// Search and popular listings carry `genre_ids`; the detail endpoint
/// carries embedded `genres` plus runtime, tagline, and the money fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre_ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<MovieGenre>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<u64>,
}

impl Movie {
    /// Genre names for display: embedded names when the record has them,
    /// otherwise the static table lookup over `genre_ids`.
    #[must_use]
    pub fn genre_names(&self) -> Vec<String> {
        if let Some(genres) = &self.genres {
            return genres.iter().map(|g| g.name.clone()).collect();
        }
        self.genre_ids
            .as_deref()
            .map(super::genres::genre_names)
            .unwrap_or_default()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }
}

/// Embedded genre on a detail record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieGenre {
    pub id: i64,
    pub name: String,
}

/// One page of search or popular results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviePage {
    pub page: u32,
    pub results: Vec<Movie>,
    pub total_pages: u32,
    pub total_results: u64,
}

impl MoviePage {
    /// The page returned for a blank query: empty, without a network call.
    #[must_use]
    pub fn empty() -> Self {
        Self { page: 1, results: Vec::new(), total_pages: 0, total_results: 0 }
    }
}

// =============================================================================
// IMAGE SIZES
// =============================================================================

/// TMDB image size segment used when building poster/backdrop URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageSize {
    W300,
    #[default]
    W500,
    Original,
}

impl ImageSize {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::W300 => "w300",
            Self::W500 => "w500",
            Self::Original => "original",
        }
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
