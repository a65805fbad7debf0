//! Movie catalog client — TMDB search, details, and image URLs.
//!
//! DESIGN
//! ======
//! The catalog is an external collaborator: this module owns the wire
//! types, the HTTP plumbing, and the static genre table, nothing else.
//! Errors here are surfaced to the caller as-is (no retries) so the
//! presentation layer can show a retry affordance; contrast with the
//! storage layer, which absorbs its failures.

pub mod client;
pub mod config;
pub mod genres;
pub mod types;

pub use client::CatalogClient;
pub use config::CatalogConfig;
pub use genres::{genre_name, genre_names};
pub use types::{CatalogError, ImageSize, Movie, MovieGenre, MoviePage};
