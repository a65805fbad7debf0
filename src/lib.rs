//! movietrack — core of a local-first movie watchlist application.
//!
//! ARCHITECTURE
//! ============
//! Three layers, leaves first: a [`storage`] port over a synchronous
//! key-value substrate (the browser's local storage, or an in-memory fake),
//! the [`services`] built on it (per-user watchlists, credential registry
//! and session pointer), and the [`catalog`] client that fetches movie data
//! from TMDB. Services never read each other's keys; the current user's
//! email is passed in by the caller.
//!
//! TRADE-OFFS
//! ==========
//! Storage is fail-soft: corrupt or missing local state degrades to empty
//! defaults with a `tracing` warning, because a broken list must never take
//! down the UI. Catalog errors are the opposite — surfaced to the caller
//! untouched so it can offer a retry.

pub mod catalog;
pub mod services;
pub mod storage;

pub use catalog::{CatalogClient, CatalogConfig, CatalogError};
pub use services::auth::{AuthError, AuthUser, SessionState, StoredUser};
pub use services::watchlist::ToggleOutcome;
pub use storage::{LocalStore, MemoryBackend, StorageBackend};
