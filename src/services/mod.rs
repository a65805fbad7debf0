//! Domain services over the storage port.
//!
//! ARCHITECTURE
//! ============
//! Services own key layout and business rules so the presentation layer
//! only handles rendering and input plumbing. Each service touches its own
//! key namespace exclusively; the auth service's current-user email reaches
//! the watchlist service as a plain argument, never through shared keys.

pub mod auth;
pub mod watchlist;
