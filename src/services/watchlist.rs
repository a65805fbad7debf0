//! Per-user watchlist service.
//!
//! DESIGN
//! ======
//! Each user's watchlist is one JSON array of movie IDs under
//! `movieTrack.watchlist.<lowercased-email>`, read and replaced whole.
//! De-duplication is enforced on every write, so repeated `add` calls can
//! never grow the stored list. Ordering is first-occurrence order of
//! survivors and nothing more; callers must not read meaning into it.
//!
//! Concurrent writers (another tab on the same profile) are not
//! coordinated: both read, both write, last full-list write wins. Accepted
//! limitation of the storage model.

use serde_json::Value;

use crate::storage::LocalStore;

const KEY_PREFIX: &str = "movieTrack.watchlist.";

/// Result of [`toggle`]: the list after the flip and which way it went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// Watchlist after the toggle.
    pub watchlist: Vec<i64>,
    /// `true` when the movie was added, `false` when it was removed.
    pub added: bool,
}

fn storage_key(email: &str) -> String {
    format!("{KEY_PREFIX}{}", email.to_lowercase())
}

fn dedupe(ids: &[i64]) -> Vec<i64> {
    let mut seen = Vec::with_capacity(ids.len());
    for &id in ids {
        if !seen.contains(&id) {
            seen.push(id);
        }
    }
    seen
}

/// The user's stored watchlist, or empty when absent or corrupt.
///
/// Deserializes defensively: a stored array may have picked up non-integer
/// junk from an older writer, so elements are filtered rather than letting
/// one bad entry void the whole list.
#[must_use]
pub fn get(store: &LocalStore, email: &str) -> Vec<i64> {
    store
        .read::<Vec<Value>>(&storage_key(email))
        .map(|raw| raw.iter().filter_map(Value::as_i64).collect())
        .unwrap_or_default()
}

/// Replace the user's watchlist. Input is de-duplicated (first occurrence
/// wins) before the write.
pub fn set(store: &LocalStore, email: &str, ids: &[i64]) {
    store.write(&storage_key(email), &dedupe(ids));
}

/// Add a movie, returning the resulting list. Already-present IDs are a
/// no-op with no write.
pub fn add(store: &LocalStore, email: &str, id: i64) -> Vec<i64> {
    let mut current = get(store, email);
    if !current.contains(&id) {
        current.push(id);
        set(store, email, &current);
    }
    current
}

/// Remove a movie, returning the resulting list. Removing a non-member
/// persists the unchanged list; harmless.
pub fn remove(store: &LocalStore, email: &str, id: i64) -> Vec<i64> {
    let current: Vec<i64> = get(store, email).into_iter().filter(|&v| v != id).collect();
    set(store, email, &current);
    current
}

/// Membership test against the stored list.
#[must_use]
pub fn contains(store: &LocalStore, email: &str, id: i64) -> bool {
    get(store, email).contains(&id)
}

/// Flip membership of `id` from one read of the current list.
///
/// The single read decides the direction, so a toggle never turns into an
/// add-then-remove pair within this call.
pub fn toggle(store: &LocalStore, email: &str, id: i64) -> ToggleOutcome {
    let added = !contains(store, email, id);
    let watchlist = if added {
        add(store, email, id)
    } else {
        remove(store, email, id)
    };
    ToggleOutcome { watchlist, added }
}

/// Delete the user's watchlist key outright. Observably the same as
/// writing `[]`, but this is the explicit reset.
pub fn clear(store: &LocalStore, email: &str) {
    store.remove(&storage_key(email));
}

#[cfg(test)]
#[path = "watchlist_test.rs"]
mod tests;
