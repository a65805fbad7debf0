//! Local credential registry and session pointer.
//!
//! DESIGN
//! ======
//! Accounts live in one JSON array under `movieTrack.users`; the logged-in
//! identity is a separate pointer under `movieTrack.currentUser`. One
//! session per storage instance, restored on startup by resolving the
//! pointer once.
//!
//! Passwords are stored in plaintext. This is a local-only, demo-grade
//! sign-in, not a trust boundary; hashing is an explicit non-goal.

use serde::{Deserialize, Serialize};

use crate::storage::LocalStore;

const USERS_KEY: &str = "movieTrack.users";
const CURRENT_USER_KEY: &str = "movieTrack.currentUser";

// =============================================================================
// TYPES
// =============================================================================

/// Registry entry. Created on signup, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredUser {
    pub email: String,
    pub password: String,
}

/// The logged-in identity persisted as the session pointer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub email: String,
}

/// Authentication business errors. Always recovered into a user-facing
/// message by the caller; they never tear down a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Signup hit an existing account with the same email, any casing.
    #[error("an account with this email already exists")]
    DuplicateAccount,

    /// Login found no account matching both email and password.
    #[error("invalid email or password")]
    InvalidCredentials,
}

// =============================================================================
// REGISTRY
// =============================================================================

fn stored_users(store: &LocalStore) -> Vec<StoredUser> {
    store.read(USERS_KEY).unwrap_or_default()
}

fn set_session(store: &LocalStore, user: &AuthUser) {
    store.write(CURRENT_USER_KEY, user);
}

/// Create an account and sign it in.
///
/// # Errors
///
/// [`AuthError::DuplicateAccount`] when the email already exists under
/// case-insensitive comparison; the registry is left unchanged.
pub fn signup(store: &LocalStore, email: &str, password: &str) -> Result<AuthUser, AuthError> {
    let mut users = stored_users(store);
    if users.iter().any(|u| u.email.eq_ignore_ascii_case(email)) {
        return Err(AuthError::DuplicateAccount);
    }

    users.push(StoredUser { email: email.to_owned(), password: password.to_owned() });
    store.write(USERS_KEY, &users);

    let user = AuthUser { email: email.to_owned() };
    set_session(store, &user);
    Ok(user)
}

/// Sign in an existing account.
///
/// Email comparison folds case; the password must match exactly. The
/// session pointer takes the email casing as stored at signup, not as
/// typed now.
///
/// # Errors
///
/// [`AuthError::InvalidCredentials`] when no entry matches; no session is
/// set.
pub fn login(store: &LocalStore, email: &str, password: &str) -> Result<AuthUser, AuthError> {
    let users = stored_users(store);
    let matched = users
        .iter()
        .find(|u| u.email.eq_ignore_ascii_case(email) && u.password == password)
        .ok_or(AuthError::InvalidCredentials)?;

    let user = AuthUser { email: matched.email.clone() };
    set_session(store, &user);
    Ok(user)
}

/// Drop the session pointer. The registry is untouched.
pub fn logout(store: &LocalStore) {
    store.remove(CURRENT_USER_KEY);
}

/// The persisted session, if any. A missing or malformed pointer (corrupt
/// JSON, empty email) reads as anonymous.
#[must_use]
pub fn current_user(store: &LocalStore) -> Option<AuthUser> {
    store
        .read::<AuthUser>(CURRENT_USER_KEY)
        .filter(|user| !user.email.is_empty())
}

// =============================================================================
// SESSION STATE
// =============================================================================

/// Session pointer as seen by the presentation layer.
///
/// `Unresolved` is the cold-start state before the pointer has been read;
/// callers that redirect anonymous users must wait for resolution so a
/// signed-in user is not bounced to the login page during startup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Pointer not read yet.
    #[default]
    Unresolved,
    /// Pointer read; nobody is signed in.
    Anonymous,
    /// Pointer read; this user is signed in.
    Authenticated(AuthUser),
}

impl SessionState {
    /// Read the pointer once and classify it.
    #[must_use]
    pub fn resolve(store: &LocalStore) -> Self {
        match current_user(store) {
            Some(user) => Self::Authenticated(user),
            None => Self::Anonymous,
        }
    }

    /// Whether the pointer has been checked at all.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unresolved)
    }

    /// The signed-in user, if resolved and authenticated.
    #[must_use]
    pub fn user(&self) -> Option<&AuthUser> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
