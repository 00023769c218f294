//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route guard, the nav bar, and every page that needs the
//! current user. Token and user live in one [`Session`] value, so they are
//! always set and cleared together; persistence writes both keys in one step.
//!
//! TRADE-OFFS
//! ==========
//! A failed login leaves any previous session untouched rather than clearing
//! it, so an errant resubmission cannot sign the user out.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::storage::SessionStorage;
use crate::config::{TOKEN_STORAGE_KEY, USER_STORAGE_KEY};
use crate::net::types::{AuthResponse, User};

/// An authenticated session: bearer token plus the user it belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Coarse lifecycle phase derived from [`AuthState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    Anonymous,
    Authenticating,
    Authenticated,
}

/// Authentication state shared through context as `RwSignal<AuthState>`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// A login or register request is in flight.
    pub authenticating: bool,
}

impl AuthState {
    /// Restore the session persisted by a previous page load.
    ///
    /// Missing or unparsable entries yield an anonymous state; a leftover
    /// half of a session is removed from storage.
    pub fn rehydrate(storage: &dyn SessionStorage) -> Self {
        let token = storage.get(TOKEN_STORAGE_KEY).filter(|t| !t.is_empty());
        let raw_user = storage.get(USER_STORAGE_KEY);
        let had_entries = token.is_some() || raw_user.is_some();

        let user = raw_user.and_then(|raw| match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("discarding unreadable persisted user: {e}");
                None
            }
        });

        match (token, user) {
            (Some(token), Some(user)) => {
                log::debug!("restored session for {}", user.email);
                Self { session: Some(Session { token, user }), authenticating: false }
            }
            _ => {
                if had_entries {
                    persist(storage, None);
                }
                Self::default()
            }
        }
    }

    pub fn phase(&self) -> AuthPhase {
        if self.authenticating {
            AuthPhase::Authenticating
        } else if self.session.is_some() {
            AuthPhase::Authenticated
        } else {
            AuthPhase::Anonymous
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn is_broker(&self) -> bool {
        self.user().is_some_and(|u| u.is_broker)
    }

    /// Login or register submitted.
    pub fn begin_authenticating(&mut self) {
        self.authenticating = true;
    }

    /// Login or register failed; nothing is written.
    pub fn fail_authenticating(&mut self) {
        self.authenticating = false;
    }

    /// Login or register succeeded: replace the session and persist it.
    pub fn apply_auth_response(&mut self, response: AuthResponse, storage: &dyn SessionStorage) {
        let session = Session { token: response.token, user: response.user };
        persist(storage, Some(&session));
        self.session = Some(session);
        self.authenticating = false;
    }

    /// Replace the signed-in user without touching the token.
    ///
    /// Does nothing when no one is signed in.
    pub fn update_user(&mut self, user: User, storage: &dyn SessionStorage) {
        let Some(session) = self.session.as_mut() else {
            log::debug!("ignoring user update without a session");
            return;
        };
        session.user = user;
        persist(storage, Some(&*session));
    }

    /// Drop the local session and its persisted copy.
    pub fn logout(&mut self, storage: &dyn SessionStorage) {
        self.session = None;
        self.authenticating = false;
        persist(storage, None);
    }
}

/// Write both session keys, or remove both.
fn persist(storage: &dyn SessionStorage, session: Option<&Session>) {
    let serialized = session.map(|s| (s.token.as_str(), serde_json::to_string(&s.user)));
    match serialized {
        Some((token, Ok(user_json))) => {
            storage.set(TOKEN_STORAGE_KEY, token);
            storage.set(USER_STORAGE_KEY, &user_json);
        }
        Some((_, Err(e))) => {
            log::warn!("could not serialize user; clearing persisted session: {e}");
            storage.remove(TOKEN_STORAGE_KEY);
            storage.remove(USER_STORAGE_KEY);
        }
        None => {
            storage.remove(TOKEN_STORAGE_KEY);
            storage.remove(USER_STORAGE_KEY);
        }
    }
}
