use crate::api;
use crate::config;
use dioxus::prelude::*;
use shelter_auth::{LoginResponse, SessionState, SessionStorage, UserProfile};

/// Current session, observed by the app shell
pub static SESSION: GlobalSignal<SessionState> = Signal::global(|| SessionState::Anonymous);

fn storage() -> SessionStorage {
    SessionStorage::new(&config::get().data_dir)
}

/// Restores a persisted session at startup.
pub fn restore() {
    if let Some((token, user)) = storage().load() {
        log::info!("Restored session for {}", user.email);
        api::set_token(Some(token.clone()));
        *SESSION.write() = SessionState::Authenticated { token, user };
    }
}

/// Persists the token and profile and flips the app to authenticated.
pub fn login(response: LoginResponse) {
    if let Err(e) = storage().save(&response.token, &response.user) {
        log::warn!("Could not persist session: {}", e);
    }
    api::set_token(Some(response.token.clone()));
    *SESSION.write() = SessionState::Authenticated {
        token: response.token,
        user: response.user,
    };
}

/// Clears storage and returns the app to the login screen.
pub fn logout() {
    if let Err(e) = storage().clear() {
        log::warn!("Could not clear session storage: {}", e);
    }
    api::set_token(None);
    *SESSION.write() = SessionState::Anonymous;
}

/// Logout forced by a 401/403 response. Safe to hit from several
/// failing requests at once.
pub fn force_logout() {
    if SESSION.peek().is_authenticated() {
        log::warn!("Session rejected by the backend, signing out");
        logout();
    }
}

pub fn current_user() -> Option<UserProfile> {
    SESSION.read().user().cloned()
}
