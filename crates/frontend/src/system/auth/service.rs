use contracts::system::auth::{LoginRequest, UserProfile};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::api::AuthApi;
use super::error::AuthError;
use super::navigator::Navigator;
use super::profile::{minimal_profile, normalize_profile};
use super::session::SessionStore;
use crate::routes::table::LOGIN_PATH;

/// Login/logout against the backend; the only writer of the [`SessionStore`].
///
/// Each login and logout takes a ticket from `epoch`. A login only commits if
/// its ticket is still the latest when the responses arrive.
#[derive(Clone)]
pub struct AuthService {
    store: SessionStore,
    api: Arc<dyn AuthApi>,
    navigator: Arc<dyn Navigator>,
    epoch: Arc<AtomicU64>,
}

impl AuthService {
    pub fn new(store: SessionStore, api: Arc<dyn AuthApi>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            store,
            api,
            navigator,
            epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    fn next_ticket(&self) -> u64 {
        self.epoch.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.epoch.load(Ordering::SeqCst) == ticket
    }

    /// Exchange credentials for a session.
    ///
    /// On failure the session store is left as it was.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserProfile, AuthError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let ticket = self.next_ticket();
        self.store.set_loading(true);

        let result = self.authenticate(username, password).await;

        if !self.is_current(ticket) {
            log::info!("discarding stale login response for '{}'", username);
            return Err(AuthError::Superseded);
        }

        match result {
            Ok((token, profile)) => {
                log::info!("logged in as '{}' ({})", profile.username, profile.role);
                self.store.set(token, profile.clone());
                Ok(profile)
            }
            Err(e) => {
                log::warn!("login failed for '{}': {}", username, e);
                // Only the latest login owns the flag; before hydration it stays up
                self.store.set_loading(!self.store.is_hydrated());
                Err(e)
            }
        }
    }

    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(String, UserProfile), AuthError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let token = self.api.exchange_credentials(&request).await?;

        // Credentials are accepted at this point; a missing profile must not undo that
        let profile = match self.api.fetch_profile(&token).await {
            Ok(raw) => normalize_profile(raw, username),
            Err(e) => {
                log::warn!("profile fetch failed, using minimal profile: {}", e);
                minimal_profile(username)
            }
        };

        Ok((token, profile))
    }

    /// End the session locally, whatever the server says, then go to login.
    pub async fn logout(&self) {
        self.next_ticket();

        if let Some(token) = self.store.get().token {
            if let Err(e) = self.api.invalidate(&token).await {
                log::warn!("server-side logout failed: {}", e);
            }
        }

        self.store.clear();
        log::info!("logged out");
        self.navigator.replace(LOGIN_PATH);
    }
}
