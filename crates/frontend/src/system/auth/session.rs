use contracts::system::auth::UserProfile;
use leptos::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::roles::normalize_role;
use super::storage::{SessionStorage, LEGACY_ROLE_KEY, TOKEN_KEY, USER_KEY};

/// Snapshot of who is logged in.
///
/// `token` and `user` are always both set or both empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
    pub is_loading: bool,
}

impl Session {
    /// State before hydration has run
    fn initial() -> Self {
        Self {
            token: None,
            user: None,
            is_loading: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn role(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.role.as_str())
    }
}

/// Process-wide session state backed by persistent storage.
///
/// Cloning shares the same state. Only [`super::service::AuthService`] calls
/// `set`/`clear`; views read through `get` or the reactive `session` signal.
#[derive(Clone)]
pub struct SessionStore {
    state: ArcRwSignal<Session>,
    storage: Arc<dyn SessionStorage>,
    hydrated: Arc<AtomicBool>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            state: ArcRwSignal::new(Session::initial()),
            storage,
            hydrated: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Restore the session from storage. Runs once; later calls are ignored.
    pub fn hydrate(&self) {
        if self.hydrated.swap(true, Ordering::SeqCst) {
            log::debug!("session already hydrated");
            return;
        }

        // The role lives inside the profile; drop the stale duplicate
        self.storage.remove_item(LEGACY_ROLE_KEY);

        let token = self.storage.get_item(TOKEN_KEY).filter(|t| !t.is_empty());
        let user = self
            .storage
            .get_item(USER_KEY)
            .and_then(|raw| match serde_json::from_str::<UserProfile>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    log::warn!("stored profile is unreadable, ignoring: {}", e);
                    None
                }
            });

        let next = match (token, user) {
            (Some(token), Some(mut user)) => {
                user.role = normalize_role(&user.role);
                log::info!("session restored for '{}'", user.username);
                Session {
                    token: Some(token),
                    user: Some(user),
                    is_loading: false,
                }
            }
            _ => Session {
                token: None,
                user: None,
                is_loading: false,
            },
        };
        self.state.set(next);
    }

    pub fn get(&self) -> Session {
        self.state.get_untracked()
    }

    /// Reactive view of the session for components
    pub fn session(&self) -> ArcRwSignal<Session> {
        self.state.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with_untracked(Session::is_authenticated)
    }

    /// Persist and publish a logged-in session
    pub fn set(&self, token: String, user: UserProfile) {
        match serde_json::to_string(&user) {
            Ok(json) => {
                self.storage.set_item(TOKEN_KEY, &token);
                self.storage.set_item(USER_KEY, &json);
            }
            Err(e) => log::error!("failed to serialize profile: {}", e),
        }
        self.state.set(Session {
            token: Some(token),
            user: Some(user),
            is_loading: false,
        });
    }

    /// Drop the persisted and in-memory session. Safe to call when empty.
    pub fn clear(&self) {
        self.storage.remove_item(TOKEN_KEY);
        self.storage.remove_item(USER_KEY);
        self.storage.remove_item(LEGACY_ROLE_KEY);
        self.state.set(Session {
            token: None,
            user: None,
            is_loading: false,
        });
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated.load(Ordering::SeqCst)
    }

    pub(crate) fn set_loading(&self, is_loading: bool) {
        self.state.update(|s| s.is_loading = is_loading);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::storage::MemoryStorage;

    fn owner() -> UserProfile {
        UserProfile {
            id: Some("7".into()),
            username: "budi".into(),
            display_name: "Budi Santoso".into(),
            role: "owner".into(),
            branch: Some("Cabang Utama".into()),
        }
    }

    #[test]
    fn test_new_store_is_loading() {
        let store = SessionStore::new(Arc::new(MemoryStorage::new()));
        let s = store.get();
        assert!(s.is_loading);
        assert!(!s.is_authenticated());
    }

    #[test]
    fn test_hydrate_empty_storage() {
        let store = SessionStore::new(Arc::new(MemoryStorage::new()));
        store.hydrate();
        let s = store.get();
        assert!(!s.is_loading);
        assert!(!s.is_authenticated());
    }

    #[test]
    fn test_hydrate_restores_pair() {
        let json = serde_json::to_string(&owner()).unwrap();
        let storage = MemoryStorage::with_items([(TOKEN_KEY, "tok-1"), (USER_KEY, json.as_str())]);
        let store = SessionStore::new(Arc::new(storage));
        store.hydrate();
        let s = store.get();
        assert!(s.is_authenticated());
        assert_eq!(s.token.as_deref(), Some("tok-1"));
        assert_eq!(s.role(), Some("owner"));
    }

    #[test]
    fn test_hydrate_unparsable_profile_is_unauthenticated() {
        let storage = MemoryStorage::with_items([(TOKEN_KEY, "tok-1"), (USER_KEY, "{not json")]);
        let store = SessionStore::new(Arc::new(storage));
        store.hydrate();
        let s = store.get();
        assert!(!s.is_loading);
        assert!(s.token.is_none());
        assert!(s.user.is_none());
    }

    #[test]
    fn test_hydrate_token_without_profile() {
        let storage = MemoryStorage::with_items([(TOKEN_KEY, "tok-1")]);
        let store = SessionStore::new(Arc::new(storage));
        store.hydrate();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_hydrate_drops_legacy_role_key() {
        let storage = Arc::new(MemoryStorage::with_items([(LEGACY_ROLE_KEY, "admin")]));
        let store = SessionStore::new(storage.clone());
        store.hydrate();
        assert!(storage.get_item(LEGACY_ROLE_KEY).is_none());
    }

    #[test]
    fn test_hydrate_runs_once() {
        let storage = Arc::new(MemoryStorage::new());
        let store = SessionStore::new(storage.clone());
        store.hydrate();
        let json = serde_json::to_string(&owner()).unwrap();
        storage.set_item(TOKEN_KEY, "late");
        storage.set_item(USER_KEY, &json);
        store.hydrate();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_set_persists_and_clear_removes() {
        let storage = Arc::new(MemoryStorage::new());
        let store = SessionStore::new(storage.clone());
        store.hydrate();

        store.set("tok-2".into(), owner());
        assert!(store.is_authenticated());
        assert_eq!(storage.get_item(TOKEN_KEY).as_deref(), Some("tok-2"));
        let persisted: UserProfile =
            serde_json::from_str(&storage.get_item(USER_KEY).unwrap()).unwrap();
        assert_eq!(persisted, owner());

        store.clear();
        assert!(!store.is_authenticated());
        assert!(storage.is_empty());

        // idempotent
        store.clear();
        assert!(storage.is_empty());
        assert!(!store.get().is_loading);
    }

    #[test]
    fn test_clones_share_state() {
        let store = SessionStore::new(Arc::new(MemoryStorage::new()));
        let other = store.clone();
        store.hydrate();
        store.set("tok".into(), owner());
        assert!(other.is_authenticated());
    }
}
