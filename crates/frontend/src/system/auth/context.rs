use leptos::prelude::*;
use std::sync::Arc;

use super::api::HttpAuthApi;
use super::navigator::BrowserNavigator;
use super::service::AuthService;
use super::session::SessionStore;
use super::storage::BrowserStorage;

/// Builds the browser-backed session and auth service and provides them
/// to the tree
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let store = SessionStore::new(Arc::new(BrowserStorage));
    let service = AuthService::new(
        store.clone(),
        Arc::new(HttpAuthApi::from_config()),
        Arc::new(BrowserNavigator),
    );
    provide_context(service);

    // Hydrate after the first render; guards show a placeholder until then
    Effect::new(move |_| store.hydrate());

    children()
}

/// Hook to access the auth service
pub fn use_auth() -> AuthService {
    use_context::<AuthService>().expect("AuthProvider not found in component tree")
}
