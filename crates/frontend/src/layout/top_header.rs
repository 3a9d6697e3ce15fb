//! Top bar: brand, current user, logout

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context::use_auth;

#[component]
pub fn TopHeader() -> impl IntoView {
    let auth = use_auth();
    let session = auth.store().session();

    let user_label = move || {
        session
            .get()
            .user
            .map(|u| match u.branch {
                Some(branch) => format!("{} · {}", u.display_name, branch),
                None => u.display_name,
            })
            .unwrap_or_default()
    };

    let logout = move |_| {
        let auth = auth.clone();
        spawn_local(async move {
            auth.logout().await;
        });
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Toko Bahan"</span>
            </div>
            <div class="top-header__actions">
                <span class="top-header__user">{user_label}</span>
                <button class="top-header__icon-btn" on:click=logout>
                    "Keluar"
                </button>
            </div>
        </div>
    }
}
