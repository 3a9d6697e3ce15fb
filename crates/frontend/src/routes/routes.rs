use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::{StaticSegment, WildcardSegment};

use crate::system::auth::guard::{RequireAuth, RequireRole, RoleRedirect};
use crate::system::auth::roles::{ADMIN_AREA, OWNER_AREA};
use crate::system::pages::console::ConsolePage;
use crate::system::pages::login::LoginPage;

#[component]
fn OwnerArea() -> impl IntoView {
    view! {
        <RequireAuth>
            <RequireRole allowed_roles=OWNER_AREA>
                <ConsolePage />
            </RequireRole>
        </RequireAuth>
    }
}

#[component]
fn AdminArea() -> impl IntoView {
    view! {
        <RequireAuth>
            <RequireRole allowed_roles=ADMIN_AREA>
                <ConsolePage />
            </RequireRole>
        </RequireAuth>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <RoleRedirect /> }>
                <Route path=StaticSegment("login") view=LoginPage />
                <Route path=StaticSegment("") view=RoleRedirect />
                <Route path=(StaticSegment("owner"), WildcardSegment("rest")) view=OwnerArea />
                <Route path=(StaticSegment("admin"), WildcardSegment("rest")) view=AdminArea />
            </Routes>
        </Router>
    }
}
