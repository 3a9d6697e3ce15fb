//! Route guards
//!
//! Decisions are computed by pure functions over a [`Session`] snapshot; the
//! components only render what the decision says.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;
use leptos_router::NavigateOptions;

use super::context::use_auth;
use super::roles::{landing_for, RoleSet};
use super::session::Session;
use crate::routes::table::{canonical_path, LOGIN_PATH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not hydrated yet; render a placeholder and do not navigate
    Pending,
    Allow,
    Redirect(String),
    /// Denied, and the fallback is the page being viewed
    Denied,
}

/// Outer guard: is anyone logged in?
pub fn authentication_decision(session: &Session) -> GuardDecision {
    if session.is_loading {
        GuardDecision::Pending
    } else if session.token.is_none() {
        GuardDecision::Redirect(LOGIN_PATH.to_string())
    } else {
        GuardDecision::Allow
    }
}

/// Inner guard: is the user's role in `allowed`?
pub fn role_decision(
    session: &Session,
    allowed: RoleSet,
    fallback_path: Option<&str>,
) -> GuardDecision {
    if session.is_loading {
        return GuardDecision::Pending;
    }
    match &session.user {
        None => GuardDecision::Redirect(LOGIN_PATH.to_string()),
        Some(user) if allowed.contains(&user.role) => GuardDecision::Allow,
        Some(user) => GuardDecision::Redirect(
            fallback_path
                .unwrap_or_else(|| landing_for(&user.role))
                .to_string(),
        ),
    }
}

/// Authentication first; role evaluation only for authenticated sessions
pub fn guarded_decision(
    session: &Session,
    allowed: RoleSet,
    fallback_path: Option<&str>,
) -> GuardDecision {
    match authentication_decision(session) {
        GuardDecision::Allow => role_decision(session, allowed, fallback_path),
        other => other,
    }
}

/// Where `/` and unknown paths go
pub fn root_decision(session: &Session) -> GuardDecision {
    if session.is_loading {
        return GuardDecision::Pending;
    }
    match &session.user {
        None => GuardDecision::Redirect(LOGIN_PATH.to_string()),
        Some(user) => GuardDecision::Redirect(landing_for(&user.role).to_string()),
    }
}

/// Turn a redirect to `current_path` itself into [`GuardDecision::Denied`]
pub fn avoid_self_redirect(decision: GuardDecision, current_path: &str) -> GuardDecision {
    match decision {
        GuardDecision::Redirect(target)
            if canonical_path(&target) == canonical_path(current_path) =>
        {
            log::warn!("access to {} denied and no other landing page", target);
            GuardDecision::Denied
        }
        other => other,
    }
}

fn render_decision(decision: GuardDecision, children: Option<&ChildrenFn>) -> AnyView {
    match decision {
        GuardDecision::Pending => view! { <LoadingPlaceholder /> }.into_any(),
        GuardDecision::Redirect(path) => {
            log::debug!("guard redirect -> {}", path);
            let options = NavigateOptions {
                replace: true,
                ..Default::default()
            };
            view! { <Redirect path=path options=options /> }.into_any()
        }
        GuardDecision::Denied => view! { <AccessDenied /> }.into_any(),
        GuardDecision::Allow => match children {
            Some(children) => children(),
            None => ().into_any(),
        },
    }
}

#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! { <div class="loading-placeholder">"Memuat..."</div> }
}

#[component]
pub fn AccessDenied() -> impl IntoView {
    view! {
        <div class="error-message">"Anda tidak memiliki akses ke halaman ini."</div>
    }
}

/// Renders children only for a logged-in session
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_auth().store().session();
    let location = use_location();
    move || {
        render_decision(
            avoid_self_redirect(
                authentication_decision(&session.get()),
                &location.pathname.get(),
            ),
            Some(&children),
        )
    }
}

/// Renders children only when the user's role is in `allowed_roles`.
/// Must sit inside [`RequireAuth`].
#[component]
pub fn RequireRole(
    allowed_roles: RoleSet,
    #[prop(optional, into)] fallback_path: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = use_auth().store().session();
    let location = use_location();
    move || {
        render_decision(
            avoid_self_redirect(
                role_decision(&session.get(), allowed_roles, fallback_path.as_deref()),
                &location.pathname.get(),
            ),
            Some(&children),
        )
    }
}

/// Sends the user to their landing page, or to login
#[component]
pub fn RoleRedirect() -> impl IntoView {
    let session = use_auth().store().session();
    let location = use_location();
    move || {
        render_decision(
            avoid_self_redirect(root_decision(&session.get()), &location.pathname.get()),
            None,
        )
    }
}
