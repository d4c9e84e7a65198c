//! Public entry views.

use api::{entry_redirect, EntryView};
use dioxus::prelude::*;

use crate::{use_auth, LoadingScreen, LoginForm, Route};

/// `/` forwards to the role dashboard or to the login view.
#[component]
pub fn Root() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        if let Some(destination) = entry_redirect(&auth.read(), EntryView::Root) {
            nav.replace(Route::from(destination));
        }
    });

    rsx! { LoadingScreen {} }
}

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    // Already signed in: go straight to the dashboard.
    use_effect(move || {
        if let Some(destination) = entry_redirect(&auth.read(), EntryView::Login) {
            nav.replace(Route::from(destination));
        }
    });

    if auth.read().loading {
        return rsx! { LoadingScreen {} };
    }

    rsx! {
        div {
            class: "login-page",
            div {
                class: "login-card",
                h1 { "Employee Management" }
                p { class: "muted", "Sign in to your account" }
                LoginForm {}
            }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "login-page",
            div {
                class: "login-card",
                h1 { "Page not found" }
                p { class: "muted", "/{path}" }
                Link { to: Route::Root {}, class: "btn btn-primary", "Back to dashboard" }
            }
        }
    }
}
