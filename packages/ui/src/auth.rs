//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] owns the only [`SessionStore`] of the app and mirrors its
//! state into a `Signal<SessionState>`, which is what views and guards read.
//! The signal is refreshed after every store mutation: login, logout, and the
//! client's session-expired hook after a rejected token.

use api::{ApiClient, AuthGateway, Settings};
use dioxus::prelude::*;
use store::{Role, SessionState, SessionStore};
use tracing::{error, info, warn};

use crate::session::make_session_store;
use crate::Route;

#[derive(Clone)]
struct Backend {
    client: ApiClient,
    gateway: AuthGateway,
}

/// Current session state. Re-renders subscribers on login and logout.
pub fn use_auth() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Client for authenticated calls; a 401 signs the user out everywhere.
pub fn use_api() -> ApiClient {
    use_context::<Backend>().client
}

pub fn use_gateway() -> AuthGateway {
    use_context::<Backend>().gateway
}

/// Provider component that manages authentication state.
/// Wrap the router with it.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth_state = use_context_provider(|| Signal::new(SessionState::default()));

    let backend = use_context_provider(|| {
        let settings = Settings::load();
        info!(api = %settings.api.url, "backend configured");
        let store = make_session_store();
        let watched = store.clone();
        let client = ApiClient::from_settings(&settings, store).on_session_expired(move || {
            warn!("session expired, returning to login");
            let mut state = auth_state;
            state.set(watched.get());
        });
        let gateway = AuthGateway::new(client.clone(), settings.auth.role_source());
        Backend { client, gateway }
    });

    // Restore after the first render so `loading` is observed as true first.
    let store: SessionStore = backend.client.session().clone();
    use_effect(move || {
        let mut state = auth_state;
        state.set(store.initialize());
    });

    rsx! {
        {children}
    }
}

/// Username/password form. On success navigates to the role's dashboard.
#[component]
pub fn LoginForm() -> Element {
    let mut auth = use_auth();
    let gateway = use_gateway();
    let nav = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut failure = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();
        let gateway = gateway.clone();
        async move {
            submitting.set(true);
            failure.set(None);
            match gateway.login(&username(), &password()).await {
                Ok(role) => {
                    auth.set(gateway.session().get());
                    password.set(String::new());
                    nav.replace(home_route(role));
                }
                Err(e) => {
                    error!(error = %e, "login failed");
                    failure.set(Some(e.message()));
                }
            }
            submitting.set(false);
        }
    };

    rsx! {
        form {
            class: "login-form",
            onsubmit: onsubmit,

            if let Some(message) = failure() {
                div { class: "alert alert-error", "{message}" }
            }

            label { r#for: "username", "Username" }
            input {
                id: "username",
                r#type: "text",
                autocomplete: "username",
                value: "{username}",
                oninput: move |e| username.set(e.value()),
            }

            label { r#for: "password", "Password" }
            input {
                id: "password",
                r#type: "password",
                autocomplete: "current-password",
                value: "{password}",
                oninput: move |e| password.set(e.value()),
            }

            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: submitting(),
                if submitting() { "Signing in..." } else { "Sign in" }
            }
        }
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth = use_auth();
    let gateway = use_gateway();
    let nav = use_navigator();

    let onclick = move |_: MouseEvent| {
        if let Err(e) = gateway.logout() {
            warn!(error = %e, "session removed from memory but not from storage");
        }
        auth.set(gateway.session().get());
        nav.replace(Route::Login {});
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

pub(crate) fn home_route(role: Role) -> Route {
    Route::from(api::Destination::Home(role))
}
