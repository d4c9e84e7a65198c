use api::{GuardAction, GuardState};
use dioxus::prelude::*;
use store::Role;

use crate::{use_auth, Route};

/// Renders `children` only for a resolved session with the `required` role.
///
/// The decision is recomputed whenever the session signal changes, so a logout
/// or an expired token while the view is mounted redirects right away.
#[component]
pub fn Protected(required: Option<Role>, children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        if let GuardAction::Redirect(destination) =
            GuardState::evaluate(&auth.read(), required).action()
        {
            tracing::debug!(path = destination.path(), "guard redirect");
            nav.replace(Route::from(destination));
        }
    });

    let view = match GuardState::evaluate(&auth.read(), required).action() {
        GuardAction::Render => children,
        GuardAction::Wait | GuardAction::Redirect(_) => rsx! { LoadingScreen {} },
    };
    view
}

#[component]
pub fn LoadingScreen() -> Element {
    rsx! {
        div {
            class: "loading-screen",
            div { class: "spinner" }
        }
    }
}
