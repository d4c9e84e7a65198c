//! Shared UI for the staff dashboard: routes, session context, access guard
//! and the admin and employee views. The `web` and `desktop` crates only
//! launch it.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod session;
pub use session::make_session_store;

mod auth;
pub use auth::{use_api, use_auth, use_gateway, AuthProvider, LoginForm, LogoutButton};

mod guard;
pub use guard::{LoadingScreen, Protected};

mod routes;
pub use routes::Route;

mod sidebar;
pub use sidebar::{menu_for, MenuIcon, MenuItem, Sidebar};

pub mod views;
