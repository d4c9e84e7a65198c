//! # API crate: backend access for the staff dashboard
//!
//! Everything the dashboards need to talk to the HR backend, independent of the
//! UI toolkit so it can be tested with a fake transport.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | [`AuthGateway`]: credential exchange, role resolution, logout |
//! | [`client`] | [`ApiClient`]: attaches the session token, reacts to 401 |
//! | [`endpoints`] | Typed admin, employee and invitation routes |
//! | [`error`] | [`ApiError`] and the backend error-body parser |
//! | [`guard`] | Pure access-guard state machine and entry redirects |
//! | [`models`] | Wire types (employees, attendance, salary, invitations) |
//! | [`settings`] | Backend URL and role-source configuration |
//! | [`transport`] | The [`Transport`] seam and its `reqwest` implementation |
//!
//! ## Flow
//!
//! ```text
//! AuthGateway::login ──► SessionStore::set
//!                              │
//!         guard::GuardState ◄──┤ (every session change)
//!                              │
//!         ApiClient::dispatch ◄┘ (every request: read token, 401 ⇒ clear)
//! ```

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod guard;
pub mod models;
pub mod settings;
pub mod transport;

#[cfg(test)]
mod test_support;

pub use auth::{AuthGateway, RoleSource};
pub use client::{ApiClient, LOGIN_PATH};
pub use endpoints::{AdminApi, EmployeeApi, InvitationApi};
pub use error::{ApiError, Result};
pub use guard::{entry_redirect, Destination, EntryView, GuardAction, GuardState};
pub use settings::Settings;
pub use transport::{HttpRequest, HttpResponse, RequestBody, ReqwestTransport, Transport};

pub use store::{Role, Session, SessionState, SessionStore};
