//! Typed wrappers around the backend routes, grouped by who may call them.
//!
//! | Group | Obtained with | Credential |
//! |-------|---------------|------------|
//! | [`AdminApi`] | [`ApiClient::admin`] | session token, admin role enforced by the backend |
//! | [`EmployeeApi`] | [`ApiClient::employee`] | session token |
//! | [`InvitationApi`] | [`ApiClient::invitations`] | none, always the public client |

mod admin;
mod employee;
mod invitations;

pub use admin::AdminApi;
pub use employee::EmployeeApi;
pub use invitations::InvitationApi;

use crate::client::ApiClient;

impl ApiClient {
    pub fn admin(&self) -> AdminApi<'_> {
        AdminApi::new(self)
    }

    pub fn employee(&self) -> EmployeeApi<'_> {
        EmployeeApi::new(self)
    }

    /// Invitation routes. These never carry a token, whatever the session.
    pub fn invitations(&self) -> InvitationApi {
        InvitationApi::new(self.public())
    }
}
