//! Credential exchange and role resolution.

mod gateway;
mod roles;

pub use gateway::AuthGateway;
pub use roles::{role_from_username, RoleSource};
