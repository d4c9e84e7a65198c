//! Role resolution after a successful credential exchange.
//!
//! The login response carries only a token. The role is resolved either from
//! the identity endpoint (the employee record embeds its user account, whose
//! `role` is authoritative) or, when that is unavailable, from the username.
//!
//! The username rule grants `admin` to any username containing `"admin"`. It
//! is kept for compatibility with deployments that expose no identity endpoint
//! and is a known authorization gap: the backend still enforces roles on every
//! admin endpoint, so a wrongly resolved role only shows the wrong dashboard.

use serde::Deserialize;
use store::Role;

/// How the gateway decides which dashboard a fresh session belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoleSource {
    /// Ask `path` with the new token; fall back to the username rule when the
    /// endpoint answers 404 or carries no role.
    Identity { path: String },
    /// Username rule only.
    UsernameRule,
}

impl Default for RoleSource {
    fn default() -> Self {
        RoleSource::Identity {
            path: crate::settings::DEFAULT_IDENTITY_PATH.to_string(),
        }
    }
}

pub fn role_from_username(username: &str) -> Role {
    if username.contains("admin") {
        Role::Admin
    } else {
        Role::Employee
    }
}

/// Subset of an identity response that may carry a role, either top-level or
/// on the embedded `user` account.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct IdentityProbe {
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    user: Option<AccountProbe>,
}

#[derive(Debug, Default, Deserialize)]
struct AccountProbe {
    #[serde(default)]
    role: Option<String>,
}

impl IdentityProbe {
    /// The declared role, if any. An unrecognised value counts as absent.
    pub(crate) fn role(&self) -> Option<Role> {
        self.user
            .as_ref()
            .and_then(|user| user.role.as_deref())
            .or(self.role.as_deref())
            .and_then(|role| role.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rule() {
        assert_eq!(role_from_username("admin"), Role::Admin);
        assert_eq!(role_from_username("admin1"), Role::Admin);
        assert_eq!(role_from_username("sysadmin"), Role::Admin);
        assert_eq!(role_from_username("jane"), Role::Employee);
        // Case-sensitive, matching the deployed behaviour.
        assert_eq!(role_from_username("Administrator"), Role::Employee);
    }

    #[test]
    fn test_probe_prefers_embedded_user() {
        let probe: IdentityProbe = serde_json::from_str(
            r#"{"id": 4, "role": "employee", "user": {"id": 1, "role": "admin"}}"#,
        )
        .unwrap();
        assert_eq!(probe.role(), Some(Role::Admin));

        let probe: IdentityProbe = serde_json::from_str(r#"{"role": "employee"}"#).unwrap();
        assert_eq!(probe.role(), Some(Role::Employee));
    }

    #[test]
    fn test_probe_without_usable_role() {
        let probe: IdentityProbe = serde_json::from_str(r#"{"id": 4, "user": null}"#).unwrap();
        assert_eq!(probe.role(), None);

        let probe: IdentityProbe = serde_json::from_str(r#"{"user": {"role": "owner"}}"#).unwrap();
        assert_eq!(probe.role(), None);
    }
}
