//! # Auth gateway
//!
//! [`AuthGateway::login`] runs the whole sign-in sequence:
//!
//! 1. reject empty credentials without touching the network;
//! 2. `POST /api/auth/login` (form-encoded) through the public client, so a
//!    stale stored token is never sent and a 401 never clears anything;
//! 3. resolve the [`Role`] according to the configured [`RoleSource`], sending
//!    the new token explicitly since it is not stored yet;
//! 4. commit `(token, role)` with [`SessionStore::set`].
//!
//! Any failure in steps 2–3 surfaces as [`ApiError::AuthenticationFailed`]
//! carrying the backend's message, and the session store is left as it was.
//! Navigation is the caller's job: the returned role names the home view.

use tracing::{debug, info, warn};

use store::{Role, SessionStore};

use super::roles::{role_from_username, IdentityProbe, RoleSource};
use crate::client::{ApiClient, LOGIN_PATH};
use crate::error::{ApiError, Result};
use crate::models::TokenResponse;

#[derive(Clone)]
pub struct AuthGateway {
    client: ApiClient,
    roles: RoleSource,
}

impl AuthGateway {
    pub fn new(client: ApiClient, roles: RoleSource) -> Self {
        Self { client, roles }
    }

    pub fn session(&self) -> &SessionStore {
        self.client.session()
    }

    /// Exchange credentials for a session and return the resolved role.
    pub async fn login(&self, username: &str, password: &str) -> Result<Role> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(ApiError::ValidationFailed(
                "Username and password are required".to_string(),
            ));
        }

        let token: TokenResponse = self
            .client
            .public()
            .post_form(LOGIN_PATH, &[("username", username), ("password", password)])
            .await
            .map_err(login_failure)?;
        if !token.is_bearer() {
            debug!(token_type = %token.token_type, "unexpected token type, treating as bearer");
        }

        let role = self
            .resolve_role(username, &token.access_token)
            .await
            .map_err(login_failure)?;

        self.client.session().set(&token.access_token, role)?;
        info!(%role, "signed in");
        Ok(role)
    }

    /// Drop the session. The backend keeps no server-side session, so there is
    /// nothing to revoke.
    pub fn logout(&self) -> Result<()> {
        self.client.session().clear()?;
        info!("signed out");
        Ok(())
    }

    async fn resolve_role(&self, username: &str, token: &str) -> Result<Role> {
        let path = match &self.roles {
            RoleSource::UsernameRule => return Ok(role_from_username(username)),
            RoleSource::Identity { path } => path,
        };

        match self.client.with_bearer(token).get::<IdentityProbe>(path).await {
            Ok(probe) => match probe.role() {
                Some(role) => Ok(role),
                None => {
                    warn!(%path, "identity response carries no role, using username rule");
                    Ok(role_from_username(username))
                }
            },
            Err(ApiError::Server { status: 404, .. }) => {
                debug!(%path, "no identity record, using username rule");
                Ok(role_from_username(username))
            }
            Err(error) => Err(error),
        }
    }
}

/// Fold every remote failure of the sign-in sequence into one category.
fn login_failure(error: ApiError) -> ApiError {
    let error = match error {
        ApiError::AuthenticationFailed(_) => error,
        ApiError::Storage(_) => return error,
        other => ApiError::AuthenticationFailed(other.message()),
    };
    warn!(%error, "sign-in failed");
    error
}
