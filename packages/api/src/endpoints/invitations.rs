use tracing::info;

use crate::client::ApiClient;
use crate::error::{ApiError, Result};
use crate::models::{AcceptedInvitation, InvitationAcceptance, InvitationPreview};

/// Public invitation routes, used while signed out.
pub struct InvitationApi {
    client: ApiClient,
}

impl InvitationApi {
    /// `client` must already be the public variant.
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Check an emailed invitation token and fetch what it offers.
    pub async fn validate(&self, token: &str) -> Result<InvitationPreview> {
        let token = token.trim();
        if token.is_empty() || !token.chars().all(is_token_char) {
            return Err(ApiError::ValidationFailed(
                "Invalid invitation link".to_string(),
            ));
        }
        self.client
            .get(&format!("/api/invitations/validate/{token}"))
            .await
    }

    /// Create the account. The invitee signs in normally afterwards.
    pub async fn accept(&self, acceptance: &InvitationAcceptance) -> Result<AcceptedInvitation> {
        if acceptance.username.trim().is_empty() || acceptance.password.is_empty() {
            return Err(ApiError::ValidationFailed(
                "Username and password are required".to_string(),
            ));
        }
        let accepted: AcceptedInvitation = self
            .client
            .post_json("/api/invitations/accept", acceptance)
            .await?;
        info!(user_id = accepted.user_id, "invitation accepted");
        Ok(accepted)
    }
}

/// Tokens are URL-safe base64, so they can go into the path unescaped.
fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}
