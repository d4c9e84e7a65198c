//! # Employee invitations
//!
//! An admin creates an invitation with the employment details; the backend
//! emails a one-time link. The invitee opens it signed out, the client validates
//! the token and shows an [`InvitationPreview`], then posts an
//! [`InvitationAcceptance`] to create the account. Both of those calls are public.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Expired,
}

impl InvitationStatus {
    pub fn label(self) -> &'static str {
        match self {
            InvitationStatus::Pending => "Pending",
            InvitationStatus::Accepted => "Accepted",
            InvitationStatus::Expired => "Expired",
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Invitation {
    pub id: i64,
    pub email: String,
    pub employee_id: String,
    pub status: InvitationStatus,
    pub hire_date: NaiveDate,
    pub department: Option<String>,
    pub position: Option<String>,
    pub base_salary: Option<Decimal>,
    #[serde(deserialize_with = "super::timestamp::deserialize")]
    pub expires_at: DateTime<Utc>,
}

/// Invitation request (admin only).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewInvitation {
    pub email: String,
    pub employee_id: String,
    pub hire_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_salary: Option<Decimal>,
}

/// What the invitee sees before accepting.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct InvitationPreview {
    pub email: String,
    pub employee_id: String,
    pub position: Option<String>,
    pub department: Option<String>,
    pub hire_date: NaiveDate,
    #[serde(deserialize_with = "super::timestamp::deserialize")]
    pub expires_at: DateTime<Utc>,
}

/// Account details chosen by the invitee.
#[derive(Clone, Serialize, PartialEq)]
pub struct InvitationAcceptance {
    pub token: String,
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
}

impl std::fmt::Debug for InvitationAcceptance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvitationAcceptance")
            .field("username", &self.username)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AcceptedInvitation {
    pub message: String,
    pub user_id: i64,
    pub employee_id: i64,
}
