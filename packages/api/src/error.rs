//! Error taxonomy shared by every backend call.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use store::StorageError;

pub type Result<T, E = ApiError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad credentials, or a missing, invalid or expired token.
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),
    /// Input rejected before dispatch, or by the backend's request validation.
    #[error("invalid input: {0}")]
    ValidationFailed(String),
    /// Any other non-2xx response.
    #[error("server responded {status}: {message}")]
    Server { status: u16, message: String },
    /// No response at all.
    #[error("network error: {0}")]
    Network(String),
    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// Map a non-2xx, non-401 response to an error.
    pub(crate) fn from_status(status: StatusCode, message: String) -> Self {
        if status == StatusCode::UNPROCESSABLE_ENTITY {
            ApiError::ValidationFailed(message)
        } else {
            ApiError::Server {
                status: status.as_u16(),
                message,
            }
        }
    }

    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::AuthenticationFailed(_))
    }

    /// Server, transport and decoding failures: shown to the user, session untouched.
    pub fn is_network_or_server(&self) -> bool {
        matches!(
            self,
            ApiError::Server { .. } | ApiError::Network(_) | ApiError::Decode(_)
        )
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            ApiError::AuthenticationFailed(_) => Some(StatusCode::UNAUTHORIZED.as_u16()),
            _ => None,
        }
    }

    /// The message meant for the user, without the category prefix.
    pub fn message(&self) -> String {
        match self {
            ApiError::AuthenticationFailed(m)
            | ApiError::ValidationFailed(m)
            | ApiError::Network(m)
            | ApiError::Decode(m) => m.clone(),
            ApiError::Server { message, .. } => message.clone(),
            ApiError::Storage(e) => e.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Detail,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Detail {
    Message(String),
    Issues(Vec<Issue>),
}

#[derive(Deserialize)]
struct Issue {
    msg: String,
    #[serde(default)]
    loc: Vec<serde_json::Value>,
}

impl Issue {
    fn describe(&self) -> String {
        match self.loc.last().and_then(serde_json::Value::as_str) {
            Some(field) => format!("{field}: {}", self.msg),
            None => self.msg.clone(),
        }
    }
}

/// Extract the backend's `detail` message from an error body.
///
/// Handles both `{"detail": "text"}` and the validation form
/// `{"detail": [{"loc": [...], "msg": "..."}]}`; anything else falls back to
/// the status reason phrase.
pub(crate) fn detail_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: Detail::Message(message),
        }) => message,
        Ok(ErrorBody {
            detail: Detail::Issues(issues),
        }) if !issues.is_empty() => issues
            .iter()
            .map(Issue::describe)
            .collect::<Vec<_>>()
            .join("; "),
        _ => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_string() {
        let body = r#"{"detail":"Incorrect username or password"}"#;
        assert_eq!(
            detail_message(StatusCode::UNAUTHORIZED, body),
            "Incorrect username or password"
        );
    }

    #[test]
    fn test_detail_validation_list() {
        let body = r#"{"detail":[
            {"loc":["body","password"],"msg":"field required","type":"value_error.missing"},
            {"loc":["body",0],"msg":"bad item","type":"x"}
        ]}"#;
        assert_eq!(
            detail_message(StatusCode::UNPROCESSABLE_ENTITY, body),
            "password: field required; bad item"
        );
    }

    #[test]
    fn test_detail_fallback() {
        assert_eq!(
            detail_message(StatusCode::BAD_GATEWAY, "<html>oops</html>"),
            "Bad Gateway"
        );
        assert_eq!(
            detail_message(StatusCode::NOT_FOUND, r#"{"detail":[]}"#),
            "Not Found"
        );
    }

    #[test]
    fn test_from_status() {
        assert!(matches!(
            ApiError::from_status(StatusCode::UNPROCESSABLE_ENTITY, "x".into()),
            ApiError::ValidationFailed(_)
        ));
        let err = ApiError::from_status(StatusCode::NOT_FOUND, "Employee not found".into());
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.message(), "Employee not found");
        assert!(err.is_network_or_server());
        assert!(!err.is_auth_failure());
    }
}
