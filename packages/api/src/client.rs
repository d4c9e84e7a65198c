//! # API client adapter
//!
//! [`ApiClient`] wraps a [`Transport`] with the two cross-cutting hooks every
//! backend call goes through:
//!
//! - **attach credential**: before dispatch the token is read from the
//!   [`SessionStore`] (not cached), so a request always carries the token that is
//!   current at that moment;
//! - **handle auth failure**: a 401 from any endpoint except the login exchange
//!   clears the session and fires the session-expired hook, which the UI uses to
//!   send the user back to the login view.
//!
//! Two variants bypass both hooks. [`ApiClient::public`] is for endpoints that
//! must never see a token (invitation validation and acceptance, login);
//! [`ApiClient::with_bearer`] carries an explicit token that is not in the store
//! yet, used while a login is still resolving the user's role.
//!
//! Other non-2xx responses are returned to the caller as [`ApiError`]s and do
//! not touch the session.

use std::rc::Rc;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use store::SessionStore;

use crate::error::{detail_message, ApiError, Result};
use crate::settings::Settings;
use crate::transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};

/// Path of the credential exchange. Its 401 means "wrong password", not
/// "session expired".
pub const LOGIN_PATH: &str = "/api/auth/login";

#[derive(Clone, PartialEq, Eq)]
enum Access {
    Session,
    Public,
    Bearer(String),
}

/// Cheap-to-clone handle for calling the backend.
#[derive(Clone)]
pub struct ApiClient {
    transport: Rc<dyn Transport>,
    session: SessionStore,
    access: Access,
    on_session_expired: Option<Rc<dyn Fn()>>,
}

impl ApiClient {
    pub fn new(transport: impl Transport + 'static, session: SessionStore) -> Self {
        Self {
            transport: Rc::new(transport),
            session,
            access: Access::Session,
            on_session_expired: None,
        }
    }

    /// Client talking to the configured backend over HTTP.
    pub fn from_settings(settings: &Settings, session: SessionStore) -> Self {
        Self::new(ReqwestTransport::new(settings.api.url.clone()), session)
    }

    /// Register the callback fired after a rejected token cleared the session.
    pub fn on_session_expired(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_session_expired = Some(Rc::new(hook));
        self
    }

    /// Variant that never attaches a token and never clears the session.
    pub fn public(&self) -> Self {
        Self {
            access: Access::Public,
            ..self.clone()
        }
    }

    /// Variant that sends `token` instead of the stored one and never clears
    /// the session.
    pub fn with_bearer(&self, token: impl Into<String>) -> Self {
        Self {
            access: Access::Bearer(token.into()),
            ..self.clone()
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(HttpRequest::get(path)).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<T> {
        self.send(HttpRequest::get(path).with_query(query)).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(HttpRequest::post(path).with_json(body)?).await
    }

    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: &[(&str, &str)],
    ) -> Result<T> {
        self.send(HttpRequest::post(path).with_form(fields)).await
    }

    /// POST without a body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(HttpRequest::post(path)).await
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(HttpRequest::put(path).with_json(body)?).await
    }

    /// Dispatch and decode a JSON response body.
    pub async fn send<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T> {
        let response = self.dispatch(request).await?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Dispatch a request through both hooks and return the raw 2xx response.
    pub async fn dispatch(&self, mut request: HttpRequest) -> Result<HttpResponse> {
        request.bearer = match &self.access {
            Access::Session => self.session.token(),
            Access::Public => None,
            Access::Bearer(token) => Some(token.clone()),
        };
        let sent = request.bearer.clone();
        let method = request.method.clone();
        let path = request.path.clone();
        debug!(%method, %path, authenticated = request.bearer.is_some(), "dispatching request");

        let response = self.transport.send(request).await.inspect_err(|error| {
            warn!(%method, %path, %error, "request did not complete");
        })?;
        debug!(%method, %path, status = response.status.as_u16(), "response received");

        if response.status.is_success() {
            return Ok(response);
        }

        let message = detail_message(response.status, &response.body);
        if response.status == StatusCode::UNAUTHORIZED {
            // A 401 for a token that was already replaced or cleared must not
            // touch the current session.
            if self.access == Access::Session
                && path != LOGIN_PATH
                && self.session.token() == sent
            {
                self.expire_session();
            }
            return Err(ApiError::AuthenticationFailed(message));
        }
        Err(ApiError::from_status(response.status, message))
    }

    fn expire_session(&self) {
        warn!("backend rejected the session token, signing out");
        if let Err(error) = self.session.clear() {
            warn!(%error, "failed to remove persisted session");
        }
        if let Some(hook) = &self.on_session_expired {
            hook();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use serde_json::{json, Value};
    use store::{MemoryStorage, Role};

    use super::*;
    use crate::test_support::ScriptedTransport;

    fn signed_in(transport: &ScriptedTransport) -> (ApiClient, SessionStore) {
        let session = SessionStore::new(MemoryStorage::new());
        session.set("tok-live", Role::Employee).unwrap();
        (ApiClient::new(transport.clone(), session.clone()), session)
    }

    #[tokio::test]
    async fn test_attaches_current_token() {
        let transport = ScriptedTransport::new();
        transport.respond(StatusCode::OK, "[]");
        transport.respond(StatusCode::OK, "[]");
        let (client, session) = signed_in(&transport);

        let _: Value = client.get("/api/employees/me/salary-records").await.unwrap();
        session.set("tok-rotated", Role::Employee).unwrap();
        let _: Value = client.get("/api/attendance/my-attendance").await.unwrap();

        let sent = transport.requests();
        assert_eq!(sent[0].bearer.as_deref(), Some("tok-live"));
        assert_eq!(sent[1].bearer.as_deref(), Some("tok-rotated"));
    }

    #[tokio::test]
    async fn test_signed_out_request_has_no_token() {
        let transport = ScriptedTransport::new();
        transport.respond(StatusCode::OK, "{}");
        let session = SessionStore::new(MemoryStorage::new());
        session.initialize();
        let client = ApiClient::new(transport.clone(), session);

        let _: Value = client.get("/api/employees/me").await.unwrap();
        assert_eq!(transport.requests()[0].bearer, None);
    }

    #[tokio::test]
    async fn test_public_variant_never_sends_token() {
        let transport = ScriptedTransport::new();
        transport.respond(StatusCode::OK, r#"{"email":"a@b.c"}"#);
        let (client, _) = signed_in(&transport);

        let _: Value = client
            .public()
            .get("/api/invitations/validate/abc")
            .await
            .unwrap();
        assert_eq!(transport.requests()[0].bearer, None);
    }

    #[tokio::test]
    async fn test_unauthorized_clears_session_once_and_fires_hook() {
        let transport = ScriptedTransport::new();
        transport.respond(
            StatusCode::UNAUTHORIZED,
            r#"{"detail":"Could not validate credentials"}"#,
        );
        let (client, session) = signed_in(&transport);
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        let client = client.on_session_expired(move || counter.set(counter.get() + 1));

        let err = client
            .get::<Value>("/api/admin/employees")
            .await
            .unwrap_err();

        assert!(matches!(
            &err,
            ApiError::AuthenticationFailed(m) if m == "Could not validate credentials"
        ));
        assert!(!session.get().is_authenticated());
        assert_eq!(fired.get(), 1);
    }

    /// Answers 401 after another tab has already signed in again.
    struct SupersededTransport {
        session: SessionStore,
    }

    #[async_trait::async_trait(?Send)]
    impl Transport for SupersededTransport {
        async fn send(&self, _request: HttpRequest) -> Result<HttpResponse> {
            self.session.set("tok-fresh", Role::Admin)?;
            Ok(HttpResponse::new(StatusCode::UNAUTHORIZED, "{}"))
        }
    }

    #[tokio::test]
    async fn test_stale_unauthorized_keeps_newer_session() {
        let session = SessionStore::new(MemoryStorage::new());
        session.set("tok-old", Role::Employee).unwrap();
        let transport = SupersededTransport {
            session: session.clone(),
        };
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let client =
            ApiClient::new(transport, session.clone()).on_session_expired(move || flag.set(true));

        let err = client.get::<Value>("/api/admin/employees").await.unwrap_err();

        assert!(err.is_auth_failure());
        assert_eq!(session.token().as_deref(), Some("tok-fresh"));
        assert!(!fired.get());
    }

    #[tokio::test]
    async fn test_unauthorized_login_keeps_session() {
        let transport = ScriptedTransport::new();
        transport.respond(
            StatusCode::UNAUTHORIZED,
            r#"{"detail":"Incorrect username or password"}"#,
        );
        let (client, session) = signed_in(&transport);
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let client = client.on_session_expired(move || flag.set(true));

        let err = client
            .post_form::<Value>(LOGIN_PATH, &[("username", "x"), ("password", "y")])
            .await
            .unwrap_err();

        assert!(err.is_auth_failure());
        assert!(session.get().is_authenticated());
        assert!(!fired.get());
    }

    #[tokio::test]
    async fn test_unauthorized_on_public_or_bearer_variant_keeps_session() {
        let transport = ScriptedTransport::new();
        transport.respond(StatusCode::UNAUTHORIZED, "{}");
        transport.respond(StatusCode::UNAUTHORIZED, "{}");
        let (client, session) = signed_in(&transport);

        let public = client.public();
        assert!(public.get::<Value>("/api/invitations/validate/x").await.is_err());
        let bearer = client.with_bearer("tok-new");
        assert!(bearer.get::<Value>("/api/employees/me").await.is_err());

        assert!(session.get().is_authenticated());
        assert_eq!(transport.requests()[1].bearer.as_deref(), Some("tok-new"));
    }

    #[tokio::test]
    async fn test_other_errors_pass_through() {
        let transport = ScriptedTransport::new();
        transport.respond(
            StatusCode::BAD_REQUEST,
            r#"{"detail":"Already checked in today"}"#,
        );
        transport.respond(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        transport.fail("connection refused");
        let (client, session) = signed_in(&transport);

        let err = client.post_empty::<Value>("/api/attendance/check-in").await.unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.message(), "Already checked in today");

        let err = client.get::<Value>("/api/employees/me").await.unwrap_err();
        assert_eq!(err.status(), Some(500));

        let err = client.get::<Value>("/api/employees/me").await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));

        assert!(session.get().is_authenticated());
    }

    #[tokio::test]
    async fn test_decode_error() {
        let transport = ScriptedTransport::new();
        transport.respond(StatusCode::OK, "not json");
        let (client, _) = signed_in(&transport);

        let err = client.get::<Value>("/api/employees/me").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_bodies_are_encoded() {
        let transport = ScriptedTransport::new();
        transport.respond(StatusCode::OK, "{}");
        transport.respond(StatusCode::OK, "{}");
        let (client, _) = signed_in(&transport);

        let _: Value = client
            .put_json("/api/admin/salary-records/7", &json!({"status": "paid"}))
            .await
            .unwrap();
        let _: Value = client
            .get_with_query(
                "/api/attendance/my-attendance",
                vec![("start_date".into(), "2024-03-01".into())],
            )
            .await
            .unwrap();

        let sent = transport.requests();
        assert_eq!(sent[0].method, reqwest::Method::PUT);
        assert_eq!(
            sent[0].body,
            crate::transport::RequestBody::Json(json!({"status": "paid"}))
        );
        assert_eq!(sent[1].query, vec![("start_date".to_string(), "2024-03-01".to_string())]);
    }
}
