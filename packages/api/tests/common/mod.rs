use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use api::{ApiError, HttpRequest, HttpResponse, Transport};
use async_trait::async_trait;
use reqwest::{Method, StatusCode};

/// Backend double keyed by `(method, path)`. Unrouted requests get a 404.
#[derive(Clone, Default)]
pub struct FakeBackend {
    routes: Rc<RefCell<HashMap<(Method, String), (StatusCode, String)>>>,
    log: Rc<RefCell<Vec<HttpRequest>>>,
    offline: Rc<RefCell<bool>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(&self, method: Method, path: &str, status: StatusCode, body: &str) {
        self.routes
            .borrow_mut()
            .insert((method, path.to_string()), (status, body.to_string()));
    }

    /// Accept `password` for every username, issuing `token`.
    pub fn accept_login(&self, token: &str) {
        self.route(
            Method::POST,
            api::LOGIN_PATH,
            StatusCode::OK,
            &format!(r#"{{"access_token":"{token}","token_type":"bearer"}}"#),
        );
    }

    pub fn go_offline(&self) {
        *self.offline.borrow_mut() = true;
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.log.borrow().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<HttpRequest> {
        self.log
            .borrow()
            .iter()
            .filter(|r| r.path == path)
            .cloned()
            .collect()
    }
}

#[async_trait(?Send)]
impl Transport for FakeBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.log.borrow_mut().push(request.clone());
        // Let other in-flight requests reach dispatch before this one answers.
        tokio::task::yield_now().await;
        if *self.offline.borrow() {
            return Err(ApiError::Network("connection refused".to_string()));
        }
        let key = (request.method.clone(), request.path.clone());
        Ok(match self.routes.borrow().get(&key) {
            Some((status, body)) => HttpResponse::new(*status, body.clone()),
            None => HttpResponse::new(StatusCode::NOT_FOUND, r#"{"detail":"Not Found"}"#),
        })
    }
}
