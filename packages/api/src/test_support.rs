use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::{ApiError, Result};
use crate::transport::{HttpRequest, HttpResponse, Transport};

/// Transport that replays queued responses in order and records every request.
#[derive(Clone, Default)]
pub(crate) struct ScriptedTransport {
    replies: Rc<RefCell<VecDeque<Result<HttpResponse>>>>,
    requests: Rc<RefCell<Vec<HttpRequest>>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(&self, status: StatusCode, body: &str) {
        self.replies
            .borrow_mut()
            .push_back(Ok(HttpResponse::new(status, body)));
    }

    pub(crate) fn fail(&self, message: &str) {
        self.replies
            .borrow_mut()
            .push_back(Err(ApiError::Network(message.to_string())));
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_string())))
    }
}
