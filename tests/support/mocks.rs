// tests/support/mocks.rs
use async_trait::async_trait;
use blog_console::application::{
    ApplicationResult,
    dto::{BlogRecord, BlogSubmission, RemoteIdentity},
    error::ApplicationError,
    ports::{blog::BlogGateway, trust::TrustBoundary},
};
use blog_console::domain::{access::PrincipalId, post::PostId};
use std::collections::VecDeque;
use std::sync::Mutex;

pub const ADMIN_TOKEN: &str = "admin-token";
pub const USER_TOKEN: &str = "user-token";
pub const EXPIRED_TOKEN: &str = "expired-token";

/* ------------------------------- TrustBoundary ------------------------------- */

/// Knows one admin (id 1, "alice") and one user (id 2, "bob").
#[derive(Clone, Debug, Default)]
pub struct FakeTrust;

#[async_trait]
impl TrustBoundary for FakeTrust {
    async fn validate_token(&self, token: &str) -> ApplicationResult<RemoteIdentity> {
        match token {
            ADMIN_TOKEN => Ok(identity("1", "admin", "alice")),
            USER_TOKEN => Ok(identity("2", "user", "bob")),
            _ => Err(ApplicationError::unauthorized("token validation returned 401")),
        }
    }
}

pub fn identity(id: &str, role: &str, username: &str) -> RemoteIdentity {
    RemoteIdentity {
        id: PrincipalId::new(id),
        role: role.to_string(),
        username: Some(username.to_string()),
        is_active: Some(true),
    }
}

/* -------------------------------- BlogGateway -------------------------------- */

#[derive(Clone, Debug)]
pub enum GatewayReply {
    Ok,
    Status(u16, Option<&'static str>),
    Unauthorized,
    Down,
}

#[derive(Clone, Debug)]
pub struct RecordedCall {
    pub method: &'static str,
    pub token: String,
    pub id: Option<String>,
    pub submission: Option<BlogSubmission>,
}

/// Replays scripted replies (defaulting to success) and records every call.
#[derive(Default)]
pub struct RecordingGateway {
    replies: Mutex<VecDeque<GatewayReply>>,
    record: Mutex<BlogRecord>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replying(replies: impl IntoIterator<Item = GatewayReply>) -> Self {
        let gateway = Self::default();
        gateway.replies.lock().unwrap().extend(replies);
        gateway
    }

    pub fn with_record(self, record: BlogRecord) -> Self {
        *self.record.lock().unwrap() = record;
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn next_reply(&self) -> ApplicationResult<()> {
        match self.replies.lock().unwrap().pop_front().unwrap_or(GatewayReply::Ok) {
            GatewayReply::Ok => Ok(()),
            GatewayReply::Status(status, message) => Err(ApplicationError::rejected(
                status,
                message.map(str::to_string),
            )),
            GatewayReply::Unauthorized => Err(ApplicationError::unauthorized("status 401")),
            GatewayReply::Down => Err(ApplicationError::infrastructure("connection refused")),
        }
    }

    fn record_call(
        &self,
        method: &'static str,
        token: &str,
        id: Option<&PostId>,
        submission: Option<&BlogSubmission>,
    ) {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            token: token.to_string(),
            id: id.map(ToString::to_string),
            submission: submission.cloned(),
        });
    }
}

#[async_trait]
impl BlogGateway for RecordingGateway {
    async fn fetch(&self, token: &str, id: &PostId) -> ApplicationResult<BlogRecord> {
        self.record_call("GET", token, Some(id), None);
        self.next_reply()?;
        Ok(self.record.lock().unwrap().clone())
    }

    async fn create(&self, token: &str, submission: &BlogSubmission) -> ApplicationResult<()> {
        self.record_call("POST", token, None, Some(submission));
        self.next_reply()
    }

    async fn update(
        &self,
        token: &str,
        id: &PostId,
        submission: &BlogSubmission,
    ) -> ApplicationResult<()> {
        self.record_call("PUT", token, Some(id), Some(submission));
        self.next_reply()
    }
}
