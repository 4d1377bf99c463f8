// src/application/dto/auth.rs
use crate::domain::access::PrincipalId;
use serde::{Deserialize, Serialize};

/// Identity returned by the token validation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteIdentity {
    pub id: PrincipalId,
    pub role: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// The signed-in user as the host application knows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: PrincipalId,
    pub username: Option<String>,
    pub role: Option<String>,
    pub is_active: bool,
}

impl SessionUser {
    pub fn new(id: impl Into<PrincipalId>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: None,
            role: Some(role.into()),
            is_active: true,
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}

impl From<RemoteIdentity> for SessionUser {
    fn from(value: RemoteIdentity) -> Self {
        Self {
            id: value.id,
            username: value.username,
            role: Some(value.role),
            is_active: value.is_active.unwrap_or(true),
        }
    }
}

/// Snapshot of the surrounding authentication context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthSnapshot {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl AuthSnapshot {
    pub fn loading() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(user: SessionUser) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }
}
