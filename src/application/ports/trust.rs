// src/application/ports/trust.rs
use crate::application::{ApplicationResult, dto::RemoteIdentity};
use async_trait::async_trait;

/// Backend authority that reconfirms who a bearer token belongs to.
#[async_trait]
pub trait TrustBoundary: Send + Sync {
    /// Resolve the token's current identity. A rejected token yields
    /// `ApplicationError::Unauthorized`.
    async fn validate_token(&self, token: &str) -> ApplicationResult<RemoteIdentity>;
}
