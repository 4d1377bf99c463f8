// src/application/services/mod.rs
pub mod access_guard;
pub mod editor;

pub use access_guard::{AccessGate, AccessGuard, GuardRequest, GuardState, Resolver};
pub use editor::PostEditor;

use crate::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::{
        BlogGatewayPort, CredentialProviderPort, SlugGeneratorPort, TrustBoundaryPort,
        credentials::bearer_token,
    },
};
use crate::domain::{access::PrincipalId, post::PostId};
use std::{sync::Arc, time::Duration};

/// Shared collaborators from which per-session guards and editors are built.
pub struct ConsoleServices {
    trust: Arc<TrustBoundaryPort>,
    gateway: Arc<BlogGatewayPort>,
    slugger: Arc<SlugGeneratorPort>,
    autosave_period: Duration,
}

impl ConsoleServices {
    pub fn new(
        trust: Arc<TrustBoundaryPort>,
        gateway: Arc<BlogGatewayPort>,
        slugger: Arc<SlugGeneratorPort>,
        autosave_period: Duration,
    ) -> Self {
        Self {
            trust,
            gateway,
            slugger,
            autosave_period,
        }
    }

    pub fn trust_boundary(&self) -> Arc<TrustBoundaryPort> {
        Arc::clone(&self.trust)
    }

    pub fn slugger(&self) -> Arc<SlugGeneratorPort> {
        Arc::clone(&self.slugger)
    }

    pub fn access_guard(&self, credentials: Arc<CredentialProviderPort>) -> AccessGuard {
        AccessGuard::new(Arc::clone(&self.trust), credentials)
    }

    /// Account owning post `id`, read from the stored record. `None` when the
    /// backend does not report one.
    pub async fn post_owner(
        &self,
        credentials: &CredentialProviderPort,
        id: &PostId,
    ) -> ApplicationResult<Option<PrincipalId>> {
        let token = bearer_token(credentials)
            .ok_or_else(|| ApplicationError::unauthorized("no stored credential"))?;
        let record = self.gateway.fetch(&token, id).await?;
        Ok(record.author_id)
    }

    pub fn post_editor(&self, credentials: Arc<CredentialProviderPort>) -> PostEditor {
        PostEditor::new(
            Arc::clone(&self.gateway),
            credentials,
            Arc::clone(&self.slugger),
            self.autosave_period,
        )
    }
}
