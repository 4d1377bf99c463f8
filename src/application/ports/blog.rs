// src/application/ports/blog.rs
use crate::application::{
    ApplicationResult,
    dto::{BlogRecord, BlogSubmission},
};
use crate::domain::post::{PostDraft, PostId};
use async_trait::async_trait;

#[async_trait]
pub trait BlogGateway: Send + Sync {
    async fn fetch(&self, token: &str, id: &PostId) -> ApplicationResult<BlogRecord>;
    async fn create(&self, token: &str, submission: &BlogSubmission) -> ApplicationResult<()>;
    async fn update(
        &self,
        token: &str,
        id: &PostId,
        submission: &BlogSubmission,
    ) -> ApplicationResult<()>;
}

/// Save supplied by a host that embeds the editor in its own view. When set,
/// the editor hands the draft over instead of calling the backend.
#[async_trait]
pub trait SaveHook: Send + Sync {
    /// `id` is the post being edited, `None` for a new one.
    async fn save(&self, id: Option<&PostId>, draft: &PostDraft) -> ApplicationResult<()>;
}
