// src/application/services/editor/submit.rs
use super::{EditorMode, Notification, PostEditor};
use crate::application::{
    dto::{BlogSubmission, SessionUser},
    error::ApplicationError,
    ports::{
        blog::SaveHook,
        credentials::{bearer_token, clear_tokens},
    },
};
use crate::domain::post::PostDraft;

const NOT_AUTHENTICATED: &str = "User not authenticated. Please log in again.";
const SLUG_CONFLICT: &str = "Slug already exists. Please adjust the title or slug.";
const FALLBACK_AUTHOR: &str = "Admin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    Updated,
    /// The backend refused the slug. The draft is kept.
    Conflict(String),
    /// Credentials are missing or were refused; the host should show the login view.
    LoginRequired,
    Failed(String),
}

impl PostEditor {
    /// Send the draft to the backend as a create or an update.
    pub async fn submit(&mut self, user: Option<&SessionUser>) -> SubmitOutcome {
        self.error = None;
        self.notification = None;

        if let Some(hook) = self.save_hook.clone() {
            return self.save_through(hook.as_ref()).await;
        }

        let Some(token) = bearer_token(self.credentials.as_ref()) else {
            return SubmitOutcome::LoginRequired;
        };
        let Some(user) = user else {
            self.error = Some(NOT_AUTHENTICATED.into());
            return SubmitOutcome::Failed(NOT_AUTHENTICATED.into());
        };

        let submission = self.submission_for(user);
        self.submitting = true;
        let result = match &self.mode {
            EditorMode::Create => self.gateway.create(&token, &submission).await,
            EditorMode::Edit { id } => self.gateway.update(&token, id, &submission).await,
        };
        self.submitting = false;

        let editing = self.is_editing();
        match result {
            Ok(()) => {
                let verb = if editing { "updated" } else { "created" };
                tracing::info!(slug = %self.draft.slug, "blog post {verb}");
                self.notification = Some(Notification::success(format!(
                    "Blog post {verb} successfully!"
                )));
                if editing {
                    SubmitOutcome::Updated
                } else {
                    self.reset();
                    SubmitOutcome::Created
                }
            }
            Err(ApplicationError::Unauthorized(_)) => {
                clear_tokens(self.credentials.as_ref());
                SubmitOutcome::LoginRequired
            }
            Err(err @ ApplicationError::Rejected { status: 409, .. }) => {
                let message = err.server_message().unwrap_or(SLUG_CONFLICT).to_string();
                tracing::warn!(slug = %self.draft.slug, "slug conflict");
                self.fail(message.clone());
                SubmitOutcome::Conflict(message)
            }
            Err(err) => {
                tracing::warn!(error = %err, "blog post submission failed");
                let verb = if editing { "update" } else { "create" };
                let message = err
                    .server_message()
                    .map_or_else(|| format!("Failed to {verb} blog post"), str::to_string);
                self.fail(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }

    /// Embedded submit: the host saves, the draft is never reset.
    async fn save_through(&mut self, hook: &dyn SaveHook) -> SubmitOutcome {
        let id = match &self.mode {
            EditorMode::Edit { id } => Some(id.clone()),
            EditorMode::Create => None,
        };

        self.submitting = true;
        let result = hook.save(id.as_ref(), &self.draft).await;
        self.submitting = false;

        match result {
            Ok(()) if id.is_some() => SubmitOutcome::Updated,
            Ok(()) => SubmitOutcome::Created,
            Err(err) => {
                tracing::warn!(error = %err, "host save failed");
                let message = err
                    .server_message()
                    .map_or_else(|| err.to_string(), str::to_string);
                self.error = Some(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }

    fn submission_for(&self, user: &SessionUser) -> BlogSubmission {
        let author = if self.draft.author_name.is_empty() {
            user.username
                .clone()
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| FALLBACK_AUTHOR.to_string())
        } else {
            self.draft.author_name.clone()
        };

        BlogSubmission {
            title: self.draft.title.clone(),
            content: self.draft.content.clone(),
            category: self.draft.category.clone(),
            subcategory: self.draft.subcategory,
            author,
            status: self.draft.status,
            slug: Some(self.draft.slug.clone()).filter(|slug| !slug.is_empty()),
            image: self.draft.image.clone(),
        }
    }

    fn reset(&mut self) {
        self.draft = PostDraft::default();
        self.preview = None;
        self.existing_image_url = None;
        self.sync_content_flag();
    }
}
