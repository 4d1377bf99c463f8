// src/application/services/editor/mod.rs
mod autosave;
mod load;
mod submit;
mod upload;

pub use autosave::{AUTOSAVE_PULSE, AutosaveIndicator};
pub use load::LoadOutcome;
pub use submit::SubmitOutcome;

use crate::application::ports::{
    blog::{BlogGateway, SaveHook},
    credentials::CredentialProvider,
    slug::SlugGenerator,
};
use crate::domain::post::{PostDraft, PostId, PostStatus, Subcategory};
use std::{sync::Arc, time::Duration};
use tokio::sync::watch;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit { id: PostId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient toast raised after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub duration: Duration,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
            duration: Duration::from_secs(3),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
            duration: Duration::from_secs(5),
        }
    }
}

/// State machine behind the create/edit post form.
pub struct PostEditor {
    gateway: Arc<dyn BlogGateway>,
    credentials: Arc<dyn CredentialProvider>,
    slugger: Arc<dyn SlugGenerator>,
    save_hook: Option<Arc<dyn SaveHook>>,
    autosave_period: Duration,
    mode: EditorMode,
    draft: PostDraft,
    preview: Option<String>,
    existing_image_url: Option<String>,
    dragging: bool,
    submitting: bool,
    loading: bool,
    error: Option<String>,
    notification: Option<Notification>,
    has_content: watch::Sender<bool>,
}

impl PostEditor {
    pub fn new(
        gateway: Arc<dyn BlogGateway>,
        credentials: Arc<dyn CredentialProvider>,
        slugger: Arc<dyn SlugGenerator>,
        autosave_period: Duration,
    ) -> Self {
        let (has_content, _) = watch::channel(false);
        Self {
            gateway,
            credentials,
            slugger,
            save_hook: None,
            autosave_period,
            mode: EditorMode::Create,
            draft: PostDraft::default(),
            preview: None,
            existing_image_url: None,
            dragging: false,
            submitting: false,
            loading: false,
            error: None,
            notification: None,
            has_content,
        }
    }

    /// Embed the editor in a host view: submits go to `hook`, and no
    /// notifications are raised.
    pub fn with_save_hook(mut self, hook: Arc<dyn SaveHook>) -> Self {
        self.save_hook = Some(hook);
        self
    }

    pub fn is_embedded(&self) -> bool {
        self.save_hook.is_some()
    }

    /// Target an existing post without fetching it first.
    pub fn edit_existing(&mut self, id: PostId) {
        self.mode = EditorMode::Edit { id };
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditorMode::Edit { .. })
    }

    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn existing_image_url(&self) -> Option<&str> {
        self.existing_image_url.as_deref()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
        if !self.is_editing() {
            self.draft.slug = if self.draft.title.is_empty() {
                String::new()
            } else {
                self.slugger.slugify(&self.draft.title)
            };
        }
        self.after_edit();
    }

    pub fn set_slug(&mut self, slug: impl Into<String>) {
        self.draft.slug = slug.into();
        self.after_edit();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.draft.content = content.into();
        self.after_edit();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.draft.category = category.into();
        self.after_edit();
    }

    pub fn set_subcategory(&mut self, subcategory: Subcategory) {
        self.draft.subcategory = subcategory;
        self.after_edit();
    }

    pub fn set_author_name(&mut self, author: impl Into<String>) {
        self.draft.author_name = author.into();
        self.after_edit();
    }

    pub fn set_status(&mut self, status: PostStatus) {
        self.draft.status = status;
        self.after_edit();
    }

    /// Start the cosmetic autosave indicator for this editor. Requires a
    /// running tokio runtime.
    pub fn autosave_indicator(&self) -> AutosaveIndicator {
        AutosaveIndicator::spawn(
            self.has_content.subscribe(),
            self.autosave_period,
            AUTOSAVE_PULSE,
        )
    }

    fn after_edit(&mut self) {
        self.error = None;
        self.sync_content_flag();
    }

    fn sync_content_flag(&self) {
        self.has_content.send_replace(self.draft.has_content());
    }

    fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.notification = Some(Notification::error(message.clone()));
        self.error = Some(message);
    }
}
