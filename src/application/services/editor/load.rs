// src/application/services/editor/load.rs
use super::{EditorMode, PostEditor};
use crate::application::{
    dto::BlogRecord,
    error::ApplicationError,
    ports::credentials::{bearer_token, clear_tokens},
};
use crate::domain::post::{PostDraft, PostId};

const LOAD_FAILED: &str = "Failed to load blog data for editing";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    /// No usable credential; the host should show the login view.
    LoginRequired,
    Failed(String),
}

impl PostEditor {
    /// Switch to edit mode and fill the form from the stored post.
    pub async fn load(&mut self, id: PostId) -> LoadOutcome {
        self.mode = EditorMode::Edit { id: id.clone() };

        let Some(token) = bearer_token(self.credentials.as_ref()) else {
            return LoadOutcome::LoginRequired;
        };

        self.loading = true;
        let result = self.gateway.fetch(&token, &id).await;
        self.loading = false;

        match result {
            Ok(record) => {
                self.populate(record);
                LoadOutcome::Loaded
            }
            Err(ApplicationError::Unauthorized(_)) => {
                clear_tokens(self.credentials.as_ref());
                LoadOutcome::LoginRequired
            }
            Err(err) => {
                tracing::warn!(error = %err, post = %id, "failed to fetch post for editing");
                self.error = Some(LOAD_FAILED.into());
                LoadOutcome::Failed(LOAD_FAILED.into())
            }
        }
    }

    /// Fill the form from a record already in hand.
    pub fn populate(&mut self, record: BlogRecord) {
        if let Some(id) = record.id.as_deref().and_then(|id| PostId::new(id).ok()) {
            self.mode = EditorMode::Edit { id };
        }

        self.draft = PostDraft {
            title: record.title.unwrap_or_default(),
            slug: record.slug.unwrap_or_default(),
            content: record.content.unwrap_or_default(),
            category: record.category.unwrap_or_default(),
            subcategory: parse_or_default(record.subcategory.as_deref(), "subcategory"),
            author_name: record.author.unwrap_or_default(),
            status: parse_or_default(record.status.as_deref(), "status"),
            image: None,
        };

        if let Some(url) = record.image.filter(|url| !url.is_empty()) {
            self.preview = Some(url.clone());
            self.existing_image_url = Some(url);
        }
        self.sync_content_flag();
    }
}

fn parse_or_default<T>(value: Option<&str>, field: &'static str) -> T
where
    T: std::str::FromStr + Default,
{
    match value.filter(|v| !v.is_empty()) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(field, value = raw, "unknown value in stored post, using default");
            T::default()
        }),
        None => T::default(),
    }
}
