// src/presentation/http/views.rs
use crate::application::services::editor::{EditorMode, Notification, NotificationKind, PostEditor};
use crate::domain::{
    access::DenialReason,
    post::{CATEGORIES, PostStatus, Subcategory},
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorView {
    pub mode: &'static str,
    pub id: Option<String>,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub category: String,
    pub subcategory: Subcategory,
    pub author_name: String,
    pub status: PostStatus,
    pub image_preview: Option<String>,
    pub existing_image_url: Option<String>,
    pub error: Option<String>,
    pub notification: Option<NotificationView>,
    pub options: FormOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationView {
    pub kind: &'static str,
    pub message: String,
    pub duration_ms: u64,
}

/// Choices offered by the form's select inputs.
#[derive(Debug, Serialize)]
pub struct FormOptions {
    pub categories: &'static [&'static str],
    pub subcategories: [Subcategory; 3],
    pub statuses: [PostStatus; 5],
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            categories: CATEGORIES,
            subcategories: Subcategory::ALL,
            statuses: PostStatus::ALL,
        }
    }
}

impl From<&Notification> for NotificationView {
    fn from(value: &Notification) -> Self {
        Self {
            kind: match value.kind {
                NotificationKind::Success => "success",
                NotificationKind::Error => "error",
            },
            message: value.message.clone(),
            duration_ms: u64::try_from(value.duration.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

impl From<&PostEditor> for EditorView {
    fn from(editor: &PostEditor) -> Self {
        let (mode, id) = match editor.mode() {
            EditorMode::Create => ("create", None),
            EditorMode::Edit { id } => ("edit", Some(id.to_string())),
        };
        let draft = editor.draft();
        Self {
            mode,
            id,
            title: draft.title.clone(),
            slug: draft.slug.clone(),
            content: draft.content.clone(),
            category: draft.category.clone(),
            subcategory: draft.subcategory,
            author_name: draft.author_name.clone(),
            status: draft.status,
            image_preview: editor.preview().map(str::to_string),
            existing_image_url: editor.existing_image_url().map(str::to_string),
            error: editor.error().map(str::to_string),
            notification: editor.notification().map(NotificationView::from),
            options: FormOptions::default(),
        }
    }
}

/// Body of the "Access Denied" view.
#[derive(Debug, Serialize)]
pub struct DenialView {
    pub error: &'static str,
    pub reason: DenialReason,
    pub message: &'static str,
}

impl DenialView {
    pub fn new(reason: DenialReason) -> Self {
        Self {
            error: "Access Denied",
            reason,
            message: reason.message(),
        }
    }
}

impl IntoResponse for DenialView {
    fn into_response(self) -> Response {
        (StatusCode::FORBIDDEN, Json(self)).into_response()
    }
}
