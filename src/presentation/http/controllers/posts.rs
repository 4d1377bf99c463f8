// src/presentation/http/controllers/posts.rs
use crate::application::{
    error::ApplicationError,
    services::{
        PostEditor,
        editor::{LoadOutcome, SubmitOutcome},
    },
};
use crate::domain::post::{PostId, PostStatus, Subcategory};
use crate::presentation::http::{
    error::{HttpError, HttpResult},
    middleware::require_permission::login_redirect,
    session::ConsoleSession,
    state::HttpState,
    views::EditorView,
};
use axum::{
    Extension, Json,
    extract::{Multipart, Path, multipart::MultipartError},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use std::sync::Arc;

pub async fn new_post(
    Extension(state): Extension<HttpState>,
    Extension(session): Extension<ConsoleSession>,
) -> Json<EditorView> {
    let editor = state.services.post_editor(session.credentials);
    Json(EditorView::from(&editor))
}

pub async fn edit_post(
    Extension(state): Extension<HttpState>,
    Extension(session): Extension<ConsoleSession>,
    Path(id): Path<String>,
) -> HttpResult<Response> {
    let id = PostId::new(id)?;
    let mut editor = state.services.post_editor(session.credentials);

    Ok(match editor.load(id).await {
        LoadOutcome::Loaded => Json(EditorView::from(&editor)).into_response(),
        LoadOutcome::LoginRequired => login_redirect(&state),
        LoadOutcome::Failed(_) => {
            (StatusCode::BAD_GATEWAY, Json(EditorView::from(&editor))).into_response()
        }
    })
}

pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Extension(session): Extension<ConsoleSession>,
    multipart: Multipart,
) -> HttpResult<Response> {
    let mut editor = state.services.post_editor(Arc::clone(&session.credentials));
    submit_form(&state, &session, &mut editor, multipart).await
}

pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Extension(session): Extension<ConsoleSession>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> HttpResult<Response> {
    let id = PostId::new(id)?;
    let mut editor = state.services.post_editor(Arc::clone(&session.credentials));
    editor.edit_existing(id);
    submit_form(&state, &session, &mut editor, multipart).await
}

async fn submit_form(
    state: &HttpState,
    session: &ConsoleSession,
    editor: &mut PostEditor,
    multipart: Multipart,
) -> HttpResult<Response> {
    apply_form(editor, multipart).await?;
    if editor.error().is_some() {
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(EditorView::from(&*editor))).into_response());
    }

    let outcome = editor.submit(Some(&session.user)).await;
    let view = Json(EditorView::from(&*editor));
    Ok(match outcome {
        SubmitOutcome::Created => (StatusCode::CREATED, view).into_response(),
        SubmitOutcome::Updated => (StatusCode::OK, view).into_response(),
        SubmitOutcome::Conflict(_) => (StatusCode::CONFLICT, view).into_response(),
        SubmitOutcome::LoginRequired => login_redirect(state),
        SubmitOutcome::Failed(_) => (StatusCode::BAD_GATEWAY, view).into_response(),
    })
}

struct UploadedFile {
    file_name: String,
    content_type: String,
    data: Bytes,
}

/// Copy multipart fields into the editor. The image is attached last so a
/// rejection is not cleared by later field edits.
async fn apply_form(editor: &mut PostEditor, mut multipart: Multipart) -> HttpResult<()> {
    let mut upload: Option<UploadedFile> = None;

    while let Some(field) = multipart.next_field().await.map_err(bad_form)? {
        let name = field.name().unwrap_or_default().to_string();
        if name == "image" {
            let file_name = field.file_name().unwrap_or("upload").to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let data = field.bytes().await.map_err(bad_form)?;
            if !data.is_empty() {
                upload = Some(UploadedFile {
                    file_name,
                    content_type,
                    data,
                });
            }
            continue;
        }

        let value = field.text().await.map_err(bad_form)?;
        match name.as_str() {
            "title" => editor.set_title(value),
            "content" => editor.set_content(value),
            "category" => editor.set_category(value),
            "author" => editor.set_author_name(value),
            "subcategory" => editor.set_subcategory(value.parse::<Subcategory>()?),
            "status" => editor.set_status(value.parse::<PostStatus>()?),
            // derived from the title unless editing an existing post
            "slug" if editor.is_editing() => editor.set_slug(value),
            "slug" => {}
            other => tracing::debug!(field = other, "ignoring unknown form field"),
        }
    }

    if let Some(file) = upload {
        editor.attach_image(file.file_name, &file.content_type, file.data);
    }
    Ok(())
}

fn bad_form(err: MultipartError) -> HttpError {
    ApplicationError::validation(format!("invalid form data: {err}")).into()
}
