// src/presentation/http/controllers/preview.rs
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SlugPreviewRequest {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct SlugPreviewResponse {
    pub slug: String,
}

/// Live preview of the slug a title would get.
pub async fn slug_preview(
    Extension(state): Extension<HttpState>,
    Json(request): Json<SlugPreviewRequest>,
) -> Json<SlugPreviewResponse> {
    let slug = state.services.slugger().slugify(&request.title);
    Json(SlugPreviewResponse { slug })
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
