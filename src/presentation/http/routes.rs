// src/presentation/http/routes.rs
use crate::domain::post::MAX_IMAGE_BYTES;
use crate::presentation::http::{
    controllers::{posts, preview},
    middleware::{require_permission, require_post_permission},
    state::HttpState,
};
use axum::{
    Extension, Router,
    extract::{DefaultBodyLimit, Path, Request},
    http::{HeaderValue, Method, header},
    middleware::{Next, from_fn},
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

// leaves room for oversized images to reach the editor's own size check
const UPLOAD_BODY_LIMIT: usize = MAX_IMAGE_BYTES * 2;

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(preview::health))
        .route("/console/slug-preview", post(preview::slug_preview))
        .route(
            "/console/posts/new",
            get(posts::new_post).route_layer(from_fn(|req: Request, next: Next| {
                require_permission(req, next, "posts:create")
            })),
        )
        .route(
            "/console/posts",
            post(posts::create_post).route_layer(from_fn(|req: Request, next: Next| {
                require_permission(req, next, "posts:create")
            })),
        )
        .route(
            "/console/posts/{id}/edit",
            get(posts::edit_post).route_layer(from_fn(
                |id: Path<String>, req: Request, next: Next| {
                    require_post_permission(id, req, next, "posts:edit")
                },
            )),
        )
        .route(
            "/console/posts/{id}",
            put(posts::update_post).route_layer(from_fn(
                |id: Path<String>, req: Request, next: Next| {
                    require_post_permission(id, req, next, "posts:edit")
                },
            )),
        )
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}
