// tests/support/helpers.rs
use super::mocks::{FakeTrust, RecordingGateway};
use axum::body::{self, Body};
use axum::http::{Method, Request, Response, header};
use blog_console::application::{
    ports::{credentials::CredentialKey, slug::SlugGenerator},
    services::{ConsoleServices, PostEditor},
};
use blog_console::infrastructure::{security::MemoryCredentialStore, util::DefaultSlugGenerator};
use blog_console::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

pub const LOGIN_PATH: &str = "/AdminLogin";
pub const BOUNDARY: &str = "console-test-boundary";

pub fn services(gateway: Arc<RecordingGateway>) -> Arc<ConsoleServices> {
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    Arc::new(ConsoleServices::new(
        Arc::new(FakeTrust),
        gateway,
        slugger,
        Duration::from_secs(30),
    ))
}

pub fn make_test_router(gateway: Arc<RecordingGateway>) -> axum::Router {
    let state = HttpState {
        services: services(gateway),
        login_path: LOGIN_PATH.to_string(),
        validate_with_backend: true,
    };
    build_router(state, &["http://localhost:3000".to_string()])
}

pub fn store_with_admin_token(token: &str) -> Arc<MemoryCredentialStore> {
    Arc::new(MemoryCredentialStore::new().with(CredentialKey::AdminToken, token))
}

pub fn editor_with(
    gateway: Arc<RecordingGateway>,
    credentials: Arc<MemoryCredentialStore>,
) -> PostEditor {
    services(gateway).post_editor(credentials)
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Build a `multipart/form-data` body with text fields and an optional file
/// `(field file name, content type, bytes)` sent as `image`.
pub fn multipart_body(fields: &[(&str, &str)], image: Option<(&str, &str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, content_type, data)) = image {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart_request(method: Method, uri: &str, token: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, bearer(token))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub async fn body_json(resp: Response<Body>) -> Value {
    let bytes = body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
