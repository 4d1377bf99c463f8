// tests/console_routes.rs
use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use blog_console::application::dto::BlogRecord;
use blog_console::domain::access::PrincipalId;
use std::sync::Arc;
use tower::ServiceExt;

mod support;

use support::{
    ADMIN_TOKEN, EXPIRED_TOKEN, GatewayReply, LOGIN_PATH, RecordingGateway, USER_TOKEN, bearer,
    body_json, make_test_router, multipart_body, multipart_request,
};

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, bearer(token));
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn health_is_open() {
    let app = make_test_router(Arc::new(RecordingGateway::new()));
    let resp = app.oneshot(get("/health", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["status"], "ok");
}

#[tokio::test]
async fn anonymous_caller_is_sent_to_login() {
    let app = make_test_router(Arc::new(RecordingGateway::new()));
    let resp = app.oneshot(get("/console/posts/new", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[header::LOCATION], LOGIN_PATH);
}

#[tokio::test]
async fn expired_token_is_sent_to_login() {
    // a refused token never resolves a session, so no session_expired denial
    let app = make_test_router(Arc::new(RecordingGateway::new()));
    let resp = app
        .oneshot(get("/console/posts/abc/edit", Some(EXPIRED_TOKEN)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[header::LOCATION], LOGIN_PATH);
}

#[tokio::test]
async fn user_may_open_blank_editor() {
    let app = make_test_router(Arc::new(RecordingGateway::new()));
    let resp = app
        .oneshot(get("/console/posts/new", Some(USER_TOKEN)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["mode"], "create");
    assert_eq!(body["subcategory"], "Article");
    assert_eq!(body["status"], "None");
    assert_eq!(body["options"]["subcategories"][2], "Interview Questions");
    assert_eq!(body["options"]["statuses"][2], "Editor's Pick");
}

#[tokio::test]
async fn blog_token_cookie_is_accepted() {
    let app = make_test_router(Arc::new(RecordingGateway::new()));
    let req = Request::builder()
        .uri("/console/posts/new")
        .header(header::COOKIE, format!("blogToken={USER_TOKEN}"))
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

fn authored_by(author_id: &str) -> BlogRecord {
    BlogRecord {
        id: Some("abc".into()),
        title: Some("Stored".into()),
        author_id: Some(PrincipalId::new(author_id)),
        ..BlogRecord::default()
    }
}

#[tokio::test]
async fn user_cannot_edit_post_without_known_owner() {
    let gateway = Arc::new(RecordingGateway::new());
    let app = make_test_router(Arc::clone(&gateway));
    let resp = app
        .oneshot(get("/console/posts/abc/edit", Some(USER_TOKEN)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let body = body_json(resp).await;
    assert_eq!(body["error"], "Access Denied");
    assert_eq!(body["reason"], "ownership_required");
    // only the owner lookup reached the backend
    assert_eq!(gateway.calls().len(), 1);
}

#[tokio::test]
async fn user_edits_own_post() {
    // FakeTrust's user is id 2
    let gateway = Arc::new(RecordingGateway::new().with_record(authored_by("2")));
    let app = make_test_router(Arc::clone(&gateway));
    let resp = app
        .oneshot(get("/console/posts/abc/edit", Some(USER_TOKEN)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["title"], "Stored");

    let calls = gateway.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls.iter().all(|call| call.method == "GET" && call.token == USER_TOKEN));
}

#[tokio::test]
async fn user_cannot_edit_someone_elses_post() {
    let gateway = Arc::new(RecordingGateway::new().with_record(authored_by("1")));
    let app = make_test_router(Arc::clone(&gateway));
    let resp = app
        .oneshot(get("/console/posts/abc/edit", Some(USER_TOKEN)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(resp).await["reason"], "ownership_required");
}

#[tokio::test]
async fn owner_update_is_forwarded_and_foreign_update_is_not() {
    let gateway = Arc::new(RecordingGateway::new().with_record(authored_by("2")));
    let app = make_test_router(Arc::clone(&gateway));
    let body = multipart_body(&[("title", "Mine")], None);
    let resp = app
        .oneshot(multipart_request(Method::PUT, "/console/posts/abc", USER_TOKEN, body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(gateway.calls().last().unwrap().method, "PUT");

    let gateway = Arc::new(RecordingGateway::new().with_record(authored_by("1")));
    let app = make_test_router(Arc::clone(&gateway));
    let body = multipart_body(&[("title", "Not mine")], None);
    let resp = app
        .oneshot(multipart_request(Method::PUT, "/console/posts/abc", USER_TOKEN, body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(resp).await["reason"], "ownership_required");
    assert!(gateway.calls().iter().all(|call| call.method != "PUT"));
}

#[tokio::test]
async fn owner_lookup_failure_fails_closed() {
    let gateway = Arc::new(RecordingGateway::replying([GatewayReply::Down]));
    let app = make_test_router(gateway);
    let resp = app
        .oneshot(get("/console/posts/abc/edit", Some(USER_TOKEN)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(resp).await["reason"], "permission_validation_failed");
}

#[tokio::test]
async fn admin_opens_existing_post() {
    let gateway = Arc::new(RecordingGateway::new());
    let app = make_test_router(Arc::clone(&gateway));
    let resp = app
        .oneshot(get("/console/posts/abc/edit", Some(ADMIN_TOKEN)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["mode"], "edit");
    assert_eq!(body["id"], "abc");
    let calls = gateway.calls();
    assert_eq!(calls[0].method, "GET");
    assert_eq!(calls[0].token, ADMIN_TOKEN);
}

#[tokio::test]
async fn load_failure_is_bad_gateway() {
    let gateway = Arc::new(RecordingGateway::replying([GatewayReply::Down]));
    let app = make_test_router(gateway);
    let resp = app
        .oneshot(get("/console/posts/abc/edit", Some(ADMIN_TOKEN)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        body_json(resp).await["error"],
        "Failed to load blog data for editing"
    );
}

#[tokio::test]
async fn multipart_create_is_forwarded() {
    let gateway = Arc::new(RecordingGateway::new());
    let app = make_test_router(Arc::clone(&gateway));
    let body = multipart_body(
        &[
            ("title", "Hello World"),
            ("content", "Body"),
            ("category", "Technology"),
            ("subcategory", "Tutorial"),
            ("status", "Trending"),
            ("slug", "ignored-on-create"),
        ],
        Some(("cover.png", "image/png", &b"\x89PNG"[..])),
    );
    let resp = app
        .oneshot(multipart_request(Method::POST, "/console/posts", USER_TOKEN, body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let view = body_json(resp).await;
    assert_eq!(view["title"], "");
    assert_eq!(view["notification"]["kind"], "success");

    let calls = gateway.calls();
    let sent = calls[0].submission.as_ref().unwrap();
    assert_eq!(sent.slug.as_deref(), Some("hello-world"));
    assert_eq!(sent.author, "bob");
    assert_eq!(sent.image.as_ref().unwrap().content_type(), "image/png");
}

#[tokio::test]
async fn non_image_upload_is_rejected_before_submit() {
    let gateway = Arc::new(RecordingGateway::new());
    let app = make_test_router(Arc::clone(&gateway));
    let body = multipart_body(
        &[("title", "Hello")],
        Some(("notes.txt", "text/plain", &b"plain text"[..])),
    );
    let resp = app
        .oneshot(multipart_request(Method::POST, "/console/posts", ADMIN_TOKEN, body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(resp).await["error"], "Only image files are allowed.");
    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn slug_conflict_keeps_the_form() {
    let gateway = Arc::new(RecordingGateway::replying([GatewayReply::Status(
        409,
        Some("Slug 'hello' already exists"),
    )]));
    let app = make_test_router(gateway);
    let body = multipart_body(&[("title", "Hello"), ("content", "Body")], None);
    let resp = app
        .oneshot(multipart_request(Method::POST, "/console/posts", ADMIN_TOKEN, body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let view = body_json(resp).await;
    assert_eq!(view["error"], "Slug 'hello' already exists");
    assert_eq!(view["title"], "Hello");
    assert_eq!(view["slug"], "hello");
}

#[tokio::test]
async fn admin_update_keeps_supplied_slug() {
    let gateway = Arc::new(RecordingGateway::new());
    let app = make_test_router(Arc::clone(&gateway));
    let body = multipart_body(&[("title", "New Title"), ("slug", "kept-slug")], None);
    let resp = app
        .oneshot(multipart_request(Method::PUT, "/console/posts/abc", ADMIN_TOKEN, body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let call = &gateway.calls()[0];
    assert_eq!(call.method, "PUT");
    assert_eq!(call.id.as_deref(), Some("abc"));
    assert_eq!(
        call.submission.as_ref().unwrap().slug.as_deref(),
        Some("kept-slug")
    );
}

#[tokio::test]
async fn slug_preview_follows_title() {
    let app = make_test_router(Arc::new(RecordingGateway::new()));
    let req = Request::builder()
        .method(Method::POST)
        .uri("/console/slug-preview")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"title":"Rust in Production!"}"#))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["slug"], "rust-in-production");
}
