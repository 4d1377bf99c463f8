// src/infrastructure/http/client.rs
use crate::application::{
    ApplicationResult,
    dto::{ApiMessage, BlogRecord, BlogSubmission, RemoteIdentity},
    error::ApplicationError,
    ports::{blog::BlogGateway, trust::TrustBoundary},
};
use crate::domain::post::PostId;
use async_trait::async_trait;
use reqwest::{
    Client, Response, StatusCode,
    multipart::{Form, Part},
};
use std::time::Duration;

const VALIDATE_TOKEN_PATH: &str = "/api/auth/validate-token";
const BLOGS_PATH: &str = "/api/blogs";

/// reqwest-backed client for the blog backend: token validation and post CRUD.
#[derive(Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ApplicationResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApplicationError::infrastructure(format!("http client: {e}")))?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn post_url(&self, id: &PostId) -> String {
        self.url(&format!("{BLOGS_PATH}/{id}"))
    }
}

fn transport(e: reqwest::Error) -> ApplicationError {
    tracing::error!(error = %e, "backend request failed");
    ApplicationError::infrastructure(format!("backend request failed: {e}"))
}

/// Map non-success responses, reading the backend's `message` when present.
async fn ensure_success(response: Response) -> ApplicationResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<ApiMessage>()
        .await
        .ok()
        .and_then(|body| body.message);
    tracing::warn!(%status, ?message, "backend returned an error");
    if status == StatusCode::UNAUTHORIZED {
        return Err(ApplicationError::unauthorized(
            message.unwrap_or_else(|| "credentials rejected".into()),
        ));
    }
    Err(ApplicationError::rejected(status.as_u16(), message))
}

fn multipart(submission: &BlogSubmission) -> ApplicationResult<Form> {
    let mut form = Form::new();
    for (name, value) in submission.text_fields() {
        form = form.text(name, value);
    }
    if let Some(image) = &submission.image {
        let part = Part::bytes(image.data().to_vec())
            .file_name(image.file_name().to_string())
            .mime_str(image.content_type())
            .map_err(|e| ApplicationError::validation(format!("image content type: {e}")))?;
        form = form.part("image", part);
    }
    Ok(form)
}

#[async_trait]
impl TrustBoundary for BackendClient {
    async fn validate_token(&self, token: &str) -> ApplicationResult<RemoteIdentity> {
        let response = self
            .http
            .get(self.url(VALIDATE_TOKEN_PATH))
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%status, "token validation refused");
            return Err(ApplicationError::unauthorized(format!(
                "token validation returned {status}"
            )));
        }

        response
            .json::<RemoteIdentity>()
            .await
            .map_err(|e| ApplicationError::infrastructure(format!("invalid identity payload: {e}")))
    }
}

#[async_trait]
impl BlogGateway for BackendClient {
    async fn fetch(&self, token: &str, id: &PostId) -> ApplicationResult<BlogRecord> {
        tracing::debug!(post = %id, "fetching post");
        let response = self
            .http
            .get(self.post_url(id))
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport)?;

        ensure_success(response)
            .await?
            .json::<BlogRecord>()
            .await
            .map_err(|e| ApplicationError::infrastructure(format!("invalid post payload: {e}")))
    }

    async fn create(&self, token: &str, submission: &BlogSubmission) -> ApplicationResult<()> {
        let response = self
            .http
            .post(self.url(BLOGS_PATH))
            .bearer_auth(token)
            .multipart(multipart(submission)?)
            .send()
            .await
            .map_err(transport)?;
        ensure_success(response).await.map(|_| ())
    }

    async fn update(
        &self,
        token: &str,
        id: &PostId,
        submission: &BlogSubmission,
    ) -> ApplicationResult<()> {
        let response = self
            .http
            .put(self.post_url(id))
            .bearer_auth(token)
            .multipart(multipart(submission)?)
            .send()
            .await
            .map_err(transport)?;
        ensure_success(response).await.map(|_| ())
    }
}
