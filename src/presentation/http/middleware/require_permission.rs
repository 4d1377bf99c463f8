// src/presentation/http/middleware/require_permission.rs
use crate::application::{
    ApplicationResult,
    dto::AuthSnapshot,
    error::ApplicationError,
    ports::credentials::CredentialProvider,
    services::{GuardRequest, GuardState},
};
use crate::domain::{
    access::{DenialReason, Permission, PrincipalId},
    post::PostId,
};
use crate::presentation::http::{
    error::HttpError,
    session::{ConsoleSession, credentials_from_headers, load_session},
    state::HttpState,
    views::DenialView,
};
use axum::{
    body::Body,
    extract::Path,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;

/// Middleware gating a route behind `permission`.
///
/// Usage: `axum::middleware::from_fn(|req: Request, next: Next| require_permission(req, next, "posts:create"))`
///
/// Unauthenticated callers are redirected to the login view, other denials
/// render the denial view. On success the request carries a [`ConsoleSession`].
pub async fn require_permission(
    req: Request<Body>,
    next: Next,
    permission: &'static str,
) -> Response {
    let permission = match Permission::new(permission) {
        Ok(permission) => permission,
        Err(err) => return HttpError::from(err).into_response(),
    };
    let checkpoint = match Checkpoint::open(&req).await {
        Ok(checkpoint) => checkpoint,
        Err(resp) => return resp,
    };
    let outcome = checkpoint.check(permission, None).await;
    checkpoint.admit(outcome, req, next).await
}

/// Like [`require_permission`] for routes addressing one post by its `{id}`
/// segment. A caller without `permission` is checked again against its
/// ownership-scoped form (`posts:edit` → `posts:edit:own`), with the post's
/// author as the owner.
///
/// Usage: `from_fn(|id: Path<String>, req: Request, next: Next| require_post_permission(id, req, next, "posts:edit"))`
pub async fn require_post_permission(
    Path(id): Path<String>,
    req: Request<Body>,
    next: Next,
    permission: &'static str,
) -> Response {
    let permission = match Permission::new(permission) {
        Ok(permission) => permission,
        Err(err) => return HttpError::from(err).into_response(),
    };
    let id = match PostId::new(id) {
        Ok(id) => id,
        Err(err) => return HttpError::from(err).into_response(),
    };
    let checkpoint = match Checkpoint::open(&req).await {
        Ok(checkpoint) => checkpoint,
        Err(resp) => return resp,
    };

    let scoped = permission.scoped_to_owner();
    let mut outcome = checkpoint.check(permission, None).await;
    if let (GuardState::Denied(DenialReason::InsufficientPermissions), Some(scoped)) =
        (outcome, scoped)
    {
        outcome = match checkpoint.post_owner(&id).await {
            Ok(owner) => checkpoint.check(scoped, owner).await,
            Err(ApplicationError::Unauthorized(_)) => return login_redirect(&checkpoint.state),
            Err(err) => {
                tracing::warn!(error = %err, post = %id, "could not resolve post owner");
                GuardState::Denied(DenialReason::PermissionValidationFailed)
            }
        };
    }
    checkpoint.admit(outcome, req, next).await
}

pub fn login_redirect(state: &HttpState) -> Response {
    Redirect::to(&state.login_path).into_response()
}

/// Per-request inputs shared by every guard check on one route.
struct Checkpoint {
    state: HttpState,
    credentials: Arc<dyn CredentialProvider>,
    auth: AuthSnapshot,
}

impl Checkpoint {
    // Reads the request synchronously so the returned future does not borrow
    // the (non-`Sync`) request and stays `Send`.
    fn open(req: &Request<Body>) -> impl Future<Output = Result<Self, Response>> + Send + use<> {
        let extracted = req.extensions().get::<HttpState>().cloned().map(|state| {
            let credentials: Arc<dyn CredentialProvider> =
                Arc::new(credentials_from_headers(req.headers()));
            (state, credentials)
        });
        async move {
            let Some((state, credentials)) = extracted else {
                return Err(HttpError::from_error(ApplicationError::infrastructure(
                    "application state missing",
                ))
                .into_response());
            };
            let auth = load_session(&state.services, credentials.as_ref()).await;
            Ok(Self {
                state,
                credentials,
                auth,
            })
        }
    }

    async fn check(&self, permission: Permission, owner: Option<PrincipalId>) -> GuardState {
        let request = GuardRequest {
            resource_owner: owner,
            ..GuardRequest::new(permission)
        }
        .with_backend_validation(self.state.validate_with_backend);
        self.state
            .services
            .access_guard(Arc::clone(&self.credentials))
            .check(&self.auth, &request)
            .await
    }

    async fn post_owner(&self, id: &PostId) -> ApplicationResult<Option<PrincipalId>> {
        self.state
            .services
            .post_owner(self.credentials.as_ref(), id)
            .await
    }

    async fn admit(self, outcome: GuardState, mut req: Request<Body>, next: Next) -> Response {
        match (outcome, self.auth.user) {
            (GuardState::Granted, Some(user)) => {
                req.extensions_mut().insert(ConsoleSession {
                    credentials: self.credentials,
                    user,
                });
                next.run(req).await
            }
            (GuardState::Denied(DenialReason::AuthenticationRequired), _) => {
                login_redirect(&self.state)
            }
            (GuardState::Denied(reason), _) => DenialView::new(reason).into_response(),
            _ => DenialView::new(DenialReason::PermissionValidationFailed).into_response(),
        }
    }
}
