// src/application/services/access_guard.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthSnapshot, SessionUser},
    error::ApplicationError,
    ports::{
        credentials::{CredentialProvider, bearer_token, stored_role},
        trust::TrustBoundary,
    },
};
use crate::domain::access::{
    AccessDecision, BlogRole, DenialReason, Permission, PrincipalId, is_granted,
};
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};
use tokio::sync::watch;

/// What the guard is asked to check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardRequest {
    pub permission: Permission,
    pub resource_owner: Option<PrincipalId>,
    pub validate_with_backend: bool,
}

impl GuardRequest {
    pub fn new(permission: Permission) -> Self {
        Self {
            permission,
            resource_owner: None,
            validate_with_backend: true,
        }
    }

    pub fn owned_by(mut self, owner: impl Into<PrincipalId>) -> Self {
        self.resource_owner = Some(owner.into());
        self
    }

    pub fn with_backend_validation(mut self, enabled: bool) -> Self {
        self.validate_with_backend = enabled;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GuardState {
    #[default]
    Validating,
    Granted,
    Denied(DenialReason),
}

impl From<AccessDecision> for GuardState {
    fn from(value: AccessDecision) -> Self {
        match value {
            AccessDecision::Granted => Self::Granted,
            AccessDecision::Denied(reason) => Self::Denied(reason),
        }
    }
}

/// Permission lookup applied to both the local and the backend-confirmed
/// identity. Defaults to the built-in role tables.
pub type Resolver =
    fn(BlogRole, &Permission, Option<&PrincipalId>, Option<&PrincipalId>) -> bool;

/// Gates a subtree behind a permission check, optionally reconfirmed by the
/// trust boundary for elevated roles. Fails closed.
#[derive(Clone)]
pub struct AccessGuard {
    trust: Arc<dyn TrustBoundary>,
    credentials: Arc<dyn CredentialProvider>,
    resolve: Resolver,
}

impl AccessGuard {
    pub fn new(trust: Arc<dyn TrustBoundary>, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self {
            trust,
            credentials,
            resolve: is_granted,
        }
    }

    pub fn with_resolver(mut self, resolve: Resolver) -> Self {
        self.resolve = resolve;
        self
    }

    pub async fn check(&self, auth: &AuthSnapshot, request: &GuardRequest) -> GuardState {
        if auth.loading {
            return GuardState::Validating;
        }
        self.decide(auth, request).await.into()
    }

    pub async fn decide(&self, auth: &AuthSnapshot, request: &GuardRequest) -> AccessDecision {
        match self.try_decide(auth, request).await {
            Ok(decision) => {
                if let AccessDecision::Denied(reason) = decision {
                    tracing::warn!(permission = %request.permission, %reason, "access denied");
                } else {
                    tracing::debug!(permission = %request.permission, "access granted");
                }
                decision
            }
            Err(err) => {
                tracing::error!(error = %err, permission = %request.permission, "permission validation failed");
                AccessDecision::Denied(DenialReason::PermissionValidationFailed)
            }
        }
    }

    async fn try_decide(
        &self,
        auth: &AuthSnapshot,
        request: &GuardRequest,
    ) -> ApplicationResult<AccessDecision> {
        let Some(user) = auth.user.as_ref() else {
            return Ok(AccessDecision::Denied(DenialReason::AuthenticationRequired));
        };
        if !user.is_active {
            return Ok(AccessDecision::Denied(DenialReason::AccountInactive));
        }

        let owner = request.resource_owner.as_ref();
        let role = self.local_role(user);
        let locally_granted = role
            .is_some_and(|role| (self.resolve)(role, &request.permission, Some(&user.id), owner));
        let Some(role) = role.filter(|_| locally_granted) else {
            return Ok(AccessDecision::Denied(local_denial(user, request)));
        };

        if !(request.validate_with_backend && role.is_elevated()) {
            return Ok(AccessDecision::Granted);
        }

        let Some(token) = bearer_token(self.credentials.as_ref()) else {
            tracing::debug!("no stored credential, skipping backend validation");
            return Ok(AccessDecision::Granted);
        };

        let remote = match self.trust.validate_token(&token).await {
            Ok(identity) => identity,
            Err(ApplicationError::Unauthorized(msg)) => {
                tracing::debug!(%msg, "backend rejected token");
                return Ok(AccessDecision::Denied(DenialReason::SessionExpired));
            }
            Err(err) => return Err(err),
        };

        let Ok(remote_role) = remote.role.parse::<BlogRole>() else {
            return Ok(AccessDecision::Denied(DenialReason::RoleVerificationFailed));
        };
        if remote_role != role {
            return Ok(AccessDecision::Denied(DenialReason::RoleVerificationFailed));
        }
        if !(self.resolve)(remote_role, &request.permission, Some(&remote.id), owner) {
            return Ok(AccessDecision::Denied(DenialReason::BackendPermissionDenied));
        }

        Ok(AccessDecision::Granted)
    }

    fn local_role(&self, user: &SessionUser) -> Option<BlogRole> {
        user.role
            .clone()
            .filter(|role| !role.is_empty())
            .or_else(|| stored_role(self.credentials.as_ref()))
            .and_then(|role| role.parse().ok())
    }
}

fn local_denial(user: &SessionUser, request: &GuardRequest) -> DenialReason {
    let owned_by_user = request.resource_owner.as_ref() == Some(&user.id);
    if request.permission.is_ownership_scoped() && !owned_by_user {
        DenialReason::OwnershipRequired
    } else {
        DenialReason::InsufficientPermissions
    }
}

/// Long-lived holder of a guard's state for hosts that re-run the check when
/// its inputs change. A check that finishes after a newer one was started is
/// discarded.
pub struct AccessGate {
    guard: AccessGuard,
    state: watch::Sender<GuardState>,
    generation: AtomicU64,
}

impl AccessGate {
    pub fn new(guard: AccessGuard) -> Self {
        let (state, _) = watch::channel(GuardState::Validating);
        Self {
            guard,
            state,
            generation: AtomicU64::new(0),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<GuardState> {
        self.state.subscribe()
    }

    pub fn current(&self) -> GuardState {
        *self.state.borrow()
    }

    /// Restart the check. Returns `false` when the result was superseded.
    pub async fn revalidate(&self, auth: &AuthSnapshot, request: &GuardRequest) -> bool {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(GuardState::Validating);

        let outcome = self.guard.check(auth, request).await;

        if self.generation.load(Ordering::SeqCst) != ticket {
            tracing::debug!(ticket, "discarding superseded access check");
            return false;
        }
        self.state.send_replace(outcome);
        true
    }
}
