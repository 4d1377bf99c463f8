// src/domain/access/decision.rs
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    AuthenticationRequired,
    AccountInactive,
    OwnershipRequired,
    InsufficientPermissions,
    SessionExpired,
    RoleVerificationFailed,
    BackendPermissionDenied,
    PermissionValidationFailed,
}

impl DenialReason {
    pub fn code(&self) -> &'static str {
        match self {
            Self::AuthenticationRequired => "authentication_required",
            Self::AccountInactive => "account_inactive",
            Self::OwnershipRequired => "ownership_required",
            Self::InsufficientPermissions => "insufficient_permissions",
            Self::SessionExpired => "session_expired",
            Self::RoleVerificationFailed => "role_verification_failed",
            Self::BackendPermissionDenied => "backend_permission_denied",
            Self::PermissionValidationFailed => "permission_validation_failed",
        }
    }

    /// Text shown on the denial view.
    pub fn message(&self) -> &'static str {
        match self {
            Self::OwnershipRequired => "You can only manage your own posts.",
            _ => "You don't have permission to view this.",
        }
    }
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    Denied(DenialReason),
}

impl AccessDecision {
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }

    pub fn denial(&self) -> Option<DenialReason> {
        match self {
            Self::Granted => None,
            Self::Denied(reason) => Some(*reason),
        }
    }
}
