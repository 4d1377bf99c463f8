// src/domain/access/role.rs
use crate::domain::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::permission::WILDCARD;

const SUPERADMIN_PERMISSIONS: &[&str] = &[WILDCARD];

const ADMIN_PERMISSIONS: &[&str] = &[
    "dashboard",
    "posts",
    "posts:create",
    "posts:read",
    "posts:edit",
    "posts:delete",
    "posts:publish",
    "categories",
    "categories:create",
    "categories:edit",
    "categories:delete",
    "users:read",
    "users:create",
    "users:edit",
    "users:delete",
    "settings:read",
];

const USER_PERMISSIONS: &[&str] = &[
    "dashboard",
    "posts:read",
    "posts:create",
    "posts:edit:own",
    "posts:delete:own",
    "posts:publish:own",
    "categories:read",
    "users:read:own",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlogRole {
    Superadmin,
    Admin,
    User,
}

impl BlogRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Superadmin => "superadmin",
            Self::Admin => "admin",
            Self::User => "user",
        }
    }

    /// Base permission set granted to the role.
    pub fn permissions(&self) -> &'static [&'static str] {
        match self {
            Self::Superadmin => SUPERADMIN_PERMISSIONS,
            Self::Admin => ADMIN_PERMISSIONS,
            Self::User => USER_PERMISSIONS,
        }
    }

    pub fn is_top_tier(&self) -> bool {
        matches!(self, Self::Superadmin)
    }

    /// Roles whose local grants are reconfirmed against the backend.
    pub fn is_elevated(&self) -> bool {
        matches!(self, Self::Superadmin | Self::Admin)
    }
}

impl fmt::Display for BlogRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlogRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "superadmin" => Ok(Self::Superadmin),
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            other => Err(DomainError::Validation(format!("unknown role '{other}'"))),
        }
    }
}
