// src/domain/access/permission.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Token granting every permission.
pub const WILDCARD: &str = "*";

const OWNERSHIP_SUFFIX: &str = ":own";

/// A permission token such as `posts:edit` or `posts:delete:own`.
///
/// Tokens are `*` or colon separated segments of lower-case ASCII letters and
/// underscores. A trailing `own` segment restricts the grant to resources the
/// requester owns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Permission(String);

impl Permission {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value == WILDCARD {
            return Ok(Self(value));
        }
        if value.is_empty() {
            return Err(DomainError::Validation(
                "permission cannot be empty".into(),
            ));
        }
        let well_formed = value.split(':').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c == '_')
        });
        if !well_formed {
            return Err(DomainError::Validation(format!(
                "malformed permission '{value}'"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_ownership_scoped(&self) -> bool {
        self.unscoped().is_some()
    }

    /// The token without its ownership qualifier, if it carries one.
    pub fn unscoped(&self) -> Option<&str> {
        self.0
            .strip_suffix(OWNERSHIP_SUFFIX)
            .filter(|base| !base.is_empty())
    }

    /// The ownership-scoped form of an unscoped token: `posts:edit` becomes
    /// `posts:edit:own`. `None` for `*` and tokens that are already scoped.
    pub fn scoped_to_owner(&self) -> Option<Permission> {
        if self.0 == WILDCARD || self.is_ownership_scoped() {
            return None;
        }
        Some(Self(format!("{}{OWNERSHIP_SUFFIX}", self.0)))
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Permission {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Permission {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Permission> for String {
    fn from(value: Permission) -> Self {
        value.0
    }
}
