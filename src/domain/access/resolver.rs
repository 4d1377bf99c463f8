// src/domain/access/resolver.rs
use super::{
    BlogRole, Permission, PrincipalId,
    hierarchy::holds,
    permission::WILDCARD,
};

/// Decide whether `role` may perform `requested`.
///
/// The top tier is granted everything; other roles go through [`permits`]
/// with their permission table.
pub fn is_granted(
    role: BlogRole,
    requested: &Permission,
    requester: Option<&PrincipalId>,
    owner: Option<&PrincipalId>,
) -> bool {
    role.is_top_tier() || permits(role.permissions(), requested, requester, owner)
}

/// Decide `requested` against an explicit permission table.
///
/// A table holding `*` grants everything. Ownership-scoped requests need the
/// scoped token itself and a requester equal to the owner; holding the
/// unscoped capability is not enough, and a missing identity on either side
/// denies.
pub fn permits(
    granted: &[&str],
    requested: &Permission,
    requester: Option<&PrincipalId>,
    owner: Option<&PrincipalId>,
) -> bool {
    if granted.contains(&WILDCARD) {
        return true;
    }
    if !holds(granted, requested.as_str()) {
        return false;
    }
    !requested.is_ownership_scoped()
        || matches!((requester, owner), (Some(requester), Some(owner)) if requester == owner)
}

/// String-level entry point used by hosts that carry raw role names.
///
/// Unknown roles and malformed tokens deny.
pub fn has_permission(
    requested: &str,
    role: Option<&str>,
    requester: Option<&str>,
    owner: Option<&str>,
) -> bool {
    let Some(role) = role.and_then(|r| r.parse::<BlogRole>().ok()) else {
        return false;
    };
    let Ok(requested) = Permission::new(requested) else {
        return false;
    };
    let requester = requester.map(PrincipalId::from);
    let owner = owner.map(PrincipalId::from);
    is_granted(role, &requested, requester.as_ref(), owner.as_ref())
}
