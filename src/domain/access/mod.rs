// src/domain/access/mod.rs
pub mod decision;
pub mod hierarchy;
pub mod permission;
pub mod principal;
pub mod resolver;
pub mod role;

pub use decision::{AccessDecision, DenialReason};
pub use permission::Permission;
pub use principal::PrincipalId;
pub use resolver::{has_permission, is_granted, permits};
pub use role::BlogRole;
