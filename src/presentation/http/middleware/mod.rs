pub mod require_permission;

pub use require_permission::{require_permission, require_post_permission};
