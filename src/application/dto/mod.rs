// src/application/dto/mod.rs
pub mod auth;
pub mod blog;

pub use auth::{AuthSnapshot, RemoteIdentity, SessionUser};
pub use blog::{ApiMessage, BlogRecord, BlogSubmission};
