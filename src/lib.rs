//! Blog authoring console: permission-gated post editing against a remote
//! blog backend.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
