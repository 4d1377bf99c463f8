// src/presentation/http/state.rs
use crate::application::services::ConsoleServices;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ConsoleServices>,
    pub login_path: String,
    pub validate_with_backend: bool,
}
