// src/presentation/http/mod.rs
pub mod controllers;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod session;
pub mod state;
pub mod views;
