//! Biblion Library Lending Management System
//!
//! A Rust implementation of a library lending management server, providing a
//! REST JSON API for books, members and book loans, with a borrowing policy
//! enforced at checkout.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers. Configuration is consumed
/// at startup (services capture what they need), so only the services live
/// here.
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}
