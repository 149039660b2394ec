//! Messaging-gateway webhook (Axum router + service wiring).
//!
//! - `routes.rs`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use fintrack_core::SystemClock;
use fintrack_report::PdfRenderer;

use crate::config::Config;
use crate::dispatcher::Bot;
use crate::service::LedgerService;
use crate::shutdown::Shutdown;

pub mod dto;
pub mod errors;
pub mod routes;

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub bot: Bot,
    pub shutdown: Shutdown,
}

impl AppState {
    pub fn new(bot: Bot, shutdown: Shutdown) -> Self {
        Self { bot, shutdown }
    }

    /// Production wiring: wall clock, PDF renderer from the report settings.
    pub fn from_config(config: &Config) -> Self {
        let service = Arc::new(LedgerService::new(Arc::new(SystemClock), config.window_days));
        let renderer = Arc::new(PdfRenderer::new(config.report.clone()));
        Self::new(Bot::new(service, renderer), Shutdown::new())
    }
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .merge(routes::router())
        .layer(Extension(state))
}
