//! HTTP service exposing post generation.

mod handler;

use actix_web::{App, HttpServer, web};
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;

use crate::generation::CompletionClient;

pub use handler::{generate_post, health};

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn CompletionClient>,
    pub model: String,
    pub temperature: f64,
}

impl AppState {
    pub fn new(client: Arc<dyn CompletionClient>, model: String, temperature: f64) -> Self {
        Self {
            client,
            model,
            temperature,
        }
    }
}

/// Registers the service routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/api/generate-post", web::post().to(generate_post));
}

/// Binds `listen` and serves until the process is stopped.
pub async fn run(state: AppState, listen: SocketAddr) -> Result<()> {
    let data = web::Data::new(state);

    tracing::info!(%listen, model = %data.model, "starting HTTP server");

    HttpServer::new(move || App::new().app_data(data.clone()).configure(configure))
        .bind(listen)
        .with_context(|| format!("Failed to bind {listen}"))?
        .run()
        .await
        .context("HTTP server terminated with an error")
}
