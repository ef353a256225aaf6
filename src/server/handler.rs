use actix_web::{HttpResponse, web};
use anyhow::{Context, Result};
use serde_json::json;

use super::AppState;
use crate::generation::CompletionRequest;
use crate::post::PostRequest;

/// `POST /api/generate-post`
///
/// Every failure, from an unparsable body to a provider outage, is reported
/// the same way: `500 {"error": "<message>"}`.
pub async fn generate_post(state: web::Data<AppState>, body: web::Bytes) -> HttpResponse {
    match generate(&state, &body).await {
        Ok(content) => HttpResponse::Ok().json(json!({ "content": content })),
        Err(e) => {
            tracing::error!("post generation failed: {e:#}");
            HttpResponse::InternalServerError().json(json!({ "error": format!("{e:#}") }))
        }
    }
}

async fn generate(state: &AppState, body: &[u8]) -> Result<String> {
    let post: PostRequest =
        serde_json::from_slice(body).context("Invalid post generation request")?;

    tracing::debug!(platform = %post.platform, tone = %post.tone, "generating post");

    let request = CompletionRequest::for_post(&post, &state.model, state.temperature);
    state.client.complete(&request).await
}

/// `GET /health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}
