#![allow(clippy::unwrap_used)]
//! End-to-end tests for `POST /api/generate-post`.
//!
//! The real OpenAI-compatible client is pointed at a mockito server, so these
//! cover the whole path: JSON body, prompt composition, provider call and the
//! JSON response.

use actix_web::{App, http::StatusCode, test, web};
use mockito::Matcher;
use postgen_cli::generation::OpenAiClient;
use postgen_cli::server::{AppState, configure};
use serde_json::{Value, json};
use std::sync::Arc;

fn app_state(endpoint: String) -> web::Data<AppState> {
    let client = Arc::new(OpenAiClient::new(endpoint, Some("sk-test".to_string())));
    web::Data::new(AppState::new(client, "gpt-3.5-turbo".to_string(), 0.7))
}

#[actix_web::test]
async fn test_instagram_post_end_to_end() {
    let mut server = mockito::Server::new_async().await;
    let provider = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer sk-test")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(json!({ "model": "gpt-3.5-turbo", "temperature": 0.7 })),
            Matcher::Regex("Add 3-5 relevant hashtags at the end".to_string()),
            Matcher::Regex("Write a instagram post about: a new coffee shop".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "choices": [{ "message": { "role": "assistant", "content": "Doors open Friday ☕ #coffee #local #opening" } }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let app = test::init_service(
        App::new()
            .app_data(app_state(server.url()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/generate-post")
        .set_json(json!({
            "platform": "instagram",
            "description": "a new coffee shop",
            "tone": "Friendly",
            "includeHashtags": true,
            "includeEmoji": true
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["content"], "Doors open Friday ☕ #coffee #local #opening");
    provider.assert_async().await;
}

#[actix_web::test]
async fn test_thread_is_returned_as_single_string() {
    let mut server = mockito::Server::new_async().await;
    let thread = "1/ We shipped.\n2/ Here is why.\n3/ Try it today.";
    server
        .mock("POST", "/v1/chat/completions")
        .match_body(Matcher::Regex("Number each tweet".to_string()))
        .with_status(200)
        .with_body(json!({ "choices": [{ "message": { "content": thread } }] }).to_string())
        .create_async()
        .await;

    let app = test::init_service(
        App::new()
            .app_data(app_state(server.url()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/generate-post")
        .set_json(json!({
            "platform": "twitter",
            "description": "release 2.0",
            "makeThread": true,
            "wordLimit": 250,
            "tone": "Enthusiastic",
            "includeHashtags": false,
            "includeEmoji": false
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["content"], thread);
}

#[actix_web::test]
async fn test_provider_error_maps_to_500() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(503)
        .with_body("upstream overloaded")
        .create_async()
        .await;

    let app = test::init_service(
        App::new()
            .app_data(app_state(server.url()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/generate-post")
        .set_json(json!({
            "platform": "facebook",
            "description": "community bake sale",
            "tone": "Casual",
            "includeHashtags": true,
            "includeEmoji": false
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("503"));
    assert!(message.contains("upstream overloaded"));
}

#[actix_web::test]
async fn test_network_failure_maps_to_500() {
    // Nothing listens on port 1.
    let app = test::init_service(
        App::new()
            .app_data(app_state("http://127.0.0.1:1".to_string()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/generate-post")
        .set_json(json!({
            "platform": "linkedin",
            "description": "quarterly results",
            "tone": "Professional",
            "includeHashtags": true,
            "includeEmoji": false
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("Failed to connect"));
}
