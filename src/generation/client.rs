use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::post::{ComposedPrompt, PostRequest, compose};

/// One chat completion to run against the model.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: ComposedPrompt,
    pub model: String,
    pub temperature: f64,
}

impl CompletionRequest {
    /// Composes the prompts for `post` and pairs them with the sampling settings.
    pub fn for_post(post: &PostRequest, model: &str, temperature: f64) -> Self {
        Self {
            prompt: compose(post),
            model: model.to_string(),
            temperature,
        }
    }
}

/// A text generation backend.
///
/// The HTTP handler and the CLI only talk to this trait so tests can swap in
/// a fake without touching the network.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Runs one completion and returns the text of the first choice.
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Client for OpenAI-compatible `/v1/chat/completions` endpoints.
pub struct OpenAiClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl OpenAiClient {
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let url = self.completions_url();

        let chat_request = ChatCompletionRequest {
            model: &request.model,
            messages: vec![
                Message {
                    role: "system",
                    content: Cow::Borrowed(&request.prompt.system),
                },
                Message {
                    role: "user",
                    content: Cow::Borrowed(&request.prompt.user),
                },
            ],
            temperature: request.temperature,
        };

        let mut http_request = self.client.post(&url).json(&chat_request);

        if let Some(api_key) = &self.api_key {
            http_request = http_request.header("Authorization", format!("Bearer {api_key}"));
        }

        tracing::debug!(%url, model = %request.model, "sending chat completion request");

        let response = http_request
            .send()
            .await
            .with_context(|| format!("Failed to connect to API endpoint: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("API request failed with status {status}: {body}");
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .context("Failed to decode chat completion response")?;

        first_choice_content(completion)
    }
}

fn first_choice_content(completion: ChatCompletionResponse) -> Result<String> {
    let choice = completion
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| anyhow::anyhow!("API response contained no completions"))?;

    choice
        .message
        .content
        .ok_or_else(|| anyhow::anyhow!("API response completion has no content"))
}
