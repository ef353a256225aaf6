use anyhow::Result;
use std::sync::Arc;

use super::load_resolved_config;
use crate::config::ResolveOptions;
use crate::generation::OpenAiClient;
use crate::server::{self, AppState};

pub struct ServeOptions {
    pub listen: Option<String>,
    pub provider: Option<String>,
    pub model: Option<String>,
}

pub async fn run_serve(options: ServeOptions) -> Result<()> {
    let config = load_resolved_config(&ResolveOptions {
        provider: options.provider,
        model: options.model,
        listen: options.listen,
    })?;

    tracing::info!(
        provider = %config.provider_name,
        endpoint = %config.endpoint,
        temperature = config.temperature,
        "using completion provider"
    );

    let client = Arc::new(OpenAiClient::new(config.endpoint, config.api_key));
    let state = AppState::new(client, config.model, config.temperature);

    server::run(state, config.listen).await
}
