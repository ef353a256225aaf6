use anyhow::Result;
use std::io::{self, Write};
use std::path::PathBuf;

use super::load_resolved_config;
use crate::cli::PostArgs;
use crate::config::ResolveOptions;
use crate::fs::atomic_write;
use crate::generation::{
    CompletionRequest, JoinPolicy, OpenAiClient, VariationOutcome, generate_variations,
};
use crate::ui::{Spinner, Style};

pub struct GenerateOptions {
    pub post: PostArgs,
    pub provider: Option<String>,
    pub model: Option<String>,
    pub variations: u8,
    pub keep_partial: bool,
    pub output: Option<PathBuf>,
}

pub async fn run_generate(options: GenerateOptions) -> Result<()> {
    let post = options.post.to_post_request()?;

    let config = load_resolved_config(&ResolveOptions {
        provider: options.provider,
        model: options.model,
        listen: None,
    })?;

    let client = OpenAiClient::new(config.endpoint, config.api_key);
    let request = CompletionRequest::for_post(&post, &config.model, config.temperature);

    let policy = if options.keep_partial {
        JoinPolicy::Settled
    } else {
        JoinPolicy::FailFast
    };
    let count = usize::from(options.variations);

    let spinner = Spinner::new(if count == 1 {
        "Generating post...".to_string()
    } else {
        format!("Generating {count} variations...")
    });
    let outcomes = generate_variations(&client, &request, count, policy).await;
    spinner.stop();
    let outcomes = outcomes?;

    for (index, outcome) in outcomes.iter().enumerate() {
        if let VariationOutcome::Failed(e) = outcome {
            eprintln!(
                "{} variation {} was skipped: {e:#}",
                Style::warning("Warning:"),
                index + 1
            );
        }
    }

    let rendered = render_outcomes(&outcomes);

    if let Some(path) = options.output {
        atomic_write(&path, &rendered)?;
        eprintln!(
            "{} {}",
            Style::success("Wrote"),
            Style::value(path.display())
        );
    } else {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{rendered}")?;
        stdout.flush()?;
    }

    Ok(())
}

/// Joins generated posts for display, numbering them when there are several.
fn render_outcomes(outcomes: &[VariationOutcome]) -> String {
    if let [single] = outcomes {
        return single.content().unwrap_or_default().to_string();
    }

    outcomes
        .iter()
        .enumerate()
        .filter_map(|(index, outcome)| {
            outcome
                .content()
                .map(|content| format!("--- Variation {} ---\n{content}", index + 1))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
