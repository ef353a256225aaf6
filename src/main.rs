use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use postgen_cli::cli::commands::{generate, prompt, providers, serve};
use postgen_cli::cli::{Args, Command};
use postgen_cli::post::print_tones;

#[actix_web::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_tracing(matches!(args.command, Command::Serve { .. }));

    match args.command {
        Command::Serve {
            listen,
            provider,
            model,
        } => {
            let options = serve::ServeOptions {
                listen,
                provider,
                model,
            };
            serve::run_serve(options).await?;
        }
        Command::Generate {
            post,
            provider,
            model,
            variations,
            keep_partial,
            output,
        } => {
            let options = generate::GenerateOptions {
                post,
                provider,
                model,
                variations,
                keep_partial,
                output,
            };
            generate::run_generate(options).await?;
        }
        Command::Prompt { post } => {
            prompt::print_prompt(&post)?;
        }
        Command::Tones => {
            print_tones();
        }
        Command::Providers { provider } => {
            providers::print_providers(provider.as_deref())?;
        }
    }

    Ok(())
}

/// Logs go to stderr; `RUST_LOG` overrides the default level.
fn init_tracing(serving: bool) {
    let default_filter = if serving {
        "postgen_cli=info,actix_web=info"
    } else {
        "postgen_cli=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
