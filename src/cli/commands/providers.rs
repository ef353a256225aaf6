//! Provider listing command handler.

use anyhow::Result;

use crate::config::{ConfigFile, ConfigManager, DEFAULT_PROVIDER, ProviderConfig};
use crate::ui::Style;

/// Prints configured providers to stdout.
///
/// If `specific_provider` is provided, shows detailed information for that provider.
/// Otherwise, lists all providers, including the built-in `openai` entry.
pub fn print_providers(specific_provider: Option<&str>) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_or_default()?;

    let default_provider = config
        .postgen
        .provider
        .as_deref()
        .unwrap_or(DEFAULT_PROVIDER);

    if let Some(provider_name) = specific_provider {
        let Some(provider) = config.provider(provider_name) else {
            anyhow::bail!("Provider '{provider_name}' not found");
        };
        print_provider_details(provider_name, &provider, default_provider == provider_name);
        return Ok(());
    }

    println!("{}\n", Style::header("Configured providers:"));
    for (name, provider) in all_providers(&config) {
        let marker = if default_provider == name {
            format!(" {}", Style::default_marker())
        } else {
            String::new()
        };
        println!("  {}{marker}", Style::value(&name));
        println!("    {} {}", Style::label("endpoint:"), provider.endpoint);
        if !provider.models.is_empty() {
            println!(
                "    {} {}",
                Style::label("models:"),
                provider.models.join(", ")
            );
        }
    }

    Ok(())
}

fn print_provider_details(name: &str, provider: &ProviderConfig, is_default: bool) {
    println!(
        "Provider: {}{}",
        Style::value(name),
        if is_default { " (default)" } else { "" }
    );
    println!("  endpoint = {}", provider.endpoint);
    if provider.requires_api_key() {
        let has_key = provider.get_api_key().is_some();
        println!(
            "  api_key  = {}",
            if has_key {
                Style::success("(set)")
            } else {
                Style::warning("(not set)")
            }
        );
    }
    if provider.models.is_empty() {
        println!("  models   = (none configured)");
    } else {
        println!("  models:");
        for model in &provider.models {
            println!("    - {model}");
        }
    }
}

/// Configured providers plus the built-in one, sorted by name.
fn all_providers(config: &ConfigFile) -> Vec<(String, ProviderConfig)> {
    let mut providers: Vec<_> = config
        .providers
        .iter()
        .map(|(name, provider)| (name.clone(), provider.clone()))
        .collect();

    if !config.providers.contains_key(DEFAULT_PROVIDER) {
        providers.push((DEFAULT_PROVIDER.to_string(), ProviderConfig::openai()));
    }

    providers.sort_by(|a, b| a.0.cmp(&b.0));
    providers
}
