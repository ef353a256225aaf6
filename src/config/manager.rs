use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::paths;

/// Provider used when neither the CLI nor the config file names one.
pub const DEFAULT_PROVIDER: &str = "openai";
/// Model used when neither the CLI nor the config file names one.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
/// Sampling temperature used when the config file does not set one.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
/// Address `postgen serve` binds when nothing else is configured.
pub const DEFAULT_LISTEN: &str = "127.0.0.1:3000";

const DEFAULT_OPENAI_ENDPOINT: &str = "https://api.openai.com";
const DEFAULT_OPENAI_KEY_ENV: &str = "OPENAI_API_KEY";

/// Default settings in the `[postgen]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostgenConfig {
    /// Default provider name.
    pub provider: Option<String>,
    /// Default model name.
    pub model: Option<String>,
    /// Sampling temperature (0.0 to 2.0).
    pub temperature: Option<f64>,
    /// Listen address for `postgen serve`.
    pub listen: Option<String>,
}

/// Configuration for a completion provider.
///
/// Each provider has an endpoint and optional API key settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// The OpenAI-compatible API endpoint URL.
    pub endpoint: String,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// List of available models for this provider.
    #[serde(default)]
    pub models: Vec<String>,
}

impl ProviderConfig {
    /// The provider available without any config file.
    pub fn openai() -> Self {
        Self {
            endpoint: DEFAULT_OPENAI_ENDPOINT.to_string(),
            api_key: None,
            api_key_env: Some(DEFAULT_OPENAI_KEY_ENV.to_string()),
            models: vec![DEFAULT_MODEL.to_string()],
        }
    }

    /// Gets the API key, preferring environment variable over config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }

    /// Returns `true` if this provider requires an API key.
    pub const fn requires_api_key(&self) -> bool {
        self.api_key.is_some() || self.api_key_env.is_some()
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/postgen/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub postgen: PostgenConfig,
    /// Provider configurations keyed by name.
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
}

impl ConfigFile {
    /// Looks up a provider, falling back to the built-in `openai` entry.
    pub fn provider(&self, name: &str) -> Option<ProviderConfig> {
        self.providers
            .get(name)
            .cloned()
            .or_else(|| (name == DEFAULT_PROVIDER).then(ProviderConfig::openai))
    }
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The selected provider name.
    pub provider_name: String,
    /// The API endpoint URL.
    pub endpoint: String,
    /// The model to generate with.
    pub model: String,
    /// The API key (if required).
    pub api_key: Option<String>,
    /// Sampling temperature.
    pub temperature: f64,
    /// Listen address for the HTTP service.
    pub listen: SocketAddr,
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Provider name override.
    pub provider: Option<String>,
    /// Model name override.
    pub model: Option<String>,
    /// Listen address override.
    pub listen: Option<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values, which take precedence
/// over built-in defaults.
///
/// # Errors
///
/// Returns an error if the provider is unknown, a required API key is
/// missing, the temperature is out of range or the listen address is invalid.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let provider_name = options
        .provider
        .as_ref()
        .or(config_file.postgen.provider.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_PROVIDER.to_string());

    let provider_config = config_file.provider(&provider_name).ok_or_else(|| {
        let mut available: Vec<_> = config_file.providers.keys().map(String::as_str).collect();
        if !available.contains(&DEFAULT_PROVIDER) {
            available.push(DEFAULT_PROVIDER);
        }
        available.sort_unstable();
        anyhow::anyhow!(
            "Provider '{provider_name}' not found\n\n\
             Available providers:\n  \
             - {}\n\n\
             Add providers to ~/.config/postgen/config.toml",
            available.join("\n  - ")
        )
    })?;

    let model = options
        .model
        .as_ref()
        .or(config_file.postgen.model.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    if !provider_config.models.is_empty() && !provider_config.models.contains(&model) {
        tracing::warn!(
            "Model '{}' is not in the configured models list for '{}' (configured: {}), proceeding anyway",
            model,
            provider_name,
            provider_config.models.join(", ")
        );
    }

    let temperature = config_file
        .postgen
        .temperature
        .unwrap_or(DEFAULT_TEMPERATURE);

    if !(0.0..=2.0).contains(&temperature) {
        bail!(
            "Invalid temperature: {temperature}\n\n\
             Temperature must be between 0.0 and 2.0 in ~/.config/postgen/config.toml"
        );
    }

    let listen_raw = options
        .listen
        .as_deref()
        .or(config_file.postgen.listen.as_deref())
        .unwrap_or(DEFAULT_LISTEN);

    let listen: SocketAddr = listen_raw
        .parse()
        .with_context(|| format!("Invalid listen address: '{listen_raw}'"))?;

    let api_key = provider_config.get_api_key();

    if provider_config.requires_api_key() && api_key.is_none() {
        let env_var = provider_config.api_key_env.as_deref().unwrap_or("API_KEY");
        bail!(
            "Provider '{provider_name}' requires an API key\n\n\
             Set the {env_var} environment variable:\n  \
             export {env_var}=\"your-api-key\"\n\n\
             Or set api_key in ~/.config/postgen/config.toml"
        );
    }

    Ok(ResolvedConfig {
        provider_name,
        endpoint: provider_config.endpoint,
        model,
        api_key,
        temperature,
        listen,
    })
}

/// Locates and loads the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/postgen/config.toml`
    /// or `~/.config/postgen/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Uses an explicit config file path.
    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    /// Loads the config file; a missing file yields the defaults, a broken one is an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}
