//! Configuration file management and provider settings.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_LISTEN, DEFAULT_MODEL, DEFAULT_PROVIDER,
    DEFAULT_TEMPERATURE, PostgenConfig, ProviderConfig, ResolveOptions, ResolvedConfig,
    resolve_config,
};
