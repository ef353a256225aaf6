//! # postgen - Social Media Post Generator
//!
//! `postgen` turns a topic and a handful of style preferences into a prompt
//! for an OpenAI-compatible chat completion API and returns the generated
//! post. It can run as an HTTP service or as a one-shot CLI.
//!
//! ## Quick Start
//!
//! ```bash
//! # Generate a tweet
//! postgen generate -d "our new coffee shop opens Friday"
//!
//! # Three LinkedIn variations, no emojis
//! postgen generate -d "we are hiring" --platform linkedin --no-emoji -n 3
//!
//! # Inspect the prompts without calling the model
//! postgen prompt -d "launch day" --platform twitter --thread
//!
//! # Serve POST /api/generate-post
//! postgen serve --listen 127.0.0.1:3000
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/postgen/config.toml`:
//!
//! ```toml
//! [postgen]
//! provider = "openai"
//! model = "gpt-3.5-turbo"
//! temperature = 0.7
//!
//! [providers.openai]
//! endpoint = "https://api.openai.com"
//! api_key_env = "OPENAI_API_KEY"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and provider settings.
pub mod config;

/// File system utilities.
pub mod fs;

/// Chat completion client and variation fan-out.
pub mod generation;

/// Input reading from files and stdin.
pub mod input;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Post request model and prompt composition.
pub mod post;

/// HTTP service.
pub mod server;

/// Terminal UI components (spinner, colors).
pub mod ui;
