//! # Server Configuration
//!
//! Configuration is sourced from the process environment (a `.env` file is
//! loaded in `main`). The AI endpoint defaults to the Gemini
//! `generateContent` URL derived from the configured model name.

use anyhow::Context;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// The port for the server to listen on. `PORT`, default 9090.
    pub port: u16,
    /// The AI provider kind: `gemini` or `local`. `AI_PROVIDER`.
    pub ai_provider: String,
    /// The model identifier. `AI_MODEL`, default `gemini-1.5-flash`.
    pub ai_model: String,
    /// The provider endpoint. `AI_API_URL`; for gemini it defaults to the
    /// canonical generateContent URL for `ai_model`.
    pub ai_api_url: String,
    /// The provider API key. `AI_API_KEY`; required for gemini.
    pub ai_api_key: Option<String>,
    /// Where the workspace snapshot lives. `SNAPSHOT_PATH`.
    pub snapshot_path: PathBuf,
}

/// Loads the configuration from the environment.
pub fn get_config() -> anyhow::Result<Config> {
    let port = env::var("PORT")
        .unwrap_or_else(|_| "9090".to_string())
        .parse()
        .context("PORT must be a valid port number")?;
    let ai_provider = env::var("AI_PROVIDER").unwrap_or_else(|_| "gemini".to_string());
    let ai_model = env::var("AI_MODEL").unwrap_or_else(|_| "gemini-1.5-flash".to_string());
    let ai_api_url = env::var("AI_API_URL").unwrap_or_else(|_| {
        format!("https://generativelanguage.googleapis.com/v1beta/models/{ai_model}:generateContent")
    });
    let ai_api_key = env::var("AI_API_KEY").ok();
    let snapshot_path = env::var("SNAPSHOT_PATH")
        .unwrap_or_else(|_| "db/workspace.json".to_string())
        .into();

    Ok(Config {
        port,
        ai_provider,
        ai_model,
        ai_api_url,
        ai_api_key,
        snapshot_path,
    })
}
