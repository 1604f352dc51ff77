//! # Dynamic AI Provider Factory
//!
//! Centralizes the logic for creating AI provider instances from a model
//! name, so both the server and any other consumer resolve providers the
//! same way.

use crate::{
    errors::MetadataError,
    providers::ai::{gemini::GeminiProvider, local::LocalAiProvider, AiProvider},
};
use tracing::info;

/// Creates an AI provider instance based on a model name.
///
/// Model names starting with `gemini` select the Gemini API, with the key
/// sourced from `AI_API_KEY` and the endpoint derived from the model name.
/// Any other model name selects an OpenAI-compatible provider configured
/// through `LOCAL_AI_API_URL` and (optionally) `LOCAL_AI_API_KEY`.
pub fn create_dynamic_provider(model_name: &str) -> Result<Box<dyn AiProvider>, MetadataError> {
    info!("Creating dynamic provider for model: '{model_name}'");

    let provider: Box<dyn AiProvider> = if model_name.starts_with("gemini") {
        let api_key = std::env::var("AI_API_KEY").map_err(|_| {
            MetadataError::MissingAiProvider(
                "AI_API_KEY must be set to use Gemini models.".to_string(),
            )
        })?;
        let api_url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{model_name}:generateContent"
        );
        Box::new(GeminiProvider::new(api_url, api_key)?)
    } else {
        let api_url = std::env::var("LOCAL_AI_API_URL").map_err(|_| {
            MetadataError::MissingAiProvider(
                "LOCAL_AI_API_URL must be set to use non-Gemini models.".to_string(),
            )
        })?;
        let api_key = std::env::var("LOCAL_AI_API_KEY").ok();
        Box::new(LocalAiProvider::new(
            api_url,
            api_key,
            Some(model_name.to_string()),
        )?)
    };

    Ok(provider)
}
