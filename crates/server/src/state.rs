//! # Application State
//!
//! The shared state (`AppState`) holds the metadata client, the workspace
//! store, and the snapshot path, making them accessible to all request
//! handlers.

use crate::config::Config;
use filewise::providers::ai::{gemini::GeminiProvider, local::LocalAiProvider, AiProvider};
use filewise::{MetadataClient, MetadataClientBuilder, WorkspaceStore};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub metadata_client: Arc<MetadataClient>,
    pub store: Arc<WorkspaceStore>,
    pub snapshot_path: Arc<PathBuf>,
}

/// Builds the shared application state from the configuration.
///
/// This instantiates the configured AI provider and loads the workspace
/// snapshot from disk when one exists; a fresh workspace is seeded with the
/// sample records instead.
pub fn build_app_state(config: Config) -> anyhow::Result<AppState> {
    let ai_provider: Box<dyn AiProvider> = match config.ai_provider.as_str() {
        "gemini" => {
            let api_key = config
                .ai_api_key
                .clone()
                .ok_or_else(|| anyhow::anyhow!("AI_API_KEY is required for the gemini provider"))?;
            Box::new(GeminiProvider::new(config.ai_api_url.clone(), api_key)?)
        }
        "local" => Box::new(LocalAiProvider::new(
            config.ai_api_url.clone(),
            config.ai_api_key.clone(),
            Some(config.ai_model.clone()),
        )?),
        _ => {
            return Err(anyhow::anyhow!(
                "Unsupported AI provider: {}",
                config.ai_provider
            ))
        }
    };

    let metadata_client = MetadataClientBuilder::new().ai_provider(ai_provider).build()?;

    let store = if config.snapshot_path.exists() {
        WorkspaceStore::load_from(&config.snapshot_path)?
    } else {
        info!(
            path = %config.snapshot_path.display(),
            "No workspace snapshot found. Starting with sample data."
        );
        let store = WorkspaceStore::new();
        store.seed_if_empty()?;
        store
    };

    Ok(AppState {
        metadata_client: Arc::new(metadata_client),
        store: Arc::new(store),
        snapshot_path: Arc::new(config.snapshot_path),
    })
}
