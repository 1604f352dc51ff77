pub mod gemini;
pub mod local;

use crate::errors::MetadataError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with an AI provider.
///
/// This defines a common interface for sending an analysis instruction to a
/// Large Language Model (e.g., Gemini, a local OpenAI-compatible server) and
/// receiving its raw text response.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Generates a response from a given system and user prompt.
    ///
    /// The result is the provider's raw text output. No JSON handling
    /// happens at this layer.
    async fn generate(&self, system_prompt: &str, user_prompt: &str)
        -> Result<String, MetadataError>;
}

dyn_clone::clone_trait_object!(AiProvider);
