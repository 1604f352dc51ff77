use crate::errors::MetadataError;
use crate::providers::ai::AiProvider;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The structured metadata produced for a file.
///
/// This is the sole output contract of the extraction pipeline. Wire names
/// are camelCase to match the JSON the model is asked for. Fields the model
/// omits fall back to their defaults, and keys outside the contract are
/// carried through unchanged in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub line_count: u64,
    #[serde(default)]
    pub entities: Vec<String>,
    #[serde(default)]
    pub themes: Vec<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// The input to a metadata extraction call.
///
/// `content` must be non-empty; that precondition is enforced by callers
/// before the client is invoked, not here. The two template fields allow
/// per-call overrides of the default prompts.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionRequest {
    pub content: String,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub file_type: String,
    #[serde(default)]
    pub system_prompt_template: Option<String>,
    #[serde(default)]
    pub user_prompt_template: Option<String>,
}

/// A client that turns file content into structured `Metadata` through a
/// configured AI provider.
#[derive(Clone)]
pub struct MetadataClient {
    pub(crate) ai_provider: Box<dyn AiProvider>,
}

impl fmt::Debug for MetadataClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetadataClient")
            .field("ai_provider", &self.ai_provider)
            .finish_non_exhaustive()
    }
}

/// A builder for creating `MetadataClient` instances.
#[derive(Default)]
pub struct MetadataClientBuilder {
    ai_provider: Option<Box<dyn AiProvider>>,
}

impl MetadataClientBuilder {
    /// Creates a new `MetadataClientBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the AI provider.
    pub fn ai_provider(mut self, ai_provider: Box<dyn AiProvider>) -> Self {
        self.ai_provider = Some(ai_provider);
        self
    }

    /// Builds the `MetadataClient`.
    ///
    /// Fails with `MetadataError::MissingAiProvider` when no provider was
    /// configured.
    pub fn build(self) -> Result<MetadataClient, MetadataError> {
        let ai_provider = self.ai_provider.ok_or_else(|| {
            MetadataError::MissingAiProvider("an AI provider is required".to_string())
        })?;
        Ok(MetadataClient { ai_provider })
    }
}
