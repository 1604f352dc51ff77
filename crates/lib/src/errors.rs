use thiserror::Error;

/// Custom error types for the metadata pipeline.
///
/// Only transport-level failures surface as errors. A model response that
/// cannot be parsed is absorbed into the deterministic fallback instead
/// (see `extract`).
#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to AI provider: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize AI provider response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("AI provider returned an error: {0}")]
    AiApi(String),
    #[error("AI provider is missing: {0}")]
    MissingAiProvider(String),
}
