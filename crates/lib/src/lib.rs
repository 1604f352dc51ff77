//! # Filewise
//!
//! This crate provides the core of a file-management workspace: a client
//! that asks a configurable AI provider for structured metadata about a
//! file's content (language, line count, entities, themes, summary), and a
//! mutation-gated store that owns the workspace's file and folder records.

pub mod errors;
pub mod extract;
pub mod prompts;
pub mod providers;
pub mod store;
pub mod types;

pub use errors::MetadataError;
pub use extract::fallback_metadata;
pub use store::{
    FileRecord, FileUpdate, FolderRecord, StoreError, WorkspaceSnapshot, WorkspaceStore,
};
pub use types::{ExtractionRequest, Metadata, MetadataClient, MetadataClientBuilder};

use tracing::{debug, info};

impl MetadataClient {
    /// Extracts metadata for a file with detailed options.
    ///
    /// This is the primary extraction method. It renders the prompt pair
    /// (per-call template overrides win over the defaults), sends it to the
    /// AI provider, and interprets the response:
    ///
    /// - a parseable JSON response becomes the returned `Metadata`;
    /// - an unparseable response becomes the deterministic fallback, still
    ///   returned as `Ok`;
    /// - only a transport or service failure is an `Err`.
    ///
    /// One attempt per invocation. No retry, no backoff, no timeout.
    pub async fn extract_metadata_with_options(
        &self,
        request: ExtractionRequest,
    ) -> Result<Metadata, MetadataError> {
        let system_prompt = request
            .system_prompt_template
            .as_deref()
            .unwrap_or(prompts::METADATA_SYSTEM_PROMPT);
        let user_template = request
            .user_prompt_template
            .as_deref()
            .unwrap_or(prompts::METADATA_USER_PROMPT_TEMPLATE);
        let user_prompt = prompts::render_user_prompt(
            user_template,
            &request.file_name,
            &request.file_type,
            &request.content,
        );

        debug!(system_prompt = %system_prompt, user_prompt = %user_prompt, "--> Sending prompts to AI Provider");

        let raw_response = self
            .ai_provider
            .generate(system_prompt, &user_prompt)
            .await?;

        debug!("<-- Raw metadata response from AI: {}", &raw_response);

        match extract::parse_metadata(&raw_response) {
            Some(metadata) => Ok(metadata),
            None => {
                info!(
                    file_name = %request.file_name,
                    "Model response was not valid metadata JSON. Using fallback."
                );
                Ok(extract::fallback_metadata(
                    &request.content,
                    &request.file_type,
                ))
            }
        }
    }

    /// Extracts metadata for a file from its content, name, and declared type.
    ///
    /// A convenience wrapper around `extract_metadata_with_options` using the
    /// default prompt templates. Callers must not invoke this with empty
    /// content; that validation belongs to the boundary above this crate.
    pub async fn extract_metadata(
        &self,
        content: &str,
        file_name: &str,
        file_type: &str,
    ) -> Result<Metadata, MetadataError> {
        let request = ExtractionRequest {
            content: content.to_string(),
            file_name: file_name.to_string(),
            file_type: file_type.to_string(),
            ..Default::default()
        };
        self.extract_metadata_with_options(request).await
    }
}
