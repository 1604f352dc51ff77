//! # Default Prompt Templates
//!
//! Default prompt templates for the metadata-extraction task. Both can be
//! overridden per call via `ExtractionRequest`.

/// The default system prompt for metadata extraction.
///
/// Sets the persona and pins the response to a single JSON object so the
/// extraction step has as little prose to strip as possible.
pub const METADATA_SYSTEM_PROMPT: &str = "You are a file analysis assistant. \
Analyze the file the user provides and respond with a single JSON object. \
Do not include any explanations or apologies outside of it.";

/// The default user prompt template for metadata extraction.
///
/// Placeholders: `{file_name}`, `{file_type}`, `{content}`. The content is
/// embedded verbatim; truncation and sanitization are the caller's concern.
pub const METADATA_USER_PROMPT_TEMPLATE: &str = r#"Analyze this file and provide metadata in JSON format:

File Name: {file_name}
File Type: {file_type}
Content: {content}

Please provide:
1. Detected programming language or content type
2. Line count
3. Named entities (people, places, organizations, important terms)
4. Key themes or topics
5. Content summary (max 100 words)

Return as JSON with keys: language, lineCount, entities (array), themes (array), summary"#;

/// Renders a user prompt template by substituting the file placeholders.
pub fn render_user_prompt(template: &str, file_name: &str, file_type: &str, content: &str) -> String {
    template
        .replace("{file_name}", file_name)
        .replace("{file_type}", file_type)
        .replace("{content}", content)
}
