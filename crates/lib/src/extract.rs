//! # Response Extraction & Fallback Policy
//!
//! The model is asked for a JSON object but is not trusted to return one
//! cleanly. This module recovers a candidate JSON substring from the raw
//! response text and, when no structured value can be parsed at all,
//! substitutes a deterministic fallback built purely from caller-supplied
//! values. A response that fails to parse is a degraded success, not an
//! error.

use crate::types::Metadata;
use regex::Regex;

/// The summary used when the model response could not be interpreted.
pub const FALLBACK_SUMMARY: &str = "Could not analyze content automatically";

fn fenced_block<'a>(raw: &'a str, pattern: &str) -> Option<&'a str> {
    Regex::new(pattern)
        .ok()
        .and_then(|re| re.captures(raw))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Picks the JSON candidate out of a raw model response.
///
/// Precedence: the interior of a fenced block labeled `json`, then the
/// interior of any fenced block, then the full raw text.
pub(crate) fn json_candidate(raw: &str) -> &str {
    fenced_block(raw, r"```json\s*([\s\S]*?)\s*```")
        .or_else(|| fenced_block(raw, r"```\w*[ \t]*\n([\s\S]*?)\s*```"))
        .unwrap_or(raw)
}

/// Attempts to parse a raw model response into `Metadata`.
///
/// Missing fields default and unknown fields are carried through; a field
/// with the wrong type fails the parse. `None` means the caller should fall
/// back.
pub(crate) fn parse_metadata(raw: &str) -> Option<Metadata> {
    serde_json::from_str(json_candidate(raw).trim()).ok()
}

/// Builds the deterministic fallback `Metadata` for a file.
///
/// Depends only on the caller-supplied content and declared type, and never
/// fails. An empty content counts as one line (zero newlines).
pub fn fallback_metadata(content: &str, file_type: &str) -> Metadata {
    let language = if file_type == "text" {
        "Plain Text"
    } else {
        "Unknown"
    };
    Metadata {
        language: language.to_string(),
        line_count: content.split('\n').count() as u64,
        summary: FALLBACK_SUMMARY.to_string(),
        ..Metadata::default()
    }
}
