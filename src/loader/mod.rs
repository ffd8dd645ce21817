//! Tolerant loading of review report files.
//!
//! Review files are produced by independent reviewer processes and come
//! in every state of disrepair: missing, empty, wrapped in a transport
//! envelope, fenced in markdown, or padded with prose. [`load`] never
//! fails — every failure mode degrades to [`Review::error_sentinel`]
//! with a one-line warning on stderr.

pub mod extract;

use std::path::Path;
use std::sync::LazyLock;

use serde_json::Value;
use thiserror::Error;

use crate::models::Review;
use extract::extract_object_span;

/// Errors during review parsing. These never escape [`load`]; they only
/// feed the warning line.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("not valid JSON and no embedded object found: {source}")]
    NoJsonFound { source: serde_json::Error },

    #[error("embedded object is not valid JSON: {source}")]
    EmbeddedParse { source: serde_json::Error },

    #[error("envelope payload is not valid JSON: {source}")]
    EnvelopePayload { source: serde_json::Error },
}

/// Load a review file, degrading to the error sentinel on any failure.
pub fn load(path: &Path) -> Review {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Warning: failed to load {}: {e}", path.display());
            return Review::error_sentinel();
        }
    };

    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Review::error_sentinel();
    }

    match parse_review(trimmed) {
        Ok(review) => review,
        Err(e) => {
            eprintln!("Warning: failed to load {}: {e}", path.display());
            Review::error_sentinel()
        }
    }
}

/// Parse review content using the tiered strategy: direct JSON first,
/// then envelope unwrapping, then embedded-object extraction.
pub fn parse_review(content: &str) -> Result<Review, LoadError> {
    match serde_json::from_str::<Value>(content) {
        Ok(value) => {
            // Transport envelope: the real payload is a string field
            // named `result`, usually fenced. If the inner parse fails
            // the whole load fails; no fallback to span extraction on
            // the outer content.
            if let Some(payload) = value.get("result").and_then(Value::as_str) {
                let inner: Value = serde_json::from_str(strip_code_fences(payload))
                    .map_err(|source| LoadError::EnvelopePayload { source })?;
                Ok(Review::from_value(&inner))
            } else {
                Ok(Review::from_value(&value))
            }
        }
        Err(source) => {
            let Some(span) = extract_object_span(content) else {
                return Err(LoadError::NoJsonFound { source });
            };
            let value: Value = serde_json::from_str(span)
                .map_err(|source| LoadError::EmbeddedParse { source })?;
            Ok(Review::from_value(&value))
        }
    }
}

/// Regexes for stripping markdown code fence markers (``` or ```json)
/// around an envelope payload. Applied independently: a truncated
/// payload with only one fence marker still gets it removed.
static FENCE_OPEN_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^```(?:json)?\s*").unwrap());
static FENCE_CLOSE_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"\s*```$").unwrap());

/// Strip a leading and a trailing code fence marker from an envelope
/// payload, if present.
fn strip_code_fences(payload: &str) -> &str {
    let mut inner = payload.trim();
    if let Some(m) = FENCE_OPEN_RE.find(inner) {
        inner = &inner[m.end()..];
    }
    if let Some(m) = FENCE_CLOSE_RE.find(inner) {
        inner = &inner[..m.start()];
    }
    inner
}
