//! Typed boundary records for the summarizer.
//!
//! The host framework passes loosely-shaped content objects; everything
//! is funneled through [`ContentRecord::from_json`] once, and the rest
//! of the pipeline only ever sees typed values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::SummaryError;

/// One piece of content (blog post, diary entry, performance listing)
/// as seen by the summarizer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Author-provided summary; wins over everything when present.
    #[serde(default)]
    pub summary: Option<String>,
    /// Author-provided excerpt; second in precedence.
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Author-provided description; last manual fallback.
    #[serde(default)]
    pub description: Option<String>,
    /// Raw Markdown body.
    #[serde(default)]
    pub body: Option<String>,
    /// Cached body length in characters. Callers may supply this
    /// without the body itself; when both are present the explicit
    /// value wins even if they disagree.
    #[serde(default)]
    pub body_length: Option<usize>,
}

impl ContentRecord {
    /// Record with only a raw body, no manual fields.
    #[must_use]
    pub fn from_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            ..Self::default()
        }
    }

    /// Effective body length in characters: the cached value when
    /// supplied, otherwise the counted body, otherwise zero.
    #[must_use]
    pub fn effective_body_length(&self) -> usize {
        self.body_length
            .unwrap_or_else(|| self.body.as_deref().map_or(0, |b| b.chars().count()))
    }

    /// Map a framework-native content object into a typed record.
    ///
    /// Expected shape is `{ "data": { "summary"?, "excerpt"?,
    /// "description"? }, "body"? }`; missing fields are tolerated,
    /// non-object payloads are rejected.
    pub fn from_json(value: &Value) -> Result<Self, SummaryError> {
        let obj = value.as_object().ok_or_else(|| {
            SummaryError::InvalidRecord("content payload is not an object".to_string())
        })?;

        let data = obj.get("data").and_then(Value::as_object);
        let manual = |name: &str| {
            data.and_then(|d| d.get(name))
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        Ok(Self {
            summary: manual("summary"),
            excerpt: manual("excerpt"),
            description: manual("description"),
            body: obj.get("body").and_then(Value::as_str).map(str::to_string),
            body_length: None,
        })
    }
}

/// Tuning knobs for summary derivation. Pure configuration, no state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryOptions {
    /// Upper bound on the derived excerpt, in characters.
    pub max_length: usize,
    /// Continuation marker appended after an artificial cut.
    pub suffix: String,
    /// Whether manually-authored fields short-circuit derivation.
    pub prefer_manual: bool,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            max_length: 120,
            suffix: "…".to_string(),
            prefer_manual: true,
        }
    }
}
