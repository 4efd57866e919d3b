//! Citation and research-provenance types
//!
//! `RawCitation` is what the research provider hands back: title, URL, and
//! optionally the character offsets of the cited claim inside the response
//! body. The parser deduplicates these into `Citation`s and attributes them
//! to the fields whose section spans contain the offset.

use serde::{Deserialize, Serialize};

/// A citation as returned by the research provider, before processing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCitation {
    /// Source title
    pub title: String,
    /// Source URL
    pub url: String,
    /// Character offset into the response body where the cited claim begins
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_index: Option<usize>,
    /// Character offset where the cited claim ends
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_index: Option<usize>,
}

impl RawCitation {
    /// Citation without offsets (provider did not annotate positions)
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            start_index: None,
            end_index: None,
        }
    }

    /// Citation with a known character span in the source text
    pub fn with_span(
        title: impl Into<String>,
        url: impl Into<String>,
        start: usize,
        end: usize,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            start_index: Some(start),
            end_index: Some(end),
        }
    }
}

/// A processed citation attached to a parse result or stored entity
///
/// Within one parse result citations are unique by URL; the first occurrence
/// wins and later duplicates are dropped outright (titles are not merged).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    /// Unique generated id (`cit-` prefix + UUIDv7)
    pub id: String,
    /// Source title (first-seen title for this URL)
    pub title: String,
    /// Source URL
    pub url: String,
    /// ISO-8601 timestamp of when the source was accessed
    pub accessed_at: String,
    /// Field paths this citation supports, e.g. `"tam"` or `"competitors.2"`
    #[serde(default)]
    pub relevant_fields: Vec<String>,
}

/// Research provenance embedded in entities populated from deep research
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchMetadata {
    /// Citations supporting the entity's data
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub citations: Vec<Citation>,
    /// When the research was executed (ISO-8601)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub researched_at: Option<String>,
    /// Research model identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub research_model: Option<String>,
    /// Extraction confidence score, 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u8>,
    /// Verbatim research response body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_content: Option<String>,
}
