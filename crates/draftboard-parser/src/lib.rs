//! Draftboard Research Parser
//!
//! Turns the free-text (markdown-like) body of a deep-research response into
//! typed framework data with citations, a confidence score, and validation
//! warnings.
//!
//! # Architecture
//!
//! The pipeline is staged so each piece is testable on its own:
//!
//! ```text
//! text + citations → dispatch → framework parser
//!                                 ├─ section locator  (header offsets, spans)
//!                                 ├─ numeric/list extractors
//!                                 ├─ citation mapper  (dedup + field attribution)
//!                                 └─ confidence scorer
//! ```
//!
//! # Failure semantics
//!
//! Parsing never fails: sparse or malformed input degrades into low
//! confidence, `missing_fields`, and `warnings` rather than an error. The
//! single surfaced anomaly is an unrecognized framework tag, answered with a
//! zero-confidence sentinel result.
//!
//! # Purity
//!
//! Every function here is pure and synchronous: no I/O, no shared mutable
//! state, safe to call concurrently. Citation ids are UUIDv7-based
//! (time + randomness), so no global sequence is involved.
//!
//! # Example
//!
//! ```
//! use draftboard_domain::{FrameworkType, RawCitation};
//! use draftboard_parser::parse_research;
//!
//! let content = "## Strengths\n- Strong brand\n## Weaknesses\n- High prices\n\
//!                ## Opportunities\n- APAC expansion\n## Threats\n- New entrants\n";
//! let citations = vec![RawCitation::new("Industry report", "https://example.com/report")];
//!
//! let result = parse_research(FrameworkType::SwotAnalysis, content, &citations);
//! assert!(result.missing_fields.is_empty());
//! assert!(result.confidence > 80);
//! ```

#![warn(missing_docs)]

mod citation;
mod frameworks;
mod list;
mod numeric;
mod score;
mod section;
mod types;

pub use citation::process_citations;
pub use list::extract_list_items;
pub use numeric::{extract_number, extract_percentage};
pub use section::{extract_section, locate_sections, SectionSpan};
pub use types::{
    EmptyData, FrameworkData, MarketFigure, MarketSizingData, ParsedResult, PersonaData,
};

use draftboard_domain::{FrameworkType, RawCitation};
use tracing::debug;

/// Parse a research response for a known framework type
pub fn parse_research(
    framework: FrameworkType,
    content: &str,
    raw_citations: &[RawCitation],
) -> ParsedResult {
    debug!(
        framework = %framework,
        content_len = content.len(),
        citations = raw_citations.len(),
        "parsing research response"
    );

    match framework {
        FrameworkType::MarketSizing => frameworks::market::parse(content, raw_citations),
        FrameworkType::CompetitiveAnalysis => {
            frameworks::competitive::parse(content, raw_citations)
        }
        FrameworkType::UserPersona => frameworks::persona::parse(content, raw_citations),
        FrameworkType::SwotAnalysis => frameworks::swot::parse(content, raw_citations),
        FrameworkType::BusinessModelCanvas => {
            frameworks::canvas::parse_business_model(content, raw_citations)
        }
        FrameworkType::LeanCanvas => frameworks::canvas::parse_lean(content, raw_citations),
        FrameworkType::ValuePropositionCanvas => {
            frameworks::canvas::parse_value_proposition(content, raw_citations)
        }
    }
}

/// Parse a research response selected by its string tag
///
/// Unrecognized tags produce the sentinel result: empty data, zero
/// confidence, `missing_fields == ["unknown-framework"]`. Citations are
/// still deduplicated so the caller can surface them.
pub fn parse_research_tag(
    tag: &str,
    content: &str,
    raw_citations: &[RawCitation],
) -> ParsedResult {
    match tag.parse::<FrameworkType>() {
        Ok(framework) => parse_research(framework, content, raw_citations),
        Err(_) => {
            debug!(tag, "unrecognized framework tag");
            ParsedResult {
                data: FrameworkData::Unknown(types::EmptyData {}),
                citations: process_citations(raw_citations, None),
                confidence: 0,
                missing_fields: vec!["unknown-framework".to_string()],
                warnings: Vec::new(),
                raw_content: content.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tag_sentinel() {
        let result = parse_research_tag("porter-five-forces", "Some text", &[]);
        assert_eq!(result.confidence, 0);
        assert_eq!(result.missing_fields, vec!["unknown-framework"]);
        assert_eq!(result.raw_content, "Some text");
        assert!(matches!(result.data, FrameworkData::Unknown(_)));
    }

    #[test]
    fn test_unknown_tag_still_dedups_citations() {
        let raw = vec![
            RawCitation::new("A", "https://example.com"),
            RawCitation::new("B", "https://example.com"),
        ];
        let result = parse_research_tag("nope", "", &raw);
        assert_eq!(result.citations.len(), 1);
        assert_eq!(result.citations[0].title, "A");
    }

    #[test]
    fn test_known_tags_route_and_echo_content() {
        for ft in FrameworkType::ALL {
            let result = parse_research_tag(ft.as_str(), "No data here.", &[]);
            assert_eq!(result.raw_content, "No data here.");
            assert!(!matches!(result.data, FrameworkData::Unknown(_)));
        }
    }
}
