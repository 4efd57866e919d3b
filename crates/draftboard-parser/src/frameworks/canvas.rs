//! Canvas parsers: business model, lean, and value proposition

use draftboard_domain::{
    BusinessModelCanvas, CustomerProfile, LeanCanvas, RawCitation, UniqueValueProposition,
    ValueMap, ValuePropositionCanvas,
};
use tracing::debug;

use crate::citation::process_citations;
use crate::frameworks::NO_CITATIONS_WARNING;
use crate::list::extract_list_items;
use crate::score::Score;
use crate::section::extract_section;
use crate::types::{FrameworkData, ParsedResult};

fn section_items(content: &str, header: &str) -> Vec<String> {
    extract_list_items(&extract_section(content, header))
}

fn typed_items<T: From<String>>(content: &str, header: &str) -> Vec<T> {
    section_items(content, header).into_iter().map(T::from).collect()
}

pub(crate) fn parse_business_model(content: &str, raw_citations: &[RawCitation]) -> ParsedResult {
    let mut score = Score::new();

    let canvas = BusinessModelCanvas {
        customer_segments: typed_items(content, "Customer Segments"),
        value_propositions: typed_items(content, "Value Propositions?"),
        channels: typed_items(content, "Channels"),
        customer_relationships: typed_items(content, "Customer Relationships?"),
        revenue_streams: typed_items(content, "Revenue Streams?"),
        key_resources: typed_items(content, "Key Resources"),
        key_activities: typed_items(content, "Key Activities"),
        key_partnerships: typed_items(content, "Key Partner(?:ship)?s?"),
        cost_structure: typed_items(content, "Cost Structure"),
    };

    // Only the four load-bearing blocks are scored
    if canvas.customer_segments.is_empty() {
        score.missing("customerSegments", 10);
    }
    if canvas.value_propositions.is_empty() {
        score.missing("valuePropositions", 10);
    }
    if canvas.channels.is_empty() {
        score.missing("channels", 10);
    }
    if canvas.revenue_streams.is_empty() {
        score.missing("revenueStreams", 10);
    }
    if raw_citations.is_empty() {
        score.warn_penalize(NO_CITATIONS_WARNING, 10);
    }

    let citations = process_citations(raw_citations, None);
    let (confidence, missing_fields, warnings) = score.into_parts();
    debug!(confidence, "parsed business model canvas");

    ParsedResult {
        data: FrameworkData::BusinessModelCanvas(canvas),
        citations,
        confidence,
        missing_fields,
        warnings,
        raw_content: content.to_string(),
    }
}

pub(crate) fn parse_lean(content: &str, raw_citations: &[RawCitation]) -> ParsedResult {
    let mut score = Score::new();

    let uvp_section = extract_section(
        content,
        "Unique Value Proposition|UVP|Value Proposition",
    );
    // First line with enough substance, not the literal first line
    let proposition = uvp_section
        .lines()
        .map(str::trim)
        .find(|line| line.len() > 10)
        .map(str::to_string)
        .unwrap_or_else(|| "Value proposition not extracted".to_string());

    let canvas = LeanCanvas {
        problem: typed_items(content, "Problems?"),
        customer_segments: typed_items(content, "Customer Segments?"),
        unique_value_proposition: UniqueValueProposition {
            proposition,
            high_level_concept: None,
        },
        solution: typed_items(content, "Solutions?"),
        channels: section_items(content, "Channels"),
        revenue_streams: typed_items(content, "Revenue Streams?"),
        cost_structure: typed_items(content, "Cost Structure"),
        key_metrics: typed_items(content, "Key Metrics|Metrics"),
        unfair_advantage: None,
    };

    if canvas.problem.is_empty() {
        score.missing("problem", 15);
    }
    if canvas.customer_segments.is_empty() {
        score.missing("customerSegments", 15);
    }
    if raw_citations.is_empty() {
        score.warn_penalize(NO_CITATIONS_WARNING, 10);
    }

    let citations = process_citations(raw_citations, None);
    let (confidence, missing_fields, warnings) = score.into_parts();
    debug!(confidence, "parsed lean canvas");

    ParsedResult {
        data: FrameworkData::LeanCanvas(canvas),
        citations,
        confidence,
        missing_fields,
        warnings,
        raw_content: content.to_string(),
    }
}

pub(crate) fn parse_value_proposition(
    content: &str,
    raw_citations: &[RawCitation],
) -> ParsedResult {
    let mut score = Score::new();

    let profile = CustomerProfile {
        customer_jobs: typed_items(content, "Customer Jobs|Jobs"),
        pains: typed_items(content, "Pains"),
        gains: typed_items(content, "Gains"),
    };
    let value_map = ValueMap {
        products_and_services: typed_items(content, "Products.*Services|Solutions"),
        pain_relievers: typed_items(content, "Pain Relievers"),
        gain_creators: typed_items(content, "Gain Creators"),
    };

    if profile.customer_jobs.is_empty() {
        score.missing("customerProfile.customerJobs", 15);
    }
    if profile.pains.is_empty() {
        score.missing("customerProfile.pains", 15);
    }
    if profile.gains.is_empty() {
        score.missing("customerProfile.gains", 15);
    }
    if value_map.products_and_services.is_empty()
        && value_map.pain_relievers.is_empty()
        && value_map.gain_creators.is_empty()
    {
        score.warn("No value map blocks were extracted");
    }
    if raw_citations.is_empty() {
        score.warn_penalize(NO_CITATIONS_WARNING, 10);
    }

    let citations = process_citations(raw_citations, None);
    let (confidence, missing_fields, warnings) = score.into_parts();
    debug!(confidence, "parsed value proposition canvas");

    ParsedResult {
        data: FrameworkData::ValuePropositionCanvas(ValuePropositionCanvas {
            customer_profile: profile,
            value_map,
            fit_score: None,
        }),
        citations,
        confidence,
        missing_fields,
        warnings,
        raw_content: content.to_string(),
    }
}
