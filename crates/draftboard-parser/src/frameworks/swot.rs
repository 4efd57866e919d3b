//! SWOT parser: four quadrant sections

use draftboard_domain::{RawCitation, SwotAnalysis, SwotItem};
use tracing::debug;

use crate::citation::process_citations;
use crate::frameworks::NO_CITATIONS_WARNING;
use crate::list::extract_list_items;
use crate::score::Score;
use crate::section::extract_section;
use crate::types::{FrameworkData, ParsedResult};

pub(crate) fn parse(content: &str, raw_citations: &[RawCitation]) -> ParsedResult {
    let mut score = Score::new();

    let mut quadrant = |field: &str, header: &str| -> Vec<SwotItem> {
        let items: Vec<SwotItem> = extract_list_items(&extract_section(content, header))
            .into_iter()
            .map(SwotItem::new)
            .collect();
        if items.is_empty() {
            score.missing(field, 20);
        }
        items
    };

    let analysis = SwotAnalysis {
        strengths: quadrant("strengths", "Strengths"),
        weaknesses: quadrant("weaknesses", "Weaknesses"),
        opportunities: quadrant("opportunities", "Opportunities"),
        threats: quadrant("threats", "Threats"),
    };

    if raw_citations.is_empty() {
        score.warn_penalize(NO_CITATIONS_WARNING, 10);
    }

    let citations = process_citations(raw_citations, None);
    let (confidence, missing_fields, warnings) = score.into_parts();
    debug!(confidence, "parsed SWOT analysis");

    ParsedResult {
        data: FrameworkData::SwotAnalysis(analysis),
        citations,
        confidence,
        missing_fields,
        warnings,
        raw_content: content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "\
# SWOT Analysis

## Strengths
- Experienced founding team
- Proprietary dataset

## Weaknesses
- No recurring revenue yet

## Opportunities
- Regulatory tailwinds in the EU

## Threats
- Well-funded incumbents
- Platform dependency
";

    fn cite(url: &str) -> RawCitation {
        RawCitation::new("Source", url)
    }

    #[test]
    fn test_all_quadrants_extracted() {
        let result = parse(DOC, &[cite("https://a.example")]);
        let FrameworkData::SwotAnalysis(data) = &result.data else {
            panic!("wrong variant");
        };
        assert_eq!(data.strengths.len(), 2);
        assert_eq!(data.weaknesses.len(), 1);
        assert_eq!(data.opportunities.len(), 1);
        assert_eq!(data.threats.len(), 2);
        assert_eq!(data.strengths[0].item, "Experienced founding team");
        assert!(data.strengths[0].impact.is_none());
        assert_eq!(result.confidence, 100);
        assert!(result.missing_fields.is_empty());
    }

    #[test]
    fn test_each_empty_quadrant_penalized() {
        let doc = "## Strengths\n- Only strength listed here\n";
        let result = parse(doc, &[cite("https://a.example")]);
        assert_eq!(
            result.missing_fields,
            vec!["weaknesses", "opportunities", "threats"]
        );
        assert_eq!(result.confidence, 40);
    }

    #[test]
    fn test_empty_document_scores_low() {
        let result = parse("No structure at all.", &[]);
        // 4 quadrants at 20 each, plus 10 for no citations
        assert_eq!(result.confidence, 10);
        assert_eq!(result.missing_fields.len(), 4);
    }

    #[test]
    fn test_no_citations_penalty() {
        let result = parse(DOC, &[]);
        assert_eq!(result.confidence, 90);
        assert!(result.warnings.iter().any(|w| w.contains("No citations")));
    }
}
