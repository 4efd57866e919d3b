//! Competitive analysis parser: per-competitor blocks and our position

use draftboard_domain::{CompetitiveAnalysis, Competitor, MarketPosition, RawCitation};
use regex::Regex;
use tracing::debug;

use crate::citation::process_citations;
use crate::frameworks::NO_CITATIONS_WARNING;
use crate::list::extract_list_items;
use crate::score::Score;
use crate::section::{extract_section, SectionSpan};
use crate::types::{FrameworkData, ParsedResult};

/// Headers that introduce a block but do not name a competitor
const NON_COMPETITOR: &str =
    r"(?i)TAM|SAM|SOM|Market|Our Position|Potential Position|Summary|Overview";

/// Headers that carry the document's own-position block
const OUR_POSITION: &str = r"(?i)Our Position|Potential Position";

const MAX_ITEMS: usize = 5;

pub(crate) fn parse(content: &str, raw_citations: &[RawCitation]) -> ParsedResult {
    let mut score = Score::new();

    // Top-level `## ` headers delimit competitor blocks; `###`
    // subsections stay inside their block.
    let block_start = Regex::new(r"(?m)^## ").expect("valid block delimiter");
    let starts: Vec<usize> = block_start.find_iter(content).map(|m| m.start()).collect();

    let non_competitor = Regex::new(NON_COMPETITOR).expect("valid header filter");
    let our_position_header = Regex::new(OUR_POSITION).expect("valid position filter");

    let mut competitors = Vec::new();
    let mut spans = Vec::new();
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(content.len());
        let block = &content[start..end];
        if block.len() < 20 {
            continue;
        }
        let header = block
            .lines()
            .next()
            .unwrap_or("")
            .trim_start_matches('#')
            .trim();
        if our_position_header.is_match(header) {
            spans.push(SectionSpan {
                field_name: "ourPosition".to_string(),
                start,
                end,
            });
            continue;
        }
        if non_competitor.is_match(header) {
            continue;
        }

        let mut strengths = extract_list_items(&extract_section(block, "Strengths"));
        strengths.truncate(MAX_ITEMS);
        let mut weaknesses = extract_list_items(&extract_section(block, "Weaknesses"));
        weaknesses.truncate(MAX_ITEMS);
        if strengths.is_empty() && weaknesses.is_empty() {
            continue;
        }
        if strengths.is_empty() {
            score.warn(format!("Competitor \"{header}\" has no listed strengths"));
        }
        if weaknesses.is_empty() {
            score.warn(format!("Competitor \"{header}\" has no listed weaknesses"));
        }

        let description = block_description(block);
        spans.push(SectionSpan {
            field_name: format!("competitors.{}", competitors.len()),
            start,
            end,
        });
        competitors.push(Competitor {
            name: header.to_string(),
            strengths,
            weaknesses,
            website: None,
            description,
        });
    }

    let position = MarketPosition {
        differentiators: extract_list_items(&extract_section(
            content,
            "Differentiators|Our Position",
        )),
        gaps: extract_list_items(&extract_section(content, "Gaps")),
        opportunities: extract_list_items(&extract_section(content, "Opportunities")),
    };
    let our_position = (!position.is_empty()).then_some(position);

    // Both penalties stack when nothing was found at all
    if competitors.is_empty() {
        score.missing("competitors", 40);
    }
    if competitors.len() < 3 {
        score.warn_penalize(
            format!("Only {} competitor(s) identified", competitors.len()),
            20,
        );
    }
    if raw_citations.is_empty() {
        score.warn_penalize(NO_CITATIONS_WARNING, 20);
    }

    let citations = process_citations(raw_citations, Some(&spans));
    let (confidence, missing_fields, warnings) = score.into_parts();
    debug!(confidence, competitors = competitors.len(), "parsed competitive analysis");

    ParsedResult {
        data: FrameworkData::CompetitiveAnalysis(CompetitiveAnalysis {
            competitors,
            our_position,
        }),
        citations,
        confidence,
        missing_fields,
        warnings,
        raw_content: content.to_string(),
    }
}

/// Free text between the block header and its first subsection
fn block_description(block: &str) -> Option<String> {
    let body = block.lines().skip(1).collect::<Vec<_>>().join("\n");
    if body.trim_start().starts_with('#') {
        return None;
    }
    let intro = match body.find("\n#") {
        Some(pos) => &body[..pos],
        None => body.as_str(),
    };
    let intro = intro.trim();
    (!intro.is_empty()).then(|| intro.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "\
# Competitive Landscape

## Market Overview
Broad context paragraph that should not become a competitor.

## Acme Corp
Established incumbent with wide distribution.

### Strengths
- Brand recognition
- Large sales team

### Weaknesses
- Slow release cycle

## Zenith Labs
### Strengths
- Modern product

### Weaknesses
- Tiny support organization
- No enterprise features

## Budget Co
### Strengths
- Lowest price

### Weaknesses
- Limited feature set

## Our Position
- Developer-first workflow

### Gaps
- No mobile client

### Opportunities
- Underserved mid-market
";

    fn cite(url: &str) -> RawCitation {
        RawCitation::new("Source", url)
    }

    #[test]
    fn test_competitor_blocks_extracted() {
        let result = parse(DOC, &[cite("https://a.example")]);
        let FrameworkData::CompetitiveAnalysis(data) = &result.data else {
            panic!("wrong variant");
        };
        let names: Vec<_> = data.competitors.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Acme Corp", "Zenith Labs", "Budget Co"]);
        assert_eq!(data.competitors[0].strengths.len(), 2);
        assert_eq!(data.competitors[0].weaknesses, vec!["Slow release cycle"]);
        assert_eq!(
            data.competitors[0].description.as_deref(),
            Some("Established incumbent with wide distribution.")
        );
        assert!(data.competitors[1].description.is_none());
        assert_eq!(result.confidence, 100);
    }

    #[test]
    fn test_market_header_blocks_skipped() {
        let result = parse(DOC, &[cite("https://a.example")]);
        let FrameworkData::CompetitiveAnalysis(data) = &result.data else {
            panic!("wrong variant");
        };
        assert!(data.competitors.iter().all(|c| !c.name.contains("Overview")));
    }

    #[test]
    fn test_our_position_extracted() {
        let result = parse(DOC, &[cite("https://a.example")]);
        let FrameworkData::CompetitiveAnalysis(data) = &result.data else {
            panic!("wrong variant");
        };
        let position = data.our_position.as_ref().unwrap();
        assert_eq!(position.differentiators, vec!["Developer-first workflow"]);
        assert_eq!(position.gaps, vec!["No mobile client"]);
        assert_eq!(position.opportunities, vec!["Underserved mid-market"]);
    }

    #[test]
    fn test_no_competitors_scores_low() {
        let result = parse("Just prose, no structure.", &[]);
        assert!(result.missing_fields.contains(&"competitors".to_string()));
        // 40 for no competitors + 20 for fewer than three + 20 for no citations
        assert_eq!(result.confidence, 20);
    }

    #[test]
    fn test_fewer_than_three_competitors_penalized() {
        let doc = "## Acme\n### Strengths\n- Fast\n### Weaknesses\n- Pricey\n";
        let result = parse(doc, &[cite("https://a.example")]);
        assert_eq!(result.confidence, 80);
        assert!(result.warnings.iter().any(|w| w.contains("1 competitor")));
    }

    #[test]
    fn test_strength_and_weakness_lists_capped() {
        let mut doc = String::from("## Acme\n### Strengths\n");
        for i in 0..8 {
            doc.push_str(&format!("- Strength {i}\n"));
        }
        doc.push_str("### Weaknesses\n- One\n");
        let result = parse(&doc, &[cite("https://a.example")]);
        let FrameworkData::CompetitiveAnalysis(data) = &result.data else {
            panic!("wrong variant");
        };
        assert_eq!(data.competitors[0].strengths.len(), 5);
    }

    #[test]
    fn test_block_without_lists_is_not_a_competitor() {
        let doc = "## Mystery Vendor\nA paragraph with no structured lists at all here.\n";
        let result = parse(doc, &[]);
        let FrameworkData::CompetitiveAnalysis(data) = &result.data else {
            panic!("wrong variant");
        };
        assert!(data.competitors.is_empty());
    }

    #[test]
    fn test_citations_map_to_competitor_spans() {
        let zenith_offset = DOC.find("## Zenith Labs").unwrap();
        let raw = vec![RawCitation::with_span(
            "Zenith review",
            "https://zenith.example",
            zenith_offset + 3,
            zenith_offset + 12,
        )];
        let result = parse(DOC, &raw);
        assert_eq!(result.citations[0].relevant_fields, vec!["competitors.1"]);
    }
}
