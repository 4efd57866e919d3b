//! Market sizing parser: TAM, SAM, SOM, and growth rate

use draftboard_domain::{GrowthRate, RawCitation};
use tracing::debug;

use crate::citation::process_citations;
use crate::frameworks::NO_CITATIONS_WARNING;
use crate::list::extract_list_items;
use crate::numeric::{currency_patterns, extract_number, extract_percentage};
use crate::score::Score;
use crate::section::{extract_section, locate_sections};
use crate::types::{FrameworkData, MarketFigure, MarketSizingData, ParsedResult};

/// Fields and the header alternatives that delimit their sections
const SECTION_FIELDS: &[(&str, &str)] = &[
    ("tam", "TAM|Total Addressable Market"),
    ("sam", "SAM|Serviceable Addressable Market"),
    ("som", "SOM|Serviceable Obtainable Market"),
    ("growthRate", "Growth|CAGR|Market Growth"),
];

/// Plausible bounds for an absolute market value in USD
const VALUE_RANGE: std::ops::RangeInclusive<f64> = 1e6..=1e14;

pub(crate) fn parse(content: &str, raw_citations: &[RawCitation]) -> ParsedResult {
    let mut score = Score::new();
    let patterns = currency_patterns();

    // TAM falls back to the whole document when no dedicated section
    // exists; SAM and SOM must come from their own sections or a single
    // headline figure would populate all three.
    let tam_section = extract_section(content, SECTION_FIELDS[0].1);
    let tam_value = if tam_section.is_empty() {
        extract_number(content, &patterns)
    } else {
        extract_number(&tam_section, &patterns)
    };
    let sam_section = extract_section(content, SECTION_FIELDS[1].1);
    let sam_value = extract_number(&sam_section, &patterns);
    let som_section = extract_section(content, SECTION_FIELDS[2].1);
    let som_value = extract_number(&som_section, &patterns);

    let growth_section = extract_section(content, SECTION_FIELDS[3].1);
    let growth = if growth_section.is_empty() {
        extract_percentage(content)
    } else {
        extract_percentage(&growth_section)
    };

    let sources = extract_list_items(&extract_section(content, "Sources|References|Data Sources"));

    if tam_value.is_none() {
        score.missing("tam.value", 30);
    }
    if sam_value.is_none() {
        score.missing("sam.value", 20);
    }
    if som_value.is_none() {
        score.missing("som.value", 20);
    }
    if growth.is_none() {
        score.missing("growthRate", 10);
    }
    if raw_citations.is_empty() {
        score.warn_penalize(NO_CITATIONS_WARNING, 20);
    }

    // Sanity checks on the funnel ordering and magnitudes
    if let (Some(tam), Some(sam)) = (tam_value, sam_value) {
        if tam < sam {
            score.warn_penalize("TAM is smaller than SAM, which is inconsistent", 15);
        }
    }
    if let (Some(sam), Some(som)) = (sam_value, som_value) {
        if sam < som {
            score.warn_penalize("SAM is smaller than SOM, which is inconsistent", 15);
        }
    }
    for (label, value) in [("TAM", tam_value), ("SAM", sam_value), ("SOM", som_value)] {
        if let Some(value) = value {
            if !VALUE_RANGE.contains(&value) {
                score.warn_penalize(
                    format!("{label} value {value} is outside the plausible range"),
                    10,
                );
            }
        }
    }
    if let Some(rate) = growth {
        if !(-50.0..500.0).contains(&rate) {
            score.warn_penalize(format!("Growth rate {rate}% is outside the plausible range"), 5);
        }
    }

    let mut tam = MarketFigure::annual_usd(tam_value);
    if !tam_section.is_empty() {
        tam.methodology = Some("Extracted from research".to_string());
    }
    tam.sources = sources;

    let spans = locate_sections(content, SECTION_FIELDS);
    let citations = process_citations(raw_citations, Some(&spans));
    let (confidence, missing_fields, warnings) = score.into_parts();
    debug!(confidence, missing = missing_fields.len(), "parsed market sizing");

    ParsedResult {
        data: FrameworkData::MarketSizing(MarketSizingData {
            tam,
            sam: MarketFigure::annual_usd(sam_value),
            som: MarketFigure::annual_usd(som_value),
            growth_rate: growth.map(|rate| GrowthRate {
                rate,
                period: "annual".to_string(),
            }),
        }),
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

    const FULL_DOC: &str = "\
# Market Analysis

## TAM (Total Addressable Market)
The total addressable market is estimated at $4.5 billion annually.

## SAM (Serviceable Addressable Market)
We can serve roughly $900 million of that market.

## SOM (Serviceable Obtainable Market)
A realistic capture is $45 million within five years.

## Growth
The market grows at 12.5% CAGR.

## Sources
- Gartner market report 2025
- Internal analysis
";

    fn cite(url: &str) -> RawCitation {
        RawCitation::new("Source", url)
    }

    #[test]
    fn test_full_document_high_confidence() {
        let result = parse(FULL_DOC, &[cite("https://a.example")]);
        let FrameworkData::MarketSizing(data) = &result.data else {
            panic!("wrong variant");
        };
        assert_eq!(data.tam.value, Some(4.5e9));
        assert_eq!(data.sam.value, Some(900e6));
        assert_eq!(data.som.value, Some(45e6));
        assert_eq!(data.growth_rate.as_ref().unwrap().rate, 12.5);
        assert_eq!(data.growth_rate.as_ref().unwrap().period, "annual");
        assert_eq!(data.tam.methodology.as_deref(), Some("Extracted from research"));
        assert_eq!(data.tam.sources.len(), 2);
        assert!(data.sam.sources.is_empty());
        assert_eq!(result.confidence, 100);
        assert!(result.missing_fields.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_tam_falls_back_to_whole_document() {
        let result = parse("The market is worth $2 billion overall.", &[cite("https://a.example")]);
        let FrameworkData::MarketSizing(data) = &result.data else {
            panic!("wrong variant");
        };
        assert_eq!(data.tam.value, Some(2e9));
        // No dedicated section, so no methodology is claimed
        assert!(data.tam.methodology.is_none());
        // SAM and SOM never fall back to the whole document
        assert_eq!(data.sam.value, None);
        assert_eq!(data.som.value, None);
        assert!(result.missing_fields.contains(&"sam.value".to_string()));
        assert!(result.missing_fields.contains(&"som.value".to_string()));
    }

    #[test]
    fn test_everything_missing_scores_zero() {
        let result = parse("Nothing quantitative here.", &[]);
        // 30 + 20 + 20 + 10 + 20 = 100
        assert_eq!(result.confidence, 0);
        assert_eq!(
            result.missing_fields,
            vec!["tam.value", "sam.value", "som.value", "growthRate"]
        );
    }

    #[test]
    fn test_inverted_funnel_warns_and_penalizes() {
        let doc = "## TAM\n$100 million\n## SAM\n$500 million\n";
        let result = parse(doc, &[cite("https://a.example")]);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("TAM is smaller than SAM")));
        // missing som 20, missing growth 10, inversion 15
        assert_eq!(result.confidence, 55);
    }

    #[test]
    fn test_out_of_range_value_warns() {
        let doc = "## TAM\n$500\n## Growth\n900%\n";
        let result = parse(doc, &[cite("https://a.example")]);
        assert!(result.warnings.iter().any(|w| w.contains("TAM value")));
        assert!(result.warnings.iter().any(|w| w.contains("Growth rate")));
    }

    #[test]
    fn test_citations_attributed_to_sections() {
        let tam_offset = FULL_DOC.find("## TAM").unwrap();
        let raw = vec![RawCitation::with_span(
            "TAM source",
            "https://tam.example",
            tam_offset + 5,
            tam_offset + 10,
        )];
        let result = parse(FULL_DOC, &raw);
        assert_eq!(result.citations[0].relevant_fields, vec!["tam"]);
    }

    #[test]
    fn test_no_citations_penalty() {
        let result = parse(FULL_DOC, &[]);
        assert_eq!(result.confidence, 80);
        assert!(result.warnings.iter().any(|w| w.contains("No citations")));
    }

    #[test]
    fn test_raw_content_preserved() {
        let result = parse(FULL_DOC, &[]);
        assert_eq!(result.raw_content, FULL_DOC);
    }
}
