//! Parse result types

use draftboard_domain::canvas::{BusinessModelCanvas, LeanCanvas, ValuePropositionCanvas};
use draftboard_domain::competitive::CompetitiveAnalysis;
use draftboard_domain::market::{GrowthRate, MarketUnit};
use draftboard_domain::persona::PersonaProfile;
use draftboard_domain::swot::SwotAnalysis;
use draftboard_domain::Citation;
use serde::{Deserialize, Serialize};

/// Outcome of parsing one research response
///
/// Pure computed value: created fresh per parse call, never mutated, never
/// persisted directly. `confidence` is subtractive from 100 with a floor of
/// 0, so 0..=100 always holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedResult {
    /// Framework-specific extracted data
    pub data: FrameworkData,
    /// Citations, deduplicated by URL (first occurrence wins)
    pub citations: Vec<Citation>,
    /// Completeness/quality score 0-100
    pub confidence: u8,
    /// Field paths that could not be extracted
    pub missing_fields: Vec<String>,
    /// Human-readable validation warnings
    pub warnings: Vec<String>,
    /// Original response body, verbatim
    pub raw_content: String,
}

/// Typed per-framework data payload of a parse result
///
/// Serialized untagged: the caller already knows the framework type, and the
/// wire shape stays the plain data object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FrameworkData {
    /// Market sizing extraction
    MarketSizing(MarketSizingData),
    /// Competitive analysis extraction
    CompetitiveAnalysis(CompetitiveAnalysis),
    /// User persona extraction
    UserPersona(PersonaData),
    /// SWOT extraction
    SwotAnalysis(SwotAnalysis),
    /// Business model canvas extraction
    BusinessModelCanvas(BusinessModelCanvas),
    /// Lean canvas extraction
    LeanCanvas(LeanCanvas),
    /// Value proposition canvas extraction
    ValuePropositionCanvas(ValuePropositionCanvas),
    /// Sentinel payload for unrecognized framework tags
    Unknown(EmptyData),
}

/// Empty object payload (`{}` on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyData {}

/// Market sizing data as extracted, before any defaulting
///
/// Unlike the persisted [`draftboard_domain::market::MarketEstimate`], the
/// value may be absent; the caller decides how to default it when storing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSizingData {
    /// Total addressable market figure
    pub tam: MarketFigure,
    /// Serviceable addressable market figure
    pub sam: MarketFigure,
    /// Serviceable obtainable market figure
    pub som: MarketFigure,
    /// Growth rate, when stated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_rate: Option<GrowthRate>,
}

/// One extracted market figure; `value` is `None` when nothing matched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketFigure {
    /// Extracted value in `currency` units, if any pattern matched
    pub value: Option<f64>,
    /// Currency code (always `"USD"` for current patterns)
    pub currency: String,
    /// Revenue period
    pub unit: MarketUnit,
    /// How the figure was derived
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methodology: Option<String>,
    /// Sources listed in the document
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
}

impl MarketFigure {
    /// Annual USD figure with no methodology or sources
    pub fn annual_usd(value: Option<f64>) -> Self {
        Self {
            value,
            currency: "USD".to_string(),
            unit: MarketUnit::Annual,
            methodology: None,
            sources: Vec::new(),
        }
    }
}

/// User persona extraction: every persona found in the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaData {
    /// Personas in document order
    pub personas: Vec<PersonaProfile>,
}
