//! Competitive analysis framework

use serde::{Deserialize, Serialize};

/// One competitor with its observed strengths and weaknesses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    /// Competitor name
    pub name: String,
    /// Strengths (capped at 5 when extracted from research)
    #[serde(default)]
    pub strengths: Vec<String>,
    /// Weaknesses (capped at 5 when extracted from research)
    #[serde(default)]
    pub weaknesses: Vec<String>,
    /// Competitor website
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Short description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Competitor {
    /// Competitor with name only
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            website: None,
            description: None,
        }
    }
}

/// Our own position relative to the competitive field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketPosition {
    /// What we do (or could do) better
    #[serde(default)]
    pub differentiators: Vec<String>,
    /// Capabilities we lack relative to the field
    #[serde(default)]
    pub gaps: Vec<String>,
    /// Openings the field leaves us
    #[serde(default)]
    pub opportunities: Vec<String>,
}

impl MarketPosition {
    /// True when no dimension has any items
    pub fn is_empty(&self) -> bool {
        self.differentiators.is_empty() && self.gaps.is_empty() && self.opportunities.is_empty()
    }
}

/// Competitive analysis payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitiveAnalysis {
    /// Competitors in the field
    #[serde(default)]
    pub competitors: Vec<Competitor>,
    /// Our position, when any dimension was identified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub our_position: Option<MarketPosition>,
}
