//! Framework type tag - selects one of the seven supported framework shapes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The seven supported business-design framework types
///
/// The kebab-case string form (`"market-sizing"`, ...) is the wire and
/// storage representation; it tags persisted entities and routes research
/// responses to the matching parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrameworkType {
    /// TAM/SAM/SOM market size estimates with growth rate
    MarketSizing,
    /// Competitor strengths/weaknesses plus our own position
    CompetitiveAnalysis,
    /// User persona with demographics and behavior
    UserPersona,
    /// Strengths / weaknesses / opportunities / threats
    SwotAnalysis,
    /// Osterwalder's nine-block business model canvas
    BusinessModelCanvas,
    /// Maurya's lean canvas
    LeanCanvas,
    /// Customer-profile / value-map fit canvas
    ValuePropositionCanvas,
}

impl FrameworkType {
    /// All framework types, in registration order
    pub const ALL: [FrameworkType; 7] = [
        FrameworkType::MarketSizing,
        FrameworkType::CompetitiveAnalysis,
        FrameworkType::UserPersona,
        FrameworkType::SwotAnalysis,
        FrameworkType::BusinessModelCanvas,
        FrameworkType::LeanCanvas,
        FrameworkType::ValuePropositionCanvas,
    ];

    /// Kebab-case tag used on the wire and in storage
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameworkType::MarketSizing => "market-sizing",
            FrameworkType::CompetitiveAnalysis => "competitive-analysis",
            FrameworkType::UserPersona => "user-persona",
            FrameworkType::SwotAnalysis => "swot-analysis",
            FrameworkType::BusinessModelCanvas => "business-model-canvas",
            FrameworkType::LeanCanvas => "lean-canvas",
            FrameworkType::ValuePropositionCanvas => "value-proposition-canvas",
        }
    }
}

impl fmt::Display for FrameworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FrameworkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "market-sizing" => Ok(FrameworkType::MarketSizing),
            "competitive-analysis" => Ok(FrameworkType::CompetitiveAnalysis),
            "user-persona" => Ok(FrameworkType::UserPersona),
            "swot-analysis" => Ok(FrameworkType::SwotAnalysis),
            "business-model-canvas" => Ok(FrameworkType::BusinessModelCanvas),
            "lean-canvas" => Ok(FrameworkType::LeanCanvas),
            "value-proposition-canvas" => Ok(FrameworkType::ValuePropositionCanvas),
            other => Err(format!("Unknown framework type: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_all_tags() {
        for ft in FrameworkType::ALL {
            let parsed: FrameworkType = ft.as_str().parse().unwrap();
            assert_eq!(ft, parsed);
        }
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&FrameworkType::BusinessModelCanvas).unwrap();
        assert_eq!(json, "\"business-model-canvas\"");

        let back: FrameworkType = serde_json::from_str("\"swot-analysis\"").unwrap();
        assert_eq!(back, FrameworkType::SwotAnalysis);
    }

    #[test]
    fn test_unknown_tag_rejected() {
        assert!("porter-five-forces".parse::<FrameworkType>().is_err());
    }
}
