//! Market sizing framework - nested TAM/SAM/SOM estimates

use serde::{Deserialize, Serialize};

/// One market size estimate (TAM, SAM, or SOM level)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketEstimate {
    /// Market value in `currency` units
    pub value: f64,
    /// Currency code, e.g. `"USD"`
    pub currency: String,
    /// Revenue period the value covers
    pub unit: MarketUnit,
    /// How the figure was derived
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methodology: Option<String>,
    /// Sources backing the figure
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
}

impl MarketEstimate {
    /// An annual USD estimate with no methodology or sources
    pub fn annual_usd(value: f64) -> Self {
        Self {
            value,
            currency: "USD".to_string(),
            unit: MarketUnit::Annual,
            methodology: None,
            sources: Vec::new(),
        }
    }
}

/// Revenue period of a market estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarketUnit {
    /// Annual revenue
    Annual,
    /// Monthly revenue
    Monthly,
}

/// Market growth rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthRate {
    /// Growth rate percentage, e.g. `12.5` for 12.5%
    pub rate: f64,
    /// Period the rate applies to, e.g. `"annual"`
    pub period: String,
}

/// Market sizing payload: TAM ⊇ SAM ⊇ SOM plus growth
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSizing {
    /// Total addressable market
    pub tam: MarketEstimate,
    /// Serviceable addressable market
    pub sam: MarketEstimate,
    /// Serviceable obtainable market
    pub som: MarketEstimate,
    /// Market growth rate, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_rate: Option<GrowthRate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_wire_format() {
        let est = MarketEstimate::annual_usd(4_500_000_000.0);
        let json = serde_json::to_value(&est).unwrap();
        assert_eq!(json["currency"], "USD");
        assert_eq!(json["unit"], "annual");
        assert!(json.get("methodology").is_none());
    }
}
