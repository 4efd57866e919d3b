//! SWOT analysis framework

use serde::{Deserialize, Serialize};

/// Qualitative impact level of a SWOT item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Impact {
    /// High impact
    High,
    /// Medium impact
    Medium,
    /// Low impact
    Low,
}

/// One item in a SWOT quadrant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwotItem {
    /// The observation itself
    pub item: String,
    /// Assessed impact, if rated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<Impact>,
}

impl SwotItem {
    /// Unrated item
    pub fn new(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            impact: None,
        }
    }
}

impl From<String> for SwotItem {
    fn from(item: String) -> Self {
        Self::new(item)
    }
}

impl From<&str> for SwotItem {
    fn from(item: &str) -> Self {
        Self::new(item)
    }
}

/// SWOT analysis payload: the four quadrants
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwotAnalysis {
    /// Internal strengths
    #[serde(default)]
    pub strengths: Vec<SwotItem>,
    /// Internal weaknesses
    #[serde(default)]
    pub weaknesses: Vec<SwotItem>,
    /// External opportunities
    #[serde(default)]
    pub opportunities: Vec<SwotItem>,
    /// External threats
    #[serde(default)]
    pub threats: Vec<SwotItem>,
}
