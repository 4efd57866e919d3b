//! User persona framework

use serde::{Deserialize, Serialize};

/// Demographic attributes of a persona
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    /// Age or age range, e.g. `"25-34"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    /// Occupation, job title, or role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    /// Location or geography
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Income level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income: Option<String>,
    /// Education level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
}

/// Behavioral attributes of a persona
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Behavior {
    /// What the persona is trying to achieve
    #[serde(default)]
    pub goals: Vec<String>,
    /// What gets in the way
    #[serde(default)]
    pub frustrations: Vec<String>,
    /// What drives them
    #[serde(default)]
    pub motivations: Vec<String>,
}

/// One persona extracted from research or entered directly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaProfile {
    /// Persona name
    pub name: String,
    /// Demographic attributes
    #[serde(default)]
    pub demographics: Demographics,
    /// Behavioral attributes
    #[serde(default)]
    pub behavior: Behavior,
}

/// User persona payload (one persisted persona per entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPersona {
    /// Demographic attributes
    #[serde(default)]
    pub demographics: Demographics,
    /// Behavioral attributes
    #[serde(default)]
    pub behavior: Behavior,
    /// Representative quote
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    /// Short biography
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}
