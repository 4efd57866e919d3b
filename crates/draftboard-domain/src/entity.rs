//! Entities - persisted framework artifacts
//!
//! An entity is one stored artifact: common bookkeeping fields
//! (`EntityCore`) plus a framework-specific payload, both flattened into a
//! single JSON object tagged by `"type"`.

use crate::canvas::{BusinessModelCanvas, LeanCanvas, ValuePropositionCanvas};
use crate::citation::ResearchMetadata;
use crate::competitive::CompetitiveAnalysis;
use crate::framework::FrameworkType;
use crate::id::{EntityId, ProjectId};
use crate::market::MarketSizing;
use crate::persona::UserPersona;
use crate::swot::SwotAnalysis;
use serde::{Deserialize, Serialize};

/// Lightweight reference to an entity, stored on its project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityRef {
    /// Entity id
    pub id: EntityId,
    /// Entity framework type
    #[serde(rename = "type")]
    pub entity_type: FrameworkType,
}

/// A directed link from one entity to another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedEntityRef {
    /// Target entity id
    pub id: EntityId,
    /// Target entity framework type
    #[serde(rename = "type")]
    pub entity_type: FrameworkType,
    /// Relationship label, e.g. `"informs"` or `"validates"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
}

/// Bookkeeping fields shared by every entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityCore {
    /// Unique identifier
    pub id: EntityId,
    /// Owning project
    pub project_id: ProjectId,
    /// Entity name
    pub name: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Creation timestamp (ISO-8601)
    pub created_at: String,
    /// Last-update timestamp (ISO-8601)
    pub updated_at: String,
    /// Research provenance, when populated from deep research
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub research_metadata: Option<ResearchMetadata>,
    /// Outgoing links to related entities
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub linked_entities: Vec<LinkedEntityRef>,
}

/// Framework-specific payload, tagged by `"type"` in JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FrameworkPayload {
    /// TAM/SAM/SOM market sizing
    MarketSizing(MarketSizing),
    /// Competitive analysis
    CompetitiveAnalysis(CompetitiveAnalysis),
    /// User persona
    UserPersona(UserPersona),
    /// SWOT analysis
    SwotAnalysis(SwotAnalysis),
    /// Business model canvas
    BusinessModelCanvas(BusinessModelCanvas),
    /// Lean canvas
    LeanCanvas(LeanCanvas),
    /// Value proposition canvas
    ValuePropositionCanvas(ValuePropositionCanvas),
}

impl FrameworkPayload {
    /// The framework tag of this payload
    pub fn framework_type(&self) -> FrameworkType {
        match self {
            FrameworkPayload::MarketSizing(_) => FrameworkType::MarketSizing,
            FrameworkPayload::CompetitiveAnalysis(_) => FrameworkType::CompetitiveAnalysis,
            FrameworkPayload::UserPersona(_) => FrameworkType::UserPersona,
            FrameworkPayload::SwotAnalysis(_) => FrameworkType::SwotAnalysis,
            FrameworkPayload::BusinessModelCanvas(_) => FrameworkType::BusinessModelCanvas,
            FrameworkPayload::LeanCanvas(_) => FrameworkType::LeanCanvas,
            FrameworkPayload::ValuePropositionCanvas(_) => FrameworkType::ValuePropositionCanvas,
        }
    }
}

/// A persisted framework entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Shared bookkeeping fields
    #[serde(flatten)]
    pub core: EntityCore,
    /// Framework-specific payload
    #[serde(flatten)]
    pub payload: FrameworkPayload,
}

impl Entity {
    /// Entity id
    pub fn id(&self) -> EntityId {
        self.core.id
    }

    /// Owning project id
    pub fn project_id(&self) -> ProjectId {
        self.core.project_id
    }

    /// Framework tag
    pub fn entity_type(&self) -> FrameworkType {
        self.payload.framework_type()
    }

    /// Reference suitable for storing on the owning project
    pub fn to_ref(&self) -> EntityRef {
        EntityRef {
            id: self.core.id,
            entity_type: self.entity_type(),
        }
    }
}
