//! Projects - containers that group framework entities

use crate::entity::EntityRef;
use crate::id::ProjectId;
use serde::{Deserialize, Serialize};

/// A business-design project
///
/// Projects own entities by reference; entity bodies live in their own
/// records so they can be loaded independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier
    pub id: ProjectId,
    /// Project name
    pub name: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-form tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Creation timestamp (ISO-8601)
    pub created_at: String,
    /// Last-update timestamp (ISO-8601)
    pub updated_at: String,
    /// References to the entities in this project, in creation order
    #[serde(default)]
    pub entities: Vec<EntityRef>,
}
