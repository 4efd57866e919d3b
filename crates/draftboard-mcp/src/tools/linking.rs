//! Entity linking tools

use draftboard_domain::Entity;
use draftboard_store::FileStore;
use serde::{Deserialize, Serialize};

use crate::error::McpError;
use crate::tools::parse_entity_id;

/// Parameters for linking two entities
#[derive(Debug, Deserialize)]
pub struct LinkParams {
    /// Source entity id
    pub source_id: String,
    /// Target entity id
    pub target_id: String,
    /// Optional relationship label, e.g. `"informs"`
    #[serde(default)]
    pub relationship: Option<String>,
}

/// Parameters for removing a link
#[derive(Debug, Deserialize)]
pub struct UnlinkParams {
    /// Source entity id
    pub source_id: String,
    /// Target entity id
    pub target_id: String,
}

/// Result of a link or unlink operation
#[derive(Debug, Serialize)]
pub struct LinkResult {
    /// Source entity id
    pub source_id: String,
    /// Number of outgoing links the source now has
    pub linked_count: usize,
    /// Confirmation message
    pub message: String,
}

/// Handle link_entities tool invocation
pub fn handle_link_entities(store: &FileStore, params: LinkParams) -> Result<LinkResult, McpError> {
    let source = parse_entity_id(&params.source_id)?;
    let target = parse_entity_id(&params.target_id)?;
    if source == target {
        return Err(McpError::InvalidRequest(
            "Cannot link an entity to itself".to_string(),
        ));
    }
    let entity = store.link_entities(source, target, params.relationship)?;
    Ok(LinkResult {
        source_id: params.source_id,
        linked_count: entity.core.linked_entities.len(),
        message: "Entities linked".to_string(),
    })
}

/// Handle unlink_entities tool invocation
pub fn handle_unlink_entities(
    store: &FileStore,
    params: UnlinkParams,
) -> Result<LinkResult, McpError> {
    let source = parse_entity_id(&params.source_id)?;
    let target = parse_entity_id(&params.target_id)?;
    let entity = store.unlink_entities(source, target)?;
    Ok(LinkResult {
        source_id: params.source_id,
        linked_count: entity.core.linked_entities.len(),
        message: "Link removed".to_string(),
    })
}

/// Handle get_linked_entities tool invocation
pub fn handle_get_linked_entities(
    store: &FileStore,
    params: super::EntityIdParams,
) -> Result<Vec<Entity>, McpError> {
    Ok(store.get_linked_entities(parse_entity_id(&params.entity_id)?)?)
}
