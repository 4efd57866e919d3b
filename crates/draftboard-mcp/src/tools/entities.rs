//! Entity CRUD tools

use draftboard_domain::{Entity, FrameworkPayload};
use draftboard_store::{EntityUpdate, FileStore, NewEntity};
use serde::{Deserialize, Serialize};

use crate::error::McpError;
use crate::tools::{parse_entity_id, parse_framework, parse_project_id};

/// Parameters for creating an entity
///
/// The framework payload is flattened: the arguments carry a `"type"` tag
/// plus that framework's fields, exactly as entities are stored.
#[derive(Debug, Deserialize)]
pub struct CreateEntityParams {
    /// Owning project id
    pub project_id: String,
    /// Entity name
    pub name: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Framework payload, tagged by `"type"`
    #[serde(flatten)]
    pub payload: FrameworkPayload,
}

/// Parameters addressing an entity by id
#[derive(Debug, Deserialize)]
pub struct EntityIdParams {
    /// Entity id
    pub entity_id: String,
}

/// Parameters for updating an entity
#[derive(Debug, Deserialize)]
pub struct UpdateEntityParams {
    /// Entity id
    pub entity_id: String,
    /// New name
    #[serde(default)]
    pub name: Option<String>,
    /// New description
    #[serde(default)]
    pub description: Option<String>,
    /// Leftover keys; a `"type"` tag here means a replacement payload
    #[serde(flatten)]
    rest: serde_json::Map<String, serde_json::Value>,
}

impl UpdateEntityParams {
    /// The replacement payload, when the arguments carry one
    pub fn payload(&self) -> Result<Option<FrameworkPayload>, McpError> {
        if !self.rest.contains_key("type") {
            return Ok(None);
        }
        let payload = serde_json::from_value(serde_json::Value::Object(self.rest.clone()))?;
        Ok(Some(payload))
    }
}

/// Parameters for listing a project's entities
#[derive(Debug, Deserialize)]
pub struct ListEntitiesParams {
    /// Project id
    pub project_id: String,
    /// Optional framework-type filter
    #[serde(default, rename = "type")]
    pub entity_type: Option<String>,
}

/// Result of deleting an entity
#[derive(Debug, Serialize)]
pub struct DeleteEntityResult {
    /// Deleted entity id
    pub entity_id: String,
    /// Confirmation message
    pub message: String,
}

/// Handle create_entity tool invocation
pub fn handle_create_entity(
    store: &FileStore,
    params: CreateEntityParams,
) -> Result<Entity, McpError> {
    let project_id = parse_project_id(&params.project_id)?;
    Ok(store.create_entity(NewEntity {
        project_id,
        name: params.name,
        description: params.description,
        payload: params.payload,
        research_metadata: None,
    })?)
}

/// Handle get_entity tool invocation
pub fn handle_get_entity(store: &FileStore, params: EntityIdParams) -> Result<Entity, McpError> {
    Ok(store.get_entity(parse_entity_id(&params.entity_id)?)?)
}

/// Handle update_entity tool invocation
///
/// A replacement payload must keep the entity's framework type.
pub fn handle_update_entity(
    store: &FileStore,
    params: UpdateEntityParams,
) -> Result<Entity, McpError> {
    let id = parse_entity_id(&params.entity_id)?;
    let payload = params.payload()?;
    if let Some(payload) = &payload {
        let existing = store.get_entity(id)?;
        if payload.framework_type() != existing.entity_type() {
            return Err(McpError::InvalidRequest(format!(
                "Entity is {}, payload is {}",
                existing.entity_type(),
                payload.framework_type()
            )));
        }
    }
    Ok(store.update_entity(
        id,
        EntityUpdate {
            name: params.name,
            description: params.description,
            payload,
            research_metadata: None,
        },
    )?)
}

/// Handle delete_entity tool invocation
pub fn handle_delete_entity(
    store: &FileStore,
    params: EntityIdParams,
) -> Result<DeleteEntityResult, McpError> {
    store.delete_entity(parse_entity_id(&params.entity_id)?)?;
    Ok(DeleteEntityResult {
        entity_id: params.entity_id,
        message: "Entity deleted".to_string(),
    })
}

/// Handle list_project_entities tool invocation
pub fn handle_list_project_entities(
    store: &FileStore,
    params: ListEntitiesParams,
) -> Result<Vec<Entity>, McpError> {
    let project_id = parse_project_id(&params.project_id)?;
    match params.entity_type {
        Some(tag) => Ok(store.list_entities_by_type(project_id, parse_framework(&tag)?)?),
        None => Ok(store.list_project_entities(project_id)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use draftboard_domain::FrameworkType;
    use tempfile::TempDir;

    fn store_with_project() -> (TempDir, FileStore, String) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        let project = store.create_project("P", None, vec![]).unwrap();
        let id = project.id.to_string();
        (dir, store, id)
    }

    #[test]
    fn test_create_entity_params_flatten_tagged_payload() {
        let json = r#"{
            "project_id": "0192aaaa-0000-7000-8000-000000000000",
            "name": "Our SWOT",
            "type": "swot-analysis",
            "strengths": [{"item": "Team"}],
            "weaknesses": [],
            "opportunities": [],
            "threats": []
        }"#;
        let params: CreateEntityParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.name, "Our SWOT");
        assert_eq!(params.payload.framework_type(), FrameworkType::SwotAnalysis);
    }

    #[test]
    fn test_create_and_list_round_trip() {
        let (_dir, store, project_id) = store_with_project();
        let json = serde_json::json!({
            "project_id": project_id,
            "name": "Our SWOT",
            "type": "swot-analysis",
            "strengths": [{"item": "Team"}]
        });
        let params: CreateEntityParams = serde_json::from_value(json).unwrap();
        let entity = handle_create_entity(&store, params).unwrap();

        let listed = handle_list_project_entities(
            &store,
            ListEntitiesParams {
                project_id,
                entity_type: Some("swot-analysis".to_string()),
            },
        )
        .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id(), entity.id());
    }

    #[test]
    fn test_update_entity_type_mismatch_rejected() {
        let (_dir, store, project_id) = store_with_project();
        let params: CreateEntityParams = serde_json::from_value(serde_json::json!({
            "project_id": project_id,
            "name": "Our SWOT",
            "type": "swot-analysis"
        }))
        .unwrap();
        let entity = handle_create_entity(&store, params).unwrap();

        let update: UpdateEntityParams = serde_json::from_value(serde_json::json!({
            "entity_id": entity.id().to_string(),
            "type": "lean-canvas",
            "uniqueValueProposition": {"proposition": "x"}
        }))
        .unwrap();
        let err = handle_update_entity(&store, update).unwrap_err();
        assert!(matches!(err, McpError::InvalidRequest(_)));
    }

    #[test]
    fn test_update_entity_name_only() {
        let (_dir, store, project_id) = store_with_project();
        let params: CreateEntityParams = serde_json::from_value(serde_json::json!({
            "project_id": project_id,
            "name": "Before",
            "type": "swot-analysis"
        }))
        .unwrap();
        let entity = handle_create_entity(&store, params).unwrap();

        let update: UpdateEntityParams = serde_json::from_value(serde_json::json!({
            "entity_id": entity.id().to_string(),
            "name": "After"
        }))
        .unwrap();
        let updated = handle_update_entity(&store, update).unwrap();
        assert_eq!(updated.core.name, "After");
        assert_eq!(updated.entity_type(), FrameworkType::SwotAnalysis);
    }
}
