//! MCP tool implementations
//!
//! Each module pairs params/result types with a `handle_*` function taking
//! the store (and, for research tools, a provider). The server routes
//! `tools/call` requests here.

mod entities;
mod export;
mod linking;
mod projects;
mod research;

pub use entities::{
    handle_create_entity, handle_delete_entity, handle_get_entity, handle_list_project_entities,
    handle_update_entity, CreateEntityParams, EntityIdParams, ListEntitiesParams,
    UpdateEntityParams,
};
pub use export::{handle_export_project, ExportParams};
pub use linking::{
    handle_get_linked_entities, handle_link_entities, handle_unlink_entities, LinkParams,
    UnlinkParams,
};
pub use projects::{
    handle_create_project, handle_delete_project, handle_get_project, handle_list_projects,
    handle_update_project, CreateProjectParams, ProjectIdParams, UpdateProjectParams,
};
pub use research::{
    handle_check_config, handle_configure, handle_deep_research, handle_populate_framework,
    handle_research_and_create, ConfigureParams, DeepResearchParams, PopulateParams,
    ResearchAndCreateParams,
};

use draftboard_domain::{EntityId, FrameworkType, ProjectId};

use crate::error::McpError;

pub(crate) fn parse_project_id(raw: &str) -> Result<ProjectId, McpError> {
    raw.parse()
        .map_err(|_| McpError::InvalidRequest(format!("Invalid project id: {raw}")))
}

pub(crate) fn parse_entity_id(raw: &str) -> Result<EntityId, McpError> {
    raw.parse()
        .map_err(|_| McpError::InvalidRequest(format!("Invalid entity id: {raw}")))
}

pub(crate) fn parse_framework(raw: &str) -> Result<FrameworkType, McpError> {
    raw.parse().map_err(McpError::InvalidRequest)
}
