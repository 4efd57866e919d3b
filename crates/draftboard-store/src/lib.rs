//! Draftboard Storage Layer
//!
//! Flat-file JSON persistence for projects and framework entities: one file
//! per record under a data directory, projects carrying references to their
//! entities.
//!
//! # Layout
//!
//! ```text
//! <data dir>/
//!   projects/<project-id>.json
//!   entities/<entity-id>.json
//! ```
//!
//! The data directory defaults to `$DRAFTBOARD_DATA_DIR`, falling back to
//! `$HOME/.draftboard`.
//!
//! # Concurrency
//!
//! Writes are whole-file rewrites with no locking. One server process owns
//! a data directory at a time.

#![warn(missing_docs)]

mod export;

pub use export::{export_project_json, export_project_markdown, format_currency};

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use draftboard_domain::{
    Entity, EntityCore, EntityId, FrameworkPayload, FrameworkType, LinkedEntityRef, Project,
    ProjectId, ResearchMetadata,
};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record file did not contain valid JSON for its type
    #[error("Corrupt record: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// Project not found
    #[error("Project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// Entity not found
    #[error("Entity not found: {0}")]
    EntityNotFound(EntityId),

    /// No usable data directory
    #[error("No data directory: set DRAFTBOARD_DATA_DIR or HOME")]
    NoDataDir,
}

/// Fields of a new entity supplied by the caller
///
/// Ids and timestamps are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewEntity {
    /// Owning project
    pub project_id: ProjectId,
    /// Entity name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Framework payload
    pub payload: FrameworkPayload,
    /// Research provenance, when the entity comes from deep research
    pub research_metadata: Option<ResearchMetadata>,
}

/// Partial update to a project; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct ProjectUpdate {
    /// New name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New tag list
    pub tags: Option<Vec<String>>,
}

/// Partial update to an entity; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct EntityUpdate {
    /// New name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
    /// Replacement payload (must keep the entity's framework type)
    pub payload: Option<FrameworkPayload>,
    /// Replacement research metadata
    pub research_metadata: Option<ResearchMetadata>,
}

/// Flat-file JSON store for projects and entities
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open the store at the default data directory
    ///
    /// `$DRAFTBOARD_DATA_DIR` wins when set; otherwise `$HOME/.draftboard`.
    pub fn open_default() -> Result<Self, StoreError> {
        let root = match std::env::var_os("DRAFTBOARD_DATA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => std::env::var_os("HOME")
                .map(|home| PathBuf::from(home).join(".draftboard"))
                .ok_or(StoreError::NoDataDir)?,
        };
        Self::open(root)
    }

    /// Open the store at an explicit data directory, creating it as needed
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(root.join("projects"))?;
        fs::create_dir_all(root.join("entities"))?;
        debug!(root = %root.display(), "opened file store");
        Ok(Self { root })
    }

    /// The store's data directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn project_path(&self, id: ProjectId) -> PathBuf {
        self.root.join("projects").join(format!("{id}.json"))
    }

    fn entity_path(&self, id: EntityId) -> PathBuf {
        self.root.join("entities").join(format!("{id}.json"))
    }

    fn write_project(&self, project: &Project) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(project)?;
        fs::write(self.project_path(project.id), json)?;
        Ok(())
    }

    fn write_entity(&self, entity: &Entity) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(entity)?;
        fs::write(self.entity_path(entity.id()), json)?;
        Ok(())
    }

    // --- projects ---

    /// Create and persist a new project
    pub fn create_project(
        &self,
        name: impl Into<String>,
        description: Option<String>,
        tags: Vec<String>,
    ) -> Result<Project, StoreError> {
        let now = now_iso();
        let project = Project {
            id: ProjectId::new(),
            name: name.into(),
            description,
            tags,
            created_at: now.clone(),
            updated_at: now,
            entities: Vec::new(),
        };
        self.write_project(&project)?;
        debug!(id = %project.id, name = %project.name, "created project");
        Ok(project)
    }

    /// Load a project by id
    pub fn get_project(&self, id: ProjectId) -> Result<Project, StoreError> {
        let path = self.project_path(id);
        if !path.exists() {
            return Err(StoreError::ProjectNotFound(id));
        }
        Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
    }

    /// Apply a partial update to a project, bumping its `updated_at`
    pub fn update_project(
        &self,
        id: ProjectId,
        update: ProjectUpdate,
    ) -> Result<Project, StoreError> {
        let mut project = self.get_project(id)?;
        if let Some(name) = update.name {
            project.name = name;
        }
        if let Some(description) = update.description {
            project.description = Some(description);
        }
        if let Some(tags) = update.tags {
            project.tags = tags;
        }
        project.updated_at = now_iso();
        self.write_project(&project)?;
        Ok(project)
    }

    /// Delete a project and every entity it owns
    pub fn delete_project(&self, id: ProjectId) -> Result<(), StoreError> {
        let project = self.get_project(id)?;
        for entity_ref in &project.entities {
            let path = self.entity_path(entity_ref.id);
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        fs::remove_file(self.project_path(id))?;
        debug!(id = %id, entities = project.entities.len(), "deleted project");
        Ok(())
    }

    /// All projects, most recently updated first
    pub fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        let mut projects = Vec::new();
        for entry in fs::read_dir(self.root.join("projects"))? {
            let path = entry?.path();
            if path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }
            match serde_json::from_str::<Project>(&fs::read_to_string(&path)?) {
                Ok(project) => projects.push(project),
                Err(err) => warn!(path = %path.display(), %err, "skipping unreadable project"),
            }
        }
        // RFC 3339 timestamps in UTC sort lexicographically
        projects.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(projects)
    }

    // --- entities ---

    /// Create an entity and register it on its project
    pub fn create_entity(&self, new: NewEntity) -> Result<Entity, StoreError> {
        let mut project = self.get_project(new.project_id)?;
        let now = now_iso();
        let entity = Entity {
            core: EntityCore {
                id: EntityId::new(),
                project_id: new.project_id,
                name: new.name,
                description: new.description,
                created_at: now.clone(),
                updated_at: now.clone(),
                research_metadata: new.research_metadata,
                linked_entities: Vec::new(),
            },
            payload: new.payload,
        };
        self.write_entity(&entity)?;

        project.entities.push(entity.to_ref());
        project.updated_at = now;
        self.write_project(&project)?;
        debug!(id = %entity.id(), entity_type = %entity.entity_type(), "created entity");
        Ok(entity)
    }

    /// Load an entity by id
    pub fn get_entity(&self, id: EntityId) -> Result<Entity, StoreError> {
        let path = self.entity_path(id);
        if !path.exists() {
            return Err(StoreError::EntityNotFound(id));
        }
        Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
    }

    /// Apply a partial update to an entity, bumping its `updated_at`
    pub fn update_entity(&self, id: EntityId, update: EntityUpdate) -> Result<Entity, StoreError> {
        let mut entity = self.get_entity(id)?;
        if let Some(name) = update.name {
            entity.core.name = name;
        }
        if let Some(description) = update.description {
            entity.core.description = Some(description);
        }
        if let Some(payload) = update.payload {
            entity.payload = payload;
        }
        if let Some(metadata) = update.research_metadata {
            entity.core.research_metadata = Some(metadata);
        }
        entity.core.updated_at = now_iso();
        self.write_entity(&entity)?;
        Ok(entity)
    }

    /// Delete an entity and drop its reference from the owning project
    pub fn delete_entity(&self, id: EntityId) -> Result<(), StoreError> {
        let entity = self.get_entity(id)?;
        fs::remove_file(self.entity_path(id))?;

        // The project may already be gone mid-cascade
        if let Ok(mut project) = self.get_project(entity.project_id()) {
            project.entities.retain(|r| r.id != id);
            project.updated_at = now_iso();
            self.write_project(&project)?;
        }
        Ok(())
    }

    /// All entities of a project, in creation order
    pub fn list_project_entities(&self, project_id: ProjectId) -> Result<Vec<Entity>, StoreError> {
        let project = self.get_project(project_id)?;
        let mut entities = Vec::with_capacity(project.entities.len());
        for entity_ref in &project.entities {
            match self.get_entity(entity_ref.id) {
                Ok(entity) => entities.push(entity),
                Err(StoreError::EntityNotFound(id)) => {
                    warn!(%id, "project references a missing entity");
                }
                Err(err) => return Err(err),
            }
        }
        Ok(entities)
    }

    /// Entities of a project with the given framework type
    pub fn list_entities_by_type(
        &self,
        project_id: ProjectId,
        entity_type: FrameworkType,
    ) -> Result<Vec<Entity>, StoreError> {
        Ok(self
            .list_project_entities(project_id)?
            .into_iter()
            .filter(|e| e.entity_type() == entity_type)
            .collect())
    }

    // --- linking ---

    /// Record a directed link from `source` to `target`
    ///
    /// Linking twice to the same target replaces the relationship label.
    pub fn link_entities(
        &self,
        source: EntityId,
        target: EntityId,
        relationship: Option<String>,
    ) -> Result<Entity, StoreError> {
        let target_entity = self.get_entity(target)?;
        let mut entity = self.get_entity(source)?;
        entity.core.linked_entities.retain(|l| l.id != target);
        entity.core.linked_entities.push(LinkedEntityRef {
            id: target,
            entity_type: target_entity.entity_type(),
            relationship,
        });
        entity.core.updated_at = now_iso();
        self.write_entity(&entity)?;
        Ok(entity)
    }

    /// Remove the link from `source` to `target`, if present
    pub fn unlink_entities(&self, source: EntityId, target: EntityId) -> Result<Entity, StoreError> {
        let mut entity = self.get_entity(source)?;
        entity.core.linked_entities.retain(|l| l.id != target);
        entity.core.updated_at = now_iso();
        self.write_entity(&entity)?;
        Ok(entity)
    }

    /// Load the entities that `source` links to, skipping dangling links
    pub fn get_linked_entities(&self, source: EntityId) -> Result<Vec<Entity>, StoreError> {
        let entity = self.get_entity(source)?;
        let mut linked = Vec::with_capacity(entity.core.linked_entities.len());
        for link in &entity.core.linked_entities {
            match self.get_entity(link.id) {
                Ok(target) => linked.push(target),
                Err(StoreError::EntityNotFound(id)) => {
                    warn!(%id, "dangling entity link");
                }
                Err(err) => return Err(err),
            }
        }
        Ok(linked)
    }
}

fn now_iso() -> String {
    Utc::now().to_rfc3339()
}
